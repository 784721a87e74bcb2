use anyhow::Context;
use clap::Parser;
use numerology_engine::config::cli::{participants, Command};
use numerology_engine::domain::model::Person;
use numerology_engine::report::{self, OutputFormat};
use numerology_engine::utils::{logger, validation::Validate};
use numerology_engine::{CliConfig, Language, NumerologyEngine, Result};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting numerology CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let format = config.format;
    let language = config.language;
    let engine = NumerologyEngine::new(config);

    match run(&engine, format, language) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output).context("Failed to write report to stdout")?;
            tracing::info!("✅ Done");
        }
        Err(e) => {
            tracing::error!(
                "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn run(
    engine: &NumerologyEngine<CliConfig>,
    format: OutputFormat,
    language: Language,
) -> Result<String> {
    match &engine.config().command {
        Command::Profile { name, birth_date } => {
            let profile = engine.profile(&Person::new(name.as_str(), *birth_date));
            report::render(&profile, format, language)
        }
        Command::Compat {
            name1,
            birth_date1,
            name2,
            birth_date2,
            ..
        } => {
            let first = Person::new(name1.as_str(), *birth_date1);
            let second = Person::new(name2.as_str(), *birth_date2);
            report::render(&engine.compatibility(&first, &second), format, language)
        }
        Command::Group { people, .. } => {
            let analysis = engine.analyze_group(&participants(people))?;
            report::render(&analysis, format, language)
        }
        Command::Compare { people } => {
            let comparison = engine.compare_group(&participants(people))?;
            report::render(&comparison, format, language)
        }
        Command::Optimize { name, .. } => {
            let suggestions = engine.optimize_name(name);
            report::render(suggestions.as_slice(), format, language)
        }
    }
}
