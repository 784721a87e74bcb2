use anyhow::Context;
use clap::Parser;
use numerology_engine::config::toml_config::{Operation, TomlConfig};
use numerology_engine::domain::ports::ConfigProvider;
use numerology_engine::report::OutputFormat;
use numerology_engine::utils::{logger, validation::Validate};
use numerology_engine::NumerologyEngine;

#[derive(Parser)]
#[command(name = "toml-numerology")]
#[command(about = "Numerology reports driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "numerology.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Override the output format from config
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Dry run - show what would be calculated without executing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based numerology tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    let format = args.format.unwrap_or_else(|| config.output_format());
    // stdout carries only the report
    display_config_summary(&config, format, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No calculations will run");
        perform_dry_run(&config);
        return Ok(());
    }

    let output_path = config.output_path().map(str::to_string);
    let engine = NumerologyEngine::new(config);

    match engine.run(format) {
        Ok(output) => match output_path {
            Some(path) => {
                std::fs::write(&path, output)
                    .with_context(|| format!("Failed to write report to {}", path))?;
                tracing::info!("📁 Output saved to: {}", path);
                eprintln!("📁 Output saved to: {}", path);
            }
            None => println!("{}", output),
        },
        Err(e) => {
            tracing::error!(
                "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
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

fn display_config_summary(config: &TomlConfig, format: OutputFormat, args: &Args) {
    eprintln!("📋 Configuration Summary:");
    eprintln!("  Reading: {}", config.engine.name);
    if let Some(description) = &config.engine.description {
        eprintln!("  Description: {}", description);
    }
    eprintln!("  Mode: {}", config.engine.mode);
    eprintln!("  Letter system: {}", config.letter_system());
    eprintln!("  People: {}", config.people.len());
    eprintln!("  Format: {:?}", format);

    if let Some(path) = config.output_path() {
        eprintln!("  Output: {}", path);
    }

    if args.dry_run {
        eprintln!("  🔍 DRY RUN MODE ENABLED");
    }

    eprintln!();
}

fn perform_dry_run(config: &TomlConfig) {
    eprintln!("🔍 Dry Run Analysis:");
    eprintln!();

    eprintln!("👥 People:");
    for (index, person) in config.people.iter().enumerate() {
        let id = person.id.as_deref().unwrap_or("(auto)");
        eprintln!("  {}. {} [{}] born {}", index + 1, person.name, id, person.birth_date);
    }

    eprintln!();
    eprintln!("⚙️ Calculation:");
    match config.engine.mode {
        Operation::Profile => eprintln!("  🔢 Full profile for each person"),
        Operation::Compat => eprintln!(
            "  💞 {} compatibility between the first two people",
            config.relationship()
        ),
        Operation::Group => eprintln!("  👥 {} group analysis", config.group_type()),
        Operation::Compare => {
            let n = config.people.len();
            eprintln!("  👥 All-pairs comparison ({} pairs)", n * n.saturating_sub(1) / 2);
        }
        Operation::Optimize => eprintln!(
            "  ✨ Name variants for {:?} towards {:?}",
            config.optimize_name().unwrap_or_default(),
            config.target_numbers()
        ),
    }

    match config.reference_date() {
        Some(date) => eprintln!("  📅 Reference date: {}", date),
        None => eprintln!("  📅 Reference date: today"),
    }

    eprintln!();
    eprintln!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
