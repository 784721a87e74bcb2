use crate::core::compatibility::RelationshipType;
use crate::core::engine::NumerologyEngine;
use crate::core::group::{GroupType, MIN_COMPARISON_SIZE, MIN_GROUP_SIZE};
use crate::core::letters::LetterSystemKind;
use crate::domain::model::{Language, Participant, Person};
use crate::domain::ports::ConfigProvider;
use crate::report::{self, OutputFormat};
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::{
    parse_birth_date, validate_minimum_participants, validate_non_empty_string,
    validate_required_field, validate_target_numbers, Validate,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub engine: EngineSection,
    pub optimizer: Option<OptimizerSection>,
    pub output: Option<OutputSection>,
    #[serde(default)]
    pub people: Vec<PersonEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Profile,
    Compat,
    Group,
    Compare,
    Optimize,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Profile => "profile",
            Self::Compat => "compat",
            Self::Group => "group",
            Self::Compare => "compare",
            Self::Optimize => "optimize",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSection {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub mode: Operation,
    pub reference_date: Option<NaiveDate>,
    #[serde(default)]
    pub letter_system: LetterSystemKind,
    #[serde(default)]
    pub relationship: RelationshipType,
    #[serde(default)]
    pub group_type: GroupType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerSection {
    /// 未指定時使用第一位成員的姓名
    pub name: Option<String>,
    #[serde(default)]
    pub targets: Vec<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
    pub language: Option<Language>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonEntry {
    pub id: Option<String>,
    pub name: String,
    pub birth_date: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NumerologyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NumerologyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PERSON_NAME})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NumerologyError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("engine.name", &self.engine.name)?;
        validate_target_numbers("optimizer.targets", self.target_numbers())?;

        for (index, entry) in self.people.iter().enumerate() {
            validate_non_empty_string(&format!("people[{}].name", index), &entry.name)?;
            parse_birth_date(&format!("people[{}].birth_date", index), &entry.birth_date)?;
        }

        match self.engine.mode {
            Operation::Profile => validate_minimum_participants(self.people.len(), 1)?,
            Operation::Compat | Operation::Group => {
                validate_minimum_participants(self.people.len(), MIN_GROUP_SIZE)?
            }
            Operation::Compare => {
                validate_minimum_participants(self.people.len(), MIN_COMPARISON_SIZE)?
            }
            Operation::Optimize => {
                let name = self.optimize_name();
                validate_required_field("optimizer.name", &name)?;
            }
        }

        Ok(())
    }

    /// 成員清單；未指定 id 時依序編號 p1, p2, ...
    pub fn participants(&self) -> Result<Vec<Participant>> {
        self.people
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let birth_date =
                    parse_birth_date(&format!("people[{}].birth_date", index), &entry.birth_date)?;
                let id = entry
                    .id
                    .clone()
                    .unwrap_or_else(|| format!("p{}", index + 1));
                Ok(Participant::new(id, Person::new(entry.name.trim(), birth_date)))
            })
            .collect()
    }

    pub fn optimize_name(&self) -> Option<String> {
        self.optimizer
            .as_ref()
            .and_then(|o| o.name.clone())
            .or_else(|| self.people.first().map(|p| p.name.clone()))
    }

    pub fn output_format(&self) -> OutputFormat {
        let output = self.output.clone().unwrap_or_default();
        match (output.format, output.pretty) {
            (Some(OutputFormat::Json), Some(true)) => OutputFormat::Pretty,
            (Some(OutputFormat::Pretty), Some(false)) => OutputFormat::Json,
            (Some(format), _) => format,
            (None, Some(false)) => OutputFormat::Json,
            (None, _) => OutputFormat::Pretty,
        }
    }

    pub fn language(&self) -> Language {
        self.output
            .as_ref()
            .and_then(|o| o.language)
            .unwrap_or_default()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }
}

impl NumerologyEngine<TomlConfig> {
    /// Runs the configured mode and renders only the report text.
    pub fn run(&self, format: OutputFormat) -> Result<String> {
        let config = self.config();
        let language = config.language();
        let people = config.participants()?;

        tracing::info!("⚙️ Running {} reading {:?}", config.engine.mode, config.engine.name);

        match config.engine.mode {
            Operation::Profile => {
                let profiles: Vec<_> = people.iter().map(|p| self.profile(&p.person)).collect();
                match profiles.as_slice() {
                    [single] => report::render(single, format, language),
                    all => report::render(all, format, language),
                }
            }
            Operation::Compat => match people.as_slice() {
                [first, second, ..] => {
                    let compatibility = self.compatibility(&first.person, &second.person);
                    report::render(&compatibility, format, language)
                }
                _ => Err(NumerologyError::InsufficientParticipants {
                    required: MIN_GROUP_SIZE,
                    actual: people.len(),
                }),
            },
            Operation::Group => report::render(&self.analyze_group(&people)?, format, language),
            Operation::Compare => report::render(&self.compare_group(&people)?, format, language),
            Operation::Optimize => {
                let name = config.optimize_name().unwrap_or_default();
                report::render(self.optimize_name(&name).as_slice(), format, language)
            }
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn reference_date(&self) -> Option<NaiveDate> {
        self.engine.reference_date
    }

    fn letter_system(&self) -> LetterSystemKind {
        self.engine.letter_system
    }

    fn relationship(&self) -> RelationshipType {
        self.engine.relationship
    }

    fn group_type(&self) -> GroupType {
        self.engine.group_type
    }

    fn target_numbers(&self) -> &[u32] {
        self.optimizer
            .as_ref()
            .map(|o| o.targets.as_slice())
            .unwrap_or(&[])
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FAMILY: &str = r#"
[engine]
name = "family-reading"
mode = "group"
reference_date = "2024-06-01"
letter_system = "alternate"
relationship = "family"
group_type = "family"

[optimizer]
targets = [1, 8, 11]

[output]
format = "csv"
language = "ro"

[[people]]
id = "mama"
name = "Maria Popescu"
birth_date = "1990-05-15"

[[people]]
name = "Ion Ionescu"
birth_date = "1985-11-02"
"#;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(FAMILY).unwrap();

        assert_eq!(config.engine.name, "family-reading");
        assert_eq!(config.engine.mode, Operation::Group);
        assert_eq!(config.letter_system(), LetterSystemKind::Alternate);
        assert_eq!(config.relationship(), RelationshipType::Family);
        assert_eq!(config.group_type(), GroupType::Family);
        assert_eq!(config.target_numbers(), [1, 8, 11]);
        assert_eq!(config.output_format(), OutputFormat::Csv);
        assert_eq!(config.language(), Language::Ro);
        assert_eq!(config.reference_date(), NaiveDate::from_ymd_opt(2024, 6, 1));
        assert!(config.validate().is_ok());

        let participants = config.participants().unwrap();
        assert_eq!(participants[0].id, "mama");
        assert_eq!(participants[1].id, "p2");
    }

    #[test]
    fn test_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[engine]
name = "solo"

[[people]]
name = "Ana"
birth_date = "2000-07-07"
"#,
        )
        .unwrap();

        assert_eq!(config.engine.mode, Operation::Profile);
        assert_eq!(config.letter_system(), LetterSystemKind::Standard);
        assert_eq!(config.relationship(), RelationshipType::Generic);
        assert!(config.target_numbers().is_empty());
        assert_eq!(config.output_format(), OutputFormat::Pretty);
        assert_eq!(config.optimize_name().as_deref(), Some("Ana"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NUMEROLOGY_TEST_PERSON", "Elena Vasile");

        let config = TomlConfig::from_toml_str(
            r#"
[engine]
name = "env"

[[people]]
name = "${NUMEROLOGY_TEST_PERSON}"
birth_date = "1978-03-28"
"#,
        )
        .unwrap();
        assert_eq!(config.people[0].name, "Elena Vasile");

        std::env::remove_var("NUMEROLOGY_TEST_PERSON");
    }

    #[test]
    fn test_config_validation() {
        let bad_date = TomlConfig::from_toml_str(
            r#"
[engine]
name = "bad"

[[people]]
name = "Ana"
birth_date = "2000-02-30"
"#,
        )
        .unwrap();
        assert!(matches!(
            bad_date.validate(),
            Err(NumerologyError::InvalidInput { .. })
        ));

        let too_few = TomlConfig::from_toml_str(
            r#"
[engine]
name = "few"
mode = "compare"

[[people]]
name = "Ana"
birth_date = "2000-07-07"
"#,
        )
        .unwrap();
        assert!(matches!(
            too_few.validate(),
            Err(NumerologyError::InsufficientParticipants { required: 3, actual: 1 })
        ));

        let bad_target = TomlConfig::from_toml_str(
            r#"
[engine]
name = "targets"
mode = "optimize"

[optimizer]
name = "Ana"
targets = [10]
"#,
        )
        .unwrap();
        assert!(bad_target.validate().is_err());
    }

    #[test]
    fn test_unknown_letter_system_is_parse_error() {
        let result = TomlConfig::from_toml_str(
            r#"
[engine]
name = "x"
letter_system = "kabbalah"
"#,
        );
        assert!(matches!(
            result,
            Err(NumerologyError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(FAMILY.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.engine.name, "family-reading");
        assert_eq!(config.people.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            TomlConfig::from_file("/definitely/not/here.toml"),
            Err(NumerologyError::IoError(_))
        ));
    }

    fn household(mode: &str, format: &str) -> TomlConfig {
        TomlConfig::from_toml_str(&format!(
            r#"
[engine]
name = "household"
mode = "{}"
reference_date = "2024-06-01"

[output]
format = "{}"

[[people]]
name = "Maria Popescu"
birth_date = "1990-05-15"

[[people]]
name = "Ion Ionescu"
birth_date = "1985-11-02"

[[people]]
name = "Elena Vasile"
birth_date = "1978-03-28"
"#,
            mode, format
        ))
        .unwrap()
    }

    #[test]
    fn test_run_output_is_only_the_report() {
        let config = household("compare", "json");
        let format = config.output_format();
        let output = NumerologyEngine::new(config).run(format).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["pairs"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["pairs"][0]["person1_id"], "p1");
    }

    #[test]
    fn test_run_multi_person_profile_honours_csv() {
        let config = household("profile", "csv");
        let format = config.output_format();
        let output = NumerologyEngine::new(config).run(format).unwrap();

        assert!(output.starts_with("person,number,value,master"));
        assert!(output.contains("Elena Vasile,life_path,11,true"));
        assert!(!output.trim_start().starts_with('['));
    }
}
