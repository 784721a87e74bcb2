use crate::core::compatibility::RelationshipType;
use crate::core::group::GroupType;
use crate::core::letters::LetterSystemKind;
use crate::domain::model::{Language, Participant, Person};
use crate::domain::ports::ConfigProvider;
use crate::report::OutputFormat;
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::{parse_birth_date, validate_target_numbers, Validate};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "numerology")]
#[command(about = "Numerology calculations from a full name and a birth date")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    #[arg(long, global = true, value_enum, default_value_t = Language::En)]
    pub language: Language,

    #[arg(long, global = true, value_enum, default_value_t = LetterSystemKind::Standard)]
    pub system: LetterSystemKind,

    /// Date used for personal and universal cycles (defaults to today)
    #[arg(long, global = true, value_parser = parse_date_arg)]
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Full numerology profile for one person
    Profile {
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = parse_date_arg)]
        birth_date: NaiveDate,
    },
    /// Compatibility between two people
    Compat {
        #[arg(long)]
        name1: String,
        #[arg(long, value_parser = parse_date_arg)]
        birth_date1: NaiveDate,
        #[arg(long)]
        name2: String,
        #[arg(long, value_parser = parse_date_arg)]
        birth_date2: NaiveDate,
        #[arg(long, value_enum, default_value_t = RelationshipType::Generic)]
        relationship: RelationshipType,
    },
    /// Group analysis (at least 2 people)
    Group {
        /// Repeatable, formatted as "Full Name@YYYY-MM-DD"
        #[arg(long = "person", value_parser = parse_person_arg, required = true)]
        people: Vec<Person>,
        #[arg(long, value_enum, default_value_t = GroupType::General)]
        group_type: GroupType,
    },
    /// All-pairs comparison (at least 3 people)
    Compare {
        #[arg(long = "person", value_parser = parse_person_arg, required = true)]
        people: Vec<Person>,
    },
    /// Suggest name variants that move the destiny number towards targets
    Optimize {
        #[arg(long)]
        name: String,
        #[arg(long, value_delimiter = ',', default_values_t = [1u32, 8])]
        targets: Vec<u32>,
    },
}

fn parse_date_arg(value: &str) -> Result<NaiveDate> {
    parse_birth_date("date", value)
}

/// "Full Name@YYYY-MM-DD"
pub fn parse_person_arg(value: &str) -> Result<Person> {
    let (name, date) = value.rsplit_once('@').ok_or_else(|| {
        NumerologyError::invalid_input("person", value, "Expected \"Full Name@YYYY-MM-DD\"")
    })?;
    Ok(Person::new(name.trim(), parse_birth_date("person.birth_date", date)?))
}

/// 依 --person 順序編號 p1, p2, ...；同名的人也不會共用 id
pub fn participants(people: &[Person]) -> Vec<Participant> {
    people
        .iter()
        .enumerate()
        .map(|(index, p)| Participant::new(format!("p{}", index + 1), p.clone()))
        .collect()
}

impl ConfigProvider for CliConfig {
    fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }

    fn letter_system(&self) -> LetterSystemKind {
        self.system
    }

    fn relationship(&self) -> RelationshipType {
        match &self.command {
            Command::Compat { relationship, .. } => *relationship,
            _ => RelationshipType::default(),
        }
    }

    fn group_type(&self) -> GroupType {
        match &self.command {
            Command::Group { group_type, .. } => *group_type,
            _ => GroupType::default(),
        }
    }

    fn target_numbers(&self) -> &[u32] {
        match &self.command {
            Command::Optimize { targets, .. } => targets.as_slice(),
            _ => &[],
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_target_numbers("targets", self.target_numbers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile_command() {
        let config = CliConfig::try_parse_from([
            "numerology",
            "profile",
            "--name",
            "Maria Popescu",
            "--birth-date",
            "1990-05-15",
            "--format",
            "csv",
        ])
        .unwrap();

        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.system, LetterSystemKind::Standard);
        assert!(matches!(config.command, Command::Profile { .. }));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let result = CliConfig::try_parse_from([
            "numerology",
            "profile",
            "--name",
            "Maria",
            "--birth-date",
            "1990-13-01",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_group_people_and_type() {
        let config = CliConfig::try_parse_from([
            "numerology",
            "group",
            "--person",
            "Maria Popescu@1990-05-15",
            "--person",
            "Ion Ionescu@1985-11-02",
            "--group-type",
            "team",
        ])
        .unwrap();

        assert_eq!(config.group_type(), GroupType::Team);
        match &config.command {
            Command::Group { people, .. } => {
                assert_eq!(people.len(), 2);
                let participants = participants(people);
                assert_eq!(participants[1].id, "p2");
                assert_eq!(participants[1].person.full_name, "Ion Ionescu");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_same_name_participants_get_distinct_ids() {
        let config = CliConfig::try_parse_from([
            "numerology",
            "compare",
            "--person",
            "Ana Pop@1990-01-01",
            "--person",
            "Ana Pop@1992-02-02",
            "--person",
            "Ion Ionescu@1985-11-02",
        ])
        .unwrap();

        let Command::Compare { people } = &config.command else {
            panic!("unexpected command {:?}", config.command);
        };
        let comparison = crate::core::group::compare_multiple_people(&participants(people)).unwrap();
        let first = &comparison.pairs[0];
        assert_eq!((first.person1_id.as_str(), first.person2_id.as_str()), ("p1", "p2"));
    }

    #[test]
    fn test_optimize_targets_validated() {
        let config = CliConfig::try_parse_from([
            "numerology", "optimize", "--name", "Maria", "--targets", "3,10",
        ])
        .unwrap();
        assert_eq!(config.target_numbers(), [3, 10]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_person_arg() {
        let person = parse_person_arg("Ana Maria@2000-07-07").unwrap();
        assert_eq!(person.full_name, "Ana Maria");
        assert!(parse_person_arg("Ana Maria 2000-07-07").is_err());
    }
}
