//! Text renderings of engine results: JSON for machines, CSV tables for spreadsheets.

use crate::core::compatibility::CompatibilityReport;
use crate::core::engine::Profile;
use crate::core::group::{GroupAnalysis, GroupComparison, PairCompatibility};
use crate::core::optimizer::NameSuggestion;
use crate::domain::model::{DerivedNumber, Language};
use crate::utils::error::{NumerologyError, Result};
use serde::{Deserialize, Serialize};
use std::io;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Indented JSON
    #[default]
    Pretty,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "csv" => Ok(Self::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

pub trait CsvReport {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>, language: Language) -> Result<()>;
}

pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

pub fn to_csv<T: CsvReport + ?Sized>(value: &T, language: Language) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    value.write_csv(&mut writer, language)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| NumerologyError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn render<T: Serialize + CsvReport + ?Sized>(
    value: &T,
    format: OutputFormat,
    language: Language,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(value, false),
        OutputFormat::Pretty => to_json(value, true),
        OutputFormat::Csv => to_csv(value, language),
    }
}

#[derive(Debug, Serialize)]
struct NumberRow<'a> {
    person: &'a str,
    number: &'a str,
    value: u32,
    master: bool,
}

impl<'a> NumberRow<'a> {
    fn derived(person: &'a str, number: &'a str, derived: DerivedNumber) -> Self {
        Self {
            person,
            number,
            value: derived.value,
            master: derived.is_master(),
        }
    }

    fn plain(person: &'a str, number: &'a str, value: u32) -> Self {
        Self {
            person,
            number,
            value,
            master: false,
        }
    }
}

fn profile_rows(profile: &Profile) -> [NumberRow<'_>; 13] {
    let person = profile.person.full_name.as_str();
    let core = &profile.core;
    [
        NumberRow::derived(person, "life_path", core.life_path),
        NumberRow::derived(person, "destiny", core.destiny),
        NumberRow::derived(person, "soul_urge", core.soul_urge),
        NumberRow::derived(person, "personality", core.personality),
        NumberRow::derived(person, "maturity", core.maturity),
        NumberRow::derived(person, "birthday", core.birthday),
        NumberRow::plain(person, "balance", core.balance),
        NumberRow::plain(person, "personal_year", profile.personal_cycles.year),
        NumberRow::plain(person, "personal_month", profile.personal_cycles.month),
        NumberRow::plain(person, "personal_day", profile.personal_cycles.day),
        NumberRow::plain(person, "current_pinnacle", profile.current_pinnacle.into()),
        NumberRow::plain(person, "current_challenge", profile.current_challenge),
        NumberRow::plain(person, "karmic_path", profile.karmic.path_number),
    ]
}

impl CsvReport for Profile {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>, _language: Language) -> Result<()> {
        for row in profile_rows(self) {
            writer.serialize(row)?;
        }
        Ok(())
    }
}

impl CsvReport for [Profile] {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>, language: Language) -> Result<()> {
        for profile in self {
            profile.write_csv(writer, language)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct AspectRow<'a> {
    aspect: &'a str,
    person1: u32,
    person2: u32,
    score: u32,
}

impl CsvReport for CompatibilityReport {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>, _language: Language) -> Result<()> {
        let a = &self.aspects;
        for (aspect, score) in [
            ("life_path", a.life_path),
            ("destiny", a.destiny),
            ("soul_urge", a.soul_urge),
        ] {
            writer.serialize(AspectRow {
                aspect,
                person1: score.person1,
                person2: score.person2,
                score: score.score,
            })?;
        }
        writer.serialize(AspectRow {
            aspect: "overall",
            person1: 0,
            person2: 0,
            score: self.overall_score,
        })?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct PairRow<'a> {
    person1: &'a str,
    person2: &'a str,
    overall: u32,
    life_path: u32,
    destiny: u32,
    soul_urge: u32,
}

impl<'a> From<&'a PairCompatibility> for PairRow<'a> {
    fn from(pair: &'a PairCompatibility) -> Self {
        Self {
            person1: &pair.person1_id,
            person2: &pair.person2_id,
            overall: pair.overall_score,
            life_path: pair.life_path.score,
            destiny: pair.destiny.score,
            soul_urge: pair.soul_urge.score,
        }
    }
}

impl CsvReport for [PairCompatibility] {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>, _language: Language) -> Result<()> {
        for pair in self {
            writer.serialize(PairRow::from(pair))?;
        }
        Ok(())
    }
}

impl CsvReport for GroupComparison {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>, language: Language) -> Result<()> {
        self.pairs.write_csv(writer, language)
    }
}

#[derive(Debug, Serialize)]
struct DominantRow<'a> {
    number_type: &'a str,
    rank: usize,
    number: u32,
}

impl CsvReport for GroupAnalysis {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>, _language: Language) -> Result<()> {
        let d = &self.dominant_numbers;
        for (number_type, values) in [
            ("life_path", &d.life_path),
            ("destiny", &d.destiny),
            ("soul_urge", &d.soul_urge),
        ] {
            for (index, &number) in values.iter().enumerate() {
                writer.serialize(DominantRow {
                    number_type,
                    rank: index + 1,
                    number,
                })?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SuggestionRow<'a> {
    name: &'a str,
    destiny: u32,
    score: i32,
    reason: &'a str,
}

impl CsvReport for [NameSuggestion] {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>, language: Language) -> Result<()> {
        for suggestion in self {
            writer.serialize(SuggestionRow {
                name: &suggestion.name,
                destiny: suggestion.destiny,
                score: suggestion.score,
                reason: suggestion.reason.get(language),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compatibility::{analyze_compatibility, RelationshipType};
    use crate::core::group::compare_multiple_people;
    use crate::core::optimizer::suggest_names;
    use crate::domain::model::{Participant, Person};
    use chrono::NaiveDate;

    fn person(name: &str, y: i32, m: u32, d: u32) -> Person {
        Person::new(name, NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_pair_table_csv() {
        let people = vec![
            Participant::new("maria", person("Maria Popescu", 1990, 5, 15)),
            Participant::new("ion", person("Ion Ionescu", 1985, 11, 2)),
            Participant::new("elena", person("Elena Vasile", 1978, 3, 28)),
        ];
        let comparison = compare_multiple_people(&people).unwrap();
        let csv = render(&comparison, OutputFormat::Csv, Language::En).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4); // header + 3 pairs
        assert_eq!(lines[0], "person1,person2,overall,life_path,destiny,soul_urge");
        assert!(lines[1].starts_with("maria,ion,"));
    }

    #[test]
    fn test_compatibility_json_formats() {
        let report = analyze_compatibility(
            &person("Maria Popescu", 1990, 5, 15),
            &person("Ion Ionescu", 1985, 11, 2),
            RelationshipType::Romantic,
        );
        let compact = render(&report, OutputFormat::Json, Language::En).unwrap();
        assert!(!compact.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(value["relationship"], "romantic");
        assert_eq!(value["overall_score"], report.overall_score);

        let pretty = render(&report, OutputFormat::Pretty, Language::En).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_suggestion_csv_uses_language() {
        let suggestions = suggest_names("Maria", &[7]);
        let ro = to_csv(suggestions.as_slice(), Language::Ro).unwrap();
        assert!(ro.contains("Potrivire cu numărul țintă dorit"));
        let en = to_csv(suggestions.as_slice(), Language::En).unwrap();
        assert!(en.starts_with("name,destiny,score,reason"));
    }

    #[test]
    fn test_profile_table_csv_has_person_column() {
        use crate::config::EngineSettings;
        use crate::core::engine::NumerologyEngine;

        let engine = NumerologyEngine::new(EngineSettings {
            reference_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            ..EngineSettings::default()
        });
        let profiles = vec![
            engine.profile(&person("Maria Popescu", 1990, 5, 15)),
            engine.profile(&person("Ion Ionescu", 1985, 11, 2)),
        ];
        let csv = render(profiles.as_slice(), OutputFormat::Csv, Language::En).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "person,number,value,master");
        assert_eq!(lines.len(), 1 + 2 * 13); // one header for both people
        assert_eq!(lines[1], "Maria Popescu,life_path,3,false");
        assert_eq!(lines[2], "Maria Popescu,destiny,11,true");
        assert_eq!(lines[14], "Ion Ionescu,life_path,9,false");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
