use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub full_name: String,
    pub birth_date: NaiveDate,
}

impl Person {
    pub fn new(full_name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            full_name: full_name.into(),
            birth_date,
        }
    }
}

/// 多人分析用：以 id 識別配對成員
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    #[serde(flatten)]
    pub person: Person,
}

impl Participant {
    pub fn new(id: impl Into<String>, person: Person) -> Self {
        Self {
            id: id.into(),
            person,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberSource {
    LifePath,
    Destiny,
    SoulUrge,
    Personality,
    Maturity,
    Birthday,
    Pinnacle,
    Challenge,
    PersonalCycle,
}

impl fmt::Display for NumberSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LifePath => "lifePath",
            Self::Destiny => "destiny",
            Self::SoulUrge => "soulUrge",
            Self::Personality => "personality",
            Self::Maturity => "maturity",
            Self::Birthday => "birthday",
            Self::Pinnacle => "pinnacle",
            Self::Challenge => "challenge",
            Self::PersonalCycle => "personalCycle",
        };
        f.write_str(name)
    }
}

/// A reduced number tagged with where it came from.
///
/// `value` is 1-9 or a master number; 0 only when a name contributed no
/// letters at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedNumber {
    pub value: u32,
    pub source: NumberSource,
}

impl DerivedNumber {
    pub fn new(value: u32, source: NumberSource) -> Self {
        Self { value, source }
    }

    pub fn is_master(&self) -> bool {
        crate::core::reduction::is_master(self.value)
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Language {
    Ro,
    #[default]
    En,
    Ru,
}

/// Compile-time trilingual text used by the lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrase {
    pub ro: &'static str,
    pub en: &'static str,
    pub ru: &'static str,
}

impl Phrase {
    pub const fn new(ro: &'static str, en: &'static str, ru: &'static str) -> Self {
        Self { ro, en, ru }
    }
}

/// 三語敘述 {ro, en, ru}；引擎不做翻譯，只挑選對應的文本
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub ro: String,
    pub en: String,
    pub ru: String,
}

impl Narrative {
    pub fn new(ro: impl Into<String>, en: impl Into<String>, ru: impl Into<String>) -> Self {
        Self {
            ro: ro.into(),
            en: en.into(),
            ru: ru.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Ro => &self.ro,
            Language::En => &self.en,
            Language::Ru => &self.ru,
        }
    }
}

impl From<Phrase> for Narrative {
    fn from(phrase: Phrase) -> Self {
        Self::new(phrase.ro, phrase.en, phrase.ru)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeList {
    pub ro: Vec<String>,
    pub en: Vec<String>,
    pub ru: Vec<String>,
}

impl NarrativeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_phrases(phrases: &[Phrase]) -> Self {
        let mut list = Self::new();
        for phrase in phrases {
            list.push(*phrase);
        }
        list
    }

    pub fn push(&mut self, item: impl Into<Narrative>) {
        let item = item.into();
        self.ro.push(item.ro);
        self.en.push(item.en);
        self.ru.push(item.ru);
    }

    /// 清單為空時補上預設文本
    pub fn or_default_phrase(mut self, fallback: Phrase) -> Self {
        if self.is_empty() {
            self.push(fallback);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.en.len()
    }

    pub fn is_empty(&self) -> bool {
        self.en.is_empty()
    }

    pub fn get(&self, language: Language) -> &[String] {
        match language {
            Language::Ro => &self.ro,
            Language::En => &self.en,
            Language::Ru => &self.ru,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrative_list_keeps_languages_aligned() {
        let mut list = NarrativeList::new();
        list.push(Phrase::new("unu", "one", "один"));
        list.push(Narrative::new("doi", "two", "два"));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(Language::Ro), ["unu", "doi"]);
        assert_eq!(list.get(Language::Ru), ["один", "два"]);
    }

    #[test]
    fn test_default_phrase_only_when_empty() {
        let fallback = Phrase::new("implicit", "default", "по умолчанию");
        let empty = NarrativeList::new().or_default_phrase(fallback);
        assert_eq!(empty.en, ["default"]);

        let filled = NarrativeList::from_phrases(&[Phrase::new("a", "b", "c")])
            .or_default_phrase(fallback);
        assert_eq!(filled.en, ["b"]);
    }

    #[test]
    fn test_participant_serializes_flat() {
        let participant = Participant::new(
            "p1",
            Person::new("Maria", NaiveDate::from_ymd_opt(1990, 5, 15).unwrap()),
        );
        let json = serde_json::to_value(&participant).unwrap();
        assert_eq!(json["id"], "p1");
        assert_eq!(json["full_name"], "Maria");
        assert_eq!(json["birth_date"], "1990-05-15");
    }
}
