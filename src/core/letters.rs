use crate::core::reduction::reduce;
use crate::domain::model::Phrase;
use crate::domain::ports::LetterSystem;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// 標準系統：A=1 … I=9，之後循環 (J=1, S=1)
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSystem;

impl LetterSystem for StandardSystem {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn value_of(&self, letter: char) -> u32 {
        if !letter.is_ascii_alphabetic() {
            return 0;
        }
        let index = letter.to_ascii_uppercase() as u32 - 'A' as u32;
        index % 9 + 1
    }
}

/// 替代系統：固定表，沒有字母對應到 9
#[derive(Debug, Clone, Copy, Default)]
pub struct AlternateSystem;

impl LetterSystem for AlternateSystem {
    fn name(&self) -> &'static str {
        "alternate"
    }

    fn value_of(&self, letter: char) -> u32 {
        match letter.to_ascii_uppercase() {
            'A' | 'I' | 'J' | 'Q' | 'Y' => 1,
            'B' | 'K' | 'R' => 2,
            'C' | 'G' | 'L' | 'S' => 3,
            'D' | 'M' | 'T' => 4,
            'E' | 'H' | 'N' | 'X' => 5,
            'U' | 'V' | 'W' => 6,
            'O' | 'Z' => 7,
            'F' | 'P' => 8,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LetterSystemKind {
    #[default]
    Standard,
    Alternate,
}

impl LetterSystemKind {
    pub fn system(&self) -> &'static dyn LetterSystem {
        match self {
            Self::Standard => &StandardSystem,
            Self::Alternate => &AlternateSystem,
        }
    }
}

impl std::fmt::Display for LetterSystemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.system().name())
    }
}

impl std::str::FromStr for LetterSystemKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "pythagorean" => Ok(Self::Standard),
            "alternate" | "chaldean" => Ok(Self::Alternate),
            other => Err(format!("Unknown letter system: {}", other)),
        }
    }
}

pub fn get_value(letter: char, system: LetterSystemKind) -> u32 {
    system.system().value_of(letter)
}

/// Upper-cased ASCII letters of `name`; everything else is skipped.
pub fn letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
}

pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter.to_ascii_uppercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundNumber {
    pub compound: u32,
    pub single: u32,
}

impl CompoundNumber {
    fn from_total(total: u32) -> Self {
        Self {
            compound: total,
            single: reduce(total, false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterValue {
    pub letter: char,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateAnalysis {
    pub name_number: CompoundNumber,
    pub birth_number: CompoundNumber,
    pub destiny_number: CompoundNumber,
    pub letter_breakdown: Vec<LetterValue>,
}

pub fn alternate_name_number(name: &str) -> CompoundNumber {
    let total = letters(name).map(|c| AlternateSystem.value_of(c)).sum();
    CompoundNumber::from_total(total)
}

/// 替代系統只看出生日（不看年月）
pub fn alternate_birth_number(birth_date: NaiveDate) -> CompoundNumber {
    CompoundNumber::from_total(birth_date.day())
}

pub fn alternate_analysis(name: &str, birth_date: NaiveDate) -> AlternateAnalysis {
    let name_number = alternate_name_number(name);
    let birth_number = alternate_birth_number(birth_date);
    let destiny_number = CompoundNumber::from_total(name_number.single + birth_number.single);

    let letter_breakdown = letters(name)
        .map(|letter| LetterValue {
            letter,
            value: AlternateSystem.value_of(letter),
        })
        .collect();

    tracing::debug!(
        "Alternate analysis: name {}/{}, birth {}/{}",
        name_number.compound,
        name_number.single,
        birth_number.compound,
        birth_number.single
    );

    AlternateAnalysis {
        name_number,
        birth_number,
        destiny_number,
        letter_breakdown,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundNature {
    Positive,
    Negative,
    Neutral,
}

// Indexed by compound - 10.
static COMPOUND_TABLE: [(CompoundNature, Phrase); 43] = [
    (CompoundNature::Neutral, Phrase::new("Roata Norocului", "Wheel of Fortune", "Колесо Фортуны")), // 10
    (CompoundNature::Negative, Phrase::new("Leul Înmușcat", "The Clenched Fist", "Сжатый Кулак")), // 11
    (CompoundNature::Negative, Phrase::new("Sacrificiul", "The Sacrifice", "Жертва")), // 12
    (CompoundNature::Neutral, Phrase::new("Transformarea", "Transformation", "Трансформация")), // 13
    (CompoundNature::Neutral, Phrase::new("Temperanța", "Temperance", "Умеренность")), // 14
    (CompoundNature::Neutral, Phrase::new("Magicianul", "The Magician", "Маг")), // 15
    (CompoundNature::Negative, Phrase::new("Turnul Căzut", "The Fallen Tower", "Падающая Башня")), // 16
    (CompoundNature::Positive, Phrase::new("Steaua", "The Star", "Звезда")), // 17
    (CompoundNature::Negative, Phrase::new("Luna", "The Moon", "Луна")), // 18
    (CompoundNature::Positive, Phrase::new("Soarele", "The Sun", "Солнце")), // 19
    (CompoundNature::Positive, Phrase::new("Trezirea", "The Awakening", "Пробуждение")), // 20
    (CompoundNature::Positive, Phrase::new("Universul", "The Universe", "Вселенная")), // 21
    (CompoundNature::Negative, Phrase::new("Iluzia", "Illusion", "Иллюзия")), // 22
    (CompoundNature::Positive, Phrase::new("Leul Regal", "The Royal Lion", "Королевский Лев")), // 23
    (CompoundNature::Positive, Phrase::new("Iubirea", "Love", "Любовь")), // 24
    (CompoundNature::Neutral, Phrase::new("Învățăturile", "The Lessons", "Уроки")), // 25
    (CompoundNature::Negative, Phrase::new("Parteneriatele", "Partnerships", "Партнерства")), // 26
    (CompoundNature::Positive, Phrase::new("Sceptrul", "The Scepter", "Скипетр")), // 27
    (CompoundNature::Negative, Phrase::new("Incertitudinea", "Uncertainty", "Неопределенность")), // 28
    (CompoundNature::Negative, Phrase::new("Grațierea", "Grace", "Милость")), // 29
    (CompoundNature::Neutral, Phrase::new("Intelectul", "The Intellect", "Интеллект")), // 30
    (CompoundNature::Positive, Phrase::new("Ermitul", "The Hermit", "Отшельник")), // 31
    (CompoundNature::Positive, Phrase::new("Comunicarea", "Communication", "Коммуникация")), // 32
    (CompoundNature::Positive, Phrase::new("Maestrul Spiritual", "The Spiritual Master", "Духовный Мастер")), // 33
    (CompoundNature::Neutral, Phrase::new("Efortul", "The Effort", "Усилие")), // 34
    (CompoundNature::Positive, Phrase::new("Armonia", "Harmony", "Гармония")), // 35
    (CompoundNature::Positive, Phrase::new("Geniul", "The Genius", "Гений")), // 36
    (CompoundNature::Positive, Phrase::new("Prietenia", "Friendship", "Дружба")), // 37
    (CompoundNature::Negative, Phrase::new("Solitudinea", "Solitude", "Одиночество")), // 38
    (CompoundNature::Neutral, Phrase::new("Viziunea", "The Vision", "Видение")), // 39
    (CompoundNature::Positive, Phrase::new("Organizarea", "Organization", "Организация")), // 40
    (CompoundNature::Positive, Phrase::new("Expresia", "Expression", "Выражение")), // 41
    (CompoundNature::Positive, Phrase::new("Creativitatea", "Creativity", "Творчество")), // 42
    (CompoundNature::Negative, Phrase::new("Transformarea Radicală", "Radical Transformation", "Радикальная Трансформация")), // 43
    (CompoundNature::Negative, Phrase::new("Materialismul", "Materialism", "Материализм")), // 44
    (CompoundNature::Positive, Phrase::new("Cunoașterea", "Knowledge", "Знание")), // 45
    (CompoundNature::Positive, Phrase::new("Abundența", "Abundance", "Изобилие")), // 46
    (CompoundNature::Neutral, Phrase::new("Înțelepciunea", "Wisdom", "Мудрость")), // 47
    (CompoundNature::Positive, Phrase::new("Consilierea", "Counseling", "Консультирование")), // 48
    (CompoundNature::Positive, Phrase::new("Liderul", "The Leader", "Лидер")), // 49
    (CompoundNature::Positive, Phrase::new("Comunicatorul", "The Communicator", "Коммуникатор")), // 50
    (CompoundNature::Neutral, Phrase::new("Războinicul", "The Warrior", "Воин")), // 51
    (CompoundNature::Positive, Phrase::new("Magicianul", "The Magician", "Маг")), // 52
];

/// Nature of a compound number. Defined for 10..=52 only.
pub fn compound_nature(compound: u32) -> Option<CompoundNature> {
    compound_entry(compound).map(|(nature, _)| *nature)
}

pub fn compound_title(compound: u32) -> Option<Phrase> {
    compound_entry(compound).map(|(_, title)| *title)
}

fn compound_entry(compound: u32) -> Option<&'static (CompoundNature, Phrase)> {
    let index = compound.checked_sub(10)?;
    COMPOUND_TABLE.get(index as usize)
}
