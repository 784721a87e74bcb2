use crate::core::letters::{is_vowel, letters, StandardSystem};
use crate::core::reduction::{digit_sum, is_master, reduce};
use crate::domain::model::{DerivedNumber, Narrative, NumberSource};
use crate::domain::ports::LetterSystem;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 出生日期三個分量，各自約化（不保留主數）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthComponents {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl BirthComponents {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: reduce(date.day(), false),
            month: reduce(date.month(), false),
            year: reduce(year_digit_sum(date.year()), false),
        }
    }

    /// Pre-reduction life path total, inspected for karmic debt.
    pub fn total(&self) -> u32 {
        self.day + self.month + self.year
    }
}

fn year_digit_sum(year: i32) -> u32 {
    digit_sum(year.unsigned_abs())
}

/// Raw letter sums of a name, before any reduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSums {
    pub total: u32,
    pub vowels: u32,
    pub consonants: u32,
}

pub fn name_sums(name: &str, system: &dyn LetterSystem) -> NameSums {
    letters(name).fold(NameSums::default(), |mut sums, letter| {
        let value = system.value_of(letter);
        sums.total += value;
        if is_vowel(letter) {
            sums.vowels += value;
        } else {
            sums.consonants += value;
        }
        sums
    })
}

pub fn life_path_number(birth_date: NaiveDate) -> u32 {
    let components = BirthComponents::from_date(birth_date);
    let life_path = reduce(components.total(), true);
    tracing::debug!(
        "Life path: {} + {} + {} = {} -> {}",
        components.day,
        components.month,
        components.year,
        components.total(),
        life_path
    );
    life_path
}

pub fn destiny_number(name: &str) -> u32 {
    destiny_number_with(name, &StandardSystem)
}

pub fn soul_urge_number(name: &str) -> u32 {
    soul_urge_number_with(name, &StandardSystem)
}

pub fn personality_number(name: &str) -> u32 {
    personality_number_with(name, &StandardSystem)
}

pub fn destiny_number_with(name: &str, system: &dyn LetterSystem) -> u32 {
    reduce(name_sums(name, system).total, true)
}

pub fn soul_urge_number_with(name: &str, system: &dyn LetterSystem) -> u32 {
    reduce(name_sums(name, system).vowels, true)
}

pub fn personality_number_with(name: &str, system: &dyn LetterSystem) -> u32 {
    reduce(name_sums(name, system).consonants, true)
}

pub fn maturity_number(life_path: u32, destiny: u32) -> u32 {
    reduce(life_path + destiny, true)
}

/// 0 means inner desire and outer expression are in balance.
pub fn balance_number(soul_urge: u32, personality: u32) -> u32 {
    reduce(soul_urge.abs_diff(personality), false)
}

pub fn birthday_number(birth_date: NaiveDate) -> u32 {
    reduce(birth_date.day(), true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreNumbers {
    pub life_path: DerivedNumber,
    pub destiny: DerivedNumber,
    pub soul_urge: DerivedNumber,
    pub personality: DerivedNumber,
    pub maturity: DerivedNumber,
    pub birthday: DerivedNumber,
    pub balance: u32,
}

impl CoreNumbers {
    pub fn calculate(name: &str, birth_date: NaiveDate, system: &dyn LetterSystem) -> Self {
        let sums = name_sums(name, system);
        let life_path = life_path_number(birth_date);
        let destiny = reduce(sums.total, true);
        let soul_urge = reduce(sums.vowels, true);
        let personality = reduce(sums.consonants, true);

        tracing::debug!(
            "Name sums ({}): total={} vowels={} consonants={}",
            system.name(),
            sums.total,
            sums.vowels,
            sums.consonants
        );

        Self {
            life_path: DerivedNumber::new(life_path, NumberSource::LifePath),
            destiny: DerivedNumber::new(destiny, NumberSource::Destiny),
            soul_urge: DerivedNumber::new(soul_urge, NumberSource::SoulUrge),
            personality: DerivedNumber::new(personality, NumberSource::Personality),
            maturity: DerivedNumber::new(
                maturity_number(life_path, destiny),
                NumberSource::Maturity,
            ),
            birthday: DerivedNumber::new(birthday_number(birth_date), NumberSource::Birthday),
            balance: balance_number(soul_urge, personality),
        }
    }
}

pub fn personal_year_number(birth_date: NaiveDate, year: i32) -> u32 {
    let birth = BirthComponents::from_date(birth_date);
    let reference_year = reduce(year_digit_sum(year), false);
    reduce(birth.day + birth.month + reference_year, false)
}

pub fn personal_month_number(birth_date: NaiveDate, year: i32, month: u32) -> u32 {
    let personal_year = personal_year_number(birth_date, year);
    reduce(personal_year + reduce(month, false), false)
}

pub fn personal_day_number(birth_date: NaiveDate, reference: NaiveDate) -> u32 {
    let personal_month = personal_month_number(birth_date, reference.year(), reference.month());
    reduce(personal_month + reduce(reference.day(), false), false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalCycles {
    pub reference_date: NaiveDate,
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl PersonalCycles {
    pub fn calculate(birth_date: NaiveDate, reference: NaiveDate) -> Self {
        Self {
            reference_date: reference,
            year: personal_year_number(birth_date, reference.year()),
            month: personal_month_number(birth_date, reference.year(), reference.month()),
            day: personal_day_number(birth_date, reference),
        }
    }
}

pub fn universal_year_number(year: i32) -> u32 {
    reduce(year_digit_sum(year), false)
}

pub fn universal_month_number(year: i32, month: u32) -> u32 {
    reduce(universal_year_number(year) + month, false)
}

pub fn universal_day_number(date: NaiveDate) -> u32 {
    reduce(date.day() + date.month() + year_digit_sum(date.year()), false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversalCycles {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl UniversalCycles {
    pub fn calculate(reference: NaiveDate) -> Self {
        Self {
            year: universal_year_number(reference.year()),
            month: universal_month_number(reference.year(), reference.month()),
            day: universal_day_number(reference),
        }
    }
}

/// Up to three letter values by frequency (desc), ties broken by value (asc).
pub fn hidden_passions(name: &str) -> Vec<u32> {
    let counts = value_counts(name);
    let mut ranked: Vec<(u32, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.into_iter().take(3).map(|(value, _)| value).collect()
}

fn value_counts(name: &str) -> BTreeMap<u32, u32> {
    let mut counts = BTreeMap::new();
    for letter in letters(name) {
        *counts.entry(StandardSystem.value_of(letter)).or_insert(0) += 1;
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterDistribution {
    pub letter_counts: BTreeMap<char, u32>,
    pub number_counts: BTreeMap<u32, u32>,
    pub vowels: u32,
    pub consonants: u32,
    pub most_frequent_number: u32,
    pub least_frequent_number: u32,
    pub missing_numbers: Vec<u32>,
}

pub fn letter_distribution(name: &str) -> LetterDistribution {
    let mut letter_counts = BTreeMap::new();
    let mut vowels = 0;
    let mut consonants = 0;
    for letter in letters(name) {
        *letter_counts.entry(letter).or_insert(0) += 1;
        if is_vowel(letter) {
            vowels += 1;
        } else {
            consonants += 1;
        }
    }

    let number_counts = value_counts(name);

    // 同頻率時取較小的數字
    let mut most = (0, 0);
    let mut least = (0, u32::MAX);
    for (&value, &count) in &number_counts {
        if count > most.1 {
            most = (value, count);
        }
        if count < least.1 {
            least = (value, count);
        }
    }

    let missing_numbers = (1..=9).filter(|n| !number_counts.contains_key(n)).collect();

    LetterDistribution {
        letter_counts,
        number_counts,
        vowels,
        consonants,
        most_frequent_number: most.0,
        least_frequent_number: least.0,
        missing_numbers,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameNumbers {
    pub destiny: u32,
    pub soul_urge: u32,
    pub personality: u32,
}

impl NameNumbers {
    pub fn calculate(name: &str) -> Self {
        Self {
            destiny: destiny_number(name),
            soul_urge: soul_urge_number(name),
            personality: personality_number(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberChange {
    pub changed: bool,
    pub improvement: i32,
}

impl NumberChange {
    fn between(before: u32, after: u32) -> Self {
        Self {
            changed: before != after,
            improvement: weighted(after) - weighted(before),
        }
    }
}

// Masters count two above their face value.
fn weighted(n: u32) -> i32 {
    n as i32 + if is_master(n) { 2 } else { 0 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameChangeImpact {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameChangeComparison {
    pub before: NameNumbers,
    pub after: NameNumbers,
    pub destiny: NumberChange,
    pub soul_urge: NumberChange,
    pub personality: NumberChange,
    pub overall_impact: NameChangeImpact,
    pub summary: Narrative,
}

pub fn compare_name_change(original_name: &str, new_name: &str) -> NameChangeComparison {
    let before = NameNumbers::calculate(original_name);
    let after = NameNumbers::calculate(new_name);

    let destiny = NumberChange::between(before.destiny, after.destiny);
    let soul_urge = NumberChange::between(before.soul_urge, after.soul_urge);
    let personality = NumberChange::between(before.personality, after.personality);

    let changes = [destiny, soul_urge, personality];
    let changed_count = changes.iter().filter(|c| c.changed).count();
    let total: i32 = changes.iter().map(|c| c.improvement).sum();

    let overall_impact = if changed_count == 0 {
        NameChangeImpact::Neutral
    } else if total > 0 {
        NameChangeImpact::Positive
    } else if total < 0 {
        NameChangeImpact::Negative
    } else {
        NameChangeImpact::Mixed
    };

    NameChangeComparison {
        before,
        after,
        destiny,
        soul_urge,
        personality,
        overall_impact,
        summary: name_change_summary(overall_impact, changed_count),
    }
}

fn name_change_summary(impact: NameChangeImpact, n: usize) -> Narrative {
    match impact {
        NameChangeImpact::Neutral => Narrative::new(
            "Noul nume păstrează aceleași numere numerologice. Energia rămâne neschimbată.",
            "The new name maintains the same numerological numbers. Energy remains unchanged.",
            "Новое имя сохраняет те же нумерологические числа. Энергия остается неизменной.",
        ),
        NameChangeImpact::Positive => Narrative::new(
            format!("Schimbarea aduce {} modificări pozitive. Energia nouă favorizează creșterea și evoluția.", n),
            format!("The change brings {} positive modifications. New energy favors growth and evolution.", n),
            format!("Изменение приносит {} положительных модификаций. Новая энергия способствует росту и эволюции.", n),
        ),
        NameChangeImpact::Negative => Narrative::new(
            format!("Schimbarea aduce {} modificări. Unele energii pot necesita ajustări.", n),
            format!("The change brings {} modifications. Some energies may need adjustments.", n),
            format!("Изменение приносит {} модификаций. Некоторые энергии могут потребовать корректировки.", n),
        ),
        NameChangeImpact::Mixed => Narrative::new(
            format!("Schimbarea aduce {} modificări mixte. Analizează fiecare aspect cu atenție.", n),
            format!("The change brings {} mixed modifications. Analyze each aspect carefully.", n),
            format!("Изменение приносит {} смешанных модификаций. Внимательно проанализируйте каждый аспект.", n),
        ),
    }
}
