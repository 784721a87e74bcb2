use crate::core::letters::is_vowel;
use crate::core::numbers::destiny_number;
use crate::core::reduction::is_master;
use crate::domain::model::{Narrative, Phrase};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Letters tried as a single-letter suffix.
pub const COMMON_ADDITIONS: [char; 8] = ['a', 'e', 'i', 'o', 'n', 's', 'h', 'y'];
pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionKind {
    TargetMatch,
    MasterNumber,
    Closer,
    Neutral,
    Unchanged,
    Farther,
}

impl SuggestionKind {
    pub fn score(&self) -> i32 {
        match self {
            Self::TargetMatch => 10,
            Self::MasterNumber => 6,
            Self::Closer => 3,
            Self::Neutral | Self::Unchanged => 0,
            Self::Farther => -3,
        }
    }

    pub fn reason(&self) -> Phrase {
        match self {
            Self::TargetMatch => Phrase::new(
                "Potrivire cu numărul țintă dorit",
                "Match with desired target number",
                "Совпадение с желаемым целевым числом",
            ),
            Self::MasterNumber => Phrase::new(
                "Număr Master - energie spirituală intensificată",
                "Master Number - intensified spiritual energy",
                "Мастер-число — усиленная духовная энергия",
            ),
            Self::Closer => Phrase::new(
                "Energie mai echilibrată",
                "More balanced energy",
                "Более сбалансированная энергия",
            ),
            Self::Neutral => Phrase::new(
                "Energie diferită, la aceeași distanță de țintă",
                "Different energy at the same distance from the target",
                "Другая энергия на том же расстоянии от цели",
            ),
            Self::Unchanged => Phrase::new(
                "Numărul destinului rămâne neschimbat",
                "Destiny number stays the same",
                "Число судьбы не меняется",
            ),
            Self::Farther => Phrase::new(
                "Mai departe de numerele dorite",
                "Further from the desired numbers",
                "Дальше от желаемых чисел",
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSuggestion {
    pub name: String,
    pub destiny: u32,
    pub kind: SuggestionKind,
    pub score: i32,
    pub reason: Narrative,
}

fn nearest_distance(value: u32, targets: &[u32]) -> Option<u32> {
    targets.iter().map(|&t| value.abs_diff(t)).min()
}

/// 目標優先於主數；距離以最接近的目標計算
pub fn classify(original: u32, candidate: u32, targets: &[u32]) -> SuggestionKind {
    if targets.contains(&candidate) {
        return SuggestionKind::TargetMatch;
    }
    if is_master(candidate) {
        return SuggestionKind::MasterNumber;
    }
    if candidate == original {
        return SuggestionKind::Unchanged;
    }
    match (nearest_distance(original, targets), nearest_distance(candidate, targets)) {
        (Some(before), Some(after)) if after < before => SuggestionKind::Closer,
        (Some(before), Some(after)) if after > before => SuggestionKind::Farther,
        _ => SuggestionKind::Neutral,
    }
}

/// Name plus each common suffix letter, then the final consonant doubled.
pub fn candidate_names(name: &str) -> Vec<String> {
    let mut candidates: Vec<String> = COMMON_ADDITIONS
        .iter()
        .map(|letter| format!("{}{}", name, letter))
        .collect();

    if let Some(last) = name.chars().last() {
        if last.is_ascii_alphabetic() && !is_vowel(last) && !last.eq_ignore_ascii_case(&'y') {
            candidates.push(format!("{}{}", name, last.to_ascii_lowercase()));
        }
    }
    candidates
}

pub fn suggest_names(name: &str, targets: &[u32]) -> Vec<NameSuggestion> {
    let original = destiny_number(name);
    let mut seen = HashSet::new();

    let mut suggestions: Vec<NameSuggestion> = candidate_names(name)
        .into_iter()
        .filter(|candidate| seen.insert(candidate.to_lowercase()))
        .map(|candidate| {
            let destiny = destiny_number(&candidate);
            let kind = classify(original, destiny, targets);
            tracing::trace!("Candidate {} -> destiny {} ({:?})", candidate, destiny, kind);
            NameSuggestion {
                name: candidate,
                destiny,
                kind,
                score: kind.score(),
                reason: kind.reason().into(),
            }
        })
        .collect();

    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions.truncate(MAX_SUGGESTIONS);

    tracing::debug!(
        "Name optimization for {:?} (destiny {}): {} suggestions",
        name,
        original,
        suggestions.len()
    );
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_precedence() {
        assert_eq!(classify(5, 11, &[11]), SuggestionKind::TargetMatch);
        assert_eq!(classify(5, 11, &[3]), SuggestionKind::MasterNumber);
        assert_eq!(classify(5, 4, &[3]), SuggestionKind::Closer);
        assert_eq!(classify(5, 5, &[3]), SuggestionKind::Unchanged);
        assert_eq!(classify(5, 7, &[3]), SuggestionKind::Farther);
        // 距離相同
        assert_eq!(classify(4, 2, &[3]), SuggestionKind::Neutral);
        assert_eq!(classify(4, 2, &[]), SuggestionKind::Neutral);
    }

    #[test]
    fn test_candidates_double_final_consonant() {
        let candidates = candidate_names("Ion");
        assert_eq!(candidates.len(), 9);
        assert_eq!(candidates.last().map(String::as_str), Some("Ionn"));

        assert_eq!(candidate_names("Maria").len(), 8);
        assert_eq!(candidate_names("Andy").len(), 8);
        assert_eq!(candidate_names("Ion.").len(), 8);
    }

    #[test]
    fn test_duplicates_removed_case_insensitively() {
        // "Ion" + n 與雙寫 n 產生同一個名字
        let suggestions = suggest_names("Ion", &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let ionn = suggestions.iter().filter(|s| s.name.eq_ignore_ascii_case("ionn")).count();
        assert!(ionn <= 1);
    }

    #[test]
    fn test_results_sorted_and_capped() {
        let suggestions = suggest_names("Maria", &[1, 8]);
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
        for s in &suggestions {
            assert_eq!(s.destiny, destiny_number(&s.name));
            assert_eq!(s.score, s.kind.score());
        }
    }

    #[test]
    fn test_target_match_ranks_first() {
        // MARIA = 4+1+9+9+1 = 24 → 6；加 a → 25 → 7
        let suggestions = suggest_names("Maria", &[7]);
        assert_eq!(suggestions[0].name, "Mariaa");
        assert_eq!(suggestions[0].kind, SuggestionKind::TargetMatch);
        assert_eq!(suggestions[0].reason.en, "Match with desired target number");
    }

    #[test]
    fn test_empty_name_is_total() {
        let suggestions = suggest_names("", &[]);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    }
}
