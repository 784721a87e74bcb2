use numerology_engine::core::numbers::destiny_number;
use numerology_engine::core::optimizer::{suggest_names, SuggestionKind, MAX_SUGGESTIONS};
use numerology_engine::{EngineSettings, NumerologyEngine};

#[test]
fn test_target_matches_first() {
    // Maria = 24 → 6; +a and +s give 25 → 7
    let suggestions = suggest_names("Maria", &[7]);
    let top: Vec<&str> = suggestions.iter().take(2).map(|s| s.name.as_str()).collect();
    assert_eq!(top, vec!["Mariaa", "Marias"]);
    assert!(suggestions[..2]
        .iter()
        .all(|s| s.kind == SuggestionKind::TargetMatch && s.score == 10));

    // +e (29) 與 +n (29) 都是 11，+i (33) 是 33
    let masters = suggestions
        .iter()
        .filter(|s| s.kind == SuggestionKind::MasterNumber)
        .count();
    assert_eq!(masters, 3);
    assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
}

#[test]
fn test_every_suggestion_recomputes_destiny() {
    for name in ["Ion", "Elena Vasile", "Andrei Radu", "X Æ A-12"] {
        for suggestion in suggest_names(name, &[1, 8]) {
            assert_eq!(suggestion.destiny, destiny_number(&suggestion.name));
            assert!(suggestion.name.to_lowercase().starts_with(&name.to_lowercase()));
        }
    }
}

#[test]
fn test_engine_uses_configured_targets() {
    let engine = NumerologyEngine::new(EngineSettings {
        target_numbers: vec![7],
        ..EngineSettings::default()
    });
    let suggestions = engine.optimize_name("Maria");
    assert_eq!(suggestions[0].name, "Mariaa");
    assert_eq!(suggestions[0].reason.ru, "Совпадение с желаемым целевым числом");
}
