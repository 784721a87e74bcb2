use chrono::NaiveDate;
use numerology_engine::core::compatibility::{
    analyze_compatibility, composite_score, CompatibilityLevel, KeyNumbers, RelationshipType,
};
use numerology_engine::core::matrix::{pair_score, CompatibilityMatrix, FALLBACK_SCORE};
use numerology_engine::{EngineSettings, Language, NumerologyEngine, Person};

fn person(name: &str, y: i32, m: u32, d: u32) -> Person {
    Person::new(name, NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

#[test]
fn test_matrix_reference_scores() {
    assert_eq!(pair_score(1, 3), 90);
    assert_eq!(pair_score(2, 6), 95);
    assert_eq!(pair_score(4, 5), 40);
    assert_eq!(pair_score(5, 4), 40);
    // 未收錄的數字使用預設分數
    assert_eq!(pair_score(0, 3), FALLBACK_SCORE);
    assert_eq!(CompatibilityMatrix.keys().len(), 12);
}

#[test]
fn test_key_numbers() {
    let maria = KeyNumbers::of(&person("Maria Popescu", 1990, 5, 15));
    assert_eq!((maria.life_path, maria.destiny, maria.soul_urge), (3, 11, 7));

    let ion = KeyNumbers::of(&person("Ion Ionescu", 1985, 11, 2));
    assert_eq!((ion.life_path, ion.destiny, ion.soul_urge), (9, 7, 11));
}

#[test]
fn test_highly_compatible_pair() {
    let maria = person("Maria Popescu", 1990, 5, 15);
    let ion = person("Ion Ionescu", 1985, 11, 2);

    // 3x9, 11x7, 7x11 are all 95 in the matrix
    for kind in [
        RelationshipType::Romantic,
        RelationshipType::Friendship,
        RelationshipType::Professional,
        RelationshipType::Family,
        RelationshipType::Generic,
    ] {
        assert_eq!(composite_score(&maria, &ion, kind), 95);
    }

    let report = analyze_compatibility(&maria, &ion, RelationshipType::Romantic);
    assert_eq!(report.level, CompatibilityLevel::Excellent);
    assert_eq!(report.aspects.destiny.person1, 11);
    assert_eq!(report.aspects.destiny.person2, 7);
    assert_eq!(
        report.recommendations.get(Language::En),
        [
            "Maintain open communication",
            "Celebrate your deep connection",
            "Explore common passions together"
        ]
    );
    // 生命靈數 3 與 9 相差 6
    assert!(report
        .challenges
        .en
        .contains(&"Major differences in approach to life - requires compromise".to_string()));
}

#[test]
fn test_report_serializes_all_languages() -> anyhow::Result<()> {
    let report = analyze_compatibility(
        &person("Elena Vasile", 1978, 3, 28),
        &person("Andrei Radu", 2001, 8, 9),
        RelationshipType::Family,
    );
    let json = serde_json::to_value(&report)?;

    for language in ["ro", "en", "ru"] {
        assert!(json["strengths"][language].is_array());
        assert!(json["dynamics"]["communication"][language].is_string());
    }
    assert_eq!(json["relationship"], "family");
    Ok(())
}

#[test]
fn test_engine_relationship_from_settings() {
    let engine = NumerologyEngine::new(EngineSettings {
        relationship: RelationshipType::Friendship,
        ..EngineSettings::default()
    });
    let report = engine.compatibility(
        &person("Maria Popescu", 1990, 5, 15),
        &person("Elena Vasile", 1978, 3, 28),
    );
    assert_eq!(report.relationship, RelationshipType::Friendship);
    assert!(report.overall_score <= 100);
}

#[test]
fn test_relationship_type_parsing() {
    assert_eq!("Romantic".parse::<RelationshipType>(), Ok(RelationshipType::Romantic));
    assert!("enemies".parse::<RelationshipType>().is_err());
    assert_eq!(RelationshipType::default(), RelationshipType::Generic);
}
