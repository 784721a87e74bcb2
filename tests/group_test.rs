use chrono::NaiveDate;
use numerology_engine::core::group::{
    analyze_group, compare_multiple_people, group_harmony, GroupType,
};
use numerology_engine::{NumerologyError, Participant, Person};

fn participant(id: &str, name: &str, y: i32, m: u32, d: u32) -> Participant {
    Participant::new(id, Person::new(name, NaiveDate::from_ymd_opt(y, m, d).unwrap()))
}

fn four_people() -> Vec<Participant> {
    vec![
        participant("maria", "Maria Popescu", 1990, 5, 15),
        participant("ion", "Ion Ionescu", 1985, 11, 2),
        participant("elena", "Elena Vasile", 1978, 3, 28),
        participant("andrei", "Andrei Radu", 2001, 8, 9),
    ]
}

fn ids(pairs: &[numerology_engine::core::group::PairCompatibility]) -> Vec<(String, String, u32)> {
    pairs
        .iter()
        .map(|p| (p.person1_id.clone(), p.person2_id.clone(), p.overall_score))
        .collect()
}

#[test]
fn test_compare_multiple_people() -> anyhow::Result<()> {
    let comparison = compare_multiple_people(&four_people())?;

    let scores: Vec<u32> = comparison.pairs.iter().map(|p| p.overall_score).collect();
    assert_eq!(scores, vec![95, 83, 75, 74, 81, 80]);
    assert_eq!(comparison.average_compatibility, 81);
    assert_eq!(comparison.group_harmony, 90);

    assert_eq!(
        ids(&comparison.strongest_pairs),
        vec![
            ("maria".to_string(), "ion".to_string(), 95),
            ("maria".to_string(), "elena".to_string(), 83),
            ("ion".to_string(), "andrei".to_string(), 81),
        ]
    );
    assert_eq!(
        ids(&comparison.weakest_pairs),
        vec![
            ("ion".to_string(), "elena".to_string(), 74),
            ("maria".to_string(), "andrei".to_string(), 75),
            ("elena".to_string(), "andrei".to_string(), 80),
        ]
    );
    assert_eq!(
        comparison.recommendations.en[0],
        "Very harmonious group - maintain communication"
    );
    Ok(())
}

#[test]
fn test_two_people_cannot_be_compared() {
    let result = compare_multiple_people(&four_people()[..2]);
    match result {
        Err(NumerologyError::InsufficientParticipants { required, actual }) => {
            assert_eq!(required, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("expected InsufficientParticipants, got {:?}", other),
    }
}

#[test]
fn test_group_harmony_bounds() -> anyhow::Result<()> {
    let people = four_people();
    for size in 2..=people.len() {
        let harmony = group_harmony(&people[..size])?;
        assert!(harmony <= 100);
    }
    // 同一人重複：所有配對分數相同，σ = 0
    let twins = vec![
        participant("a", "Maria Popescu", 1990, 5, 15),
        participant("b", "Maria Popescu", 1990, 5, 15),
    ];
    let self_score = compare_pair_score(&twins);
    assert_eq!(group_harmony(&twins)?, (self_score + 10).min(100));
    Ok(())
}

fn compare_pair_score(people: &[Participant]) -> u32 {
    numerology_engine::core::compatibility::composite_score(
        &people[0].person,
        &people[1].person,
        numerology_engine::RelationshipType::Generic,
    )
}

#[test]
fn test_analyze_group() -> anyhow::Result<()> {
    let analysis = analyze_group(&four_people(), GroupType::General)?;

    // life paths 3, 9, 11, 2 → 3, 9, 2, 2
    assert_eq!(analysis.dominant_numbers.life_path, vec![2, 3, 9]);
    assert_eq!(analysis.dominant_numbers.destiny, vec![2, 7, 6]);
    assert_eq!(analysis.group_energy.en, "Cooperation and harmony energy");
    assert_eq!(analysis.group_harmony, 90);
    assert_eq!(analysis.strengths.en, ["Harmonious group"]);
    assert_eq!(
        analysis.challenges.en,
        ["Great diversity of life paths - requires communication"]
    );
    assert_eq!(
        analysis.recommendations.en,
        ["Maintain open communication", "Celebrate group harmony"]
    );
    Ok(())
}

#[test]
fn test_family_group_narratives() -> anyhow::Result<()> {
    let analysis = analyze_group(&four_people()[..2], GroupType::Family)?;
    assert!(analysis.group_energy.en.ends_with(" - ideal for family unity"));
    assert!(analysis.strengths.en.contains(&"Strong family bond".to_string()));
    assert_eq!(
        analysis.recommendations.en.last().map(String::as_str),
        Some("Create common family traditions")
    );
    Ok(())
}
