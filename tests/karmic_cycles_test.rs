use chrono::NaiveDate;
use numerology_engine::core::cycles::{
    achievements, age_on, challenges, pinnacle_for_age, pinnacles,
};
use numerology_engine::core::karmic::{karmic_debts, karmic_path, DebtSource, KarmicDebt};
use numerology_engine::core::letters::StandardSystem;
use numerology_engine::core::numbers::CoreNumbers;
use numerology_engine::domain::model::NumberSource;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_pinnacles_partition_all_ages() {
    let birth = date(1985, 11, 2);
    let periods = pinnacles(birth);

    let numbers: Vec<u32> = periods.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![4, 7, 11, 7]);

    assert_eq!(periods[0].start_age, 0);
    assert_eq!(periods[0].end_age, Some(27));
    for window in periods.windows(2) {
        let end = window[0].end_age.expect("only the last pinnacle is open-ended");
        assert_eq!(window[1].start_age, end + 1);
    }
    assert_eq!(periods[3].end_age, None);

    for age in 0..120 {
        let containing = periods.iter().filter(|p| p.contains_age(age)).count();
        assert_eq!(containing, 1, "age {} must fall in exactly one pinnacle", age);
    }
    assert_eq!(pinnacle_for_age(birth, 30).period, 2);
    assert_eq!(pinnacle_for_age(birth, 90).period, 4);
}

#[test]
fn test_challenges_in_range() {
    let numbers: Vec<u32> = challenges(date(1985, 11, 2))
        .iter()
        .map(|c| c.number)
        .collect();
    assert_eq!(numbers, vec![0, 3, 3, 3]);

    for year in [1900, 1955, 1999, 2024] {
        for c in challenges(date(year, 12, 31)) {
            assert!(c.number <= 8);
        }
    }
}

#[test]
fn test_age_on() {
    let birth = date(1990, 5, 15);
    assert_eq!(age_on(birth, date(2024, 5, 14)), 33);
    assert_eq!(age_on(birth, date(2024, 5, 15)), 34);
    assert_eq!(age_on(birth, date(1980, 1, 1)), 0);
}

#[test]
fn test_achievements_rank_by_frequency() {
    let core = CoreNumbers::calculate("Ion Ionescu", date(1985, 11, 2), &StandardSystem);
    let ranked = achievements(&core);

    let numbers: Vec<u32> = ranked.iter().map(|a| a.number).collect();
    assert_eq!(numbers, vec![7, 9, 2, 5]);
    assert_eq!(ranked[0].count, 2);
    assert_eq!(ranked[0].source, NumberSource::Destiny);
}

#[test]
fn test_raw_sum_sixteen_is_life_path_debt() {
    // 2000-07-07: 7 + 7 + 2 = 16
    let debts = karmic_debts(date(2000, 7, 7), "");
    assert_eq!(
        debts,
        vec![KarmicDebt {
            number: 16,
            source: DebtSource::LifePath
        }]
    );
}

#[test]
fn test_karmic_path_combines_first_debt_and_lesson() {
    let path = karmic_path(date(1985, 11, 2), "Ion Ionescu");
    assert_eq!(
        path.debts,
        vec![KarmicDebt {
            number: 14,
            source: DebtSource::Personality
        }]
    );
    assert_eq!(path.lessons, vec![2, 4, 7, 8]);
    // 14 + 2 = 16 → 7
    assert_eq!(path.path_number, 7);
    assert_eq!(path.healing_steps.len(), 2);
}
