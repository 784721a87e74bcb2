use crate::core::compatibility::{analyze_compatibility, CompatibilityReport, RelationshipType};
use crate::core::cycles::{
    achievements, age_on, challenge_for_age, challenges, life_stage, peak_years, pinnacle_for_age,
    pinnacles, Achievement, Challenge, LifeStage, PeakYear, Pinnacle, PEAK_YEAR_HORIZON,
};
use crate::core::group::{self, GroupAnalysis, GroupComparison};
use crate::core::karmic::{karmic_path, KarmicPath};
use crate::core::letters::{alternate_analysis, AlternateAnalysis, LetterSystemKind};
use crate::core::meanings::{CycleReading, Interpretation};
use crate::core::numbers::{
    compare_name_change, hidden_passions, letter_distribution, CoreNumbers, LetterDistribution,
    NameChangeComparison, PersonalCycles, UniversalCycles,
};
use crate::core::optimizer::{suggest_names, NameSuggestion};
use crate::domain::model::{Participant, Person};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Everything derivable from one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub person: Person,
    pub letter_system: LetterSystemKind,
    pub reference_date: NaiveDate,
    pub age: u32,
    pub core: CoreNumbers,
    pub interpretations: Vec<Interpretation>,
    pub personal_cycles: PersonalCycles,
    pub cycle_reading: CycleReading,
    pub universal_cycles: UniversalCycles,
    pub pinnacles: [Pinnacle; 4],
    pub challenges: [Challenge; 4],
    pub current_pinnacle: u8,
    pub current_challenge: u32,
    pub life_stage: LifeStage,
    pub peak_years: Vec<PeakYear>,
    pub achievements: Vec<Achievement>,
    pub karmic: KarmicPath,
    pub hidden_passions: Vec<u32>,
    pub distribution: LetterDistribution,
    /// Always present, whichever system drives `core`.
    pub alternate: AlternateAnalysis,
}

pub struct NumerologyEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> NumerologyEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 未設定時使用今天的本地日期
    pub fn reference_date(&self) -> NaiveDate {
        self.config
            .reference_date()
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn profile(&self, person: &Person) -> Profile {
        let system = self.config.letter_system();
        let reference = self.reference_date();
        let birth = person.birth_date;

        tracing::info!(
            "🔢 Building profile for {:?} ({} system)",
            person.full_name,
            system
        );

        let core = CoreNumbers::calculate(&person.full_name, birth, system.system());
        let age = age_on(birth, reference);
        let current = pinnacle_for_age(birth, age);
        let personal_cycles = PersonalCycles::calculate(birth, reference);

        let interpretations = [
            core.life_path,
            core.destiny,
            core.soul_urge,
            core.personality,
            core.maturity,
            core.birthday,
        ]
        .into_iter()
        .filter_map(|n| Interpretation::of(n.source, n.value))
        .collect();

        Profile {
            person: person.clone(),
            letter_system: system,
            reference_date: reference,
            age,
            interpretations,
            cycle_reading: CycleReading::of(
                personal_cycles.year,
                personal_cycles.month,
                personal_cycles.day,
            ),
            personal_cycles,
            universal_cycles: UniversalCycles::calculate(reference),
            pinnacles: pinnacles(birth),
            challenges: challenges(birth),
            current_pinnacle: current.period,
            current_challenge: challenge_for_age(birth, age).number,
            life_stage: life_stage(age),
            peak_years: peak_years(birth, &person.full_name, reference.year(), PEAK_YEAR_HORIZON),
            achievements: achievements(&core),
            karmic: karmic_path(birth, &person.full_name),
            hidden_passions: hidden_passions(&person.full_name),
            distribution: letter_distribution(&person.full_name),
            alternate: alternate_analysis(&person.full_name, birth),
            core,
        }
    }

    pub fn compatibility(&self, first: &Person, second: &Person) -> CompatibilityReport {
        self.compatibility_as(first, second, self.config.relationship())
    }

    pub fn compatibility_as(
        &self,
        first: &Person,
        second: &Person,
        relationship: RelationshipType,
    ) -> CompatibilityReport {
        let report = analyze_compatibility(first, second, relationship);
        tracing::info!(
            "💞 {} compatibility {:?} x {:?}: {} ({:?})",
            relationship,
            first.full_name,
            second.full_name,
            report.overall_score,
            report.level
        );
        report
    }

    pub fn compare_group(&self, participants: &[Participant]) -> Result<GroupComparison> {
        let comparison = group::compare_multiple_people(participants)?;
        tracing::info!(
            "👥 Compared {} people: average {}, harmony {}",
            participants.len(),
            comparison.average_compatibility,
            comparison.group_harmony
        );
        Ok(comparison)
    }

    pub fn analyze_group(&self, participants: &[Participant]) -> Result<GroupAnalysis> {
        let analysis = group::analyze_group(participants, self.config.group_type())?;
        tracing::info!(
            "👥 {} group of {}: harmony {}",
            analysis.group_type,
            participants.len(),
            analysis.group_harmony
        );
        Ok(analysis)
    }

    pub fn optimize_name(&self, name: &str) -> Vec<NameSuggestion> {
        let targets = self.config.target_numbers();
        let suggestions = suggest_names(name, targets);
        tracing::info!(
            "✨ {} suggestions for {:?} (targets {:?})",
            suggestions.len(),
            name,
            targets
        );
        suggestions
    }

    pub fn compare_names(&self, original: &str, new_name: &str) -> NameChangeComparison {
        compare_name_change(original, new_name)
    }
}
