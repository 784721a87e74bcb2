use crate::core::compatibility::{AspectScore, AspectScores, KeyNumbers, RelationshipType};
use crate::core::reduction::reduce;
use crate::domain::model::{Narrative, NarrativeList, Participant, Phrase};
use crate::utils::error::Result;
use crate::utils::validation::validate_minimum_participants;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_COMPARISON_SIZE: usize = 3;
pub const MIN_GROUP_SIZE: usize = 2;
const TOP_PAIRS: usize = 3;
const TOP_DOMINANTS: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum GroupType {
    Family,
    Team,
    #[default]
    General,
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Family => "family",
            Self::Team => "team",
            Self::General => "general",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for GroupType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "family" => Ok(Self::Family),
            "team" => Ok(Self::Team),
            "general" => Ok(Self::General),
            other => Err(format!("Unknown group type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCompatibility {
    pub person1_id: String,
    pub person2_id: String,
    pub overall_score: u32,
    pub life_path: AspectScore,
    pub destiny: AspectScore,
    pub soul_urge: AspectScore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupComparison {
    pub pairs: Vec<PairCompatibility>,
    pub average_compatibility: u32,
    pub group_harmony: u32,
    pub strongest_pairs: Vec<PairCompatibility>,
    pub weakest_pairs: Vec<PairCompatibility>,
    pub recommendations: NarrativeList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominantNumbers {
    pub life_path: Vec<u32>,
    pub destiny: Vec<u32>,
    pub soul_urge: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAnalysis {
    pub group_type: GroupType,
    pub participants: Vec<Participant>,
    pub group_harmony: u32,
    pub dominant_numbers: DominantNumbers,
    pub group_energy: Narrative,
    pub strengths: NarrativeList,
    pub challenges: NarrativeList,
    pub recommendations: NarrativeList,
}

/// 所有 C(n,2) 配對，使用 generic 權重
fn all_pairs(participants: &[Participant]) -> Vec<PairCompatibility> {
    let numbers: Vec<KeyNumbers> = participants
        .iter()
        .map(|p| KeyNumbers::of(&p.person))
        .collect();
    let weights = RelationshipType::Generic.weights();

    let mut pairs = Vec::with_capacity(participants.len() * participants.len().saturating_sub(1) / 2);
    for i in 0..participants.len() {
        for j in (i + 1)..participants.len() {
            let aspects = AspectScores::between(&numbers[i], &numbers[j]);
            tracing::trace!(
                "Pair {} x {}: {}",
                participants[i].id,
                participants[j].id,
                aspects.weighted(weights)
            );
            pairs.push(PairCompatibility {
                person1_id: participants[i].id.clone(),
                person2_id: participants[j].id.clone(),
                overall_score: aspects.weighted(weights),
                life_path: aspects.life_path,
                destiny: aspects.destiny,
                soul_urge: aspects.soul_urge,
            });
        }
    }
    pairs
}

fn mean(scores: &[u32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64
}

/// Mean pair score plus a consistency bonus of up to 10 points, capped at 100.
fn harmony_of(scores: &[u32]) -> u32 {
    let average = mean(scores);
    let variance = if scores.is_empty() {
        0.0
    } else {
        scores
            .iter()
            .map(|&s| (f64::from(s) - average).powi(2))
            .sum::<f64>()
            / scores.len() as f64
    };
    let bonus = (10.0 - variance.sqrt() / 5.0).max(0.0);
    ((average + bonus).round() as u32).min(100)
}

pub fn group_harmony(participants: &[Participant]) -> Result<u32> {
    validate_minimum_participants(participants.len(), MIN_GROUP_SIZE)?;
    let scores: Vec<u32> = all_pairs(participants)
        .iter()
        .map(|p| p.overall_score)
        .collect();
    Ok(harmony_of(&scores))
}

pub fn compare_multiple_people(participants: &[Participant]) -> Result<GroupComparison> {
    validate_minimum_participants(participants.len(), MIN_COMPARISON_SIZE)?;

    let pairs = all_pairs(participants);
    let scores: Vec<u32> = pairs.iter().map(|p| p.overall_score).collect();
    let average_compatibility = mean(&scores).round() as u32;
    let group_harmony = harmony_of(&scores);

    // sort_by 為穩定排序，同分時保留原配對順序
    let mut descending = pairs.clone();
    descending.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
    let strongest_pairs = descending.into_iter().take(TOP_PAIRS).collect();

    let mut ascending = pairs.clone();
    ascending.sort_by(|a, b| a.overall_score.cmp(&b.overall_score));
    let weakest_pairs = ascending.into_iter().take(TOP_PAIRS).collect();

    tracing::debug!(
        "Compared {} people: {} pairs, average {}, harmony {}",
        participants.len(),
        pairs.len(),
        average_compatibility,
        group_harmony
    );

    Ok(GroupComparison {
        recommendations: comparison_recommendations(
            average_compatibility,
            group_harmony,
            participants.len(),
        ),
        pairs,
        average_compatibility,
        group_harmony,
        strongest_pairs,
        weakest_pairs,
    })
}

/// Top three reduced values by frequency; ties keep first-appearance order, zeros are skipped.
pub fn dominant_numbers(values: &[u32]) -> Vec<u32> {
    let mut counts: Vec<(u32, usize)> = Vec::new();
    for &value in values {
        let reduced = reduce(value, false);
        if reduced == 0 {
            continue;
        }
        match counts.iter_mut().find(|(n, _)| *n == reduced) {
            Some((_, count)) => *count += 1,
            None => counts.push((reduced, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(TOP_DOMINANTS)
        .map(|(n, _)| n)
        .collect()
}

pub fn analyze_group(participants: &[Participant], group_type: GroupType) -> Result<GroupAnalysis> {
    validate_minimum_participants(participants.len(), MIN_GROUP_SIZE)?;

    let numbers: Vec<KeyNumbers> = participants
        .iter()
        .map(|p| KeyNumbers::of(&p.person))
        .collect();
    let life_paths: Vec<u32> = numbers.iter().map(|n| n.life_path).collect();
    let destinies: Vec<u32> = numbers.iter().map(|n| n.destiny).collect();
    let soul_urges: Vec<u32> = numbers.iter().map(|n| n.soul_urge).collect();
    let dominant = DominantNumbers {
        life_path: dominant_numbers(&life_paths),
        destiny: dominant_numbers(&destinies),
        soul_urge: dominant_numbers(&soul_urges),
    };

    let harmony = group_harmony(participants)?;
    tracing::debug!(
        "Group ({}) of {}: harmony {}, dominant life paths {:?}",
        group_type,
        participants.len(),
        harmony,
        dominant.life_path
    );

    Ok(GroupAnalysis {
        group_type,
        participants: participants.to_vec(),
        group_harmony: harmony,
        group_energy: group_energy(dominant.life_path.first().copied(), group_type),
        strengths: group_strengths(&dominant, group_type),
        challenges: group_challenges(&dominant, group_type),
        recommendations: group_recommendations(harmony, group_type),
        dominant_numbers: dominant,
    })
}

static ENERGIES: [Phrase; 9] = [
    Phrase::new("Energie de leadership și inițiativă", "Leadership and initiative energy", "Энергия лидерства и инициативы"),
    Phrase::new("Energie de cooperare și armonie", "Cooperation and harmony energy", "Энергия сотрудничества и гармонии"),
    Phrase::new("Energie creativă și expresivă", "Creative and expressive energy", "Творческая и выразительная энергия"),
    Phrase::new("Energie de stabilitate și organizare", "Stability and organization energy", "Энергия стабильности и организации"),
    Phrase::new("Energie dinamică și versatilă", "Dynamic and versatile energy", "Динамичная и универсальная энергия"),
    Phrase::new("Energie de responsabilitate și grijă", "Responsibility and care energy", "Энергия ответственности и заботы"),
    Phrase::new("Energie de înțelepciune și analiză", "Wisdom and analysis energy", "Энергия мудрости и анализа"),
    Phrase::new("Energie de realizare și succes", "Achievement and success energy", "Энергия достижений и успеха"),
    Phrase::new("Energie de compasiune și serviciu", "Compassion and service energy", "Энергия сострадания и служения"),
];

fn group_energy(dominant_life_path: Option<u32>, group_type: GroupType) -> Narrative {
    let index = match dominant_life_path {
        Some(n @ 1..=9) => n as usize - 1,
        _ => 0,
    };
    let base = ENERGIES[index];
    match group_type {
        GroupType::Family => Narrative::new(
            format!("{} - ideală pentru unitatea familiei", base.ro),
            format!("{} - ideal for family unity", base.en),
            format!("{} — идеальна для семейного единства", base.ru),
        ),
        GroupType::Team => Narrative::new(
            format!("{} - favorizează colaborarea în echipă", base.ro),
            format!("{} - favors team collaboration", base.en),
            format!("{} — способствует командному сотрудничеству", base.ru),
        ),
        GroupType::General => base.into(),
    }
}

fn group_strengths(dominant: &DominantNumbers, group_type: GroupType) -> NarrativeList {
    let mut list = NarrativeList::new();
    if dominant.life_path.len() == 1 {
        list.push(Phrase::new(
            "Căi de viață similare - înțelegere comună",
            "Similar life paths - shared understanding",
            "Похожие жизненные пути — общее понимание",
        ));
    }
    if dominant.destiny.len() == 1 {
        list.push(Phrase::new(
            "Talente complementare în grup",
            "Complementary talents in the group",
            "Взаимодополняющие таланты в группе",
        ));
    }
    match group_type {
        GroupType::Family => list.push(Phrase::new(
            "Legătură familială puternică",
            "Strong family bond",
            "Прочная семейная связь",
        )),
        GroupType::Team => list.push(Phrase::new(
            "Colaborare eficientă în echipă",
            "Efficient team collaboration",
            "Эффективное командное сотрудничество",
        )),
        GroupType::General => {}
    }
    list.or_default_phrase(Phrase::new("Grup armonios", "Harmonious group", "Гармоничная группа"))
}

fn group_challenges(dominant: &DominantNumbers, group_type: GroupType) -> NarrativeList {
    let mut list = NarrativeList::new();
    if dominant.life_path.len() > 2 {
        list.push(Phrase::new(
            "Diversitate mare în căile de viață - necesită comunicare",
            "Great diversity of life paths - requires communication",
            "Большое разнообразие жизненных путей — нужно общение",
        ));
    }
    match group_type {
        GroupType::Family => list.push(Phrase::new(
            "Generații diferite pot avea perspective diferite",
            "Different generations may have different perspectives",
            "Разные поколения могут иметь разные взгляды",
        )),
        GroupType::Team => list.push(Phrase::new(
            "Necesită clarificarea rolurilor și responsabilităților",
            "Requires clarifying roles and responsibilities",
            "Нужно прояснить роли и обязанности",
        )),
        GroupType::General => {}
    }
    list.or_default_phrase(Phrase::new(
        "Provocări minore de gestionat",
        "Minor challenges to manage",
        "Небольшие вызовы, с которыми нужно справиться",
    ))
}

fn group_recommendations(harmony: u32, group_type: GroupType) -> NarrativeList {
    let mut list = match harmony {
        80.. => NarrativeList::from_phrases(&[
            Phrase::new("Mențineți comunicarea deschisă", "Maintain open communication", "Поддерживайте открытое общение"),
            Phrase::new("Celebrați armonia grupului", "Celebrate group harmony", "Празднуйте гармонию группы"),
        ]),
        60..=79 => NarrativeList::from_phrases(&[
            Phrase::new("Investiți în comunicare și înțelegere", "Invest in communication and understanding", "Инвестируйте в общение и понимание"),
            Phrase::new("Căutați teren comun", "Seek common ground", "Ищите общую почву"),
        ]),
        _ => NarrativeList::from_phrases(&[
            Phrase::new("Comunicarea deschisă este esențială", "Open communication is essential", "Открытое общение необходимо"),
            Phrase::new("Considerați activități de team building", "Consider team building activities", "Рассмотрите тимбилдинг"),
        ]),
    };
    match group_type {
        GroupType::Family => list.push(Phrase::new(
            "Creați tradiții familiale comune",
            "Create common family traditions",
            "Создавайте общие семейные традиции",
        )),
        GroupType::Team => list.push(Phrase::new(
            "Clarificați obiectivele comune",
            "Clarify common goals",
            "Уточните общие цели",
        )),
        GroupType::General => {}
    }
    list
}

fn comparison_recommendations(average: u32, harmony: u32, size: usize) -> NarrativeList {
    let mut list = if average >= 80 && harmony >= 80 {
        NarrativeList::from_phrases(&[
            Phrase::new("Grup foarte armonios - mențineți comunicarea", "Very harmonious group - maintain communication", "Очень гармоничная группа — поддерживайте общение"),
            Phrase::new("Explorați activități comune care vă unesc", "Explore shared activities that unite you", "Исследуйте общие занятия, которые вас объединяют"),
        ])
    } else if average >= 70 {
        NarrativeList::from_phrases(&[
            Phrase::new("Compatibilitate bună - investiți în relații", "Good compatibility - invest in relationships", "Хорошая совместимость — инвестируйте в отношения"),
            Phrase::new("Rezolvați conflictele rapid și constructiv", "Resolve conflicts quickly and constructively", "Решайте конфликты быстро и конструктивно"),
        ])
    } else {
        NarrativeList::from_phrases(&[
            Phrase::new("Compatibilitate moderată - comunicarea deschisă este esențială", "Moderate compatibility - open communication is essential", "Умеренная совместимость — открытое общение необходимо"),
            Phrase::new("Căutați teren comun și valori comune", "Seek common ground and shared values", "Ищите общую почву и общие ценности"),
        ])
    };
    if size > 5 {
        list.push(Phrase::new(
            "Grupurile mari beneficiază de structură și organizare",
            "Large groups benefit from structure and organization",
            "Большим группам полезны структура и организация",
        ));
    }
    list
}
