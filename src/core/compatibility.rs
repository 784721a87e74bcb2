use crate::core::matrix::{pair_score, CompatibilityMatrix, MatrixDetail};
use crate::core::numbers::{destiny_number, life_path_number, soul_urge_number};
use crate::domain::model::{Narrative, NarrativeList, Person, Phrase};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RelationshipType {
    Romantic,
    Friendship,
    Professional,
    Family,
    #[default]
    Generic,
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Romantic => "romantic",
            Self::Friendship => "friendship",
            Self::Professional => "professional",
            Self::Family => "family",
            Self::Generic => "generic",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for RelationshipType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "romantic" => Ok(Self::Romantic),
            "friendship" => Ok(Self::Friendship),
            "professional" => Ok(Self::Professional),
            "family" => Ok(Self::Family),
            "generic" => Ok(Self::Generic),
            other => Err(format!("Unknown relationship type: {}", other)),
        }
    }
}

/// Percent weights of the three compared numbers; each row sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    pub life_path: u32,
    pub destiny: u32,
    pub soul_urge: u32,
}

impl Weights {
    const fn new(life_path: u32, destiny: u32, soul_urge: u32) -> Self {
        Self {
            life_path,
            destiny,
            soul_urge,
        }
    }
}

// Indexed by RelationshipType::table_index.
static WEIGHT_TABLE: [Weights; 5] = [
    Weights::new(40, 20, 40), // romantic
    Weights::new(35, 35, 30), // friendship
    Weights::new(50, 40, 10), // professional
    Weights::new(45, 20, 35), // family
    Weights::new(50, 30, 20), // generic
];

impl RelationshipType {
    const fn table_index(&self) -> usize {
        match self {
            Self::Romantic => 0,
            Self::Friendship => 1,
            Self::Professional => 2,
            Self::Family => 3,
            Self::Generic => 4,
        }
    }

    pub fn weights(&self) -> Weights {
        WEIGHT_TABLE[self.table_index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLevel {
    Excellent,
    Good,
    Moderate,
    Challenging,
}

impl CompatibilityLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            85.. => Self::Excellent,
            70..=84 => Self::Good,
            55..=69 => Self::Moderate,
            _ => Self::Challenging,
        }
    }
}

/// The three numbers compatibility is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyNumbers {
    pub life_path: u32,
    pub destiny: u32,
    pub soul_urge: u32,
}

impl KeyNumbers {
    pub fn of(person: &Person) -> Self {
        Self {
            life_path: life_path_number(person.birth_date),
            destiny: destiny_number(&person.full_name),
            soul_urge: soul_urge_number(&person.full_name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectScore {
    pub score: u32,
    pub person1: u32,
    pub person2: u32,
}

impl AspectScore {
    fn between(person1: u32, person2: u32) -> Self {
        Self {
            score: pair_score(person1, person2),
            person1,
            person2,
        }
    }

    fn difference(&self) -> u32 {
        self.person1.abs_diff(self.person2)
    }

    fn either_is(&self, n: u32) -> bool {
        self.person1 == n || self.person2 == n
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectScores {
    pub life_path: AspectScore,
    pub destiny: AspectScore,
    pub soul_urge: AspectScore,
}

impl AspectScores {
    pub fn between(a: &KeyNumbers, b: &KeyNumbers) -> Self {
        Self {
            life_path: AspectScore::between(a.life_path, b.life_path),
            destiny: AspectScore::between(a.destiny, b.destiny),
            soul_urge: AspectScore::between(a.soul_urge, b.soul_urge),
        }
    }

    /// Weighted percentage rounded half up.
    pub fn weighted(&self, weights: Weights) -> u32 {
        let total = self.life_path.score * weights.life_path
            + self.destiny.score * weights.destiny
            + self.soul_urge.score * weights.soul_urge;
        (total + 50) / 100
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dynamics {
    pub communication: Narrative,
    pub emotional: Narrative,
    pub practical: Narrative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub relationship: RelationshipType,
    pub overall_score: u32,
    pub level: CompatibilityLevel,
    pub aspects: AspectScores,
    pub strengths: NarrativeList,
    pub challenges: NarrativeList,
    pub recommendations: NarrativeList,
    pub dynamics: Dynamics,
    pub life_path_detail: Option<MatrixDetail>,
}

pub fn composite_score(p1: &Person, p2: &Person, relationship: RelationshipType) -> u32 {
    AspectScores::between(&KeyNumbers::of(p1), &KeyNumbers::of(p2)).weighted(relationship.weights())
}

pub fn analyze_compatibility(
    p1: &Person,
    p2: &Person,
    relationship: RelationshipType,
) -> CompatibilityReport {
    analyze_key_numbers(&KeyNumbers::of(p1), &KeyNumbers::of(p2), relationship)
}

pub fn analyze_key_numbers(
    a: &KeyNumbers,
    b: &KeyNumbers,
    relationship: RelationshipType,
) -> CompatibilityReport {
    let aspects = AspectScores::between(a, b);
    let overall_score = aspects.weighted(relationship.weights());

    tracing::debug!(
        "{} compatibility: life path {}, destiny {}, soul urge {} -> {}",
        relationship,
        aspects.life_path.score,
        aspects.destiny.score,
        aspects.soul_urge.score,
        overall_score
    );

    CompatibilityReport {
        relationship,
        overall_score,
        level: CompatibilityLevel::from_score(overall_score),
        strengths: strengths(relationship, &aspects),
        challenges: challenges(relationship, &aspects),
        recommendations: recommendations(relationship, overall_score),
        dynamics: dynamics(relationship, &aspects),
        life_path_detail: CompatibilityMatrix.detail(a.life_path, b.life_path),
        aspects,
    }
}

fn strengths(relationship: RelationshipType, s: &AspectScores) -> NarrativeList {
    let mut list = NarrativeList::new();
    let fallback = match relationship {
        RelationshipType::Romantic => {
            if s.life_path.difference() <= 1 {
                list.push(Phrase::new(
                    "Căi de viață similare - înțelegere profundă",
                    "Similar life paths - deep understanding",
                    "Похожие жизненные пути — глубокое понимание",
                ));
            }
            if s.soul_urge.difference() <= 1 {
                list.push(Phrase::new(
                    "Dorințe interioare aliniate - conexiune emoțională puternică",
                    "Aligned inner desires - strong emotional connection",
                    "Согласованные внутренние желания — сильная эмоциональная связь",
                ));
            }
            if s.soul_urge.either_is(2) || s.soul_urge.either_is(6) {
                list.push(Phrase::new(
                    "Sensibilitate și grijă reciprocă",
                    "Mutual sensitivity and care",
                    "Взаимная чувствительность и забота",
                ));
            }
            Phrase::new(
                "Compatibilitate emoțională solidă",
                "Solid emotional compatibility",
                "Прочная эмоциональная совместимость",
            )
        }
        RelationshipType::Friendship => {
            if s.life_path.person1 == s.life_path.person2 {
                list.push(Phrase::new(
                    "Căi de viață identice - înțelegere profundă",
                    "Identical life paths - deep understanding",
                    "Одинаковые жизненные пути — глубокое понимание",
                ));
            }
            if s.life_path.difference() <= 1 {
                list.push(Phrase::new(
                    "Valori și perspective similare",
                    "Similar values and perspectives",
                    "Похожие ценности и взгляды",
                ));
            }
            Phrase::new(
                "Prietenie bazată pe respect reciproc",
                "Friendship based on mutual respect",
                "Дружба, основанная на взаимном уважении",
            )
        }
        RelationshipType::Professional => {
            if s.life_path.either_is(1) || s.life_path.either_is(8) {
                list.push(Phrase::new(
                    "Leadership și ambiție pentru succes",
                    "Leadership and ambition for success",
                    "Лидерство и стремление к успеху",
                ));
            }
            if s.destiny.either_is(4) || s.destiny.either_is(8) {
                list.push(Phrase::new(
                    "Talente complementare pentru afaceri",
                    "Complementary business talents",
                    "Взаимодополняющие деловые таланты",
                ));
            }
            Phrase::new(
                "Colaborare profesională solidă",
                "Solid professional collaboration",
                "Прочное профессиональное сотрудничество",
            )
        }
        RelationshipType::Family => {
            if s.soul_urge.either_is(6) {
                list.push(Phrase::new(
                    "Grijă și responsabilitate pentru familie",
                    "Care and responsibility for family",
                    "Забота и ответственность за семью",
                ));
            }
            if s.life_path.difference() <= 2 {
                list.push(Phrase::new(
                    "Valori familiale similare",
                    "Similar family values",
                    "Похожие семейные ценности",
                ));
            }
            Phrase::new(
                "Legătură familială puternică",
                "Strong family bond",
                "Прочная семейная связь",
            )
        }
        RelationshipType::Generic => {
            if s.life_path.difference() <= 1 {
                list.push(Phrase::new(
                    "Căi de viață compatibile",
                    "Compatible life paths",
                    "Совместимые жизненные пути",
                ));
            }
            if s.destiny.difference() <= 1 {
                list.push(Phrase::new(
                    "Destine complementare",
                    "Complementary destinies",
                    "Взаимодополняющие судьбы",
                ));
            }
            Phrase::new(
                "Potențial bun de colaborare",
                "Good potential for collaboration",
                "Хороший потенциал для сотрудничества",
            )
        }
    };
    list.or_default_phrase(fallback)
}

fn challenges(relationship: RelationshipType, s: &AspectScores) -> NarrativeList {
    let mut list = NarrativeList::new();
    let fallback = match relationship {
        RelationshipType::Romantic => {
            if s.life_path.difference() > 4 {
                list.push(Phrase::new(
                    "Diferențe majore în abordarea vieții - necesită compromisuri",
                    "Major differences in approach to life - requires compromise",
                    "Крупные различия в подходе к жизни — нужны компромиссы",
                ));
            }
            if s.soul_urge.difference() > 4 {
                list.push(Phrase::new(
                    "Dorințe interioare diferite - necesită comunicare deschisă",
                    "Different inner desires - requires open communication",
                    "Разные внутренние желания — нужно открытое общение",
                ));
            }
            if s.life_path.either_is(1) && s.life_path.either_is(2) {
                list.push(Phrase::new(
                    "Tensiune între independență și cooperare",
                    "Tension between independence and cooperation",
                    "Напряжение между независимостью и сотрудничеством",
                ));
            }
            Phrase::new(
                "Provocări minore de depășit împreună",
                "Minor challenges to overcome together",
                "Небольшие вызовы, которые нужно преодолеть вместе",
            )
        }
        RelationshipType::Friendship => {
            if s.life_path.difference() > 5 {
                list.push(Phrase::new(
                    "Perspective foarte diferite - necesită toleranță",
                    "Very different perspectives - requires tolerance",
                    "Очень разные взгляды — нужна терпимость",
                ));
            }
            Phrase::new("Fără provocări majore", "No major challenges", "Нет серьёзных вызовов")
        }
        RelationshipType::Professional => {
            if s.life_path.person1 == 1 && s.life_path.person2 == 1 {
                list.push(Phrase::new(
                    "Ambele persoane vor leadership - necesită clarificarea rolurilor",
                    "Both people want leadership - roles need clarifying",
                    "Оба стремятся к лидерству — нужно прояснить роли",
                ));
            }
            Phrase::new(
                "Provocări minore de management",
                "Minor management challenges",
                "Небольшие управленческие вызовы",
            )
        }
        RelationshipType::Family => {
            if s.life_path.difference() > 4 {
                list.push(Phrase::new(
                    "Generații cu valori diferite - necesită înțelegere",
                    "Generations with different values - requires understanding",
                    "Поколения с разными ценностями — нужно понимание",
                ));
            }
            Phrase::new(
                "Provocări normale în familie",
                "Normal family challenges",
                "Обычные семейные вызовы",
            )
        }
        RelationshipType::Generic => {
            if s.life_path.difference() > 4 {
                list.push(Phrase::new(
                    "Abordări diferite ale vieții - necesită răbdare",
                    "Different approaches to life - requires patience",
                    "Разные подходы к жизни — нужно терпение",
                ));
            }
            Phrase::new("Provocări minore", "Minor challenges", "Небольшие вызовы")
        }
    };
    list.or_default_phrase(fallback)
}

type Brackets = [&'static [Phrase]; 3];

const ROMANTIC_RECOMMENDATIONS: Brackets = [
    &[
        Phrase::new("Mențineți comunicarea deschisă", "Maintain open communication", "Поддерживайте открытое общение"),
        Phrase::new("Celebrați conexiunea voastră profundă", "Celebrate your deep connection", "Празднуйте вашу глубокую связь"),
        Phrase::new("Explorați împreună pasiunile comune", "Explore common passions together", "Исследуйте общие страсти вместе"),
    ],
    &[
        Phrase::new("Investiți timp în comunicare", "Invest time in communication", "Инвестируйте время в общение"),
        Phrase::new("Înțelegeți diferențele ca oportunități de creștere", "Understand differences as growth opportunities", "Понимайте различия как возможности роста"),
        Phrase::new("Creați ritualuri romantice regulate", "Create regular romantic rituals", "Создавайте регулярные романтические ритуалы"),
    ],
    &[
        Phrase::new("Comunicarea deschisă și onestă este esențială", "Open and honest communication is essential", "Открытое и честное общение необходимо"),
        Phrase::new("Căutați teren comun în valori și obiective", "Seek common ground in values and goals", "Ищите общую почву в ценностях и целях"),
        Phrase::new("Considerați consilierea de cuplu dacă este necesar", "Consider couple counseling if needed", "Рассмотрите консультирование пар, если необходимо"),
    ],
];

const FRIENDSHIP_RECOMMENDATIONS: Brackets = [
    &[
        Phrase::new("Mențineți comunicarea deschisă", "Maintain open communication", "Поддерживайте открытое общение"),
        Phrase::new("Creați amintiri împreună", "Create memories together", "Создавайте воспоминания вместе"),
        Phrase::new("Sprijiniți-vă reciproc obiectivele", "Support each other's goals", "Поддерживайте цели друг друга"),
    ],
    &[
        Phrase::new("Mențineți comunicarea deschisă", "Maintain open communication", "Поддерживайте открытое общение"),
        Phrase::new("Respectați diferențele", "Respect differences", "Уважайте различия"),
        Phrase::new("Creați amintiri împreună", "Create memories together", "Создавайте воспоминания вместе"),
    ],
    &[
        Phrase::new("Respectați diferențele", "Respect differences", "Уважайте различия"),
        Phrase::new("Găsiți activități comune", "Find shared activities", "Находите общие занятия"),
        Phrase::new("Fiți răbdători unul cu celălalt", "Be patient with each other", "Будьте терпеливы друг к другу"),
    ],
];

const PROFESSIONAL_RECOMMENDATIONS: Brackets = [
    &[
        Phrase::new("Valorificați viziunea comună", "Leverage your shared vision", "Используйте общее видение"),
        Phrase::new("Construiți încredere prin rezultate", "Build trust through results", "Стройте доверие через результаты"),
        Phrase::new("Stabiliți obiective ambițioase împreună", "Set ambitious goals together", "Ставьте амбициозные цели вместе"),
    ],
    &[
        Phrase::new("Clarificați rolurile și responsabilitățile", "Clarify roles and responsibilities", "Уточните роли и обязанности"),
        Phrase::new("Comunicați obiectivele și așteptările", "Communicate goals and expectations", "Общайтесь о целях и ожиданиях"),
        Phrase::new("Construiți încredere prin rezultate", "Build trust through results", "Стройте доверие через результаты"),
    ],
    &[
        Phrase::new("Clarificați rolurile și responsabilitățile", "Clarify roles and responsibilities", "Уточните роли и обязанности"),
        Phrase::new("Stabiliți procese clare de decizie", "Agree on clear decision processes", "Договоритесь о чётких процессах принятия решений"),
        Phrase::new("Comunicați regulat progresul", "Communicate progress regularly", "Регулярно сообщайте о прогрессе"),
    ],
];

const FAMILY_RECOMMENDATIONS: Brackets = [
    &[
        Phrase::new("Creați tradiții familiale comune", "Create common family traditions", "Создавайте общие семейные традиции"),
        Phrase::new("Celebrați legătura familială", "Celebrate your family bond", "Празднуйте семейную связь"),
        Phrase::new("Mențineți comunicarea deschisă în familie", "Maintain open communication in family", "Поддерживайте открытое общение в семье"),
    ],
    &[
        Phrase::new("Mențineți comunicarea deschisă în familie", "Maintain open communication in family", "Поддерживайте открытое общение в семье"),
        Phrase::new("Respectați diferențele de generație", "Respect generational differences", "Уважайте различия поколений"),
        Phrase::new("Creați tradiții familiale comune", "Create common family traditions", "Создавайте общие семейные традиции"),
    ],
    &[
        Phrase::new("Ascultați-vă cu răbdare", "Listen to each other patiently", "Терпеливо слушайте друг друга"),
        Phrase::new("Respectați diferențele de generație", "Respect generational differences", "Уважайте различия поколений"),
        Phrase::new("Petreceți timp de calitate împreună", "Spend quality time together", "Проводите качественное время вместе"),
    ],
];

const GENERIC_RECOMMENDATIONS: Brackets = [
    &[
        Phrase::new("Mențineți comunicarea deschisă", "Maintain open communication", "Поддерживайте открытое общение"),
        Phrase::new("Construiți pe valorile comune", "Build on shared values", "Опирайтесь на общие ценности"),
    ],
    &[
        Phrase::new("Investiți timp în comunicare", "Invest time in communication", "Инвестируйте время в общение"),
        Phrase::new("Înțelegeți diferențele ca oportunități de creștere", "Understand differences as growth opportunities", "Понимайте различия как возможности роста"),
    ],
    &[
        Phrase::new("Comunicarea deschisă și onestă este esențială", "Open and honest communication is essential", "Открытое и честное общение необходимо"),
        Phrase::new("Căutați teren comun în valori și obiective", "Seek common ground in values and goals", "Ищите общую почву в ценностях и целях"),
    ],
];

fn recommendations(relationship: RelationshipType, score: u32) -> NarrativeList {
    let brackets = match relationship {
        RelationshipType::Romantic => &ROMANTIC_RECOMMENDATIONS,
        RelationshipType::Friendship => &FRIENDSHIP_RECOMMENDATIONS,
        RelationshipType::Professional => &PROFESSIONAL_RECOMMENDATIONS,
        RelationshipType::Family => &FAMILY_RECOMMENDATIONS,
        RelationshipType::Generic => &GENERIC_RECOMMENDATIONS,
    };
    let bracket = match score {
        85.. => 0,
        70..=84 => 1,
        _ => 2,
    };
    NarrativeList::from_phrases(brackets[bracket])
}

fn pick(condition: bool, yes: Phrase, no: Phrase) -> Narrative {
    (if condition { yes } else { no }).into()
}

fn dynamics(relationship: RelationshipType, s: &AspectScores) -> Dynamics {
    match relationship {
        RelationshipType::Romantic => Dynamics {
            communication: pick(
                s.soul_urge.person1 == s.soul_urge.person2,
                Phrase::new(
                    "Comunicare emoțională armonioasă - înțelegere intuitivă",
                    "Harmonious emotional communication - intuitive understanding",
                    "Гармоничное эмоциональное общение — интуитивное понимание",
                ),
                Phrase::new(
                    "Comunicare care necesită efort pentru înțelegere reciprocă",
                    "Communication requiring effort for mutual understanding",
                    "Общение, требующее усилий для взаимопонимания",
                ),
            ),
            emotional: pick(
                s.soul_urge.difference() <= 2,
                Phrase::new(
                    "Conexiune emoțională profundă și stabilă",
                    "Deep and stable emotional connection",
                    "Глубокая и стабильная эмоциональная связь",
                ),
                Phrase::new(
                    "Conexiune emoțională care necesită lucru pentru a se dezvolta",
                    "Emotional connection requiring work to develop",
                    "Эмоциональная связь, требующая работы для развития",
                ),
            ),
            practical: practical_by_life_path(s),
        },
        RelationshipType::Friendship => Dynamics {
            communication: Phrase::new(
                "Comunicare prietenoasă și deschisă",
                "Friendly and open communication",
                "Дружелюбное и открытое общение",
            )
            .into(),
            emotional: Phrase::new(
                "Suport emoțional reciproc",
                "Mutual emotional support",
                "Взаимная эмоциональная поддержка",
            )
            .into(),
            practical: Phrase::new(
                "Colaborare eficientă în activități comune",
                "Efficient collaboration in common activities",
                "Эффективное сотрудничество в общих делах",
            )
            .into(),
        },
        RelationshipType::Professional => Dynamics {
            communication: Phrase::new(
                "Comunicare profesională eficientă",
                "Efficient professional communication",
                "Эффективное профессиональное общение",
            )
            .into(),
            emotional: Phrase::new(
                "Respect profesional reciproc",
                "Mutual professional respect",
                "Взаимное профессиональное уважение",
            )
            .into(),
            practical: Phrase::new(
                "Colaborare orientată spre rezultate",
                "Results-oriented collaboration",
                "Ориентированное на результаты сотрудничество",
            )
            .into(),
        },
        RelationshipType::Family => Dynamics {
            communication: Phrase::new(
                "Comunicare familială bazată pe respect și înțelegere",
                "Family communication based on respect and understanding",
                "Семейное общение, основанное на уважении и понимании",
            )
            .into(),
            emotional: Phrase::new(
                "Suport emoțional și legătură profundă",
                "Emotional support and deep bond",
                "Эмоциональная поддержка и глубокая связь",
            )
            .into(),
            practical: Phrase::new(
                "Colaborare în responsabilitățile familiale",
                "Collaboration in family responsibilities",
                "Сотрудничество в семейных обязанностях",
            )
            .into(),
        },
        RelationshipType::Generic => Dynamics {
            communication: pick(
                s.destiny.difference() <= 1,
                Phrase::new(
                    "Comunicare fluentă - obiective apropiate",
                    "Fluent communication - closely aligned goals",
                    "Свободное общение — близкие цели",
                ),
                Phrase::new(
                    "Comunicare care cere clarificarea obiectivelor",
                    "Communication that needs goals spelled out",
                    "Общение, требующее прояснения целей",
                ),
            ),
            emotional: pick(
                s.soul_urge.difference() <= 2,
                Phrase::new(
                    "Nevoi emoționale compatibile",
                    "Compatible emotional needs",
                    "Совместимые эмоциональные потребности",
                ),
                Phrase::new(
                    "Nevoi emoționale diferite - necesită empatie",
                    "Different emotional needs - requires empathy",
                    "Разные эмоциональные потребности — нужна эмпатия",
                ),
            ),
            practical: practical_by_life_path(s),
        },
    }
}

fn practical_by_life_path(s: &AspectScores) -> Narrative {
    pick(
        s.life_path.difference() <= 2,
        Phrase::new(
            "Abordare similară a vieții practice - armonie în decizii",
            "Similar approach to practical life - harmony in decisions",
            "Похожий подход к практической жизни — гармония в решениях",
        ),
        Phrase::new(
            "Abordări diferite - necesită compromisuri și negociere",
            "Different approaches - requires compromises and negotiation",
            "Разные подходы — требуют компромиссов и переговоров",
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn numbers(life_path: u32, destiny: u32, soul_urge: u32) -> KeyNumbers {
        KeyNumbers {
            life_path,
            destiny,
            soul_urge,
        }
    }

    #[test]
    fn test_weights_sum_to_hundred() {
        for w in WEIGHT_TABLE.iter() {
            assert_eq!(w.life_path + w.destiny + w.soul_urge, 100);
        }
        assert_eq!(RelationshipType::Professional.weights(), Weights::new(50, 40, 10));
    }

    #[test]
    fn test_each_relationship_reads_its_own_row() {
        let kinds = [
            RelationshipType::Romantic,
            RelationshipType::Friendship,
            RelationshipType::Professional,
            RelationshipType::Family,
            RelationshipType::Generic,
        ];
        for (row, kind) in kinds.iter().enumerate() {
            assert_eq!(kind.weights(), WEIGHT_TABLE[row], "{}", kind);
        }
        assert_eq!(RelationshipType::default().weights(), Weights::new(50, 30, 20));
    }

    #[test]
    fn test_weighted_rounds_half_up() {
        // life path 1x3 = 90, destiny 2x6 = 95, soul 4x5 = 40
        let aspects = AspectScores::between(&numbers(1, 2, 4), &numbers(3, 6, 5));
        // (90*50 + 95*30 + 40*20 + 50) / 100 = 81.5 -> 82
        assert_eq!(aspects.weighted(RelationshipType::Generic.weights()), 82);
        // (90*40 + 95*20 + 40*40) / 100 = 71
        assert_eq!(aspects.weighted(RelationshipType::Romantic.weights()), 71);
    }

    #[test]
    fn test_levels() {
        assert_eq!(CompatibilityLevel::from_score(100), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(85), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(84), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_score(55), CompatibilityLevel::Moderate);
        assert_eq!(CompatibilityLevel::from_score(54), CompatibilityLevel::Challenging);
    }

    #[test]
    fn test_romantic_narratives() {
        let report = analyze_key_numbers(&numbers(1, 3, 2), &numbers(2, 3, 2), RelationshipType::Romantic);
        assert_eq!(report.strengths.len(), 3);
        assert!(report
            .challenges
            .en
            .contains(&"Tension between independence and cooperation".to_string()));
        assert_eq!(report.dynamics.communication.en, "Harmonious emotional communication - intuitive understanding");
        assert!(report.life_path_detail.is_some());
    }

    #[test]
    fn test_defaults_when_no_rule_fires() {
        let report = analyze_key_numbers(&numbers(3, 5, 7), &numbers(9, 1, 1), RelationshipType::Friendship);
        assert_eq!(report.strengths.en, ["Friendship based on mutual respect"]);
        assert_eq!(report.challenges.en, ["Very different perspectives - requires tolerance"]);
    }

    #[test]
    fn test_professional_challenge_requires_both_ones() {
        let one_leader = analyze_key_numbers(&numbers(1, 4, 3), &numbers(5, 2, 3), RelationshipType::Professional);
        assert_eq!(one_leader.challenges.en, ["Minor management challenges"]);

        let two_leaders = analyze_key_numbers(&numbers(1, 4, 3), &numbers(1, 2, 3), RelationshipType::Professional);
        assert_eq!(two_leaders.challenges.en, ["Both people want leadership - roles need clarifying"]);
        assert_eq!(two_leaders.strengths.len(), 2);
    }

    #[test]
    fn test_recommendation_brackets() {
        assert_eq!(recommendations(RelationshipType::Romantic, 90).en[0], "Maintain open communication");
        assert_eq!(recommendations(RelationshipType::Romantic, 70).en[0], "Invest time in communication");
        assert_eq!(recommendations(RelationshipType::Family, 10).en[0], "Listen to each other patiently");
    }

    #[test]
    fn test_languages_stay_aligned() {
        let report = analyze_key_numbers(&numbers(1, 8, 6), &numbers(7, 4, 2), RelationshipType::Family);
        for list in [&report.strengths, &report.challenges, &report.recommendations] {
            assert_eq!(list.ro.len(), list.en.len());
            assert_eq!(list.en.len(), list.ru.len());
        }
    }

    #[test]
    fn test_composite_score_is_symmetric() {
        let a = Person::new("Maria Popescu", NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
        let b = Person::new("Ion Ionescu", NaiveDate::from_ymd_opt(1985, 11, 2).unwrap());
        for kind in [
            RelationshipType::Romantic,
            RelationshipType::Friendship,
            RelationshipType::Professional,
            RelationshipType::Family,
            RelationshipType::Generic,
        ] {
            let score = composite_score(&a, &b, kind);
            assert_eq!(score, composite_score(&b, &a, kind));
            assert!(score <= 100);
        }
    }
}
