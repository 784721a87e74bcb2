//! Interpretation tables for core numbers, personal cycles and life stages.

use crate::core::reduction::canonical;
use crate::domain::model::{Narrative, NarrativeList, NumberSource, Phrase};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub struct NumberMeaning {
    pub title: Phrase,
    pub traits: [Phrase; 4],
    pub description: Phrase,
}

/// Keywords plus the day and month readings of a personal cycle number.
#[derive(Debug, Clone, Copy)]
pub struct CycleMeaning {
    pub keywords: Phrase,
    pub day: Phrase,
    pub month: Phrase,
}

#[derive(Debug, Clone, Copy)]
pub struct StageMeaning {
    pub name: Phrase,
    pub description: Phrase,
}

/// A core number together with its reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub source: NumberSource,
    pub number: u32,
    pub title: Narrative,
    pub traits: NarrativeList,
    pub description: Narrative,
}

impl Interpretation {
    /// None for 0, which only a letterless name produces.
    pub fn of(source: NumberSource, number: u32) -> Option<Self> {
        let meaning = number_meaning(number)?;
        Some(Self {
            source,
            number,
            title: meaning.title.into(),
            traits: NarrativeList::from_phrases(&meaning.traits),
            description: meaning.description.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReading {
    pub year: Option<Narrative>,
    pub month: Option<Narrative>,
    pub day: Option<Narrative>,
}

impl CycleReading {
    /// Year uses the keywords, month and day their own readings.
    pub fn of(year: u32, month: u32, day: u32) -> Self {
        Self {
            year: cycle_meaning(year).map(|m| m.keywords.into()),
            month: cycle_meaning(month).map(|m| m.month.into()),
            day: cycle_meaning(day).map(|m| m.day.into()),
        }
    }
}

// 1-9 by index, then 11, 22, 33
static NUMBER_MEANINGS: [NumberMeaning; 12] = [
    NumberMeaning {
        title: Phrase::new("Liderul", "The Leader", "Лидер"),
        traits: [
            Phrase::new("Independent", "Independent", "Независимый"),
            Phrase::new("Ambițios", "Ambitious", "Амбициозный"),
            Phrase::new("Inovator", "Innovative", "Инновационный"),
            Phrase::new("Curajos", "Courageous", "Смелый"),
        ],
        description: Phrase::new(
            "Ești un pionier natural, cu o dorință puternică de a conduce și de a inova. Energia ta este cea a începuturilor și a independenței.",
            "You are a natural pioneer with a strong desire to lead and innovate. Your energy is that of beginnings and independence.",
            "Вы прирождённый пионер с сильным желанием вести и создавать новое. Ваша энергия — это энергия начала и независимости.",
        ),
    },
    NumberMeaning {
        title: Phrase::new("Diplomatul", "The Diplomat", "Дипломат"),
        traits: [
            Phrase::new("Diplomatic", "Diplomatic", "Дипломатичный"),
            Phrase::new("Sensibil", "Sensitive", "Чувствительный"),
            Phrase::new("Cooperant", "Cooperative", "Кооперативный"),
            Phrase::new("Intuitiv", "Intuitive", "Интуитивный"),
        ],
        description: Phrase::new(
            "Ești un pacificator natural, cu abilități excepționale de a crea armonie. Energia ta este cea a parteneriatului și echilibrului.",
            "You are a natural peacemaker with exceptional abilities to create harmony. Your energy is that of partnership and balance.",
            "Вы прирождённый миротворец с исключительными способностями создавать гармонию. Ваша энергия — это энергия партнёрства и баланса.",
        ),
    },
    NumberMeaning {
        title: Phrase::new("Creatorul", "The Creator", "Творец"),
        traits: [
            Phrase::new("Creativ", "Creative", "Творческий"),
            Phrase::new("Expresiv", "Expressive", "Выразительный"),
            Phrase::new("Optimist", "Optimistic", "Оптимистичный"),
            Phrase::new("Sociabil", "Sociable", "Общительный"),
        ],
        description: Phrase::new(
            "Ești plin de creativitate și expresie artistică. Energia ta aduce bucurie și inspirație celor din jur.",
            "You are full of creativity and artistic expression. Your energy brings joy and inspiration to those around you.",
            "Вы полны творчества и художественного выражения. Ваша энергия приносит радость и вдохновение окружающим.",
        ),
    },
    NumberMeaning {
        title: Phrase::new("Constructorul", "The Builder", "Строитель"),
        traits: [
            Phrase::new("Stabil", "Stable", "Стабильный"),
            Phrase::new("Practic", "Practical", "Практичный"),
            Phrase::new("Disciplinat", "Disciplined", "Дисциплинированный"),
            Phrase::new("Loial", "Loyal", "Верный"),
        ],
        description: Phrase::new(
            "Ești fundamentul pe care alții se pot baza. Energia ta este cea a stabilității și a construirii pentru viitor.",
            "You are the foundation others can rely on. Your energy is that of stability and building for the future.",
            "Вы — фундамент, на который другие могут положиться. Ваша энергия — это энергия стабильности и созидания будущего.",
        ),
    },
    NumberMeaning {
        title: Phrase::new("Aventurierul", "The Adventurer", "Искатель Приключений"),
        traits: [
            Phrase::new("Liber", "Free", "Свободный"),
            Phrase::new("Versatil", "Versatile", "Разносторонний"),
            Phrase::new("Curios", "Curious", "Любопытный"),
            Phrase::new("Dinamic", "Dynamic", "Динамичный"),
        ],
        description: Phrase::new(
            "Ești un spirit liber care tânjește după schimbare și aventură. Energia ta este cea a libertății și explorării.",
            "You are a free spirit who craves change and adventure. Your energy is that of freedom and exploration.",
            "Вы свободный дух, жаждущий перемен и приключений. Ваша энергия — это энергия свободы и исследования.",
        ),
    },
    NumberMeaning {
        title: Phrase::new("Protectorul", "The Protector", "Защитник"),
        traits: [
            Phrase::new("Responsabil", "Responsible", "Ответственный"),
            Phrase::new("Grijuliu", "Caring", "Заботливый"),
            Phrase::new("Armonios", "Harmonious", "Гармоничный"),
            Phrase::new("Devotat", "Devoted", "Преданный"),
        ],
        description: Phrase::new(
            "Ești un protector natural al familiei și comunității. Energia ta este cea a iubirii și responsabilității.",
            "You are a natural protector of family and community. Your energy is that of love and responsibility.",
            "Вы прирождённый защитник семьи и общества. Ваша энергия — это энергия любви и ответственности.",
        ),
    },
    NumberMeaning {
        title: Phrase::new("Căutătorul", "The Seeker", "Искатель"),
        traits: [
            Phrase::new("Analitic", "Analytical", "Аналитический"),
            Phrase::new("Spiritual", "Spiritual", "Духовный"),
            Phrase::new("Misterios", "Mysterious", "Загадочный"),
            Phrase::new("Înțelept", "Wise", "Мудрый"),
        ],
        description: Phrase::new(
            "Ești un căutător al adevărului și cunoașterii profunde. Energia ta este cea a introspecției și înțelepciunii.",
            "You are a seeker of truth and deep knowledge. Your energy is that of introspection and wisdom.",
            "Вы искатель истины и глубокого знания. Ваша энергия — это энергия самоанализа и мудрости.",
        ),
    },
    NumberMeaning {
        title: Phrase::new("Realizatorul", "The Achiever", "Достигатель"),
        traits: [
            Phrase::new("Puternic", "Powerful", "Сильный"),
            Phrase::new("Autoritar", "Authoritative", "Авторитетный"),
            Phrase::new("Abundent", "Abundant", "Изобильный"),
            Phrase::new("Ambițios", "Ambitious", "Амбициозный"),
        ],
        description: Phrase::new(
            "Ești destinat pentru succes material și putere. Energia ta este cea a abundenței și realizării.",
            "You are destined for material success and power. Your energy is that of abundance and achievement.",
            "Вы предназначены для материального успеха и власти. Ваша энергия — это энергия изобилия и достижений.",
        ),
    },
    NumberMeaning {
        title: Phrase::new("Umanitarul", "The Humanitarian", "Гуманитарий"),
        traits: [
            Phrase::new("Compasiune", "Compassionate", "Сострадательный"),
            Phrase::new("Generozitate", "Generous", "Щедрый"),
            Phrase::new("Vizionar", "Visionary", "Провидец"),
            Phrase::new("Spiritual", "Spiritual", "Духовный"),
        ],
        description: Phrase::new(
            "Ești un suflet vechi cu o viziune pentru binele umanității. Energia ta este cea a compasiunii universale.",
            "You are an old soul with a vision for humanity's good. Your energy is that of universal compassion.",
            "Вы старая душа с видением блага человечества. Ваша энергия — это энергия вселенского сострадания.",
        ),
    },
    NumberMeaning {
        title: Phrase::new("Maestrul Intuitor", "The Master Intuitive", "Мастер Интуиции"),
        traits: [
            Phrase::new("Vizionar", "Visionary", "Провидец"),
            Phrase::new("Inspirațional", "Inspirational", "Вдохновляющий"),
            Phrase::new("Sensibil", "Sensitive", "Чувствительный"),
            Phrase::new("Iluminat", "Enlightened", "Просветлённый"),
        ],
        description: Phrase::new(
            "Porți energia puternică a numărului master 11. Ești un canal pentru inspirație divină și ai abilitatea de a ilumina calea altora.",
            "You carry the powerful energy of master number 11. You are a channel for divine inspiration and have the ability to illuminate the path for others.",
            "Вы несёте мощную энергию мастер-числа 11. Вы канал для божественного вдохновения и способны освещать путь другим.",
        ),
    },
    NumberMeaning {
        title: Phrase::new("Maestrul Constructor", "The Master Builder", "Мастер Строитель"),
        traits: [
            Phrase::new("Visător practic", "Practical dreamer", "Практичный мечтатель"),
            Phrase::new("Puternic", "Powerful", "Сильный"),
            Phrase::new("Disciplinat", "Disciplined", "Дисциплинированный"),
            Phrase::new("Vizionar", "Visionary", "Визионер"),
        ],
        description: Phrase::new(
            "Porți energia numărului master 22. Ai capacitatea de a transforma visele în realitate la scară mare.",
            "You carry the energy of master number 22. You have the capacity to transform dreams into reality on a large scale.",
            "Вы несёте энергию мастер-числа 22. Вы способны превращать мечты в реальность в большом масштабе.",
        ),
    },
    NumberMeaning {
        title: Phrase::new("Maestrul Învățător", "The Master Teacher", "Мастер Учитель"),
        traits: [
            Phrase::new("Compasiune supremă", "Supreme compassion", "Высшее сострадание"),
            Phrase::new("Vindecător", "Healer", "Целитель"),
            Phrase::new("Înțelept", "Wise", "Мудрый"),
            Phrase::new("Spiritual", "Spiritual", "Духовный"),
        ],
        description: Phrase::new(
            "Porți energia rară a numărului master 33. Ești un maestru spiritual cu o misiune de a vindeca și învăța.",
            "You carry the rare energy of master number 33. You are a spiritual master with a mission to heal and teach.",
            "Вы несёте редкую энергию мастер-числа 33. Вы духовный мастер с миссией исцелять и учить.",
        ),
    },
];

static CYCLE_MEANINGS: [CycleMeaning; 9] = [
    CycleMeaning {
        keywords: Phrase::new("Începuturi, Inițiativă", "Beginnings, Initiative", "Начинания, Инициатива"),
        day: Phrase::new(
            "Zi excelentă pentru a începe proiecte noi, a lua inițiativa și a te afirma.",
            "Excellent day to start new projects, take initiative, and assert yourself.",
            "Отличный день для начала новых проектов, проявления инициативы и самоутверждения.",
        ),
        month: Phrase::new(
            "Lună de noi începuturi. Plantează semințele pentru ceea ce vrei să crească.",
            "Month of new beginnings. Plant seeds for what you want to grow.",
            "Месяц новых начинаний. Сейте семена того, что хотите вырастить.",
        ),
    },
    CycleMeaning {
        keywords: Phrase::new("Cooperare, Răbdare", "Cooperation, Patience", "Сотрудничество, Терпение"),
        day: Phrase::new(
            "Zi pentru diplomație, parteneriate și detalii. Evită deciziile grăbite.",
            "Day for diplomacy, partnerships, and details. Avoid hasty decisions.",
            "День для дипломатии, партнёрства и деталей. Избегайте поспешных решений.",
        ),
        month: Phrase::new(
            "Lună pentru construirea relațiilor și acordarea atenției la detalii.",
            "Month for building relationships and paying attention to details.",
            "Месяц для построения отношений и внимания к деталям.",
        ),
    },
    CycleMeaning {
        keywords: Phrase::new("Creativitate, Expresie", "Creativity, Expression", "Творчество, Выражение"),
        day: Phrase::new(
            "Zi excelentă pentru activități creative, socializare și exprimarea ideilor.",
            "Excellent day for creative activities, socializing, and expressing ideas.",
            "Отличный день для творчества, общения и выражения идей.",
        ),
        month: Phrase::new(
            "Lună de exprimare creativă și bucurie. Lasă-ți imaginația să zboare.",
            "Month of creative expression and joy. Let your imagination soar.",
            "Месяц творческого самовыражения и радости. Дайте волю воображению.",
        ),
    },
    CycleMeaning {
        keywords: Phrase::new("Muncă, Fundament", "Work, Foundation", "Работа, Основа"),
        day: Phrase::new(
            "Zi pentru muncă practică, organizare și construirea fundamentelor solide.",
            "Day for practical work, organization, and building solid foundations.",
            "День для практической работы, организации и построения прочных основ.",
        ),
        month: Phrase::new(
            "Lună de efort susținut. Construiește cu răbdare și disciplină.",
            "Month of sustained effort. Build with patience and discipline.",
            "Месяц устойчивых усилий. Стройте с терпением и дисциплиной.",
        ),
    },
    CycleMeaning {
        keywords: Phrase::new("Schimbare, Aventură", "Change, Adventure", "Перемены, Приключения"),
        day: Phrase::new(
            "Zi pentru schimbări, călătorii și experiențe noi. Fii flexibil.",
            "Day for changes, travel, and new experiences. Be flexible.",
            "День для перемен, путешествий и нового опыта. Будьте гибкими.",
        ),
        month: Phrase::new(
            "Lună de libertate și schimbare. Îmbrățișează oportunitățile neașteptate.",
            "Month of freedom and change. Embrace unexpected opportunities.",
            "Месяц свободы и перемен. Используйте неожиданные возможности.",
        ),
    },
    CycleMeaning {
        keywords: Phrase::new("Familie, Responsabilitate", "Family, Responsibility", "Семья, Ответственность"),
        day: Phrase::new(
            "Zi pentru familie, casă și responsabilități domestice. Arată-ți grija.",
            "Day for family, home, and domestic responsibilities. Show your care.",
            "День для семьи, дома и домашних обязанностей. Проявите заботу.",
        ),
        month: Phrase::new(
            "Lună pentru îngrijirea relațiilor și a casei. Armonia este prioritară.",
            "Month for nurturing relationships and home. Harmony is a priority.",
            "Месяц для заботы об отношениях и доме. Гармония приоритетна.",
        ),
    },
    CycleMeaning {
        keywords: Phrase::new("Reflecție, Studiu", "Reflection, Study", "Размышление, Учёба"),
        day: Phrase::new(
            "Zi pentru introspecție, studiu și activități solitare. Caută înțelepciune.",
            "Day for introspection, study, and solitary activities. Seek wisdom.",
            "День для самоанализа, учёбы и уединённых занятий. Ищите мудрость.",
        ),
        month: Phrase::new(
            "Lună pentru reflecție și creștere spirituală. Ia-ți timp pentru tine.",
            "Month for reflection and spiritual growth. Take time for yourself.",
            "Месяц для размышлений и духовного роста. Уделите время себе.",
        ),
    },
    CycleMeaning {
        keywords: Phrase::new("Realizare, Afaceri", "Achievement, Business", "Достижение, Бизнес"),
        day: Phrase::new(
            "Zi excelentă pentru afaceri, negocieri și decizii financiare importante.",
            "Excellent day for business, negotiations, and important financial decisions.",
            "Отличный день для бизнеса, переговоров и важных финансовых решений.",
        ),
        month: Phrase::new(
            "Lună de realizări și recunoaștere. Concentrează-te pe obiective materiale.",
            "Month of achievements and recognition. Focus on material goals.",
            "Месяц достижений и признания. Сосредоточьтесь на материальных целях.",
        ),
    },
    CycleMeaning {
        keywords: Phrase::new("Finalizare, Compasiune", "Completion, Compassion", "Завершение, Сострадание"),
        day: Phrase::new(
            "Zi pentru finalizarea proiectelor, generozitate și eliberarea a ceea ce nu mai servește.",
            "Day for completing projects, generosity, and releasing what no longer serves.",
            "День для завершения проектов, щедрости и освобождения от ненужного.",
        ),
        month: Phrase::new(
            "Lună de încheiere și tranziție. Pregătește-te pentru un nou ciclu.",
            "Month of closure and transition. Prepare for a new cycle.",
            "Месяц завершения и перехода. Готовьтесь к новому циклу.",
        ),
    },
];

static STAGE_MEANINGS: [StageMeaning; 9] = [
    StageMeaning {
        name: Phrase::new("Începuturi", "Beginnings", "Начала"),
        description: Phrase::new(
            "Prima etapă a vieții - învățare, explorare și formare a identității",
            "First stage of life - learning, exploration, and identity formation",
            "Первый этап жизни — обучение, исследование и формирование идентичности",
        ),
    },
    StageMeaning {
        name: Phrase::new("Dezvoltare", "Development", "Развитие"),
        description: Phrase::new(
            "Etapa de dezvoltare - construirea relațiilor și învățarea cooperării",
            "Development stage - building relationships and learning cooperation",
            "Этап развития — построение отношений и обучение сотрудничеству",
        ),
    },
    StageMeaning {
        name: Phrase::new("Expresie", "Expression", "Выражение"),
        description: Phrase::new(
            "Etapa de expresie - dezvoltarea creativității și comunicării",
            "Expression stage - developing creativity and communication",
            "Этап выражения — развитие творчества и общения",
        ),
    },
    StageMeaning {
        name: Phrase::new("Construcție", "Building", "Строительство"),
        description: Phrase::new(
            "Etapa de construcție - stabilizare și organizare",
            "Building stage - stabilization and organization",
            "Этап строительства — стабилизация и организация",
        ),
    },
    StageMeaning {
        name: Phrase::new("Explorare", "Exploration", "Исследование"),
        description: Phrase::new(
            "Etapa de explorare - schimbări și libertate",
            "Exploration stage - changes and freedom",
            "Этап исследования — перемены и свобода",
        ),
    },
    StageMeaning {
        name: Phrase::new("Responsabilitate", "Responsibility", "Ответственность"),
        description: Phrase::new(
            "Etapa de responsabilitate - grija pentru alții și armonie",
            "Responsibility stage - care for others and harmony",
            "Этап ответственности — забота о других и гармония",
        ),
    },
    StageMeaning {
        name: Phrase::new("Înțelepciune", "Wisdom", "Мудрость"),
        description: Phrase::new(
            "Etapa de înțelepciune - introspecție și creștere spirituală",
            "Wisdom stage - introspection and spiritual growth",
            "Этап мудрости — самоанализ и духовный рост",
        ),
    },
    StageMeaning {
        name: Phrase::new("Realizare", "Achievement", "Достижение"),
        description: Phrase::new(
            "Etapa de realizare - succes material și recunoaștere",
            "Achievement stage - material success and recognition",
            "Этап достижений — материальный успех и признание",
        ),
    },
    StageMeaning {
        name: Phrase::new("Finalizare", "Completion", "Завершение"),
        description: Phrase::new(
            "Etapa de finalizare - închidere cicluri și serviciu umanitar",
            "Completion stage - closing cycles and humanitarian service",
            "Этап завершения — закрытие циклов и гуманитарное служение",
        ),
    },
];

/// Masters read their own entry; anything else is reduced first. 0 has no reading.
pub fn number_meaning(number: u32) -> Option<&'static NumberMeaning> {
    let index = match canonical(number) {
        0 => return None,
        11 => 9,
        22 => 10,
        33 => 11,
        n => n - 1,
    };
    NUMBER_MEANINGS.get(index as usize)
}

pub fn cycle_meaning(number: u32) -> Option<&'static CycleMeaning> {
    let index = number.checked_sub(1)?;
    CYCLE_MEANINGS.get(index as usize)
}

pub fn stage_meaning(stage: u32) -> Option<&'static StageMeaning> {
    let index = stage.checked_sub(1)?;
    STAGE_MEANINGS.get(index as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_meaning_lookup() {
        assert_eq!(number_meaning(1).map(|m| m.title.en), Some("The Leader"));
        assert_eq!(number_meaning(9).map(|m| m.title.en), Some("The Humanitarian"));
        assert_eq!(number_meaning(11).map(|m| m.title.en), Some("The Master Intuitive"));
        assert_eq!(number_meaning(22).map(|m| m.title.ro), Some("Maestrul Constructor"));
        assert_eq!(number_meaning(33).map(|m| m.title.ru), Some("Мастер Учитель"));
        // 非主數先化簡：29 -> 2
        assert_eq!(number_meaning(29).map(|m| m.title.en), Some("The Diplomat"));
        assert!(number_meaning(0).is_none());
    }

    #[test]
    fn test_interpretation_carries_traits() {
        let reading = Interpretation::of(NumberSource::Destiny, 7).unwrap();
        assert_eq!(reading.source, NumberSource::Destiny);
        assert_eq!(reading.title.en, "The Seeker");
        assert_eq!(reading.traits.en, ["Analytical", "Spiritual", "Mysterious", "Wise"]);
        assert_eq!(reading.traits.len(), 4);
        assert!(Interpretation::of(NumberSource::SoulUrge, 0).is_none());
    }

    #[test]
    fn test_cycle_reading_picks_per_slot_text() {
        let reading = CycleReading::of(1, 5, 9);
        assert_eq!(reading.year.map(|n| n.en), Some("Beginnings, Initiative".to_string()));
        assert!(reading.month.unwrap().en.starts_with("Month of freedom"));
        assert!(reading.day.unwrap().en.starts_with("Day for completing"));
        assert!(cycle_meaning(0).is_none());
        assert!(cycle_meaning(10).is_none());
    }

    #[test]
    fn test_stage_meaning_bounds() {
        assert_eq!(stage_meaning(1).map(|s| s.name.en), Some("Beginnings"));
        assert_eq!(stage_meaning(9).map(|s| s.name.en), Some("Completion"));
        assert!(stage_meaning(0).is_none());
        assert!(stage_meaning(10).is_none());
    }
}
