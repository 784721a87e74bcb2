use crate::core::letters::{letters, StandardSystem};
use crate::core::numbers::{name_sums, BirthComponents};
use crate::core::reduction::reduce;
use crate::domain::model::{Narrative, NarrativeList, Phrase};
use crate::domain::ports::LetterSystem;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DebtSource {
    LifePath,
    Birthday,
    Destiny,
    SoulUrge,
    Personality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KarmicDebt {
    pub number: u32,
    pub source: DebtSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KarmicPath {
    pub debts: Vec<KarmicDebt>,
    pub lessons: Vec<u32>,
    pub primary_debt: Option<u32>,
    pub primary_lesson: Option<u32>,
    pub healing_steps: NarrativeList,
    pub path_number: u32,
}

pub fn is_karmic_debt(raw_sum: u32) -> bool {
    KARMIC_DEBT_NUMBERS.contains(&raw_sum)
}

/// Inspects the raw sums in fixed order: life path total, birth day,
/// destiny, vowels, consonants.
pub fn karmic_debts(birth_date: NaiveDate, full_name: &str) -> Vec<KarmicDebt> {
    let sums = name_sums(full_name, &StandardSystem);
    let checkpoints = [
        (BirthComponents::from_date(birth_date).total(), DebtSource::LifePath),
        (birth_date.day(), DebtSource::Birthday),
        (sums.total, DebtSource::Destiny),
        (sums.vowels, DebtSource::SoulUrge),
        (sums.consonants, DebtSource::Personality),
    ];

    checkpoints
        .into_iter()
        .filter(|(raw, _)| is_karmic_debt(*raw))
        .map(|(number, source)| {
            tracing::debug!("Karmic debt {} found at {:?}", number, source);
            KarmicDebt { number, source }
        })
        .collect()
}

/// Digits 1-9 that no letter of the name maps to, ascending.
pub fn karmic_lessons(full_name: &str) -> Vec<u32> {
    let present: BTreeSet<u32> = letters(full_name)
        .map(|c| StandardSystem.value_of(c))
        .collect();
    (1..=9).filter(|n| !present.contains(n)).collect()
}

pub fn karmic_path(birth_date: NaiveDate, full_name: &str) -> KarmicPath {
    let debts = karmic_debts(birth_date, full_name);
    let lessons = karmic_lessons(full_name);

    let primary_debt = debts.first().map(|d| d.number);
    let primary_lesson = lessons.first().copied();

    let mut healing_steps = NarrativeList::new();
    if let Some(meaning) = primary_debt.and_then(debt_meaning) {
        healing_steps.push(Narrative::new(
            format!("Focus: {}", meaning.healing.ro),
            format!("Focus: {}", meaning.healing.en),
            format!("Фокус: {}", meaning.healing.ru),
        ));
    }
    if let Some(meaning) = primary_lesson.and_then(lesson_meaning) {
        healing_steps.push(Narrative::new(
            format!("Învață: {}", meaning.description.ro),
            format!("Learn: {}", meaning.description.en),
            format!("Изучи: {}", meaning.description.ru),
        ));
    }

    let path_sum = primary_debt.unwrap_or(0) + primary_lesson.unwrap_or(0);
    let path_number = reduce(path_sum, false);

    KarmicPath {
        debts,
        lessons,
        primary_debt,
        primary_lesson,
        healing_steps,
        path_number,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DebtMeaning {
    pub title: Phrase,
    pub description: Phrase,
    pub lesson: Phrase,
    pub healing: Phrase,
}

#[derive(Debug, Clone, Copy)]
pub struct LessonMeaning {
    pub title: Phrase,
    pub description: Phrase,
}

static DEBT_MEANINGS: [(u32, DebtMeaning); 4] = [
    (
        13,
        DebtMeaning {
            title: Phrase::new("Datoria Karmică 13/4", "Karmic Debt 13/4", "Кармический Долг 13/4"),
            description: Phrase::new(
                "Această datorie karmică indică abuzuri din viețile trecute legate de lene și lipsa efortului. În această viață, munca grea poate părea mai dificilă.",
                "This karmic debt indicates past life abuses related to laziness and lack of effort. In this life, hard work may seem more difficult.",
                "Этот кармический долг указывает на злоупотребления в прошлых жизнях, связанные с ленью и отсутствием усилий. В этой жизни упорный труд может казаться труднее.",
            ),
            lesson: Phrase::new(
                "Lecția este să înveți valoarea muncii constante și a perseverenței, fără a căuta scurtături.",
                "The lesson is to learn the value of consistent work and perseverance, without looking for shortcuts.",
                "Урок — научиться ценить постоянную работу и настойчивость, не ища лёгких путей.",
            ),
            healing: Phrase::new(
                "Concentrează-te pe finalizarea proiectelor, dezvoltă disciplina și celebrează progresul gradual.",
                "Focus on completing projects, develop discipline, and celebrate gradual progress.",
                "Сосредоточьтесь на завершении проектов, развивайте дисциплину и празднуйте постепенный прогресс.",
            ),
        },
    ),
    (
        14,
        DebtMeaning {
            title: Phrase::new("Datoria Karmică 14/5", "Karmic Debt 14/5", "Кармический Долг 14/5"),
            description: Phrase::new(
                "Această datorie karmică sugerează abuzuri de libertate în viețile trecute - exces, dependențe sau comportament iresponsabil.",
                "This karmic debt suggests past life abuses of freedom - excess, addictions, or irresponsible behavior.",
                "Этот кармический долг указывает на злоупотребление свободой в прошлых жизнях — излишества, зависимости или безответственное поведение.",
            ),
            lesson: Phrase::new(
                "Lecția este să înveți moderația și să folosești libertatea cu responsabilitate și înțelepciune.",
                "The lesson is to learn moderation and to use freedom with responsibility and wisdom.",
                "Урок — научиться умеренности и использовать свободу с ответственностью и мудростью.",
            ),
            healing: Phrase::new(
                "Practică auto-disciplina, evită excesele și găsește aventura în stabilitate.",
                "Practice self-discipline, avoid excess, and find adventure in stability.",
                "Практикуйте самодисциплину, избегайте излишеств и находите приключения в стабильности.",
            ),
        },
    ),
    (
        16,
        DebtMeaning {
            title: Phrase::new("Datoria Karmică 16/7", "Karmic Debt 16/7", "Кармический Долг 16/7"),
            description: Phrase::new(
                "Cunoscută ca 'Turnul Căzut', această datorie indică ego inflat sau relații distructive în viețile trecute.",
                "Known as 'The Fallen Tower', this debt indicates inflated ego or destructive relationships in past lives.",
                "Известный как «Падающая Башня», этот долг указывает на раздутое эго или разрушительные отношения в прошлых жизнях.",
            ),
            lesson: Phrase::new(
                "Lecția este umilința și reconstrucția sinelui pe fundamente spirituale autentice.",
                "The lesson is humility and rebuilding the self on authentic spiritual foundations.",
                "Урок — смирение и восстановление себя на подлинных духовных основах.",
            ),
            healing: Phrase::new(
                "Acceptă transformările ca oportunități de creștere, practică umilința și dezvoltă viața interioară.",
                "Accept transformations as growth opportunities, practice humility, and develop your inner life.",
                "Принимайте трансформации как возможности роста, практикуйте смирение и развивайте внутреннюю жизнь.",
            ),
        },
    ),
    (
        19,
        DebtMeaning {
            title: Phrase::new("Datoria Karmică 19/1", "Karmic Debt 19/1", "Кармический Долг 19/1"),
            description: Phrase::new(
                "Această datorie karmică indică abuzuri de putere în viețile trecute - dominație, egoism sau neglijarea altora.",
                "This karmic debt indicates past life abuses of power - domination, selfishness, or neglecting others.",
                "Этот кармический долг указывает на злоупотребление властью в прошлых жизнях — доминирование, эгоизм или пренебрежение другими.",
            ),
            lesson: Phrase::new(
                "Lecția este să înveți să stai pe propriile picioare în timp ce rămâi conectat cu și în serviciul altora.",
                "The lesson is to learn to stand on your own while remaining connected to and in service of others.",
                "Урок — научиться стоять на своих ногах, оставаясь связанным с другими и служа им.",
            ),
            healing: Phrase::new(
                "Dezvoltă independența sănătoasă, practică generozitatea și recunoaște contribuțiile altora.",
                "Develop healthy independence, practice generosity, and acknowledge others' contributions.",
                "Развивайте здоровую независимость, практикуйте щедрость и признавайте вклад других.",
            ),
        },
    ),
];

// Indexed by missing digit - 1.
static LESSON_MEANINGS: [LessonMeaning; 9] = [
    LessonMeaning {
        title: Phrase::new("Lecția Independenței", "Lesson of Independence", "Урок Независимости"),
        description: Phrase::new(
            "Lipsește numărul 1 din nume - trebuie să înveți să fii independent și să îți afirmi individualitatea.",
            "Number 1 is missing from your name - you need to learn to be independent and assert your individuality.",
            "Число 1 отсутствует в имени — нужно научиться быть независимым и утверждать свою индивидуальность.",
        ),
    },
    LessonMeaning {
        title: Phrase::new("Lecția Cooperării", "Lesson of Cooperation", "Урок Сотрудничества"),
        description: Phrase::new(
            "Lipsește numărul 2 - trebuie să înveți să cooperezi, să ai răbdare și să fii sensibil la nevoile altora.",
            "Number 2 is missing - you need to learn to cooperate, be patient, and be sensitive to others' needs.",
            "Число 2 отсутствует — нужно научиться сотрудничать, быть терпеливым и чувствительным к нуждам других.",
        ),
    },
    LessonMeaning {
        title: Phrase::new("Lecția Expresiei", "Lesson of Expression", "Урок Выражения"),
        description: Phrase::new(
            "Lipsește numărul 3 - trebuie să înveți să te exprimi creativ și să comunici eficient.",
            "Number 3 is missing - you need to learn to express yourself creatively and communicate effectively.",
            "Число 3 отсутствует — нужно научиться творчески выражаться и эффективно общаться.",
        ),
    },
    LessonMeaning {
        title: Phrase::new("Lecția Disciplinei", "Lesson of Discipline", "Урок Дисциплины"),
        description: Phrase::new(
            "Lipsește numărul 4 - trebuie să înveți disciplina, organizarea și valoarea muncii consistente.",
            "Number 4 is missing - you need to learn discipline, organization, and the value of consistent work.",
            "Число 4 отсутствует — нужно научиться дисциплине, организации и ценности постоянной работы.",
        ),
    },
    LessonMeaning {
        title: Phrase::new("Lecția Libertății", "Lesson of Freedom", "Урок Свободы"),
        description: Phrase::new(
            "Lipsește numărul 5 - trebuie să înveți să îmbrățișezi schimbarea și să folosești libertatea constructiv.",
            "Number 5 is missing - you need to learn to embrace change and use freedom constructively.",
            "Число 5 отсутствует — нужно научиться принимать перемены и конструктивно использовать свободу.",
        ),
    },
    LessonMeaning {
        title: Phrase::new("Lecția Responsabilității", "Lesson of Responsibility", "Урок Ответственности"),
        description: Phrase::new(
            "Lipsește numărul 6 - trebuie să înveți responsabilitatea, grija pentru alții și armonia în relații.",
            "Number 6 is missing - you need to learn responsibility, care for others, and harmony in relationships.",
            "Число 6 отсутствует — нужно научиться ответственности, заботе о других и гармонии в отношениях.",
        ),
    },
    LessonMeaning {
        title: Phrase::new("Lecția Înțelepciunii", "Lesson of Wisdom", "Урок Мудрости"),
        description: Phrase::new(
            "Lipsește numărul 7 - trebuie să înveți introspecția, analiza și să cauți adevăruri mai profunde.",
            "Number 7 is missing - you need to learn introspection, analysis, and to seek deeper truths.",
            "Число 7 отсутствует — нужно научиться самоанализу, анализу и поиску глубоких истин.",
        ),
    },
    LessonMeaning {
        title: Phrase::new("Lecția Puterii", "Lesson of Power", "Урок Силы"),
        description: Phrase::new(
            "Lipsește numărul 8 - trebuie să înveți să gestionezi puterea, banii și succesul material.",
            "Number 8 is missing - you need to learn to manage power, money, and material success.",
            "Число 8 отсутствует — нужно научиться управлять силой, деньгами и материальным успехом.",
        ),
    },
    LessonMeaning {
        title: Phrase::new("Lecția Compasiunii", "Lesson of Compassion", "Урок Сострадания"),
        description: Phrase::new(
            "Lipsește numărul 9 - trebuie să înveți compasiunea universală, generozitatea și eliberarea trecutului.",
            "Number 9 is missing - you need to learn universal compassion, generosity, and releasing the past.",
            "Число 9 отсутствует — нужно научиться универсальному состраданию, щедрости и освобождению от прошлого.",
        ),
    },
];

pub fn debt_meaning(number: u32) -> Option<&'static DebtMeaning> {
    DEBT_MEANINGS
        .iter()
        .find(|(n, _)| *n == number)
        .map(|(_, meaning)| meaning)
}

pub fn lesson_meaning(missing: u32) -> Option<&'static LessonMeaning> {
    let index = missing.checked_sub(1)?;
    LESSON_MEANINGS.get(index as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_life_path_total_sixteen_is_debt() {
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
    fn test_debts_keep_checkpoint_order() {
        // day 19 is a birthday debt; "Dan" = 4+1+5 = 10 is not a debt
        let debts = karmic_debts(date(1990, 3, 19), "Dan");
        // 1 + 3 + 1 = 5, no life path debt
        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].source, DebtSource::Birthday);

        // "Maria": consonants M+R = 13
        let debts = karmic_debts(date(2000, 7, 7), "Maria");
        let sources: Vec<DebtSource> = debts.iter().map(|d| d.source).collect();
        assert_eq!(sources, vec![DebtSource::LifePath, DebtSource::Personality]);
        assert_eq!(debts[1].number, 13);
    }

    #[test]
    fn test_lessons() {
        assert_eq!(karmic_lessons("Maria"), vec![2, 3, 5, 6, 7, 8]);
        assert_eq!(karmic_lessons(""), (1..=9).collect::<Vec<u32>>());
        assert!(karmic_lessons("abcdefghi").is_empty());
    }

    #[test]
    fn test_karmic_path() {
        let path = karmic_path(date(2000, 7, 7), "Maria");
        assert_eq!(path.primary_debt, Some(16));
        assert_eq!(path.primary_lesson, Some(2));
        // 16 + 2 = 18 -> 9
        assert_eq!(path.path_number, 9);
        assert_eq!(path.healing_steps.len(), 2);
        assert!(path.healing_steps.en[0].starts_with("Focus: Accept transformations"));
        assert!(path.healing_steps.ru[1].starts_with("Изучи: Число 2"));
    }

    #[test]
    fn test_karmic_path_without_debts_or_lessons() {
        // 1 + 1 + (1+9+9+0=19 -> 1) = 3, day 1, all nine digits present
        let path = karmic_path(date(1990, 1, 1), "abcdefghi");
        assert!(path.debts.is_empty());
        assert!(path.lessons.is_empty());
        assert_eq!(path.path_number, 0);
        assert!(path.healing_steps.is_empty());
    }

    #[test]
    fn test_meaning_lookups() {
        assert_eq!(debt_meaning(19).map(|m| m.title.en), Some("Karmic Debt 19/1"));
        assert!(debt_meaning(15).is_none());
        assert_eq!(lesson_meaning(9).map(|m| m.title.en), Some("Lesson of Compassion"));
        assert!(lesson_meaning(0).is_none());
        assert!(lesson_meaning(10).is_none());
    }
}
