use crate::core::meanings::stage_meaning;
use crate::core::numbers::{
    destiny_number, life_path_number, personal_year_number, BirthComponents, CoreNumbers,
};
use crate::core::reduction::reduce;
use crate::domain::model::{Narrative, NumberSource, Phrase};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const PINNACLE_SPAN: u32 = 9;
const STAGE_SPAN: u32 = 9;
pub const PEAK_YEAR_HORIZON: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pinnacle {
    pub number: u32,
    pub period: u8,
    pub start_age: u32,
    /// None for the last pinnacle, which runs for the rest of life.
    pub end_age: Option<u32>,
    pub title: Option<Narrative>,
    pub description: Option<Narrative>,
}

impl Pinnacle {
    pub fn contains_age(&self, age: u32) -> bool {
        age >= self.start_age && self.end_age.map_or(true, |end| age <= end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub number: u32,
    pub period: u8,
    pub title: Option<Narrative>,
    pub description: Option<Narrative>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub number: u32,
    pub count: u32,
    pub source: NumberSource,
    pub description: Narrative,
}

/// Last age of the first pinnacle: 36 minus the life path reduced without masters.
pub fn first_pinnacle_end(birth_date: NaiveDate) -> u32 {
    let components = BirthComponents::from_date(birth_date);
    36 - reduce(components.total(), false)
}

pub fn pinnacles(birth_date: NaiveDate) -> [Pinnacle; 4] {
    let c = BirthComponents::from_date(birth_date);
    let first_end = first_pinnacle_end(birth_date);

    let p1 = reduce(c.month + c.day, true);
    let p2 = reduce(c.day + c.year, true);
    let p3 = reduce(p1 + p2, true);
    let p4 = reduce(c.month + c.year, true);

    tracing::debug!("Pinnacles {}/{}/{}/{}, first ends at {}", p1, p2, p3, p4, first_end);

    let pinnacle = |number: u32, period: u8, start_age: u32, end_age: Option<u32>| Pinnacle {
        number,
        period,
        start_age,
        end_age,
        title: pinnacle_title(number).map(Narrative::from),
        description: pinnacle_description(number).map(Narrative::from),
    };

    [
        pinnacle(p1, 1, 0, Some(first_end)),
        pinnacle(p2, 2, first_end + 1, Some(first_end + PINNACLE_SPAN)),
        pinnacle(
            p3,
            3,
            first_end + PINNACLE_SPAN + 1,
            Some(first_end + 2 * PINNACLE_SPAN),
        ),
        pinnacle(p4, 4, first_end + 2 * PINNACLE_SPAN + 1, None),
    ]
}

pub fn challenges(birth_date: NaiveDate) -> [Challenge; 4] {
    let c = BirthComponents::from_date(birth_date);

    let c1 = reduce(c.month.abs_diff(c.day), false);
    let c2 = reduce(c.day.abs_diff(c.year), false);
    let c3 = reduce(c1.abs_diff(c2), false);
    let c4 = reduce(c.month.abs_diff(c.year), false);

    let challenge = |number: u32, period: u8| Challenge {
        number,
        period,
        title: challenge_title(number).map(Narrative::from),
        description: challenge_description(number).map(Narrative::from),
    };

    [
        challenge(c1, 1),
        challenge(c2, 2),
        challenge(c3, 3),
        challenge(c4, 4),
    ]
}

/// Full years between `birth_date` and `reference`; 0 if the reference is earlier.
pub fn age_on(birth_date: NaiveDate, reference: NaiveDate) -> u32 {
    reference.years_since(birth_date).unwrap_or(0)
}

pub fn pinnacle_for_age(birth_date: NaiveDate, age: u32) -> Pinnacle {
    let [p1, p2, p3, p4] = pinnacles(birth_date);
    [p1, p2, p3]
        .into_iter()
        .find(|p| p.contains_age(age))
        .unwrap_or(p4)
}

pub fn challenge_for_age(birth_date: NaiveDate, age: u32) -> Challenge {
    let period = pinnacle_for_age(birth_date, age).period;
    let [c1, c2, c3, c4] = challenges(birth_date);
    match period {
        1 => c1,
        2 => c2,
        3 => c3,
        _ => c4,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PeakKind {
    LifePath,
    Destiny,
    Completion,
}

impl PeakKind {
    fn significance(&self) -> Phrase {
        match self {
            Self::LifePath => Phrase::new(
                "An de aliniere cu Drumul Vieții - oportunități majore pentru împlinirea misiunii tale",
                "Year aligned with Life Path - major opportunities for fulfilling your mission",
                "Год выравнивания с Путём Жизни — большие возможности для выполнения вашей миссии",
            ),
            Self::Destiny => Phrase::new(
                "An de aliniere cu Destinul - dezvoltare a talentelor și abilităților",
                "Year aligned with Destiny - development of talents and abilities",
                "Год выравнивания с Судьбой — развитие талантов и способностей",
            ),
            Self::Completion => Phrase::new(
                "An de finalizare și tranziție - închidere cicluri și pregătire pentru noi începuturi",
                "Year of completion and transition - closing cycles and preparing for new beginnings",
                "Год завершения и перехода — закрытие циклов и подготовка к новым начинаниям",
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakYear {
    pub year: i32,
    pub personal_year: u32,
    pub kind: PeakKind,
    pub significance: Narrative,
}

/// Years in `from_year..=from_year + years_ahead` whose personal year matches the
/// life path, else the destiny, else is a 9.
///
/// Personal years never keep masters, so a master life path or destiny never matches.
pub fn peak_years(
    birth_date: NaiveDate,
    full_name: &str,
    from_year: i32,
    years_ahead: u32,
) -> Vec<PeakYear> {
    let life_path = life_path_number(birth_date);
    let destiny = destiny_number(full_name);

    (0..=years_ahead)
        .filter_map(|offset| {
            let year = from_year.checked_add(i32::try_from(offset).ok()?)?;
            let personal_year = personal_year_number(birth_date, year);
            let kind = if personal_year == life_path {
                PeakKind::LifePath
            } else if personal_year == destiny {
                PeakKind::Destiny
            } else if personal_year == 9 {
                PeakKind::Completion
            } else {
                return None;
            };
            Some(PeakYear {
                year,
                personal_year,
                kind,
                significance: kind.significance().into(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeStage {
    pub stage: u32,
    pub age: u32,
    pub name: Narrative,
    pub description: Narrative,
}

/// Nine-year stages of life, the ninth open-ended.
pub fn life_stage(age: u32) -> LifeStage {
    let stage = (age / STAGE_SPAN + 1).min(9);
    let (name, description) = match stage_meaning(stage) {
        Some(meaning) => (meaning.name.into(), meaning.description.into()),
        None => (Narrative::default(), Narrative::default()),
    };
    LifeStage {
        stage,
        age,
        name,
        description,
    }
}

/// 成就數：五個核心數字（不保留主數）依出現頻率排序，同頻率保留首次出現順序
pub fn achievements(core: &CoreNumbers) -> Vec<Achievement> {
    let sources = [
        core.life_path,
        core.destiny,
        core.soul_urge,
        core.personality,
        core.maturity,
    ];

    let mut ranked: Vec<(u32, u32, NumberSource)> = Vec::new();
    for derived in sources {
        let number = reduce(derived.value, false);
        if number == 0 {
            continue;
        }
        match ranked.iter_mut().find(|(n, _, _)| *n == number) {
            Some(entry) => entry.1 += 1,
            None => ranked.push((number, 1, derived.source)),
        }
    }

    // sort_by is stable, so equal counts keep first-appearance order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .map(|(number, count, source)| Achievement {
            number,
            count,
            source,
            description: achievement_meaning(number).into(),
        })
        .collect()
}

fn achievement_meaning(number: u32) -> Phrase {
    match number {
        1 => Phrase::new(
            "Talent pentru leadership și inițiativă. Poți conduce și inova.",
            "Talent for leadership and initiative. You can lead and innovate.",
            "Талант к лидерству и инициативе. Вы можете вести и инноваровать.",
        ),
        2 => Phrase::new(
            "Talent pentru cooperare și diplomație. Poți crea armonie.",
            "Talent for cooperation and diplomacy. You can create harmony.",
            "Талант к сотрудничеству и дипломатии. Вы можете создавать гармонию.",
        ),
        3 => Phrase::new(
            "Talent creativ și expresiv. Poți inspira prin artă și comunicare.",
            "Creative and expressive talent. You can inspire through art and communication.",
            "Творческий и выразительный талант. Вы можете вдохновлять через искусство и общение.",
        ),
        4 => Phrase::new(
            "Talent pentru construcție și organizare. Poți construi fundații solide.",
            "Talent for building and organization. You can build solid foundations.",
            "Талант к строительству и организации. Вы можете строить прочные основы.",
        ),
        5 => Phrase::new(
            "Talent pentru adaptare și explorare. Poți prospera în schimbare.",
            "Talent for adaptation and exploration. You can thrive in change.",
            "Талант к адаптации и исследованию. Вы можете процветать в переменах.",
        ),
        6 => Phrase::new(
            "Talent pentru îngrijire și responsabilitate. Poți proteja și ajuta.",
            "Talent for care and responsibility. You can protect and help.",
            "Талант к заботе и ответственности. Вы можете защищать и помогать.",
        ),
        7 => Phrase::new(
            "Talent pentru analiză și înțelepciune. Poți descoperi adevăruri profunde.",
            "Talent for analysis and wisdom. You can discover deep truths.",
            "Талант к анализу и мудрости. Вы можете открывать глубокие истины.",
        ),
        8 => Phrase::new(
            "Talent pentru realizare materială. Poți construi abundență.",
            "Talent for material achievement. You can build abundance.",
            "Талант к материальным достижениям. Вы можете создавать изобилие.",
        ),
        9 => Phrase::new(
            "Talent pentru compasiune și serviciu. Poți ajuta umanitatea.",
            "Talent for compassion and service. You can help humanity.",
            "Талант к состраданию и служению. Вы можете помогать человечеству.",
        ),
        _ => Phrase::new(
            "Talent ascuns care poate fi dezvoltat.",
            "Hidden talent that can be developed.",
            "Скрытый талант, который можно развить.",
        ),
    }
}

pub fn pinnacle_title(number: u32) -> Option<Phrase> {
    let title = match number {
        1 => Phrase::new("Independență și Inițiativă", "Independence and Initiative", "Независимость и Инициатива"),
        2 => Phrase::new("Cooperare și Diplomație", "Cooperation and Diplomacy", "Сотрудничество и Дипломатия"),
        3 => Phrase::new("Expresie Creativă", "Creative Expression", "Творческое Выражение"),
        4 => Phrase::new("Construcție și Stabilitate", "Building and Stability", "Строительство и Стабильность"),
        5 => Phrase::new("Schimbare și Libertate", "Change and Freedom", "Перемены и Свобода"),
        6 => Phrase::new("Responsabilitate și Armonie", "Responsibility and Harmony", "Ответственность и Гармония"),
        7 => Phrase::new("Introspecție și Cunoaștere", "Introspection and Knowledge", "Самоанализ и Познание"),
        8 => Phrase::new("Realizare și Abundență", "Achievement and Abundance", "Достижение и Изобилие"),
        9 => Phrase::new("Compasiune și Finalizare", "Compassion and Completion", "Сострадание и Завершение"),
        11 => Phrase::new("Iluminare și Inspirație", "Illumination and Inspiration", "Просветление и Вдохновение"),
        22 => Phrase::new("Construcție Maestră", "Master Building", "Мастерское Строительство"),
        33 => Phrase::new("Învățătură și Vindecare", "Teaching and Healing", "Обучение и Исцеление"),
        _ => return None,
    };
    Some(title)
}

pub fn challenge_title(number: u32) -> Option<Phrase> {
    let title = match number {
        0 => Phrase::new("Alegerea Liberă", "Free Choice", "Свободный Выбор"),
        1 => Phrase::new("Încredere în Sine", "Self-Confidence", "Уверенность в Себе"),
        2 => Phrase::new("Sensibilitate și Cooperare", "Sensitivity and Cooperation", "Чувствительность и Сотрудничество"),
        3 => Phrase::new("Exprimare Autentică", "Authentic Expression", "Подлинное Выражение"),
        4 => Phrase::new("Ordine și Disciplină", "Order and Discipline", "Порядок и Дисциплина"),
        5 => Phrase::new("Libertate Responsabilă", "Responsible Freedom", "Ответственная Свобода"),
        6 => Phrase::new("Responsabilitate Echilibrată", "Balanced Responsibility", "Сбалансированная Ответственность"),
        7 => Phrase::new("Încredere și Deschidere", "Trust and Openness", "Доверие и Открытость"),
        8 => Phrase::new("Putere și Integritate", "Power and Integrity", "Сила и Честность"),
        _ => return None,
    };
    Some(title)
}

pub fn pinnacle_description(number: u32) -> Option<Phrase> {
    let description = match number {
        1 => Phrase::new(
            "Această perioadă te cheamă să îți dezvolți independența și să preiei inițiativa în viață. Este timpul să îți urmezi propriile idei și să fii un lider.",
            "This period calls you to develop your independence and take initiative in life. It's time to follow your own ideas and be a leader.",
            "Этот период призывает вас развивать независимость и проявлять инициативу в жизни. Время следовать собственным идеям и быть лидером.",
        ),
        2 => Phrase::new(
            "Perioada pune accent pe parteneriate, răbdare și sensibilitate. Succesul vine prin colaborare și înțelegerea nevoilor altora.",
            "This period emphasizes partnerships, patience, and sensitivity. Success comes through collaboration and understanding others' needs.",
            "Период делает акцент на партнёрстве, терпении и чувствительности. Успех приходит через сотрудничество и понимание потребностей других.",
        ),
        3 => Phrase::new(
            "O perioadă de creativitate, bucurie și auto-exprimare. Este momentul să îți dezvolți talentele artistice și să comunici cu lumea.",
            "A period of creativity, joy, and self-expression. It's time to develop your artistic talents and communicate with the world.",
            "Период творчества, радости и самовыражения. Время развивать художественные таланты и общаться с миром.",
        ),
        4 => Phrase::new(
            "Perioadă de muncă asiduă și construire a fundamentelor solide. Disciplina și organizarea sunt esențiale pentru succes.",
            "A period of hard work and building solid foundations. Discipline and organization are essential for success.",
            "Период упорной работы и построения прочных основ. Дисциплина и организация необходимы для успеха.",
        ),
        5 => Phrase::new(
            "O perioadă dinamică de schimbări și oportunități noi. Adaptabilitatea și curajul de a explora sunt cheile progresului.",
            "A dynamic period of changes and new opportunities. Adaptability and courage to explore are the keys to progress.",
            "Динамичный период перемен и новых возможностей. Адаптивность и смелость исследовать — ключи к прогрессу.",
        ),
        6 => Phrase::new(
            "Perioadă centrată pe familie, responsabilități casnice și serviciu față de alții. Armonia în relații este prioritară.",
            "Period centered on family, domestic responsibilities, and service to others. Harmony in relationships is a priority.",
            "Период, сосредоточенный на семье, домашних обязанностях и служении другим. Гармония в отношениях приоритетна.",
        ),
        7 => Phrase::new(
            "O perioadă de căutare interioară și dezvoltare spirituală. Timpul pentru studiu, reflecție și găsirea sensului profund.",
            "A period of inner searching and spiritual development. Time for study, reflection, and finding deeper meaning.",
            "Период внутреннего поиска и духовного развития. Время для учёбы, размышлений и поиска глубокого смысла.",
        ),
        8 => Phrase::new(
            "Perioadă de succes material și recunoaștere. Abilitățile de leadership și viziunea de afaceri sunt recompensate.",
            "Period of material success and recognition. Leadership abilities and business vision are rewarded.",
            "Период материального успеха и признания. Лидерские способности и деловое видение вознаграждаются.",
        ),
        9 => Phrase::new(
            "O perioadă de generozitate, eliberare și serviciu umanitar. Timpul pentru a încheia cicluri vechi și a ajuta pe alții.",
            "A period of generosity, release, and humanitarian service. Time to close old cycles and help others.",
            "Период щедрости, освобождения и гуманитарного служения. Время закрыть старые циклы и помогать другим.",
        ),
        11 => Phrase::new(
            "O perioadă master de intuiție intensificată și inspirație spirituală. Ești chemat să iluminezi calea altora.",
            "A master period of heightened intuition and spiritual inspiration. You are called to illuminate the path for others.",
            "Мастер-период обострённой интуиции и духовного вдохновения. Вы призваны освещать путь другим.",
        ),
        22 => Phrase::new(
            "Perioadă de manifestare la scară largă. Ai potențialul de a crea proiecte care să beneficieze mulți oameni.",
            "Period of large-scale manifestation. You have the potential to create projects that benefit many people.",
            "Период крупномасштабного проявления. У вас есть потенциал создавать проекты, которые принесут пользу многим.",
        ),
        33 => Phrase::new(
            "Cea mai înaltă vibrație a pinnacle-urilor. O chemare pentru a fi un ghid spiritual și vindecător pentru umanitate.",
            "The highest vibration of pinnacles. A calling to be a spiritual guide and healer for humanity.",
            "Высшая вибрация вершин. Призвание быть духовным наставником и целителем для человечества.",
        ),
        _ => return None,
    };
    Some(description)
}

pub fn challenge_description(number: u32) -> Option<Phrase> {
    let description = match number {
        0 => Phrase::new(
            "Provocarea 0 este rară și specială. Ai de-a face cu toate provocările și niciuna simultan. Libertatea de alegere este și binecuvântare și responsabilitate.",
            "Challenge 0 is rare and special. You deal with all challenges and none simultaneously. Freedom of choice is both a blessing and responsibility.",
            "Вызов 0 редкий и особенный. Вы имеете дело со всеми вызовами и ни с одним одновременно. Свобода выбора — благословение и ответственность.",
        ),
        1 => Phrase::new(
            "Lecția este să îți dezvolți încrederea în sine și independența. Evită extremele de agresivitate sau pasivitate.",
            "The lesson is to develop self-confidence and independence. Avoid extremes of aggressiveness or passivity.",
            "Урок — развить уверенность в себе и независимость. Избегайте крайностей агрессивности или пассивности.",
        ),
        2 => Phrase::new(
            "Provocarea este să găsești echilibrul între sensibilitate și forță. Învață să cooperezi fără a te pierde pe tine.",
            "The challenge is to find balance between sensitivity and strength. Learn to cooperate without losing yourself.",
            "Вызов — найти баланс между чувствительностью и силой. Научитесь сотрудничать, не теряя себя.",
        ),
        3 => Phrase::new(
            "Lecția este să îți exprimi creativitatea și emoțiile într-un mod sănătos. Evită auto-critica excesivă.",
            "The lesson is to express your creativity and emotions in a healthy way. Avoid excessive self-criticism.",
            "Урок — выражать творчество и эмоции здоровым образом. Избегайте чрезмерной самокритики.",
        ),
        4 => Phrase::new(
            "Provocarea este să găsești echilibrul între muncă și viață. Învață să construiești fără a deveni rigid.",
            "The challenge is to find balance between work and life. Learn to build without becoming rigid.",
            "Вызов — найти баланс между работой и жизнью. Научитесь строить, не становясь жёстким.",
        ),
        5 => Phrase::new(
            "Lecția este să îți folosești libertatea cu înțelepciune. Evită excesele și impulsivitatea distructivă.",
            "The lesson is to use your freedom wisely. Avoid excess and destructive impulsivity.",
            "Урок — мудро использовать свободу. Избегайте излишеств и разрушительной импульсивности.",
        ),
        6 => Phrase::new(
            "Provocarea este să ai grijă de alții fără a te neglija pe tine. Evită perfecționismul și controlul excesiv.",
            "The challenge is to care for others without neglecting yourself. Avoid perfectionism and excessive control.",
            "Вызов — заботиться о других, не пренебрегая собой. Избегайте перфекционизма и чрезмерного контроля.",
        ),
        7 => Phrase::new(
            "Lecția este să găsești echilibrul între analiză și intuiție. Evită izolarea și scepticismul excesiv.",
            "The lesson is to find balance between analysis and intuition. Avoid isolation and excessive skepticism.",
            "Урок — найти баланс между анализом и интуицией. Избегайте изоляции и чрезмерного скептицизма.",
        ),
        8 => Phrase::new(
            "Provocarea este să folosești puterea și resursele cu integritate. Evită materialismul și manipularea.",
            "The challenge is to use power and resources with integrity. Avoid materialism and manipulation.",
            "Вызов — использовать силу и ресурсы честно. Избегайте материализма и манипуляций.",
        ),
        _ => return None,
    };
    Some(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::letters::StandardSystem;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_pinnacle_numbers_and_ages() {
        // day 6, month 5, year 1; life path 3
        let birth = date(1990, 5, 15);
        let [p1, p2, p3, p4] = pinnacles(birth);

        assert_eq!(p1.number, 11);
        assert_eq!(p2.number, 7);
        assert_eq!(p3.number, 9);
        assert_eq!(p4.number, 6);

        assert_eq!((p1.start_age, p1.end_age), (0, Some(33)));
        assert_eq!((p2.start_age, p2.end_age), (34, Some(42)));
        assert_eq!((p3.start_age, p3.end_age), (43, Some(51)));
        assert_eq!((p4.start_age, p4.end_age), (52, None));
        assert_eq!(p1.title.as_ref().map(|t| t.en.as_str()), Some("Illumination and Inspiration"));
    }

    #[test]
    fn test_pinnacle_timing_ignores_master_life_path() {
        // life path 11 reduces to 2 for timing
        assert_eq!(first_pinnacle_end(date(1998, 1, 1)), 34);
    }

    #[test]
    fn test_pinnacles_partition_ages() {
        let all = pinnacles(date(1987, 12, 29));
        for age in 0..120 {
            let hits = all.iter().filter(|p| p.contains_age(age)).count();
            assert_eq!(hits, 1, "age {} covered {} times", age, hits);
        }
    }

    #[test]
    fn test_challenges() {
        let [c1, c2, c3, c4] = challenges(date(1990, 5, 15));
        assert_eq!(c1.number, 1); // |5 - 6|
        assert_eq!(c2.number, 5); // |6 - 1|
        assert_eq!(c3.number, 4); // |1 - 5|
        assert_eq!(c4.number, 4); // |5 - 1|
        assert_eq!(c1.title.map(|t| t.en), Some("Self-Confidence".to_string()));
    }

    #[test]
    fn test_for_age_lookups() {
        let birth = date(1990, 5, 15);
        assert_eq!(pinnacle_for_age(birth, 10).period, 1);
        assert_eq!(pinnacle_for_age(birth, 34).period, 2);
        assert_eq!(pinnacle_for_age(birth, 90).period, 4);
        assert_eq!(challenge_for_age(birth, 45).number, 4);
        assert_eq!(age_on(birth, date(2024, 5, 14)), 33);
        assert_eq!(age_on(birth, date(2024, 5, 15)), 34);
        assert_eq!(age_on(birth, date(1980, 1, 1)), 0);
    }

    #[test]
    fn test_achievements_rank_by_frequency() {
        // life path 7, destiny 6, soul 11->2, personality 4, maturity 4
        let core = CoreNumbers::calculate("Maria", date(2000, 7, 7), &StandardSystem);
        let ranked = achievements(&core);

        let numbers: Vec<u32> = ranked.iter().map(|a| a.number).collect();
        assert_eq!(numbers, vec![4, 7, 6, 2]);
        assert_eq!(ranked[0].count, 2);
        assert_eq!(ranked[0].source, NumberSource::Personality);
        assert!(ranked[0].description.en.starts_with("Talent for building"));
    }

    #[test]
    fn test_achievements_skip_empty_names() {
        let core = CoreNumbers::calculate("", date(2000, 7, 7), &StandardSystem);
        // destiny, soul and personality are 0; life path and maturity are both 7
        let ranked = achievements(&core);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].number, 7);
        assert_eq!(ranked[0].count, 2);
    }

    #[test]
    fn test_pinnacle_and_challenge_descriptions() {
        let [p1, ..] = pinnacles(date(1990, 5, 15));
        let description = p1.description.map(|d| d.en).unwrap_or_default();
        assert!(description.starts_with("A master period of heightened intuition"));

        let [c1, ..] = challenges(date(1990, 5, 15));
        assert!(c1.description.unwrap().en.starts_with("The lesson is to develop self-confidence"));
        assert!(challenge_description(0).is_some());
        assert!(challenge_description(9).is_none());
        assert!(pinnacle_description(0).is_none());
    }

    #[test]
    fn test_peak_years() {
        // life path 3, destiny 11; personal years 2024..=2033 run 1, 2, 3, ...
        let peaks = peak_years(date(1990, 5, 15), "Maria Popescu", 2024, 9);
        let summary: Vec<(i32, u32, PeakKind)> = peaks
            .iter()
            .map(|p| (p.year, p.personal_year, p.kind))
            .collect();
        assert_eq!(
            summary,
            vec![(2026, 3, PeakKind::LifePath), (2032, 9, PeakKind::Completion)]
        );
        assert!(peaks[0].significance.en.starts_with("Year aligned with Life Path"));
    }

    #[test]
    fn test_peak_years_life_path_nine_wins_over_completion() {
        // life path 9, destiny 7
        let peaks = peak_years(date(1985, 11, 2), "Ion Ionescu", 2020, PEAK_YEAR_HORIZON);
        let summary: Vec<(i32, PeakKind)> = peaks.iter().map(|p| (p.year, p.kind)).collect();
        assert_eq!(
            summary,
            vec![
                (2021, PeakKind::LifePath),
                (2028, PeakKind::Destiny),
                (2030, PeakKind::LifePath),
                (2037, PeakKind::Destiny),
                (2039, PeakKind::LifePath),
            ]
        );
    }

    #[test]
    fn test_life_stage() {
        assert_eq!(life_stage(0).stage, 1);
        assert_eq!(life_stage(8).stage, 1);
        assert_eq!(life_stage(9).stage, 2);
        assert_eq!(life_stage(34).stage, 4);
        assert_eq!(life_stage(34).name.en, "Building");
        assert_eq!(life_stage(80).stage, 9);
        assert_eq!(life_stage(120).stage, 9);
        assert_eq!(life_stage(120).name.en, "Completion");
    }
}
