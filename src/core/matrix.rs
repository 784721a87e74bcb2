use crate::core::reduction::canonical;
use crate::domain::model::{Narrative, NarrativeList, Phrase};
use serde::{Deserialize, Serialize};

/// Row/column order of the score table.
pub const MATRIX_KEYS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];

pub const FALLBACK_SCORE: u32 = 50;

#[rustfmt::skip]
static SCORES: [[u8; 12]; 12] = [
    //    1   2   3   4   5   6   7   8   9  11  22  33
    [70, 60, 90, 55, 85, 65, 75, 80, 85, 80, 75, 70], // 1
    [60, 85, 75, 90, 50, 95, 70, 80, 75, 95, 85, 90], // 2
    [90, 75, 80, 45, 95, 90, 60, 55, 95, 85, 60, 95], // 3
    [55, 90, 45, 75, 40, 85, 80, 95, 50, 70, 95, 75], // 4
    [85, 50, 95, 40, 70, 55, 90, 60, 80, 75, 55, 70], // 5
    [65, 95, 90, 85, 55, 85, 50, 75, 95, 90, 85, 98], // 6
    [75, 70, 60, 80, 90, 50, 90, 65, 70, 95, 80, 85], // 7
    [80, 80, 55, 95, 60, 75, 65, 75, 60, 70, 95, 70], // 8
    [85, 75, 95, 50, 80, 95, 70, 60, 80, 90, 75, 98], // 9
    [80, 95, 85, 70, 75, 90, 95, 70, 90, 90, 95, 98], // 11
    [75, 85, 60, 95, 55, 85, 80, 95, 75, 95, 85, 95], // 22
    [70, 90, 95, 75, 70, 98, 85, 70, 98, 98, 95, 95], // 33
];

fn key_index(n: u32) -> Option<usize> {
    MATRIX_KEYS.iter().position(|&k| k == n)
}

/// Symmetric pair score in [0, 100]. Masters are looked up as themselves,
/// anything else is reduced first; keys outside the table score 50.
pub fn pair_score(a: u32, b: u32) -> u32 {
    match (key_index(canonical(a)), key_index(canonical(b))) {
        (Some(i), Some(j)) => u32::from(SCORES[i][j]),
        _ => FALLBACK_SCORE,
    }
}

/// Qualitative notes for a pair of base numbers.
#[derive(Debug, Clone, Copy)]
pub struct PairDetail {
    pub strengths: &'static [Phrase],
    pub challenges: &'static [Phrase],
    pub advice: Phrase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixDetail {
    pub strengths: NarrativeList,
    pub challenges: NarrativeList,
    pub advice: Narrative,
}

impl From<&PairDetail> for MatrixDetail {
    fn from(detail: &PairDetail) -> Self {
        Self {
            strengths: NarrativeList::from_phrases(detail.strengths),
            challenges: NarrativeList::from_phrases(detail.challenges),
            advice: detail.advice.into(),
        }
    }
}

// 主數對應到基礎數字查詢細節：11→2, 22→4, 33→6
fn detail_base(n: u32) -> Option<u32> {
    match canonical(n) {
        11 => Some(2),
        22 => Some(4),
        33 => Some(6),
        base @ 1..=9 => Some(base),
        _ => None,
    }
}

// Upper triangle (a <= b) stored row by row; row a holds 10 - a cells.
fn triangle_index(a: u32, b: u32) -> usize {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let row_offset = 9 * (lo - 1) - (lo - 1) * (lo.saturating_sub(2)) / 2;
    (row_offset + hi - lo) as usize
}

pub fn pair_detail(a: u32, b: u32) -> Option<&'static PairDetail> {
    let a = detail_base(a)?;
    let b = detail_base(b)?;
    PAIR_DETAILS.get(triangle_index(a, b))
}

/// The score table together with its per-cell notes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityMatrix;

impl CompatibilityMatrix {
    pub fn keys(&self) -> &'static [u32] {
        &MATRIX_KEYS
    }

    pub fn score(&self, a: u32, b: u32) -> u32 {
        pair_score(a, b)
    }

    pub fn detail(&self, a: u32, b: u32) -> Option<MatrixDetail> {
        pair_detail(a, b).map(MatrixDetail::from)
    }

    /// Scores of `number` against every key, in key order.
    pub fn row(&self, number: u32) -> Vec<(u32, u32)> {
        MATRIX_KEYS
            .iter()
            .map(|&other| (other, pair_score(number, other)))
            .collect()
    }
}

static PAIR_DETAILS: [PairDetail; 45] = [
    // 1 × 1
    PairDetail {
        strengths: &[
            Phrase::new("Ambiție comună", "Shared ambition", "Общие амбиции"),
            Phrase::new("Respect reciproc", "Mutual respect", "Взаимное уважение"),
        ],
        challenges: &[
            Phrase::new("Competiție", "Competition", "Конкуренция"),
            Phrase::new("Ego mare", "Big egos", "Большое эго"),
        ],
        advice: Phrase::new("Învățați să colaborați, nu să competiți.", "Learn to collaborate, not compete.", "Учитесь сотрудничать, а не конкурировать."),
    },
    // 1 × 2
    PairDetail {
        strengths: &[
            Phrase::new("Echilibru perfect", "Perfect balance", "Идеальный баланс"),
            Phrase::new("Sprijin reciproc", "Mutual support", "Взаимная поддержка"),
        ],
        challenges: &[
            Phrase::new("Dominare posibilă", "Possible dominance", "Возможное доминирование"),
            Phrase::new("Sensibilitate diferită", "Different sensitivity", "Разная чувствительность"),
        ],
        advice: Phrase::new("Lăsați 2 să aducă armonie în deciziile voastre.", "Let 2 bring harmony to your decisions.", "Позвольте 2 привнести гармонию в ваши решения."),
    },
    // 1 × 3
    PairDetail {
        strengths: &[
            Phrase::new("Energie creativă", "Creative energy", "Творческая энергия"),
            Phrase::new("Entuziasm comun", "Shared enthusiasm", "Общий энтузиазм"),
        ],
        challenges: &[
            Phrase::new("Lipsa de practicism", "Lack of practicality", "Недостаток практичности"),
            Phrase::new("Superficialitate", "Superficiality", "Поверхностность"),
        ],
        advice: Phrase::new("Canalizați creativitatea în proiecte concrete.", "Channel creativity into concrete projects.", "Направьте творчество в конкретные проекты."),
    },
    // 1 × 4
    PairDetail {
        strengths: &[
            Phrase::new("Disciplină și inițiativă", "Discipline and initiative", "Дисциплина и инициатива"),
        ],
        challenges: &[
            Phrase::new("Conflict între libertate și structură", "Conflict between freedom and structure", "Конфликт между свободой и структурой"),
        ],
        advice: Phrase::new("Respectați nevoile diferite ale celuilalt.", "Respect each other's different needs.", "Уважайте разные потребности друг друга."),
    },
    // 1 × 5
    PairDetail {
        strengths: &[
            Phrase::new("Aventură", "Adventure", "Приключения"),
            Phrase::new("Independență reciprocă", "Mutual independence", "Взаимная независимость"),
        ],
        challenges: &[
            Phrase::new("Instabilitate", "Instability", "Нестабильность"),
            Phrase::new("Lipsa de angajament", "Lack of commitment", "Отсутствие обязательств"),
        ],
        advice: Phrase::new("Găsiți echilibrul între libertate și loialitate.", "Find balance between freedom and loyalty.", "Найдите баланс между свободой и верностью."),
    },
    // 1 × 6
    PairDetail {
        strengths: &[
            Phrase::new("Protecție și leadership", "Protection and leadership", "Защита и лидерство"),
        ],
        challenges: &[
            Phrase::new("Control vs armonie", "Control vs harmony", "Контроль vs гармония"),
        ],
        advice: Phrase::new("Lăsați 6 să creeze căminul, 1 să conducă.", "Let 6 create the home, 1 lead.", "Пусть 6 создаёт дом, а 1 ведёт."),
    },
    // 1 × 7
    PairDetail {
        strengths: &[
            Phrase::new("Respect intelectual", "Intellectual respect", "Интеллектуальное уважение"),
        ],
        challenges: &[
            Phrase::new("Comunicare diferită", "Different communication", "Разная коммуникация"),
            Phrase::new("Nevoi sociale opuse", "Opposite social needs", "Противоположные социальные потребности"),
        ],
        advice: Phrase::new("Oferiți-vă spațiu pentru a fi voi înșivă.", "Give each other space to be yourselves.", "Дайте друг другу пространство быть собой."),
    },
    // 1 × 8
    PairDetail {
        strengths: &[
            Phrase::new("Succes comun", "Shared success", "Общий успех"),
            Phrase::new("Ambiție puternică", "Strong ambition", "Сильные амбиции"),
        ],
        challenges: &[
            Phrase::new("Lupta pentru putere", "Power struggle", "Борьба за власть"),
        ],
        advice: Phrase::new("Definiți roluri clare de lider în diferite domenii.", "Define clear leadership roles in different areas.", "Определите чёткие роли лидера в разных областях."),
    },
    // 1 × 9
    PairDetail {
        strengths: &[
            Phrase::new("Viziune largă", "Broad vision", "Широкое видение"),
            Phrase::new("Energie dinamică", "Dynamic energy", "Динамичная энергия"),
        ],
        challenges: &[
            Phrase::new("Egoism vs altruism", "Selfishness vs altruism", "Эгоизм vs альтруизм"),
        ],
        advice: Phrase::new("Învățați să dați fără așteptări.", "Learn to give without expectations.", "Учитесь давать без ожиданий."),
    },
    // 2 × 2
    PairDetail {
        strengths: &[
            Phrase::new("Empatie profundă", "Deep empathy", "Глубокая эмпатия"),
            Phrase::new("Înțelegere", "Understanding", "Понимание"),
        ],
        challenges: &[
            Phrase::new("Pasivitate", "Passivity", "Пассивность"),
            Phrase::new("Evitarea conflictelor", "Conflict avoidance", "Избегание конфликтов"),
        ],
        advice: Phrase::new("Dezvoltați-vă assertivitatea împreună.", "Develop assertiveness together.", "Развивайте уверенность вместе."),
    },
    // 2 × 3
    PairDetail {
        strengths: &[
            Phrase::new("Creativitate și sensibilitate", "Creativity and sensitivity", "Творчество и чувствительность"),
        ],
        challenges: &[
            Phrase::new("Superficialitate vs profunzime", "Superficiality vs depth", "Поверхностность vs глубина"),
        ],
        advice: Phrase::new("Combinați bucuria cu intimitatea.", "Combine joy with intimacy.", "Сочетайте радость с близостью."),
    },
    // 2 × 4
    PairDetail {
        strengths: &[
            Phrase::new("Stabilitate și armonie", "Stability and harmony", "Стабильность и гармония"),
        ],
        challenges: &[
            Phrase::new("Rigiditate ocazională", "Occasional rigidity", "Случайная ригидность"),
        ],
        advice: Phrase::new("Construiți împreună un cămin solid.", "Build a solid home together.", "Постройте вместе крепкий дом."),
    },
    // 2 × 5
    PairDetail {
        strengths: &[
            Phrase::new("Echilibru între calm și aventură", "Balance between calm and adventure", "Баланс между спокойствием и приключениями"),
        ],
        challenges: &[
            Phrase::new("Nevoi foarte diferite", "Very different needs", "Очень разные потребности"),
        ],
        advice: Phrase::new("Acceptați diferențele fără a încerca să vă schimbați.", "Accept differences without trying to change each other.", "Принимайте различия, не пытаясь изменить друг друга."),
    },
    // 2 × 6
    PairDetail {
        strengths: &[
            Phrase::new("Armonie perfectă", "Perfect harmony", "Идеальная гармония"),
            Phrase::new("Devotament", "Devotion", "Преданность"),
        ],
        challenges: &[
            Phrase::new("Dependență emoțională", "Emotional dependency", "Эмоциональная зависимость"),
        ],
        advice: Phrase::new("Mențineți identitățile individuale.", "Maintain individual identities.", "Сохраняйте индивидуальность."),
    },
    // 2 × 7
    PairDetail {
        strengths: &[
            Phrase::new("Intuiție combinată", "Combined intuition", "Совместная интуиция"),
        ],
        challenges: &[
            Phrase::new("Comunicare diferită", "Different communication", "Разная коммуникация"),
        ],
        advice: Phrase::new("Respectați nevoia de spațiu a lui 7.", "Respect 7's need for space.", "Уважайте потребность 7 в пространстве."),
    },
    // 2 × 8
    PairDetail {
        strengths: &[
            Phrase::new("Diplomație și putere", "Diplomacy and power", "Дипломатия и сила"),
        ],
        challenges: &[
            Phrase::new("Dezechilibru de putere", "Power imbalance", "Дисбаланс власти"),
        ],
        advice: Phrase::new("Stabiliți echitate în decizii.", "Establish equity in decisions.", "Установите справедливость в решениях."),
    },
    // 2 × 9
    PairDetail {
        strengths: &[
            Phrase::new("Compasiune comună", "Shared compassion", "Общее сострадание"),
        ],
        challenges: &[
            Phrase::new("Prea multă dăruire", "Too much giving", "Слишком много отдачи"),
        ],
        advice: Phrase::new("Învățați să primiți, nu doar să dați.", "Learn to receive, not just give.", "Учитесь принимать, а не только давать."),
    },
    // 3 × 3
    PairDetail {
        strengths: &[
            Phrase::new("Bucurie dublă", "Double joy", "Двойная радость"),
            Phrase::new("Creativitate", "Creativity", "Творчество"),
        ],
        challenges: &[
            Phrase::new("Lipsa de focus", "Lack of focus", "Отсутствие фокуса"),
            Phrase::new("Risipire energie", "Scattered energy", "Рассеянная энергия"),
        ],
        advice: Phrase::new("Stabiliți obiective concrete împreună.", "Set concrete goals together.", "Ставьте конкретные цели вместе."),
    },
    // 3 × 4
    PairDetail {
        strengths: &[
            Phrase::new("Creativitate și structură", "Creativity and structure", "Творчество и структура"),
        ],
        challenges: &[
            Phrase::new("Conflict între libertate și disciplină", "Freedom vs discipline conflict", "Конфликт свободы и дисциплины"),
        ],
        advice: Phrase::new("Respectați stilurile diferite de lucru.", "Respect different working styles.", "Уважайте разные стили работы."),
    },
    // 3 × 5
    PairDetail {
        strengths: &[
            Phrase::new("Aventură", "Adventure", "Приключения"),
            Phrase::new("Libertate", "Freedom", "Свобода"),
            Phrase::new("Bucurie", "Joy", "Радость"),
        ],
        challenges: &[
            Phrase::new("Instabilitate", "Instability", "Нестабильность"),
            Phrase::new("Lipsa de fundament", "Lack of foundation", "Отсутствие основы"),
        ],
        advice: Phrase::new("Construiți o bază stabilă pentru aventuri.", "Build a stable base for adventures.", "Создайте стабильную базу для приключений."),
    },
    // 3 × 6
    PairDetail {
        strengths: &[
            Phrase::new("Creativitate și cămin", "Creativity and home", "Творчество и дом"),
        ],
        challenges: &[
            Phrase::new("Responsabilitate vs libertate", "Responsibility vs freedom", "Ответственность vs свобода"),
        ],
        advice: Phrase::new("Creați un cămin creativ și armonios.", "Create a creative and harmonious home.", "Создайте творческий и гармоничный дом."),
    },
    // 3 × 7
    PairDetail {
        strengths: &[
            Phrase::new("Creativitate și profunzime", "Creativity and depth", "Творчество и глубина"),
        ],
        challenges: &[
            Phrase::new("Extroversiune vs introversiune", "Extroversion vs introversion", "Экстраверсия vs интроверсия"),
        ],
        advice: Phrase::new("Găsiți activități care combină socialul cu singurătatea.", "Find activities combining social with solitude.", "Найдите занятия, сочетающие общение и уединение."),
    },
    // 3 × 8
    PairDetail {
        strengths: &[
            Phrase::new("Creativitate și succes", "Creativity and success", "Творчество и успех"),
        ],
        challenges: &[
            Phrase::new("Priorități diferite", "Different priorities", "Разные приоритеты"),
        ],
        advice: Phrase::new("Combinați talentele pentru proiecte comune.", "Combine talents for common projects.", "Объединяйте таланты для общих проектов."),
    },
    // 3 × 9
    PairDetail {
        strengths: &[
            Phrase::new("Creativitate și viziune", "Creativity and vision", "Творчество и видение"),
        ],
        challenges: &[
            Phrase::new("Idealism excesiv", "Excessive idealism", "Чрезмерный идеализм"),
        ],
        advice: Phrase::new("Transformați visele în acțiuni concrete.", "Transform dreams into concrete actions.", "Превращайте мечты в конкретные действия."),
    },
    // 4 × 4
    PairDetail {
        strengths: &[
            Phrase::new("Soliditate", "Solidity", "Солидность"),
        ],
        challenges: &[
            Phrase::new("Prea multă rutină", "Too much routine", "Слишком много рутины"),
        ],
        advice: Phrase::new("Introduceți noutăți.", "Introduce novelties.", "Вводите новизну."),
    },
    // 4 × 5
    PairDetail {
        strengths: &[
            Phrase::new("Echilibru potențial", "Potential balance", "Потенциальный баланс"),
        ],
        challenges: &[
            Phrase::new("Libertate vs structură", "Freedom vs structure", "Свобода vs структура"),
        ],
        advice: Phrase::new("Acceptați diferențele.", "Accept differences.", "Принимайте различия."),
    },
    // 4 × 6
    PairDetail {
        strengths: &[
            Phrase::new("Familie și stabilitate", "Family and stability", "Семья и стабильность"),
        ],
        challenges: &[
            Phrase::new("Control", "Control", "Контроль"),
        ],
        advice: Phrase::new("Echilibru în responsabilități.", "Balance in responsibilities.", "Баланс в обязанностях."),
    },
    // 4 × 7
    PairDetail {
        strengths: &[
            Phrase::new("Respect pentru muncă", "Respect for work", "Уважение к работе"),
        ],
        challenges: &[
            Phrase::new("Comunicare", "Communication", "Коммуникация"),
        ],
        advice: Phrase::new("Găsiți subiecte comune.", "Find common topics.", "Найдите общие темы."),
    },
    // 4 × 8
    PairDetail {
        strengths: &[
            Phrase::new("Succes material", "Material success", "Материальный успех"),
        ],
        challenges: &[
            Phrase::new("Workaholic", "Workaholic", "Трудоголизм"),
        ],
        advice: Phrase::new("Relaxați-vă împreună.", "Relax together.", "Расслабляйтесь вместе."),
    },
    // 4 × 9
    PairDetail {
        strengths: &[
            Phrase::new("Practicism și viziune", "Practicality and vision", "Практичность и видение"),
        ],
        challenges: &[
            Phrase::new("Priorități", "Priorities", "Приоритеты"),
        ],
        advice: Phrase::new("Găsiți scop comun.", "Find common purpose.", "Найдите общую цель."),
    },
    // 5 × 5
    PairDetail {
        strengths: &[
            Phrase::new("Entuziasm dublu", "Double enthusiasm", "Двойной энтузиазм"),
        ],
        challenges: &[
            Phrase::new("Instabilitate totală", "Total instability", "Полная нестабильность"),
        ],
        advice: Phrase::new("Ancorați-vă reciproc.", "Anchor each other.", "Якорите друг друга."),
    },
    // 5 × 6
    PairDetail {
        strengths: &[
            Phrase::new("Varietate în cămin", "Variety in home", "Разнообразие в доме"),
        ],
        challenges: &[
            Phrase::new("Libertate vs responsabilitate", "Freedom vs responsibility", "Свобода vs ответственность"),
        ],
        advice: Phrase::new("Flexibilitate în așteptări.", "Flexibility in expectations.", "Гибкость в ожиданиях."),
    },
    // 5 × 7
    PairDetail {
        strengths: &[
            Phrase::new("Curiozitate", "Curiosity", "Любопытство"),
        ],
        challenges: &[
            Phrase::new("Social vs solitar", "Social vs solitary", "Социальное vs уединённое"),
        ],
        advice: Phrase::new("Respectați ritmurile.", "Respect rhythms.", "Уважайте ритмы."),
    },
    // 5 × 8
    PairDetail {
        strengths: &[
            Phrase::new("Dinamism", "Dynamism", "Динамизм"),
        ],
        challenges: &[
            Phrase::new("Control vs libertate", "Control vs freedom", "Контроль vs свобода"),
        ],
        advice: Phrase::new("Autonomie în proiecte.", "Autonomy in projects.", "Автономия в проектах."),
    },
    // 5 × 9
    PairDetail {
        strengths: &[
            Phrase::new("Viziune largă", "Broad vision", "Широкое видение"),
        ],
        challenges: &[
            Phrase::new("Angajament", "Commitment", "Обязательства"),
        ],
        advice: Phrase::new("Scopuri comune mari.", "Big common goals.", "Большие общие цели."),
    },
    // 6 × 6
    PairDetail {
        strengths: &[
            Phrase::new("Armonie", "Harmony", "Гармония"),
        ],
        challenges: &[
            Phrase::new("Supraprotecție", "Overprotection", "Сверхзащита"),
        ],
        advice: Phrase::new("Limite sănătoase.", "Healthy boundaries.", "Здоровые границы."),
    },
    // 6 × 7
    PairDetail {
        strengths: &[
            Phrase::new("Profunzime", "Depth", "Глубина"),
        ],
        challenges: &[
            Phrase::new("Comunicare", "Communication", "Коммуникация"),
        ],
        advice: Phrase::new("Spațiu pentru 7.", "Space for 7.", "Пространство для 7."),
    },
    // 6 × 8
    PairDetail {
        strengths: &[
            Phrase::new("Familie și succes", "Family and success", "Семья и успех"),
        ],
        challenges: &[
            Phrase::new("Timp", "Time", "Время"),
        ],
        advice: Phrase::new("Prioritizați familia.", "Prioritize family.", "Приоритет семье."),
    },
    // 6 × 9
    PairDetail {
        strengths: &[
            Phrase::new("Iubire universală", "Universal love", "Универсальная любовь"),
        ],
        challenges: &[
            Phrase::new("Prea mult altruism", "Too much altruism", "Слишком много альтруизма"),
        ],
        advice: Phrase::new("Grija de sine.", "Self-care.", "Забота о себе."),
    },
    // 7 × 7
    PairDetail {
        strengths: &[
            Phrase::new("Înțelepciune", "Wisdom", "Мудрость"),
        ],
        challenges: &[
            Phrase::new("Izolare", "Isolation", "Изоляция"),
        ],
        advice: Phrase::new("Conectați-vă cu lumea.", "Connect with the world.", "Связывайтесь с миром."),
    },
    // 7 × 8
    PairDetail {
        strengths: &[
            Phrase::new("Analiză", "Analysis", "Анализ"),
        ],
        challenges: &[
            Phrase::new("Priorități", "Priorities", "Приоритеты"),
        ],
        advice: Phrase::new("Echilibru spirit-materie.", "Spirit-matter balance.", "Баланс духа и материи."),
    },
    // 7 × 9
    PairDetail {
        strengths: &[
            Phrase::new("Spiritualitate", "Spirituality", "Духовность"),
        ],
        challenges: &[
            Phrase::new("Detașare", "Detachment", "Отстранённость"),
        ],
        advice: Phrase::new("Combinați căutarea.", "Combine the search.", "Объедините поиск."),
    },
    // 8 × 8
    PairDetail {
        strengths: &[
            Phrase::new("Putere dublă", "Double power", "Двойная сила"),
        ],
        challenges: &[
            Phrase::new("Competiție", "Competition", "Конкуренция"),
        ],
        advice: Phrase::new("Colaborare, nu competiție.", "Collaboration, not competition.", "Сотрудничество, не конкуренция."),
    },
    // 8 × 9
    PairDetail {
        strengths: &[
            Phrase::new("Viziune și putere", "Vision and power", "Видение и сила"),
        ],
        challenges: &[
            Phrase::new("Materialism", "Materialism", "Материализм"),
        ],
        advice: Phrase::new("Folosiți resursele pentru bine.", "Use resources for good.", "Используйте ресурсы во благо."),
    },
    // 9 × 9
    PairDetail {
        strengths: &[
            Phrase::new("Compasiune dublă", "Double compassion", "Двойное сострадание"),
        ],
        challenges: &[
            Phrase::new("Prea multă dăruire", "Too much giving", "Слишком много отдачи"),
        ],
        advice: Phrase::new("Primiți, nu doar dați.", "Receive, don't just give.", "Принимайте, а не только давайте."),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_scores() {
        assert_eq!(pair_score(1, 3), 90);
        assert_eq!(pair_score(2, 6), 95);
        assert_eq!(pair_score(4, 5), 40);
        assert_eq!(pair_score(33, 6), 98);
        assert_eq!(pair_score(11, 11), 90);
    }

    #[test]
    fn test_table_is_symmetric() {
        for i in 0..MATRIX_KEYS.len() {
            for j in 0..MATRIX_KEYS.len() {
                assert_eq!(SCORES[i][j], SCORES[j][i], "cell {}x{}", MATRIX_KEYS[i], MATRIX_KEYS[j]);
            }
        }
    }

    #[test]
    fn test_non_canonical_inputs_reduce_first() {
        // 29 -> 2, 15 -> 6
        assert_eq!(pair_score(29, 15), pair_score(2, 6));
        assert_eq!(pair_score(0, 5), FALLBACK_SCORE);
    }

    #[test]
    fn test_triangle_index_covers_table() {
        assert_eq!(triangle_index(1, 1), 0);
        assert_eq!(triangle_index(1, 9), 8);
        assert_eq!(triangle_index(2, 2), 9);
        assert_eq!(triangle_index(3, 3), 17);
        assert_eq!(triangle_index(9, 9), 44);
        assert_eq!(triangle_index(5, 2), triangle_index(2, 5));
    }

    #[test]
    fn test_pair_detail_lookup() {
        let detail = pair_detail(1, 1).map(MatrixDetail::from).unwrap();
        assert_eq!(detail.strengths.en, ["Shared ambition", "Mutual respect"]);
        assert_eq!(detail.advice.en, "Learn to collaborate, not compete.");

        // 11 reads the 2 row
        let master = CompatibilityMatrix.detail(11, 1).unwrap();
        assert_eq!(master.advice.en, "Let 2 bring harmony to your decisions.");
        assert!(pair_detail(0, 1).is_none());
    }

    #[test]
    fn test_row() {
        let row = CompatibilityMatrix.row(1);
        assert_eq!(row.len(), 12);
        assert_eq!(row[2], (3, 90));
    }

    proptest! {
        #[test]
        fn prop_pair_score_symmetric_and_bounded(a in 0u32..100, b in 0u32..100) {
            let score = pair_score(a, b);
            prop_assert_eq!(score, pair_score(b, a));
            prop_assert!(score <= 100);
        }
    }
}
