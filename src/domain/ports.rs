use crate::core::compatibility::RelationshipType;
use crate::core::group::GroupType;
use crate::core::letters::LetterSystemKind;
use chrono::NaiveDate;

/// Letter → number mapping. Non-letters map to 0.
pub trait LetterSystem: Send + Sync {
    fn name(&self) -> &'static str;
    fn value_of(&self, letter: char) -> u32;
}

pub trait ConfigProvider: Send + Sync {
    /// 個人年/月/日的參考日期；None 表示由呼叫端決定（通常是今天）
    fn reference_date(&self) -> Option<NaiveDate>;
    fn letter_system(&self) -> LetterSystemKind;
    fn relationship(&self) -> RelationshipType;
    fn group_type(&self) -> GroupType;
    fn target_numbers(&self) -> &[u32];
}
