#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::compatibility::RelationshipType;
use crate::core::group::GroupType;
use crate::core::letters::LetterSystemKind;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_target_numbers, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 供函式庫使用者直接建構的設定（不需 clap 或 TOML）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub reference_date: Option<NaiveDate>,
    pub letter_system: LetterSystemKind,
    pub relationship: RelationshipType,
    pub group_type: GroupType,
    pub target_numbers: Vec<u32>,
}

impl ConfigProvider for EngineSettings {
    fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }

    fn letter_system(&self) -> LetterSystemKind {
        self.letter_system
    }

    fn relationship(&self) -> RelationshipType {
        self.relationship
    }

    fn group_type(&self) -> GroupType {
        self.group_type
    }

    fn target_numbers(&self) -> &[u32] {
        &self.target_numbers
    }
}

impl Validate for EngineSettings {
    fn validate(&self) -> Result<()> {
        validate_target_numbers("target_numbers", &self.target_numbers)
    }
}
