pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{EngineSettings, TomlConfig};

pub use crate::core::compatibility::{CompatibilityReport, RelationshipType};
pub use crate::core::group::{GroupAnalysis, GroupComparison, GroupType};
pub use crate::core::letters::LetterSystemKind;
pub use crate::core::{NumerologyEngine, Profile};
pub use domain::model::{Language, Narrative, NarrativeList, Participant, Person};
pub use report::OutputFormat;
pub use utils::error::{NumerologyError, Result};
