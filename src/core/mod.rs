pub mod compatibility;
pub mod cycles;
pub mod engine;
pub mod group;
pub mod karmic;
pub mod letters;
pub mod matrix;
pub mod meanings;
pub mod numbers;
pub mod optimizer;
pub mod reduction;

pub use crate::domain::model::{DerivedNumber, Narrative, NarrativeList, Participant, Person};
pub use crate::domain::ports::{ConfigProvider, LetterSystem};
pub use crate::utils::error::Result;
pub use engine::{NumerologyEngine, Profile};
