pub mod engine;
pub mod litigation;
pub mod regulatory;
pub mod report;
pub mod treatment;

pub use crate::domain::model::{Measurement, UtilityProfile};
pub use crate::domain::ports::ProfileSource;
pub use crate::utils::error::Result;
