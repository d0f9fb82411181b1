pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::profile_file::ProfileFile;

pub use crate::core::engine::ExposureEngine;
pub use crate::core::report::{generate_report, generate_report_with, LiabilityReport, ReportOptions};
pub use domain::model::{Measurement, UtilityProfile};
pub use domain::reference::{Compound, Technology};
pub use utils::error::{ExposureError, Result};
