#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::RevparConfig;
pub use crate::core::index::{compute_revpar_index, IndexCalculator};
pub use crate::core::revpar::{compute_revpar_from_adr, compute_revpar_from_revenue};
pub use domain::model::{
    Benchmark, PenetrationAssessment, RevparIndexInput, RevparIndexReport, RoundingPolicy,
};
pub use domain::ports::{ConfigProvider, DefaultSettings};
pub use utils::error::{RevparError, Result};
