pub mod index;
pub mod revpar;
pub mod rounding;

pub use crate::domain::model::{
    Benchmark, PenetrationAssessment, RevparIndexInput, RevparIndexReport, RoundingPolicy,
};
pub use crate::domain::ports::{ConfigProvider, DefaultSettings};
pub use crate::utils::error::Result;
