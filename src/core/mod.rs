pub mod calculator;
pub mod comparison;
pub mod estimator;
pub mod export;
pub mod projection;
pub mod store;

pub use crate::domain::model::{
    CostComparison, CostInputs, CostSummary, ProjectionParams, ProjectionPoint, ProjectionSeries,
};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
