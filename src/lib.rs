pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::{LocalStorage, MemoryStorage};
pub use config::EstimateConfig;
pub use core::calculator::compute_cost_summary;
pub use core::comparison::build_comparison;
pub use core::estimator::{CostEstimator, EstimateReport, EstimateRequest};
pub use core::projection::compute_projection;
pub use core::store::CostStore;
pub use utils::error::{EstimatorError, Result};
