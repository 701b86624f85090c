use crate::core::calculator::compute_cost_summary;
use crate::core::comparison::build_comparison;
use crate::core::export::export_projection;
use crate::core::projection::compute_projection;
use crate::core::store::CostStore;
use crate::domain::model::{
    CostComparison, CostInputs, CostSummary, ProjectionParams, ProjectionSeries,
};
use crate::domain::form::{CostForm, FieldValue, ProjectionForm};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use crate::utils::validation::parse_number;

/// Everything one "calculate" action needs.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRequest {
    pub inputs: CostInputs,
    pub projection: ProjectionParams,
    pub third_party_monthly_fee: Option<f64>,
    pub csv_output: Option<String>,
    pub dry_run: bool,
}

impl EstimateRequest {
    /// Parses every form before anything is computed or saved.
    pub fn from_forms(
        cost: &CostForm,
        projection: &ProjectionForm,
        third_party_monthly_fee: Option<&FieldValue>,
    ) -> Result<Self> {
        let third_party_monthly_fee = third_party_monthly_fee
            .map(|fee| parse_number("third_party_monthly_fee", Some(fee)))
            .transpose()?;

        Ok(Self {
            inputs: cost.parse()?,
            projection: projection.parse()?,
            third_party_monthly_fee,
            csv_output: None,
            dry_run: false,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimateReport {
    pub summary: CostSummary,
    pub projection: ProjectionSeries,
    pub comparison: Option<CostComparison>,
    /// Where the summary was written, `None` on a dry run.
    pub saved_to: Option<String>,
    pub csv_written_to: Option<String>,
}

pub struct CostEstimator<S: Storage> {
    store: CostStore<S>,
}

impl<S: Storage> CostEstimator<S> {
    pub fn new(storage: S, data_file: impl Into<String>) -> Self {
        Self {
            store: CostStore::new(storage, data_file),
        }
    }

    pub fn store(&self) -> &CostStore<S> {
        &self.store
    }

    /// compute → persist → project → compare → export, stopping at the first failure.
    pub fn run(&self, request: &EstimateRequest) -> Result<EstimateReport> {
        tracing::info!("Calculating project costs...");
        let summary = compute_cost_summary(&request.inputs);
        tracing::info!(
            "Total initial cost: {:.2}, ongoing monthly: {:.2}",
            summary.total_initial_cost,
            summary.ongoing_monthly_cost
        );

        let saved_to = if request.dry_run {
            tracing::info!("🔍 Dry run, not saving to {}", self.store.path());
            None
        } else {
            self.store.persist(&summary)?;
            tracing::info!("💾 Cost summary saved to {}", self.store.path());
            Some(self.store.path().to_string())
        };

        let projection = compute_projection(&summary, &request.projection);
        if let Some(year) = projection.break_even_year() {
            tracing::info!("Third-party cost overtakes in-house cost in year {}", year);
        }

        let comparison = request
            .third_party_monthly_fee
            .map(|fee| build_comparison(&summary, fee));

        let csv_written_to = match &request.csv_output {
            Some(path) if !request.dry_run => {
                export_projection(self.store.storage(), path, &projection)?;
                tracing::info!("📁 Projection exported to {}", path);
                Some(path.clone())
            }
            _ => None,
        };

        Ok(EstimateReport {
            summary,
            projection,
            comparison,
            saved_to,
            csv_written_to,
        })
    }

    /// Last saved summary. A corrupt file counts as no data; the caller
    /// gets a warning in the log instead of an error.
    pub fn previous_summary(&self) -> Option<CostSummary> {
        match self.store.load() {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("⚠️ Ignoring unreadable saved data: {}", e);
                tracing::warn!("💡 {}", e.recovery_suggestion());
                None
            }
        }
    }
}
