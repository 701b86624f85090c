use crate::domain::model::{CostComparison, CostSummary, MONTHS_PER_YEAR};

/// Annualize both options for the two-bar chart.
pub fn build_comparison(summary: &CostSummary, third_party_monthly_fee: f64) -> CostComparison {
    CostComparison {
        in_house_annual: summary.annual_in_house_cost(),
        third_party_annual: third_party_monthly_fee * MONTHS_PER_YEAR,
    }
}
