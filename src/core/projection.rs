use crate::domain::model::{
    CostSummary, ProjectionParams, ProjectionPoint, ProjectionSeries, PROJECTION_YEARS,
};

/// Five-year outlook. Third-party cost compounds with sales growth while the
/// in-house figure stays at its first-year value for every year.
pub fn compute_projection(summary: &CostSummary, params: &ProjectionParams) -> ProjectionSeries {
    let growth_factor = 1.0 + params.growth_rate_percent / 100.0;
    let in_house_cost = summary.annual_in_house_cost();

    let points = (1..=PROJECTION_YEARS)
        .map(|year| {
            let projected_sales = params.initial_annual_sales * growth_factor.powf(f64::from(year));
            ProjectionPoint {
                year,
                projected_sales,
                in_house_cost,
                third_party_cost: projected_sales * params.third_party_sales_percent / 100.0,
            }
        })
        .collect();

    tracing::debug!(
        growth_rate = params.growth_rate_percent,
        in_house_cost,
        "Computed {}-year projection",
        PROJECTION_YEARS
    );

    ProjectionSeries { points }
}
