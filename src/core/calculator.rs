use crate::domain::model::{CostInputs, CostSummary};

/// Derive every total from the raw inputs. Pure; no range checks, so
/// negative or zero values flow straight through the arithmetic.
pub fn compute_cost_summary(inputs: &CostInputs) -> CostSummary {
    let total_hours = inputs.planning_hours + inputs.implementation_hours + inputs.testing_hours;
    let total_dev_cost = total_hours * inputs.hourly_rate;
    let maintenance_cost = percent_of(total_dev_cost, inputs.maintenance_percent);
    let overhead_cost = percent_of(total_dev_cost, inputs.overhead_percent);
    let total_initial_cost =
        total_dev_cost + overhead_cost + inputs.api_fee + inputs.infrastructure_cost;
    let ongoing_monthly_cost = inputs.api_fee + inputs.infrastructure_cost;

    tracing::debug!(
        total_hours,
        total_dev_cost,
        total_initial_cost,
        "Computed cost summary"
    );

    CostSummary {
        api_fee: inputs.api_fee,
        total_hours,
        total_dev_cost,
        infrastructure_cost: inputs.infrastructure_cost,
        maintenance_cost,
        overhead_cost,
        total_initial_cost,
        ongoing_monthly_cost,
    }
}

fn percent_of(base: f64, percent: f64) -> f64 {
    base * percent / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> CostInputs {
        CostInputs {
            api_fee: 100.0,
            planning_hours: 10.0,
            implementation_hours: 40.0,
            testing_hours: 10.0,
            hourly_rate: 50.0,
            infrastructure_cost: 200.0,
            maintenance_percent: 10.0,
            overhead_percent: 15.0,
        }
    }

    #[test]
    fn test_reference_project() {
        let summary = compute_cost_summary(&sample_inputs());

        assert_eq!(summary.total_hours, 60.0);
        assert_eq!(summary.total_dev_cost, 3000.0);
        assert_eq!(summary.overhead_cost, 450.0);
        assert_eq!(summary.maintenance_cost, 300.0);
        assert_eq!(summary.total_initial_cost, 3750.0);
        assert_eq!(summary.ongoing_monthly_cost, 300.0);
        assert_eq!(summary.api_fee, 100.0);
        assert_eq!(summary.infrastructure_cost, 200.0);
    }

    #[test]
    fn test_totals_follow_inputs() {
        let inputs = CostInputs {
            api_fee: 12.34,
            planning_hours: 3.3,
            implementation_hours: 17.9,
            testing_hours: 0.7,
            hourly_rate: 88.8,
            infrastructure_cost: 41.0,
            maintenance_percent: 7.5,
            overhead_percent: 22.2,
        };
        let summary = compute_cost_summary(&inputs);

        let hours = inputs.planning_hours + inputs.implementation_hours + inputs.testing_hours;
        assert_eq!(summary.total_hours, hours);
        assert_eq!(summary.total_dev_cost, hours * inputs.hourly_rate);
        assert_eq!(
            summary.overhead_cost,
            summary.total_dev_cost * inputs.overhead_percent / 100.0
        );
        assert_eq!(
            summary.total_initial_cost,
            summary.total_dev_cost + summary.overhead_cost + inputs.api_fee + inputs.infrastructure_cost
        );
    }

    #[test]
    fn test_zero_hours_and_rate() {
        let inputs = CostInputs {
            planning_hours: 0.0,
            implementation_hours: 0.0,
            testing_hours: 0.0,
            hourly_rate: 0.0,
            ..sample_inputs()
        };
        let summary = compute_cost_summary(&inputs);

        assert_eq!(summary.total_dev_cost, 0.0);
        assert_eq!(summary.overhead_cost, 0.0);
        assert_eq!(summary.maintenance_cost, 0.0);
        assert_eq!(summary.total_initial_cost, inputs.api_fee + inputs.infrastructure_cost);
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let inputs = CostInputs {
            api_fee: -100.0,
            hourly_rate: -1.0,
            ..sample_inputs()
        };
        let summary = compute_cost_summary(&inputs);
        assert_eq!(summary.total_dev_cost, -60.0);
        assert_eq!(summary.ongoing_monthly_cost, 100.0);
    }

    #[test]
    fn test_is_deterministic() {
        let inputs = sample_inputs();
        assert_eq!(compute_cost_summary(&inputs), compute_cost_summary(&inputs));
    }
}
