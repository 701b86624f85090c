use crate::domain::form::{CostForm, FieldValue, ProjectionForm};
use clap::Parser;

/// Command-line form. Every numeric field is taken as text so malformed
/// values surface as `InvalidInput` naming the field, like a form would.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cost-estimator")]
#[command(about = "Estimate in-house project costs and compare them with a third-party option")]
pub struct CliConfig {
    /// TOML file providing default form values
    #[arg(short, long)]
    pub config: Option<String>,

    /// JSON file holding the latest cost summary
    #[arg(long)]
    pub data_file: Option<String>,

    /// Write the five-year projection to this CSV file
    #[arg(long)]
    pub csv_output: Option<String>,

    /// API licensing fee per month
    #[arg(long, allow_hyphen_values = true)]
    pub api_fee: Option<String>,

    /// Hours for planning and analysis
    #[arg(long, allow_hyphen_values = true)]
    pub planning_hours: Option<String>,

    /// Hours for implementation
    #[arg(long, allow_hyphen_values = true)]
    pub implementation_hours: Option<String>,

    /// Hours for testing and QA
    #[arg(long, allow_hyphen_values = true)]
    pub testing_hours: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub hourly_rate: Option<String>,

    /// Monthly infrastructure costs
    #[arg(long, allow_hyphen_values = true)]
    pub infrastructure_cost: Option<String>,

    /// Annual maintenance as a percentage of development cost
    #[arg(long, allow_hyphen_values = true)]
    pub maintenance_percent: Option<String>,

    /// Overheads as a percentage of development cost
    #[arg(long, allow_hyphen_values = true)]
    pub overhead_percent: Option<String>,

    /// Market growth rate in percent (-100 to 100)
    #[arg(long, allow_hyphen_values = true)]
    pub market_growth: Option<String>,

    /// Economic factors adjustment (-50 to 50)
    #[arg(long, allow_hyphen_values = true)]
    pub economic_adjustment: Option<String>,

    /// Estimated annual sales through the application
    #[arg(long, allow_hyphen_values = true)]
    pub annual_sales: Option<String>,

    /// Third-party software's percentage of sales
    #[arg(long, allow_hyphen_values = true)]
    pub third_party_percent: Option<String>,

    /// Monthly fee of the third-party alternative, enables the comparison
    #[arg(long, allow_hyphen_values = true)]
    pub third_party_monthly_fee: Option<String>,

    /// Show the last saved summary and exit
    #[arg(long)]
    pub show_saved: bool,

    /// Calculate without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

fn field(value: &Option<String>) -> Option<FieldValue> {
    value.clone().map(FieldValue::Text)
}

impl CliConfig {
    pub fn cost_form(&self) -> CostForm {
        CostForm {
            api_fee: field(&self.api_fee),
            planning_hours: field(&self.planning_hours),
            implementation_hours: field(&self.implementation_hours),
            testing_hours: field(&self.testing_hours),
            hourly_rate: field(&self.hourly_rate),
            infrastructure_cost: field(&self.infrastructure_cost),
            maintenance_percent: field(&self.maintenance_percent),
            overhead_percent: field(&self.overhead_percent),
        }
    }

    pub fn projection_form(&self) -> ProjectionForm {
        ProjectionForm {
            market_growth: field(&self.market_growth),
            economic_adjustment: field(&self.economic_adjustment),
            initial_annual_sales: field(&self.annual_sales),
            third_party_sales_percent: field(&self.third_party_percent),
        }
    }

    pub fn third_party_monthly_fee(&self) -> Option<FieldValue> {
        field(&self.third_party_monthly_fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags_into_forms() {
        let config = CliConfig::parse_from([
            "cost-estimator",
            "--api-fee",
            "100",
            "--hourly-rate",
            "50",
            "--market-growth",
            "-20",
            "--annual-sales",
            "10000",
        ]);

        let form = config.cost_form();
        assert_eq!(form.api_fee, Some(FieldValue::Text("100".to_string())));
        assert_eq!(form.testing_hours, None);

        let projection = config.projection_form();
        assert_eq!(projection.market_growth, Some(FieldValue::Text("-20".to_string())));
        assert_eq!(
            projection.initial_annual_sales,
            Some(FieldValue::Text("10000".to_string()))
        );
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from(["cost-estimator", "--dry-run", "-v", "-c", "costs.toml"]);
        assert!(config.dry_run);
        assert!(config.verbose);
        assert!(!config.show_saved);
        assert_eq!(config.config.as_deref(), Some("costs.toml"));
    }
}
