use serde::{Deserialize, Serialize};

/// 預設資料檔名
pub const DEFAULT_DATA_FILE: &str = "project_costs.json";
pub const PROJECTION_YEARS: u32 = 5;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Raw figures entered for a project, before any derivation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostInputs {
    /// Currency per month.
    pub api_fee: f64,
    pub planning_hours: f64,
    pub implementation_hours: f64,
    pub testing_hours: f64,
    /// Currency per hour.
    pub hourly_rate: f64,
    /// Currency per month.
    pub infrastructure_cost: f64,
    /// 0-100 scale, applied to development cost.
    pub maintenance_percent: f64,
    /// 0-100 scale, applied to development cost.
    pub overhead_percent: f64,
}

/// Derived totals. This is exactly what gets written to the data file, so
/// the serde names are the on-disk keys.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSummary {
    #[serde(rename = "API Licensing Fee per Month")]
    pub api_fee: f64,
    #[serde(rename = "Total Development Hours")]
    pub total_hours: f64,
    #[serde(rename = "Total Development Cost")]
    pub total_dev_cost: f64,
    #[serde(rename = "Monthly Infrastructure Costs")]
    pub infrastructure_cost: f64,
    #[serde(rename = "Annual Maintenance Cost")]
    pub maintenance_cost: f64,
    #[serde(rename = "Overhead Cost")]
    pub overhead_cost: f64,
    #[serde(rename = "Total Initial Cost")]
    pub total_initial_cost: f64,
    #[serde(rename = "Ongoing Monthly Costs")]
    pub ongoing_monthly_cost: f64,
}

impl CostSummary {
    /// Labelled values in on-disk key order.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("API Licensing Fee per Month", self.api_fee),
            ("Total Development Hours", self.total_hours),
            ("Total Development Cost", self.total_dev_cost),
            ("Monthly Infrastructure Costs", self.infrastructure_cost),
            ("Annual Maintenance Cost", self.maintenance_cost),
            ("Overhead Cost", self.overhead_cost),
            ("Total Initial Cost", self.total_initial_cost),
            ("Ongoing Monthly Costs", self.ongoing_monthly_cost),
        ]
    }

    /// First-year in-house spend: initial cost plus twelve months of running cost.
    pub fn annual_in_house_cost(&self) -> f64 {
        self.total_initial_cost + self.ongoing_monthly_cost * MONTHS_PER_YEAR
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    pub growth_rate_percent: f64,
    pub initial_annual_sales: f64,
    pub third_party_sales_percent: f64,
}

/// Slider positions that feed the projection growth rate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketAdjustments {
    pub market_growth_percent: f64,
    pub economic_adjustment: f64,
}

impl MarketAdjustments {
    pub const MARKET_GROWTH_RANGE: (f64, f64) = (-100.0, 100.0);
    pub const ECONOMIC_ADJUSTMENT_RANGE: (f64, f64) = (-50.0, 50.0);

    /// The economic slider is a fine-tuning knob worth 1/100 of a percent per step.
    pub fn growth_rate_percent(&self) -> f64 {
        self.market_growth_percent + self.economic_adjustment / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub projected_sales: f64,
    pub in_house_cost: f64,
    pub third_party_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectionPoint> {
        self.points.iter()
    }

    pub fn year(&self, year: u32) -> Option<&ProjectionPoint> {
        self.points.iter().find(|p| p.year == year)
    }

    pub fn in_house_costs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.in_house_cost).collect()
    }

    pub fn third_party_costs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.third_party_cost).collect()
    }

    /// First projected year where paying the vendor costs more than building in-house.
    pub fn break_even_year(&self) -> Option<u32> {
        self.points
            .iter()
            .find(|p| p.third_party_cost > p.in_house_cost)
            .map(|p| p.year)
    }
}

impl<'a> IntoIterator for &'a ProjectionSeries {
    type Item = &'a ProjectionPoint;
    type IntoIter = std::slice::Iter<'a, ProjectionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostOption {
    InHouse,
    ThirdParty,
}

/// Annualized totals for the two-bar comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostComparison {
    pub in_house_annual: f64,
    pub third_party_annual: f64,
}

impl CostComparison {
    /// Positive when in-house is the more expensive option.
    pub fn difference(&self) -> f64 {
        self.in_house_annual - self.third_party_annual
    }

    /// `None` on a tie.
    pub fn cheaper(&self) -> Option<CostOption> {
        if self.in_house_annual < self.third_party_annual {
            Some(CostOption::InHouse)
        } else if self.third_party_annual < self.in_house_annual {
            Some(CostOption::ThirdParty)
        } else {
            None
        }
    }
}
