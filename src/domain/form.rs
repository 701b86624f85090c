use crate::domain::model::{CostInputs, MarketAdjustments, ProjectionParams};
use crate::utils::error::Result;
use crate::utils::validation::{parse_number, validate_range};
use serde::{Deserialize, Serialize};

/// A field as it arrives from a form: typed from TOML, text from the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostForm {
    pub api_fee: Option<FieldValue>,
    pub planning_hours: Option<FieldValue>,
    pub implementation_hours: Option<FieldValue>,
    pub testing_hours: Option<FieldValue>,
    pub hourly_rate: Option<FieldValue>,
    pub infrastructure_cost: Option<FieldValue>,
    pub maintenance_percent: Option<FieldValue>,
    pub overhead_percent: Option<FieldValue>,
}

impl CostForm {
    /// 欄位逐一合併，自身的值優先
    pub fn or(self, fallback: CostForm) -> CostForm {
        CostForm {
            api_fee: self.api_fee.or(fallback.api_fee),
            planning_hours: self.planning_hours.or(fallback.planning_hours),
            implementation_hours: self.implementation_hours.or(fallback.implementation_hours),
            testing_hours: self.testing_hours.or(fallback.testing_hours),
            hourly_rate: self.hourly_rate.or(fallback.hourly_rate),
            infrastructure_cost: self.infrastructure_cost.or(fallback.infrastructure_cost),
            maintenance_percent: self.maintenance_percent.or(fallback.maintenance_percent),
            overhead_percent: self.overhead_percent.or(fallback.overhead_percent),
        }
    }

    pub fn parse(&self) -> Result<CostInputs> {
        Ok(CostInputs {
            api_fee: parse_number("api_fee", self.api_fee.as_ref())?,
            planning_hours: parse_number("planning_hours", self.planning_hours.as_ref())?,
            implementation_hours: parse_number(
                "implementation_hours",
                self.implementation_hours.as_ref(),
            )?,
            testing_hours: parse_number("testing_hours", self.testing_hours.as_ref())?,
            hourly_rate: parse_number("hourly_rate", self.hourly_rate.as_ref())?,
            infrastructure_cost: parse_number(
                "infrastructure_cost",
                self.infrastructure_cost.as_ref(),
            )?,
            maintenance_percent: parse_number(
                "maintenance_percent",
                self.maintenance_percent.as_ref(),
            )?,
            overhead_percent: parse_number("overhead_percent", self.overhead_percent.as_ref())?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionForm {
    pub market_growth: Option<FieldValue>,
    pub economic_adjustment: Option<FieldValue>,
    pub initial_annual_sales: Option<FieldValue>,
    pub third_party_sales_percent: Option<FieldValue>,
}

impl ProjectionForm {
    pub fn or(self, fallback: ProjectionForm) -> ProjectionForm {
        ProjectionForm {
            market_growth: self.market_growth.or(fallback.market_growth),
            economic_adjustment: self.economic_adjustment.or(fallback.economic_adjustment),
            initial_annual_sales: self.initial_annual_sales.or(fallback.initial_annual_sales),
            third_party_sales_percent: self
                .third_party_sales_percent
                .or(fallback.third_party_sales_percent),
        }
    }

    /// Sliders that were never touched sit at zero.
    pub fn adjustments(&self) -> Result<MarketAdjustments> {
        let market_growth_percent = match &self.market_growth {
            Some(value) => parse_number("market_growth", Some(value))?,
            None => 0.0,
        };
        let economic_adjustment = match &self.economic_adjustment {
            Some(value) => parse_number("economic_adjustment", Some(value))?,
            None => 0.0,
        };

        let (min, max) = MarketAdjustments::MARKET_GROWTH_RANGE;
        validate_range("market_growth", market_growth_percent, min, max)?;
        let (min, max) = MarketAdjustments::ECONOMIC_ADJUSTMENT_RANGE;
        validate_range("economic_adjustment", economic_adjustment, min, max)?;

        Ok(MarketAdjustments {
            market_growth_percent,
            economic_adjustment,
        })
    }

    pub fn parse(&self) -> Result<ProjectionParams> {
        let adjustments = self.adjustments()?;
        Ok(ProjectionParams {
            growth_rate_percent: adjustments.growth_rate_percent(),
            initial_annual_sales: parse_number(
                "initial_annual_sales",
                self.initial_annual_sales.as_ref(),
            )?,
            third_party_sales_percent: parse_number(
                "third_party_sales_percent",
                self.third_party_sales_percent.as_ref(),
            )?,
        })
    }
}
