use crate::domain::form::{CostForm, FieldValue, ProjectionForm};
use crate::domain::model::DEFAULT_DATA_FILE;
use crate::utils::error::{EstimatorError, Result};
use crate::utils::validation::{parse_number, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    pub inputs: CostForm,
    pub projection: ProjectionForm,
    pub comparison: Option<ComparisonConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonConfig {
    pub third_party_monthly_fee: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub data_file: Option<String>,
    pub csv_file: Option<String>,
}

impl EstimateConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EstimatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EstimatorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOURLY_RATE})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EstimatorError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn data_file(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.data_file.as_deref())
            .unwrap_or(DEFAULT_DATA_FILE)
    }

    pub fn csv_file(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.csv_file.as_deref())
    }

    pub fn third_party_monthly_fee(&self) -> Option<&FieldValue> {
        self.comparison
            .as_ref()
            .and_then(|c| c.third_party_monthly_fee.as_ref())
    }
}

impl Validate for EstimateConfig {
    /// Only checks what can be checked without the command line; missing
    /// form fields may still arrive as flags.
    fn validate(&self) -> Result<()> {
        validate_path("output.data_file", self.data_file())?;

        if let Some(csv_file) = self.csv_file() {
            validate_path("output.csv_file", csv_file)?;
        }

        if let Some(fee) = self.third_party_monthly_fee() {
            parse_number("comparison.third_party_monthly_fee", Some(fee))?;
        }

        self.projection.adjustments()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[inputs]
api_fee = 100
planning_hours = 10
implementation_hours = 40
testing_hours = 10
hourly_rate = 50.0
infrastructure_cost = 200
maintenance_percent = 10
overhead_percent = 15

[projection]
market_growth = 5
economic_adjustment = 0
initial_annual_sales = 10000
third_party_sales_percent = 20

[comparison]
third_party_monthly_fee = 500

[output]
data_file = "data/costs.json"
csv_file = "data/projection.csv"
"#;

        let config = EstimateConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let inputs = config.inputs.parse().unwrap();
        assert_eq!(inputs.hourly_rate, 50.0);
        assert_eq!(config.projection.parse().unwrap().growth_rate_percent, 5.0);
        assert_eq!(config.data_file(), "data/costs.json");
        assert_eq!(config.csv_file(), Some("data/projection.csv"));
        assert_eq!(
            config.third_party_monthly_fee(),
            Some(&FieldValue::Number(500.0))
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EstimateConfig::from_toml_str("").unwrap();
        assert_eq!(config.data_file(), DEFAULT_DATA_FILE);
        assert_eq!(config.csv_file(), None);
        assert!(config.validate().is_ok());
        assert!(config.inputs.parse().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("COST_ESTIMATOR_TEST_RATE", "75");

        let toml_content = r#"
[inputs]
hourly_rate = "${COST_ESTIMATOR_TEST_RATE}"
"#;

        let config = EstimateConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.inputs.hourly_rate, Some(FieldValue::Text("75".to_string())));

        std::env::remove_var("COST_ESTIMATOR_TEST_RATE");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[inputs]
api_fee = "${COST_ESTIMATOR_SURELY_UNSET}"
"#;
        let config = EstimateConfig::from_toml_str(toml_content).unwrap();
        assert!(config.inputs.parse().is_err());
    }

    #[test]
    fn test_validation_catches_slider_out_of_range() {
        let toml_content = r#"
[projection]
market_growth = 250
"#;
        let config = EstimateConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let result = EstimateConfig::from_toml_str("[inputs\napi_fee = ");
        assert!(matches!(
            result,
            Err(EstimatorError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\ndata_file = \"other.json\"\n")
            .unwrap();

        let config = EstimateConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.data_file(), "other.json");
    }
}
