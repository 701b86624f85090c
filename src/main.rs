use anyhow::Context;
use clap::Parser;
use cost_estimator::domain::model::{CostComparison, CostOption, CostSummary, ProjectionSeries};
use cost_estimator::utils::error::ErrorSeverity;
use cost_estimator::utils::validation::{validate_path, Validate};
use cost_estimator::utils::logger;
use cost_estimator::{
    CliConfig, CostEstimator, EstimateConfig, EstimateReport, EstimateRequest, EstimatorError,
    LocalStorage,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting cost-estimator");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入 TOML 配置 (可選)
    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            EstimateConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?
        }
        None => EstimateConfig::default(),
    };

    if let Err(e) = file_config.validate() {
        exit_with(&e);
    }

    let data_file = config
        .data_file
        .clone()
        .unwrap_or_else(|| file_config.data_file().to_string());
    if let Err(e) = validate_path("data_file", &data_file) {
        exit_with(&e);
    }

    let estimator = CostEstimator::new(LocalStorage::default(), data_file);

    if config.show_saved {
        match estimator.store().load() {
            Ok(Some(summary)) => print_summary(&summary),
            Ok(None) => println!("No saved cost data at {}", estimator.store().path()),
            Err(e) => exit_with(&e),
        }
        return Ok(());
    }

    if let Some(previous) = estimator.previous_summary() {
        tracing::info!(
            "Previous total initial cost: {:.2} (will be overwritten)",
            previous.total_initial_cost
        );
    }

    // CLI 參數優先於 TOML
    let cost_form = config.cost_form().or(file_config.inputs.clone());
    let projection_form = config.projection_form().or(file_config.projection.clone());
    let fee = config
        .third_party_monthly_fee()
        .or_else(|| file_config.third_party_monthly_fee().cloned());

    let mut request = match EstimateRequest::from_forms(&cost_form, &projection_form, fee.as_ref()) {
        Ok(request) => request,
        Err(e) => exit_with(&e),
    };
    request.csv_output = config
        .csv_output
        .clone()
        .or_else(|| file_config.csv_file().map(str::to_string));
    request.dry_run = config.dry_run;

    match estimator.run(&request) {
        Ok(report) => {
            print_report(&report);
            tracing::info!("✅ Estimate completed successfully!");
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &EstimatorError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Estimate failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn print_summary(summary: &CostSummary) {
    println!("📋 Project Costs:");
    for (label, value) in summary.entries() {
        println!("  {:<30} {:>14.2}", label, value);
    }
    println!();
}

fn print_projection(series: &ProjectionSeries) {
    println!("📈 5-Year Cost Projections:");
    println!(
        "  {:<6} {:>14} {:>14} {:>16}",
        "Year", "Sales", "In-House", "Third-Party"
    );
    for point in series {
        println!(
            "  {:<6} {:>14.2} {:>14.2} {:>16.2}",
            point.year, point.projected_sales, point.in_house_cost, point.third_party_cost
        );
    }
    match series.break_even_year() {
        Some(year) => println!("  Third-party becomes more expensive in year {}", year),
        None => println!("  Third-party stays cheaper over the whole horizon"),
    }
    println!();
}

fn print_comparison(comparison: &CostComparison) {
    println!("📊 Cost Comparison: In-House vs. Third-Party (annual)");
    println!("  {:<12} {:>14.2}", "In-House", comparison.in_house_annual);
    println!("  {:<12} {:>14.2}", "Third-Party", comparison.third_party_annual);
    match comparison.cheaper() {
        Some(CostOption::InHouse) => println!(
            "  In-house saves {:.2} per year",
            -comparison.difference()
        ),
        Some(CostOption::ThirdParty) => println!(
            "  Third-party saves {:.2} per year",
            comparison.difference()
        ),
        None => println!("  Both options cost the same"),
    }
    println!();
}

fn print_report(report: &EstimateReport) {
    print_summary(&report.summary);
    print_projection(&report.projection);
    if let Some(comparison) = &report.comparison {
        print_comparison(comparison);
    }

    match &report.saved_to {
        Some(path) => println!("💾 Saved to: {}", path),
        None => println!("🔍 Dry run, nothing saved"),
    }
    if let Some(path) = &report.csv_written_to {
        println!("📁 Projection CSV: {}", path);
    }
}
