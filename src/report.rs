use chrono::NaiveDateTime;

use crate::config::UploaderConfig;
use crate::csv_export::preview_table;
use crate::sensor_data::{DatasetSummary, SensorReading};
use crate::uploader::{DatasetKind, UploadOutcome};

const PREVIEW_ROWS: usize = 10;
const KESTRA_UI: &str = "http://localhost:8080";
const WORKFLOW_ID: &str = "s3-to-timescaledb-migration";
const TARGET_TABLE: &str = "test_metrics";

pub fn print_banner() {
    println!("🚀 S3 Test Data Generator for TimescaleDB Migration");
    println!("{}", "=".repeat(60));
}

pub fn print_date_range(start: &NaiveDateTime, end: &NaiveDateTime) {
    println!(
        "📅 Generating data from {} to {}",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    );
}

pub fn print_dataset_summary(readings: &[SensorReading]) {
    let summary = DatasetSummary::of(readings);
    println!("📊 Generated {} records", summary.records);
    println!("📈 Data spans {} unique timestamps", summary.unique_timestamps);
    println!("🏭 Covers {} devices", summary.devices);
    println!("📍 Across {} locations", summary.locations);

    println!("\n📋 Sample data:");
    print!("{}", preview_table(readings, PREVIEW_ROWS));
}

/// Closing summary with the inputs for the migration workflow
pub fn print_next_steps(config: &UploaderConfig, outcomes: &[UploadOutcome]) {
    println!("\n🎉 Test data generation complete!");

    let failed = outcomes.iter().filter(|o| !o.success).count();
    if failed > 0 {
        println!("⚠️  {} of {} uploads failed", failed, outcomes.len());
    }

    println!("\n📋 Next steps:");
    println!("1. Go to Kestra UI: {}", KESTRA_UI);
    println!("2. Execute the '{}' workflow", WORKFLOW_ID);
    println!("3. Use these test files:");
    for outcome in outcomes {
        println!("   - {} ({})", outcome.key, outcome.kind.description());
    }

    println!("\n🔧 Workflow inputs:");
    println!("   - s3_bucket: {}", config.bucket);
    println!(
        "   - s3_key: {}",
        config.object_key(DatasetKind::Full.filename())
    );
    println!("   - table_name: {}", TARGET_TABLE);
}
