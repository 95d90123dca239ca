//! Generate the test datasets and push them to the bucket, one file at a
//! time. A failed upload is reported and the next file is still tried.

use chrono::{Duration, NaiveDateTime};
use rand::Rng;

use crate::config::UploaderConfig;
use crate::csv_export::to_csv;
use crate::s3_client::ObjectStore;
use crate::sensor_data::{generate_sample_data, SensorReading};

const CSV_CONTENT_TYPE: &str = "text/csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Full,
    Daily,
    Hourly,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [DatasetKind::Full, DatasetKind::Daily, DatasetKind::Hourly];

    pub fn filename(&self) -> &'static str {
        match self {
            DatasetKind::Full => "sample-metrics.csv",
            DatasetKind::Daily => "daily-metrics-2024-01-15.csv",
            DatasetKind::Hourly => "hourly-metrics-2024-01-15.csv",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DatasetKind::Full => "Full dataset for testing",
            DatasetKind::Daily => "Daily dataset for scheduled workflow testing",
            DatasetKind::Hourly => "Hourly dataset for smaller batch testing",
        }
    }

    /// How far back from "now" the dataset reaches
    pub fn span(&self) -> Duration {
        match self {
            DatasetKind::Full => Duration::days(7),
            DatasetKind::Daily => Duration::days(1),
            DatasetKind::Hourly => Duration::hours(1),
        }
    }

    pub fn devices(&self) -> u32 {
        match self {
            DatasetKind::Full => 5,
            DatasetKind::Daily => 3,
            DatasetKind::Hourly => 2,
        }
    }

    /// Generate this dataset for the window ending at `end`
    pub fn generate<R: Rng + ?Sized>(&self, end: NaiveDateTime, rng: &mut R) -> Vec<SensorReading> {
        generate_sample_data(end - self.span(), end, self.devices(), rng)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub kind: DatasetKind,
    pub key: String,
    pub records: usize,
    pub success: bool,
}

/// Upload readings as a CSV object. Errors are logged and turned into `false`.
pub async fn upload_dataset<S: ObjectStore + ?Sized>(
    store: &S,
    bucket: &str,
    key: &str,
    readings: &[SensorReading],
) -> bool {
    let body = match to_csv(readings) {
        Ok(body) => body,
        Err(e) => {
            log::error!("Failed to serialize {} as CSV: {}", key, e);
            println!("❌ Error writing CSV: {}", e);
            return false;
        }
    };

    match store.put_object(bucket, key, body, CSV_CONTENT_TYPE).await {
        Ok(()) => {
            log::info!("Uploaded {} records to s3://{}/{}", readings.len(), bucket, key);
            println!(
                "✅ Successfully uploaded {} records to s3://{}/{}",
                readings.len(),
                bucket,
                key
            );
            true
        }
        Err(e) => {
            log::error!("Upload of s3://{}/{} failed: {}", bucket, key, e);
            println!("❌ Error uploading to S3: {}", e);
            false
        }
    }
}

/// Upload all test files. `full` is the already generated full dataset;
/// the daily and hourly ones are generated here.
pub async fn upload_test_files<S, R>(
    store: &S,
    config: &UploaderConfig,
    end: NaiveDateTime,
    full: &[SensorReading],
    rng: &mut R,
) -> Vec<UploadOutcome>
where
    S: ObjectStore + ?Sized,
    R: Rng + ?Sized,
{
    let mut outcomes = Vec::with_capacity(DatasetKind::ALL.len());

    for kind in DatasetKind::ALL {
        let key = config.object_key(kind.filename());
        println!("\n📤 Uploading {}...", kind.description());

        let generated;
        let readings = match kind {
            DatasetKind::Full => full,
            _ => {
                generated = kind.generate(end, rng);
                generated.as_slice()
            }
        };

        let success = upload_dataset(store, &config.bucket, &key, readings).await;
        if success {
            println!("   📁 File: s3://{}/{}", config.bucket, key);
        }

        outcomes.push(UploadOutcome {
            kind,
            key,
            records: readings.len(),
            success,
        });
    }

    outcomes
}
