use chrono::{Local, SubsecRound};

use seed2bucket_lib::config::UploaderConfig;
use seed2bucket_lib::report;
use seed2bucket_lib::s3_client::S3Client;
use seed2bucket_lib::uploader::{upload_test_files, DatasetKind};

#[tokio::main]
async fn main() {
    seed2bucket_lib::init_logging();
    report::print_banner();

    let config = UploaderConfig::from_env();
    log::debug!("Using {:?}", config);

    let client = match S3Client::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let end = Local::now().naive_local().trunc_subsecs(0);
    let start = end - DatasetKind::Full.span();
    report::print_date_range(&start, &end);

    println!("🔧 Generating sample time-series data...");
    let mut rng = rand::thread_rng();
    let full = DatasetKind::Full.generate(end, &mut rng);
    report::print_dataset_summary(&full);

    let outcomes = upload_test_files(&client, &config, end, &full, &mut rng).await;

    let failed = outcomes.iter().filter(|o| !o.success).count();
    if failed > 0 {
        log::warn!("{} upload(s) failed", failed);
    }

    report::print_next_steps(&config, &outcomes);
}
