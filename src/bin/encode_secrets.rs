//! Secret encoder CLI
//!
//! Usage: encode-secrets
//!
//! Reads `.env` in the current directory, prints base64 versions of the
//! known secret keys and appends them to the file as `<KEY>_B64='...'`.

use std::path::Path;

use seed2bucket_lib::env_file::{encode_secrets, EnvFileError};

const ENV_FILE: &str = ".env";

fn main() {
    seed2bucket_lib::init_logging();

    match encode_secrets(Path::new(ENV_FILE), |outcome| println!("{}", outcome.report_line())) {
        Ok(_) => {}
        Err(EnvFileError::NotFound(_)) => {
            println!("File {} not found!", ENV_FILE);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
