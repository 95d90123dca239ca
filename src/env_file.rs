//! Base64-encode selected secrets of a `.env` file and append them back
//! as `<KEY>_B64='<value>'` lines.

use base64::{engine::general_purpose::STANDARD, Engine};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Keys whose values get a `_B64` companion line
pub const TARGET_KEYS: [&str; 7] = [
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_REGION",
    "CLICKHOUSE_USER",
    "CLICKHOUSE_PASSWORD",
    "ES_USER",
    "ES_PASSWORD",
];

#[derive(Debug, Error)]
pub enum EnvFileError {
    #[error("File {} not found!", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretOutcome {
    Encoded { key: &'static str, encoded: String },
    /// `file` is the name shown to the user, e.g. `.env`
    Missing { key: &'static str, file: String },
}

impl SecretOutcome {
    /// The line to show the user for this key
    pub fn report_line(&self) -> String {
        match self {
            SecretOutcome::Encoded { key, encoded } => format!("{}_B64={}", key, encoded),
            SecretOutcome::Missing { key, file } => format!("{} not found in {} file", key, file),
        }
    }
}

/// Encode a secret to standard padded base64
pub fn encode_secret(secret: &str) -> String {
    STANDARD.encode(secret.as_bytes())
}

/// Parse `KEY=VALUE` lines. Blank lines, `#` comments and lines without
/// `=` are skipped; the last occurrence of a key wins.
pub fn parse_env(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Load and parse an env file
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>, EnvFileError> {
    if !path.exists() {
        return Err(EnvFileError::NotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path)?;
    Ok(parse_env(&contents))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Encode every target key found in `path` and append the encoded lines to
/// the same file. Not idempotent: each run appends again.
///
/// `report` sees each outcome before its line is appended, so a failed
/// append never hides a line that was already written.
pub fn encode_secrets<F>(path: &Path, report: F) -> Result<Vec<SecretOutcome>, EnvFileError>
where
    F: FnMut(&SecretOutcome),
{
    let env_vars = load_env_file(path)?;
    if env_vars.is_empty() {
        log::warn!("{} has no KEY=VALUE entries, nothing to encode", path.display());
        return Ok(Vec::new());
    }

    let needs_newline = fs::read(path)?
        .last()
        .map(|b| *b != b'\n')
        .unwrap_or(false);

    let mut file = OpenOptions::new().append(true).open(path)?;
    append_encoded(&env_vars, &display_name(path), needs_newline, &mut file, report)
}

fn append_encoded<W, F>(
    env_vars: &HashMap<String, String>,
    file_name: &str,
    needs_newline: bool,
    out: &mut W,
    mut report: F,
) -> Result<Vec<SecretOutcome>, EnvFileError>
where
    W: Write,
    F: FnMut(&SecretOutcome),
{
    let mut outcomes = Vec::with_capacity(TARGET_KEYS.len());
    let mut wrote_any = false;

    for key in TARGET_KEYS {
        let outcome = match env_vars.get(key) {
            Some(value) => SecretOutcome::Encoded {
                key,
                encoded: encode_secret(value),
            },
            None => SecretOutcome::Missing {
                key,
                file: file_name.to_string(),
            },
        };
        report(&outcome);

        if let SecretOutcome::Encoded { encoded, .. } = &outcome {
            if needs_newline && !wrote_any {
                writeln!(out)?;
            }
            writeln!(out, "{}_B64='{}'", key, encoded)?;
            wrote_any = true;
            log::debug!("Appended {}_B64 to {}", key, file_name);
        }
        outcomes.push(outcome);
    }

    Ok(outcomes)
}
