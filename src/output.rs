use chrono::Utc;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

use crate::error::BopError;

const SCHEMA_VERSION: &str = "1.0.0";

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Pretty,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Pretty => "pretty",
        };
        write!(f, "{}", value)
    }
}

#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub schema_version: &'static str,
    pub execution_id: String,
    pub tool: &'static str,
    pub timestamp: String,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub error: String,
    pub severity: String,
    pub message: String,
    pub remediation: Option<String>,
}

impl ErrorResponse {
    pub fn from_error(err: &BopError) -> ErrorResponse {
        ErrorResponse {
            code: err.error_code().to_string(),
            error: err.name().to_string(),
            severity: err.severity().to_string(),
            message: err.to_string(),
            remediation: err.remediation().map(str::to_string),
        }
    }
}

#[derive(Serialize)]
pub struct ListResponse {
    pub command: String,
    pub root: String,
    pub paths: Vec<String>,
    pub total_count: u64,
}

#[derive(Serialize)]
pub struct CountResponse {
    pub command: String,
    pub root: String,
    pub files: u64,
    pub folders: u64,
    pub total_count: u64,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub command: String,
    pub root: String,
    pub removed: u64,
}

pub fn json_response<T>(data: T) -> JsonResponse<T> {
    JsonResponse {
        schema_version: SCHEMA_VERSION,
        execution_id: execution_id(),
        tool: "batchop",
        timestamp: Utc::now().to_rfc3339(),
        data,
    }
}

pub fn execution_id() -> String {
    let timestamp = Utc::now().timestamp();
    let pid = std::process::id();
    format!("{:x}-{:x}", timestamp, pid)
}
