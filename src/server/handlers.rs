//! Request decoding and response encoding for the compile endpoint.
//!
//! Kept free of transport types so the request/response logic can be
//! exercised without a live socket.

use serde::{Deserialize, Serialize};

use crate::annotate::DiagnosticRecord;
use crate::toolchain::{RunOutcome, Toolchain};

/// Body of `POST /compile`.
///
/// A missing `code` field compiles the empty string rather than rejecting
/// the request; a body that is not JSON at all is rejected.
#[derive(Debug, Default, Deserialize)]
pub struct CompileRequest {
    #[serde(default)]
    pub code: String,
}

/// JSON replies, tagged by `status`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApiResponse {
    CompileError {
        errors: Vec<DiagnosticRecord>,
        raw: String,
    },
    RuntimeError {
        stdout: String,
        stderr: String,
    },
    Success {
        stdout: String,
        stderr: String,
    },
    BadRequest {
        message: String,
    },
    InternalError {
        message: String,
    },
    NotFound {
        message: String,
    },
}

impl From<RunOutcome> for ApiResponse {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::CompileError { errors, raw } => ApiResponse::CompileError { errors, raw },
            RunOutcome::RuntimeError { stdout, stderr } => {
                ApiResponse::RuntimeError { stdout, stderr }
            }
            RunOutcome::Success { stdout, stderr } => ApiResponse::Success { stdout, stderr },
        }
    }
}

/// Handle one compile request body; returns the HTTP status code and the
/// reply to serialize.
pub fn handle_compile(body: &str, toolchain: &Toolchain) -> (u16, ApiResponse) {
    let request: CompileRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(err) => {
            return (
                400,
                ApiResponse::BadRequest {
                    message: format!("invalid JSON body: {err}"),
                },
            );
        }
    };

    match toolchain.compile_and_run(&request.code) {
        Ok(outcome) => (200, outcome.into()),
        Err(err) => {
            log::error!("toolchain failure: {err:#}");
            (
                500,
                ApiResponse::InternalError {
                    message: format!("{err:#}"),
                },
            )
        }
    }
}

pub fn not_found(url: &str) -> (u16, ApiResponse) {
    (
        404,
        ApiResponse::NotFound {
            message: format!("no such endpoint: {url}"),
        },
    )
}
