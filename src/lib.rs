//! Verilog Compile Server
//!
//! A thin HTTP service that hands submitted Verilog source to an external
//! compiler and simulator, and annotates compiler diagnostics with source
//! context and heuristic suggestions. The actual compiling and execution
//! are delegated entirely to the external tools.
//!
//! This library provides:
//! - Regex-based diagnostic annotation
//! - Compile/run orchestration with bounded tool execution
//! - The HTTP endpoint and its JSON encoding
//! - Configuration management

pub mod annotate;
pub mod config;
pub mod server;
pub mod toolchain;

// Re-exports for clean public API
pub use annotate::{DiagnosticRecord, LINE_NOT_FOUND, annotate};
pub use config::Config;
pub use toolchain::{RunOutcome, Toolchain};
