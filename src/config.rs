//! Configuration management for the compile server.
//!
//! Handles:
//! - Command-line argument parsing
//! - The explicit `Config` value handed to the server (no ambient globals)

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line arguments for the Verilog compile server
#[derive(Debug, Parser)]
#[command(name = "verilog-compile-server")]
#[command(about = "HTTP front end for an external Verilog compiler and simulator")]
#[command(version)]
pub struct Args {
    /// Address the HTTP listener binds to
    #[arg(long, default_value = "127.0.0.1", help = "Listen address")]
    pub host: String,

    /// Port the HTTP listener binds to
    #[arg(long, default_value_t = 5000, help = "Listen port")]
    pub port: u16,

    #[arg(
        long,
        default_value = "iverilog",
        help = "Compiler executable (invoked as `<compiler> -o <out> <src>`)"
    )]
    pub compiler: PathBuf,

    #[arg(
        long,
        default_value = "vvp",
        help = "Simulator executable (invoked as `<simulator> <artifact>`)"
    )]
    pub simulator: PathBuf,

    #[arg(long, default_value_t = 10, help = "Per-tool timeout in seconds")]
    pub tool_timeout: u64,

    #[arg(
        long,
        default_value = "*",
        help = "Value sent as Access-Control-Allow-Origin"
    )]
    pub allow_origin: String,

    /// Log level for the server
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub compiler: PathBuf,
    pub simulator: PathBuf,
    pub tool_timeout: Duration,
    pub allow_origin: String,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            host: args.host,
            port: args.port,
            compiler: args.compiler,
            simulator: args.simulator,
            tool_timeout: Duration::from_secs(args.tool_timeout),
            allow_origin: args.allow_origin,
            log_level: args.log_level,
        })
    }

    /// `host:port` string the HTTP listener binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
