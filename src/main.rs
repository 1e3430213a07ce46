use anyhow::Result;
use env_logger::Env;

use verilog_compile_server::config::Config;
use verilog_compile_server::server;

fn main() -> Result<()> {
    // Parse configuration from command line and environment
    let config = Config::from_args_and_env()?;

    // RUST_LOG still wins over --log-level when set.
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str())).init();

    server::serve(config)
}
