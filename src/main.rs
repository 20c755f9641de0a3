use anyhow::Result;
use env_logger::Env;
use log::error;

use dormstat::cli::parse_cli_to_app_config;
use dormstat::pipeline;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cfg = parse_cli_to_app_config()?;
    let summary = pipeline::run(&cfg)?;
    println!(
        "Report written: {} ({} rows)",
        summary.out_path, summary.rows
    );
    Ok(())
}
