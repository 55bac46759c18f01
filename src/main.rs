// src/main.rs
use anyhow::Context;
use convert_docs::cli::Cli;
use convert_docs::BatchConverter;
use log::info;
use std::io::{self, Write};
use std::process::ExitCode;

fn init_logger(level: log::LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()))
        .filter_level(level)
        .parse_default_env() // RUST_LOG overrides
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_args();
    init_logger(cli.log_level());

    let config = cli.to_config().context("failed to load batch configuration")?;
    info!("Loaded {} conversion job(s)", config.jobs.len());

    let converter = BatchConverter::with_parts(config.extractor(), convert_docs::TextFileWriter);
    let stdout = io::stdout();
    let report = converter
        .run(&config.jobs, &mut stdout.lock())
        .context("failed to write status output")?;

    Ok(report.exit_code())
}
