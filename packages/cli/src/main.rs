//! Main entry point for the sylpass CLI application

mod commands;
mod output;

use clap::Parser;
use commands::Cli;
use std::io::{self, Write};
use sylpass::{GeneratorConfig, LoggingInit, PasswordGenerator};
use tracing::debug;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.verbose {
        LoggingInit::init_with_level(log::LevelFilter::Debug);
    } else {
        LoggingInit::init();
    }

    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::discover()?,
    };
    let config = cli.apply(config);
    debug!(
        length = config.length,
        count = config.count,
        variant = %config.variant,
        "resolved configuration"
    );

    // Seeding failure is fatal: the error propagates out of main
    let mut generator = PasswordGenerator::from_config(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        // the document is written whole, so it needs every password first
        let passwords = generator.generate_many(config.length, config.count)?;
        let table = cli.show_table.then(|| generator.table());
        let doc = output::to_json(config.variant, config.length, &passwords, table);
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
    } else {
        if cli.show_table {
            output::write_table(&mut out, generator.table())?;
        }
        output::stream_plain(&mut out, config.count, || {
            generator.generate(config.length)
        })?;
    }
    out.flush()?;
    Ok(())
}
