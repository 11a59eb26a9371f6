use crate::EPOCH;
use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use wave_rs::io::ext_repr::ExtInstance;
use wave_rs::io::parser;

pub mod cli;
pub mod output;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    parser::parse_instance(&text)
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;
    info!("[IO] solution JSON written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_text(text: &str, path: &Path) -> Result<()> {
    fs::write(path, text)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;
    info!("[IO] solution written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] start: {}", jiff::Timestamp::now());
    Ok(())
}
