use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use wave_opt::config::WaveConfig;
use wave_opt::io::cli::Cli;
use wave_opt::io::output::WaveOutput;
use wave_opt::io::read_instance;
use wave_opt::opt::{WaveOptimizer, WaveOutcome};
use wave_opt::time::TimeBudget;
use wave_opt::{EPOCH, io};
use wave_rs::io::parser::write_solution;

fn main() -> Result<()> {
    // the runtime budget is measured from here
    let _ = *EPOCH;
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            WaveConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed WaveConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!("could not create solution folder: {:?}", args.solution_folder)
        })?;
    }

    let ext_instance = read_instance(args.input_file.as_path())?;
    let instance = wave_rs::io::import(&ext_instance)?;
    info!(
        "[MAIN] instance: {} orders, {} aisles, {} items, wave size in [{}, {}]",
        instance.n_orders(),
        instance.n_aisles(),
        instance.n_items,
        instance.wave_size_lb,
        instance.wave_size_ub
    );

    let budget = TimeBudget::from_epoch(config.max_runtime(), config.safety_margin());
    let budget = match config.max_probe() {
        Some(cap) => budget.with_probe_cap(cap),
        None => budget,
    };
    let optimizer = WaveOptimizer::new(instance, config);
    let report = optimizer.solve(&budget)?;

    let ext_solution = match &report.outcome {
        WaveOutcome::Wave(solution) => Some(wave_rs::io::export(&optimizer.instance, solution)),
        WaveOutcome::NoFeasibleWave => {
            warn!("[MAIN] no feasible wave exists for this instance");
            None
        }
        WaveOutcome::BudgetExhausted => {
            warn!("[MAIN] time budget exhausted before a feasible wave was found");
            None
        }
    };

    if let Some(ext_solution) = &ext_solution {
        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.txt"));
        io::write_text(&write_solution(ext_solution), Path::new(&solution_path))?;
    }

    {
        let output = WaveOutput::new(&report, ext_solution, config);
        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    info!("[MAIN] finished in {:.3}s", EPOCH.elapsed().as_secs_f64());
    Ok(())
}
