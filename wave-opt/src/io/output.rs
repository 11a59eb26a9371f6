use crate::config::WaveConfig;
use crate::opt::{Strategy, WaveReport};
use serde::{Deserialize, Serialize};
use wave_rs::io::ext_repr::ExtSolution;

/// Outcome of a run as written to the JSON report
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputStatus {
    Wave,
    NoFeasibleWave,
    BudgetExhausted,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WaveOutput {
    pub status: OutputStatus,
    pub solution: Option<ExtSolution>,
    pub strategy: Strategy,
    /// The time budget cut the search short
    pub cut_off: bool,
    pub n_probes: usize,
    pub run_time_sec: f64,
    pub config: WaveConfig,
}

impl WaveOutput {
    pub fn new(report: &WaveReport, solution: Option<ExtSolution>, config: WaveConfig) -> Self {
        let status = match (&solution, report.cut_off) {
            (Some(_), _) => OutputStatus::Wave,
            (None, false) => OutputStatus::NoFeasibleWave,
            (None, true) => OutputStatus::BudgetExhausted,
        };
        Self {
            status,
            solution,
            strategy: report.strategy,
            cut_off: report.cut_off,
            n_probes: report.n_probes,
            run_time_sec: report.run_time.as_secs_f64(),
            config,
        }
    }
}
