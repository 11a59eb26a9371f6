use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which search strategy to run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrategyChoice {
    /// Pick the strategy needing the fewest solver calls
    #[default]
    Auto,
    FixedAisles,
    RatioSearch,
}

/// Configuration of the wave optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct WaveConfig {
    /// Global wall-clock ceiling, measured from process start
    pub max_runtime_secs: u64,
    /// No new solver call starts when the remaining time is at or below this margin
    pub safety_margin_secs: u64,
    /// Optional ceiling on the time limit of a single solver call
    pub max_probe_secs: Option<u64>,
    /// Absolute MIP gap tolerance forwarded to the engine
    pub abs_mip_gap: f64,
    /// Numeric tolerance of the ratio-threshold constraint
    pub ratio_tolerance: f64,
    /// Minimized stock slack below this value counts as zero
    pub slack_tolerance: f64,
    pub strategy: StrategyChoice,
}

impl WaveConfig {
    pub fn max_runtime(&self) -> Duration {
        Duration::from_secs(self.max_runtime_secs)
    }

    pub fn safety_margin(&self) -> Duration {
        Duration::from_secs(self.safety_margin_secs)
    }

    pub fn max_probe(&self) -> Option<Duration> {
        self.max_probe_secs.map(Duration::from_secs)
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            max_runtime_secs: 600,
            safety_margin_secs: 5,
            max_probe_secs: None,
            abs_mip_gap: 1e-5,
            ratio_tolerance: 1e-3,
            slack_tolerance: 0.5,
            strategy: StrategyChoice::Auto,
        }
    }
}
