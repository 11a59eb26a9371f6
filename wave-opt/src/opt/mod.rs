use crate::config::{StrategyChoice, WaveConfig};
use crate::time::{TimeBudget, TimeStamp};
use anyhow::Result;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::Duration;
use wave_rs::entities::{Assignment, Instance, WaveSolution};
use wave_rs::model::SolveParams;

pub mod assemble;
pub mod fixed_aisles;
pub mod ratio_search;
pub mod selector;

/// The two exact search strategies, both solving `max picked units / visited aisles`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// One maximization per aisle count, see [`fixed_aisles`]
    FixedAisles,
    /// Bisection over the candidate ratios, see [`ratio_search`]
    RatioSearch,
}

impl Strategy {
    pub fn search(
        &self,
        instance: &Instance,
        config: &WaveConfig,
        budget: &TimeBudget,
    ) -> Result<SearchResult> {
        if instance.lower_bound_unreachable() {
            info!(
                "[{self}] wave size lower bound {} exceeds the units orders or aisles can supply",
                instance.wave_size_lb
            );
            return Ok(SearchResult::default());
        }
        match self {
            Strategy::FixedAisles => fixed_aisles::search(instance, config, budget),
            Strategy::RatioSearch => ratio_search::search(instance, config, budget),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::FixedAisles => write!(f, "FA"),
            Strategy::RatioSearch => write!(f, "RS"),
        }
    }
}

/// Raw result of a strategy run
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Best assignment found, `None` if no feasible wave was found
    pub best: Option<Assignment>,
    /// The time budget stopped the search before it completed
    pub cut_off: bool,
    /// Number of solver calls made
    pub n_probes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaveOutcome {
    Wave(WaveSolution),
    /// Every candidate was infeasible: no wave satisfies the constraints
    NoFeasibleWave,
    /// The budget ran out before any feasible wave was found
    BudgetExhausted,
}

#[derive(Debug, Clone)]
pub struct WaveReport {
    pub outcome: WaveOutcome,
    pub strategy: Strategy,
    pub cut_off: bool,
    pub n_probes: usize,
    pub run_time: Duration,
}

/// Selects a strategy, runs it within the time budget and assembles the final wave.
pub struct WaveOptimizer {
    pub instance: Instance,
    pub config: WaveConfig,
}

impl WaveOptimizer {
    pub fn new(instance: Instance, config: WaveConfig) -> Self {
        Self { instance, config }
    }

    pub fn solve(&self, budget: &TimeBudget) -> Result<WaveReport> {
        let start = TimeStamp::now();
        let strategy = match self.config.strategy {
            StrategyChoice::Auto => selector::select(&self.instance),
            StrategyChoice::FixedAisles => Strategy::FixedAisles,
            StrategyChoice::RatioSearch => Strategy::RatioSearch,
        };
        info!("[SEL] running strategy {strategy:?}");

        let result = strategy.search(&self.instance, &self.config, budget)?;
        if result.cut_off {
            warn!(
                "[{strategy}] time budget exhausted after {} probes, keeping the best wave found so far",
                result.n_probes
            );
        }
        let outcome = assemble::assemble(&self.instance, result.best.as_ref(), result.cut_off);

        Ok(WaveReport {
            outcome,
            strategy,
            cut_off: result.cut_off,
            n_probes: result.n_probes,
            run_time: start.elapsed(),
        })
    }
}

/// Solver settings for the next probe, `None` once the budget no longer allows one.
pub(crate) fn probe_params(config: &WaveConfig, budget: &TimeBudget) -> Option<SolveParams> {
    budget.probe_limit().map(|limit| SolveParams {
        time_limit: Some(limit),
        abs_mip_gap: config.abs_mip_gap,
    })
}
