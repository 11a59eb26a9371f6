//! One maximization per aisle count.
//!
//! For every `a'` in `1..=nAisles` the strict wave model is solved with `Σ a = a'` and
//! `maximize picked units`. The ratio of each solved sub-problem is `picked / a'`; the best
//! one over all counts is the optimum. The scan stops as soon as `best * a' > ub`: no wave
//! visiting `a'` or more aisles can reach the best ratio anymore.

use crate::config::WaveConfig;
use crate::opt::{SearchResult, probe_params};
use crate::time::TimeBudget;
use anyhow::Result;
use log::{debug, info, warn};
use thousands::Separable;
use wave_rs::entities::{Assignment, Instance, Ratio, WaveSolution};
use wave_rs::model::{LinearConstraint, Objective, Sense, SolveOutcome, StockCoupling, WaveModel};
use wave_rs::util::assertions;

pub fn search(instance: &Instance, config: &WaveConfig, budget: &TimeBudget) -> Result<SearchResult> {
    let mut model = WaveModel::build(instance, StockCoupling::Strict)?;
    let objective = Objective::new(Sense::Maximize, model.picked_units.clone());
    let ub = instance.effective_wave_size_ub();

    let mut result = SearchResult::default();
    let mut best: Option<(Assignment, Ratio)> = None;

    for n_aisles in 1..=instance.n_aisles() as u32 {
        if best.as_ref().is_some_and(|(_, r)| r.scaled_exceeds(n_aisles, ub)) {
            debug!("[FA] best ratio times {n_aisles} aisles exceeds {ub} units, stopping");
            break;
        }
        let Some(params) = probe_params(config, budget) else {
            result.cut_off = true;
            break;
        };

        let outcome = {
            let probe = model.session.probe([LinearConstraint::eq(
                model.aisles_visited.clone(),
                n_aisles as f64,
            )]);
            probe.solve(&objective, &params)?
        };
        result.n_probes += 1;

        let (solved, timed_out) = match outcome {
            SolveOutcome::Optimal(solved) => (solved, false),
            SolveOutcome::Infeasible => {
                debug!("[FA] {n_aisles} aisles: infeasible");
                continue;
            }
            SolveOutcome::TimeLimitReached(Some(solved)) => (solved, true),
            SolveOutcome::TimeLimitReached(None) => {
                result.cut_off = true;
                break;
            }
        };

        let assignment = model.assignment(&solved);
        let accepted = match assertions::first_violation(instance, &WaveSolution::from_assignment(&assignment)) {
            None => true,
            Some(violation) => {
                warn!("[FA] {n_aisles} aisles: discarding assignment ({violation})");
                false
            }
        };
        if let (true, Some(ratio)) = (accepted, assignment.ratio(instance)) {
            debug!("[FA] {n_aisles} aisles: ratio {ratio}");
            // ties favor the larger aisle count
            if best.as_ref().is_none_or(|(_, r)| ratio >= *r) {
                best = Some((assignment, ratio));
            }
        }
        if timed_out {
            result.cut_off = true;
            break;
        }
    }

    match &best {
        Some((_, ratio)) => info!(
            "[FA] best ratio {ratio} after {} probes",
            result.n_probes.separate_with_commas()
        ),
        None => info!(
            "[FA] no feasible aisle count after {} probes",
            result.n_probes.separate_with_commas()
        ),
    }
    result.best = best.map(|(assignment, _)| assignment);
    Ok(result)
}
