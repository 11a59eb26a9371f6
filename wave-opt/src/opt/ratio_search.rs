//! Parametric search over the exact candidate ratio set.
//!
//! Every probe fixes a candidate `k = num / den` and asks whether a wave with
//! `den * picked - num * aisles >= 0` exists. The stock coupling is relaxed by a shared
//! slack `z >= 0` and the probe minimizes `z`: a minimized slack of zero means some feasible
//! wave reaches ratio `k`.
//!
//! The search bisects the sorted candidates with cursors `lo..=hi`:
//! * the first probe uses the smallest candidate, proving that any feasible wave exists;
//! * an achievable probe returns a wave with exact ratio `r >= k`, `lo` jumps past `r`;
//! * an unachievable probe moves `hi` below the candidate;
//! * a zero-slack probe whose wave fails the feasibility check only skips its candidate.
//!
//! The optimum is the best ratio seen once the window is empty.

use crate::config::WaveConfig;
use crate::opt::{SearchResult, probe_params};
use crate::time::TimeBudget;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use thousands::Separable;
use wave_rs::entities::{Assignment, Instance, Ratio, WaveSolution, candidate_ratios};
use wave_rs::model::{
    LinearConstraint, Objective, Sense, SolveOutcome, Solved, StockCoupling, WaveModel,
};
use wave_rs::util::assertions;

pub fn search(instance: &Instance, config: &WaveConfig, budget: &TimeBudget) -> Result<SearchResult> {
    let mut model = WaveModel::build(instance, StockCoupling::Relaxed)?;
    let slack = model
        .slack
        .context("relaxed wave model declares no stock slack")?;
    let objective = Objective::new(Sense::Minimize, slack);

    let candidates = candidate_ratios(
        instance.wave_size_lb,
        instance.effective_wave_size_ub(),
        instance.n_aisles() as u32,
    );
    info!(
        "[RS] {} candidate ratios in [{}, {}]",
        candidates.len().separate_with_commas(),
        candidates.first().map_or(0.0, |r| r.value()),
        candidates.last().map_or(0.0, |r| r.value())
    );

    let mut result = SearchResult::default();
    let mut best: Option<(Assignment, Ratio)> = None;
    if candidates.is_empty() {
        return Ok(result);
    }

    let mut window = Some((0, candidates.len() - 1));
    while let Some((lo, hi)) = window {
        let Some(params) = probe_params(config, budget) else {
            result.cut_off = true;
            break;
        };
        let j = match best {
            None => lo,
            Some(_) => lo + (hi - lo) / 2,
        };
        let k = candidates[j];

        let outcome = {
            let threshold = model.picked_units.clone() * (k.den as f64)
                - model.aisles_visited.clone() * (k.num as f64);
            let probe = model
                .session
                .probe([LinearConstraint::geq(threshold, -config.ratio_tolerance)]);
            probe.solve(&objective, &params)?
        };
        result.n_probes += 1;

        let verdict = match outcome {
            SolveOutcome::Optimal(solved) => judge(instance, &model, &solved, config)?,
            SolveOutcome::Infeasible => Verdict::Unachievable,
            SolveOutcome::TimeLimitReached(solved) => {
                let verdict = match solved {
                    Some(solved) => judge(instance, &model, &solved, config)?,
                    None => Verdict::Unachievable,
                };
                if let Verdict::Achieved(assignment, ratio) = verdict {
                    debug!("[RS] k = {k}: time limit reached, keeping wave of ratio {ratio}");
                    keep_better(&mut best, assignment, ratio);
                }
                result.cut_off = true;
                break;
            }
        };

        window = narrow(&candidates, (lo, hi), j, &verdict);
        match verdict {
            Verdict::Achieved(assignment, ratio) => {
                debug!("[RS] k = {k}: achievable, wave ratio {ratio}");
                keep_better(&mut best, assignment, ratio);
            }
            Verdict::Unachievable => debug!("[RS] k = {k}: not achievable"),
            Verdict::Rejected(violation) => {
                warn!(
                    "[RS] k = {k}: zero slack but the thresholded wave is infeasible ({violation}), skipping the candidate"
                )
            }
        }
    }

    match &best {
        Some((_, ratio)) => info!(
            "[RS] best ratio {ratio} after {} probes",
            result.n_probes.separate_with_commas()
        ),
        None => info!(
            "[RS] no feasible wave after {} probes",
            result.n_probes.separate_with_commas()
        ),
    }
    result.best = best.map(|(assignment, _)| assignment);
    Ok(result)
}

/// What a solved probe says about its candidate ratio.
#[derive(Debug)]
enum Verdict {
    /// Zero slack: the wave reaches the candidate, with its exact ratio
    Achieved(Assignment, Ratio),
    /// Positive slack or infeasible: no wave reaches the candidate
    Unachievable,
    /// Zero slack, but the thresholded assignment violates the instance
    Rejected(String),
}

fn judge(
    instance: &Instance,
    model: &WaveModel,
    solved: &Solved,
    config: &WaveConfig,
) -> Result<Verdict> {
    let slack = model
        .slack_value(solved)
        .context("relaxed wave model declares no stock slack")?;
    if slack >= config.slack_tolerance {
        return Ok(Verdict::Unachievable);
    }
    let assignment = model.assignment(solved);
    let solution = WaveSolution::from_assignment(&assignment);
    if let Some(violation) = assertions::first_violation(instance, &solution) {
        return Ok(Verdict::Rejected(violation));
    }
    Ok(match assignment.ratio(instance) {
        Some(ratio) => Verdict::Achieved(assignment, ratio),
        None => Verdict::Rejected("wave visits no aisle".to_string()),
    })
}

/// Cursor window `lo..=hi` after probing candidate `j`, `None` once it is empty.
///
/// A rejected probe proves nothing about the candidate: only `j` itself is skipped.
fn narrow(
    candidates: &[Ratio],
    (lo, hi): (usize, usize),
    j: usize,
    verdict: &Verdict,
) -> Option<(usize, usize)> {
    let (lo, hi) = match verdict {
        // skip every candidate the returned wave already reaches
        Verdict::Achieved(_, ratio) => {
            (candidates.partition_point(|c| c <= ratio).max(j + 1), hi)
        }
        Verdict::Unachievable => (lo, j.checked_sub(1)?),
        Verdict::Rejected(_) => (j + 1, hi),
    };
    (lo <= hi).then_some((lo, hi))
}

fn keep_better(best: &mut Option<(Assignment, Ratio)>, assignment: Assignment, ratio: Ratio) {
    if best.as_ref().is_none_or(|(_, r)| ratio > *r) {
        *best = Some((assignment, ratio));
    }
}
