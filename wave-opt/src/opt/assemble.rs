use crate::opt::WaveOutcome;
use log::info;
use wave_rs::entities::{Assignment, Instance, WaveSolution};
use wave_rs::util::assertions;

/// Turns the winning assignment into the final wave and defends it with an independent
/// feasibility check. The objective is recomputed from the selected sets.
///
/// Panics if the assembled wave violates the instance constraints: the strategies only
/// keep assignments the engine claimed feasible, so this indicates a modeling bug.
pub fn assemble(instance: &Instance, best: Option<&Assignment>, cut_off: bool) -> WaveOutcome {
    let Some(assignment) = best else {
        return match cut_off {
            true => WaveOutcome::BudgetExhausted,
            false => WaveOutcome::NoFeasibleWave,
        };
    };
    let solution = WaveSolution::from_assignment(assignment);
    assert!(
        assertions::solution_is_feasible(instance, &solution),
        "assembled wave violates the instance constraints"
    );
    info!(
        "[ASM] wave of {} orders over {} aisles picks {} units, objective {:.4}",
        solution.orders.len(),
        solution.aisles.len(),
        solution.picked_units(instance),
        solution.objective(instance)
    );
    WaveOutcome::Wave(solution)
}
