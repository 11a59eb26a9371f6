use crate::opt::Strategy;
use log::info;
use wave_rs::entities::Instance;

/// Estimated number of solver calls of both strategies on `instance`:
/// `(fixed aisles, ratio search)`.
///
/// The fixed-aisle strategy solves at most one sub-problem per aisle count. The ratio search
/// bisects the candidate ratio set, bounded by `(ub - lb + 1) * nAisles` elements, plus its
/// initial feasibility probe.
pub fn estimated_probes(instance: &Instance) -> (u64, u64) {
    let n_aisles = instance.n_aisles() as u64;
    let lb = instance.wave_size_lb as u64;
    let ub = instance.effective_wave_size_ub() as u64;
    let n_candidates = (ub + 1).saturating_sub(lb).max(1) * n_aisles.max(1);
    let bisection = (n_candidates as f64).log2().ceil() as u64;
    (n_aisles, bisection + 1)
}

/// Picks the strategy expected to need the fewest solver calls.
/// Ties go to [`Strategy::FixedAisles`], which has no numeric tolerance in its probes.
pub fn select(instance: &Instance) -> Strategy {
    let (fixed, ratio) = estimated_probes(instance);
    let strategy = match fixed <= ratio {
        true => Strategy::FixedAisles,
        false => Strategy::RatioSearch,
    };
    info!("[SEL] estimated probes: fixed aisles {fixed}, ratio search {ratio} -> {strategy:?}");
    strategy
}
