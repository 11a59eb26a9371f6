use crate::entities::{Instance, WaveSolution};
use crate::io::ext_repr::ExtSolution;

/// Exports a wave out of the library
pub fn export(instance: &Instance, solution: &WaveSolution) -> ExtSolution {
    ExtSolution {
        orders: solution.orders.iter().copied().collect(),
        aisles: solution.aisles.iter().copied().collect(),
        picked_units: solution.picked_units(instance),
        objective: solution.objective(instance),
    }
}
