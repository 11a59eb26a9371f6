use crate::entities::{Instance, Ratio};

/// Values returned by the engine at or above this threshold mark a binary variable as selected.
/// Engines may return values close to, but not exactly, 0 or 1.
pub const SELECTION_THRESHOLD: f64 = 0.5;

/// Raw decision of one sub-problem: which orders join the wave and which aisles are visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// `w_sel[o]`: order `o` is part of the wave
    pub w_sel: Vec<bool>,
    /// `a_sel[a]`: aisle `a` is visited
    pub a_sel: Vec<bool>,
}

impl Assignment {
    /// Thresholds raw engine values into a boolean assignment.
    pub fn from_values(order_values: &[f64], aisle_values: &[f64]) -> Self {
        Self {
            w_sel: order_values.iter().map(|v| *v >= SELECTION_THRESHOLD).collect(),
            a_sel: aisle_values.iter().map(|v| *v >= SELECTION_THRESHOLD).collect(),
        }
    }

    pub fn selected_orders(&self) -> impl Iterator<Item = usize> + '_ {
        self.w_sel.iter().enumerate().filter(|(_, s)| **s).map(|(o, _)| o)
    }

    pub fn selected_aisles(&self) -> impl Iterator<Item = usize> + '_ {
        self.a_sel.iter().enumerate().filter(|(_, s)| **s).map(|(a, _)| a)
    }

    pub fn n_visited_aisles(&self) -> usize {
        self.a_sel.iter().filter(|s| **s).count()
    }

    pub fn picked_units(&self, instance: &Instance) -> u64 {
        self.selected_orders()
            .map(|o| instance.order(o).units())
            .sum()
    }

    /// Exact units-per-aisle ratio of this assignment, `None` if no aisle is visited.
    pub fn ratio(&self, instance: &Instance) -> Option<Ratio> {
        let aisles = self.n_visited_aisles() as u32;
        let units = self.picked_units(instance).min(u32::MAX as u64) as u32;
        (aisles > 0).then(|| Ratio::new(units, aisles))
    }
}
