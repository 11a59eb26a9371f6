use crate::entities::{Assignment, Instance, Ratio};
use std::collections::BTreeSet;

/// Final wave: the ids of the selected orders and of the visited aisles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WaveSolution {
    pub orders: BTreeSet<usize>,
    pub aisles: BTreeSet<usize>,
}

impl WaveSolution {
    pub fn from_assignment(assignment: &Assignment) -> Self {
        Self {
            orders: assignment.selected_orders().collect(),
            aisles: assignment.selected_aisles().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty() || self.aisles.is_empty()
    }

    pub fn picked_units(&self, instance: &Instance) -> u64 {
        self.orders.iter().map(|o| instance.order(*o).units()).sum()
    }

    /// Units picked per item over the selected orders
    pub fn picked_per_item(&self, instance: &Instance) -> Vec<u64> {
        let mut picked = vec![0; instance.n_items];
        for (item, qty) in self.orders.iter().flat_map(|o| instance.order(*o).demand.iter()) {
            picked[item] += qty as u64;
        }
        picked
    }

    /// Units available per item over the visited aisles
    pub fn available_per_item(&self, instance: &Instance) -> Vec<u64> {
        let mut available = vec![0; instance.n_items];
        for (item, qty) in self.aisles.iter().flat_map(|a| instance.aisle(*a).stock.iter()) {
            available[item] += qty as u64;
        }
        available
    }

    /// Exact objective `picked units / visited aisles`, `None` for an empty wave.
    pub fn ratio(&self, instance: &Instance) -> Option<Ratio> {
        match self.is_empty() {
            true => None,
            false => {
                let units = self.picked_units(instance).min(u32::MAX as u64) as u32;
                Some(Ratio::new(units, self.aisles.len() as u32))
            }
        }
    }

    /// Objective value recomputed from the selected sets, 0.0 for an empty wave.
    pub fn objective(&self, instance: &Instance) -> f64 {
        self.ratio(instance).map_or(0.0, |r| r.value())
    }
}
