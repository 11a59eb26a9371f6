use serde::{Deserialize, Serialize};

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtInstance {
    /// Per order, the `(item id, units)` pairs it requires
    pub orders: Vec<Vec<(usize, u32)>>,
    /// Per aisle, the `(item id, units)` pairs it holds
    pub aisles: Vec<Vec<(usize, u32)>>,
    pub n_items: usize,
    pub wave_size_lb: u32,
    pub wave_size_ub: u32,
}

/// External representation of a [`WaveSolution`](crate::entities::WaveSolution).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    /// Ids of the selected orders, ascending
    pub orders: Vec<usize>,
    /// Ids of the visited aisles, ascending
    pub aisles: Vec<usize>,
    pub picked_units: u64,
    pub objective: f64,
}
