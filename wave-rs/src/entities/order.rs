use crate::entities::ItemQtys;

/// A customer order: the units it requires per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Index of the order within the instance
    pub id: usize,
    pub demand: ItemQtys,
}

impl Order {
    pub fn new(id: usize, demand: ItemQtys) -> Self {
        Self { id, demand }
    }

    /// Units picked when this order joins the wave
    pub fn units(&self) -> u64 {
        self.demand.total()
    }
}
