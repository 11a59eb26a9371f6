use crate::entities::ItemQtys;

/// A storage aisle: the units it holds per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aisle {
    /// Index of the aisle within the instance
    pub id: usize,
    pub stock: ItemQtys,
}

impl Aisle {
    pub fn new(id: usize, stock: ItemQtys) -> Self {
        Self { id, stock }
    }

    pub fn units(&self) -> u64 {
        self.stock.total()
    }
}
