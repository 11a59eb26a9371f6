use anyhow::{Context, Result};
use itertools::Itertools;

/// Sparse list of `(item id, units)` pairs, sorted by item id.
/// Only items with a positive quantity are stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemQtys(Vec<(usize, u32)>);

impl ItemQtys {
    /// Builds the list from arbitrary pairs. Zero quantities are dropped and repeated
    /// item ids are merged by summing their quantities.
    ///
    /// Fails if the merged quantity of an item does not fit in a `u32`.
    pub fn new(pairs: impl IntoIterator<Item = (usize, u32)>) -> Result<Self> {
        let mut merged: Vec<(usize, u32)> = vec![];
        let sorted = pairs
            .into_iter()
            .filter(|(_, qty)| *qty > 0)
            .sorted_by_key(|(item, _)| *item);
        for (item, qty) in sorted {
            match merged.last_mut() {
                Some((last, total)) if *last == item => {
                    *total = total.checked_add(qty).with_context(|| {
                        format!("repeated entries of item {item} exceed {} units", u32::MAX)
                    })?;
                }
                _ => merged.push((item, qty)),
            }
        }
        Ok(Self(merged))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.0.iter().copied()
    }

    /// Sum of all quantities
    pub fn total(&self) -> u64 {
        self.0.iter().map(|(_, qty)| *qty as u64).sum()
    }

    pub fn max_item_id(&self) -> Option<usize> {
        self.0.last().map(|(item, _)| *item)
    }
}
