use crate::entities::{Aisle, Order};
use crate::util::assertions;
use anyhow::{Result, ensure};

/// Instance of the wave selection problem: orders to choose from, aisles to visit
/// and inclusive bounds on the number of units picked in one wave.
#[derive(Debug, Clone)]
pub struct Instance {
    pub orders: Vec<Order>,
    pub aisles: Vec<Aisle>,
    /// Number of distinct items, item ids lie in `[0, n_items)`
    pub n_items: usize,
    pub wave_size_lb: u32,
    pub wave_size_ub: u32,
}

impl Instance {
    pub fn new(
        orders: Vec<Order>,
        aisles: Vec<Aisle>,
        n_items: usize,
        wave_size_lb: u32,
        wave_size_ub: u32,
    ) -> Result<Self> {
        let instance = Self {
            orders,
            aisles,
            n_items,
            wave_size_lb,
            wave_size_ub,
        };
        instance.check()?;
        Ok(instance)
    }

    /// Verifies the structural invariants of the instance.
    /// An instance without orders or aisles is invalid.
    pub fn check(&self) -> Result<()> {
        ensure!(
            !self.orders.is_empty(),
            "invalid instance: at least one order is required"
        );
        ensure!(
            !self.aisles.is_empty(),
            "invalid instance: at least one aisle is required"
        );
        ensure!(
            self.wave_size_lb <= self.wave_size_ub,
            "invalid instance: wave size lower bound {} exceeds upper bound {}",
            self.wave_size_lb,
            self.wave_size_ub
        );
        ensure!(
            assertions::instance_ids_correct(&self.orders, &self.aisles),
            "invalid instance: order and aisle ids should be consecutive starting from 0"
        );
        ensure!(
            assertions::instance_items_in_range(self),
            "invalid instance: item ids should lie in [0, {})",
            self.n_items
        );
        Ok(())
    }

    pub fn n_orders(&self) -> usize {
        self.orders.len()
    }

    pub fn n_aisles(&self) -> usize {
        self.aisles.len()
    }

    pub fn order(&self, id: usize) -> &Order {
        &self.orders[id]
    }

    pub fn aisle(&self, id: usize) -> &Aisle {
        &self.aisles[id]
    }

    /// Units picked if every order joined the wave
    pub fn total_order_units(&self) -> u64 {
        self.orders.iter().map(|o| o.units()).sum()
    }

    /// Units stored over all aisles
    pub fn total_stock(&self) -> u64 {
        self.aisles.iter().map(|a| a.units()).sum()
    }

    /// Largest number of units a wave can reach: the configured upper bound,
    /// capped by the units all orders together require.
    pub fn effective_wave_size_ub(&self) -> u32 {
        let total = self.total_order_units().min(u32::MAX as u64) as u32;
        self.wave_size_ub.min(total)
    }

    /// `true` when the lower bound alone rules out every wave.
    pub fn lower_bound_unreachable(&self) -> bool {
        let lb = self.wave_size_lb as u64;
        lb > self.total_order_units() || lb > self.total_stock()
    }
}
