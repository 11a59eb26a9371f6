use crate::entities::{Aisle, Instance, ItemQtys, Order};
use crate::io::ext_repr::ExtInstance;
use anyhow::{Context, Result, ensure};

/// Imports an instance into the library
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    ensure!(
        !ext_instance.orders.is_empty(),
        "instance has no orders, nothing to select"
    );
    ensure!(
        !ext_instance.aisles.is_empty(),
        "instance has no aisles, nothing to visit"
    );

    let orders = ext_instance
        .orders
        .iter()
        .enumerate()
        .map(|(id, pairs)| {
            let demand = ItemQtys::new(pairs.iter().copied())
                .with_context(|| format!("invalid demand of order {id}"))?;
            Ok(Order::new(id, demand))
        })
        .collect::<Result<Vec<_>>>()?;

    let aisles = ext_instance
        .aisles
        .iter()
        .enumerate()
        .map(|(id, pairs)| {
            let stock = ItemQtys::new(pairs.iter().copied())
                .with_context(|| format!("invalid stock of aisle {id}"))?;
            Ok(Aisle::new(id, stock))
        })
        .collect::<Result<Vec<_>>>()?;

    Instance::new(
        orders,
        aisles,
        ext_instance.n_items,
        ext_instance.wave_size_lb,
        ext_instance.wave_size_ub,
    )
    .context("could not import instance")
}
