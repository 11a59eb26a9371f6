use crate::entities::{Aisle, Instance, Order, WaveSolution};
use log::error;

//Various checks to verify correctness of instances and solutions
//Used in assert!() and debug_assert!() blocks

pub fn instance_ids_correct(orders: &[Order], aisles: &[Aisle]) -> bool {
    orders.iter().enumerate().all(|(i, o)| o.id == i)
        && aisles.iter().enumerate().all(|(i, a)| a.id == i)
}

pub fn instance_items_in_range(instance: &Instance) -> bool {
    let n_items = instance.n_items;
    let in_range = |max_id: Option<usize>| max_id.is_none_or(|id| id < n_items);
    instance.orders.iter().all(|o| in_range(o.demand.max_item_id()))
        && instance.aisles.iter().all(|a| in_range(a.stock.max_item_id()))
}

/// Independent feasibility check of a wave:
/// both sets are non-empty and refer to existing orders/aisles,
/// the picked units lie within the wave size bounds and
/// no item is picked beyond what the visited aisles hold.
pub fn solution_is_feasible(instance: &Instance, solution: &WaveSolution) -> bool {
    match first_violation(instance, solution) {
        Some(violation) => {
            error!("infeasible wave: {violation}");
            false
        }
        None => true,
    }
}

/// Describes the first constraint the wave violates, `None` if it is feasible.
pub fn first_violation(instance: &Instance, solution: &WaveSolution) -> Option<String> {
    if solution.is_empty() {
        return Some(format!(
            "wave is empty: {} orders, {} aisles",
            solution.orders.len(),
            solution.aisles.len()
        ));
    }
    if solution.orders.iter().any(|o| *o >= instance.n_orders())
        || solution.aisles.iter().any(|a| *a >= instance.n_aisles())
    {
        return Some("wave refers to unknown orders or aisles".to_string());
    }

    let picked = solution.picked_units(instance);
    let (lb, ub) = (instance.wave_size_lb as u64, instance.wave_size_ub as u64);
    if picked < lb || picked > ub {
        return Some(format!("wave picks {picked} units, outside of [{lb}, {ub}]"));
    }

    let picked_per_item = solution.picked_per_item(instance);
    let available_per_item = solution.available_per_item(instance);
    let shortages = picked_per_item
        .iter()
        .zip(available_per_item.iter())
        .enumerate()
        .filter(|(_, (p, a))| p > a)
        .collect::<Vec<_>>();
    shortages.first().map(|(item, (p, a))| {
        format!(
            "wave picks {p} units of item {item} while visited aisles hold {a} ({} items short)",
            shortages.len()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ItemQtys;

    fn instance() -> Instance {
        Instance::new(
            vec![
                Order::new(0, ItemQtys::new([(0, 3)]).unwrap()),
                Order::new(1, ItemQtys::new([(0, 2)]).unwrap()),
            ],
            vec![
                Aisle::new(0, ItemQtys::new([(0, 4)]).unwrap()),
                Aisle::new(1, ItemQtys::new([(0, 1)]).unwrap()),
            ],
            1,
            2,
            5,
        )
        .unwrap()
    }

    fn wave(orders: &[usize], aisles: &[usize]) -> WaveSolution {
        WaveSolution {
            orders: orders.iter().copied().collect(),
            aisles: aisles.iter().copied().collect(),
        }
    }

    #[test]
    fn accepts_covered_wave() {
        let instance = instance();
        assert!(solution_is_feasible(&instance, &wave(&[0, 1], &[0, 1])));
        assert!(solution_is_feasible(&instance, &wave(&[0], &[0])));
    }

    #[test]
    fn rejects_stock_shortage() {
        let instance = instance();
        assert!(!solution_is_feasible(&instance, &wave(&[0, 1], &[0])));
        let violation = first_violation(&instance, &wave(&[0, 1], &[0])).unwrap();
        assert!(violation.contains("item 0"));
    }

    #[test]
    fn rejects_wave_size_violation() {
        let mut instance = instance();
        instance.wave_size_lb = 4;
        assert!(!solution_is_feasible(&instance, &wave(&[0], &[0])));
    }

    #[test]
    fn rejects_empty_sets() {
        let instance = instance();
        assert!(!solution_is_feasible(&instance, &wave(&[], &[0])));
        assert!(!solution_is_feasible(&instance, &wave(&[0], &[])));
    }
}
