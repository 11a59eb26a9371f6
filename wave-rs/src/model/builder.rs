use crate::entities::{Assignment, Instance};
use crate::model::engine::Solved;
use crate::model::session::{LinearConstraint, ModelSession};
use anyhow::{Result, ensure};
use good_lp::{Expression, Variable, variable};
use log::debug;

/// How the per-item stock coupling constraints are stated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockCoupling {
    /// `Σ_o units(o,i)·w[o] ≤ Σ_a units(a,i)·a[a]`
    Strict,
    /// `Σ_o units(o,i)·w[o] ≤ Σ_a units(a,i)·a[a] + z` with a shared continuous slack `z ≥ 0`
    Relaxed,
}

/// The invariant part of the wave selection model, shared by all search strategies.
///
/// Declares one binary variable per order and per aisle, bounds the picked units to
/// `[wave_size_lb, wave_size_ub]` and couples the demand of every item to the stock of the
/// visited aisles.
pub struct WaveModel {
    pub session: ModelSession,
    /// `w[o]`: order `o` joins the wave
    pub order_vars: Vec<Variable>,
    /// `a[a]`: aisle `a` is visited
    pub aisle_vars: Vec<Variable>,
    /// Stock slack `z`, only present for [`StockCoupling::Relaxed`]
    pub slack: Option<Variable>,
    /// `Σ_o Σ_i units(o,i)·w[o]`
    pub picked_units: Expression,
    /// `Σ_a a[a]`
    pub aisles_visited: Expression,
}

impl WaveModel {
    pub fn build(instance: &Instance, coupling: StockCoupling) -> Result<Self> {
        ensure!(
            !instance.orders.is_empty() && !instance.aisles.is_empty(),
            "invalid instance: cannot build a model without orders ({}) or aisles ({})",
            instance.n_orders(),
            instance.n_aisles()
        );

        let mut session = ModelSession::new();
        let order_vars = (0..instance.n_orders())
            .map(|_| session.add_variable(variable().binary()))
            .collect::<Vec<_>>();
        let aisle_vars = (0..instance.n_aisles())
            .map(|_| session.add_variable(variable().binary()))
            .collect::<Vec<_>>();
        let slack = match coupling {
            StockCoupling::Strict => None,
            StockCoupling::Relaxed => Some(session.add_variable(variable().min(0.0))),
        };

        let picked_units = instance
            .orders
            .iter()
            .zip(&order_vars)
            .fold(Expression::from(0.0), |acc, (order, w)| {
                acc + (order.units() as f64) * *w
            });
        let aisles_visited = aisle_vars
            .iter()
            .fold(Expression::from(0.0), |acc, a| acc + *a);

        // wave size
        session.add_constraint(LinearConstraint::geq(
            picked_units.clone(),
            instance.wave_size_lb as f64,
        ));
        session.add_constraint(LinearConstraint::leq(
            picked_units.clone(),
            instance.wave_size_ub as f64,
        ));

        // a wave selects at least one order and visits at least one aisle
        let orders_selected = order_vars
            .iter()
            .fold(Expression::from(0.0), |acc, w| acc + *w);
        session.add_constraint(LinearConstraint::geq(orders_selected, 1.0));
        session.add_constraint(LinearConstraint::geq(aisles_visited.clone(), 1.0));

        // stock coupling, as `demand - stock (- z) <= 0`
        let mut coupling_exprs = vec![Expression::from(0.0); instance.n_items];
        let mut demanded = vec![false; instance.n_items];
        for (order, w) in instance.orders.iter().zip(&order_vars) {
            for (item, qty) in order.demand.iter() {
                coupling_exprs[item] += (qty as f64) * *w;
                demanded[item] = true;
            }
        }
        for (aisle, a) in instance.aisles.iter().zip(&aisle_vars) {
            for (item, qty) in aisle.stock.iter() {
                coupling_exprs[item] -= (qty as f64) * *a;
            }
        }
        let mut n_coupling = 0;
        // items no order asks for are trivially covered
        for (mut expr, _) in coupling_exprs.into_iter().zip(demanded).filter(|(_, d)| *d) {
            if let Some(z) = slack {
                expr -= z;
            }
            session.add_constraint(LinearConstraint::leq(expr, 0.0));
            n_coupling += 1;
        }

        debug!(
            "built wave model ({:?} coupling): {} variables, {} constraints ({} stock couplings)",
            coupling,
            session.n_variables(),
            session.n_constraints(),
            n_coupling
        );

        Ok(Self {
            session,
            order_vars,
            aisle_vars,
            slack,
            picked_units,
            aisles_visited,
        })
    }

    /// Thresholds the solved order and aisle values into an [`Assignment`].
    pub fn assignment(&self, solved: &Solved) -> Assignment {
        let n_orders = self.order_vars.len();
        let n_aisles = self.aisle_vars.len();
        Assignment::from_values(
            &solved.values[..n_orders],
            &solved.values[n_orders..n_orders + n_aisles],
        )
    }

    /// Value of the stock slack in a solved model, `None` for strict coupling.
    pub fn slack_value(&self, solved: &Solved) -> Option<f64> {
        let idx = self.order_vars.len() + self.aisle_vars.len();
        self.slack.map(|_| solved.values[idx])
    }
}
