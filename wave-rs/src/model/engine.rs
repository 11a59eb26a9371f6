use crate::model::session::LinearConstraint;
use anyhow::Result;
use good_lp::{Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable};
use log::trace;
use std::time::{Duration, Instant};

#[cfg(feature = "highs")]
use good_lp::solvers::WithTimeLimit;
#[cfg(feature = "highs")]
use good_lp::solvers::highs::highs;
#[cfg(not(feature = "highs"))]
use good_lp::solvers::microlp::microlp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

/// Linear objective of a solve
#[derive(Debug, Clone)]
pub struct Objective {
    pub sense: Sense,
    pub expr: Expression,
}

impl Objective {
    pub fn new(sense: Sense, expr: impl Into<Expression>) -> Self {
        Self {
            sense,
            expr: expr.into(),
        }
    }
}

/// Per-call settings forwarded to the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveParams {
    /// Hard wall-clock limit of this call
    pub time_limit: Option<Duration>,
    /// Absolute distance from proven optimality at which the engine may stop
    pub abs_mip_gap: f64,
}

impl Default for SolveParams {
    fn default() -> Self {
        Self {
            time_limit: None,
            abs_mip_gap: 1e-5,
        }
    }
}

/// Objective value and variable values (in declaration order) of a solved model
#[derive(Debug, Clone)]
pub struct Solved {
    pub objective: f64,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub enum SolveOutcome {
    Optimal(Solved),
    /// The engine proved that no assignment satisfies the constraints
    Infeasible,
    /// The per-call time limit elapsed, with the best assignment found so far if any
    TimeLimitReached(Option<Solved>),
}

pub(crate) fn solve(
    variables: ProblemVariables,
    handles: &[Variable],
    objective: &Objective,
    constraints: &[LinearConstraint],
    params: &SolveParams,
) -> Result<SolveOutcome> {
    let problem = match objective.sense {
        Sense::Maximize => variables.maximise(objective.expr.clone()),
        Sense::Minimize => variables.minimise(objective.expr.clone()),
    };
    #[cfg(feature = "highs")]
    let model = {
        let model = problem
            .using(highs)
            .set_option("mip_abs_gap", params.abs_mip_gap);
        match params.time_limit {
            Some(limit) => model.with_time_limit(limit.as_secs_f64()),
            None => model,
        }
    };
    // microlp solves to optimality and has no per-call limit
    #[cfg(not(feature = "highs"))]
    let model = problem.using(microlp);

    let model = constraints
        .iter()
        .fold(model, |model, c| model.with(c.to_constraint()));

    let start = Instant::now();
    let result = model.solve();
    let elapsed = start.elapsed();
    let timed_out = params.time_limit.is_some_and(|limit| elapsed >= limit);
    trace!(
        "engine returned after {:.3}s ({} constraints, timed out: {timed_out})",
        elapsed.as_secs_f64(),
        constraints.len()
    );

    match result {
        Ok(solution) => {
            let solved = Solved {
                objective: objective.expr.eval_with(&solution),
                values: handles.iter().map(|h| solution.value(*h)).collect(),
            };
            match timed_out {
                true => Ok(SolveOutcome::TimeLimitReached(Some(solved))),
                false => Ok(SolveOutcome::Optimal(solved)),
            }
        }
        Err(ResolutionError::Infeasible) => Ok(SolveOutcome::Infeasible),
        Err(_) if timed_out => Ok(SolveOutcome::TimeLimitReached(None)),
        Err(err) => Err(anyhow::Error::new(err).context("solver engine failed")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinearConstraint, ModelSession};
    use float_cmp::approx_eq;
    use good_lp::variable;

    #[test]
    fn solves_small_knapsack() {
        let mut session = ModelSession::new();
        let x = (0..3)
            .map(|_| session.add_variable(variable().binary()))
            .collect::<Vec<_>>();
        // weights 3, 4, 2 with capacity 6, values 5, 6, 3
        session.add_constraint(LinearConstraint::leq(3.0 * x[0] + 4.0 * x[1] + 2.0 * x[2], 6.0));
        let objective = Objective::new(Sense::Maximize, 5.0 * x[0] + 6.0 * x[1] + 3.0 * x[2]);

        match session.solve(&objective, &SolveParams::default()).unwrap() {
            SolveOutcome::Optimal(solved) => {
                assert!(approx_eq!(f64, solved.objective, 9.0, epsilon = 1e-6));
                assert_eq!(solved.values.len(), 3);
                assert!(solved.values[1] > 0.5 && solved.values[2] > 0.5);
                assert!(solved.values[0] < 0.5);
            }
            other => panic!("expected an optimal outcome, got {other:?}"),
        }
    }

    #[test]
    fn reports_infeasibility() {
        let mut session = ModelSession::new();
        let x = session.add_variable(variable().binary());
        session.add_constraint(LinearConstraint::geq(Expression::from(x), 2.0));
        let outcome = session
            .solve(&Objective::new(Sense::Minimize, x), &SolveParams::default())
            .unwrap();
        assert!(matches!(outcome, SolveOutcome::Infeasible));
    }
}
