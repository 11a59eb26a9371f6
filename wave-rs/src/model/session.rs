use crate::model::engine::{self, Objective, SolveOutcome, SolveParams};
use anyhow::Result;
use good_lp::{Expression, ProblemVariables, Variable, VariableDefinition};
use std::ops::Deref;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Leq,
    Geq,
    Eq,
}

/// A linear constraint `lhs <relation> rhs`, kept as data so it can be replayed on every solve.
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    pub lhs: Expression,
    pub relation: Relation,
    pub rhs: f64,
}

impl LinearConstraint {
    pub fn leq(lhs: Expression, rhs: f64) -> Self {
        Self { lhs, relation: Relation::Leq, rhs }
    }

    pub fn geq(lhs: Expression, rhs: f64) -> Self {
        Self { lhs, relation: Relation::Geq, rhs }
    }

    pub fn eq(lhs: Expression, rhs: f64) -> Self {
        Self { lhs, relation: Relation::Eq, rhs }
    }

    pub(crate) fn to_constraint(&self) -> good_lp::Constraint {
        let lhs = self.lhs.clone();
        match self.relation {
            Relation::Leq => lhs.leq(self.rhs),
            Relation::Geq => lhs.geq(self.rhs),
            Relation::Eq => lhs.eq(self.rhs),
        }
    }
}

/// Explicitly scoped model state owned by the active strategy: the declared variables and
/// the constraints that currently hold.
///
/// Constraints specific to a single solve are added through [`ModelSession::probe`] and are
/// retracted as soon as the returned [`Probe`] goes out of scope.
pub struct ModelSession {
    minter: ProblemVariables,
    definitions: Vec<VariableDefinition>,
    handles: Vec<Variable>,
    constraints: Vec<LinearConstraint>,
}

impl ModelSession {
    pub fn new() -> Self {
        Self {
            minter: ProblemVariables::new(),
            definitions: vec![],
            handles: vec![],
            constraints: vec![],
        }
    }

    /// Declares a variable. Values in [`Solved`](crate::model::Solved) are indexed by declaration order.
    pub fn add_variable(&mut self, definition: VariableDefinition) -> Variable {
        let handle = self.minter.add(definition.clone());
        self.definitions.push(definition);
        self.handles.push(handle);
        handle
    }

    /// Adds a constraint that holds for every subsequent solve
    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Temporarily adds `constraints`. They are retracted when the returned guard is dropped,
    /// on every exit path.
    pub fn probe(&mut self, constraints: impl IntoIterator<Item = LinearConstraint>) -> Probe<'_> {
        let base_len = self.constraints.len();
        self.constraints.extend(constraints);
        Probe {
            session: self,
            base_len,
        }
    }

    /// Solves the model with the constraints that currently hold.
    pub fn solve(&self, objective: &Objective, params: &SolveParams) -> Result<SolveOutcome> {
        // re-declaring in the same order reproduces the handles held by callers
        let mut variables = ProblemVariables::new();
        for definition in &self.definitions {
            variables.add(definition.clone());
        }
        engine::solve(variables, &self.handles, objective, &self.constraints, params)
    }

    pub fn n_variables(&self) -> usize {
        self.handles.len()
    }

    pub fn n_constraints(&self) -> usize {
        self.constraints.len()
    }
}

impl Default for ModelSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard over the constraints of a single probe, see [`ModelSession::probe`].
pub struct Probe<'s> {
    session: &'s mut ModelSession,
    base_len: usize,
}

impl Deref for Probe<'_> {
    type Target = ModelSession;

    fn deref(&self) -> &ModelSession {
        &*self.session
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.session.constraints.truncate(self.base_len);
    }
}
