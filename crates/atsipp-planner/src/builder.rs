//! Fluent builder for constructing a [`Planner`].

use atsipp_core::Location;
use atsipp_graph::TimeDependentGraph;
use atsipp_learn::Learner;
use atsipp_search::{AugmentedSipp, ExpansionBudget, HeuristicTable};

use crate::{PlanError, PlanResult, Planner};

/// Fluent builder for [`Planner<L>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                          |
/// |-----------------------|----------------------------------|
/// | `.budget(b)`          | `ExpansionBudget::Unbounded`     |
/// | `.table(t)`           | empty table for `goal`           |
/// | `.max_iterations(n)`  | no limit                         |
///
/// # Example
///
/// ```rust,ignore
/// let mut planner = PlannerBuilder::new(&td, goal, ScalarDijkstra::new())
///     .budget(ExpansionBudget::Expansions(16))
///     .max_iterations(10_000)
///     .build()?;
/// ```
pub struct PlannerBuilder<'g, L: Learner> {
    graph:          &'g TimeDependentGraph,
    goal:           Location,
    learner:        L,
    budget:         ExpansionBudget,
    table:          Option<HeuristicTable>,
    max_iterations: Option<usize>,
}

impl<'g, L: Learner> PlannerBuilder<'g, L> {
    pub fn new(graph: &'g TimeDependentGraph, goal: Location, learner: L) -> Self {
        Self {
            graph,
            goal,
            learner,
            budget: ExpansionBudget::Unbounded,
            table: None,
            max_iterations: None,
        }
    }

    /// Expansions per bounded search.  Must not be zero.
    pub fn budget(mut self, budget: ExpansionBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Start from a previously learned table.  Its goal must match.
    pub fn table(mut self, table: HeuristicTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Fail with [`PlanError::IterationLimit`] instead of looping forever.
    pub fn max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    pub fn build(self) -> PlanResult<Planner<'g, L>> {
        if self.budget == ExpansionBudget::Expansions(0) {
            return Err(PlanError::Config(
                "a real-time budget of 0 expansions never yields a move".into(),
            ));
        }
        if self.graph.states_at(self.goal).next().is_none() {
            return Err(PlanError::Config(format!("goal {} has no safe state", self.goal)));
        }
        let table = match self.table {
            Some(t) if t.goal() != self.goal => {
                return Err(PlanError::Config(format!(
                    "heuristic table is for goal {}, planner goal is {}",
                    t.goal(),
                    self.goal
                )));
            }
            Some(t) => t,
            None => HeuristicTable::new(self.goal),
        };

        Ok(Planner {
            graph: self.graph,
            goal: self.goal,
            budget: self.budget,
            learner: self.learner,
            table,
            search: AugmentedSipp::new(self.graph, self.goal),
            max_iterations: self.max_iterations,
        })
    }
}
