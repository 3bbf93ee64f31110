//! The `Learner` trait and combinators.

use atsipp_core::SearchStats;
use atsipp_search::HeuristicTable;

use crate::LearnContext;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// A pass that tightens the heuristic table after a bounded search.
///
/// # Contract
///
/// - Must never lower a static value (use
///   [`HeuristicTable::raise_static`]).
/// - Counts every state a backward pass settles in `stats.learn_expanded`.
/// - Must not touch the search counters (`generated`, `expanded`,
///   `decreased`); timing is the caller's job.
pub trait Learner {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn learn(&mut self, ctx: &LearnContext<'_>, table: &mut HeuristicTable, stats: &mut SearchStats);
}

impl<L: Learner + ?Sized> Learner for Box<L> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn learn(&mut self, ctx: &LearnContext<'_>, table: &mut HeuristicTable, stats: &mut SearchStats) {
        (**self).learn(ctx, table, stats);
    }
}

// ── No-op ─────────────────────────────────────────────────────────────────────

/// Learns nothing.  Used by the offline variants.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoLearning;

impl Learner for NoLearning {
    fn name(&self) -> &'static str {
        "none"
    }

    #[inline]
    fn learn(&mut self, _ctx: &LearnContext<'_>, _table: &mut HeuristicTable, _stats: &mut SearchStats) {}
}

// ── Chaining ──────────────────────────────────────────────────────────────────

/// Runs two learners in sequence over the same episode.
///
/// The second sees the table as left by the first.  Construct with
/// `first.then(second)`.
#[derive(Clone, Debug, Default)]
pub struct ChainedLearner<A, B> {
    first:  A,
    second: B,
}

impl<A: Learner, B: Learner> Learner for ChainedLearner<A, B> {
    fn name(&self) -> &'static str {
        "chained"
    }

    fn learn(&mut self, ctx: &LearnContext<'_>, table: &mut HeuristicTable, stats: &mut SearchStats) {
        self.first.learn(ctx, table, stats);
        self.second.learn(ctx, table, stats);
    }
}

impl<A, B> ChainedLearner<A, B> {
    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }
}

/// Adds `.then(other)` to every [`Learner`].
pub trait LearnerExt: Learner + Sized {
    fn then<B: Learner>(self, other: B) -> ChainedLearner<Self, B> {
        ChainedLearner { first: self, second: other }
    }
}

impl<L: Learner + Sized> LearnerExt for L {}
