//! Frontier ATF propagation.
//!
//! Every node left on the frontier knows, as an arrival-time function of
//! departure from the root, how soon it can be reached.  Adding the node's
//! static estimate to that function's `delta` bounds the arrival at the goal
//! through that node.  The root's dynamic envelope becomes the lower
//! envelope of those bounds, and the root's static value rises to the
//! smallest `g.delta + h` over the frontier.

use tracing::trace;

use atsipp_core::{SearchStats, Time};
use atsipp_search::HeuristicTable;

use crate::{LearnContext, Learner};

#[derive(Copy, Clone, Debug, Default)]
pub struct FrontierPropagation;

impl FrontierPropagation {
    pub fn new() -> Self {
        Self
    }
}

impl Learner for FrontierPropagation {
    fn name(&self) -> &'static str {
        "frontier"
    }

    fn learn(&mut self, ctx: &LearnContext<'_>, table: &mut HeuristicTable, _stats: &mut SearchStats) {
        let root = ctx.root;
        table.reset_dynamic(root);

        let mut best = Time::INFINITY;
        for node in ctx.open.frontier() {
            let h = table.static_estimate(ctx.graph.location(node.state));
            best = best.min(node.g.delta + h);
            table.insert_dynamic(root, node.g.shifted(h));
        }

        let root_loc = ctx.root_location();
        if best.is_finite() {
            table.raise_static(root_loc, best);
        }
        trace!(
            %root,
            frontier = ctx.open.frontier_len(),
            h_static = table.static_estimate(root_loc),
            segments = table.dynamic(root).map_or(0, |e| e.len()),
            "frontier propagation"
        );
    }
}
