//! The six search variants selectable by name.

use std::fmt;
use std::str::FromStr;

use atsipp_learn::{AtfDijkstra, FrontierPropagation, Learner, LearnerExt, ScalarDijkstra};

use crate::PlanError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SearchVariant {
    /// Plain SIPP over the safe-interval graph.
    Sipp,
    /// Unbounded Augmented SIPP.
    Asipp,
    /// Real-time, frontier ATF propagation.
    Rtas,
    /// Real-time, scalar backward Dijkstra.
    Plrts,
    /// Real-time, scalar then ATF backward Dijkstra.
    MaxAtfs,
    /// Real-time, scalar backward Dijkstra then frontier propagation.
    MedAtfs,
}

impl SearchVariant {
    pub const ALL: [SearchVariant; 6] = [
        SearchVariant::Sipp,
        SearchVariant::Asipp,
        SearchVariant::Rtas,
        SearchVariant::Plrts,
        SearchVariant::MaxAtfs,
        SearchVariant::MedAtfs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchVariant::Sipp => "sipp",
            SearchVariant::Asipp => "asipp",
            SearchVariant::Rtas => "rtas",
            SearchVariant::Plrts => "plrts",
            SearchVariant::MaxAtfs => "maxatfs",
            SearchVariant::MedAtfs => "medatfs",
        }
    }

    /// Whether the variant moves one edge per bounded search.
    pub fn is_real_time(self) -> bool {
        !matches!(self, SearchVariant::Sipp | SearchVariant::Asipp)
    }

    /// Learning pass run after each bounded search; `None` for the offline
    /// variants.
    pub fn learner(self) -> Option<Box<dyn Learner>> {
        match self {
            SearchVariant::Sipp | SearchVariant::Asipp => None,
            SearchVariant::Rtas => Some(Box::new(FrontierPropagation)),
            SearchVariant::Plrts => Some(Box::new(ScalarDijkstra::new())),
            SearchVariant::MaxAtfs => Some(Box::new(ScalarDijkstra::new().then(AtfDijkstra::new()))),
            SearchVariant::MedAtfs => Some(Box::new(ScalarDijkstra::new().then(FrontierPropagation))),
        }
    }
}

impl fmt::Display for SearchVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchVariant {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchVariant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PlanError::UnknownVariant(s.to_owned()))
    }
}
