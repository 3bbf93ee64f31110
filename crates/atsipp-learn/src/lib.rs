//! `atsipp-learn`: heuristic learning passes run between bounded searches.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`context`]      | `LearnContext<'a>`: graph, finished open list, search root |
//! | [`learner`]      | `Learner` trait, `NoLearning`, `ChainedLearner`, `.then()` |
//! | [`frontier`]     | `FrontierPropagation`: frontier ATFs into the root's envelope |
//! | [`scalar`]       | `ScalarDijkstra`: backward Dijkstra on static values       |
//! | [`atf_dijkstra`] | `AtfDijkstra`: backward Dijkstra on whole envelopes        |
//! | [`queue`]        | `DijkstraKey` and the queue type both Dijkstra passes use  |
//!
//! # Design notes
//!
//! A learning pass reads the search episode through a [`LearnContext`] and
//! writes only to the [`HeuristicTable`](atsipp_search::HeuristicTable).
//! Static values only ever rise; dynamic envelopes are reset per state and
//! then grown by insertion.

pub mod atf_dijkstra;
pub mod context;
pub mod frontier;
pub mod learner;
pub mod queue;
pub mod scalar;


pub use atf_dijkstra::AtfDijkstra;
pub use context::LearnContext;
pub use frontier::FrontierPropagation;
pub use learner::{ChainedLearner, Learner, LearnerExt, NoLearning};
pub use queue::{DijkstraKey, DijkstraQueue};
pub use scalar::ScalarDijkstra;
