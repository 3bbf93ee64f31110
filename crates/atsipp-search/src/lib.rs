//! `atsipp-search`: best-first searches over safe-interval graphs.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`index_heap`]  | `IndexedMinHeap` (4-ary, decrease-key)                    |
//! | [`heuristic`]   | `Heuristic` trait, `OctileHeuristic`, `HeuristicTable`    |
//! | [`budget`]      | `ExpansionBudget`                                         |
//! | [`open`]        | `OpenList`, `SearchNode`, `OpenKey`                       |
//! | [`augmented`]   | `AugmentedSipp` (ATF-valued, optionally bounded)          |
//! | [`sipp`]        | `Sipp` (scalar baseline)                                  |
//! | [`error`]       | `SearchError`, `SearchResult<T>`                          |
//!
//! Searches only touch the counters in [`SearchStats`](atsipp_core::SearchStats);
//! callers own resetting them and timing.

pub mod augmented;
pub mod budget;
pub mod error;
pub mod heuristic;
pub mod index_heap;
pub mod open;
pub mod sipp;


pub use augmented::{AugmentedSipp, SearchOutcome};
pub use budget::ExpansionBudget;
pub use error::{SearchError, SearchResult};
pub use heuristic::{Heuristic, HeuristicTable, OctileHeuristic};
pub use index_heap::{IndexedMinHeap, Indexing};
pub use open::{OpenKey, OpenList, SearchNode};
pub use sipp::{Sipp, SippOutcome};
