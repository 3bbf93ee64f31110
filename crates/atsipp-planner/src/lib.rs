//! `atsipp-planner`: the real-time search/learn/move loop.
//!
//! # Planning loop
//!
//! ```text
//! stats.init()
//! while location(cur) != goal:
//!   ① Search: bounded Augmented SIPP from (cur, t), reading the table.
//!   ② Learn : the configured Learner tightens the table from the
//!              search's frontier and closed set.
//!   ③ Move  : follow the first edge towards the best frontier node:
//!              t = edge.atf.arrival_time(t), cur = edge.to.
//! ```
//!
//! # Variants
//!
//! | Name      | Search                  | Learning                           |
//! |-----------|-------------------------|------------------------------------|
//! | `sipp`    | plain SIPP, unbounded   | none                               |
//! | `asipp`   | ATF labels, unbounded   | none                               |
//! | `rtas`    | bounded, real-time      | frontier propagation               |
//! | `plrts`   | bounded, real-time      | scalar backward Dijkstra           |
//! | `maxatfs` | bounded, real-time      | scalar, then ATF backward Dijkstra |
//! | `medatfs` | bounded, real-time      | scalar, then frontier propagation  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let td = TimeDependentGraph::compile(&graph);
//! let start = td.find_earliest(start_loc, 0.0)?;
//! let mut planner = PlannerBuilder::new(&td, goal, FrontierPropagation)
//!     .budget(ExpansionBudget::Expansions(32))
//!     .build()?;
//! let outcome = planner.run(start, 0.0, &mut stats, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod dispatch;
pub mod error;
pub mod observer;
pub mod planner;
pub mod variant;


pub use builder::PlannerBuilder;
pub use dispatch::{Problem, plan};
pub use error::{PlanError, PlanResult};
pub use observer::{IterationRecord, NoopObserver, PlanObserver};
pub use planner::{PlanOutcome, Planner};
pub use variant::SearchVariant;
