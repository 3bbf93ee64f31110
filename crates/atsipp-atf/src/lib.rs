//! `atsipp-atf`: arrival-time functions and their exact lower envelope.
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`edge`]     | `EdgeAtf`:  one edge's arrival-time function, `compose`    |
//! | [`piece`]    | `Piece`:  flat / rising linear piece and crossing points   |
//! | [`compound`] | `CompoundAtf`:  interval-indexed lower envelope            |
//!
//! An [`EdgeAtf`] maps a departure time to an arrival time.  It is constant
//! (`alpha + delta`) while the traveller has to wait for `alpha`, then rises
//! with slope one until the domain closes at `beta`.  Every function in this
//! crate is therefore made of at most two linear pieces with slope 0 or 1,
//! which keeps envelope maintenance exact and O(1) per overlapped segment.

pub mod compound;
pub mod edge;
pub mod piece;

#[cfg(test)]
mod tests;

pub use compound::{CompoundAtf, Segment};
pub use edge::{EdgeAtf, compose};
pub use piece::Piece;
