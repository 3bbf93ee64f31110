//! Grid movement model shared by the graph generator and the heuristics.

use std::fmt;

/// Which neighbouring cells an agent may step to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Horizontal and vertical unit steps only.
    #[default]
    FourWay,
    /// Four-way plus diagonal steps of length `√2`.
    EightWay,
}

const FOUR: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
const EIGHT: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

impl Connectivity {
    /// `(dx, dy)` offsets of all neighbours, in a fixed order.
    #[inline]
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Connectivity::FourWay => &FOUR,
            Connectivity::EightWay => &EIGHT,
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Connectivity::FourWay => "4-way",
            Connectivity::EightWay => "8-way",
        };
        f.write_str(s)
    }
}
