/*!
# Edge Weights and Distances

Edge weights are any primitive integer type (see [`EdgeWeight`]). Signed types allow
negative weights as needed by Bellman-Ford; unsigned types work for everything else.

Path lengths are stored as [`Distance`], which extends the weight type by an explicit
`Infinite` value instead of reserving a sentinel such as `W::max_value()`. Extending an
infinite distance never performs any arithmetic, so relaxing out of an unreachable node
cannot overflow.
*/

use std::fmt::{Debug, Display};

use num::PrimInt;

/// Numeric type usable as edge weight
pub trait EdgeWeight: PrimInt + Debug + Display {}

impl<W> EdgeWeight for W where W: PrimInt + Debug + Display {}

/// Length of a path: either a finite weight or `Infinite` if no path is known.
///
/// The derived ordering puts every `Finite` value below `Infinite`, which is exactly
/// what min-heaps and minimum scans need.
///
/// ```
/// use wgraphs::prelude::*;
///
/// assert!(Distance::Finite(i64::MAX) < Distance::Infinite);
/// assert_eq!(Distance::Finite(3).extend(4), Distance::Finite(7));
/// assert_eq!(Distance::<i32>::Infinite.extend(-5), Distance::Infinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    /// A path of the given length exists
    Finite(W),
    /// No path is known
    Infinite,
}

impl<W: EdgeWeight> Distance<W> {
    /// Distance of the source to itself
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    /// Returns *true* if the distance is not `Infinite`
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value or `None`
    pub fn finite(&self) -> Option<W> {
        match *self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }

    /// Returns the distance of the path extended by an edge of weight `weight`.
    ///
    /// `Infinite` stays `Infinite`. On overflow the result saturates: a positive overflow
    /// becomes `Infinite`, a negative one `Finite(W::min_value())`.
    pub fn extend(self, weight: W) -> Self {
        match self {
            Distance::Infinite => Distance::Infinite,
            Distance::Finite(d) => match d.checked_add(&weight) {
                Some(sum) => Distance::Finite(sum),
                None if weight > W::zero() => Distance::Infinite,
                None => Distance::Finite(W::min_value()),
            },
        }
    }
}

impl<W> From<W> for Distance<W> {
    fn from(value: W) -> Self {
        Distance::Finite(value)
    }
}

impl<W: Display> Display for Distance<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        let mut ds = vec![
            Distance::Infinite,
            Distance::Finite(3),
            Distance::Finite(-2),
            Distance::Infinite,
            Distance::Finite(0),
        ];
        ds.sort();
        assert_eq!(
            ds,
            vec![
                Distance::Finite(-2),
                Distance::Finite(0),
                Distance::Finite(3),
                Distance::Infinite,
                Distance::Infinite
            ]
        );
    }

    #[test]
    fn extend_saturates() {
        assert_eq!(Distance::Finite(i32::MAX - 1).extend(5), Distance::Infinite);
        assert_eq!(
            Distance::Finite(i32::MIN + 1).extend(-5),
            Distance::Finite(i32::MIN)
        );
        assert_eq!(Distance::Finite(10u32).extend(0), Distance::Finite(10));
        assert_eq!(Distance::<u8>::Infinite.extend(1), Distance::Infinite);
    }

    #[test]
    fn display() {
        assert_eq!(Distance::Finite(-4).to_string(), "-4");
        assert_eq!(Distance::<i64>::Infinite.to_string(), "inf");
    }
}
