use thiserror::Error;

/// Errors reported when defining a [`Shape`].
///
/// All of these are definition-time misuse: a [`Shape`] that constructs
/// successfully can never produce them later.
///
/// [`Shape`]: super::Shape
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The shape has no axes at all.
    #[error("a shape must have at least one axis")]
    ZeroRank,

    /// An axis has extent `0`, which would make every element unaddressable.
    #[error("axis {axis} has extent 0")]
    ZeroExtent { axis: usize },

    /// The product of the extents does not fit in a `usize`.
    #[error("total element count overflows usize")]
    Overflow,

    /// A raw store holds the wrong number of elements for the shape.
    #[error("store holds {got} elements but the shape needs {needed}")]
    LengthMismatch { got: usize, needed: usize },
}

// ----------------------------------------------------------------------------

/// Errors reported by the checked index mappings.
///
/// The unchecked mappings ([`Shape::offset_of()`], [`Shape::coords_of()`])
/// never report these; they return well-defined but meaningless results for
/// out-of-range inputs instead.
///
/// [`Shape::offset_of()`]: super::Shape::offset_of
/// [`Shape::coords_of()`]: super::Shape::coords_of
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// A coordinate is `>=` the extent of its axis.
    #[error("coordinate {coord} is out of bounds for axis {axis} of extent {extent}")]
    CoordOutOfBounds { axis: usize, coord: usize, extent: usize },

    /// A linear offset is `>=` the total element count.
    #[error("offset {offset} is out of bounds for length {len}")]
    OffsetOutOfBounds { offset: usize, len: usize },
}
