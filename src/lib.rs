//! A pure-Rust library providing fixed-shape N-dimensional arrays stored in
//! one contiguous buffer.
//!
//! [`FlatArray<T, N>`] owns a single dense allocation of
//! `dims[0] * … * dims[N-1]` elements. The multi-dimensional structure is
//! entirely computed by [`Shape<N>`], which defines a mixed-radix bijection
//! between `[usize; N]` coordinate tuples and linear offsets: each axis is a
//! digit whose base is that axis's extent, with axis `0` as the
//! fastest-varying digit. [`Shape::offset_of()`] and [`Shape::coords_of()`]
//! convert in either direction and round-trip exactly; their `checked_`
//! variants reject out-of-range inputs with an [`IndexError`] instead of
//! silently wrapping.
//!
//! Nested-array subscripting is provided without nesting any storage:
//! indexing sugar takes a whole coordinate tuple (`a[[x, y, z]]`), and
//! [`View`]/[`ViewMut`] narrow one axis at a time
//! (`a.view().narrow(x).narrow(y).narrow(z).item()`), computing offsets with
//! the same stride arithmetic so both roads lead to the same storage slot.
//! Since axis `0` varies fastest in the linear encoding, a partially
//! narrowed view is a strided selection of the buffer, not a contiguous
//! block.
//!
//! The rank `N` is a compile-time constant and the extents are fixed when a
//! [`Shape`] is constructed ([`Shape::new()`] rejects zero extents with a
//! [`ShapeError`]); nothing about an array's shape can change afterwards.
//! The raw buffer is reachable through [`FlatArray::as_slice()`] and
//! friends, and its linear order is a stable contract for bulk copies and
//! interop.
//!
//! ```
//! use flatdim::{FlatArray, Shape};
//!
//! let shape = Shape::new([3, 2, 1, 1, 2]).unwrap();
//! assert_eq!(shape.len(), 12);
//!
//! let mut a: FlatArray<usize, 5> = FlatArray::new(shape);
//! for (offset, slot) in a.as_mut_slice().iter_mut().enumerate() {
//!     *slot = offset * 3;
//! }
//! assert_eq!(a[[2, 1, 0, 0, 1]], 33);
//! assert_eq!(shape.offset_of([2, 1, 0, 0, 1]), 11);
//! assert_eq!(shape.coords_of(11), [2, 1, 0, 0, 1]);
//! ```

mod error;
pub use error::{IndexError, ShapeError};

mod shape;
pub use shape::Shape;

mod array;
pub use array::FlatArray;

mod view;
pub use view::{View, ViewMut};

mod iter;
pub use iter::{Coords, IndexedIter};
