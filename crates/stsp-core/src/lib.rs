#![deny(clippy::all)]

pub mod elimination;
pub mod error;
pub mod instance;
pub mod matrix;
pub mod subtour;
pub mod vertex;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use elimination::{
    presence, read_assignment, read_presence, AssignmentReader, Cut, CutEmitter, Relation,
    SubtourElimination,
};
pub use error::{Error, Result};
pub use instance::{Instance, DEFAULT_SEED};
pub use matrix::Matrix;
pub use subtour::{decompose, min_sub_tour, SubTour, SubTours};
pub use vertex::{CostKind, IdAllocator, Point, Vertex, VertexId};
