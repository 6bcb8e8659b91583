pub mod backend;
pub mod error;
pub mod index;
pub mod quadtree;

pub use backend::SpatialBackend;
pub use common::shapes;
pub use error::{QuadtreeError, QuadtreeResult};
pub use index::{CircleSet, SpatialIndex};
pub use quadtree::{Config, QuadTree};
