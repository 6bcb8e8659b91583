pub mod error;
pub mod shapes;

pub use error::ShapeError;
pub use shapes::{Circle, View};
