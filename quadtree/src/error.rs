use common::shapes::{Circle, View};
use common::ShapeError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("circle footprint lies outside the index bounds (circle: {circle}, bounds: {bounds})")]
    OutOfBounds { circle: Circle, bounds: View },
    /// The lock ledger was asked to release something other than its latest acquisition.
    #[error("leaf lock released out of acquisition order")]
    LockOrder,
    #[error("collected leaf was in a phase that cannot accept a circle")]
    UnexpectedPhase,
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
