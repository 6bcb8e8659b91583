use crate::error::QuadtreeResult;
use common::shapes::{Circle, View};
use fxhash::FxHashSet;

/// Storage strategy behind a `SpatialIndex`.
pub trait SpatialBackend: Send + Sync {
    /// Region the backend was built over.
    fn bounds(&self) -> View;

    /// Inserts `circle` unless it overlaps a stored circle. `Ok(false)` means a conflict;
    /// `Err` means the insert could not be attempted or failed internally.
    fn try_put(&self, circle: Circle) -> QuadtreeResult<bool>;

    /// Adds every stored circle that strictly overlaps `circle` to `out`.
    fn collect_conflicts(&self, circle: &Circle, out: &mut FxHashSet<Circle>);

    /// Adds every stored circle whose footprint touches `view` to `out`.
    fn collect_within_view(&self, view: &View, out: &mut FxHashSet<Circle>);

    /// Removes every circle whose footprint touches `view`.
    fn clear_view(&mut self, view: &View);
}
