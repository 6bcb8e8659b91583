use crate::backend::SpatialBackend;
use crate::error::QuadtreeResult;
use crate::quadtree::{Config, QuadTree};
use common::shapes::{Circle, View};
use fxhash::FxHashSet;
use tracing::warn;

pub type CircleSet = FxHashSet<Circle>;

/// Set of non-overlapping circles inside a fixed region.
///
/// `put`, `get_conflicts` and `get_within_view` take `&self` and can be shared across
/// threads. `clear_view` takes `&mut self`, so it never overlaps with anything else.
///
/// ```
/// use concurrent_quadtree::shapes::{Circle, View};
/// use concurrent_quadtree::SpatialIndex;
///
/// let mut index = SpatialIndex::new(0.0, 100.0, 0.0, 100.0).unwrap();
/// assert!(index.put(Circle::new(10.0, 10.0, 5.0)));
/// assert!(index.put(Circle::new(50.0, 50.0, 5.0)));
/// assert!(!index.put(Circle::new(10.0, 10.0, 3.0)));
///
/// index.clear_view(&View::new(0.0, 20.0, 0.0, 20.0).unwrap());
/// let left = index.get_within_view(&View::new(0.0, 100.0, 0.0, 100.0).unwrap());
/// assert_eq!(left.len(), 1);
/// assert!(left.contains(&Circle::new(50.0, 50.0, 5.0)));
/// ```
#[derive(Debug)]
pub struct SpatialIndex<B: SpatialBackend = QuadTree> {
    backend: B,
}

impl SpatialIndex<QuadTree> {
    pub fn new(left_x: f64, right_x: f64, top_y: f64, bottom_y: f64) -> QuadtreeResult<Self> {
        let bounds = View::new(left_x, right_x, top_y, bottom_y)?;
        Ok(Self::with_config(bounds, Config::default()))
    }

    pub fn with_config(bounds: View, config: Config) -> Self {
        Self::with_backend(QuadTree::new_with_config(bounds, config))
    }
}

impl<B: SpatialBackend> SpatialIndex<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn bounds(&self) -> View {
        self.backend.bounds()
    }

    /// Inserts `circle`, returning `false` on a conflict or on any failure.
    /// Use [`SpatialIndex::try_put`] to tell the two apart.
    pub fn put(&self, circle: Circle) -> bool {
        match self.backend.try_put(circle) {
            Ok(inserted) => inserted,
            Err(error) => {
                warn!(%circle, %error, "put failed, reporting circle as not inserted");
                false
            }
        }
    }

    pub fn try_put(&self, circle: Circle) -> QuadtreeResult<bool> {
        self.backend.try_put(circle)
    }

    /// Stored circles that overlap `circle`, without inserting it.
    pub fn get_conflicts(&self, circle: &Circle) -> CircleSet {
        let mut conflicts = CircleSet::default();
        self.backend.collect_conflicts(circle, &mut conflicts);
        conflicts
    }

    pub fn get_within_view(&self, view: &View) -> CircleSet {
        let mut circles = CircleSet::default();
        self.backend.collect_within_view(view, &mut circles);
        circles
    }

    /// Removes every circle fully or partially within `view`.
    pub fn clear_view(&mut self, view: &View) {
        self.backend.clear_view(view);
    }
}
