mod config;
mod insert;
mod ledger;
mod maintenance;
mod node;
mod query;

pub use config::Config;

use crate::backend::SpatialBackend;
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{Circle, View};
use fxhash::FxHashSet;
use node::SpatialNode;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Concurrent quadtree of non-overlapping circles.
///
/// Each leaf holds at most two circles before it splits into four quadrants; a circle
/// is stored in every leaf its footprint touches. `try_put`, `collect_conflicts` and
/// `collect_within_view` may be called from any number of threads at once.
pub struct QuadTree {
    root: Arc<SpatialNode>,
    config: Config,
    /// Bits of the largest radius ever inserted. Positive floats order like their bits.
    max_radius: AtomicU64,
}

impl QuadTree {
    pub fn new_with_config(bounds: View, config: Config) -> Self {
        Self {
            root: Arc::new(SpatialNode::new(bounds, 0)),
            config,
            max_radius: AtomicU64::new(0),
        }
    }

    pub fn new(bounds: View) -> Self {
        Self::new_with_config(bounds, Config::default())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bounds of every current leaf, from one snapshot per node.
    pub fn all_leaf_bounds(&self, out: &mut Vec<View>) {
        self.root.leaf_bounds(out);
    }

    /// Depth of the deepest leaf; the root alone is depth 0.
    pub fn depth(&self) -> u32 {
        self.root.max_depth()
    }

    /// Region whose nodes can hold a circle touching `view`.
    ///
    /// Circles may hang over the bounds, so a view reaching outside them is widened by
    /// the largest diameter stored; the in-bounds part of any touching circle lies
    /// within that distance of the view.
    fn search_reach(&self, view: &View) -> View {
        if self.root.bounds.contains_view(view) {
            return *view;
        }
        let diameter = 2.0 * f64::from_bits(self.max_radius.load(Ordering::Acquire));
        view.grow_by(diameter).unwrap_or(*view)
    }
}

impl SpatialBackend for QuadTree {
    fn bounds(&self) -> View {
        self.root.bounds
    }

    fn try_put(&self, circle: Circle) -> QuadtreeResult<bool> {
        circle.validate()?;
        if !self.root.contains_circle(&circle) {
            return Err(QuadtreeError::OutOfBounds {
                circle,
                bounds: self.root.bounds,
            });
        }
        if circle.radius > 0.0 {
            self.max_radius.fetch_max(circle.radius.to_bits(), Ordering::AcqRel);
        }
        self.root.put(circle, &self.config)
    }

    fn collect_conflicts(&self, circle: &Circle, out: &mut FxHashSet<Circle>) {
        self.root.collect_conflicts(circle, out);
    }

    fn collect_within_view(&self, view: &View, out: &mut FxHashSet<Circle>) {
        let reach = self.search_reach(view);
        self.root.collect_within_view(&reach, view, out);
    }

    fn clear_view(&mut self, view: &View) {
        // Circles partly inside the view may also sit in leaves outside it.
        let mut victims = FxHashSet::default();
        self.collect_within_view(view, &mut victims);
        self.root.clear_contained(view);
        for circle in &victims {
            self.root.evict(circle, &victims);
        }
    }
}

impl fmt::Debug for QuadTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("root", &self.root)
            .field("config", &self.config)
            .field("max_radius", &f64::from_bits(self.max_radius.load(Ordering::Relaxed)))
            .finish()
    }
}
