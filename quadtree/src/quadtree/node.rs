use arc_swap::ArcSwap;
use common::shapes::{circle_touches_extent, Circle, View};
use parking_lot::ReentrantMutex;
use std::fmt;
use std::slice;
use std::sync::Arc;

/// Immutable contents of a node. A new value is swapped in on every mutation.
pub(crate) enum NodeState {
    Empty,
    One(Circle),
    Two([Circle; 2]),
    /// Leaf at the depth limit holding three or more circles.
    Overflow(Vec<Circle>),
    /// Children in quadrant order: top-left, bottom-left, top-right, bottom-right.
    Branch([Arc<SpatialNode>; 4]),
}

impl NodeState {
    pub(crate) fn from_circles(circles: Vec<Circle>) -> Self {
        match circles.as_slice() {
            [] => NodeState::Empty,
            [only] => NodeState::One(*only),
            [first, second] => NodeState::Two([*first, *second]),
            _ => NodeState::Overflow(circles),
        }
    }

    #[inline(always)]
    pub(crate) fn is_branch(&self) -> bool {
        matches!(self, NodeState::Branch(_))
    }

    /// Circles stored directly in this node; empty for branches.
    #[inline(always)]
    pub(crate) fn circles(&self) -> &[Circle] {
        match self {
            NodeState::Empty | NodeState::Branch(_) => &[],
            NodeState::One(circle) => slice::from_ref(circle),
            NodeState::Two(pair) => pair,
            NodeState::Overflow(circles) => circles,
        }
    }

    fn phase_name(&self) -> &'static str {
        match self {
            NodeState::Empty => "EMPTY",
            NodeState::One(_) => "ONE_CIRCLE",
            NodeState::Two(_) => "TWO_CIRCLE",
            NodeState::Overflow(_) => "OVERFLOW",
            NodeState::Branch(_) => "BRANCH",
        }
    }
}

/// A quadtree node over a fixed region.
///
/// Readers take a single atomic load of `state` and work from that snapshot. Writers
/// swap `state` only while holding `lock`, and only while the node is a leaf. Once a
/// node is a branch its children never change until the region is cleared.
pub(crate) struct SpatialNode {
    pub(crate) bounds: View,
    pub(crate) depth: u32,
    pub(crate) state: ArcSwap<NodeState>,
    pub(crate) lock: Arc<ReentrantMutex<()>>,
}

impl SpatialNode {
    pub(crate) fn new(bounds: View, depth: u32) -> Self {
        Self {
            bounds,
            depth,
            state: ArcSwap::from_pointee(NodeState::Empty),
            lock: Arc::new(ReentrantMutex::new(())),
        }
    }

    /// True if the node region and the view share any area or boundary.
    #[inline(always)]
    pub(crate) fn intersects(&self, view: &View) -> bool {
        self.bounds.intersects(view)
    }

    #[inline(always)]
    pub(crate) fn contained_by(&self, view: &View) -> bool {
        view.contains_view(&self.bounds)
    }

    /// True if the circle's footprint touches this node's region in any way.
    #[inline(always)]
    pub(crate) fn contains_circle(&self, circle: &Circle) -> bool {
        circle_touches_extent(
            circle.x,
            circle.y,
            circle.radius,
            self.bounds.left_x(),
            self.bounds.right_x(),
            self.bounds.top_y(),
            self.bounds.bottom_y(),
        )
    }
}

impl fmt::Debug for SpatialNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.load();
        f.debug_struct("SpatialNode")
            .field("bounds", &self.bounds)
            .field("depth", &self.depth)
            .field("phase", &state.phase_name())
            .field("circles", &state.circles())
            .finish()
    }
}
