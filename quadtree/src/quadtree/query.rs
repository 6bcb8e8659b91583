use super::node::{NodeState, SpatialNode};
use common::shapes::{Circle, View};
use fxhash::FxHashSet;

// Queries take one snapshot per visited node and never lock. Different nodes may
// reflect different moments relative to concurrent writers.
impl SpatialNode {
    /// Collects circles touching `view`, visiting only nodes that intersect `reach`.
    /// `reach` must cover every node that can hold a circle touching `view`.
    pub(crate) fn collect_within_view(
        &self,
        reach: &View,
        view: &View,
        out: &mut FxHashSet<Circle>,
    ) {
        if !self.intersects(reach) {
            return;
        }
        let state = self.state.load();
        match &**state {
            NodeState::Branch(children) => {
                for child in children {
                    child.collect_within_view(reach, view, out);
                }
            }
            leaf => out.extend(leaf.circles().iter().filter(|c| c.touches_view(view))),
        }
    }

    pub(crate) fn collect_conflicts(&self, circle: &Circle, out: &mut FxHashSet<Circle>) {
        if !self.contains_circle(circle) {
            return;
        }
        let state = self.state.load();
        match &**state {
            NodeState::Branch(children) => {
                for child in children {
                    child.collect_conflicts(circle, out);
                }
            }
            leaf => out.extend(leaf.circles().iter().filter(|c| c.overlaps(circle))),
        }
    }
}
