use super::node::{NodeState, SpatialNode};
use common::shapes::{Circle, View};
use fxhash::FxHashSet;
use std::sync::Arc;

impl SpatialNode {
    /// Resets every node the view fully contains.
    ///
    /// Must not run concurrently with any other operation on the same tree.
    pub(crate) fn clear_contained(&self, view: &View) {
        if !self.intersects(view) {
            return;
        }
        if self.contained_by(view) {
            self.state.store(Arc::new(NodeState::Empty));
            return;
        }
        if let NodeState::Branch(children) = &**self.state.load() {
            for child in children {
                child.clear_contained(view);
            }
        }
    }

    /// Drops `victims` from every leaf touched by `circle`'s footprint.
    pub(crate) fn evict(&self, circle: &Circle, victims: &FxHashSet<Circle>) {
        if !self.contains_circle(circle) {
            return;
        }
        let state = self.state.load_full();
        match &*state {
            NodeState::Branch(children) => {
                for child in children {
                    child.evict(circle, victims);
                }
            }
            leaf => {
                let circles = leaf.circles();
                if circles.iter().any(|c| victims.contains(c)) {
                    let kept = circles
                        .iter()
                        .filter(|c| !victims.contains(*c))
                        .copied()
                        .collect();
                    self.state.store(Arc::new(NodeState::from_circles(kept)));
                }
            }
        }
    }

    pub(crate) fn leaf_bounds(&self, out: &mut Vec<View>) {
        match &**self.state.load() {
            NodeState::Branch(children) => {
                for child in children {
                    child.leaf_bounds(out);
                }
            }
            _ => out.push(self.bounds),
        }
    }

    /// Deepest leaf depth below and including this node.
    pub(crate) fn max_depth(&self) -> u32 {
        match &**self.state.load() {
            NodeState::Branch(children) => children
                .iter()
                .map(|child| child.max_depth())
                .max()
                .unwrap_or(self.depth),
            _ => self.depth,
        }
    }
}
