use super::config::Config;
use super::ledger::LockLedger;
use super::node::{NodeState, SpatialNode};
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Circle;
use std::sync::Arc;
use tracing::{debug, trace};

impl SpatialNode {
    /// Inserts `circle` into every leaf its footprint touches, or into none of them.
    ///
    /// Returns `Ok(false)` if the circle overlaps a circle stored in any touched leaf.
    /// Leaf locks are collected and checked first, then every collected leaf is
    /// committed while all of them are still held.
    pub(crate) fn put(self: &Arc<Self>, circle: Circle, config: &Config) -> QuadtreeResult<bool> {
        let mut ledger = LockLedger::new();
        if let Some(existing) = self.collect_and_lock(&circle, &mut ledger)? {
            debug!(%circle, %existing, "put rejected by overlapping circle");
            return Ok(false);
        }
        commit_all(&ledger, circle, config)?;
        trace!(%circle, leaves = ledger.len(), "put committed");
        Ok(true)
    }

    /// Locks every leaf touched by `circle`, stopping at the first stored circle it overlaps.
    fn collect_and_lock(
        self: &Arc<Self>,
        circle: &Circle,
        ledger: &mut LockLedger,
    ) -> QuadtreeResult<Option<Circle>> {
        if !self.contains_circle(circle) {
            return Ok(None);
        }
        let observed = self.state.load_full();
        self.collect_observed(observed, circle, ledger)
    }

    /// Continues a collect from a snapshot taken before any lock was held. A leaf
    /// snapshot is only trusted again after the lock is acquired.
    fn collect_observed(
        self: &Arc<Self>,
        mut state: Arc<NodeState>,
        circle: &Circle,
        ledger: &mut LockLedger,
    ) -> QuadtreeResult<Option<Circle>> {
        if !state.is_branch() {
            ledger.acquire(self);
            state = self.state.load_full();
            if !state.is_branch() {
                let conflict = state.circles().iter().find(|c| c.overlaps(circle));
                return Ok(conflict.copied());
            }
            trace!(bounds = %self.bounds, "leaf subdivided before its lock was acquired");
            ledger.release(self)?;
        }
        if let NodeState::Branch(children) = &*state {
            for child in children {
                if let Some(conflict) = child.collect_and_lock(circle, ledger)? {
                    return Ok(Some(conflict));
                }
            }
        }
        Ok(None)
    }

    /// Advances the leaf's phase by one circle. The caller holds the leaf lock.
    fn commit(&self, circle: Circle, config: &Config) -> QuadtreeResult<()> {
        debug_assert!(self.lock.is_locked());
        let current = self.state.load();
        let next = match &**current {
            NodeState::Empty => NodeState::One(circle),
            NodeState::One(first) => NodeState::Two([*first, circle]),
            NodeState::Two([first, second]) if self.depth >= config.max_depth => {
                debug!(
                    bounds = %self.bounds,
                    depth = self.depth,
                    "leaf at depth limit, storing overflow"
                );
                NodeState::Overflow(vec![*first, *second, circle])
            }
            NodeState::Two([first, second]) => {
                self.subdivide([*first, *second, circle], config)?
            }
            NodeState::Overflow(circles) => {
                let mut grown = Vec::with_capacity(circles.len() + 1);
                grown.extend_from_slice(circles);
                grown.push(circle);
                NodeState::Overflow(grown)
            }
            NodeState::Branch(_) => return Err(QuadtreeError::UnexpectedPhase),
        };
        self.state.store(Arc::new(next));
        Ok(())
    }

    /// Builds the four quadrant children and inserts each circle into each of them.
    /// Every child's own footprint test decides which circles it keeps.
    fn subdivide(&self, circles: [Circle; 3], config: &Config) -> QuadtreeResult<NodeState> {
        let depth = self.depth + 1;
        let children = self
            .bounds
            .quadrants()
            .map(|bounds| Arc::new(SpatialNode::new(bounds, depth)));
        for child in &children {
            for circle in circles {
                // These circles were already checked against each other, so the
                // unshared child can only accept them.
                let accepted = child.put(circle, config)?;
                debug_assert!(accepted, "subdivision dropped {circle}");
            }
        }
        trace!(bounds = %self.bounds, depth = self.depth, "leaf subdivided");
        Ok(NodeState::Branch(children))
    }
}

/// Commits `circle` into every held leaf. Phases are checked for all leaves first,
/// so a leaf that cannot accept the circle fails the put before anything changes.
fn commit_all(ledger: &LockLedger, circle: Circle, config: &Config) -> QuadtreeResult<()> {
    if ledger.nodes().any(|leaf| leaf.state.load().is_branch()) {
        return Err(QuadtreeError::UnexpectedPhase);
    }
    for leaf in ledger.nodes() {
        leaf.commit(circle, config)?;
    }
    Ok(())
}
