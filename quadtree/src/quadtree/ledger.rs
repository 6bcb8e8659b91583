use super::node::SpatialNode;
use crate::error::{QuadtreeError, QuadtreeResult};
use parking_lot::lock_api::ArcReentrantMutexGuard;
use parking_lot::{RawMutex, RawThreadId};
use smallvec::SmallVec;
use std::sync::Arc;

type LeafGuard = ArcReentrantMutexGuard<RawMutex, RawThreadId, ()>;

const LEDGER_INLINE: usize = 8;

/// Leaf locks held by a single `put`, in acquisition order.
///
/// Dropping the ledger releases every held lock from the most recent to the oldest,
/// so every exit path (commit, conflict or error) unwinds the same way.
pub(crate) struct LockLedger {
    held: SmallVec<[(Arc<SpatialNode>, LeafGuard); LEDGER_INLINE]>,
}

impl LockLedger {
    pub(crate) fn new() -> Self {
        Self {
            held: SmallVec::new(),
        }
    }

    /// Blocks until the node's lock is held by this ledger.
    pub(crate) fn acquire(&mut self, node: &Arc<SpatialNode>) {
        let guard = node.lock.lock_arc();
        self.held.push((Arc::clone(node), guard));
    }

    /// Releases `node`, which must be the most recent acquisition.
    pub(crate) fn release(&mut self, node: &Arc<SpatialNode>) -> QuadtreeResult<()> {
        match self.held.last() {
            Some((top, _)) if Arc::ptr_eq(top, node) => {
                self.held.pop();
                Ok(())
            }
            _ => Err(QuadtreeError::LockOrder),
        }
    }

    pub(crate) fn nodes(&self) -> impl Iterator<Item = &Arc<SpatialNode>> + '_ {
        self.held.iter().map(|(node, _)| node)
    }

    pub(crate) fn len(&self) -> usize {
        self.held.len()
    }
}

impl Drop for LockLedger {
    fn drop(&mut self) {
        while let Some((node, guard)) = self.held.pop() {
            drop(guard);
            drop(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::shapes::View;

    fn node(left_x: f64) -> Arc<SpatialNode> {
        let bounds = View::new(left_x, left_x + 10.0, 0.0, 10.0).unwrap();
        Arc::new(SpatialNode::new(bounds, 0))
    }

    #[test]
    fn test_release_in_reverse_order() {
        let first = node(0.0);
        let second = node(10.0);
        let mut ledger = LockLedger::new();
        ledger.acquire(&first);
        ledger.acquire(&second);
        assert_eq!(ledger.len(), 2);
        assert!(first.lock.is_locked());
        assert!(ledger.release(&second).is_ok());
        assert!(!second.lock.is_locked());
        assert!(ledger.release(&first).is_ok());
        assert!(!first.lock.is_locked());
    }

    #[test]
    fn test_out_of_order_release_is_rejected() {
        let first = node(0.0);
        let second = node(10.0);
        let mut ledger = LockLedger::new();
        ledger.acquire(&first);
        ledger.acquire(&second);
        assert_eq!(ledger.release(&first), Err(QuadtreeError::LockOrder));
        assert_eq!(ledger.len(), 2);
        assert!(first.lock.is_locked());
    }

    #[test]
    fn test_drop_releases_everything() {
        let nodes: Vec<_> = (0..12).map(|i| node(i as f64 * 10.0)).collect();
        {
            let mut ledger = LockLedger::new();
            for n in &nodes {
                ledger.acquire(n);
            }
            assert_eq!(ledger.nodes().count(), 12);
        }
        assert!(nodes.iter().all(|n| !n.lock.is_locked()));
    }

    #[test]
    fn test_reacquire_on_same_thread() {
        let only = node(0.0);
        let mut ledger = LockLedger::new();
        ledger.acquire(&only);
        ledger.acquire(&only);
        assert!(ledger.release(&only).is_ok());
        assert!(only.lock.is_locked());
        assert!(ledger.release(&only).is_ok());
        assert!(!only.lock.is_locked());
    }
}
