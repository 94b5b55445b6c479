//! Storage seam for per-occupation `FactorAdjustment` entries.

use crate::types::factors::FactorAdjustment;

/// Keyed store of cached factor adjustments.
///
/// `update` and `get_or_insert_with` must be atomic per key: a concurrent
/// writer to the same occupation never observes a half-applied update.
pub trait WeightStore: Send + Sync {
    fn get(&self, occupation_id: &str) -> Option<FactorAdjustment>;

    fn set(&self, adjustment: FactorAdjustment);

    /// Apply `f` to the entry in place. Returns `false` if no entry exists.
    fn update(&self, occupation_id: &str, f: &mut dyn FnMut(&mut FactorAdjustment)) -> bool;

    /// Return the cached entry, computing and inserting it when absent.
    fn get_or_insert_with(
        &self,
        occupation_id: &str,
        init: &mut dyn FnMut() -> FactorAdjustment,
    ) -> FactorAdjustment;

    fn remove(&self, occupation_id: &str) -> Option<FactorAdjustment>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
