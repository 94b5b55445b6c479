//! In-memory `WeightStore` on a sharded concurrent map.
//! Writers to the same occupation serialize on that key's shard lock.

use apo_core::traits::WeightStore;
use apo_core::FactorAdjustment;
use dashmap::DashMap;

#[derive(Debug, Default)]
pub struct InMemoryWeightStore {
    inner: DashMap<String, FactorAdjustment>,
}

impl InMemoryWeightStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WeightStore for InMemoryWeightStore {
    fn get(&self, occupation_id: &str) -> Option<FactorAdjustment> {
        self.inner.get(occupation_id).map(|entry| entry.value().clone())
    }

    fn set(&self, adjustment: FactorAdjustment) {
        self.inner.insert(adjustment.occupation_id.clone(), adjustment);
    }

    fn update(&self, occupation_id: &str, f: &mut dyn FnMut(&mut FactorAdjustment)) -> bool {
        match self.inner.get_mut(occupation_id) {
            Some(mut entry) => {
                f(entry.value_mut());
                true
            }
            None => false,
        }
    }

    fn get_or_insert_with(
        &self,
        occupation_id: &str,
        init: &mut dyn FnMut() -> FactorAdjustment,
    ) -> FactorAdjustment {
        if let Some(entry) = self.inner.get(occupation_id) {
            return entry.value().clone();
        }
        self.inner
            .entry(occupation_id.to_string())
            .or_insert_with(|| init())
            .value()
            .clone()
    }

    fn remove(&self, occupation_id: &str) -> Option<FactorAdjustment> {
        self.inner.remove(occupation_id).map(|(_, v)| v)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
