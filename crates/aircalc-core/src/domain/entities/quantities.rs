use std::collections::BTreeMap;

use crate::domain::value_objects::{Quantity, ServiceId};

/// Selected quantities keyed by service id.
///
/// Invariant: only non-zero quantities are stored, so a missing entry and a
/// zero quantity are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantityMap {
    entries: BTreeMap<ServiceId, Quantity>,
}

impl QuantityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ServiceId) -> Quantity {
        self.entries.get(&id).copied().unwrap_or(Quantity::ZERO)
    }

    /// Store a quantity and return the previous one. Zero removes the entry.
    pub fn set(&mut self, id: ServiceId, quantity: Quantity) -> Quantity {
        let previous = if quantity.is_zero() {
            self.entries.remove(&id)
        } else {
            self.entries.insert(id, quantity)
        };
        previous.unwrap_or(Quantity::ZERO)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Non-zero entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ServiceId, Quantity)> + '_ {
        self.entries.iter().map(|(id, qty)| (*id, *qty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ServiceId, Quantity)> for QuantityMap {
    fn from_iter<I: IntoIterator<Item = (ServiceId, Quantity)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (id, qty) in iter {
            map.set(id, qty);
        }
        map
    }
}
