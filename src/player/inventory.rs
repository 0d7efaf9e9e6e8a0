//! Resource and crafted-item ledger.
//!
//! Counts never go negative. Crafting checks every requirement before any
//! deduction, so a failed craft leaves the ledger untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::economy::ResourceType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    resources: BTreeMap<ResourceType, u32>,
    items: BTreeMap<String, u32>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            resources: ResourceType::ALL.iter().map(|r| (*r, 0)).collect(),
            items: BTreeMap::new(),
        }
    }
}

impl Inventory {
    pub fn resource(&self, res: ResourceType) -> u32 {
        self.resources.get(&res).copied().unwrap_or(0)
    }

    pub fn resources(&self) -> &BTreeMap<ResourceType, u32> {
        &self.resources
    }

    pub fn item(&self, id: &str) -> u32 {
        self.items.get(id).copied().unwrap_or(0)
    }

    pub fn items(&self) -> &BTreeMap<String, u32> {
        &self.items
    }

    pub fn add_resource(&mut self, res: ResourceType, amount: u32) {
        let entry = self.resources.entry(res).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Deducts only if the balance covers `amount`
    pub fn remove_resource(&mut self, res: ResourceType, amount: u32) -> bool {
        let current = self.resource(res);
        if current < amount {
            return false;
        }
        self.resources.insert(res, current - amount);
        true
    }

    pub fn add_item(&mut self, id: &str, amount: u32) {
        let entry = self.items.entry(id.to_string()).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    pub fn remove_item(&mut self, id: &str, amount: u32) -> bool {
        let current = self.item(id);
        if current < amount {
            return false;
        }
        self.items.insert(id.to_string(), current - amount);
        true
    }

    pub fn can_craft(&self, requirements: &[(ResourceType, u32)]) -> bool {
        total_requirements(requirements)
            .iter()
            .all(|(res, amount)| self.resource(*res) >= *amount)
    }

    /// Consume `requirements` and add one `item_id`, or change nothing
    pub fn craft_item(&mut self, item_id: &str, requirements: &[(ResourceType, u32)]) -> bool {
        if !self.can_craft(requirements) {
            tracing::debug!(item = item_id, "craft rejected: insufficient resources");
            return false;
        }
        for (res, amount) in total_requirements(requirements) {
            let current = self.resource(res);
            self.resources.insert(res, current - amount);
        }
        self.add_item(item_id, 1);
        tracing::debug!(item = item_id, "crafted");
        true
    }

    /// Overwrite resource balances (snapshot restore)
    pub fn set_resources(&mut self, resources: &BTreeMap<ResourceType, u32>) {
        *self = Self::default();
        for (res, amount) in resources {
            self.resources.insert(*res, *amount);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Merge repeated resource types so each is checked against its summed cost
fn total_requirements(requirements: &[(ResourceType, u32)]) -> BTreeMap<ResourceType, u32> {
    let mut totals = BTreeMap::new();
    for (res, amount) in requirements {
        let entry = totals.entry(*res).or_insert(0u32);
        *entry = entry.saturating_add(*amount);
    }
    totals
}
