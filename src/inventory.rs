/// Inventory store: component stock keyed by case-insensitive name

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;
use crate::models::{Category, Component};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryStore {
    components: Vec<Component>,
}

impl InventoryStore {
    pub fn new() -> Self {
        InventoryStore::default()
    }

    /// Build a store from a list, rejecting duplicate names
    #[allow(dead_code)]
    pub fn from_components(components: Vec<Component>) -> Result<Self, InventoryError> {
        let mut store = InventoryStore::new();
        for component in components {
            store.add(component)?;
        }
        Ok(store)
    }

    pub fn lookup(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.is_named(name))
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.is_named(name))
    }

    /// Stock on hand; absent components count as zero
    pub fn available(&self, name: &str) -> u32 {
        self.lookup(name).map(|c| c.quantity).unwrap_or(0)
    }

    /// All components in insertion order, optionally restricted to one category
    pub fn all(&self, category: Option<Category>) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|c| category.map_or(true, |cat| c.category == cat))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn add(&mut self, component: Component) -> Result<(), InventoryError> {
        if self.lookup(&component.name).is_some() {
            return Err(InventoryError::DuplicateComponent(component.name));
        }
        self.components.push(component);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Component, InventoryError> {
        let index = self
            .components
            .iter()
            .position(|c| c.is_named(name))
            .ok_or_else(|| InventoryError::UnknownComponent(name.to_string()))?;
        Ok(self.components.remove(index))
    }

    /// Add (or with a negative delta, withdraw) stock.
    /// Refuses any change that would leave the quantity below zero.
    pub fn restock(&mut self, name: &str, delta: i64) -> Result<u32, InventoryError> {
        let component = self
            .lookup_mut(name)
            .ok_or_else(|| InventoryError::UnknownComponent(name.to_string()))?;

        let current = component.quantity;
        let quantity = match i64::from(current).checked_add(delta) {
            Some(updated) if updated < 0 => {
                return Err(InventoryError::NegativeStock {
                    name: component.name.clone(),
                    current,
                    delta,
                })
            }
            Some(updated) => u32::try_from(updated).ok(),
            None => None,
        }
        .ok_or_else(|| InventoryError::StockOverflow {
            name: component.name.clone(),
            current,
            delta,
        })?;

        component.quantity = quantity;
        info!("Stock of {} is now {}", component.name, quantity);
        Ok(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InventoryStore {
        InventoryStore::from_components(vec![
            Component::new("Pan Corto", Category::Bread, 10, 1.0),
            Component::new("Refresco", Category::Side, 4, 1.5),
            Component::new("Papas Fritas", Category::Side, 2, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let store = store();
        assert_eq!(store.lookup("pan corto").map(|c| c.quantity), Some(10));
        assert_eq!(store.available("REFRESCO"), 4);
        assert_eq!(store.available("Mostaza"), 0);
    }

    #[test]
    fn test_all_filters_by_category() {
        let store = store();
        let sides: Vec<&str> = store
            .all(Some(Category::Side))
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(sides, vec!["Refresco", "Papas Fritas"]);
        assert_eq!(store.all(None).len(), 3);
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut store = store();
        let err = store
            .add(Component::new("REFRESCO", Category::Side, 1, 1.0))
            .unwrap_err();
        assert_eq!(err, InventoryError::DuplicateComponent("REFRESCO".to_string()));
    }

    #[test]
    fn test_restock_refuses_negative_stock() {
        let mut store = store();
        assert_eq!(store.restock("Refresco", -4), Ok(0));
        assert!(matches!(
            store.restock("Refresco", -1),
            Err(InventoryError::NegativeStock { current: 0, .. })
        ));
        assert_eq!(store.available("Refresco"), 0);
        assert_eq!(store.restock("Refresco", 7), Ok(7));
    }

    #[test]
    fn test_restock_refuses_overflow_past_u32() {
        let mut store = store();
        assert!(matches!(
            store.restock("Refresco", 5_000_000_000),
            Err(InventoryError::StockOverflow { current: 4, delta: 5_000_000_000, .. })
        ));
        assert!(matches!(
            store.restock("Refresco", i64::MAX),
            Err(InventoryError::StockOverflow { current: 4, .. })
        ));
        assert!(matches!(
            store.restock("Refresco", i64::MIN),
            Err(InventoryError::NegativeStock { current: 4, .. })
        ));
        assert_eq!(store.available("Refresco"), 4);

        let headroom = i64::from(u32::MAX) - 4;
        assert_eq!(store.restock("Refresco", headroom), Ok(u32::MAX));
    }

    #[test]
    fn test_remove_unknown_component_fails() {
        let mut store = store();
        assert!(store.remove("Mostaza").is_err());
        assert_eq!(store.remove("papas fritas").map(|c| c.name), Ok("Papas Fritas".to_string()));
        assert_eq!(store.len(), 2);
    }
}
