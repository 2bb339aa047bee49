/// Product catalog (the menu)

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::inventory::InventoryStore;
use crate::models::{same_name, Category, Product};
use crate::resolver::{can_satisfy, recipe_requirements};

/// Result of the bread/sausage size comparison done when a product is added
#[derive(Clone, Debug, PartialEq)]
pub enum PairingCheck {
    Matched,
    /// Sizes differ or one side has no size recorded
    Mismatch {
        bread: Option<String>,
        sausage: Option<String>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    #[allow(dead_code)]
    pub fn new() -> Self {
        ProductCatalog::default()
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| same_name(&p.name, name))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Add a product after checking its recipe against the inventory.
    /// Each slot must name an existing component of the right category.
    pub fn add(&mut self, product: Product, inventory: &InventoryStore) -> Result<PairingCheck, CatalogError> {
        if self.get(&product.name).is_some() {
            return Err(CatalogError::DuplicateProduct(product.name));
        }

        let slots = [(product.bread.as_str(), Category::Bread), (product.sausage.as_str(), Category::Sausage)]
            .into_iter()
            .chain(product.toppings.iter().map(|t| (t.as_str(), Category::Topping)))
            .chain(product.sauces.iter().map(|s| (s.as_str(), Category::Sauce)))
            .chain(product.side.as_deref().map(|s| (s, Category::Side)));

        for (name, expected) in slots {
            let component = inventory.lookup(name).ok_or_else(|| CatalogError::UnknownComponent {
                product: product.name.clone(),
                component: name.to_string(),
            })?;
            if component.category != expected {
                return Err(CatalogError::WrongCategory {
                    component: component.name.clone(),
                    expected,
                    actual: component.category,
                });
            }
        }

        let pairing = check_pairing(&product, inventory);
        if let PairingCheck::Mismatch { bread, sausage } = &pairing {
            warn!(
                "{}: bread length {:?} does not match sausage length {:?}",
                product.name, bread, sausage
            );
        }

        self.products.push(product);
        Ok(pairing)
    }

    pub fn remove(&mut self, name: &str) -> Result<Product, CatalogError> {
        let index = self
            .products
            .iter()
            .position(|p| same_name(&p.name, name))
            .ok_or_else(|| CatalogError::UnknownProduct(name.to_string()))?;
        Ok(self.products.remove(index))
    }

    pub fn products_using(&self, component: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.uses(component)).collect()
    }

    /// Drop every product whose recipe mentions `component`; returns the removed products
    pub fn remove_using(&mut self, component: &str) -> Vec<Product> {
        let (removed, kept): (Vec<Product>, Vec<Product>) =
            self.products.drain(..).partition(|p| p.uses(component));
        self.products = kept;
        removed
    }

    /// Each product with whether one unit of it can be made from current stock
    pub fn availability<'a>(&'a self, inventory: &InventoryStore) -> Vec<(&'a Product, bool)> {
        self.products
            .iter()
            .map(|p| (p, can_satisfy(inventory, &recipe_requirements(p))))
            .collect()
    }
}

/// Compare the length trait of a product's bread and sausage
pub fn check_pairing(product: &Product, inventory: &InventoryStore) -> PairingCheck {
    let bread = inventory.lookup(&product.bread).and_then(|c| c.length());
    let sausage = inventory.lookup(&product.sausage).and_then(|c| c.length());

    match (bread, sausage) {
        (Some(b), Some(s)) if b == s => PairingCheck::Matched,
        _ => PairingCheck::Mismatch {
            bread: bread.map(str::to_string),
            sausage: sausage.map(str::to_string),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Component;

    fn inventory() -> InventoryStore {
        InventoryStore::from_components(vec![
            Component::new("Pan Corto", Category::Bread, 1, 1.0).with_trait("length", "corto"),
            Component::new("Pan Largo", Category::Bread, 5, 1.5).with_trait("length", "largo"),
            Component::new("Salchicha Polaca", Category::Sausage, 5, 2.0).with_trait("length", "corto"),
            Component::new("Cebolla", Category::Topping, 5, 0.5),
            Component::new("Ketchup", Category::Sauce, 5, 0.2),
            Component::new("Refresco", Category::Side, 5, 1.5),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_validates_recipe() {
        let inventory = inventory();
        let mut catalog = ProductCatalog::new();

        let pairing = catalog
            .add(
                Product::new("Clasico", "Pan Corto", "Salchicha Polaca", 4.0)
                    .with_toppings(&["Cebolla"])
                    .with_sauces(&["Ketchup"])
                    .with_side("Refresco"),
                &inventory,
            )
            .unwrap();
        assert_eq!(pairing, PairingCheck::Matched);

        let err = catalog
            .add(Product::new("Raro", "Pan Corto", "Mortadela", 4.0), &inventory)
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownComponent { .. }));

        let err = catalog
            .add(Product::new("Al reves", "Salchicha Polaca", "Pan Corto", 4.0), &inventory)
            .unwrap_err();
        assert!(matches!(err, CatalogError::WrongCategory { expected: Category::Bread, .. }));

        let err = catalog
            .add(Product::new("CLASICO", "Pan Corto", "Salchicha Polaca", 4.0), &inventory)
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateProduct("CLASICO".to_string()));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_length_mismatch_is_a_warning_only() {
        let inventory = inventory();
        let mut catalog = ProductCatalog::new();
        let pairing = catalog
            .add(Product::new("Largo", "Pan Largo", "Salchicha Polaca", 5.0), &inventory)
            .unwrap();
        assert_eq!(
            pairing,
            PairingCheck::Mismatch {
                bread: Some("largo".to_string()),
                sausage: Some("corto".to_string()),
            }
        );
        assert!(catalog.get("largo").is_some());
    }

    #[test]
    fn test_remove_using_cascades() {
        let inventory = inventory();
        let mut catalog = ProductCatalog::new();
        catalog
            .add(Product::new("Clasico", "Pan Corto", "Salchicha Polaca", 4.0).with_sauces(&["Ketchup"]), &inventory)
            .unwrap();
        catalog
            .add(Product::new("Simple", "Pan Largo", "Salchicha Polaca", 3.0), &inventory)
            .unwrap();

        assert_eq!(catalog.products_using("ketchup").len(), 1);
        let removed = catalog.remove_using("Ketchup");
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].name, "Clasico");
        assert_eq!(catalog.all()[0].name, "Simple");
    }

    #[test]
    fn test_availability_reflects_current_stock() {
        let mut inventory = inventory();
        let mut catalog = ProductCatalog::new();
        catalog
            .add(Product::new("Clasico", "Pan Corto", "Salchicha Polaca", 4.0), &inventory)
            .unwrap();
        assert!(catalog.availability(&inventory)[0].1);

        inventory.restock("Pan Corto", -1).unwrap();
        assert!(!catalog.availability(&inventory)[0].1);
    }
}
