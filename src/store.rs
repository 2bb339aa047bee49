/// JSON persistence for the shop, with a built-in seed stock for first runs

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::error::StoreError;
use crate::inventory::InventoryStore;
use crate::models::{Category, Component, LENGTH_TRAIT};
use crate::shop::Shop;

pub fn load(path: &Path) -> Result<Shop, StoreError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save(shop: &Shop, path: &Path) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(shop)?;
    fs::write(path, raw)?;
    info!("Saved shop data to {}", path.display());
    Ok(())
}

/// Load the data file, falling back to the seed stock when it is missing or unreadable
pub fn load_or_seed(path: &Path) -> Shop {
    if !path.exists() {
        info!("{} not found, starting from seed stock", path.display());
        return Shop::new(seed_inventory());
    }

    match load(path) {
        Ok(shop) => {
            info!(
                "Loaded {} components, {} menu items, {} recorded days from {}",
                shop.inventory.len(),
                shop.menu.len(),
                shop.history.len(),
                path.display()
            );
            shop
        }
        Err(err) => {
            warn!("Could not load {}: {}. Starting from seed stock", path.display(), err);
            Shop::new(seed_inventory())
        }
    }
}

/// Starting stock for a new stand
pub fn seed_inventory() -> InventoryStore {
    let components = vec![
        Component::new("Pan Corto", Category::Bread, 100, 1.0).with_trait(LENGTH_TRAIT, "corto"),
        Component::new("Pan Largo", Category::Bread, 50, 1.5).with_trait(LENGTH_TRAIT, "largo"),
        Component::new("Salchicha Polaca", Category::Sausage, 100, 2.0).with_trait(LENGTH_TRAIT, "corto"),
        Component::new("Salchicha Alemana", Category::Sausage, 50, 3.0).with_trait(LENGTH_TRAIT, "largo"),
        Component::new("Cebolla", Category::Topping, 200, 0.5),
        Component::new("Papas", Category::Topping, 200, 0.5),
        Component::new("Ketchup", Category::Sauce, 500, 0.2),
        Component::new("Refresco", Category::Side, 100, 1.5),
    ];

    let mut store = InventoryStore::new();
    for component in components {
        if let Err(err) = store.add(component) {
            warn!("Skipping seed component: {}", err);
        }
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hotdog-stand-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_seed_inventory_contents() {
        let seed = seed_inventory();
        assert_eq!(seed.len(), 8);
        assert_eq!(seed.available("ketchup"), 500);
        assert_eq!(seed.all(Some(Category::Side)).len(), 1);
        assert_eq!(seed.lookup("Pan Largo").and_then(|c| c.length()), Some("largo"));
    }

    #[test]
    fn test_save_then_load_restores_shop() {
        let path = temp_path("save");
        let mut shop = Shop::new(seed_inventory());
        shop.menu
            .add(Product::new("Clasico", "Pan Corto", "Salchicha Polaca", 3.0), &shop.inventory)
            .unwrap();

        save(&shop, &path).unwrap();
        let loaded = load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, shop);
    }

    #[test]
    fn test_missing_or_corrupt_file_falls_back_to_seed() {
        let missing = temp_path("missing");
        assert_eq!(load_or_seed(&missing).inventory, seed_inventory());

        let corrupt = temp_path("corrupt");
        fs::write(&corrupt, "{ not json").unwrap();
        let shop = load_or_seed(&corrupt);
        fs::remove_file(&corrupt).unwrap();
        assert_eq!(shop.inventory, seed_inventory());
        assert!(shop.menu.is_empty());
    }

    #[test]
    fn test_loads_legacy_data_file() {
        let path = temp_path("legacy");
        let raw = r#"{
            "inventario": [
                {"nombre": "Pan Corto", "categoria": "Pan", "cantidad": 10, "precio": 1.0,
                 "caracteristicas": {"longitud": "corto"}},
                {"nombre": "Salchicha Polaca", "categoria": "Salchicha", "cantidad": 8, "precio": 2.0,
                 "caracteristicas": {"longitud": "corto"}}
            ],
            "menu": [
                {"nombre": "Clasico", "pan": "Pan Corto", "salchicha": "Salchicha Polaca",
                 "toppings": [], "salsas": [], "acompanante": null, "precio_venta": 3}
            ],
            "historico_ventas": [
                {"total_clientes": 5, "clientes_compraron": 3, "cambiaron_opinion": 1,
                 "no_pudieron_comprar": 1, "hotdogs_vendidos": {"Clasico": 4},
                 "ingredientes_fallidos": {"Pan Corto": 1}, "acompanantes_vendidos": 0,
                 "total_dinero": 12}
            ]
        }"#;
        fs::write(&path, raw).unwrap();
        let shop = load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(shop.inventory.available("Salchicha Polaca"), 8);
        assert_eq!(shop.menu.get("Clasico").map(|p| p.price), Some(3.0));
        assert_eq!(shop.history.len(), 1);
        let day = &shop.history.days()[0];
        assert_eq!(day.purchasers, 3);
        assert_eq!(day.rejected, 1);
        assert_eq!(day.units_sold.get("Clasico"), 4);
        assert_eq!(day.stockout_causes.get("Pan Corto"), 1);
        assert_eq!(day.revenue, 12.0);
        assert_eq!(day.best_seller(), "Clasico");
    }
}
