/// The stand's long-lived state: stock, menu and sales history

use log::warn;
use serde::{Deserialize, Serialize};

use crate::catalog::ProductCatalog;
use crate::config::SimulationConfig;
use crate::error::{InventoryError, SimulationError};
use crate::history::SalesHistory;
use crate::inventory::InventoryStore;
use crate::models::{Component, Product};
use crate::random::RandomSource;
use crate::simulation::run_simulation;
use crate::stats::SessionStatistics;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    #[serde(default, alias = "inventario")]
    pub inventory: InventoryStore,
    #[serde(default)]
    pub menu: ProductCatalog,
    #[serde(default, alias = "historico_ventas")]
    pub history: SalesHistory,
}

impl Shop {
    pub fn new(inventory: InventoryStore) -> Self {
        Shop {
            inventory,
            ..Shop::default()
        }
    }

    /// Simulate one day and append its statistics to the history
    pub fn simulate_day<R: RandomSource>(
        &mut self,
        rng: &mut R,
        config: &SimulationConfig,
    ) -> Result<&SessionStatistics, SimulationError> {
        let stats = run_simulation(&mut self.inventory, &self.menu, rng, config)?;
        self.history.push(stats);
        Ok(&self.history.days()[self.history.len() - 1])
    }

    /// Delete a component and every menu item whose recipe uses it
    pub fn remove_component(&mut self, name: &str) -> Result<(Component, Vec<Product>), InventoryError> {
        let component = self.inventory.remove(name)?;
        let dropped = self.menu.remove_using(&component.name);
        if !dropped.is_empty() {
            warn!(
                "Removing {} also dropped {} menu item(s): {:?}",
                component.name,
                dropped.len(),
                dropped.iter().map(|p| p.name.as_str()).collect::<Vec<_>>()
            );
        }
        Ok((component, dropped))
    }
}
