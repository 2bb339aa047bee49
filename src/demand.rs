/// Customer demand generation
/// Draws how many customers arrive and what each of them orders

use crate::catalog::ProductCatalog;
use crate::config::SimulationConfig;
use crate::inventory::InventoryStore;
use crate::models::{Category, OrderLine};
use crate::random::RandomSource;
use crate::resolver::Requirements;

/// Customers arriving today, uniform in `[0, max_customers]`
pub fn draw_customer_count<R: RandomSource>(rng: &mut R, config: &SimulationConfig) -> usize {
    rng.int_inclusive(0, config.max_customers)
}

/// One customer's order: 0 to `max_picks` products, each with a possible extra side.
/// An empty order means the customer changed their mind.
pub fn draw_order<'c, R: RandomSource>(
    rng: &mut R,
    catalog: &'c ProductCatalog,
    inventory: &InventoryStore,
    config: &SimulationConfig,
) -> Vec<OrderLine<'c>> {
    let picks = rng.int_inclusive(0, config.max_picks);
    let mut lines = Vec::with_capacity(picks);

    for _ in 0..picks {
        let Some(product) = rng.pick(catalog.all()) else {
            break;
        };

        let extra_side = if rng.coin() {
            let sides = inventory.all(Some(Category::Side));
            rng.pick(&sides).map(|side| side.name.clone())
        } else {
            None
        };

        lines.push(OrderLine { product, extra_side });
    }

    lines
}

/// Combined component demand for a whole order.
/// Repeated products and components used in several roles add up.
pub fn aggregate_requirements(lines: &[OrderLine<'_>]) -> Requirements {
    let mut requirements = Requirements::new();
    for line in lines {
        for component in line.product.recipe() {
            requirements.bump(component);
        }
        if let Some(side) = &line.extra_side {
            requirements.bump(side);
        }
    }
    requirements
}
