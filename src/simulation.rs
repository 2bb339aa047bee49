/// Daily demand simulation
/// Serves customers one at a time, each either fully served from stock or turned away

use log::{debug, info};

use crate::catalog::ProductCatalog;
use crate::config::SimulationConfig;
use crate::demand::{aggregate_requirements, draw_customer_count, draw_order};
use crate::error::SimulationError;
use crate::inventory::InventoryStore;
use crate::models::CustomerOutcome;
use crate::random::RandomSource;
use crate::resolver::{debit, first_shortage};
use crate::stats::SessionStatistics;

/// Run one simulated business day against the given stock and menu.
/// Stock is debited in place for every served customer.
pub fn run_simulation<R: RandomSource>(
    inventory: &mut InventoryStore,
    catalog: &ProductCatalog,
    rng: &mut R,
    config: &SimulationConfig,
) -> Result<SessionStatistics, SimulationError> {
    if catalog.is_empty() {
        return Err(SimulationError::EmptyCatalog);
    }
    config.validate()?;

    let num_customers = draw_customer_count(rng, config);
    info!("Simulating day with {} customers", num_customers);

    let mut stats = SessionStatistics::new(catalog);
    for customer in 0..num_customers {
        let outcome = serve_customer(inventory, catalog, rng, config);
        match &outcome {
            CustomerOutcome::Abandoned => debug!("Customer {}: changed their mind", customer),
            CustomerOutcome::Fulfilled { lines } => debug!(
                "Customer {}: bought {:?}",
                customer,
                lines.iter().map(|l| l.product.name.as_str()).collect::<Vec<_>>()
            ),
            CustomerOutcome::Rejected { missing, .. } => {
                debug!("Customer {}: left, out of {}", customer, missing)
            }
        }
        stats.record(&outcome);
    }

    info!(
        "Day finished: {} served, {} rejected, revenue ${:.2}",
        stats.purchasers, stats.rejected, stats.revenue
    );
    Ok(stats)
}

/// Draw one customer's order and admit it all-or-nothing.
/// Stock is only touched when the whole combined order fits.
pub fn serve_customer<'c, R: RandomSource>(
    inventory: &mut InventoryStore,
    catalog: &'c ProductCatalog,
    rng: &mut R,
    config: &SimulationConfig,
) -> CustomerOutcome<'c> {
    let lines = draw_order(rng, catalog, inventory, config);
    if lines.is_empty() {
        return CustomerOutcome::Abandoned;
    }

    let requirements = aggregate_requirements(&lines);
    if let Some(missing) = first_shortage(inventory, &requirements) {
        return CustomerOutcome::Rejected {
            missing: missing.to_string(),
            lines,
        };
    }

    match debit(inventory, &requirements) {
        Ok(()) => CustomerOutcome::Fulfilled { lines },
        // Unreachable after the check above; still refuse rather than oversell
        Err(err) => CustomerOutcome::Rejected {
            missing: first_shortage(inventory, &requirements)
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string()),
            lines,
        },
    }
}
