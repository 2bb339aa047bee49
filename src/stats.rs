/// Per-session statistics
/// Counters are running totals updated once per customer; derived metrics are computed on read.

use serde::{Deserialize, Serialize};

use crate::catalog::ProductCatalog;
use crate::models::CustomerOutcome;
use crate::tally::Tally;

/// Reported as best seller when nothing sold
pub const NO_BEST_SELLER: &str = "none";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStatistics {
    #[serde(alias = "total_clientes")]
    pub total_customers: u32,
    #[serde(alias = "clientes_compraron")]
    pub purchasers: u32,
    /// Customers who drew zero picks
    #[serde(alias = "cambiaron_opinion")]
    pub opinion_changers: u32,
    /// Customers turned away by a stockout
    #[serde(alias = "no_pudieron_comprar")]
    pub rejected: u32,
    /// Units sold per product, seeded in catalog order
    #[serde(alias = "hotdogs_vendidos")]
    pub units_sold: Tally,
    /// Component blamed for each rejection
    #[serde(alias = "ingredientes_fallidos")]
    pub stockout_causes: Tally,
    #[serde(alias = "acompanantes_vendidos")]
    pub side_items_sold: u32,
    #[serde(alias = "total_dinero")]
    pub revenue: f64,
}

impl SessionStatistics {
    /// Fresh statistics with every catalog product listed at zero, so ties
    /// on the best seller resolve by menu order
    pub fn new(catalog: &ProductCatalog) -> Self {
        let mut units_sold = Tally::new();
        for product in catalog.all() {
            units_sold.add(&product.name, 0);
        }
        SessionStatistics {
            units_sold,
            ..SessionStatistics::default()
        }
    }

    pub fn record(&mut self, outcome: &CustomerOutcome<'_>) {
        self.total_customers += 1;
        match outcome {
            CustomerOutcome::Abandoned => self.opinion_changers += 1,
            CustomerOutcome::Rejected { missing, .. } => {
                self.rejected += 1;
                self.stockout_causes.bump(missing);
            }
            CustomerOutcome::Fulfilled { lines } => {
                self.purchasers += 1;
                for line in lines {
                    self.units_sold.bump(&line.product.name);
                    self.revenue += line.product.price;
                    self.side_items_sold += line.side_count();
                }
            }
        }
    }

    pub fn items_sold(&self) -> u32 {
        self.units_sold.total()
    }

    pub fn average_items_per_purchaser(&self) -> f64 {
        if self.purchasers == 0 {
            return 0.0;
        }
        f64::from(self.items_sold()) / f64::from(self.purchasers)
    }

    pub fn best_seller(&self) -> &str {
        self.units_sold
            .leader()
            .map(|(name, _)| name)
            .unwrap_or(NO_BEST_SELLER)
    }
}
