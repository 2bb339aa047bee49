/// Reporting and output formatting module
/// Handles all console output for the stand

use crate::catalog::ProductCatalog;
use crate::history::{HistorySummary, MIN_DAYS_FOR_SUMMARY};
use crate::inventory::InventoryStore;
use crate::models::Category;
use crate::stats::SessionStatistics;

pub fn display_banner() {
    println!("╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                       HOT DOG STAND DEMAND SIMULATION                        ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");
}

/// Display stock, grouped by category
pub fn display_inventory(inventory: &InventoryStore) {
    println!("Inventory:");
    for category in Category::ALL {
        let components = inventory.all(Some(category));
        if components.is_empty() {
            continue;
        }
        println!("  [{}]", category);
        for component in components {
            match component.length() {
                Some(length) => println!(
                    "    {} ({}) - Stock: {} @ ${:.2}",
                    component.name, length, component.quantity, component.unit_cost
                ),
                None => println!(
                    "    {} - Stock: {} @ ${:.2}",
                    component.name, component.quantity, component.unit_cost
                ),
            }
        }
    }
    println!();
}

/// Display the menu with whether each item can be made right now
pub fn display_menu(catalog: &ProductCatalog, inventory: &InventoryStore) {
    println!("Menu:");
    if catalog.is_empty() {
        println!("  (empty)");
    }
    for (i, (product, available)) in catalog.availability(inventory).into_iter().enumerate() {
        let status = if available { "Available" } else { "Sold out" };
        println!("  {}. {} - ${:.2} [{}]", i + 1, product.name, product.price, status);
        println!("     {}", product.recipe().collect::<Vec<_>>().join(", "));
    }
    println!();
}

/// Display the end-of-day report
pub fn display_day_report(day: usize, stats: &SessionStatistics) {
    println!("\n=== Day {} Report ===", day);
    println!("  Total customers:        {}", stats.total_customers);
    println!("  Served:                 {}", stats.purchasers);
    println!("  Changed their mind:     {}", stats.opinion_changers);
    println!("  Turned away (stockout): {}", stats.rejected);
    println!("  Avg items per customer: {:.2}", stats.average_items_per_purchaser());
    println!("  Best seller:            {}", stats.best_seller());
    println!("  Side items sold:        {}", stats.side_items_sold);
    println!("  Revenue:                ${:.2}", stats.revenue);

    if stats.stockout_causes.is_empty() {
        println!("  Stockouts:              none");
    } else {
        println!("  Stockouts:");
        for (component, count) in stats.stockout_causes.iter() {
            println!("    {}: {}", component, count);
        }
    }
}

/// Display the revenue and rejection trend across recorded days
pub fn display_history(summary: Option<&HistorySummary>) {
    let Some(summary) = summary else {
        println!("\nSimulate at least {} days to see the sales trend.", MIN_DAYS_FOR_SUMMARY);
        return;
    };

    println!("\n╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                              SALES HISTORY                                   ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");

    for (i, (revenue, rejected)) in summary
        .revenue_per_day
        .iter()
        .zip(&summary.rejections_per_day)
        .enumerate()
    {
        println!("  Day {:>3}: revenue ${:>9.2} | turned away {:>3}", i + 1, revenue, rejected);
    }
    println!(
        "\n  Revenue: ${:.2} ± ${:.2} over {} days | Range: [${:.2}, ${:.2}]",
        summary.mean_revenue, summary.std_dev_revenue, summary.num_days, summary.min_revenue, summary.max_revenue
    );
    println!("  Customers turned away in total: {}", summary.total_rejected);
}
