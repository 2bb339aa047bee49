mod catalog;
mod config;
mod console;
mod demand;
mod error;
mod history;
mod inventory;
mod models;
mod random;
mod reporting;
mod resolver;
mod shop;
mod simulation;
mod stats;
mod store;
mod tally;

use std::error::Error;
use std::io;

use log::{info, warn};

use config::SimulationConfig;
use console::{run_batch, Console};
use models::Product;
use random::SeededSource;
use reporting::{display_banner, display_history, display_inventory, display_menu};
use shop::Shop;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    let config = SimulationConfig::from_env();
    config.validate()?;

    display_banner();

    let mut shop = store::load_or_seed(&config.data_file);
    if shop.menu.is_empty() {
        seed_menu(&mut shop);
    }

    display_inventory(&shop.inventory);
    display_menu(&shop.menu, &shop.inventory);

    let mut rng = match config.seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            SeededSource::from_seed(seed, config.extra_side_probability)?
        }
        None => SeededSource::from_entropy(config.extra_side_probability)?,
    };

    if config.interactive {
        Console::new(io::stdin().lock()).run(&mut shop, &mut rng, &config)?;
    } else {
        let days = run_batch(&mut shop, &mut rng, &config);
        info!("Simulated {} of {} day(s)", days, config.days);
    }

    println!();
    display_inventory(&shop.inventory);
    display_history(shop.history.summary().as_ref());

    store::save(&shop, &config.data_file)?;
    Ok(())
}

/// Starter menu for a freshly seeded stand
fn seed_menu(shop: &mut Shop) {
    let products = vec![
        Product::new("Clasico", "Pan Corto", "Salchicha Polaca", 4.0)
            .with_toppings(&["Cebolla"])
            .with_sauces(&["Ketchup"]),
        Product::new("Aleman", "Pan Largo", "Salchicha Alemana", 6.5)
            .with_toppings(&["Cebolla", "Papas"])
            .with_sauces(&["Ketchup"])
            .with_side("Refresco"),
    ];

    for product in products {
        let name = product.name.clone();
        if let Err(err) = shop.menu.add(product, &shop.inventory) {
            warn!("Could not add {} to the menu: {}", name, err);
        }
    }
}
