/// Interactive console for running the stand by hand
/// Six options: ingredients, stock, menu, simulate a day, sales history, save and exit

use std::io::{self, BufRead, Write};

use log::warn;

use crate::catalog::{check_pairing, PairingCheck};
use crate::config::SimulationConfig;
use crate::models::{Category, Component, Product, LENGTH_TRAIT};
use crate::random::RandomSource;
use crate::reporting::{display_day_report, display_history, display_inventory, display_menu};
use crate::shop::Shop;

pub struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    pub fn new(input: R) -> Self {
        Console { input }
    }

    /// Run the main menu until the user picks "save and exit" or input ends.
    /// Saving is left to the caller.
    pub fn run<S: RandomSource>(
        &mut self,
        shop: &mut Shop,
        rng: &mut S,
        config: &SimulationConfig,
    ) -> io::Result<()> {
        loop {
            println!("\n=== HOT DOG STAND ===");
            println!("1. Ingredients");
            println!("2. Stock");
            println!("3. Menu");
            println!("4. Simulate a day");
            println!("5. Sales history");
            println!("6. Save and exit");

            let Some(choice) = self.prompt("Option: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => match self.prompt("1. List  2. Add  3. Delete: ")?.as_deref() {
                    Some("1") => display_inventory(&shop.inventory),
                    Some("2") => self.add_ingredient(shop)?,
                    Some("3") => self.delete_ingredient(shop)?,
                    _ => println!("Invalid option."),
                },
                "2" => match self.prompt("1. View  2. Adjust stock: ")?.as_deref() {
                    Some("1") => display_inventory(&shop.inventory),
                    Some("2") => self.adjust_stock(shop)?,
                    _ => println!("Invalid option."),
                },
                "3" => match self.prompt("1. View  2. Add  3. Delete: ")?.as_deref() {
                    Some("1") => display_menu(&shop.menu, &shop.inventory),
                    Some("2") => self.add_product(shop)?,
                    Some("3") => self.delete_product(shop)?,
                    _ => println!("Invalid option."),
                },
                "4" => {
                    simulate(shop, rng, config);
                }
                "5" => display_history(shop.history.summary().as_ref()),
                "6" => return Ok(()),
                _ => println!("Invalid option."),
            }
        }
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        print!("{}", message);
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        let answer = self.prompt(&format!("{} (y/n): ", message))?;
        Ok(matches!(answer.as_deref().map(str::to_lowercase).as_deref(), Some("y" | "s")))
    }

    fn add_ingredient(&mut self, shop: &mut Shop) -> io::Result<()> {
        let Some(name) = self.prompt("Name: ")? else { return Ok(()) };
        let Some(category) = self.prompt("Category (bread/sausage/topping/sauce/side): ")? else {
            return Ok(());
        };
        let category = match category.parse::<Category>() {
            Ok(category) => category,
            Err(err) => {
                println!("Error: {}", err);
                return Ok(());
            }
        };
        let quantity = self.prompt("Initial quantity: ")?.and_then(|q| q.parse::<u32>().ok());
        let unit_cost = self.prompt("Unit cost: ")?.and_then(|c| c.parse::<f64>().ok());
        let (Some(quantity), Some(unit_cost)) = (quantity, unit_cost) else {
            println!("Error: quantity and cost must be valid numbers.");
            return Ok(());
        };

        let mut component = Component::new(&name, category, quantity, unit_cost);
        if matches!(category, Category::Bread | Category::Sausage) {
            if let Some(length) = self.prompt("Length (corto/largo): ")? {
                component = component.with_trait(LENGTH_TRAIT, &length);
            }
        }

        match shop.inventory.add(component) {
            Ok(()) => println!("Ingredient added."),
            Err(err) => println!("Error: {}", err),
        }
        Ok(())
    }

    fn delete_ingredient(&mut self, shop: &mut Shop) -> io::Result<()> {
        display_inventory(&shop.inventory);
        let Some(name) = self.prompt("Ingredient to delete: ")? else { return Ok(()) };
        if shop.inventory.lookup(&name).is_none() {
            println!("Ingredient not found.");
            return Ok(());
        }

        let users = shop.menu.products_using(&name).len();
        if users > 0 {
            let message = format!(
                "'{}' is used by {} menu item(s), which will be deleted too. Continue?",
                name, users
            );
            if !self.confirm(&message)? {
                return Ok(());
            }
        }

        match shop.remove_component(&name) {
            Ok((component, _)) => println!("{} deleted.", component.name),
            Err(err) => println!("Error: {}", err),
        }
        Ok(())
    }

    fn adjust_stock(&mut self, shop: &mut Shop) -> io::Result<()> {
        display_inventory(&shop.inventory);
        let Some(name) = self.prompt("Ingredient to update: ")? else { return Ok(()) };
        let Some(delta) = self
            .prompt("Quantity to add (negative to withdraw): ")?
            .and_then(|d| d.parse::<i64>().ok())
        else {
            println!("Error: enter a whole number.");
            return Ok(());
        };

        match shop.inventory.restock(&name, delta) {
            Ok(quantity) => println!("New stock of {}: {}", name, quantity),
            Err(err) => println!("Error: {}", err),
        }
        Ok(())
    }

    fn add_product(&mut self, shop: &mut Shop) -> io::Result<()> {
        let Some(name) = self.prompt("Hot dog name: ")? else { return Ok(()) };
        let Some(bread) = self.prompt("Bread: ")? else { return Ok(()) };
        let Some(sausage) = self.prompt("Sausage: ")? else { return Ok(()) };
        let toppings = split_list(self.prompt("Toppings (comma separated): ")?);
        let sauces = split_list(self.prompt("Sauces (comma separated): ")?);
        let side = self.prompt("Side (blank for none): ")?.filter(|s| !s.is_empty());
        let Some(price) = self.prompt("Price: ")?.and_then(|p| p.parse::<f64>().ok()) else {
            println!("Error: invalid price.");
            return Ok(());
        };

        let product = Product {
            name,
            bread,
            sausage,
            toppings,
            sauces,
            side,
            price,
        };

        if let PairingCheck::Mismatch { .. } = check_pairing(&product, &shop.inventory) {
            if !self.confirm("Bread and sausage lengths do not match. Continue?")? {
                return Ok(());
            }
        }

        match shop.menu.add(product, &shop.inventory) {
            Ok(_) => println!("Hot dog added to the menu."),
            Err(err) => println!("Error: {}", err),
        }
        Ok(())
    }

    fn delete_product(&mut self, shop: &mut Shop) -> io::Result<()> {
        display_menu(&shop.menu, &shop.inventory);
        let index = self
            .prompt("Number of the hot dog to delete: ")?
            .and_then(|i| i.parse::<usize>().ok())
            .and_then(|i| i.checked_sub(1));

        let availability = shop.menu.availability(&shop.inventory);
        let Some((product, available)) = index.and_then(|i| availability.get(i)) else {
            println!("Invalid number.");
            return Ok(());
        };
        let name = product.name.clone();
        let available = *available;

        if available && !self.confirm("There is still stock to sell it. Delete anyway?")? {
            return Ok(());
        }
        match shop.menu.remove(&name) {
            Ok(product) => println!("{} deleted.", product.name),
            Err(err) => println!("Error: {}", err),
        }
        Ok(())
    }
}

/// Simulate one day unless the menu is empty; true when a day was recorded
pub fn simulate<S: RandomSource>(shop: &mut Shop, rng: &mut S, config: &SimulationConfig) -> bool {
    if shop.menu.is_empty() {
        warn!("The menu is empty; add a hot dog before simulating");
        return false;
    }
    let day = shop.history.len() + 1;
    match shop.simulate_day(rng, config) {
        Ok(stats) => {
            display_day_report(day, stats);
            true
        }
        Err(err) => {
            warn!("Simulation failed: {}", err);
            false
        }
    }
}

/// Non-interactive run of `config.days` days. Returns how many were simulated.
pub fn run_batch<S: RandomSource>(shop: &mut Shop, rng: &mut S, config: &SimulationConfig) -> usize {
    if shop.menu.is_empty() {
        warn!("Menu is empty; skipping the simulation");
        return 0;
    }
    (0..config.days).take_while(|_| simulate(shop, rng, config)).count()
}

fn split_list(raw: Option<String>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedSource, SeededSource};
    use crate::store::seed_inventory;
    use std::io::Cursor;

    fn run(shop: &mut Shop, input: &str) {
        let mut rng = ScriptedSource::new(&[], &[]);
        Console::new(Cursor::new(input.as_bytes()))
            .run(shop, &mut rng, &SimulationConfig::default())
            .unwrap();
    }

    fn shop_with_menu() -> Shop {
        let mut shop = Shop::new(seed_inventory());
        shop.menu
            .add(
                Product::new("Clasico", "Pan Corto", "Salchicha Polaca", 4.0).with_sauces(&["Ketchup"]),
                &shop.inventory,
            )
            .unwrap();
        shop
    }

    #[test]
    fn test_add_ingredient_and_adjust_stock() {
        let mut shop = Shop::new(seed_inventory());
        run(&mut shop, "1\n2\nMostaza\nsalsa\n10\n0.3\n2\n2\nmostaza\n-4\n6\n");

        let mostaza = shop.inventory.lookup("Mostaza").unwrap();
        assert_eq!(mostaza.category, Category::Sauce);
        assert_eq!(mostaza.quantity, 6);
    }

    #[test]
    fn test_stock_adjustment_cannot_go_negative() {
        let mut shop = Shop::new(seed_inventory());
        run(&mut shop, "2\n2\nRefresco\n-101\n6\n");
        assert_eq!(shop.inventory.available("Refresco"), 100);
    }

    #[test]
    fn test_delete_ingredient_cascades_after_confirmation() {
        let mut shop = shop_with_menu();
        run(&mut shop, "1\n3\nKetchup\nn\n6\n");
        assert!(shop.inventory.lookup("Ketchup").is_some());
        assert_eq!(shop.menu.len(), 1);

        run(&mut shop, "1\n3\nKetchup\ns\n6\n");
        assert!(shop.inventory.lookup("Ketchup").is_none());
        assert!(shop.menu.is_empty());
    }

    #[test]
    fn test_add_product_asks_on_length_mismatch() {
        let mut shop = Shop::new(seed_inventory());
        run(&mut shop, "3\n2\nLargo\nPan Largo\nSalchicha Polaca\n\nKetchup\n\n5\nn\n6\n");
        assert!(shop.menu.is_empty());

        run(&mut shop, "3\n2\nLargo\nPan Largo\nSalchicha Polaca\nCebolla, Papas\nKetchup\nRefresco\n5\ny\n6\n");
        let product = shop.menu.get("Largo").unwrap();
        assert_eq!(product.toppings, vec!["Cebolla", "Papas"]);
        assert_eq!(product.side.as_deref(), Some("Refresco"));
        assert_eq!(product.price, 5.0);
    }

    #[test]
    fn test_delete_available_product_needs_confirmation() {
        let mut shop = shop_with_menu();
        run(&mut shop, "3\n3\n1\nn\n6\n");
        assert_eq!(shop.menu.len(), 1);

        run(&mut shop, "3\n3\n1\ny\n6\n");
        assert!(shop.menu.is_empty());
    }

    #[test]
    fn test_simulate_with_empty_menu_is_skipped() {
        let mut shop = Shop::new(seed_inventory());
        run(&mut shop, "4\n6\n");
        assert!(shop.history.is_empty());
    }

    #[test]
    fn test_batch_with_empty_menu_runs_no_days() {
        let mut shop = Shop::new(seed_inventory());
        let mut rng = ScriptedSource::new(&[], &[]);
        let config = SimulationConfig {
            days: 3,
            ..SimulationConfig::default()
        };

        assert_eq!(run_batch(&mut shop, &mut rng, &config), 0);
        assert!(shop.history.is_empty());
        assert_eq!(shop.inventory, seed_inventory());
    }

    #[test]
    fn test_batch_runs_every_configured_day() {
        let mut shop = shop_with_menu();
        let config = SimulationConfig {
            days: 3,
            ..SimulationConfig::default()
        };
        let mut rng = SeededSource::from_seed(11, config.extra_side_probability).unwrap();

        assert_eq!(run_batch(&mut shop, &mut rng, &config), 3);
        assert_eq!(shop.history.len(), 3);
    }

    #[test]
    fn test_simulate_records_a_day() {
        let mut shop = shop_with_menu();
        let mut rng = ScriptedSource::new(&[1, 1, 0], &[false]);
        Console::new(Cursor::new("4\n".as_bytes()))
            .run(&mut shop, &mut rng, &SimulationConfig::default())
            .unwrap();

        assert_eq!(shop.history.len(), 1);
        assert_eq!(shop.history.days()[0].purchasers, 1);
        assert_eq!(shop.inventory.available("Ketchup"), 499);
    }
}
