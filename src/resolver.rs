/// Stock resolver: decides whether a requirement can be met and commits the debit.
/// Check and commit are separate calls; the simulation is single-threaded and runs
/// them back to back for one customer, so nothing can touch the store in between.

use crate::error::InventoryError;
use crate::inventory::InventoryStore;
use crate::models::Product;
use crate::tally::Tally;

/// Component name -> units needed, in the order the names were first demanded
pub type Requirements = Tally;

/// Demand for a single unit of one product
pub fn recipe_requirements(product: &Product) -> Requirements {
    let mut requirements = Requirements::new();
    for component in product.recipe() {
        requirements.bump(component);
    }
    requirements
}

/// First component (in requirement order) that is missing or short
pub fn first_shortage<'r>(inventory: &InventoryStore, requirements: &'r Requirements) -> Option<&'r str> {
    requirements
        .iter()
        .find(|(name, needed)| inventory.available(name) < *needed)
        .map(|(name, _)| name)
}

/// True iff every named component exists with enough quantity. Never mutates.
pub fn can_satisfy(inventory: &InventoryStore, requirements: &Requirements) -> bool {
    first_shortage(inventory, requirements).is_none()
}

/// Withdraw every requirement from the store.
/// Re-validates first and leaves the store untouched on any shortage.
pub fn debit(inventory: &mut InventoryStore, requirements: &Requirements) -> Result<(), InventoryError> {
    if let Some(name) = first_shortage(inventory, requirements) {
        return Err(match inventory.lookup(name) {
            Some(component) => InventoryError::Insufficient {
                name: component.name.clone(),
                available: component.quantity,
                requested: requirements.get(name),
            },
            None => InventoryError::UnknownComponent(name.to_string()),
        });
    }

    for (name, needed) in requirements.iter() {
        if let Some(component) = inventory.lookup_mut(name) {
            component.quantity -= needed;
        }
    }
    Ok(())
}
