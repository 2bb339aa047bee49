use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Trait key used to pair breads with sausages of the same size
pub const LENGTH_TRAIT: &str = "length";
const LEGACY_LENGTH_TRAIT: &str = "longitud";

/// Fixed set of component categories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "Pan")]
    Bread,
    #[serde(alias = "Salchicha")]
    Sausage,
    #[serde(alias = "Topping")]
    Topping,
    #[serde(alias = "Salsa")]
    Sauce,
    #[serde(alias = "Acompañante")]
    Side,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Bread,
        Category::Sausage,
        Category::Topping,
        Category::Sauce,
        Category::Side,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Bread => "bread",
            Category::Sausage => "sausage",
            Category::Topping => "topping",
            Category::Sauce => "sauce",
            Category::Side => "side",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = InventoryError;

    /// Accepts the English labels and the Spanish ones used by older data files
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bread" | "pan" => Ok(Category::Bread),
            "sausage" | "salchicha" => Ok(Category::Sausage),
            "topping" => Ok(Category::Topping),
            "sauce" | "salsa" => Ok(Category::Sauce),
            "side" | "acompañante" | "acompanante" => Ok(Category::Side),
            _ => Err(InventoryError::UnknownCategory(s.to_string())),
        }
    }
}

/// A raw stocked item
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "categoria")]
    pub category: Category,
    #[serde(alias = "cantidad")]
    pub quantity: u32,
    #[serde(alias = "precio")]
    pub unit_cost: f64,
    #[serde(default, alias = "caracteristicas")]
    pub traits: BTreeMap<String, String>,
}

impl Component {
    pub fn new(name: &str, category: Category, quantity: u32, unit_cost: f64) -> Self {
        Component {
            name: name.to_string(),
            category,
            quantity,
            unit_cost,
            traits: BTreeMap::new(),
        }
    }

    pub fn with_trait(mut self, key: &str, value: &str) -> Self {
        self.traits.insert(key.to_string(), value.to_lowercase());
        self
    }

    pub fn length(&self) -> Option<&str> {
        self.traits
            .get(LENGTH_TRAIT)
            .or_else(|| self.traits.get(LEGACY_LENGTH_TRAIT))
            .map(String::as_str)
    }

    /// Case-insensitive identity check
    pub fn is_named(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }
}

/// A menu item: a recipe of component names plus a sale price.
/// Components are referenced by name and resolved against the inventory
/// at simulation time, so stock edits show up immediately.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "pan")]
    pub bread: String,
    #[serde(alias = "salchicha")]
    pub sausage: String,
    #[serde(default)]
    pub toppings: Vec<String>,
    #[serde(default, alias = "salsas")]
    pub sauces: Vec<String>,
    #[serde(default, alias = "acompanante")]
    pub side: Option<String>,
    #[serde(alias = "precio_venta")]
    pub price: f64,
}

impl Product {
    pub fn new(name: &str, bread: &str, sausage: &str, price: f64) -> Self {
        Product {
            name: name.to_string(),
            bread: bread.to_string(),
            sausage: sausage.to_string(),
            toppings: Vec::new(),
            sauces: Vec::new(),
            side: None,
            price,
        }
    }

    pub fn with_toppings(mut self, toppings: &[&str]) -> Self {
        self.toppings = toppings.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_sauces(mut self, sauces: &[&str]) -> Self {
        self.sauces = sauces.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_side(mut self, side: &str) -> Self {
        self.side = Some(side.to_string());
        self
    }

    /// Every component name in the recipe, one entry per occurrence
    pub fn recipe(&self) -> impl Iterator<Item = &str> {
        [self.bread.as_str(), self.sausage.as_str()]
            .into_iter()
            .chain(self.toppings.iter().map(String::as_str))
            .chain(self.sauces.iter().map(String::as_str))
            .chain(self.side.as_deref())
    }

    pub fn uses(&self, component: &str) -> bool {
        self.recipe().any(|c| same_name(c, component))
    }
}

/// One pick within a customer's order, alive only for that customer's turn
#[derive(Clone, Debug, PartialEq)]
pub struct OrderLine<'a> {
    pub product: &'a Product,
    /// Impulse-buy side drawn from the inventory
    pub extra_side: Option<String>,
}

impl OrderLine<'_> {
    /// Side items this line accounts for: the recipe side and the extra one, counted separately
    pub fn side_count(&self) -> u32 {
        u32::from(self.product.side.is_some()) + u32::from(self.extra_side.is_some())
    }
}

/// How a single simulated customer's turn ended
#[derive(Clone, Debug, PartialEq)]
pub enum CustomerOutcome<'a> {
    /// Drew zero picks and left without touching stock
    Abandoned,
    Fulfilled { lines: Vec<OrderLine<'a>> },
    /// Whole order refused; `missing` names one component that was short
    Rejected {
        lines: Vec<OrderLine<'a>>,
        missing: String,
    },
}

pub fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
