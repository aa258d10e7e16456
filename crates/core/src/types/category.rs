//! Menu item categories.

use serde::{Deserialize, Serialize};

/// The course a menu item belongs to.
///
/// Serialized in lowercase on the wire (`"main"`, `"side"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Main,
    Side,
    Drink,
    Dessert,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Side => write!(f, "side"),
            Self::Drink => write!(f, "drink"),
            Self::Dessert => write!(f, "dessert"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "side" => Ok(Self::Side),
            "drink" => Ok(Self::Drink),
            "dessert" => Ok(Self::Dessert),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}
