//! Menu item categories.

use serde::{Deserialize, Serialize};

/// Category of a menu item, used for catalog filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Food,
    Drinks,
    Snacks,
    Desserts,
}

impl Category {
    /// Every category, in menu display order.
    pub const ALL: [Self; 4] = [Self::Food, Self::Drinks, Self::Snacks, Self::Desserts];

    /// Portuguese display label, as shown on menus.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "Comidas",
            Self::Drinks => "Bebidas",
            Self::Snacks => "Lanches",
            Self::Desserts => "Sobremesas",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Food => write!(f, "food"),
            Self::Drinks => write!(f, "drinks"),
            Self::Snacks => write!(f, "snacks"),
            Self::Desserts => write!(f, "desserts"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(Self::Food),
            "drinks" => Ok(Self::Drinks),
            "snacks" => Ok(Self::Snacks),
            "desserts" => Ok(Self::Desserts),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&Category::Desserts).unwrap();
        assert_eq!(json, "\"desserts\"");

        let parsed: Category = serde_json::from_str("\"drinks\"").unwrap();
        assert_eq!(parsed, Category::Drinks);
    }

    #[test]
    fn test_from_str_roundtrip() {
        for category in Category::ALL {
            let parsed: Category = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("sushi".parse::<Category>().is_err());
    }
}
