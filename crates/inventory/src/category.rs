//! Product categories and the per-category field table.

use serde::{Deserialize, Serialize};

use stockwatch_core::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Cosmetics,
    Clothing,
    Electronics,
    Grocery,
    Other,
}

/// Whether manufacturing/expiry dates apply to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFields {
    Shown,
    Hidden,
}

/// Field requirements a product form applies for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFields {
    pub dates: DateFields,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Cosmetics,
        Category::Clothing,
        Category::Electronics,
        Category::Grocery,
        Category::Other,
    ];

    pub fn fields(self) -> CategoryFields {
        let dates = match self {
            Category::Food | Category::Cosmetics => DateFields::Shown,
            Category::Clothing | Category::Electronics | Category::Grocery | Category::Other => {
                DateFields::Hidden
            }
        };
        CategoryFields { dates }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Cosmetics => "cosmetics",
            Category::Clothing => "clothing",
            Category::Electronics => "electronics",
            Category::Grocery => "grocery",
            Category::Other => "other",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted.is_empty() {
            return Err(DomainError::validation("category is required"));
        }
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {wanted}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perishables_show_date_fields() {
        assert_eq!(Category::Food.fields().dates, DateFields::Shown);
        assert_eq!(Category::Cosmetics.fields().dates, DateFields::Shown);
        assert_eq!(Category::Electronics.fields().dates, DateFields::Hidden);
        assert_eq!(Category::Grocery.fields().dates, DateFields::Hidden);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" Food ".parse::<Category>().unwrap(), Category::Food);
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn blank_and_unknown_are_validation_errors() {
        assert!(matches!("".parse::<Category>(), Err(DomainError::Validation(_))));
        assert!(matches!("toys".parse::<Category>(), Err(DomainError::Validation(_))));
    }
}
