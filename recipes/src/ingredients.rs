use serde::{Deserialize, Serialize};

/// The stored unit value meaning "this quantity has no unit".
pub const NO_UNIT: &str = "none";

/// One entry in a recipe's ordered ingredient list. Every field is free text
/// from the editor and every field is optional; display order is storage
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Ingredient {
    pub fn quantity(&self) -> Option<&str> {
        non_empty(self.quantity.as_deref())
    }

    /// The unit, with the `"none"` sentinel treated as absent.
    pub fn unit(&self) -> Option<&str> {
        non_empty(self.unit.as_deref()).filter(|unit| *unit != NO_UNIT)
    }

    pub fn product(&self) -> Option<&str> {
        non_empty(self.product.as_deref())
    }

    pub fn notes(&self) -> Option<&str> {
        non_empty(self.notes.as_deref())
    }
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.is_empty())
}
