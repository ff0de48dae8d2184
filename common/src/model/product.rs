use serde::{Deserialize, Serialize};

use super::{lenient, lenient_id, Reference};

/// A listed product, as returned by the products endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub quantity_available: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<Reference>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_organic: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_active: Option<bool>,
}

/// The "add product" form's state before submission.
///
/// Numeric inputs are `None` when the field is empty or does not parse;
/// image files are held by the view layer and appended at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    /// Identifier of the selected category, empty when none is selected.
    pub category: String,
    pub price: Option<f64>,
    pub unit: String,
    pub quantity_available: Option<f64>,
    pub is_organic: bool,
    pub harvest_date: String,
    pub available_until: String,
    pub is_active: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: String::new(),
            price: None,
            unit: "lb".to_string(),
            quantity_available: None,
            is_organic: false,
            harvest_date: String::new(),
            available_until: String::new(),
            is_active: true,
        }
    }
}

impl ProductDraft {
    /// Copy with surrounding whitespace removed from the free-text fields.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            unit: self.unit.trim().to_string(),
            harvest_date: self.harvest_date.trim().to_string(),
            available_until: self.available_until.trim().to_string(),
            ..self.clone()
        }
    }

    /// Text parts of the multipart submission, in wire order.
    ///
    /// Values come from [`ProductDraft::normalized`]; absent numbers are sent
    /// as empty strings. Image files go in separate `images` parts.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let draft = self.normalized();
        let number = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();

        vec![
            ("name", draft.name),
            ("description", draft.description),
            ("category", draft.category),
            ("price", number(draft.price)),
            ("unit", draft.unit),
            ("quantityAvailable", number(draft.quantity_available)),
            ("isOrganic", draft.is_organic.to_string()),
            ("harvestDate", draft.harvest_date),
            ("availableUntil", draft.available_until),
            ("isActive", draft.is_active.to_string()),
        ]
    }
}
