//! Form validation: the "add product" draft and the newsletter address.
//!
//! Validation failures are data. [`validate`] returns a [`FieldErrors`]
//! mapping and callers treat an empty mapping as the only success signal.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::category::Category;
use crate::model::product::ProductDraft;

/// Same pattern the newsletter form has always used.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Validated fields of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductField {
    Name,
    Description,
    Category,
    Price,
    Unit,
    QuantityAvailable,
}

impl ProductField {
    /// Form field name, as used by the inputs and the submission payload.
    pub fn as_str(self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Description => "description",
            ProductField::Category => "category",
            ProductField::Price => "price",
            ProductField::Unit => "unit",
            ProductField::QuantityAvailable => "quantityAvailable",
        }
    }
}

/// Field → message for every field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<ProductField, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ProductField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ProductField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: ProductField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Checks the required fields of a product draft.
///
/// | field | rule |
/// |---|---|
/// | name, description, unit | non-empty after trimming |
/// | category | non-empty |
/// | price | present and `> 0` |
/// | quantity available | present and `>= 0` |
pub fn validate(draft: &ProductDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert(ProductField::Name, "Product name is required");
    }
    if draft.description.trim().is_empty() {
        errors.insert(ProductField::Description, "Description is required");
    }
    if draft.category.is_empty() {
        errors.insert(ProductField::Category, "Category is required");
    }
    if !matches!(draft.price, Some(price) if price > 0.0) {
        errors.insert(ProductField::Price, "Valid price is required");
    }
    if draft.unit.trim().is_empty() {
        errors.insert(ProductField::Unit, "Unit is required");
    }
    if !matches!(draft.quantity_available, Some(quantity) if quantity >= 0.0) {
        errors.insert(ProductField::QuantityAvailable, "Valid quantity is required");
    }

    errors
}

/// [`validate`], plus a check that the selected category is one of
/// `categories`. Skipped while the catalog is empty (not loaded yet).
pub fn validate_with_catalog(draft: &ProductDraft, categories: &[Category]) -> FieldErrors {
    let mut errors = validate(draft);

    let unknown = !draft.category.is_empty()
        && !categories.is_empty()
        && !categories.iter().any(|category| category.id == draft.category);
    if unknown {
        errors.insert(ProductField::Category, "Select a known category");
    }

    errors
}

/// Reads a numeric form input. Empty, unparseable and non-finite input is
/// `None`.
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: "Tomato".to_string(),
            description: "ok".to_string(),
            category: "c1".to_string(),
            price: Some(5.0),
            unit: "lb".to_string(),
            quantity_available: Some(2.0),
            ..ProductDraft::default()
        }
    }

    fn fields(errors: &FieldErrors) -> Vec<ProductField> {
        errors.iter().map(|(field, _)| field).collect()
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn empty_name_is_the_only_error() {
        let draft = ProductDraft { name: String::new(), ..valid_draft() };
        let errors = validate(&draft);
        assert_eq!(fields(&errors), [ProductField::Name]);
        assert_eq!(errors.get(ProductField::Name), Some("Product name is required"));
    }

    #[test]
    fn zero_price_is_the_only_error() {
        let draft = ProductDraft { price: Some(0.0), ..valid_draft() };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(ProductField::Price));
    }

    #[test]
    fn whitespace_only_text_fails() {
        let draft = ProductDraft {
            description: " \t\n".to_string(),
            unit: "  ".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            fields(&validate(&draft)),
            [ProductField::Description, ProductField::Unit]
        );
    }

    #[test]
    fn quantity_zero_is_allowed_but_negative_or_missing_is_not() {
        let zero = ProductDraft { quantity_available: Some(0.0), ..valid_draft() };
        assert!(validate(&zero).is_empty());

        let negative = ProductDraft { quantity_available: Some(-1.0), ..valid_draft() };
        assert_eq!(fields(&validate(&negative)), [ProductField::QuantityAvailable]);

        let missing = ProductDraft { quantity_available: None, ..valid_draft() };
        assert_eq!(fields(&validate(&missing)), [ProductField::QuantityAvailable]);
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let errors = validate(&ProductDraft {
            unit: String::new(),
            ..ProductDraft::default()
        });
        assert_eq!(errors.len(), 6);
        assert!(errors.iter().all(|(_, message)| !message.is_empty()));
    }

    #[test]
    fn catalog_check_only_applies_to_loaded_catalogs() {
        let catalog = vec![Category { id: "c1".to_string(), name: Some("Vegetables".to_string()) }];
        assert!(validate_with_catalog(&valid_draft(), &catalog).is_empty());

        let stale = ProductDraft { category: "c9".to_string(), ..valid_draft() };
        let errors = validate_with_catalog(&stale, &catalog);
        assert_eq!(errors.get(ProductField::Category), Some("Select a known category"));

        assert!(validate_with_catalog(&stale, &[]).is_empty());
    }

    #[test]
    fn parse_number_inputs() {
        assert_eq!(parse_number(" 4.5 "), Some(4.5));
        assert_eq!(parse_number("0"), Some(0.0));
        assert_eq!(parse_number("-2"), Some(-2.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn newsletter_addresses() {
        assert!(is_valid_email("grower@example.com"));
        assert!(is_valid_email("a.b@farm.co.in"));
        assert!(!is_valid_email("grower@example"));
        assert!(!is_valid_email("grower example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn field_names_match_form_inputs() {
        assert_eq!(ProductField::QuantityAvailable.as_str(), "quantityAvailable");
        assert_eq!(ProductField::Name.as_str(), "name");
    }
}
