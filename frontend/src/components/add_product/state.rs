//! State of the "add product" form.

use common::model::category::Category;
use common::model::product::ProductDraft;
use common::validate::FieldErrors;
use gloo_file::ObjectUrl;

/// An attached image and the object URL its preview is rendered from. The
/// URL is revoked when the attachment is dropped.
pub struct Attachment {
    pub file: web_sys::File,
    pub preview: ObjectUrl,
}

impl Attachment {
    pub fn new(file: web_sys::File) -> Self {
        let blob = gloo_file::Blob::from(web_sys::Blob::from(file.clone()));
        Self {
            file,
            preview: ObjectUrl::from(blob),
        }
    }
}

pub struct AddProductPage {
    /// Typed form values; `price` and `quantity_available` are parsed from
    /// the raw inputs below on every keystroke.
    pub draft: ProductDraft,

    /// Raw text of the price input, kept so the field shows what was typed.
    pub price_input: String,

    /// Raw text of the quantity input.
    pub quantity_input: String,

    pub attachments: Vec<Attachment>,

    /// Errors from the last submit attempt.
    pub errors: FieldErrors,

    pub categories: Vec<Category>,
    pub categories_loading: bool,

    /// A submission is in flight.
    pub submitting: bool,
}

impl AddProductPage {
    pub fn new() -> Self {
        Self {
            draft: ProductDraft::default(),
            price_input: String::new(),
            quantity_input: String::new(),
            attachments: Vec::new(),
            errors: FieldErrors::default(),
            categories: Vec::new(),
            categories_loading: true,
            submitting: false,
        }
    }

    pub fn files(&self) -> Vec<web_sys::File> {
        self.attachments.iter().map(|a| a.file.clone()).collect()
    }
}
