//! Update function for the "add product" form.
//!
//! Submission is gated on validation: the draft is only sent when
//! `validate_with_catalog` reports no errors.

use common::validate::{parse_number, validate_with_catalog};
use log::{error, info};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{show_toast, ToastKind};

use super::messages::{Msg, TextInput, Toggle};
use super::state::{AddProductPage, Attachment};

pub fn update(page: &mut AddProductPage, ctx: &Context<AddProductPage>, msg: Msg) -> bool {
    match msg {
        Msg::Input(input, value) => {
            let draft = &mut page.draft;
            match input {
                TextInput::Name => draft.name = value,
                TextInput::Description => draft.description = value,
                TextInput::Category => draft.category = value,
                TextInput::Unit => draft.unit = value,
                TextInput::HarvestDate => draft.harvest_date = value,
                TextInput::AvailableUntil => draft.available_until = value,
                TextInput::Price => {
                    draft.price = parse_number(&value);
                    page.price_input = value;
                }
                TextInput::QuantityAvailable => {
                    draft.quantity_available = parse_number(&value);
                    page.quantity_input = value;
                }
            }
            true
        }
        Msg::Toggle(toggle, checked) => {
            match toggle {
                Toggle::Organic => page.draft.is_organic = checked,
                Toggle::Active => page.draft.is_active = checked,
            }
            true
        }
        Msg::FilesSelected(files) => {
            page.attachments.extend(files.into_iter().map(Attachment::new));
            true
        }
        Msg::RemoveImage(index) => {
            if index < page.attachments.len() {
                page.attachments.remove(index);
                return true;
            }
            false
        }
        Msg::CategoriesLoaded(categories) => {
            page.categories = categories;
            page.categories_loading = false;
            true
        }
        Msg::CategoriesFailed => {
            page.categories_loading = false;
            true
        }
        Msg::Submit => {
            if page.submitting {
                return false;
            }

            page.errors = validate_with_catalog(&page.draft, &page.categories);
            if !page.errors.is_empty() {
                return true;
            }

            page.submitting = true;
            let draft = page.draft.clone();
            let files = page.files();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::create_product(&draft, &files).await {
                    Ok(()) => link.send_message(Msg::SubmitSucceeded),
                    Err(err) => link.send_message(Msg::SubmitFailed(err.to_string())),
                }
            });
            true
        }
        Msg::SubmitSucceeded => {
            info!("product \"{}\" created", page.draft.name.trim());
            page.submitting = false;
            show_toast("Product created.", ToastKind::Success);
            ctx.props().on_created.emit(());
            true
        }
        Msg::SubmitFailed(reason) => {
            error!("creating product failed: {}", reason);
            page.submitting = false;
            show_toast("Could not create the product. Please try again.", ToastKind::Error);
            true
        }
        Msg::Cancel => {
            ctx.props().on_cancel.emit(());
            false
        }
    }
}
