//! View rendering for the "add product" form.

use common::validate::ProductField;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::loader::loader;

use super::messages::{Msg, TextInput, Toggle};
use super::state::AddProductPage;

pub fn view(page: &AddProductPage, ctx: &Context<AddProductPage>) -> Html {
    if page.categories_loading {
        return loader();
    }

    let link = ctx.link();
    let draft = &page.draft;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="container mx-auto px-4 py-8">
            <button
                class="flex items-center text-green-500 hover:text-green-700 mb-6"
                onclick={link.callback(|_: MouseEvent| Msg::Cancel)}
            >
                <i class="material-icons mr-2">{ "arrow_back" }</i>{ "Back to Dashboard" }
            </button>

            <div class="glass p-6 rounded-xl">
                <h1 class="text-3xl font-bold mb-6">{ "Add New Product" }</h1>

                <form {onsubmit} novalidate={true}>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6">
                        { text_input(page, link, "Product Name*", "text", TextInput::Name, &draft.name, Some(ProductField::Name)) }
                        { category_select(page, link) }
                    </div>

                    { description_input(page, link) }

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-6">
                        { text_input(page, link, "Price*", "number", TextInput::Price, &page.price_input, Some(ProductField::Price)) }
                        { text_input(page, link, "Unit*", "text", TextInput::Unit, &draft.unit, Some(ProductField::Unit)) }
                        { text_input(page, link, "Quantity Available*", "number", TextInput::QuantityAvailable, &page.quantity_input, Some(ProductField::QuantityAvailable)) }
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6">
                        { text_input(page, link, "Harvest Date", "date", TextInput::HarvestDate, &draft.harvest_date, None) }
                        { text_input(page, link, "Available Until", "date", TextInput::AvailableUntil, &draft.available_until, None) }
                    </div>

                    <div class="flex gap-6 mb-6">
                        { checkbox(link, "Organic", Toggle::Organic, draft.is_organic) }
                        { checkbox(link, "Active", Toggle::Active, draft.is_active) }
                    </div>

                    { image_picker(page, link) }

                    <div class="flex justify-end gap-4">
                        <button
                            type="button"
                            class="px-6 py-2 border rounded-lg text-gray-700"
                            onclick={link.callback(|_: MouseEvent| Msg::Cancel)}
                        >
                            { "Cancel" }
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={page.submitting}>
                            { if page.submitting { "Creating..." } else { "Create Product" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn field_error(page: &AddProductPage, field: Option<ProductField>) -> Html {
    match field.and_then(|f| page.errors.get(f)) {
        Some(message) => html! { <p class="text-red-500 text-xs">{ message.to_string() }</p> },
        None => Html::default(),
    }
}

fn input_class(page: &AddProductPage, field: Option<ProductField>) -> &'static str {
    if field.is_some_and(|f| page.errors.contains(f)) {
        "form-input border-red-500"
    } else {
        "form-input"
    }
}

#[allow(clippy::too_many_arguments)]
fn text_input(
    page: &AddProductPage,
    link: &Scope<AddProductPage>,
    label: &'static str,
    input_type: &'static str,
    input: TextInput,
    value: &str,
    field: Option<ProductField>,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        Msg::Input(input, e.target_unchecked_into::<HtmlInputElement>().value())
    });

    html! {
        <div>
            <label class="block text-sm font-medium mb-1">{ label }</label>
            <input
                type={input_type}
                value={value.to_string()}
                {oninput}
                class={input_class(page, field)}
            />
            { field_error(page, field) }
        </div>
    }
}

fn description_input(page: &AddProductPage, link: &Scope<AddProductPage>) -> Html {
    let field = Some(ProductField::Description);
    let oninput = link.callback(|e: InputEvent| {
        Msg::Input(
            TextInput::Description,
            e.target_unchecked_into::<HtmlTextAreaElement>().value(),
        )
    });

    html! {
        <div class="mb-6">
            <label class="block text-sm font-medium mb-1">{ "Description*" }</label>
            <textarea
                rows="4"
                value={page.draft.description.clone()}
                {oninput}
                class={input_class(page, field)}
            />
            { field_error(page, field) }
        </div>
    }
}

fn category_select(page: &AddProductPage, link: &Scope<AddProductPage>) -> Html {
    let field = Some(ProductField::Category);
    let onchange = link.callback(|e: Event| {
        Msg::Input(
            TextInput::Category,
            e.target_unchecked_into::<HtmlSelectElement>().value(),
        )
    });

    html! {
        <div>
            <label class="block text-sm font-medium mb-1">{ "Category*" }</label>
            <select {onchange} class={input_class(page, field)}>
                <option value="" selected={page.draft.category.is_empty()}>{ "Select a category" }</option>
                { for page.categories.iter().map(|category| html! {
                    <option
                        key={category.id.clone()}
                        value={category.id.clone()}
                        selected={category.id == page.draft.category}
                    >
                        { category.label().to_string() }
                    </option>
                }) }
            </select>
            { field_error(page, field) }
        </div>
    }
}

fn checkbox(link: &Scope<AddProductPage>, label: &'static str, toggle: Toggle, checked: bool) -> Html {
    let onchange = link.callback(move |e: Event| {
        Msg::Toggle(toggle, e.target_unchecked_into::<HtmlInputElement>().checked())
    });

    html! {
        <label class="flex items-center gap-2 text-sm">
            <input type="checkbox" {checked} {onchange} />
            { label }
        </label>
    }
}

fn image_picker(page: &AddProductPage, link: &Scope<AddProductPage>) -> Html {
    let onchange = link.callback(|e: Event| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        let files: Vec<web_sys::File> = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        // Allow picking the same file again after removing it.
        input.set_value("");
        Msg::FilesSelected(files)
    });

    html! {
        <div class="mb-6">
            <label class="block text-sm font-medium mb-2">{ "Images" }</label>
            <input type="file" multiple={true} accept="image/*" {onchange} />

            if !page.attachments.is_empty() {
                <div class="mt-4 grid grid-cols-2 sm:grid-cols-3 md:grid-cols-5 gap-4">
                    { for page.attachments.iter().enumerate().map(|(index, attachment)| html! {
                        <div class="relative">
                            <img src={attachment.preview.to_string()} alt="" class="h-32 w-full object-cover rounded" />
                            <button
                                type="button"
                                class="absolute top-1 right-1 bg-red-500 text-white p-1 rounded-full"
                                onclick={link.callback(move |_: MouseEvent| Msg::RemoveImage(index))}
                            >
                                <i class="material-icons text-sm">{ "close" }</i>
                            </button>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}
