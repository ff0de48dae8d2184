use common::model::category::Category;

/// Text-valued inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInput {
    Name,
    Description,
    Category,
    Price,
    Unit,
    QuantityAvailable,
    HarvestDate,
    AvailableUntil,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Organic,
    Active,
}

pub enum Msg {
    Input(TextInput, String),
    Toggle(Toggle, bool),
    FilesSelected(Vec<web_sys::File>),
    RemoveImage(usize),
    CategoriesLoaded(Vec<Category>),
    CategoriesFailed,
    Submit,
    SubmitSucceeded,
    SubmitFailed(String),
    Cancel,
}
