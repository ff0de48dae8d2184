use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AddProductProps {
    /// Emitted once the server has accepted the new product.
    pub on_created: Callback<()>,
    /// Emitted when the user leaves the form without submitting.
    pub on_cancel: Callback<()>,
}
