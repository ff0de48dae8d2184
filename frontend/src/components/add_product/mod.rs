//! "Add product" form for farmers.
//!
//! Split the same way as the other stateful pages: `state` holds the form,
//! `update` applies messages, `view` renders. Categories for the picker are
//! loaded on first render.

use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AddProductProps;
pub use state::AddProductPage;

impl Component for AddProductPage {
    type Message = Msg;
    type Properties = AddProductProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AddProductPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(categories) => link.send_message(Msg::CategoriesLoaded(categories)),
                Err(err) => {
                    error!("loading categories failed: {}", err);
                    link.send_message(Msg::CategoriesFailed);
                }
            }
        });
    }
}
