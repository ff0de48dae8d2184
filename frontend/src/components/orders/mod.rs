//! The consumer's order history, filterable by status.

mod order_item;
pub mod status_badge;

use common::model::order::Order;
use common::orders::{filter, StatusFilter};
use log::error;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::loader::loader;
use crate::helpers::{show_toast, ToastKind};
use order_item::order_item;

pub enum Msg {
    Loaded(Vec<Order>),
    LoadFailed,
    SetFilter(StatusFilter),
}

pub struct OrdersPage {
    orders: Vec<Order>,
    loading: bool,
    filter: StatusFilter,
}

impl Component for OrdersPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            orders: Vec::new(),
            loading: true,
            filter: StatusFilter::All,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(orders) => {
                self.orders = orders;
                self.loading = false;
                true
            }
            Msg::LoadFailed => {
                self.loading = false;
                true
            }
            Msg::SetFilter(filter) => {
                let changed = self.filter != filter;
                self.filter = filter;
                changed
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_my_orders().await {
                Ok(orders) => link.send_message(Msg::Loaded(orders)),
                Err(err) => {
                    error!("loading orders failed: {}", err);
                    show_toast("Could not load your orders.", ToastKind::Error);
                    link.send_message(Msg::LoadFailed);
                }
            }
        });
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return loader();
        }

        let visible = filter(&self.orders, self.filter);

        html! {
            <div class="container mx-auto px-4 py-8">
                <h1 class="text-3xl font-bold mb-8">{ "My Orders" }</h1>

                <div class="mb-6 flex flex-wrap gap-2">
                    { for StatusFilter::CHOICES.into_iter().map(|choice| self.filter_button(choice, ctx.link())) }
                </div>

                {
                    if visible.is_empty() {
                        self.empty_state()
                    } else {
                        html! {
                            <div class="space-y-4">
                                { for visible.iter().map(order_item) }
                            </div>
                        }
                    }
                }
            </div>
        }
    }
}

impl OrdersPage {
    fn filter_button(&self, choice: StatusFilter, link: &Scope<Self>) -> Html {
        let colors = if self.filter != choice {
            "bg-gray-100 text-gray-700 hover:bg-gray-200"
        } else if matches!(choice, StatusFilter::Only(status) if status.is_negative()) {
            "bg-red-500 text-white"
        } else {
            "bg-green-500 text-white"
        };

        html! {
            <button
                key={choice.as_str()}
                class={format!("px-4 py-2 rounded-lg transition-colors {}", colors)}
                onclick={link.callback(move |_: MouseEvent| Msg::SetFilter(choice))}
            >
                { choice.label() }
            </button>
        }
    }

    fn empty_state(&self) -> Html {
        let detail = match self.filter {
            StatusFilter::All => "You haven't placed any orders yet.".to_string(),
            StatusFilter::Only(status) => format!("You don't have any {} orders.", status),
        };

        html! {
            <div class="text-center py-12 glass rounded-xl">
                <i class="material-icons text-green-500 text-5xl">{ "shopping_basket" }</i>
                <h3 class="text-xl font-semibold mb-2">{ "No Orders Found" }</h3>
                <p class="text-gray-600">{ detail }</p>
            </div>
        }
    }
}
