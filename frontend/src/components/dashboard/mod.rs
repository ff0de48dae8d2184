//! Farmer dashboard: earnings, order and product counts, and the most
//! recent orders.
//!
//! Data is loaded once per signed-in farmer and dropped when the farmer
//! changes. The summary is derived from the loaded orders on every render
//! and never stored.

mod data;
mod recent_orders;
mod stat_card;

use common::display::{format_amount, format_count};
use common::model::order::Order;
use common::model::product::Product;
use common::model::user::SessionUser;
use common::orders::aggregate;
use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::loader::loader;
use crate::helpers::{show_toast, ToastKind};
use data::FarmerData;
use recent_orders::recent_orders;
use stat_card::stat_card;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    /// Signed-in user; nothing is fetched until it is known.
    #[prop_or_default]
    pub user: Option<SessionUser>,
    pub on_add_product: Callback<()>,
    pub on_view_orders: Callback<()>,
}

/// Every response carries the farmer id it was requested for.
pub enum Msg {
    ProductsLoaded(String, Vec<Product>),
    OrdersLoaded(String, Vec<Order>),
    ProductsFailed(String),
    OrdersFailed(String),
}

pub struct DashboardPage {
    data: FarmerData,
}

impl Component for DashboardPage {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = Self {
            data: FarmerData::default(),
        };
        page.load(ctx);
        page
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ProductsLoaded(farmer_id, products) => {
                self.data.products_loaded(&farmer_id, Some(products))
            }
            Msg::OrdersLoaded(farmer_id, orders) => self.data.orders_loaded(&farmer_id, Some(orders)),
            Msg::ProductsFailed(farmer_id) => self.data.products_loaded(&farmer_id, None),
            Msg::OrdersFailed(farmer_id) => self.data.orders_loaded(&farmer_id, None),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.load(ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.data.is_loading() {
            return loader();
        }

        let props = ctx.props();
        let summary = aggregate(&self.data.orders);
        let name = props
            .user
            .as_ref()
            .and_then(|user| user.name.clone())
            .unwrap_or_default();
        let on_add_product = props.on_add_product.reform(|_: MouseEvent| ());

        html! {
            <div class="container mx-auto px-4 py-8">
                <div class="flex justify-between items-center mb-8">
                    <div>
                        <h1 class="text-3xl font-bold text-gray-800">{ "Farmer Dashboard" }</h1>
                        <p class="text-gray-600">{ format!("Welcome back, {}!", name) }</p>
                    </div>
                    <button class="btn btn-primary flex items-center gap-2 shadow-md" onclick={on_add_product}>
                        <i class="material-icons">{ "add" }</i>{ "Add New Product" }
                    </button>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-10">
                    { stat_card("Total Earnings", format_amount(summary.total_revenue), "payments", "green") }
                    { stat_card("Total Orders", format_count(summary.total_count), "assignment", "blue") }
                    { stat_card("Total Products", format_count(self.data.products.len()), "inventory_2", "purple") }
                </div>

                { recent_orders(&summary.recent, &props.on_view_orders) }
            </div>
        }
    }
}

impl DashboardPage {
    /// Fetches products and orders when the signed-in farmer changes.
    fn load(&mut self, ctx: &Context<Self>) {
        let farmer_id = ctx
            .props()
            .user
            .as_ref()
            .map(|user| user.id.clone())
            .filter(|id| !id.is_empty());
        if !self.data.begin(farmer_id.as_deref()) {
            return;
        }
        let Some(farmer_id) = farmer_id else {
            return;
        };

        let link = ctx.link().clone();
        let id = farmer_id.clone();
        spawn_local(async move {
            match api::fetch_products(&id).await {
                Ok(products) => link.send_message(Msg::ProductsLoaded(id, products)),
                Err(err) => {
                    error!("loading products for {} failed: {}", id, err);
                    show_toast("Could not load your products.", ToastKind::Error);
                    link.send_message(Msg::ProductsFailed(id));
                }
            }
        });

        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_farmer_orders().await {
                Ok(orders) => link.send_message(Msg::OrdersLoaded(farmer_id, orders)),
                Err(err) => {
                    error!("loading orders for {} failed: {}", farmer_id, err);
                    show_toast("Could not load your orders.", ToastKind::Error);
                    link.send_message(Msg::OrdersFailed(farmer_id));
                }
            }
        });
    }
}
