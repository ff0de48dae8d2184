//! Public farmer directory with a client-side name search.

mod farmer_card;

use common::farmers::search;
use common::model::farmer::Farmer;
use log::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::loader::loader;
use crate::helpers::{show_toast, ToastKind};
use farmer_card::farmer_card;

pub enum Msg {
    Loaded(Vec<Farmer>),
    LoadFailed,
    SetSearch(String),
}

pub struct FarmersPage {
    farmers: Vec<Farmer>,
    loading: bool,
    search_term: String,
}

impl Component for FarmersPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            farmers: Vec::new(),
            loading: true,
            search_term: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(farmers) => {
                self.farmers = farmers;
                self.loading = false;
            }
            Msg::LoadFailed => self.loading = false,
            Msg::SetSearch(term) => self.search_term = term,
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_farmers().await {
                Ok(farmers) => link.send_message(Msg::Loaded(farmers)),
                Err(err) => {
                    error!("loading farmers failed: {}", err);
                    show_toast("Could not load farmers.", ToastKind::Error);
                    link.send_message(Msg::LoadFailed);
                }
            }
        });
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading && self.farmers.is_empty() {
            return loader();
        }

        let filtered = search(&self.farmers, &self.search_term);
        let oninput = ctx.link().callback(|e: InputEvent| {
            Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
        });

        html! {
            <div class="container mx-auto px-4 py-8">
                <h1 class="text-3xl font-bold mb-8">{ "Our Farmers" }</h1>

                <div class="mb-8">
                    <div class="relative max-w-md mx-auto">
                        <input
                            type="text"
                            value={self.search_term.clone()}
                            {oninput}
                            placeholder="Search farmers..."
                            class="w-full px-4 py-2 pl-10 border border-gray-300 rounded-lg"
                        />
                        <i class="material-icons absolute left-3 top-2 text-gray-400">{ "search" }</i>
                    </div>
                </div>

                {
                    if filtered.is_empty() {
                        self.empty_state()
                    } else {
                        html! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                                { for filtered.iter().map(farmer_card) }
                            </div>
                        }
                    }
                }
            </div>
        }
    }
}

impl FarmersPage {
    fn empty_state(&self) -> Html {
        let detail = if self.search_term.is_empty() {
            "The farmer directory is empty.".to_string()
        } else {
            format!("No matches for \"{}\"", self.search_term)
        };

        html! {
            <div class="text-center py-12">
                <i class="material-icons text-green-500 text-5xl">{ "eco" }</i>
                <h3 class="text-xl font-semibold mb-2">{ "No Farmers Found" }</h3>
                <p class="text-gray-600 mb-4">{ detail }</p>
                <p class="text-xs text-gray-400 bg-gray-100 p-2 rounded inline-block">
                    { format!("{} farmers listed in total.", self.farmers.len()) }
                </p>
            </div>
        }
    }
}
