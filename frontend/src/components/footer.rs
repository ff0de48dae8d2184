//! Site footer with quick links and the newsletter sign-up.

use common::validate::is_valid_email;
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::Page;
use crate::helpers::{show_toast, ToastKind};

#[derive(Properties, PartialEq, Clone)]
pub struct FooterProps {
    pub on_navigate: Callback<Page>,
}

pub enum Msg {
    SetEmail(String),
    Subscribe,
}

pub struct Footer {
    email: String,
}

impl Component for Footer {
    type Message = Msg;
    type Properties = FooterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(email) => {
                self.email = email;
                true
            }
            Msg::Subscribe => {
                if is_valid_email(&self.email) {
                    info!("newsletter subscription accepted");
                    show_toast("Subscribed successfully!", ToastKind::Success);
                    self.email.clear();
                    true
                } else {
                    show_toast("Please enter a valid email address.", ToastKind::Error);
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = &ctx.props().on_navigate;
        let quick_link = |label: &'static str, page: Page| {
            let onclick = on_navigate.reform(move |_: MouseEvent| page);
            html! {
                <li><button class="text-gray-400 hover:text-white" {onclick}>{ label }</button></li>
            }
        };
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Subscribe
        });
        let oninput = link.callback(|e: InputEvent| {
            Msg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let year = js_sys::Date::new_0().get_full_year();

        html! {
            <footer class="bg-gray-900 text-white pt-12 pb-6">
                <div class="container mx-auto px-4">
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-12">
                        <div>
                            <h3 class="text-xl font-bold mb-4">{ "FarmGate" }</h3>
                            <p class="text-gray-400">
                                { "Fresh produce straight from local farmers to your table." }
                            </p>
                        </div>

                        <div>
                            <h4 class="font-semibold mb-4">{ "Quick Links" }</h4>
                            <ul class="space-y-2">
                                { quick_link("Farmers", Page::Farmers) }
                                { quick_link("My Orders", Page::Orders) }
                                { quick_link("Farmer Dashboard", Page::Dashboard) }
                            </ul>
                        </div>

                        <div>
                            <h4 class="font-semibold mb-4">{ "Newsletter" }</h4>
                            <p class="text-gray-400 mb-4">{ "Seasonal harvest news, once a month." }</p>
                            <form class="flex" {onsubmit} novalidate={true}>
                                <input
                                    type="email"
                                    value={self.email.clone()}
                                    {oninput}
                                    placeholder="Your email address"
                                    class="px-4 py-2 w-full rounded-l-lg text-gray-900"
                                />
                                <button type="submit" class="bg-green-500 px-4 py-2 rounded-r-lg">
                                    { "Subscribe" }
                                </button>
                            </form>
                        </div>
                    </div>

                    <div class="border-t border-gray-800 mt-10 pt-6 text-center text-gray-500 text-sm">
                        { format!("© {} FarmGate. All rights reserved.", year) }
                    </div>
                </div>
            </footer>
        }
    }
}
