use common::model::user::SessionUser;
use log::{info, warn};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::add_product::AddProductPage;
use crate::components::dashboard::DashboardPage;
use crate::components::farmers::FarmersPage;
use crate::components::footer::Footer;
use crate::components::orders::OrdersPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Farmers,
    Orders,
    Dashboard,
    AddProduct,
}

impl Page {
    const NAV: [Page; 3] = [Page::Farmers, Page::Orders, Page::Dashboard];

    fn title(self) -> &'static str {
        match self {
            Page::Farmers => "Farmers",
            Page::Orders => "My Orders",
            Page::Dashboard => "Dashboard",
            Page::AddProduct => "Add Product",
        }
    }
}

pub enum Msg {
    Navigate(Page),
    SessionLoaded(Option<SessionUser>),
}

pub struct App {
    page: Page,
    user: Option<SessionUser>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            page: Page::Farmers,
            user: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                if self.page == page {
                    return false;
                }
                self.page = page;
                true
            }
            Msg::SessionLoaded(user) => {
                self.user = user;
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                let user = match api::fetch_session().await {
                    Ok(user) => user,
                    Err(err) => {
                        warn!("could not load session: {}", err);
                        None
                    }
                };
                if let Some(user) = &user {
                    info!("signed in as {}", user.id);
                }
                link.send_message(Msg::SessionLoaded(user));
            });
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let navigate = |page: Page| link.callback(move |_: ()| Msg::Navigate(page));

        let content = match self.page {
            Page::Farmers => html! { <FarmersPage /> },
            Page::Orders => html! { <OrdersPage /> },
            Page::Dashboard => html! {
                <DashboardPage
                    user={self.user.clone()}
                    on_add_product={navigate(Page::AddProduct)}
                    on_view_orders={navigate(Page::Orders)}
                />
            },
            Page::AddProduct => html! {
                <AddProductPage
                    on_created={navigate(Page::Dashboard)}
                    on_cancel={navigate(Page::Dashboard)}
                />
            },
        };

        html! {
            <div class="app-root min-h-screen flex flex-col">
                { self.nav_bar(link) }
                <main class="flex-grow">{ content }</main>
                <Footer on_navigate={link.callback(Msg::Navigate)} />
            </div>
        }
    }
}

impl App {
    fn nav_bar(&self, link: &Scope<Self>) -> Html {
        let greeting = self
            .user
            .as_ref()
            .and_then(|user| user.name.clone())
            .map(|name| html! { <span class="text-sm text-gray-600">{ format!("Hi, {}", name) }</span> })
            .unwrap_or_default();

        html! {
            <nav class="bg-white shadow-md">
                <div class="container mx-auto px-4 py-3 flex items-center justify-between">
                    <span class="text-xl font-bold text-green-600">{ "FarmGate" }</span>
                    <div class="flex gap-2">
                        { for Page::NAV.into_iter().map(|page| nav_button(page, self.page, link)) }
                    </div>
                    { greeting }
                </div>
            </nav>
        }
    }
}

fn nav_button(page: Page, current: Page, link: &Scope<App>) -> Html {
    let class = if page == current {
        "px-4 py-2 rounded-lg bg-green-500 text-white"
    } else {
        "px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100"
    };
    html! {
        <button {class} onclick={link.callback(move |_: MouseEvent| Msg::Navigate(page))}>
            { page.title() }
        </button>
    }
}
