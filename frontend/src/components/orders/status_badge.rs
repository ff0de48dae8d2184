use common::model::order::{Order, OrderStatus};
use yew::prelude::*;

fn badge_colors(status: Option<OrderStatus>) -> &'static str {
    match status {
        Some(OrderStatus::Completed) => "bg-green-100 text-green-800",
        Some(OrderStatus::Pending) => "bg-yellow-100 text-yellow-800",
        Some(OrderStatus::Cancelled) => "bg-red-100 text-red-800",
        _ => "bg-blue-100 text-blue-800",
    }
}

pub fn status_badge(order: &Order) -> Html {
    let class = format!(
        "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
        badge_colors(order.status())
    );
    html! { <span {class}>{ order.status_label().to_string() }</span> }
}
