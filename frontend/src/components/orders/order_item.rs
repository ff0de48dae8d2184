use common::model::order::Order;
use yew::prelude::*;

use super::status_badge::status_badge;

pub fn order_item(order: &Order) -> Html {
    html! {
        <div class="glass p-4 rounded-xl shadow-sm flex justify-between items-center">
            <div>
                <p class="font-semibold">{ format!("Order #{}", order.short_id()) }</p>
                <p class="text-sm text-gray-500">{ format!("Placed {}", order.display_date()) }</p>
            </div>
            <div class="flex items-center gap-4">
                <span class="font-semibold">{ order.display_amount() }</span>
                { status_badge(order) }
            </div>
        </div>
    }
}
