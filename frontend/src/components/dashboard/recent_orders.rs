use common::model::order::Order;
use yew::prelude::*;

use crate::components::orders::status_badge::status_badge;

const COLUMNS: [&str; 5] = ["Order ID", "Customer", "Date", "Amount", "Status"];

pub fn recent_orders(orders: &[Order], on_view_all: &Callback<()>) -> Html {
    let onclick = on_view_all.reform(|_: MouseEvent| ());

    let rows = if orders.is_empty() {
        html! {
            <tr>
                <td colspan="5" class="px-6 py-10 text-center text-gray-500">
                    { "No orders found. Your products will appear here once customers start ordering." }
                </td>
            </tr>
        }
    } else {
        orders.iter().map(order_row).collect::<Html>()
    };

    html! {
        <div class="bg-white rounded-xl shadow-md overflow-hidden mb-10">
            <div class="p-6 border-b border-gray-100 flex justify-between items-center">
                <h2 class="text-xl font-bold text-gray-800">{ "Recent Orders" }</h2>
                <button class="text-green-600 hover:text-green-800 text-sm font-medium flex items-center" {onclick}>
                    { "View All" }<i class="material-icons ml-1">{ "arrow_forward" }</i>
                </button>
            </div>
            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead class="bg-gray-50">
                        <tr>
                            { for COLUMNS.into_iter().map(|title| html! {
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{ title }</th>
                            }) }
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        { rows }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn order_row(order: &Order) -> Html {
    html! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{ format!("#{}", order.short_id()) }</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{ order.consumer_name().to_string() }</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{ order.display_date() }</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 font-semibold">{ order.display_amount() }</td>
            <td class="px-6 py-4 whitespace-nowrap">{ status_badge(order) }</td>
        </tr>
    }
}
