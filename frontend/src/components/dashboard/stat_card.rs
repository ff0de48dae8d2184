use yew::prelude::*;

/// One of the summary cards at the top of the dashboard. `color` is a
/// palette name (`green`, `blue`, ...).
pub fn stat_card(title: &str, value: String, icon: &'static str, color: &'static str) -> Html {
    html! {
        <div class={format!("bg-white p-6 rounded-xl shadow-md border-l-4 border-{}-500", color)}>
            <div class="flex justify-between items-center">
                <div>
                    <p class="text-gray-500 text-sm font-medium uppercase">{ title.to_string() }</p>
                    <p class="text-2xl font-bold text-gray-800">{ value }</p>
                </div>
                <div class={format!("w-12 h-12 bg-{0}-100 rounded-full flex items-center justify-center text-{0}-600", color)}>
                    <i class="material-icons">{ icon }</i>
                </div>
            </div>
        </div>
    }
}
