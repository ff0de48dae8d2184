use common::model::farmer::Farmer;
use yew::prelude::*;

pub fn farmer_card(farmer: &Farmer) -> Html {
    let avatar = match &farmer.profile_image {
        Some(src) if !src.is_empty() => html! {
            <img src={src.clone()} alt="" class="w-16 h-16 rounded-full object-cover" />
        },
        _ => html! {
            <div class="w-16 h-16 rounded-full bg-green-100 text-green-700 flex items-center justify-center text-2xl font-bold">
                { farmer.initial().to_string() }
            </div>
        },
    };

    let optional_line = |value: &Option<String>, class: &'static str| match value {
        Some(text) if !text.is_empty() => html! { <p class={class}>{ text.clone() }</p> },
        _ => Html::default(),
    };

    html! {
        <div key={farmer.id.clone()} class="glass p-6 rounded-xl shadow-md flex gap-4">
            { avatar }
            <div>
                <h3 class="text-lg font-semibold">{ farmer.display_name().unwrap_or_default() }</h3>
                { optional_line(&farmer.farm_name, "text-green-600 text-sm") }
                { optional_line(&farmer.location, "text-gray-500 text-sm") }
                { optional_line(&farmer.bio, "text-gray-600 text-sm mt-2") }
            </div>
        </div>
    }
}
