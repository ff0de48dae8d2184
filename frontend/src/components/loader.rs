use yew::prelude::*;

/// Full-width spinner shown while a page waits for its data.
pub fn loader() -> Html {
    html! {
        <div class="flex justify-center items-center py-20">
            <div style="width:48px;height:48px;border:6px solid #ccc;border-top-color:#16a34a;border-radius:50%;animation:spin 1s linear infinite;"></div>
            <style>{r#"
                @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
            "#}</style>
        </div>
    }
}
