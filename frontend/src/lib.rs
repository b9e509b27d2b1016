pub mod audio;
pub mod components;
pub mod pages;
pub mod styles;

use yew::prelude::*;

use crate::pages::wheel::WheelPage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full">
            <WheelPage />
        </div>
    }
}
