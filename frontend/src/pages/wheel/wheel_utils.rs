use shared::Prize;
use yew::prelude::*;

use crate::styles;

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub last_result: Option<Prize>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(prize) = &props.last_result else {
        return html! {};
    };

    html! {
        <div
            class={styles::RESULT_CARD}
            style={format!("background-color: {}; box-shadow: 0 0 20px {};", prize.color, prize.color)}
        >
            <span class="text-sm text-white/80" dir="rtl">{"התוצאה האחרונה:"}</span>
            <p
                class="text-2xl font-bold text-white"
                style="text-shadow: 1px 1px 3px rgba(0,0,0,0.5);"
            >
                { &prize.name }
            </p>
        </div>
    }
}
