use shared::Prize;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PrizeSelectorProps {
    pub prizes: Vec<Prize>,
    /// Pinned outcome; `None` means random mode.
    pub selected: Option<Prize>,
    pub is_spinning: bool,
    pub on_select: Callback<Option<Prize>>,
}

/// Panel that pins a specific prize as the next outcome, or clears the pin
/// to fall back to a fair random spin. Disabled while the wheel turns.
#[function_component(PrizeSelector)]
pub fn prize_selector(props: &PrizeSelectorProps) -> Html {
    let select_random = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(None))
    };

    html! {
        <div class={styles::SELECTOR_CARD}>
            <h2 class={styles::SELECTOR_TITLE} dir="rtl">{"בחר תוצאה מראש"}</h2>
            <p class={styles::SELECTOR_HINT} dir="rtl">
                {"בחר פרס כדי לקבוע את התוצאה הבאה, או בחר \"אקראי\" לסיבוב הוגן."}
            </p>
            <div class={styles::SELECTOR_LIST}>
                <button
                    onclick={select_random}
                    disabled={props.is_spinning}
                    class={classes!(
                        styles::SELECTOR_BUTTON_BASE,
                        if props.selected.is_none() {
                            styles::SELECTOR_RANDOM_ACTIVE
                        } else {
                            styles::SELECTOR_RANDOM_IDLE
                        },
                        props.is_spinning.then_some("opacity-50 cursor-not-allowed"),
                    )}
                >
                    {"אקראי"}
                </button>
                { for props.prizes.iter().map(|prize| {
                    let is_selected = props
                        .selected
                        .as_ref()
                        .map(|s| s.name == prize.name)
                        .unwrap_or(false);
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let prize = prize.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(Some(prize.clone())))
                    };
                    let style = format!(
                        "background-color: {}; border-color: {}; color: {}; text-shadow: {};",
                        if is_selected { prize.color.as_str() } else { "transparent" },
                        prize.color,
                        if is_selected { "white" } else { prize.color.as_str() },
                        if is_selected { "0 1px 2px rgba(0,0,0,0.5)" } else { "none" },
                    );
                    html! {
                        <button
                            key={prize.name.clone()}
                            {onclick}
                            disabled={props.is_spinning}
                            class={classes!(
                                styles::SELECTOR_BUTTON_BASE,
                                "border-2",
                                if is_selected { "shadow-md" } else { "bg-opacity-20 hover:bg-opacity-40" },
                                props.is_spinning.then_some("opacity-50 cursor-not-allowed"),
                            )}
                            {style}
                        >
                            { &prize.name }
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
