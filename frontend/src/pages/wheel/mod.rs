mod spinning_wheel;
mod wheel_utils;

use gloo_timers::callback::{Interval, Timeout};
use shared::{initial_prizes, Prize, WheelGame, SPIN_DURATION_MS, TICK_INTERVAL_MS};
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::audio::TickPlayer;
use crate::components::PrizeSelector;
use crate::styles;
use spinning_wheel::SpinningWheel;
use wheel_utils::ResultDisplay;

// Entrance animation for the result card.
const CUSTOM_CSS: &str = r#"
@keyframes fade-in-up {
    0% {
        opacity: 0;
        transform: translateY(20px);
    }
    100% {
        opacity: 1;
        transform: translateY(0);
    }
}

.animate-fade-in-up {
    animation: fade-in-up 0.5s ease-out forwards;
}
"#;

#[function_component(WheelPage)]
pub fn wheel_page() -> Html {
    // Apply custom CSS
    {
        use_effect_with((), move |_| {
            let style_element = if let Some(window) = window() {
                if let Some(document) = window.document() {
                    match (document.head(), document.create_element("style")) {
                        (Some(head), Ok(style)) => {
                            style.set_text_content(Some(CUSTOM_CSS));
                            let _ = head.append_child(&style);
                            Some(style)
                        }
                        _ => None,
                    }
                } else {
                    None
                }
            } else {
                None
            };

            // Return cleanup function
            move || {
                if let Some(style) = style_element {
                    if let Some(parent) = style.parent_node() {
                        let _ = parent.remove_child(&style);
                    }
                }
            }
        });
    }

    let game = use_state(|| WheelGame::new(initial_prizes()));
    let selected = use_state(|| None::<Prize>);
    let ticker = use_mut_ref(TickPlayer::new);
    // At most one pair of timers is ever live; the spinning flag guards
    // re-entry, and replacing a slot drops (cancels) any stale timer.
    let tick_interval = use_mut_ref(|| None::<Interval>);
    let finish_timeout = use_mut_ref(|| None::<Timeout>);
    let wheel_ref = use_node_ref();

    // Scroll to the wheel when an outcome is pinned on narrow viewports.
    {
        let wheel_ref = wheel_ref.clone();
        use_effect_with((*selected).clone(), move |selected| {
            if selected.is_some() {
                let narrow = window()
                    .and_then(|w| w.inner_width().ok())
                    .and_then(|w| w.as_f64())
                    .map(|w| w < 1024.0)
                    .unwrap_or(false);
                if narrow {
                    if let Some(element) = wheel_ref.cast::<HtmlElement>() {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Center);
                        element.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                }
            }
            || ()
        });
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |prize: Option<Prize>| selected.set(prize))
    };

    let on_spin = {
        let game = game.clone();
        let selected = selected.clone();
        let ticker = ticker.clone();
        let tick_interval = tick_interval.clone();
        let finish_timeout = finish_timeout.clone();

        Callback::from(move |_: ()| {
            let mut next = (*game).clone();
            // No-op while spinning, or when the pinned prize is unknown
            // (already logged by the engine).
            let Some(plan) = next.begin_spin((*selected).as_ref(), &mut rand::thread_rng())
            else {
                return;
            };
            game.set(next.clone());

            let ticker = ticker.clone();
            *tick_interval.borrow_mut() = Some(Interval::new(TICK_INTERVAL_MS, move || {
                ticker.borrow_mut().play();
            }));

            let game = game.clone();
            let tick_interval = tick_interval.clone();
            *finish_timeout.borrow_mut() = Some(Timeout::new(SPIN_DURATION_MS, move || {
                tick_interval.borrow_mut().take();
                let mut finished = next;
                finished.finish_spin(plan.target_index);
                game.set(finished);
            }));
        })
    };

    html! {
        <div class={styles::PAGE}>
            <header class={styles::HEADER}>
                <h1 class={styles::HEADER_TITLE} dir="rtl">
                    {"גלגל המזל של רמי השועל"}
                </h1>
                <p class={styles::HEADER_SUBTITLE} dir="rtl">
                    {"סובב את הגלגל כדי לזכות בפרס, או קבע את התוצאה מראש בעזרת הפקדים."}
                </p>
            </header>

            <div class={styles::LAYOUT}>
                <div class="w-full max-w-md lg:max-w-none">
                    <PrizeSelector
                        prizes={game.prizes.clone()}
                        selected={(*selected).clone()}
                        is_spinning={game.is_spinning}
                        on_select={on_select}
                    />
                </div>

                <div ref={wheel_ref} class="flex flex-col items-center gap-6">
                    <SpinningWheel
                        prizes={game.prizes.clone()}
                        rotation={game.rotation}
                        is_spinning={game.is_spinning}
                        on_spin={on_spin}
                    />
                    <ResultDisplay last_result={game.last_result.clone()} />
                </div>
            </div>
        </div>
    }
}
