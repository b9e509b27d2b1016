use gloo_timers::callback::Timeout;
use shared::{Prize, LEVER_RESET_MS, SPIN_DURATION_MS};
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinningWheelProps {
    pub prizes: Vec<Prize>,
    /// Absolute rotation in degrees; the accumulated value is applied as-is
    /// so the CSS transition always moves forward from the previous stop.
    pub rotation: f64,
    pub is_spinning: bool,
    pub on_spin: Callback<()>,
}

/// The wheel itself: conic-gradient disc, fixed pointer, centre spin button
/// and the decorative side lever. Spin resolution lives in the page; this
/// component only renders state and raises the trigger.
#[function_component(SpinningWheel)]
pub fn spinning_wheel(props: &SpinningWheelProps) -> Html {
    let lever_pulled = use_state(|| false);
    let lever_reset = use_mut_ref(|| None::<Timeout>);

    let trigger = {
        let on_spin = props.on_spin.clone();
        let is_spinning = props.is_spinning;
        let lever_pulled = lever_pulled.clone();
        let lever_reset = lever_reset.clone();
        Callback::from(move |_: ()| {
            if is_spinning {
                return;
            }
            lever_pulled.set(true);
            let lever_pulled = lever_pulled.clone();
            *lever_reset.borrow_mut() = Some(Timeout::new(LEVER_RESET_MS, move || {
                lever_pulled.set(false);
            }));
            on_spin.emit(());
        })
    };

    let segment = 360.0 / props.prizes.len() as f64;
    let gradient = props
        .prizes
        .iter()
        .map(|p| p.color.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let disc_style = format!(
        "transform: rotate({}deg); transition: transform {}ms ease-out; \
         background: conic-gradient(from 270deg at 50% 50%, {});",
        props.rotation, SPIN_DURATION_MS, gradient
    );

    let button_click = trigger.reform(|_: MouseEvent| ());
    let lever_click = {
        let trigger = trigger.clone();
        let is_spinning = props.is_spinning;
        Callback::from(move |_: MouseEvent| {
            if !is_spinning {
                trigger.emit(());
            }
        })
    };
    let lever_keydown = {
        let trigger = trigger.clone();
        let is_spinning = props.is_spinning;
        Callback::from(move |event: KeyboardEvent| {
            if !is_spinning && (event.key() == "Enter" || event.key() == " ") {
                trigger.emit(());
            }
        })
    };

    html! {
        <div class="flex items-center justify-center gap-4 sm:gap-6 md:gap-8">
            <div class="relative w-[320px] h-[320px] sm:w-[450px] sm:h-[450px] md:w-[500px] md:h-[500px] lg:w-[600px] lg:h-[600px] flex items-center justify-center">
                // Pointer
                <div
                    class="absolute top-0 left-1/2 -translate-x-1/2 -translate-y-[25px] z-20"
                    style="filter: drop-shadow(0 4px 6px rgba(0,0,0,0.4));"
                >
                    <svg width="40" height="60" viewBox="0 0 40 60" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <path d="M20 60L38 25C41.3137 17.0264 35.0264 8 26 8H14C4.9736 8 -1.31371 17.0264 2 25L20 60Z" fill="#f59e0b"/>
                        <path d="M20 57L5 26C2.68629 19.7015 7.29849 13 14 13H26C32.7015 13 37.3137 19.7015 35 26L20 57Z" fill="#fcd34d"/>
                        <circle cx="20" cy="18" r="8" fill="#f59e0b" stroke="#fef3c7" stroke-width="3"/>
                    </svg>
                </div>

                <div
                    class="relative w-full h-full rounded-full border-8 border-gray-700 shadow-2xl"
                    style={disc_style}
                >
                    { for props.prizes.iter().enumerate().map(|(index, prize)| {
                        let angle = index as f64 * segment;
                        html! {
                            <div
                                key={prize.name.clone()}
                                class="absolute top-0 left-0 w-full h-full"
                                style={format!("transform: rotate({angle}deg);")}
                            >
                                <div
                                    class="absolute top-0 left-1/2 -translate-x-1/2 w-1 h-1/2 bg-gray-600 opacity-50"
                                    style="transform-origin: bottom center;"
                                ></div>
                                <div
                                    class="absolute top-0 left-1/2 -translate-x-1/2 w-1/2 h-1/2 flex items-center justify-center"
                                    style="transform-origin: bottom left;"
                                >
                                    <span
                                        class="text-white font-bold text-sm sm:text-base md:text-lg lg:text-xl transform -rotate-90 translate-x-1/4"
                                        style="text-shadow: 1px 1px 2px rgba(0,0,0,0.7);"
                                    >
                                        { &prize.name }
                                    </span>
                                </div>
                            </div>
                        }
                    })}
                </div>

                // Spin Button
                <button
                    onclick={button_click}
                    disabled={props.is_spinning}
                    class={styles::SPIN_BUTTON}
                    dir="rtl"
                >
                    {"סובב!"}
                </button>
            </div>

            // Lever
            <div class="w-16 h-64 flex-shrink-0" onclick={lever_click}>
                <div
                    class={classes!(
                        "w-full", "h-full", "bg-gray-800", "border-2", "border-gray-700", "rounded-lg", "shadow-inner", "relative", "flex", "justify-center", "pt-5",
                        if props.is_spinning { "cursor-not-allowed" } else { "cursor-pointer group" },
                    )}
                    aria-label="Spin with lever"
                    role="button"
                    tabindex={if props.is_spinning { "-1" } else { "0" }}
                    onkeydown={lever_keydown}
                >
                    <div class="w-3 h-48 bg-gray-900 rounded-full inset-1 shadow-inner"></div>
                    <div class={classes!(
                        "absolute", "top-2", "w-full", "flex", "justify-center", "transition-transform", "duration-200", "ease-out",
                        if *lever_pulled {
                            Some("translate-y-32")
                        } else if props.is_spinning {
                            None
                        } else {
                            Some("group-hover:-translate-y-1")
                        },
                    )}>
                        <div class="w-3 h-24 bg-gradient-to-b from-gray-400 to-gray-600 rounded-full shadow-md relative">
                            <div class="absolute -top-5 left-1/2 -translate-x-1/2 w-10 h-10 rounded-full bg-gradient-to-b from-red-500 to-red-700 border-2 border-red-300 shadow-lg"></div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
