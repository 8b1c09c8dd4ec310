use web_sys::{HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

const MODES: [&str; 4] = ["Standard", "Creative", "Precise", "Balanced"];

#[derive(Properties, PartialEq)]
pub struct ChatInputProps {
    pub on_send: Callback<String>,
}

#[function_component(ChatInput)]
pub fn chat_input(props: &ChatInputProps) -> Html {
    let message = use_state(String::new);
    let mode = use_state(|| MODES[0]);
    let show_mode_dropdown = use_state(|| false);

    let send = {
        let message = message.clone();
        let on_send = props.on_send.clone();
        Callback::from(move |_: ()| {
            let value = message.trim().to_string();
            if !value.is_empty() {
                on_send.emit(value);
                message.set(String::new());
            }
        })
    };

    let on_input = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(textarea) = e.target_dyn_into::<HtmlTextAreaElement>() {
                message.set(textarea.value());
            }
        })
    };

    let on_keydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send.emit(());
            }
        })
    };

    let on_send_click = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send.emit(()))
    };

    let on_mode_toggle = {
        let show_mode_dropdown = show_mode_dropdown.clone();
        Callback::from(move |_: MouseEvent| {
            show_mode_dropdown.set(!*show_mode_dropdown);
        })
    };

    let has_text = !message.trim().is_empty();

    html! {
        <div class="w-full max-w-4xl mx-auto px-4 pb-6">
            <div class="relative flex items-end gap-2 p-3 bg-white rounded-2xl border border-gray-300 shadow-lg transition-all focus-within:border-blue-400">
                <textarea
                    value={(*message).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    placeholder="Share quick feedback..."
                    rows="1"
                    class="flex-1 resize-none bg-transparent text-gray-900 placeholder:text-gray-400 focus:outline-none py-3 px-2"
                />

                <div class="flex items-center gap-1 shrink-0">
                    // Mode selector
                    <div class="relative">
                        <button
                            onclick={on_mode_toggle}
                            class="flex items-center gap-1.5 px-3 py-2 rounded-lg text-sm text-gray-500 hover:bg-gray-100 transition-colors"
                        >
                            {*mode}
                            <svg
                                width="16"
                                height="16"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                class={classes!(
                                    "transition-transform",
                                    (*show_mode_dropdown).then_some("rotate-180")
                                )}
                            >
                                <polyline points="6 9 12 15 18 9" />
                            </svg>
                        </button>

                        if *show_mode_dropdown {
                            <div class="absolute bottom-full right-0 mb-2 bg-white border border-gray-300 rounded-lg shadow-xl py-1">
                                {
                                    MODES.iter().map(|m| {
                                        let onclick = {
                                            let mode = mode.clone();
                                            let show_mode_dropdown = show_mode_dropdown.clone();
                                            let m = *m;
                                            Callback::from(move |_: MouseEvent| {
                                                mode.set(m);
                                                show_mode_dropdown.set(false);
                                            })
                                        };

                                        html! {
                                            <button
                                                key={*m}
                                                {onclick}
                                                class={classes!(
                                                    "w-full",
                                                    "px-4",
                                                    "py-2",
                                                    "text-left",
                                                    "text-sm",
                                                    "hover:bg-gray-100",
                                                    "transition-colors",
                                                    if *mode == *m { "text-blue-600" } else { "text-gray-900" }
                                                )}
                                            >
                                                {*m}
                                            </button>
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        }
                    </div>

                    // Send
                    <button
                        onclick={on_send_click}
                        disabled={!has_text}
                        class={classes!(
                            "p-2.5",
                            "rounded-lg",
                            "transition-all",
                            if has_text {
                                "bg-blue-500 text-white hover:bg-blue-600"
                            } else {
                                "bg-gray-100 text-gray-400 cursor-not-allowed"
                            }
                        )}
                    >
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <line x1="22" y1="2" x2="11" y2="13" />
                            <polygon points="22 2 15 22 11 13 2 9 22 2" />
                        </svg>
                    </button>
                </div>
            </div>

            <p class="text-center text-xs text-gray-400 mt-3">
                {"Quick feedback is filed under General Feedback."}
            </p>
        </div>
    }
}
