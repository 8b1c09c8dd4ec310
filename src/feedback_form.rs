use gloo::timers::callback::Timeout;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

use crate::feedback::{Category, FeedbackDraft, Sentiment};

/// Simulated network latency before a submission lands, in milliseconds.
const SUBMIT_DELAY_MS: u32 = 800;

#[derive(Properties, PartialEq)]
pub struct FeedbackFormProps {
    pub on_submit: Callback<FeedbackDraft>,
}

fn rating_word(rating: u8) -> &'static str {
    match rating {
        1 => "Poor",
        2 => "Fair",
        3 => "Good",
        4 => "Very Good",
        _ => "Excellent",
    }
}

#[function_component(FeedbackForm)]
pub fn feedback_form(props: &FeedbackFormProps) -> Html {
    let rating = use_state(|| None::<u8>);
    let hover_rating = use_state(|| None::<u8>);
    let sentiment = use_state(Sentiment::default);
    let message = use_state(String::new);
    let category = use_state(|| None::<Category>);
    let submitting = use_state(|| false);

    let can_submit = !message.trim().is_empty() && category.is_some() && !*submitting;

    // Shared submit path for the button and Ctrl+Enter. Disables the
    // control, waits out the simulated delay, then emits and resets.
    let submit = {
        let rating = rating.clone();
        let sentiment = sentiment.clone();
        let message = message.clone();
        let category = category.clone();
        let submitting = submitting.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: ()| {
            if message.trim().is_empty() || category.is_none() || *submitting {
                return;
            }
            submitting.set(true);

            let draft = FeedbackDraft {
                rating: *rating,
                sentiment: *sentiment,
                message: (*message).clone(),
                category: *category,
                user_name: None,
            };

            let rating = rating.clone();
            let sentiment = sentiment.clone();
            let message = message.clone();
            let category = category.clone();
            let submitting = submitting.clone();
            let on_submit = on_submit.clone();
            Timeout::new(SUBMIT_DELAY_MS, move || {
                on_submit.emit(draft);
                rating.set(None);
                sentiment.set(Sentiment::Neutral);
                message.set(String::new());
                category.set(None);
                submitting.set(false);
            })
            .forget();
        })
    };

    let on_message_input = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(textarea) = e.target_dyn_into::<HtmlTextAreaElement>() {
                message.set(textarea.value());
            }
        })
    };

    let on_keydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && e.ctrl_key() {
                e.prevent_default();
                submit.emit(());
            }
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                category.set(Category::from_label(&select.value()));
            }
        })
    };

    let on_submit_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| {
            submit.emit(());
        })
    };

    let shown_rating = (*hover_rating).or(*rating);

    html! {
        <div class="w-full max-w-2xl mx-auto px-4 pb-6">
            <div class="relative flex flex-col gap-4 p-6 bg-white rounded-2xl border border-gray-300 shadow-lg">
                <h2 class="text-2xl font-bold text-center text-gray-900 mb-2">
                    {"Share Your Feedback"}
                </h2>

                // Rating stars
                <div class="flex flex-col items-center gap-3">
                    <p class="text-sm text-gray-500">{"How would you rate your experience?"}</p>
                    <div class="flex gap-1">
                        {
                            (1..=5u8).map(|star| {
                                let filled = shown_rating.map_or(false, |r| r >= star);
                                let onmouseenter = {
                                    let hover_rating = hover_rating.clone();
                                    Callback::from(move |_: MouseEvent| hover_rating.set(Some(star)))
                                };
                                let onmouseleave = {
                                    let hover_rating = hover_rating.clone();
                                    Callback::from(move |_: MouseEvent| hover_rating.set(None))
                                };
                                let onclick = {
                                    let rating = rating.clone();
                                    let sentiment = sentiment.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        rating.set(Some(star));
                                        sentiment.set(Sentiment::from_rating(star));
                                    })
                                };

                                html! {
                                    <button
                                        key={star.to_string()}
                                        {onmouseenter}
                                        {onmouseleave}
                                        {onclick}
                                        class={classes!(
                                            "p-1",
                                            "transition-all",
                                            if filled { "text-yellow-400" } else { "text-gray-400 hover:text-gray-600" }
                                        )}
                                    >
                                        <svg
                                            width="32"
                                            height="32"
                                            viewBox="0 0 24 24"
                                            fill={if filled { "currentColor" } else { "none" }}
                                            stroke="currentColor"
                                            stroke-width="1.5"
                                        >
                                            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
                                        </svg>
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    if let Some(r) = *rating {
                        <p class="text-sm font-medium">{rating_word(r)}</p>
                    }
                </div>

                // Sentiment selector
                <div class="flex flex-col gap-2">
                    <p class="text-sm text-gray-500">{"Overall sentiment"}</p>
                    <div class="flex justify-center gap-4">
                        {
                            [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative].iter().map(|choice| {
                                let selected = *sentiment == *choice;
                                let onclick = {
                                    let sentiment = sentiment.clone();
                                    let choice = *choice;
                                    Callback::from(move |_: MouseEvent| sentiment.set(choice))
                                };
                                let active_classes = match choice {
                                    Sentiment::Positive => "bg-green-100 text-green-700 border border-green-300",
                                    Sentiment::Neutral => "bg-yellow-100 text-yellow-700 border border-yellow-300",
                                    Sentiment::Negative => "bg-red-100 text-red-700 border border-red-300",
                                };

                                html! {
                                    <button
                                        key={choice.label()}
                                        {onclick}
                                        class={classes!(
                                            "flex",
                                            "flex-col",
                                            "items-center",
                                            "gap-1",
                                            "p-3",
                                            "rounded-lg",
                                            "transition-all",
                                            if selected {
                                                active_classes
                                            } else {
                                                "bg-gray-100 text-gray-500 hover:bg-gray-200"
                                            }
                                        )}
                                    >
                                        <span class="text-xs">{choice.label()}</span>
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                // Category selector
                <div class="flex flex-col gap-2">
                    <label class="text-sm text-gray-500">
                        {"Category "}<span class="text-red-600">{"*"}</span>
                    </label>
                    <select
                        onchange={on_category_change}
                        class="px-4 py-3 rounded-lg bg-white border border-gray-300 text-gray-900 focus:outline-none focus:ring-2 focus:ring-blue-500 transition-all"
                    >
                        <option value="" selected={category.is_none()}>{"Select a category"}</option>
                        {
                            Category::ALL.iter().map(|cat| {
                                html! {
                                    <option
                                        key={cat.label()}
                                        value={cat.label()}
                                        selected={*category == Some(*cat)}
                                    >
                                        {cat.label()}
                                    </option>
                                }
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                // Message input
                <div class="flex flex-col gap-2">
                    <label class="text-sm text-gray-500">
                        {"Your feedback "}<span class="text-red-600">{"*"}</span>
                    </label>
                    <textarea
                        value={(*message).clone()}
                        oninput={on_message_input}
                        onkeydown={on_keydown}
                        placeholder="Tell us about your experience..."
                        rows="3"
                        class="w-full px-4 py-3 rounded-lg bg-white border border-gray-300 text-gray-900 placeholder:text-gray-400 focus:outline-none focus:ring-2 focus:ring-blue-500 resize-none transition-all"
                    />
                    <p class="text-xs text-gray-400">
                        {"Press Ctrl+Enter to submit"}
                    </p>
                </div>

                // Submit
                <button
                    onclick={on_submit_click}
                    disabled={!can_submit}
                    class={classes!(
                        "w-full",
                        "py-3.5",
                        "rounded-lg",
                        "font-medium",
                        "transition-all",
                        "flex",
                        "items-center",
                        "justify-center",
                        "gap-2",
                        if can_submit {
                            "bg-blue-500 text-white hover:bg-blue-600"
                        } else {
                            "bg-gray-100 text-gray-400 cursor-not-allowed"
                        }
                    )}
                >
                    if *submitting {
                        {"Submitting..."}
                    } else {
                        {"Submit Feedback"}
                    }
                </button>
            </div>
        </div>
    }
}
