use wasm_bindgen::JsValue;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::feedback::{sorted, FeedbackRecord, FeedbackStats, Sentiment, SortOrder};

#[derive(Properties, PartialEq)]
pub struct FeedbackDisplayProps {
    pub records: Vec<FeedbackRecord>,
    pub on_clear_all: Callback<()>,
}

#[function_component(FeedbackDisplay)]
pub fn feedback_display(props: &FeedbackDisplayProps) -> Html {
    let sort_by = use_state(SortOrder::default);

    let on_sort_change = {
        let sort_by = sort_by.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(order) = SortOrder::from_value(&select.value()) {
                    sort_by.set(order);
                }
            }
        })
    };

    let on_clear = {
        let on_clear_all = props.on_clear_all.clone();
        Callback::from(move |_: MouseEvent| {
            on_clear_all.emit(());
        })
    };

    // Stats run over storage order; the sorted snapshot is display-only.
    let stats = FeedbackStats::from_records(&props.records);
    let sorted_records = sorted(&props.records, *sort_by);

    html! {
        <div class="w-full max-w-4xl mx-auto px-4">
            // Header
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4 mb-6">
                <div>
                    <h2 class="text-2xl font-bold text-gray-900">
                        {format!("Feedback ({})", stats.count)}
                    </h2>
                    <p class="text-gray-500 mt-1">{"All collected feedback responses"}</p>
                </div>

                <div class="flex gap-3">
                    <select
                        onchange={on_sort_change}
                        class="px-3 py-2 rounded-lg bg-white border border-gray-300 text-gray-900 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500 transition-all"
                    >
                        {
                            SortOrder::ALL.iter().map(|order| {
                                html! {
                                    <option
                                        key={order.value()}
                                        value={order.value()}
                                        selected={*sort_by == *order}
                                    >
                                        {order.label()}
                                    </option>
                                }
                            }).collect::<Html>()
                        }
                    </select>

                    if !props.records.is_empty() {
                        <button
                            onclick={on_clear}
                            class="px-4 py-2 rounded-lg border border-gray-300 text-red-600 hover:bg-red-50 transition-colors text-sm"
                        >
                            {"Clear All"}
                        </button>
                    }
                </div>
            </div>

            // Stats summary; hidden entirely in the no-data state.
            if stats.count > 0 {
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 mb-6">
                    <div class="bg-white border border-gray-300 rounded-lg p-4">
                        <div class="text-2xl font-bold text-gray-900">{stats.count}</div>
                        <div class="text-sm text-gray-500">{"Total Responses"}</div>
                    </div>
                    <div class="bg-white border border-gray-300 rounded-lg p-4">
                        <div class="text-2xl font-bold text-gray-900">
                            {stats.average_label().unwrap_or_default()}
                        </div>
                        <div class="text-sm text-gray-500">{"Average Rating"}</div>
                    </div>
                    <div class="bg-white border border-gray-300 rounded-lg p-4">
                        <div class="text-2xl font-bold text-gray-900">{stats.positive_count}</div>
                        <div class="text-sm text-gray-500">{"Positive Feedback"}</div>
                    </div>
                </div>
            }

            // Feedback cards
            <div class="space-y-4">
                if sorted_records.is_empty() {
                    <div class="flex flex-col items-center justify-center py-12 text-gray-400">
                        <h3 class="text-lg font-medium mb-2">{"No feedback yet"}</h3>
                        <p class="text-center max-w-md">
                            {"Feedback submissions will appear here once users start sharing their thoughts."}
                        </p>
                    </div>
                } else {
                    {
                        sorted_records.iter().map(|record| {
                            html! {
                                <div
                                    key={record.id.clone()}
                                    class={classes!(
                                        "bg-white",
                                        "border",
                                        "rounded-xl",
                                        "p-5",
                                        "transition-all",
                                        "hover:shadow-lg",
                                        sentiment_border(record.sentiment)
                                    )}
                                >
                                    <div class="flex flex-wrap items-center gap-3 mb-3">
                                        // Stars
                                        <div class="flex items-center gap-2">
                                            {
                                                (1..=5u8).map(|star| {
                                                    let filled = record.rating.map_or(false, |r| r >= star);
                                                    html! {
                                                        <svg
                                                            key={star.to_string()}
                                                            width="16"
                                                            height="16"
                                                            viewBox="0 0 24 24"
                                                            fill={if filled { "currentColor" } else { "none" }}
                                                            stroke="currentColor"
                                                            stroke-width="1.5"
                                                            class={if filled { "text-yellow-400" } else { "text-gray-300" }}
                                                        >
                                                            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
                                                        </svg>
                                                    }
                                                }).collect::<Html>()
                                            }
                                            <span class="text-sm font-medium text-gray-900">
                                                {
                                                    match record.rating {
                                                        Some(r) => format!("{}/5", r),
                                                        None => "Unrated".to_string(),
                                                    }
                                                }
                                            </span>
                                        </div>

                                        // Sentiment badge
                                        <div class={classes!(
                                            "flex",
                                            "items-center",
                                            "gap-1.5",
                                            "px-2.5",
                                            "py-1",
                                            "rounded-full",
                                            "text-xs",
                                            sentiment_badge(record.sentiment)
                                        )}>
                                            {record.sentiment.label()}
                                        </div>

                                        // Date
                                        <div class="text-xs text-gray-500">
                                            {format_date(record.timestamp_ms)}
                                        </div>
                                    </div>

                                    // Category
                                    <div class="flex items-center gap-2 mb-3">
                                        <span class="text-sm bg-gray-100 px-2.5 py-1 rounded-full">
                                            {record.category.label()}
                                        </span>
                                    </div>

                                    // Message
                                    <p class="text-gray-900 leading-relaxed">
                                        {&record.message}
                                    </p>

                                    if let Some(name) = &record.user_name {
                                        <div class="mt-3 text-sm text-gray-500">
                                            {format!("— {}", name)}
                                        </div>
                                    }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                }
            </div>
        </div>
    }
}

fn sentiment_border(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "border-green-300",
        Sentiment::Negative => "border-red-300",
        Sentiment::Neutral => "border-yellow-300",
    }
}

fn sentiment_badge(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "bg-green-100 text-green-700",
        Sentiment::Negative => "bg-red-100 text-red-700",
        Sentiment::Neutral => "bg-yellow-100 text-yellow-700",
    }
}

fn format_date(timestamp_ms: f64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(timestamp_ms));
    String::from(date.to_locale_date_string("en-US", &JsValue::UNDEFINED))
}
