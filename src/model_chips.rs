use yew::prelude::*;

/// id, display name, highlighted
type Chip = (&'static str, &'static str, bool);

const FEATURE_CHIPS: [Chip; 6] = [
    ("online", "Online", false),
    ("genius", "Genius", false),
    ("super-genius", "Super Genius", false),
    ("online-genius", "Online Genius", false),
    ("deep-research", "Deep Research", false),
    ("deepseek", "DeepSeek V3.2", true),
];

const MODEL_CHIPS: [Chip; 6] = [
    ("gemini-flash", "Gemini 2.5 Flash Lite", true),
    ("gemini-pro", "Gemini 3 Pro", false),
    ("claude", "Claude 4.5 Opus", false),
    ("chatgpt", "ChatGPT 4o", false),
    ("grok", "Grok 4", false),
    ("gpt5", "GPT-5.2", false),
];

fn chip_classes(selected: bool, highlighted: bool) -> &'static str {
    if selected {
        "bg-blue-500 text-white border-blue-500"
    } else if highlighted {
        "bg-white border-blue-300 text-gray-700 hover:bg-gray-100 hover:border-blue-500"
    } else {
        "bg-white border-gray-300 text-gray-700 hover:bg-gray-100"
    }
}

#[function_component(ModelChips)]
pub fn model_chips() -> Html {
    // Features multi-select; models are exclusive.
    let selected_features = use_state(|| vec!["online"]);
    let selected_model = use_state(|| "gemini-flash");

    html! {
        <div class="flex flex-col items-center gap-4 w-full max-w-3xl mx-auto">
            // Feature chips
            <div class="flex flex-wrap justify-center gap-2">
                {
                    FEATURE_CHIPS.iter().map(|(id, name, highlighted)| {
                        let selected = selected_features.contains(id);
                        let onclick = {
                            let selected_features = selected_features.clone();
                            let id = *id;
                            Callback::from(move |_: MouseEvent| {
                                let mut features = (*selected_features).clone();
                                if let Some(pos) = features.iter().position(|f| *f == id) {
                                    features.remove(pos);
                                } else {
                                    features.push(id);
                                }
                                selected_features.set(features);
                            })
                        };

                        html! {
                            <button
                                key={*id}
                                {onclick}
                                class={classes!(
                                    "flex",
                                    "items-center",
                                    "gap-2",
                                    "px-4",
                                    "py-2",
                                    "rounded-full",
                                    "text-sm",
                                    "border",
                                    "transition-all",
                                    chip_classes(selected, *highlighted)
                                )}
                            >
                                {*name}
                                if selected {
                                    <span class="ml-1">{"×"}</span>
                                }
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>

            // Model chips
            <div class="flex flex-wrap justify-center gap-2">
                {
                    MODEL_CHIPS.iter().map(|(id, name, highlighted)| {
                        let selected = *selected_model == *id;
                        let onclick = {
                            let selected_model = selected_model.clone();
                            let id = *id;
                            Callback::from(move |_: MouseEvent| selected_model.set(id))
                        };

                        html! {
                            <button
                                key={*id}
                                {onclick}
                                class={classes!(
                                    "flex",
                                    "items-center",
                                    "gap-2",
                                    "px-4",
                                    "py-2",
                                    "rounded-full",
                                    "text-sm",
                                    "border",
                                    "transition-all",
                                    chip_classes(selected, *highlighted)
                                )}
                            >
                                {*name}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>

            <button class="px-5 py-2.5 rounded-full text-sm bg-gray-100 border border-gray-300 text-gray-700 hover:bg-gray-200 transition-colors">
                {"Chat Presets"}
            </button>
        </div>
    }
}
