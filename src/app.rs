use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::chat_input::ChatInput;
use crate::feedback::{Category, FeedbackDraft, FeedbackLog};
use crate::feedback_display::FeedbackDisplay;
use crate::feedback_form::FeedbackForm;
use crate::header::Header;
use crate::model_chips::ModelChips;
use crate::sidebar::Sidebar;

fn submit_draft(log: &UseStateHandle<FeedbackLog>, draft: FeedbackDraft) {
    let mut updated = (**log).clone();
    match updated.submit(draft, js_sys::Date::now()) {
        Ok(record) => log::info!("feedback submitted: id={}", record.id),
        Err(err) => {
            // The form disables its submit control for invalid drafts, so
            // this only fires for drafts arriving through other paths.
            log::warn!("feedback rejected: {}", err);
        }
    }
    log.set(updated);
}

#[function_component(App)]
pub fn app() -> Html {
    let sidebar_open = use_state(|| true);
    let log = use_state(|| FeedbackLog::with_samples(js_sys::Date::now()));

    // Keyboard shortcut for Cmd/Ctrl+B to toggle the sidebar
    {
        let sidebar_open = sidebar_open.clone();
        use_effect_with((), move |_| {
            let window = window().expect("no global `window` exists");
            let document = window.document().expect("should have a document");

            let listener = EventListener::new(&document, "keydown", move |event| {
                if let Some(keyboard_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                    if (keyboard_event.meta_key() || keyboard_event.ctrl_key())
                        && keyboard_event.key() == "b"
                    {
                        keyboard_event.prevent_default();
                        sidebar_open.set(!*sidebar_open);
                    }
                }
            });

            move || drop(listener)
        });
    }

    let on_toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: ()| {
            sidebar_open.set(!*sidebar_open);
        })
    };

    let on_submit = {
        let log = log.clone();
        Callback::from(move |draft: FeedbackDraft| {
            submit_draft(&log, draft);
        })
    };

    // Quick entries from the hero input file as unrated General Feedback.
    let on_quick_send = {
        let log = log.clone();
        Callback::from(move |message: String| {
            let draft = FeedbackDraft {
                message,
                category: Some(Category::GeneralFeedback),
                ..FeedbackDraft::default()
            };
            submit_draft(&log, draft);
        })
    };

    let on_clear_all = {
        let log = log.clone();
        Callback::from(move |_: ()| {
            let mut updated = (*log).clone();
            updated.clear_all();
            log.set(updated);
        })
    };

    html! {
        <div class="flex h-screen overflow-hidden bg-gray-50">
            <Sidebar is_open={*sidebar_open} on_toggle={on_toggle_sidebar.clone()} />

            <div class="flex-1 flex flex-col min-w-0">
                <Header on_menu_click={on_toggle_sidebar} />

                <main class="flex-1 flex flex-col overflow-y-auto">
                    if log.is_empty() {
                        <div class="flex-1 flex flex-col items-center justify-center gap-8 px-4 py-8">
                            <div class="text-center">
                                <h1 class="text-5xl md:text-6xl font-bold mb-4 text-gray-900">
                                    {"Feedback Hub"}
                                </h1>
                                <p class="text-lg text-gray-500 max-w-xl mx-auto">
                                    {"Collect valuable customer feedback to improve your products \
                                      and services. Share your thoughts and help us make things better."}
                                </p>
                            </div>
                            <ModelChips />
                            <ChatInput on_send={on_quick_send} />
                        </div>
                    }

                    <div class="flex-1 px-4 py-6">
                        <FeedbackDisplay
                            records={log.records().to_vec()}
                            on_clear_all={on_clear_all}
                        />
                    </div>

                    <div class="sticky bottom-0 bg-gray-50 pt-8">
                        <FeedbackForm on_submit={on_submit} />
                    </div>
                </main>
            </div>
        </div>
    }
}
