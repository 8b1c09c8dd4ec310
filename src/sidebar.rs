use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::feedback::{group_by_date, SessionList};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub is_open: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let sessions = use_state(SessionList::with_current_session);
    let search_query = use_state(String::new);

    let on_search = {
        let search_query = search_query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                search_query.set(input.value());
            }
        })
    };

    let on_new_session = {
        let sessions = sessions.clone();
        Callback::from(move |_: MouseEvent| {
            let mut list = (*sessions).clone();
            list.new_session();
            sessions.set(list);
        })
    };

    let on_delete_all = {
        let sessions = sessions.clone();
        Callback::from(move |_: MouseEvent| {
            let mut list = (*sessions).clone();
            list.delete_all();
            sessions.set(list);
        })
    };

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| {
            on_toggle.emit(());
        })
    };

    let filtered = sessions.filtered(&search_query);
    let grouped = group_by_date(&filtered);
    let no_matches = filtered.is_empty();

    html! {
        <aside
            class={classes!(
                "relative",
                "z-50",
                "h-full",
                "flex",
                "flex-col",
                "bg-gray-50",
                "border-r",
                "border-gray-300",
                "transition-all",
                "duration-300",
                if props.is_open { "w-64" } else { "w-0" }
            )}
        >
            <div class={classes!(
                "flex",
                "flex-col",
                "h-full",
                "w-64",
                "overflow-hidden",
                (!props.is_open).then_some("invisible")
            )}>
                // Header
                <div class="flex items-center justify-between p-4 border-b border-gray-300">
                    <div class="flex items-center gap-2">
                        <button
                            onclick={on_toggle}
                            class="p-2 rounded-lg hover:bg-gray-200 transition-colors"
                        >
                            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                                <polyline points="15 18 9 12 15 6" />
                            </svg>
                        </button>
                        <h2 class="font-semibold text-gray-900">{"Feedback Sessions"}</h2>
                    </div>
                    <button
                        onclick={on_new_session}
                        class="p-2 rounded-lg hover:bg-gray-200 transition-colors"
                        title="New session"
                    >
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                            <line x1="12" y1="5" x2="12" y2="19" />
                            <line x1="5" y1="12" x2="19" y2="12" />
                        </svg>
                    </button>
                </div>

                // Search
                <div class="p-3">
                    <input
                        type="text"
                        placeholder="Search sessions..."
                        value={(*search_query).clone()}
                        oninput={on_search}
                        class="w-full px-4 py-2.5 rounded-lg bg-white border border-gray-300 text-sm text-gray-900 placeholder:text-gray-400 focus:outline-none focus:ring-2 focus:ring-blue-500 transition-all"
                    />
                </div>

                // Session list
                <div class="flex-1 overflow-y-auto px-3">
                    {
                        grouped.iter().map(|(date, bucket)| {
                            html! {
                                <div key={date.clone()} class="mb-4">
                                    <p class="text-xs font-medium text-gray-500 px-2 mb-2">
                                        {date}
                                    </p>
                                    <div class="space-y-1">
                                        {
                                            bucket.iter().map(|session| {
                                                let is_active = sessions.is_active(&session.id);
                                                let onclick = {
                                                    let sessions = sessions.clone();
                                                    let id = session.id.clone();
                                                    Callback::from(move |_: MouseEvent| {
                                                        let mut list = (*sessions).clone();
                                                        list.select(id.clone());
                                                        sessions.set(list);
                                                    })
                                                };

                                                html! {
                                                    <button
                                                        key={session.id.clone()}
                                                        {onclick}
                                                        class={classes!(
                                                            "w-full",
                                                            "flex",
                                                            "items-center",
                                                            "gap-3",
                                                            "px-3",
                                                            "py-2.5",
                                                            "rounded-lg",
                                                            "text-left",
                                                            "text-sm",
                                                            "transition-all",
                                                            if is_active {
                                                                "bg-blue-100 text-gray-900"
                                                            } else {
                                                                "text-gray-600 hover:bg-gray-200"
                                                            }
                                                        )}
                                                    >
                                                        <div class="flex-1 truncate">
                                                            <div class="font-medium">{&session.title}</div>
                                                            <div class="text-xs text-gray-500">
                                                                {format!("{} feedback items", session.feedback_count)}
                                                            </div>
                                                        </div>
                                                    </button>
                                                }
                                            }).collect::<Html>()
                                        }
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }

                    if no_matches {
                        <div class="flex flex-col items-center justify-center py-8 text-gray-400">
                            <p class="text-sm">{"No sessions found"}</p>
                        </div>
                    }
                </div>

                // Footer
                <div class="p-3 border-t border-gray-300">
                    <button
                        onclick={on_delete_all}
                        class="w-full flex items-center justify-center gap-2 px-4 py-2.5 rounded-lg border border-gray-300 text-sm text-red-600 hover:bg-red-50 transition-colors"
                    >
                        {"Delete All Sessions"}
                    </button>
                </div>
            </div>
        </aside>
    }
}
