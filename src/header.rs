use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_menu_click: Callback<()>,
}

const NAV_ITEMS: [(&str, bool); 5] = [
    ("Feedback", true),
    ("Analytics", false),
    ("Customers", false),
    ("Insights", false),
    ("Settings", false),
];

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_menu = {
        let on_menu_click = props.on_menu_click.clone();
        Callback::from(move |_: MouseEvent| {
            on_menu_click.emit(());
        })
    };

    html! {
        <header class="flex items-center justify-between px-4 py-3 border-b border-gray-300 bg-white sticky top-0 z-30">
            // Menu toggle
            <button
                onclick={on_menu}
                class="p-2 rounded-lg hover:bg-gray-100 transition-colors"
            >
                <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                    <line x1="4" y1="6" x2="20" y2="6" />
                    <line x1="4" y1="12" x2="20" y2="12" />
                    <line x1="4" y1="18" x2="20" y2="18" />
                </svg>
            </button>

            // Navigation
            <nav class="hidden md:flex items-center gap-1">
                {
                    NAV_ITEMS.iter().map(|(label, active)| {
                        html! {
                            <button
                                key={*label}
                                class={classes!(
                                    "px-4",
                                    "py-2",
                                    "rounded-lg",
                                    "text-sm",
                                    "font-medium",
                                    "transition-colors",
                                    if *active {
                                        "text-gray-900"
                                    } else {
                                        "text-gray-500 hover:text-gray-900 hover:bg-gray-100"
                                    }
                                )}
                            >
                                {*label}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </nav>

            // Actions
            <div class="flex items-center gap-2">
                <button class="hidden sm:flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium text-gray-500 hover:text-gray-900 hover:bg-gray-100 transition-colors">
                    {"Login"}
                </button>
                <button class="flex items-center gap-2 px-4 py-2.5 rounded-lg bg-blue-500 text-white text-sm font-medium hover:bg-blue-600 transition-colors">
                    {"New Feedback"}
                </button>
            </div>
        </header>
    }
}
