mod app;
mod chat_input;
mod feedback_display;
mod feedback_form;
mod header;
mod model_chips;
mod sidebar;

pub mod feedback;

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
