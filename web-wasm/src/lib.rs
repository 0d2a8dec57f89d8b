//! Portfolio page interactivity (Leptos + WASM)

pub mod app;
pub mod components;
mod dom;
mod page;
mod settings;
pub mod storage;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = settings::load_page_config();

    page::start_typing_effect(&config.typing);
    page::apply_skill_bars();
    page::bind_nav_toggle();

    // ギャラリーが動かなくてもページの他の部分はそのまま使える
    if let Err(e) = app::mount(config.gallery) {
        log::warn!(target: "page", "project gallery disabled: {}", e);
    }
}
