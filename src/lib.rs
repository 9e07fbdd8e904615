#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod constants;
pub mod controllers;
pub mod dom;
pub mod model;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("listings-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Each controller is wired independently: a missing id disables that
    // controller only, and is surfaced in the console instead of silently
    // aborting the rest of the wiring.
    if let Err(e) = controllers::dropdown::wire(&document) {
        log::error!("dropdown wiring failed: {e}");
    }
    if let Err(e) = controllers::nav::wire(&document) {
        log::error!("nav wiring failed: {e}");
    }
    controllers::alert::wire(&window, &document);

    log::info!("controllers wired");
    Ok(())
}
