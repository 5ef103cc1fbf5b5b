#![cfg(target_arch = "wasm32")]
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
pub mod core;
mod dom;
mod events;
mod features;
mod frame;
mod game;
mod input;
mod overlay;
mod render;
mod stickers;
mod storage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("firefly-garden starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let store = Rc::new(storage::LocalStore::open());
    let found = features::detect(&document);
    let page = found.page();

    match audio::Bgm::attach(&document, page, store.clone()) {
        Some(bgm) => {
            let bgm = Rc::new(bgm);
            match page {
                features::Page::Home => audio::wire_home(&document, bgm),
                features::Page::Game => audio::wire_game(&document, bgm),
            }
        }
        None => log::warn!("[bgm] no audio element; music disabled"),
    }

    match found.game {
        Ok(mount) => {
            game::start(&document, mount);
        }
        Err(e) => log::info!("[game] not on this page: {}", e),
    }

    match found.stickers {
        Ok(mount) => {
            let wall = stickers::StickerWall::new(&document, mount, store);
            stickers::wire(&document, wall);
        }
        Err(e) => log::warn!("[stickers] skipping: {}", e),
    }

    Ok(())
}
