use crate::constants::{NOTE_CLOSE_ID, NOTE_POPUP_ID};
use crate::dom;
use crate::game::Game;
use crate::overlay;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Close the note from the back button or a click on the backdrop itself.
pub fn wire_note_close(game: &Game) {
    let game_btn = game.clone();
    if !dom::add_click_listener(&game.document, NOTE_CLOSE_ID, move || game_btn.close()) {
        log::warn!("[game] missing #{}; backdrop click still closes", NOTE_CLOSE_ID);
    }

    let Some(popup) = game.document.get_element_by_id(NOTE_POPUP_ID) else {
        return;
    };
    let game_bd = game.clone();
    let popup_target = popup.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el == popup_target)
            .unwrap_or(false);
        if on_backdrop && overlay::is_note_open(&game_bd.document) {
            game_bd.close();
        }
    }) as Box<dyn FnMut(_)>);
    _ = popup.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
