use crate::core::PointerOutcome;
use crate::game::Game;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointerdown(game: &Game) {
    let game_ptr = game.clone();
    let canvas = game.session.borrow().canvas.clone();
    let canvas_for_listener = canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        ev.prevent_default();
        let pos = input::pointer_canvas_css(&ev, &canvas);
        let outcome = game_ptr.session.borrow_mut().pointer_down(pos);
        match outcome {
            PointerOutcome::Revealed { .. } => game_ptr.reveal(),
            PointerOutcome::Repelled { count } => {
                log::debug!("[pointer] repelled {} at ({:.0},{:.0})", count, pos.x, pos.y);
            }
            PointerOutcome::Missed | PointerOutcome::Ignored => {}
        }
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "pointerdown",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn wire_resize(game: &Game) {
    let session = game.session.clone();
    crate::dom::add_window_listener("resize", move || session.borrow_mut().resize());
}
