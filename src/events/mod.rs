pub mod pointer;
pub mod popup;

pub use pointer::{wire_pointerdown, wire_resize};
pub use popup::wire_note_close;

use crate::game::Game;

pub fn wire_game_handlers(game: &Game) {
    wire_pointerdown(game);
    wire_note_close(game);
    wire_resize(game);
}
