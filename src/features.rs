use crate::constants::{GAME_CANVAS_ID, STICKER_WALL_ID};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum FeatureUnavailable {
    #[error("missing #{0}")]
    MissingMount(&'static str),
    #[error("#{id} is not a {expected}")]
    WrongElement {
        id: &'static str,
        expected: &'static str,
    },
    #[error("canvas 2d context unavailable")]
    NoContext2d,
}

/// Mount points for the firefly game.
pub struct GameMount {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

/// Mount point for the sticker wall.
pub struct StickerMount {
    pub wall: web::HtmlElement,
}

/// Which page flavour the music controls should take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Game,
}

pub struct Features {
    pub game: Result<GameMount, FeatureUnavailable>,
    pub stickers: Result<StickerMount, FeatureUnavailable>,
}

impl Features {
    /// The game page is whichever page carries a usable canvas.
    pub fn page(&self) -> Page {
        if self.game.is_ok() {
            Page::Game
        } else {
            Page::Home
        }
    }
}

/// Probe the document once at start-up.
pub fn detect(document: &web::Document) -> Features {
    Features {
        game: detect_game(document),
        stickers: detect_stickers(document),
    }
}

fn detect_game(document: &web::Document) -> Result<GameMount, FeatureUnavailable> {
    let canvas = document
        .get_element_by_id(GAME_CANVAS_ID)
        .ok_or(FeatureUnavailable::MissingMount(GAME_CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| FeatureUnavailable::WrongElement {
            id: GAME_CANVAS_ID,
            expected: "canvas",
        })?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or(FeatureUnavailable::NoContext2d)?;
    Ok(GameMount { canvas, ctx })
}

fn detect_stickers(document: &web::Document) -> Result<StickerMount, FeatureUnavailable> {
    let wall = document
        .get_element_by_id(STICKER_WALL_ID)
        .ok_or(FeatureUnavailable::MissingMount(STICKER_WALL_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| FeatureUnavailable::WrongElement {
            id: STICKER_WALL_ID,
            expected: "html element",
        })?;
    Ok(StickerMount { wall })
}
