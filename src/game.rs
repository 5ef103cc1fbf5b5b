use crate::core::{FireflyField, PointerOutcome, FIREFLY_COUNT};
use crate::dom;
use crate::events;
use crate::features::GameMount;
use crate::frame::FrameLoop;
use crate::overlay;
use crate::render;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the firefly page mutates: canvas handles, the field and the
/// RNG feeding it. Shared between the frame loop and input handlers.
pub struct GameSession {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub field: FireflyField,
    rng: StdRng,
}

impl GameSession {
    pub fn new(mount: GameMount) -> Self {
        let viewport = dom::sync_canvas_to_viewport(&mount.canvas, &mount.ctx);
        let mut rng = StdRng::from_entropy();
        let field = FireflyField::new(FIREFLY_COUNT, viewport, &mut rng);
        log::info!(
            "[game] {} fireflies in {:.0}x{:.0}, target={:?}",
            field.fireflies().len(),
            viewport.x,
            viewport.y,
            field.target()
        );
        Self {
            canvas: mount.canvas,
            ctx: mount.ctx,
            field,
            rng,
        }
    }

    pub fn frame(&mut self) {
        self.field.advance();
        render::draw_field(&self.ctx, &self.canvas, &self.field);
    }

    pub fn pointer_down(&mut self, pointer: Vec2) -> PointerOutcome {
        self.field.pointer_down(pointer, &mut self.rng)
    }

    pub fn close_reveal(&mut self) -> Option<usize> {
        self.field.close_reveal(&mut self.rng)
    }

    pub fn resize(&mut self) {
        let viewport = dom::sync_canvas_to_viewport(&self.canvas, &self.ctx);
        self.field.resize(viewport);
        // resizing wipes the backing store; repaint even while halted
        render::draw_field(&self.ctx, &self.canvas, &self.field);
    }
}

/// Handles shared by the page's event wiring.
#[derive(Clone)]
pub struct Game {
    pub document: web::Document,
    pub session: Rc<RefCell<GameSession>>,
    pub frames: Rc<FrameLoop>,
}

impl Game {
    /// Halt motion and show the message the field picked.
    pub fn reveal(&self) {
        self.frames.stop();
        let message = self.session.borrow().field.revealed_message();
        if let Some(text) = message {
            overlay::show_note(&self.document, text);
        }
        log::info!("[game] target found");
    }

    /// Hide the note, move the target and resume motion.
    pub fn close(&self) {
        overlay::hide_note(&self.document);
        let target = self.session.borrow_mut().close_reveal();
        log::info!("[game] new target={:?}", target);
        self.frames.start();
    }
}

pub fn start(document: &web::Document, mount: GameMount) -> Game {
    let session = Rc::new(RefCell::new(GameSession::new(mount)));
    let frame_session = session.clone();
    let frames = Rc::new(FrameLoop::new(move || frame_session.borrow_mut().frame()));
    let game = Game {
        document: document.clone(),
        session,
        frames,
    };
    events::wire_game_handlers(&game);
    game.frames.start();
    game
}
