use crate::constants::*;
use crate::core::{load_or_generate, reset_layout, stagger_offsets, StickerEntry};
use crate::dom;
use crate::features::StickerMount;
use crate::storage::LocalStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const WALL_STYLE: [(&str, &str); 7] = [
    ("position", "fixed"),
    ("inset", "0"),
    ("width", "100vw"),
    ("height", "100vh"),
    ("pointer-events", "none"),
    ("z-index", "2"),
    ("overflow", "hidden"),
];

/// Floating sticker wall: the persisted layout and the element it renders into.
pub struct StickerWall {
    document: web::Document,
    wall: web::HtmlElement,
    store: Rc<LocalStore>,
    layout: Vec<StickerEntry>,
    rng: StdRng,
}

impl StickerWall {
    pub fn new(document: &web::Document, mount: StickerMount, store: Rc<LocalStore>) -> Self {
        let mut rng = StdRng::from_entropy();
        let layout = load_or_generate(store.as_ref(), &mut rng);
        let style = mount.wall.style();
        for (prop, value) in WALL_STYLE {
            _ = style.set_property(prop, value);
        }
        Self {
            document: document.clone(),
            wall: mount.wall,
            store,
            layout,
            rng,
        }
    }

    /// Rebuild every sticker element from the current layout.
    pub fn render(&mut self) {
        self.wall.set_inner_html("");
        for i in 0..self.layout.len() {
            let Some(el) = self.build_sticker(&self.layout[i]) else {
                continue;
            };
            _ = self.wall.append_child(&el);

            let stagger = stagger_offsets(&mut self.rng);
            dom::set_timeout(stagger.delay_ms, move || {
                let style = el.style();
                _ = style.set_property("--fx", &format!("{}px", stagger.fx));
                _ = style.set_property("--fy", &format!("{}px", stagger.fy));
            });
        }
    }

    fn build_sticker(&self, st: &StickerEntry) -> Option<web::HtmlElement> {
        let el = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_class_name(&format!("sticker {}", st.cls));
        _ = el.set_attribute("data-id", &st.id);
        el.set_text_content(Some(&st.label));

        let style = el.style();
        _ = style.set_property("left", &format!("{}%", st.left));
        _ = style.set_property("top", &format!("{}%", st.top));
        _ = style.set_property("--fx", &format!("{}px", st.fx));
        _ = style.set_property("--fy", &format!("{}px", st.fy));
        _ = style.set_property("--rot", &st.rot);
        _ = style.set_property("--s", &st.s.to_string());
        _ = style.set_property("--dur", &st.dur);
        _ = style.set_property("--delay", &st.delay);
        _ = style.set_property("pointer-events", "none");
        Some(el)
    }

    /// Replace the layout with a fresh one and redraw.
    pub fn reset(&mut self) {
        self.layout = reset_layout(self.store.as_ref(), &mut self.rng);
        self.render();
        log::info!("[stickers] layout reset ({} stickers)", self.layout.len());
    }
}

/// Render the wall and hook up the reset button and resize re-render.
pub fn wire(document: &web::Document, wall: StickerWall) -> Rc<RefCell<StickerWall>> {
    let wall = Rc::new(RefCell::new(wall));
    wall.borrow_mut().render();

    let reset_wall = wall.clone();
    let wired = dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        let Some(window) = web::window() else {
            return;
        };
        if !window.confirm_with_message(RESET_CONFIRM_TEXT).unwrap_or(false) {
            return;
        }
        reset_wall.borrow_mut().reset();
        _ = window.alert_with_message(RESET_DONE_TEXT);
    });
    if !wired {
        log::info!("[stickers] no #{}; reset disabled", RESET_BUTTON_ID);
    }

    let resize_wall = wall.clone();
    dom::add_window_listener("resize", move || resize_wall.borrow_mut().render());

    wall
}
