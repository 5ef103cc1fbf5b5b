use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame driver. The tick re-arms itself only while
/// `running` is set; `stop` clears the flag and cancels the pending frame.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut() + 'static) -> Self {
        let running = Rc::new(Cell::new(false));
        let pending = Rc::new(Cell::new(None::<i32>));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let running_tick = running.clone();
        let pending_tick = pending.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            on_frame();
            if running_tick.get() {
                pending_tick.set(request_frame(&tick_clone));
            }
        }) as Box<dyn FnMut()>));

        Self {
            running,
            pending,
            tick,
        }
    }

    /// Arm the loop. A loop that already has a frame pending is left alone.
    pub fn start(&self) {
        self.running.set(true);
        if self.pending.get().is_none() {
            self.pending.set(request_frame(&self.tick));
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| log::error!("requestAnimationFrame failed: {:?}", e))
        .ok()
}
