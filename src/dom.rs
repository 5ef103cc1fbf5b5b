use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up `id` and downcast it, `None` if absent or of another type.
#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        true
    } else {
        false
    }
}

/// Register a window-level listener for the page's lifetime.
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// One-shot timer. The closure is released to the JS side.
pub fn set_timeout(delay_ms: i32, handler: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::once_into_js(handler);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref(),
            delay_ms,
        );
    }
}

/// Repeating timer for the page's lifetime.
pub fn set_interval(period_ms: i32, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        );
        closure.forget();
    }
}

/// Inner window size in CSS pixels.
pub fn viewport_css() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}

/// Size the canvas backing store to the viewport at device resolution and
/// scale the 2D context so drawing happens in CSS pixels. Returns the CSS
/// size the engine should use.
pub fn sync_canvas_to_viewport(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> Vec2 {
    let css = viewport_css();
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    canvas.set_width(((css.x as f64) * dpr).floor().max(1.0) as u32);
    canvas.set_height(((css.y as f64) * dpr).floor().max(1.0) as u32);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css.x));
    _ = style.set_property("height", &format!("{}px", css.y));
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    css
}
