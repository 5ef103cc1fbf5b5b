use glam::Vec2;
use web_sys as web;

/// Pointer position in canvas CSS pixels, the space fireflies live in.
#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
    )
}

/// Translate viewport-relative client coordinates by the canvas origin.
#[inline]
pub fn client_to_canvas(client: Vec2, canvas_origin: Vec2) -> Vec2 {
    client - canvas_origin
}
