use crate::constants::*;
use crate::core::{Firefly, FireflyField};
use web_sys as web;

/// Per-firefly fill alphas for one frame, all clamped to [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireflyPaint {
    pub glow: f32,
    pub body: f32,
    pub head: f32,
    pub wings: f32,
}

impl FireflyPaint {
    pub fn for_firefly(f: &Firefly) -> Self {
        let (glow_base, glow_gain, body_base) = if f.is_target {
            (TARGET_GLOW_ALPHA, TARGET_GLOW_FLASH_GAIN, TARGET_BODY_ALPHA)
        } else {
            (GLOW_ALPHA, GLOW_FLASH_GAIN, BODY_ALPHA)
        };
        Self {
            glow: (glow_base + f.flash * glow_gain).clamp(0.0, 1.0),
            body: (body_base + f.flash * BODY_FLASH_GAIN).clamp(0.0, 1.0),
            head: (HEAD_ALPHA + f.flash * HEAD_FLASH_GAIN).clamp(0.0, 1.0),
            wings: (WING_ALPHA + f.flash * WING_FLASH_GAIN).clamp(0.0, 1.0),
        }
    }
}

#[inline]
pub fn rgba(rgb: (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({},{},{},{:.3})", rgb.0, rgb.1, rgb.2, alpha)
}

/// Clear the backing store and paint every firefly. Drawing happens in CSS
/// pixels; the context transform carries the device pixel ratio.
pub fn draw_field(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    field: &FireflyField,
) {
    ctx.save();
    _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    ctx.restore();
    for f in field.fireflies() {
        draw_firefly(ctx, f);
    }
}

fn draw_firefly(ctx: &web::CanvasRenderingContext2d, f: &Firefly) {
    let paint = FireflyPaint::for_firefly(f);
    let x = f.pos.x as f64;
    let y = f.pos.y as f64;
    let s = f.size as f64;
    let pad = GLOW_PAD as f64;

    ctx.save();
    ctx.set_image_smoothing_enabled(false);

    ctx.set_fill_style_str(&rgba(GLOW_RGB, paint.glow));
    ctx.fill_rect(x - pad, y - pad, s + pad * 2.0, s + pad * 2.0);

    let body_rgb = if f.is_target { TARGET_BODY_RGB } else { BODY_RGB };
    ctx.set_fill_style_str(&rgba(body_rgb, paint.body));
    ctx.fill_rect(x, y, s, s);

    ctx.set_fill_style_str(&rgba(HEAD_RGB, paint.head));
    ctx.fill_rect(x, y - 1.0, s, 1.0);

    ctx.set_fill_style_str(&rgba((255, 255, 255), paint.wings));
    ctx.fill_rect(x - 2.0, y + 1.0, 1.0, s - 1.0);
    ctx.fill_rect(x + s + 1.0, y + 1.0, 1.0, s - 1.0);

    ctx.restore();
}
