// Host-side tests for pure input and paint helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod firefly {
        include!("../src/core/firefly.rs");
    }
    pub use firefly::*;
}
mod input {
    include!("../src/input.rs");
}
mod render {
    include!("../src/render.rs");
}

use crate::core::Firefly;
use glam::Vec2;
use input::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use render::*;

fn firefly(is_target: bool, flash: f32) -> Firefly {
    let mut rng = StdRng::seed_from_u64(7);
    let mut f = Firefly::spawn(Vec2::new(100.0, 100.0), &mut rng);
    f.is_target = is_target;
    f.flash = flash;
    f
}

#[test]
fn client_coordinates_are_offset_by_canvas_origin() {
    let p = client_to_canvas(Vec2::new(120.0, 80.0), Vec2::new(20.0, 30.0));
    assert_eq!(p, Vec2::new(100.0, 50.0));
    // canvas scrolled partly off-screen
    let p = client_to_canvas(Vec2::new(5.0, 5.0), Vec2::new(-40.0, -10.0));
    assert_eq!(p, Vec2::new(45.0, 15.0));
}

#[test]
fn paint_is_clamped_even_with_overshooting_flash() {
    let paint = FireflyPaint::for_firefly(&firefly(false, 1.2));
    for a in [paint.glow, paint.body, paint.head, paint.wings] {
        assert!((0.0..=1.0).contains(&a), "alpha {a}");
    }
    assert_eq!(paint.body, 1.0);
}

#[test]
fn flash_brightens_every_layer() {
    let idle = FireflyPaint::for_firefly(&firefly(false, 0.0));
    let lit = FireflyPaint::for_firefly(&firefly(false, 0.5));
    assert!(lit.glow > idle.glow);
    assert!(lit.body > idle.body);
    assert!(lit.head > idle.head);
    assert!(lit.wings > idle.wings);
}

#[test]
fn target_is_only_subtly_different() {
    let decoy = FireflyPaint::for_firefly(&firefly(false, 0.0));
    let target = FireflyPaint::for_firefly(&firefly(true, 0.0));
    assert!(target.body >= decoy.body);
    assert!((target.glow - decoy.glow).abs() < 0.05);
    assert_eq!(target.wings, decoy.wings);
}

#[test]
fn rgba_formats_css_color() {
    assert_eq!(rgba((250, 220, 140), 0.1), "rgba(250,220,140,0.100)");
    assert_eq!(rgba((0, 0, 0), 1.0), "rgba(0,0,0,1.000)");
}
