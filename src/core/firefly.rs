use super::constants::*;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// One drifting firefly. Positions are the top-left corner of the body, in
/// CSS pixels relative to the canvas.
#[derive(Clone, Debug)]
pub struct Firefly {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub wobble: f32,
    pub is_target: bool,
    /// Repel feedback. Starts above 1.0 and decays to zero; renderer clamps.
    pub flash: f32,
}

impl Firefly {
    pub fn spawn<R: Rng + ?Sized>(viewport: Vec2, rng: &mut R) -> Self {
        let pos = Vec2::new(rng.gen::<f32>() * viewport.x, rng.gen::<f32>() * viewport.y);
        let vel = Vec2::new(
            (rng.gen::<f32>() - 0.5) * FIREFLY_SPEED_SPAN,
            (rng.gen::<f32>() - 0.5) * FIREFLY_SPEED_SPAN,
        );
        Self {
            pos,
            vel,
            size: FIREFLY_SIZE,
            wobble: rng.gen::<f32>() * TAU,
            is_target: false,
            flash: 0.0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size * 0.5)
    }

    #[inline]
    pub fn hit_radius(&self) -> f32 {
        (self.size + HIT_RADIUS_PAD).max(HIT_RADIUS_MIN)
    }

    #[inline]
    pub fn is_hit_by(&self, pointer: Vec2) -> bool {
        self.center().distance(pointer) < self.hit_radius()
    }

    /// One frame of drift, flash decay and toroidal wrap.
    pub fn advance(&mut self, viewport: Vec2) {
        self.wobble += WOBBLE_STEP;
        self.pos.x += self.vel.x + self.wobble.sin() * WOBBLE_AMP_X;
        self.pos.y += self.vel.y + self.wobble.cos() * WOBBLE_AMP_Y;
        self.flash = (self.flash - FLASH_DECAY_PER_FRAME).max(0.0);
        self.pos.x = wrap_axis(self.pos.x, viewport.x);
        self.pos.y = wrap_axis(self.pos.y, viewport.y);
    }

    /// Shove the firefly away from `pointer` and bias its drift the same way.
    pub fn repel<R: Rng + ?Sized>(&mut self, pointer: Vec2, rng: &mut R) {
        // measured from the centre, like the hit test; always a unit vector
        let dir = (self.center() - pointer)
            .try_normalize()
            .unwrap_or_else(|| Vec2::from_angle(rng.gen::<f32>() * TAU));
        let impulse = rng.gen_range(REPEL_IMPULSE_MIN..REPEL_IMPULSE_MAX);
        self.pos += dir * impulse * REPEL_DISPLACEMENT_GAIN;
        self.vel += dir * impulse * REPEL_VELOCITY_GAIN;
        self.flash = FLASH_ON_REPEL;
    }

    pub fn clamp_into(&mut self, viewport: Vec2) {
        let lo = Vec2::splat(RESIZE_CLAMP_INSET);
        let hi = (viewport - lo).max(lo);
        self.pos = self.pos.clamp(lo, hi);
    }
}

/// Keeps `v` in `[-WRAP_MARGIN, extent + WRAP_MARGIN)`.
#[inline]
fn wrap_axis(v: f32, extent: f32) -> f32 {
    if v < -WRAP_MARGIN {
        extent + WRAP_MARGIN - WRAP_REENTRY_INSET
    } else if v >= extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        v
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Revealed { message: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// A reveal is already showing; the press was not hit-tested.
    Ignored,
    Missed,
    Repelled { count: usize },
    Revealed { message: usize },
}

/// The whole mini-game state: fireflies, the current target and whether
/// motion is running or halted behind a reveal.
pub struct FireflyField {
    fireflies: Vec<Firefly>,
    target: Option<usize>,
    viewport: Vec2,
    state: RunState,
}

impl FireflyField {
    pub fn new<R: Rng + ?Sized>(count: usize, viewport: Vec2, rng: &mut R) -> Self {
        let fireflies = (0..count)
            .map(|_| Firefly::spawn(viewport, rng))
            .collect::<Vec<_>>();
        let mut field = Self {
            fireflies,
            target: None,
            viewport,
            state: RunState::Running,
        };
        field.assign_target(rng);
        field
    }

    pub fn fireflies(&self) -> &[Firefly] {
        &self.fireflies
    }

    pub fn fireflies_mut(&mut self) -> &mut [Firefly] {
        &mut self.fireflies
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Text of the message currently revealed, if any.
    pub fn revealed_message(&self) -> Option<&'static str> {
        match self.state {
            RunState::Revealed { message } => MESSAGES.get(message).copied(),
            RunState::Running => None,
        }
    }

    /// Move the target flag to `index`. Out-of-range indices leave no
    /// firefly marked.
    pub fn set_target(&mut self, index: usize) -> bool {
        for f in &mut self.fireflies {
            f.is_target = false;
        }
        match self.fireflies.get_mut(index) {
            Some(f) => {
                f.is_target = true;
                self.target = Some(index);
                true
            }
            None => {
                self.target = None;
                false
            }
        }
    }

    fn assign_target<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.fireflies.is_empty() {
            self.set_target(0);
            return;
        }
        let index = rng.gen_range(0..self.fireflies.len());
        self.set_target(index);
    }

    /// Step every firefly one frame. Returns false (and moves nothing)
    /// while a reveal is showing.
    pub fn advance(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let viewport = self.viewport;
        for f in &mut self.fireflies {
            f.advance(viewport);
        }
        true
    }

    /// Hit-test a press in canvas space. Fireflies are scanned in order: the
    /// first hit on the target reveals and stops the scan, every other hit is
    /// repelled and the scan carries on.
    pub fn pointer_down<R: Rng + ?Sized>(&mut self, pointer: Vec2, rng: &mut R) -> PointerOutcome {
        if !self.is_running() {
            return PointerOutcome::Ignored;
        }
        let mut repelled = 0usize;
        for f in self.fireflies.iter_mut() {
            if !f.is_hit_by(pointer) {
                continue;
            }
            if f.is_target {
                let message = rng.gen_range(0..MESSAGES.len());
                self.state = RunState::Revealed { message };
                return PointerOutcome::Revealed { message };
            }
            f.repel(pointer, rng);
            repelled += 1;
        }
        if repelled > 0 {
            PointerOutcome::Repelled { count: repelled }
        } else {
            PointerOutcome::Missed
        }
    }

    /// Dismiss the reveal: pick a fresh target and resume motion.
    pub fn close_reveal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        self.assign_target(rng);
        self.state = RunState::Running;
        self.target
    }

    /// Adopt a new viewport, pulling stranded fireflies back inside. The
    /// target and motion state are untouched.
    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        for f in &mut self.fireflies {
            f.clamp_into(viewport);
        }
    }
}
