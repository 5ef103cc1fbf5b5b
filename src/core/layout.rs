use super::constants::*;
use super::store::{load_json, save_json, KeyValueStore, StoreError};
use rand::Rng;
use serde::{Deserialize, Serialize};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// One placed sticker. Field names and string encodings follow what the
/// page stylesheet consumes (`--rot: 12deg`, `--dur: 5.10s`), so a stored
/// layout can be applied without conversion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickerEntry {
    pub id: String,
    pub cls: String,
    pub label: String,
    /// Percent of wall width.
    pub left: f64,
    /// Percent of wall height.
    pub top: f64,
    pub fx: i32,
    pub fy: i32,
    pub dur: String,
    pub delay: String,
    pub rot: String,
    pub s: f64,
}

impl StickerEntry {
    pub fn random<R: Rng + ?Sized>(kind: (&str, &str), rng: &mut R) -> Self {
        let (cls, label) = kind;
        Self {
            id: random_id(rng),
            cls: cls.to_string(),
            label: label.to_string(),
            left: round2(uniform(rng, STICKER_LEFT_PCT)),
            top: round2(uniform(rng, STICKER_TOP_PCT)),
            fx: uniform(rng, STICKER_FLOAT_PX).floor() as i32,
            fy: uniform(rng, STICKER_FLOAT_PX).floor() as i32,
            dur: format!("{:.2}s", uniform(rng, STICKER_DUR_SEC)),
            delay: format!("{:.2}s", uniform(rng, STICKER_DELAY_SEC)),
            rot: format!("{}deg", uniform(rng, STICKER_ROT_DEG).floor() as i32),
            s: round2(uniform(rng, STICKER_SCALE)),
        }
    }
}

/// Fresh float offsets applied once, some time after a sticker is placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub fx: i32,
    pub fy: i32,
    pub delay_ms: i32,
}

pub fn stagger_offsets<R: Rng + ?Sized>(rng: &mut R) -> Stagger {
    Stagger {
        fx: uniform(rng, STAGGER_FLOAT_PX).floor() as i32,
        fy: uniform(rng, STAGGER_FLOAT_PX).floor() as i32,
        delay_ms: uniform(rng, STAGGER_DELAY_MS).floor() as i32,
    }
}

/// Seven lowercase base-36 characters.
pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..STICKER_ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

pub fn generate_layout<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<StickerEntry> {
    (0..count)
        .map(|_| {
            let kind = STICKER_CATALOG[rng.gen_range(0..STICKER_CATALOG.len())];
            StickerEntry::random(kind, rng)
        })
        .collect()
}

/// Stored layout, if present and non-empty. The entries are reused as-is,
/// whatever screen they were generated on.
pub fn load_layout<S: KeyValueStore + ?Sized>(store: &S) -> Option<Vec<StickerEntry>> {
    load_json::<S, Vec<StickerEntry>>(store, STICKER_STATE_KEY).filter(|l| !l.is_empty())
}

pub fn save_layout<S: KeyValueStore + ?Sized>(
    store: &S,
    layout: &[StickerEntry],
) -> Result<(), StoreError> {
    save_json(store, STICKER_STATE_KEY, layout)
}

/// Restore the stored layout or generate a new one, then persist whichever
/// was chosen.
pub fn load_or_generate<S, R>(store: &S, rng: &mut R) -> Vec<StickerEntry>
where
    S: KeyValueStore + ?Sized,
    R: Rng + ?Sized,
{
    let layout = match load_layout(store) {
        Some(layout) => {
            log::info!("[stickers] restored {} stickers", layout.len());
            layout
        }
        None => {
            log::info!("[stickers] generating {} stickers", STICKER_COUNT);
            generate_layout(STICKER_COUNT, rng)
        }
    };
    if let Err(e) = save_layout(store, &layout) {
        log::debug!("[stickers] save skipped: {}", e);
    }
    layout
}

/// Drop the stored layout and replace it with a freshly generated one.
pub fn reset_layout<S, R>(store: &S, rng: &mut R) -> Vec<StickerEntry>
where
    S: KeyValueStore + ?Sized,
    R: Rng + ?Sized,
{
    if let Err(e) = store.remove(STICKER_STATE_KEY) {
        log::debug!("[stickers] remove skipped: {}", e);
    }
    let layout = generate_layout(STICKER_COUNT, rng);
    log::info!("[stickers] reset to {} fresh stickers", layout.len());
    if let Err(e) = save_layout(store, &layout) {
        log::debug!("[stickers] save skipped: {}", e);
    }
    layout
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, range: (f64, f64)) -> f64 {
    range.0 + rng.gen::<f64>() * (range.1 - range.0)
}

#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
