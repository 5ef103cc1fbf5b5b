// Shared tuning constants for the firefly field, sticker layout and music state.

// Firefly body
pub const FIREFLY_SIZE: f32 = 7.0; // square body edge, CSS px
pub const FIREFLY_COUNT: usize = 12;
pub const FIREFLY_SPEED_SPAN: f32 = 0.35; // initial speed drawn from (r - 0.5) * span

// Organic drift
pub const WOBBLE_STEP: f32 = 0.03; // phase advance per frame
pub const WOBBLE_AMP_X: f32 = 0.3; // sin(phase) contribution on x
pub const WOBBLE_AMP_Y: f32 = 0.25; // cos(phase) contribution on y

// Flash feedback
pub const FLASH_DECAY_PER_FRAME: f32 = 0.06;
pub const FLASH_ON_REPEL: f32 = 1.2; // above 1.0 on purpose; renderer clamps

// Viewport bounds
pub const WRAP_MARGIN: f32 = 10.0; // toroidal wrap slack beyond each edge
pub const WRAP_REENTRY_INSET: f32 = 1.0; // far-edge re-entry sits this far inside the bound
pub const RESIZE_CLAMP_INSET: f32 = 6.0; // positions clamped this far inside on resize

// Hit testing
pub const HIT_RADIUS_MIN: f32 = 12.0;
pub const HIT_RADIUS_PAD: f32 = 4.0; // added to body size

// Repel impulse
pub const REPEL_IMPULSE_MIN: f32 = 6.0;
pub const REPEL_IMPULSE_MAX: f32 = 10.0;
pub const REPEL_DISPLACEMENT_GAIN: f32 = 4.0; // instantaneous shove = impulse * gain
pub const REPEL_VELOCITY_GAIN: f32 = 0.02; // lasting drift = impulse * gain

pub const MESSAGES: [&str; 5] = [
    "Sometimes you test my patience so much… and then one tiny smile from you and I’m acting hopelessly in love again. know life hasn’t always been soft with you… but you still show up & love so beautifully.",
    "I love you Babii",
    "Even after everything we survived… the fights, the fears. you still pull me close like I’m your safest place. That kind of desire is rare.",
    "Remember our long rides? You acting cool, me holding you like my whole life depends on it.. cinematic stuff tbh.",
    "No matter how much drama we go through, you still call me morni and suddenly I forget all my attitude. It’s unfair and effective.",
];

// Sticker layout
pub const STICKER_COUNT: usize = 25;
pub const STICKER_ID_LEN: usize = 7;

/// (css class, glyph) pairs the layout draws from, with replacement.
pub const STICKER_CATALOG: [(&str, &str); 9] = [
    ("pastelStar", "✩"),
    ("pastelHeart", "❤"),
    ("pastelMoon", "🌙"),
    ("retroStar", "★"),
    ("retroPixel", "◼"),
    ("kawaiiBear", "ʕ•ᴥ•ʔ"),
    ("sparkle", "✦"),
    ("minecraftFull", "❤"),
    ("pastelPixelHeart", "❤"),
];

pub const STICKER_LEFT_PCT: (f64, f64) = (4.0, 96.0);
pub const STICKER_TOP_PCT: (f64, f64) = (6.0, 92.0);
pub const STICKER_SCALE: (f64, f64) = (0.85, 1.25);
pub const STICKER_ROT_DEG: (f64, f64) = (-30.0, 30.0);
pub const STICKER_FLOAT_PX: (f64, f64) = (-10.0, 10.0);
pub const STICKER_DUR_SEC: (f64, f64) = (4.0, 9.0);
pub const STICKER_DELAY_SEC: (f64, f64) = (0.0, 3.0);

// Micro-stagger applied once after placement
pub const STAGGER_FLOAT_PX: (f64, f64) = (-8.0, 8.0);
pub const STAGGER_DELAY_MS: (f64, f64) = (200.0, 2800.0);

// Storage keys
pub const HOME_BGM_STATE_KEY: &str = "babii_bgm_state_v1";
pub const GAME_BGM_STATE_KEY: &str = "babii_bgm_game_state_v1";
pub const STICKER_STATE_KEY: &str = "babii_stickers_v2";

// Music defaults
pub const BGM_DEFAULT_VOLUME: f64 = 0.9;
pub const BGM_DEFAULT_SRC: &str = "bgm.mp3";
