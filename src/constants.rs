/// Page wiring and presentation constants for the browser front-end.
///
/// Mount-point ids, timer cadences and the firefly palette live here so the
/// DOM-facing modules read as plain wiring.
// Mount points
pub const GAME_CANVAS_ID: &str = "gameCanvas";
pub const NOTE_POPUP_ID: &str = "notePopup";
pub const NOTE_MESSAGE_ID: &str = "noteMsg";
pub const NOTE_CLOSE_ID: &str = "backToGame";
pub const NOTE_CONTENT_SELECTOR: &str = ".noteContent";
pub const STICKER_WALL_ID: &str = "stickerWall";
pub const RESET_BUTTON_ID: &str = "resetBtn";

// Music controls
pub const HOME_AUDIO_ID: &str = "bgm";
pub const GAME_AUDIO_ID: &str = "bgmGame";
pub const PLAY_BUTTON_ID: &str = "playBgm";
pub const AUDIO_OVERLAY_ID: &str = "audioOverlay";
pub const ENABLE_AUDIO_ID: &str = "enableAudio";
pub const RESUME_BUTTON_ID: &str = "resumeMusicBtn";

// Timers (ms)
pub const BGM_PERSIST_INTERVAL_MS: i32 = 1000;
pub const PLAY_BUTTON_SYNC_DELAY_MS: i32 = 200;

// Copy
pub const RESET_CONFIRM_TEXT: &str = "Reset sticker layout to a fresh random layout?";
pub const RESET_DONE_TEXT: &str = "Sticker layout reset.";
pub const PLAY_LABEL: &str = "▶ Play Music";
pub const PAUSE_LABEL: &str = "⏸ Pause Music";
pub const RESUME_LABEL: &str = "▶ Resume Music";
pub const ENABLE_LABEL: &str = "▶ Enable Audio";

// Firefly palette (rgb, alpha supplied per frame)
pub const GLOW_RGB: (u8, u8, u8) = (250, 220, 140);
pub const TARGET_BODY_RGB: (u8, u8, u8) = (224, 184, 90);
pub const BODY_RGB: (u8, u8, u8) = (255, 220, 168);
pub const HEAD_RGB: (u8, u8, u8) = (165, 127, 58);

// Alpha mapping: base + flash * gain
pub const TARGET_BODY_ALPHA: f32 = 1.0;
pub const BODY_ALPHA: f32 = 0.9;
pub const BODY_FLASH_GAIN: f32 = 0.6;
pub const TARGET_GLOW_ALPHA: f32 = 0.10;
pub const TARGET_GLOW_FLASH_GAIN: f32 = 0.06;
pub const GLOW_ALPHA: f32 = 0.08;
pub const GLOW_FLASH_GAIN: f32 = 0.04;
pub const HEAD_ALPHA: f32 = 0.9;
pub const HEAD_FLASH_GAIN: f32 = 0.4;
pub const WING_ALPHA: f32 = 0.45;
pub const WING_FLASH_GAIN: f32 = 0.12;
pub const GLOW_PAD: f32 = 3.0; // halo extends this far around the body
