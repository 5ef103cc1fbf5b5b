use crate::constants::*;
use crate::core::{BgmState, RestorePlan, BGM_DEFAULT_SRC, BGM_DEFAULT_VOLUME};
use crate::core::{GAME_BGM_STATE_KEY, HOME_BGM_STATE_KEY};
use crate::dom;
use crate::features::Page;
use crate::overlay;
use crate::storage::LocalStore;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// Element ids probed in order; the first is used when creating one.
const HOME_AUDIO_IDS: &[&str] = &[HOME_AUDIO_ID];
const GAME_AUDIO_IDS: &[&str] = &[GAME_AUDIO_ID, HOME_AUDIO_ID];

/// Background music element plus the key its state persists under.
pub struct Bgm {
    audio: web::HtmlAudioElement,
    key: &'static str,
    store: Rc<LocalStore>,
}

impl Bgm {
    /// Reuse the page's `<audio>` element or create one.
    pub fn attach(document: &web::Document, page: Page, store: Rc<LocalStore>) -> Option<Self> {
        let (ids, key) = match page {
            Page::Home => (HOME_AUDIO_IDS, HOME_BGM_STATE_KEY),
            Page::Game => (GAME_AUDIO_IDS, GAME_BGM_STATE_KEY),
        };
        let existing = ids
            .iter()
            .find_map(|id| dom::element_by_id::<web::HtmlAudioElement>(document, id));
        let audio = match existing {
            Some(a) => {
                a.set_loop(true);
                if a.volume() <= 0.0 {
                    a.set_volume(BGM_DEFAULT_VOLUME);
                }
                a
            }
            None => create_audio(document, ids[0])?,
        };
        Some(Self { audio, key, store })
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        !self.audio.paused() && !self.audio.ended()
    }

    pub fn snapshot(&self) -> BgmState {
        BgmState::capture(
            self.audio.paused(),
            self.audio.ended(),
            self.audio.current_time(),
            self.audio.volume(),
        )
    }

    /// Best-effort write of the current state.
    pub fn persist(&self) {
        if let Err(e) = self.snapshot().save(self.store.as_ref(), self.key) {
            log::debug!("[bgm] persist skipped: {}", e);
        }
    }

    pub fn restore_plan(&self) -> RestorePlan {
        let saved = BgmState::load(self.store.as_ref(), self.key);
        RestorePlan::from_saved(saved.as_ref(), self.audio.duration())
    }

    pub fn apply(&self, plan: &RestorePlan) {
        if let Some(t) = plan.seek_to {
            self.audio.set_current_time(t);
        }
        if let Some(v) = plan.volume {
            self.audio.set_volume(v);
        }
    }

    /// Start playback, resolving once the browser accepts or rejects it.
    pub async fn play(&self) -> anyhow::Result<()> {
        let promise: js_sys::Promise = self
            .audio
            .play()
            .map_err(|e| anyhow::anyhow!("play() threw: {:?}", e))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| anyhow::anyhow!("playback rejected: {:?}", e))?;
        Ok(())
    }

    pub fn pause(&self) {
        _ = self.audio.pause();
    }
}

fn create_audio(document: &web::Document, id: &str) -> Option<web::HtmlAudioElement> {
    let audio = document
        .create_element("audio")
        .ok()?
        .dyn_into::<web::HtmlAudioElement>()
        .ok()?;
    audio.set_id(id);
    audio.set_preload("auto");
    audio.set_src(BGM_DEFAULT_SRC);
    audio.set_loop(true);
    audio.set_volume(BGM_DEFAULT_VOLUME);
    _ = document.body()?.append_child(&audio);
    Some(audio)
}

/// Persist once a second and whenever the page is being left.
pub fn wire_persistence(bgm: &Rc<Bgm>) {
    let tick = bgm.clone();
    dom::set_interval(BGM_PERSIST_INTERVAL_MS, move || tick.persist());
    for event in ["pagehide", "beforeunload"] {
        let b = bgm.clone();
        dom::add_window_listener(event, move || b.persist());
    }
}

// ---------------- Home page ----------------

/// Play/pause toggle, autoplay-blocked overlay and restore for the home page.
pub fn wire_home(document: &web::Document, bgm: Rc<Bgm>) {
    let Some(button) = ensure_play_button(document) else {
        log::warn!("[bgm] could not create #{}", PLAY_BUTTON_ID);
        return;
    };
    _ = overlay::ensure_audio_overlay(document);

    {
        let bgm = bgm.clone();
        let button = button.clone();
        let doc = document.clone();
        dom::add_click_listener(document, ENABLE_AUDIO_ID, move || {
            let bgm = bgm.clone();
            let button = button.clone();
            let doc = doc.clone();
            spawn_local(async move {
                if bgm.play().await.is_ok() {
                    overlay::hide_audio_overlay(&doc);
                    overlay::set_play_button(&button, true);
                    bgm.persist();
                }
            });
        });
    }

    {
        let bgm = bgm.clone();
        let button_click = button.clone();
        let doc = document.clone();
        dom::add_click_listener(document, PLAY_BUTTON_ID, move || {
            let bgm = bgm.clone();
            let button = button_click.clone();
            let doc = doc.clone();
            spawn_local(async move {
                if bgm.audio.paused() {
                    match bgm.play().await {
                        Ok(()) => overlay::set_play_button(&button, true),
                        Err(e) => {
                            log::info!("[bgm] {}", e);
                            overlay::show_audio_overlay(&doc);
                        }
                    }
                } else {
                    bgm.pause();
                    overlay::set_play_button(&button, false);
                }
                bgm.persist();
            });
        });
    }

    wire_persistence(&bgm);

    let doc = document.clone();
    let boot_bgm = bgm.clone();
    let boot_button = button.clone();
    spawn_local(async move {
        let plan = boot_bgm.restore_plan();
        boot_bgm.apply(&plan);
        if !plan.autoplay {
            overlay::set_play_button(&boot_button, false);
            overlay::hide_audio_overlay(&doc);
            return;
        }
        match boot_bgm.play().await {
            Ok(()) => {
                overlay::set_play_button(&boot_button, true);
                overlay::hide_audio_overlay(&doc);
                boot_bgm.persist();
            }
            Err(e) => {
                log::info!("[bgm] autoplay blocked: {}", e);
                overlay::set_play_button(&boot_button, false);
                overlay::show_audio_overlay(&doc);
            }
        }
    });

    dom::set_timeout(PLAY_BUTTON_SYNC_DELAY_MS, move || {
        overlay::set_play_button(&button, bgm.is_playing());
    });
}

fn ensure_play_button(document: &web::Document) -> Option<web::HtmlElement> {
    if let Some(b) = dom::element_by_id::<web::HtmlElement>(document, PLAY_BUTTON_ID) {
        return Some(b);
    }
    let button = document
        .create_element("button")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    button.set_id(PLAY_BUTTON_ID);
    button.set_class_name("musicBtn");
    _ = document.body()?.append_child(&button);
    Some(button)
}

// ---------------- Game page ----------------

/// Restore music on the game page, offering a resume button if autoplay is
/// refused.
pub fn wire_game(document: &web::Document, bgm: Rc<Bgm>) {
    wire_persistence(&bgm);

    let doc = document.clone();
    spawn_local(async move {
        let plan = bgm.restore_plan();
        bgm.apply(&plan);
        if !plan.autoplay {
            bgm.persist();
            return;
        }
        match bgm.play().await {
            Ok(()) => bgm.persist(),
            Err(e) => {
                log::info!("[bgm] autoplay blocked: {}", e);
                offer_resume(&doc, bgm);
            }
        }
    });
}

fn offer_resume(document: &web::Document, bgm: Rc<Bgm>) {
    let Some(button) = overlay::create_resume_button(document) else {
        return;
    };
    let button_inner = button.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let bgm = bgm.clone();
        let button = button_inner.clone();
        spawn_local(async move {
            match bgm.play().await {
                Ok(()) => button.remove(),
                Err(e) => log::warn!("[bgm] resume failed: {}", e),
            }
        });
    }) as Box<dyn FnMut()>);
    _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
