use crate::constants::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const AUDIO_OVERLAY_STYLE: &str = "position:fixed; inset:0; display:none; align-items:center; justify-content:center; z-index:9998; background:linear-gradient(rgba(0,0,0,0.55), rgba(0,0,0,0.55));";
const ENABLE_BUTTON_STYLE: &str = "padding:14px 20px;border-radius:12px;border:0;background:linear-gradient(180deg,#ff6ea3,#ff2e72);font-family: 'Press Start 2P'; font-size:13px; cursor:pointer;";
const RESUME_BUTTON_STYLE: &str = "position: fixed; left: 50%; bottom: 20px; transform: translateX(-50%); z-index:9999; padding:12px 18px; border-radius:12px; font-family: 'Press Start 2P'; cursor:pointer; background: linear-gradient(180deg,#ff9ad2,#ff5ba8); border:2px solid rgba(0,0,0,0.6);";

#[inline]
fn set_display(el: &web::HtmlElement, value: &str) {
    _ = el.style().set_property("display", value);
}

fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

// ---------------- Note popup ----------------

/// Put `message` into the popup and show it, replaying the pop animation.
pub fn show_note(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(NOTE_MESSAGE_ID) {
        el.set_text_content(Some(message));
    }
    let Some(popup) = html_element(document, NOTE_POPUP_ID) else {
        log::warn!("[game] missing #{}; message not shown", NOTE_POPUP_ID);
        return;
    };
    set_display(&popup, "flex");
    if let Ok(Some(content)) = popup.query_selector(NOTE_CONTENT_SELECTOR) {
        let cl = content.class_list();
        _ = cl.remove_1("pop");
        // force a reflow so re-adding the class restarts the animation
        if let Some(h) = content.dyn_ref::<web::HtmlElement>() {
            _ = h.offset_width();
        }
        _ = cl.add_1("pop");
    }
}

#[inline]
pub fn hide_note(document: &web::Document) {
    if let Some(popup) = html_element(document, NOTE_POPUP_ID) {
        set_display(&popup, "none");
    }
}

#[inline]
pub fn is_note_open(document: &web::Document) -> bool {
    html_element(document, NOTE_POPUP_ID)
        .and_then(|p| p.style().get_property_value("display").ok())
        .map(|d| d == "flex")
        .unwrap_or(false)
}

// ---------------- Audio affordances ----------------

/// Reuse or create the full-screen "enable audio" overlay.
pub fn ensure_audio_overlay(document: &web::Document) -> Option<web::HtmlElement> {
    if let Some(el) = html_element(document, AUDIO_OVERLAY_ID) {
        return Some(el);
    }
    let overlay = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    overlay.set_id(AUDIO_OVERLAY_ID);
    _ = overlay.set_attribute("style", AUDIO_OVERLAY_STYLE);
    let button = document.create_element("button").ok()?;
    button.set_id(ENABLE_AUDIO_ID);
    _ = button.set_attribute("style", ENABLE_BUTTON_STYLE);
    button.set_text_content(Some(ENABLE_LABEL));
    _ = overlay.append_child(&button);
    _ = document.body()?.append_child(&overlay);
    Some(overlay)
}

pub fn show_audio_overlay(document: &web::Document) {
    if let Some(el) = html_element(document, AUDIO_OVERLAY_ID) {
        set_display(&el, "flex");
    }
}

pub fn hide_audio_overlay(document: &web::Document) {
    if let Some(el) = html_element(document, AUDIO_OVERLAY_ID) {
        set_display(&el, "none");
    }
}

/// Create the floating "resume music" button. `None` if it is already
/// showing or cannot be created.
pub fn create_resume_button(document: &web::Document) -> Option<web::HtmlElement> {
    if document.get_element_by_id(RESUME_BUTTON_ID).is_some() {
        return None;
    }
    let button = document
        .create_element("button")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    button.set_id(RESUME_BUTTON_ID);
    button.set_text_content(Some(RESUME_LABEL));
    _ = button.set_attribute("style", RESUME_BUTTON_STYLE);
    _ = document.body()?.append_child(&button);
    Some(button)
}

/// Reflect playback state on the play/pause toggle.
pub fn set_play_button(button: &web::HtmlElement, playing: bool) {
    button.set_text_content(Some(if playing { PAUSE_LABEL } else { PLAY_LABEL }));
    _ = button.class_list().toggle_with_force("playing", playing);
}
