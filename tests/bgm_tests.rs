// Host-side tests for persisted music state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod store {
        include!("../src/core/store.rs");
    }
    pub mod bgm {
        include!("../src/core/bgm.rs");
    }
}

use crate::core::bgm::*;
use crate::core::constants::{BGM_DEFAULT_VOLUME, GAME_BGM_STATE_KEY, HOME_BGM_STATE_KEY};
use crate::core::store::{KeyValueStore, MemoryStore};

#[test]
fn capture_floors_time_and_rounds_volume() {
    let st = BgmState::capture(false, false, 42.87, 0.456);
    assert!(st.playing);
    assert_eq!(st.current_time, 42);
    assert_eq!(st.volume, 0.46);
}

#[test]
fn capture_reports_paused_or_ended_as_not_playing() {
    assert!(!BgmState::capture(true, false, 1.0, 0.9).playing);
    assert!(!BgmState::capture(false, true, 1.0, 0.9).playing);
}

#[test]
fn capture_sanitizes_odd_element_values() {
    let st = BgmState::capture(true, false, f64::NAN, 1.7);
    assert_eq!(st.current_time, 0);
    assert_eq!(st.volume, 1.0);
    assert_eq!(BgmState::capture(true, false, -3.0, -0.2).current_time, 0);
}

#[test]
fn state_round_trips_through_store() {
    let store = MemoryStore::new();
    for (v, t) in [(0.0, 0.0), (0.333, 12.9), (0.9, 301.2), (1.0, 7.0)] {
        let written = BgmState::capture(false, false, t, v);
        written.save(&store, HOME_BGM_STATE_KEY).unwrap();
        let read = BgmState::load(&store, HOME_BGM_STATE_KEY).expect("state present");
        assert_eq!(read, written);
        assert!((read.volume - v).abs() <= 0.005 + 1e-9);

        let plan = RestorePlan::from_saved(Some(&read), 200.0);
        assert_eq!(plan.volume, Some(read.volume));
        assert!(plan.seek_to.unwrap() <= 200.0);
        assert!(plan.seek_to.unwrap() >= 0.0);
    }
}

#[test]
fn persisted_json_uses_page_field_names() {
    let store = MemoryStore::new();
    BgmState::capture(false, false, 5.5, 0.9)
        .save(&store, GAME_BGM_STATE_KEY)
        .unwrap();
    let raw = store.get(GAME_BGM_STATE_KEY).unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["playing"], serde_json::json!(true));
    assert_eq!(v["currentTime"], serde_json::json!(5));
    assert_eq!(v["volume"], serde_json::json!(0.9));
}

#[test]
fn pages_keep_independent_state() {
    let store = MemoryStore::new();
    BgmState::capture(true, false, 10.0, 0.2)
        .save(&store, HOME_BGM_STATE_KEY)
        .unwrap();
    BgmState::capture(false, false, 99.0, 0.8)
        .save(&store, GAME_BGM_STATE_KEY)
        .unwrap();
    let home = BgmState::load(&store, HOME_BGM_STATE_KEY).unwrap();
    let game = BgmState::load(&store, GAME_BGM_STATE_KEY).unwrap();
    assert!(!home.playing);
    assert!(game.playing);
    assert_eq!(home.current_time, 10);
    assert_eq!(game.current_time, 99);
}

#[test]
fn malformed_state_is_discarded() {
    let store = MemoryStore::new();
    store.set(HOME_BGM_STATE_KEY, "not json").unwrap();
    assert_eq!(BgmState::load(&store, HOME_BGM_STATE_KEY), None);
    store
        .set(HOME_BGM_STATE_KEY, r#"{"playing":"yes","currentTime":1,"volume":0.5}"#)
        .unwrap();
    assert_eq!(BgmState::load(&store, HOME_BGM_STATE_KEY), None);
    assert_eq!(BgmState::load(&store, GAME_BGM_STATE_KEY), None);
}

#[test]
fn partial_state_keeps_the_fields_it_has() {
    let store = MemoryStore::new();
    store.set(HOME_BGM_STATE_KEY, r#"{"playing":false}"#).unwrap();
    let st = BgmState::load(&store, HOME_BGM_STATE_KEY).expect("partial record kept");
    assert!(!st.playing);
    assert_eq!(st.current_time, 0);
    assert_eq!(st.volume, BGM_DEFAULT_VOLUME);

    let plan = RestorePlan::from_saved(Some(&st), 120.0);
    assert!(!plan.autoplay);
    assert_eq!(plan.seek_to, Some(0.0));

    store
        .set(GAME_BGM_STATE_KEY, r#"{"playing":true,"currentTime":17}"#)
        .unwrap();
    let st = BgmState::load(&store, GAME_BGM_STATE_KEY).expect("partial record kept");
    let plan = RestorePlan::from_saved(Some(&st), 120.0);
    assert!(plan.autoplay);
    assert_eq!(plan.seek_to, Some(17.0));
    assert_eq!(plan.volume, Some(BGM_DEFAULT_VOLUME));
}

#[test]
fn no_saved_state_means_fresh_autoplay() {
    let plan = RestorePlan::from_saved(None, f64::NAN);
    assert!(plan.autoplay);
    assert_eq!(plan.seek_to, None);
    assert_eq!(plan.volume, None);
}

#[test]
fn paused_state_restores_position_without_autoplay() {
    let st = BgmState {
        playing: false,
        current_time: 30,
        volume: 0.4,
    };
    let plan = RestorePlan::from_saved(Some(&st), 120.0);
    assert!(!plan.autoplay);
    assert_eq!(plan.seek_to, Some(30.0));
    assert_eq!(plan.volume, Some(0.4));
}

#[test]
fn seek_is_clamped_to_known_duration() {
    let st = BgmState {
        playing: true,
        current_time: 500,
        volume: 0.9,
    };
    assert_eq!(RestorePlan::from_saved(Some(&st), 180.5).seek_to, Some(180.5));
    // unknown duration: trust the saved time
    assert_eq!(RestorePlan::from_saved(Some(&st), f64::NAN).seek_to, Some(500.0));
    assert_eq!(RestorePlan::from_saved(Some(&st), 0.0).seek_to, Some(500.0));
    assert!(RestorePlan::from_saved(Some(&st), 180.5).autoplay);
}
