//! Persistence across restarts
//!
//! Runs the page controller over the redb-backed store and real catalog
//! files to verify state survives reopening the database.

use std::sync::Arc;
use std::time::Duration;

use dailycomfort_core::storage::{AUTH_KEY, TODAY_MESSAGE_INDEX_KEY};
use dailycomfort_core::{
    load_catalog, AccessDecision, Config, Environment, FixedClock, KeyValueStore, Location,
    MessageCatalog, PageController, ScriptedRandom, Storage,
};
use tempfile::TempDir;

fn controller_over(db_path: &std::path::Path, random: ScriptedRandom) -> PageController {
    let store = Storage::new(db_path).unwrap();
    let env = Environment {
        store: Arc::new(store),
        clock: Arc::new(FixedClock::at("2024-05-01")),
        random: Arc::new(random),
    };
    PageController::new(env, Config::default())
}

fn type_pin(ctl: &mut PageController, pin: &str) {
    for c in pin.chars() {
        let mut next = ctl.login().field().visible();
        next.push(c);
        ctl.pin_input(&next);
    }
}

#[tokio::test]
async fn test_login_and_daily_message_survive_restart() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("comfort.redb");
    let catalog_path = temp_dir.path().join("messages.json");
    std::fs::write(
        &catalog_path,
        r#"{ "daily": ["A", "B", "C"], "extra": ["X"], "comfort": ["Y"] }"#,
    )
    .unwrap();

    // First run: log in, then visit home
    {
        let mut ctl = controller_over(&db_path, ScriptedRandom::with_indices([2]));
        ctl.load(Location::Login).unwrap();
        type_pin(&mut ctl, "010523");
        ctl.submit_pin().unwrap();

        assert_eq!(ctl.load(Location::Home).unwrap(), AccessDecision::Granted);
        let load = load_catalog(&catalog_path).await;
        assert!(!load.is_fallback());
        ctl.install_catalog(load).unwrap();
        ctl.advance(Duration::from_millis(300)).unwrap();
        assert_eq!(ctl.message().text(), "C");
    }

    // Second run: still authenticated, same message
    {
        let mut ctl = controller_over(&db_path, ScriptedRandom::with_indices([0]));
        assert_eq!(ctl.load(Location::Home).unwrap(), AccessDecision::Granted);
        ctl.install_catalog(load_catalog(&catalog_path).await).unwrap();
        ctl.advance(Duration::from_millis(300)).unwrap();
        assert_eq!(ctl.message().text(), "C");
        assert!(!ctl.daily().unwrap().fresh);
    }

    let store = Storage::new(&db_path).unwrap();
    assert_eq!(store.get(AUTH_KEY).unwrap().as_deref(), Some("true"));
    assert_eq!(store.get(TODAY_MESSAGE_INDEX_KEY).unwrap().as_deref(), Some("2"));
}

#[tokio::test]
async fn test_shrunken_catalog_regenerates_stale_index() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("comfort.redb");

    {
        let store = Storage::new(&db_path).unwrap();
        store.set(AUTH_KEY, "true").unwrap();
        store.set("lastMessageDate", "2024-05-01").unwrap();
        store.set(TODAY_MESSAGE_INDEX_KEY, "9").unwrap();
    }

    // Missing catalog file: fallback has only four daily messages
    let mut ctl = controller_over(&db_path, ScriptedRandom::with_indices([3]));
    ctl.load(Location::Home).unwrap();
    let load = load_catalog(temp_dir.path().join("missing.json")).await;
    assert!(load.is_fallback());
    ctl.install_catalog(load).unwrap();
    ctl.advance(Duration::from_millis(300)).unwrap();

    assert_eq!(ctl.message().text(), MessageCatalog::fallback().daily[3]);
    assert!(ctl.daily().unwrap().fresh);
}

#[tokio::test]
async fn test_logout_persists() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("comfort.redb");

    {
        let store = Storage::new(&db_path).unwrap();
        store.set(AUTH_KEY, "true").unwrap();
    }

    {
        let mut ctl = controller_over(&db_path, ScriptedRandom::new());
        ctl.load(Location::Home).unwrap();
        ctl.logout().unwrap();
    }

    let mut ctl = controller_over(&db_path, ScriptedRandom::new());
    assert_eq!(
        ctl.load(Location::Home).unwrap(),
        AccessDecision::RedirectToLogin
    );
}
