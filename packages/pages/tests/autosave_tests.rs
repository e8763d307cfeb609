//! Autosave timer behaviour, driven by tokio's paused clock

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tessera_editor::{ComponentKind, Document, Mutation, Props};
use tessera_pages::{spawn_autosave, AutosaveConfig, PageStore};

fn insert_button(store: &Mutex<PageStore<Document>>) {
    let mut guard = store.lock().unwrap();
    let doc = guard.surface_mut();
    let root = doc.tree().root_id().to_string();
    doc.apply(Mutation::InsertNode {
        parent_id: root,
        index: 0,
        kind: ComponentKind::Button,
        props: Props::new(),
    })
    .unwrap();
}

fn stored_matches_surface(store: &Mutex<PageStore<Document>>) -> bool {
    let guard = store.lock().unwrap();
    guard.active_page().tree.as_ref() == Some(&guard.surface().serialize().unwrap())
}

#[tokio::test(start_paused = true)]
async fn test_autosave_stores_active_page_on_interval() {
    let store = Arc::new(Mutex::new(PageStore::new(Document::new("autosave"))));
    let _handle = spawn_autosave(store.clone(), AutosaveConfig::default());

    insert_button(&store);
    assert!(!stored_matches_surface(&store));

    tokio::time::sleep(Duration::from_millis(3_100)).await;
    assert!(stored_matches_surface(&store));
}

#[tokio::test(start_paused = true)]
async fn test_tick_is_discarded_while_store_is_busy() {
    let store = Arc::new(Mutex::new(PageStore::new(Document::new("busy"))));
    let _handle = spawn_autosave(
        store.clone(),
        AutosaveConfig {
            interval: Duration::from_secs(1),
        },
    );
    insert_button(&store);

    {
        let _busy = store.lock().unwrap();
        tokio::time::sleep(Duration::from_millis(1_500)).await;
    }
    assert!(!stored_matches_surface(&store));

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(stored_matches_surface(&store));
}

#[tokio::test(start_paused = true)]
async fn test_stopping_handle_ends_autosave() {
    let store = Arc::new(Mutex::new(PageStore::new(Document::new("stop"))));
    let handle = spawn_autosave(store.clone(), AutosaveConfig::default());
    handle.stop();

    insert_button(&store);
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(!stored_matches_surface(&store));
}
