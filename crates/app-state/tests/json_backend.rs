//! End-to-end tests: `AppStore` over `JsonBackend` with a scripted transport
//! and the real console dialog as notifier.

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use nsemu_app_state::{AppStore, JsonBackend, RpcTransport, StateError, StoreConfig};
use nsemu_console_dialog::SharedConsoleDialog;
use nsemu_protocol::{FirmwareInfo, Method, unknown_game_data};
use serde_json::{Value, json};

/// Transport replaying JSON replies per method, in order.
#[derive(Default)]
struct ScriptedTransport {
    replies: Mutex<HashMap<Method, VecDeque<Value>>>,
    calls: Mutex<Vec<Method>>,
}

impl ScriptedTransport {
    fn reply(&self, method: Method, value: Value) {
        self.replies
            .lock()
            .unwrap()
            .entry(method)
            .or_default()
            .push_back(value);
    }

    fn calls_to(&self, method: Method) -> usize {
        self.calls.lock().unwrap().iter().filter(|m| **m == method).count()
    }
}

impl RpcTransport for ScriptedTransport {
    fn call(
        &self,
        method: Method,
    ) -> Pin<Box<dyn Future<Output = Result<Value, StateError>> + Send + '_>> {
        self.calls.lock().unwrap().push(method);
        let next = self
            .replies
            .lock()
            .unwrap()
            .get_mut(&method)
            .and_then(VecDeque::pop_front);
        Box::pin(async move {
            next.ok_or_else(|| StateError::Transport(format!("no reply scripted for {method}")))
        })
    }
}

fn setup() -> (AppStore, Arc<ScriptedTransport>, SharedConsoleDialog) {
    let transport = Arc::new(ScriptedTransport::default());
    let dialog = SharedConsoleDialog::new();
    let store = AppStore::new(
        Arc::new(JsonBackend::new(transport.clone())),
        Arc::new(dialog.clone()),
    );
    (store, transport, dialog)
}

#[tokio::test]
async fn firmware_refresh_success() {
    let (store, transport, dialog) = setup();
    transport.reply(
        Method::GetAvailableFirmwareInfos,
        json!({"code": 0, "data": [{"version": "1.2.0"}, {"version": "1.1.0"}]}),
    );

    store.update_available_firmware_infos().await;

    assert_eq!(
        store.available_firmware_infos(),
        vec![
            FirmwareInfo::with_version("1.2.0"),
            FirmwareInfo::with_version("1.1.0"),
        ]
    );
    assert_eq!(store.target_firmware_version().as_deref(), Some("1.2.0"));
    assert!(!dialog.is_open());
}

#[tokio::test]
async fn firmware_refresh_failure_opens_dialog_once() {
    let (store, transport, dialog) = setup();
    transport.reply(
        Method::GetAvailableFirmwareInfos,
        json!({"code": 0, "data": [{"version": "1.2.0"}]}),
    );
    transport.reply(
        Method::GetAvailableFirmwareInfos,
        json!({"code": 5, "data": null}),
    );

    store.update_available_firmware_infos().await;
    store.update_available_firmware_infos().await;

    assert!(store.target_firmware_version().is_none());
    assert_eq!(
        store.available_firmware_infos(),
        vec![FirmwareInfo::with_version("1.2.0")]
    );
    assert!(dialog.is_open());
    assert_eq!(
        dialog.message_texts(),
        vec!["firmware information failed to load"]
    );
}

#[tokio::test]
async fn firmware_refresh_accepts_non_string_extra_fields() {
    let (store, transport, dialog) = setup();
    transport.reply(
        Method::GetAvailableFirmwareInfos,
        json!({"code": 0, "data": [
            {"version": "1.2.0", "size": 327155712, "name": null},
            {"version": 11, "url": {"mirror": "https://example.invalid/11.zip"}},
        ]}),
    );

    store.update_available_firmware_infos().await;

    let infos = store.available_firmware_infos();
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].field("size").unwrap(), 327155712);
    assert_eq!(infos[1].version, "11");
    assert_eq!(store.target_firmware_version().as_deref(), Some("1.2.0"));
    assert!(!dialog.is_open());
    assert!(dialog.message_texts().is_empty());
}

#[tokio::test]
async fn firmware_refresh_with_undecodable_list_fails() {
    let (store, transport, dialog) = setup();
    transport.reply(
        Method::GetAvailableFirmwareInfos,
        json!({"code": 0, "data": [{"name": "no version here"}]}),
    );

    store.update_available_firmware_infos().await;

    assert!(store.target_firmware_version().is_none());
    assert!(store.available_firmware_infos().is_empty());
    assert_eq!(dialog.lock().len(), 1);
}

#[tokio::test]
async fn game_data_failure_then_recovery() {
    let (store, transport, dialog) = setup();
    transport.reply(Method::GetGameData, json!({"code": 1, "data": "boom"}));
    transport.reply(
        Method::GetGameData,
        json!({"code": 0, "data": {"0100000000010000": "Super Mario Odyssey"}}),
    );

    assert_eq!(store.load_game_data().await, unknown_game_data());
    assert_eq!(store.game_data(), unknown_game_data());

    let data = store.load_game_data().await;
    assert_eq!(data["0100000000010000"], "Super Mario Odyssey");

    // Cached now: no third request even though none is scripted.
    assert_eq!(store.load_game_data().await, data);
    assert_eq!(transport.calls_to(Method::GetGameData), 2);
    assert!(!dialog.is_open());
}

#[tokio::test]
async fn game_data_transport_down_yields_placeholder() {
    let (store, transport, _dialog) = setup();

    assert_eq!(store.load_game_data().await, unknown_game_data());
    assert_eq!(store.load_game_data().await, unknown_game_data());
    assert_eq!(transport.calls_to(Method::GetGameData), 2);
}

#[tokio::test]
async fn config_file_drives_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(
        &path,
        r#"{"firmware_load_failed_message": "could not fetch firmware list"}"#,
    )
    .unwrap();
    let config = StoreConfig::load_from(&path).unwrap();

    let transport = Arc::new(ScriptedTransport::default());
    let dialog = SharedConsoleDialog::new();
    let store = AppStore::with_config(
        Arc::new(JsonBackend::new(transport.clone())),
        Arc::new(dialog.clone()),
        config,
    );

    store.update_available_firmware_infos().await;

    assert_eq!(dialog.message_texts(), vec!["could not fetch firmware list"]);
    assert_eq!(transport.calls_to(Method::GetAvailableFirmwareInfos), 1);
}
