#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rusty_contacts::prelude::{AppError, AppState, Config, IdPolicy, PersistMode};
use rusty_contacts::{open_manager, server};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<(), AppError>>,
}

pub fn storage_path(dir: &Path) -> PathBuf {
    dir.join("contacts.json")
}

pub async fn start(dir: &Path) -> TestServer {
    start_with(storage_path(dir), PersistMode::Immediate, IdPolicy::Monotonic).await
}

pub async fn start_with(
    storage_path: PathBuf,
    persist_mode: PersistMode,
    id_policy: IdPolicy,
) -> TestServer {
    let config = Config {
        storage_path,
        persist_mode,
        id_policy,
        ..Config::default()
    };
    let manager = open_manager(&config);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server::serve(listener, AppState::new(manager), async move {
        let _ = rx.await;
    }));

    TestServer {
        base_url: format!("http://{addr}"),
        client: reqwest::Client::new(),
        shutdown: Some(tx),
        handle,
    }
}

impl TestServer {
    /// Stops the server and waits until pending writes reach the file.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle
            .await
            .expect("server task")
            .expect("server shut down cleanly");
    }

    pub async fn get(&self, path: &str) -> (u16, Value) {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("send request");
        read(response).await
    }

    pub async fn delete(&self, path: &str) -> (u16, Value) {
        let response = self
            .client
            .delete(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("send request");
        read(response).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (u16, Value) {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("send request");
        read(response).await
    }

    pub async fn put(&self, path: &str, body: Value) -> (u16, Value) {
        let response = self
            .client
            .put(format!("{}{path}", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("send request");
        read(response).await
    }

    pub async fn add(&self, first_name: &str, last_name: &str, phone: &str) -> (u16, Value) {
        self.post("/contact/add", contact(first_name, last_name, phone))
            .await
    }
}

pub fn contact(first_name: &str, last_name: &str, phone: &str) -> Value {
    json!({"firstName": first_name, "lastName": last_name, "phone": phone})
}

async fn read(response: reqwest::Response) -> (u16, Value) {
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.expect("json body");
    (status, body)
}
