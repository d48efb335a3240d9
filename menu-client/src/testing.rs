//! Test transport shared by the store and view tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{ClientError, ClientResult, HttpClient, MenuClient, MenuStore};

/// Replays canned responses and records what was sent
#[derive(Default)]
pub(crate) struct ScriptedHttp {
    responses: Mutex<VecDeque<ClientResult<Value>>>,
    sent: Mutex<Vec<(&'static str, Value)>>,
}

impl ScriptedHttp {
    pub(crate) fn with(responses: Vec<ClientResult<Value>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            sent: Mutex::default(),
        }
    }

    pub(crate) fn sent(&self) -> Vec<(&'static str, Value)> {
        self.sent.lock().unwrap().clone()
    }

    fn reply<T: DeserializeOwned>(&self, method: &'static str, body: Value) -> ClientResult<T> {
        self.sent.lock().unwrap().push((method, body));
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")?;
        Ok(serde_json::from_value(next)?)
    }
}

#[async_trait]
impl HttpClient for ScriptedHttp {
    async fn get<T: DeserializeOwned>(&self, _path: &str) -> ClientResult<T> {
        self.reply("GET", Value::Null)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        _path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.reply("POST", serde_json::to_value(body)?)
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        _path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.reply("PUT", serde_json::to_value(body)?)
    }

    async fn delete_with_body<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        _path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.reply("DELETE", serde_json::to_value(body)?)
    }
}

pub(crate) fn scripted_store(responses: Vec<ClientResult<Value>>) -> MenuStore<ScriptedHttp> {
    MenuStore::new(MenuClient::new(ScriptedHttp::with(responses)))
}

pub(crate) fn sent(store: &MenuStore<ScriptedHttp>) -> Vec<(&'static str, Value)> {
    store.client().http().sent()
}

pub(crate) fn server_error() -> ClientResult<Value> {
    Err(ClientError::Internal("Error creating item".to_string()))
}

/// One section "Bebidas" (id 1) holding "Agua" (id 10)
pub(crate) fn bebidas_menu() -> ClientResult<Value> {
    Ok(serde_json::json!({
        "sections": [{"id": 1, "name": "Bebidas", "image": "/b.png"}],
        "items": {"1": [{
            "id": 10, "section_id": 1, "name": "Agua", "price": "$1.00",
            "image": "/a.png", "description": "Agua mineral"
        }]}
    }))
}
