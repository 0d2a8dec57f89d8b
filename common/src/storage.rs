//! いいね状態の永続化
//!
//! 保存形式: `{ "<project id>": { "count": 3, "liked": true }, ... }`
//! キーがない・JSONが壊れている・エントリの形が違う場合は
//! `{count: 0, liked: false}` として扱い、エラーにはしない。

use crate::error::{Error, Result};
use crate::types::LikeState;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// 同期的な文字列キー・バリューストア（ブラウザのlocalStorage相当）
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストア（テスト・非ブラウザ環境用）
///
/// Clone したインスタンスは同じ中身を共有する。
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.insert(key, value);
        store
    }

    fn insert(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| Error::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 保存済みのいいねマップ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LikeMap {
    entries: BTreeMap<String, LikeState>,
}

impl LikeMap {
    /// ストアから読み込む。失敗はすべて空マップ扱い
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Self {
        match store.get(key) {
            Some(raw) => Self::parse(&raw),
            None => Self::default(),
        }
    }

    /// 保存文字列を寛容にパース
    pub fn parse(raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!(target: "storage", "ignoring malformed like state: {}", e);
                return Self::default();
            }
        };

        let Value::Object(object) = value else {
            log::warn!(target: "storage", "ignoring like state that is not an object");
            return Self::default();
        };

        let entries = object
            .into_iter()
            .map(|(id, entry)| (id, entry_state(&entry)))
            .collect();
        Self { entries }
    }

    pub fn get(&self, id: &str) -> LikeState {
        self.entries.get(id).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 1件だけ書き換えて保存（他プロジェクトのエントリは保持）
    ///
    /// 保存直前にストアを読み直すので、別のインスタンスが書いた値も消さない。
    /// 他のエントリは読み込んだJSONのまま書き戻す（未知のフィールドや
    /// 形の違う値も触らない）。
    pub fn merge_entry<S: KeyValueStore + ?Sized>(
        store: &S,
        key: &str,
        id: &str,
        state: LikeState,
    ) -> Result<()> {
        let mut raw = load_object(store, key);
        raw.insert(id.to_string(), serde_json::to_value(state)?);
        store.set(key, &serde_json::to_string(&raw)?)
    }
}

/// 保存値をJSONオブジェクトとして読む。ない・壊れている場合は空
fn load_object<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Map<String, Value> {
    store
        .get(key)
        .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
        .and_then(|value| match value {
            Value::Object(object) => Some(object),
            _ => None,
        })
        .unwrap_or_default()
}

/// `{count, liked}` の各フィールドを個別に読む。型違いは既定値
fn entry_state(entry: &Value) -> LikeState {
    let Some(fields) = entry.as_object() else {
        return LikeState::default();
    };
    LikeState {
        count: count_field(fields),
        liked: fields.get("liked").and_then(Value::as_bool).unwrap_or(false),
    }
}

fn count_field(fields: &Map<String, Value>) -> u32 {
    fields
        .get("count")
        .and_then(Value::as_u64)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
        .unwrap_or(0)
}
