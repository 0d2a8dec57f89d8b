//! localStorage アダプタ

use portfolio_common::{Error, KeyValueStore, Result};

/// `window.localStorage` をそのまま使うストア
///
/// 状態を持たないので、シグナルに入れても Send + Sync のまま扱える。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn raw() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    /// プライベートモード等でlocalStorageが使えない場合は false
    pub fn is_available() -> bool {
        Self::raw().is_some()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::raw()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage =
            Self::raw().ok_or_else(|| Error::Storage("localStorage is unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}
