//! ページ設定
//!
//! ページ内の `<script type="application/json" id="portfolio-config">` から
//! 読み込まれる。すべてのフィールドに既定値があり、省略可能。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// ページ全体の設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    pub gallery: GalleryConfig,
    pub typing: TypingConfig,
}

/// プロジェクトギャラリーの設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryConfig {
    /// いいね状態を保存するlocalStorageのキー
    pub likes_storage_key: String,
    /// カードに直接表示するタグ数（残りは "+N more" にまとめる）
    pub max_visible_tags: usize,
    pub empty_message: String,
    pub no_logs_message: String,
    /// リポジトリURLがないときのリンク先
    pub repo_placeholder: String,
    /// 背景クリックでモーダルを閉じる
    pub dismiss_on_backdrop: bool,
    /// Escapeキーでモーダルを閉じる
    pub dismiss_on_escape: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            likes_storage_key: "projectLikes".into(),
            max_visible_tags: 3,
            empty_message: "No matching projects or tags found.".into(),
            no_logs_message: "No updates yet.".into(),
            repo_placeholder: "#".into(),
            dismiss_on_backdrop: false,
            dismiss_on_escape: false,
        }
    }
}

/// タイピングアニメーションの設定（単位: ミリ秒）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypingConfig {
    pub text: String,
    pub typing_ms: u32,
    pub deleting_ms: u32,
    /// 全文を表示し終えてから消し始めるまで
    pub pause_ms: u32,
    /// 全部消してから打ち直すまで
    pub restart_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            text: "Computer Science Student".into(),
            typing_ms: 100,
            deleting_ms: 50,
            pause_ms: 5000,
            restart_ms: 500,
        }
    }
}

impl PageConfig {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.gallery.likes_storage_key.is_empty() {
            return Err(Error::Config("likesStorageKey must not be empty".into()));
        }
        if self.gallery.max_visible_tags == 0 {
            return Err(Error::Config("maxVisibleTags must be at least 1".into()));
        }
        Ok(())
    }
}
