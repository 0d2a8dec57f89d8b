//! プロジェクトデータの型定義
//!
//! ギャラリーとWeb(WASM)側で共有される型:
//! - ProjectStatus: 進捗ステータス（固定の4種）
//! - LikeState: いいね状態（localStorageに永続化）
//! - ProjectRecord: カード・モーダルに表示するプロジェクト

use serde::{Deserialize, Serialize};

/// プロジェクトの進捗ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "StatusField")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Paused,
    UnderMaintenance,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Completed,
        ProjectStatus::InProgress,
        ProjectStatus::Paused,
        ProjectStatus::UnderMaintenance,
    ];

    /// data-status属性・フィルタ値として使うキー
    pub fn key(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Paused => "paused",
            ProjectStatus::UnderMaintenance => "under-maintenance",
        }
    }

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Paused => "Paused",
            ProjectStatus::UnderMaintenance => "Under Maintenance",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// ステータスのJSON表現
///
/// `"completed"` と `{ "key": "completed", "text": "Completed" }` の両方を受け付ける。
/// ラベルは常にキーから決まるので `text` は読み捨てる。
#[derive(Deserialize)]
#[serde(untagged)]
enum StatusField {
    Key(String),
    Tagged {
        key: String,
        #[allow(dead_code)]
        #[serde(default)]
        text: Option<String>,
    },
}

impl TryFrom<StatusField> for ProjectStatus {
    type Error = String;

    fn try_from(field: StatusField) -> Result<Self, Self::Error> {
        let key = match field {
            StatusField::Key(key) => key,
            StatusField::Tagged { key, .. } => key,
        };
        ProjectStatus::from_key(&key).ok_or_else(|| format!("unknown project status: {}", key))
    }
}

/// いいね状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeState {
    pub count: u32,
    pub liked: bool,
}

impl LikeState {
    /// liked を反転し、count を ±1 する（0未満にはならない）
    pub fn toggled(self) -> Self {
        if self.liked {
            Self {
                count: self.count.saturating_sub(1),
                liked: false,
            }
        } else {
            Self {
                count: self.count.saturating_add(1),
                liked: true,
            }
        }
    }
}

/// ギャラリーに表示するプロジェクト
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawProject")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub short_description: String,
    /// 空行区切りで段落、単独の改行は <br> として表示される
    pub extended_description: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub status: ProjectStatus,
    pub repo_url: Option<String>,
    /// 更新履歴（新しい順の慣例。並べ替えはしない）
    pub logs: Vec<String>,
    /// 起動時にストレージから復元される
    pub likes: LikeState,
}

impl ProjectRecord {
    /// カードのサムネイル（先頭画像、なければ空文字）
    pub fn thumbnail(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or("")
    }
}

/// カタログJSONの1エントリ
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProject {
    id: String,
    title: String,
    #[serde(default, alias = "desc")]
    short_description: String,
    #[serde(default, alias = "extended")]
    extended_description: String,
    #[serde(default)]
    images: Option<Vec<String>>,
    /// 旧形式の単一画像
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    status: ProjectStatus,
    #[serde(default, alias = "repo")]
    repo_url: Option<String>,
    #[serde(default)]
    logs: Vec<String>,
}

impl TryFrom<RawProject> for ProjectRecord {
    type Error = String;

    fn try_from(raw: RawProject) -> Result<Self, Self::Error> {
        if raw.id.trim().is_empty() {
            return Err(format!("project '{}' has an empty id", raw.title));
        }

        let images = match (raw.images, raw.image) {
            (Some(images), _) if !images.is_empty() => images,
            (_, Some(image)) if !image.is_empty() => vec![image],
            _ => Vec::new(),
        };

        Ok(Self {
            id: raw.id,
            title: raw.title,
            short_description: raw.short_description,
            extended_description: raw.extended_description,
            images,
            tags: raw.tags,
            status: raw.status,
            repo_url: raw.repo_url.filter(|url| !url.is_empty()),
            logs: raw.logs,
            likes: LikeState::default(),
        })
    }
}
