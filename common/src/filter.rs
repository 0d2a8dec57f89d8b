//! ギャラリーの絞り込み
//!
//! 3段階のANDフィルタ（順に評価し、途中で不一致なら打ち切る）:
//! 1. ステータス
//! 2. 選択中のタグ（すべて含むこと）
//! 3. 検索文字列（タイトル・概要・タグの部分一致、大文字小文字無視）

use crate::types::{ProjectRecord, ProjectStatus};

/// ステータスセレクタの値
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
    /// 未知のキー。どのプロジェクトにも一致しない
    Unrecognized(String),
}

impl StatusFilter {
    /// `<select>` の value から変換
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            return StatusFilter::All;
        }
        match ProjectStatus::from_key(value) {
            Some(status) => StatusFilter::Only(status),
            None => StatusFilter::Unrecognized(value.to_string()),
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.key(),
            StatusFilter::Unrecognized(value) => value,
        }
    }

    pub fn matches(&self, status: ProjectStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(selected) => *selected == status,
            StatusFilter::Unrecognized(_) => false,
        }
    }
}

/// 現在の絞り込み条件（ページ内のみ、保存しない）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    query: String,
    status: StatusFilter,
    /// 追加順を保つタグ集合
    tags: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn status(&self) -> &StatusFilter {
        &self.status
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
    }

    /// 選択中のタグ（追加順）
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// 未選択なら追加、選択済みなら削除。追加された場合 true
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.remove_tag(tag) {
            false
        } else {
            self.tags.push(tag.to_string());
            true
        }
    }

    /// 集合への追加。既にあれば何もしない
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.has_tag(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        match self.tags.iter().position(|t| t == tag) {
            Some(pos) => {
                self.tags.remove(pos);
                true
            }
            None => false,
        }
    }

    /// 1プロジェクトが全条件を満たすか
    pub fn matches(&self, project: &ProjectRecord) -> bool {
        if !self.status.matches(project.status) {
            return false;
        }

        if !self.tags.iter().all(|t| project.tags.contains(t)) {
            return false;
        }

        if self.query.is_empty() {
            return true;
        }
        let q = self.query.to_lowercase();
        project.title.to_lowercase().contains(&q)
            || project.short_description.to_lowercase().contains(&q)
            || project.tags.iter().any(|tag| tag.to_lowercase().contains(&q))
    }

    /// 条件を満たすプロジェクトを元の順序のまま返す
    pub fn apply<'a>(&self, projects: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}
