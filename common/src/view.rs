//! 描画用ビューモデル
//!
//! DOMに依存しない表示データ。WASM側のコンポーネントはこれをそのまま描画する。

use crate::carousel::CarouselView;
use crate::config::GalleryConfig;
use crate::markup::format_paragraphs;
use crate::types::{LikeState, ProjectRecord, ProjectStatus};

/// ギャラリーのカード1枚
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub status: ProjectStatus,
    pub thumbnail: String,
    pub thumbnail_alt: String,
    /// カードに直接並べるタグ
    pub visible_tags: Vec<String>,
    /// ツールチップにまとめるタグ
    pub overflow_tags: Vec<String>,
    pub likes: LikeState,
}

impl CardView {
    pub fn new(project: &ProjectRecord, max_visible_tags: usize) -> Self {
        let split = project.tags.len().min(max_visible_tags);
        let (visible, overflow) = project.tags.split_at(split);

        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            short_description: project.short_description.clone(),
            status: project.status,
            thumbnail: project.thumbnail().to_string(),
            thumbnail_alt: format!("{} preview", project.title),
            visible_tags: visible.to_vec(),
            overflow_tags: overflow.to_vec(),
            likes: project.likes,
        }
    }

    /// "+N more"（隠れたタグがなければ None）
    pub fn more_label(&self) -> Option<String> {
        if self.overflow_tags.is_empty() {
            None
        } else {
            Some(format!("+{} more", self.overflow_tags.len()))
        }
    }
}

/// グリッド全体
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub cards: Vec<CardView>,
    /// 選択中のタグチップ（追加順）
    pub active_filters: Vec<String>,
    /// 該当なしメッセージを出すか
    pub show_empty: bool,
    pub empty_message: String,
}

/// 詳細モーダル
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub status: ProjectStatus,
    /// エスケープ済みの段落HTML
    pub description_html: String,
    pub tags: Vec<String>,
    pub logs: Vec<String>,
    pub repo_url: String,
    pub likes: LikeState,
    pub carousel: CarouselView,
}

impl DetailView {
    pub fn new(project: &ProjectRecord, carousel: CarouselView, config: &GalleryConfig) -> Self {
        let logs = if project.logs.is_empty() {
            vec![config.no_logs_message.clone()]
        } else {
            project.logs.clone()
        };

        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            status: project.status,
            description_html: format_paragraphs(&project.extended_description),
            tags: project.tags.clone(),
            logs,
            repo_url: project
                .repo_url
                .clone()
                .unwrap_or_else(|| config.repo_placeholder.clone()),
            likes: project.likes,
            carousel,
        }
    }
}
