//! プロジェクトギャラリーのコントローラ
//!
//! 絞り込み条件・いいね状態・モーダルセッションをまとめて保持する。
//! 描画は行わず、`render()` / `detail()` のビューモデルを返すだけ。

use crate::carousel::CarouselView;
use crate::config::GalleryConfig;
use crate::filter::{FilterState, StatusFilter};
use crate::modal::ModalState;
use crate::storage::{KeyValueStore, LikeMap};
use crate::types::{LikeState, ProjectRecord};
use crate::view::{CardView, DetailView, GalleryView};

pub struct Gallery<S> {
    projects: Vec<ProjectRecord>,
    filter: FilterState,
    modal: ModalState,
    store: S,
    config: GalleryConfig,
}

impl<S: KeyValueStore> Gallery<S> {
    /// いいね状態をストアから復元して作成
    pub fn new(mut projects: Vec<ProjectRecord>, store: S, config: GalleryConfig) -> Self {
        let saved = LikeMap::load(&store, &config.likes_storage_key);
        for project in &mut projects {
            project.likes = saved.get(&project.id);
        }
        log::debug!(
            target: "gallery",
            "loaded {} projects ({} saved like entries)",
            projects.len(),
            saved.len()
        );

        Self {
            projects,
            filter: FilterState::new(),
            modal: ModalState::Closed,
            store,
            config,
        }
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    // ============================================
    // 絞り込み
    // ============================================

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    /// `<select>` の value をそのまま渡す（未知の値は何にも一致しない）
    pub fn set_status(&mut self, value: &str) {
        self.filter.set_status(StatusFilter::parse(value));
    }

    pub fn toggle_tag_filter(&mut self, tag: &str) -> bool {
        self.filter.toggle_tag(tag)
    }

    /// カード上のタグクリック
    pub fn add_tag_filter(&mut self, tag: &str) -> bool {
        self.filter.add_tag(tag)
    }

    /// チップの✕ボタン
    pub fn remove_tag_filter(&mut self, tag: &str) -> bool {
        self.filter.remove_tag(tag)
    }

    pub fn active_filters(&self) -> &[String] {
        self.filter.tags()
    }

    /// 現在の条件でグリッドを作る（元の並び順を保つ）
    pub fn render(&self) -> GalleryView {
        let cards: Vec<CardView> = self
            .filter
            .apply(&self.projects)
            .into_iter()
            .map(|p| CardView::new(p, self.config.max_visible_tags))
            .collect();

        GalleryView {
            show_empty: cards.is_empty(),
            cards,
            active_filters: self.filter.tags().to_vec(),
            empty_message: self.config.empty_message.clone(),
        }
    }

    // ============================================
    // いいね
    // ============================================

    pub fn like_state(&self, project_id: &str) -> Option<LikeState> {
        self.project(project_id).map(|p| p.likes)
    }

    /// いいねを切り替えて保存。存在しないIDなら None
    ///
    /// 保存に失敗してもメモリ上の状態は更新する。
    pub fn toggle_like(&mut self, project_id: &str) -> Option<LikeState> {
        let project = self.projects.iter_mut().find(|p| p.id == project_id)?;
        project.likes = project.likes.toggled();
        let state = project.likes;

        if let Err(e) =
            LikeMap::merge_entry(&self.store, &self.config.likes_storage_key, project_id, state)
        {
            log::warn!(target: "gallery", "failed to persist likes for {}: {}", project_id, e);
        }
        Some(state)
    }

    // ============================================
    // モーダル
    // ============================================

    pub fn is_detail_open(&self) -> bool {
        self.modal.is_open()
    }

    /// 詳細モーダルを開く。存在しないIDなら何もしない
    pub fn open_detail(&mut self, project_id: &str, scroll_offset: f64) -> Option<DetailView> {
        let images = self.project(project_id)?.images.clone();
        self.modal.open(project_id, images, scroll_offset);
        self.detail()
    }

    /// 開いているモーダルの表示内容
    pub fn detail(&self) -> Option<DetailView> {
        let session = self.modal.session()?;
        let project = self.project(&session.project_id)?;
        Some(DetailView::new(project, session.carousel.view(), &self.config))
    }

    /// モーダルを閉じ、戻すべきスクロール位置を返す
    pub fn close_detail(&mut self) -> Option<f64> {
        self.modal.close()
    }

    pub fn show_image(&mut self, index: i64) -> Option<CarouselView> {
        self.modal.show_image(index)
    }

    pub fn next_image(&mut self) -> Option<CarouselView> {
        self.modal.next_image()
    }

    pub fn prev_image(&mut self) -> Option<CarouselView> {
        self.modal.prev_image()
    }
}
