//! 詳細モーダルの状態機械
//!
//! Closed --open--> Open --close--> Closed
//! Open 中のカルーセル操作は Open への自己遷移（画像位置だけが変わる）。

use crate::carousel::{Carousel, CarouselView};

/// 開いている間だけ存在するセッション
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSession {
    pub project_id: String,
    pub carousel: Carousel,
    /// 開いた時点のページスクロール位置（閉じるときに戻す）
    pub scroll_offset: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalSession),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn session(&self) -> Option<&ModalSession> {
        match self {
            ModalState::Open(session) => Some(session),
            ModalState::Closed => None,
        }
    }

    fn carousel_mut(&mut self) -> Option<&mut Carousel> {
        match self {
            ModalState::Open(session) => Some(&mut session.carousel),
            ModalState::Closed => None,
        }
    }

    /// モーダルを開く
    ///
    /// 既に開いている場合は表示内容だけ差し替え、最初のスクロール位置を保持する。
    pub fn open(&mut self, project_id: &str, images: Vec<String>, scroll_offset: f64) {
        let scroll_offset = self
            .session()
            .map(|s| s.scroll_offset)
            .unwrap_or(scroll_offset);

        *self = ModalState::Open(ModalSession {
            project_id: project_id.to_string(),
            carousel: Carousel::new(images),
            scroll_offset,
        });
    }

    /// モーダルを閉じ、戻すべきスクロール位置を返す
    pub fn close(&mut self) -> Option<f64> {
        match std::mem::take(self) {
            ModalState::Open(session) => Some(session.scroll_offset),
            ModalState::Closed => None,
        }
    }

    pub fn show_image(&mut self, index: i64) -> Option<CarouselView> {
        let carousel = self.carousel_mut()?;
        carousel.show(index);
        Some(carousel.view())
    }

    pub fn next_image(&mut self) -> Option<CarouselView> {
        let carousel = self.carousel_mut()?;
        carousel.next();
        Some(carousel.view())
    }

    pub fn prev_image(&mut self) -> Option<CarouselView> {
        let carousel = self.carousel_mut()?;
        carousel.prev();
        Some(carousel.view())
    }
}
