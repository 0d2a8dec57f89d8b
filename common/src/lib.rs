//! Portfolio Common Library
//!
//! ポートフォリオページの表示ロジック（DOM非依存）。
//! Web(WASM)側はここのビューモデルを描画するだけ。

pub mod types;
pub mod error;
pub mod config;
pub mod catalog;
pub mod markup;
pub mod filter;
pub mod storage;
pub mod carousel;
pub mod modal;
pub mod view;
pub mod gallery;
pub mod typing;
pub mod skills;

pub use types::{LikeState, ProjectRecord, ProjectStatus};
pub use error::{Error, Result};
pub use config::{GalleryConfig, PageConfig, TypingConfig};
pub use catalog::Catalog;
pub use markup::{escape_html, format_paragraphs};
pub use filter::{FilterState, StatusFilter};
pub use storage::{KeyValueStore, LikeMap, MemoryStore};
pub use carousel::{Carousel, CarouselView};
pub use modal::{ModalSession, ModalState};
pub use view::{CardView, DetailView, GalleryView};
pub use gallery::Gallery;
pub use typing::{Typewriter, TypingStep};
pub use skills::SkillLevel;
