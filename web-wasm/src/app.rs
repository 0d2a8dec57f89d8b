//! プロジェクトギャラリーのマウントとモーダル開閉

use leptos::prelude::*;
use portfolio_common::{Gallery, GalleryConfig, Result};
use crate::components::{
    filter_bar::FilterBar,
    project_grid::ProjectGrid,
    project_modal::ProjectModal,
};
use crate::{dom, settings};
use crate::storage::BrowserStorage;

pub const GALLERY_ROOT_ID: &str = "projects-root";
pub const MODAL_ROOT_ID: &str = "project-modal";
pub const MODAL_CLOSE_ID: &str = "modal-close";

/// アプリケーションの状態
pub type PortfolioGallery = Gallery<BrowserStorage>;

/// ギャラリーとモーダルをそれぞれのマウント先に描画
///
/// どちらかのマウント先がなければ何も描画せずエラーを返す。
pub fn mount(config: GalleryConfig) -> Result<()> {
    let gallery_root = dom::require_anchor(GALLERY_ROOT_ID)?;
    let modal_root = dom::require_anchor(MODAL_ROOT_ID)?;
    let catalog = settings::load_catalog()?;

    if !BrowserStorage::is_available() {
        log::warn!(target: "gallery", "localStorage unavailable, likes will not persist");
    }

    let dismiss_on_backdrop = config.dismiss_on_backdrop;
    let dismiss_on_escape = config.dismiss_on_escape;
    let gallery = RwSignal::new(Gallery::new(catalog.into_projects(), BrowserStorage, config));

    dom::hide_modal(MODAL_ROOT_ID);

    leptos::mount::mount_to(gallery_root, move || view! { <Projects gallery=gallery /> }).forget();
    leptos::mount::mount_to(modal_root, move || {
        view! {
            <ProjectModal
                gallery=gallery
                dismiss_on_backdrop=dismiss_on_backdrop
                dismiss_on_escape=dismiss_on_escape
            />
        }
    })
    .forget();

    Ok(())
}

/// 検索・絞り込みとカードグリッド
#[component]
pub fn Projects(gallery: RwSignal<PortfolioGallery>) -> impl IntoView {
    view! {
        <FilterBar gallery=gallery />
        <ProjectGrid gallery=gallery />
    }
}

/// 詳細モーダルを開く
pub fn open_detail(gallery: RwSignal<PortfolioGallery>, project_id: &str) {
    let scroll = dom::scroll_offset();
    let opened = gallery
        .try_update(|g| g.open_detail(project_id, scroll).is_some())
        .unwrap_or(false);
    if !opened {
        log::warn!(target: "gallery", "no project with id {}", project_id);
        return;
    }

    dom::lock_page(MODAL_ROOT_ID);
    // 閉じるボタンは次の描画で現れる
    request_animation_frame(|| dom::focus(MODAL_CLOSE_ID));
}

/// 詳細モーダルを閉じてスクロール位置を戻す
pub fn close_detail(gallery: RwSignal<PortfolioGallery>) {
    if let Some(scroll) = gallery.try_update(|g| g.close_detail()).flatten() {
        dom::unlock_page(MODAL_ROOT_ID, scroll);
    }
}
