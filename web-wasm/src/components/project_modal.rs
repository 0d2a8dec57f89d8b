//! プロジェクト詳細モーダル
//!
//! 中身は開いている間だけマウントされる。カルーセルのキー操作は
//! `CarouselKeys` が保持し、アンマウント時（どの経路で閉じても）に解除される。

use leptos::ev;
use leptos::prelude::*;
use portfolio_common::{CarouselView, DetailView};
use crate::app::{self, PortfolioGallery, MODAL_CLOSE_ID};
use crate::components::like_button::LikeButton;

#[component]
pub fn ProjectModal(
    gallery: RwSignal<PortfolioGallery>,
    dismiss_on_backdrop: bool,
    dismiss_on_escape: bool,
) -> impl IntoView {
    let detail = Memo::new(move |_| gallery.with(|g| g.detail()));

    view! {
        <div
            class="modal-backdrop"
            on:click=move |_| {
                if dismiss_on_backdrop {
                    app::close_detail(gallery);
                }
            }
        >
            <Show when=move || detail.with(Option::is_some)>
                <ModalContent
                    gallery=gallery
                    detail=detail
                    dismiss_on_escape=dismiss_on_escape
                />
            </Show>
        </div>
    }
}

/// 開いているプロジェクトの1フィールドを読むクロージャ
fn field<T, F>(detail: Memo<Option<DetailView>>, f: F) -> impl Fn() -> T + Copy + Send + Sync + 'static
where
    T: Default + 'static,
    F: Fn(&DetailView) -> T + Copy + Send + Sync + 'static,
{
    move || detail.with(|d| d.as_ref().map(f).unwrap_or_default())
}

#[component]
fn ModalContent(
    gallery: RwSignal<PortfolioGallery>,
    detail: Memo<Option<DetailView>>,
    dismiss_on_escape: bool,
) -> impl IntoView {
    let keys = CarouselKeys::bind(gallery, dismiss_on_escape);
    on_cleanup(move || drop(keys));

    let title = field(detail, |d| d.title.clone());
    let status_key = field(detail, |d| d.status.key().to_string());
    let status_label = field(detail, |d| d.status.label().to_string());
    let description = field(detail, |d| d.description_html.clone());
    let tags = field(detail, |d| d.tags.clone());
    let logs = field(detail, |d| d.logs.clone());
    let repo_url = field(detail, |d| d.repo_url.clone());
    let carousel = Memo::new(move |_| {
        detail.with(|d| d.as_ref().map(|d| d.carousel.clone()))
    });
    let show_controls = move || carousel.with(|c| c.as_ref().is_some_and(|c| c.show_controls));
    let image = move |f: fn(&CarouselView) -> String| {
        move || carousel.with(|c| c.as_ref().map(f).unwrap_or_default())
    };
    let image_src = image(|c| c.src.clone());
    let image_counter = image(|c| c.counter.clone());

    view! {
        <div
            class="modal-content"
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-title"
            on:click=|ev| ev.stop_propagation()
        >
            <button
                type="button"
                id=MODAL_CLOSE_ID
                class="modal-close"
                aria-label="Close project details"
                on:click=move |_| app::close_detail(gallery)
            >
                "✕"
            </button>

            <div class="modal-scroll">
                <div class="modal-image">
                    <button
                        type="button"
                        id="modal-prev"
                        class="modal-nav modal-prev"
                        class:hidden=move || !show_controls()
                        aria-label="Previous image"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            gallery.update(|g| {
                                g.prev_image();
                            });
                        }
                    >
                        "‹"
                    </button>
                    <img id="modal-image-el" src=image_src alt=move || format!("{} screenshot", title()) />
                    <button
                        type="button"
                        id="modal-next"
                        class="modal-nav modal-next"
                        class:hidden=move || !show_controls()
                        aria-label="Next image"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            gallery.update(|g| {
                                g.next_image();
                            });
                        }
                    >
                        "›"
                    </button>
                    <span
                        id="modal-image-counter"
                        class="modal-image-counter"
                        aria-hidden=move || if show_controls() { "false" } else { "true" }
                    >
                        {image_counter}
                    </span>
                </div>

                <h2 id="modal-title" class="modal-title">{title}</h2>
                <div class="modal-status">
                    <span class="status-dot" data-status=status_key></span>
                    <span class="modal-status-text status-text">{status_label}</span>
                </div>

                <div class="modal-tags">
                    {move || {
                        tags()
                            .into_iter()
                            .map(|tag| view! { <span class="modal-tag">{tag}</span> })
                            .collect_view()
                    }}
                </div>

                <div class="modal-description" inner_html=description></div>

                <div class="modal-actions">
                    {move || {
                        detail
                            .get()
                            .map(|d| view! { <LikeButton gallery=gallery project_id=d.id likes=d.likes /> })
                    }}
                    <a
                        class="github-btn"
                        href=repo_url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "View Repository"
                    </a>
                </div>

                <h3 class="logs-heading">"Updates"</h3>
                <ul class="logs-list">
                    {move || logs().into_iter().map(|entry| view! { <li>{entry}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}

/// モーダル表示中だけ有効な ←/→（と設定によっては Escape）キー操作
struct CarouselKeys(Option<WindowListenerHandle>);

impl CarouselKeys {
    fn bind(gallery: RwSignal<PortfolioGallery>, dismiss_on_escape: bool) -> Self {
        let handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
            match ev.key().as_str() {
                "ArrowLeft" => {
                    ev.stop_propagation();
                    gallery.update(|g| {
                        g.prev_image();
                    });
                }
                "ArrowRight" => {
                    ev.stop_propagation();
                    gallery.update(|g| {
                        g.next_image();
                    });
                }
                "Escape" if dismiss_on_escape => app::close_detail(gallery),
                _ => {}
            }
        });
        Self(Some(handle))
    }
}

impl Drop for CarouselKeys {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.remove();
        }
    }
}
