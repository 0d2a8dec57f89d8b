//! いいねボタン

use leptos::prelude::*;
use portfolio_common::LikeState;
use crate::app::PortfolioGallery;

#[component]
pub fn LikeButton(
    gallery: RwSignal<PortfolioGallery>,
    project_id: String,
    likes: LikeState,
) -> impl IntoView {
    let label = if likes.liked { "Unlike project" } else { "Like project" };
    let pressed = if likes.liked { "true" } else { "false" };
    let icon = if likes.liked { "♥" } else { "♡" };

    view! {
        <button
            type="button"
            class="like-btn"
            class:liked=likes.liked
            aria-pressed=pressed
            aria-label=label
            on:click=move |ev| {
                ev.stop_propagation();
                gallery.update(|g| {
                    g.toggle_like(&project_id);
                });
            }
        >
            <span class="like-icon">{icon}</span>
            <span class="like-count">{likes.count}</span>
        </button>
    }
}
