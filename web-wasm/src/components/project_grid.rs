//! プロジェクトカードのグリッド

use leptos::prelude::*;
use portfolio_common::CardView;
use crate::app::{self, PortfolioGallery};
use crate::components::like_button::LikeButton;

#[component]
pub fn ProjectGrid(gallery: RwSignal<PortfolioGallery>) -> impl IntoView {
    // 条件が変わるたびにグリッド全体を作り直す
    let rendered = Memo::new(move |_| gallery.with(|g| g.render()));

    view! {
        <div id="projects-grid" class="projects-grid">
            {move || {
                rendered
                    .get()
                    .cards
                    .into_iter()
                    .map(|card| view! { <ProjectCard card=card gallery=gallery /> })
                    .collect_view()
            }}
        </div>
        <div
            class="projects-empty"
            style:display=move || if rendered.with(|v| v.show_empty) { "block" } else { "none" }
        >
            <p>{move || rendered.with(|v| v.empty_message.clone())}</p>
        </div>
    }
}

#[component]
fn ProjectCard(card: CardView, gallery: RwSignal<PortfolioGallery>) -> impl IntoView {
    let more_label = card.more_label();
    let CardView {
        id,
        title,
        short_description,
        status,
        thumbnail,
        thumbnail_alt,
        visible_tags,
        overflow_tags,
        likes,
    } = card;
    let like_id = id.clone();

    view! {
        <article class="project-card">
            <div class="project-image">
                <img src=thumbnail alt=thumbnail_alt loading="lazy" />
            </div>
            <div class="project-card-status">
                <span class="status-dot" data-status=status.key()></span>
                <span class="project-card-status-text status-text">{status.label()}</span>
            </div>
            <h3 class="project-title">{title}</h3>
            <p class="project-desc">{short_description}</p>

            <div class="project-tags">
                {visible_tags
                    .into_iter()
                    .map(|tag| {
                        let label = tag.clone();
                        view! {
                            <span
                                class="project-tag"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    gallery.update(|g| {
                                        g.add_tag_filter(&tag);
                                    });
                                }
                            >
                                {label}
                            </span>
                        }
                    })
                    .collect_view()}
                {more_label.map(|label| {
                    view! {
                        <span class="project-tag more-tag">
                            {label}
                            <div class="tooltip-box">
                                {overflow_tags
                                    .into_iter()
                                    .map(|tag| view! { <span class="tooltip-tag">{tag}</span> })
                                    .collect_view()}
                            </div>
                        </span>
                    }
                })}
            </div>

            <div class="project-actions">
                <LikeButton gallery=gallery project_id=like_id likes=likes />
                <button
                    type="button"
                    class="project-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        app::open_detail(gallery, &id);
                    }
                >
                    "View Details"
                </button>
            </div>
        </article>
    }
}
