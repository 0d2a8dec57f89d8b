//! 検索ボックス・ステータス選択・タグチップ

use leptos::prelude::*;
use portfolio_common::ProjectStatus;
use crate::app::PortfolioGallery;

#[component]
pub fn FilterBar(gallery: RwSignal<PortfolioGallery>) -> impl IntoView {
    let active_filters = Memo::new(move |_| gallery.with(|g| g.active_filters().to_vec()));
    let query = move || gallery.with(|g| g.filter().query().to_string());
    let status = move || gallery.with(|g| g.filter().status().as_value().to_string());

    view! {
        <div class="projects-toolbar">
            <div class="projects-status">
                <span class="status-dot" data-status="updated"></span>
            </div>
            <input
                type="search"
                id="project-search"
                placeholder="Search projects..."
                prop:value=query
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    gallery.update(|g| g.set_query(query));
                }
            />
            <select
                class="project-filter"
                prop:value=status
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    gallery.update(|g| g.set_status(&value));
                }
            >
                <option value="all">"All"</option>
                {ProjectStatus::ALL
                    .into_iter()
                    .map(|status| view! { <option value=status.key()>{status.label()}</option> })
                    .collect_view()}
            </select>
        </div>

        <div id="active-filters" class="active-filters">
            {move || {
                active_filters
                    .get()
                    .into_iter()
                    .map(|tag| view! { <FilterChip gallery=gallery tag=tag /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn FilterChip(gallery: RwSignal<PortfolioGallery>, tag: String) -> impl IntoView {
    let aria_label = format!("Remove filter {}", tag);
    let label = tag.clone();

    view! {
        <span class="filter-chip">
            {label}" "
            <button
                type="button"
                aria-label=aria_label
                on:click=move |_| {
                    gallery.update(|g| {
                        g.remove_tag_filter(&tag);
                    });
                }
            >
                "✕"
            </button>
        </span>
    }
}
