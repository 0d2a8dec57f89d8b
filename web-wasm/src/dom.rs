//! モーダル開閉に伴うページ全体へのDOM操作

use leptos::prelude::*;
use portfolio_common::{Error, Result};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// モーダル表示中にスクリーンリーダーから隠す領域
const BACKGROUND_SELECTOR: &str = "header, main, footer";
const MODAL_OPEN_CLASS: &str = "modal-open";

pub fn html_element(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// 必須のマウント先
pub fn require_anchor(id: &str) -> Result<HtmlElement> {
    html_element(id).ok_or_else(|| Error::MissingAnchor(format!("#{}", id)))
}

pub fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn focus(id: &str) {
    if let Some(el) = html_element(id) {
        let _ = el.focus();
    }
}

pub fn show_modal(modal_id: &str) {
    if let Some(modal) = html_element(modal_id) {
        let _ = modal.style().set_property("display", "flex");
        let _ = modal.set_attribute("aria-hidden", "false");
    }
}

pub fn hide_modal(modal_id: &str) {
    if let Some(modal) = html_element(modal_id) {
        let _ = modal.style().set_property("display", "none");
        let _ = modal.set_attribute("aria-hidden", "true");
    }
}

/// 背景を操作不能にしてモーダルを表示
pub fn lock_page(modal_id: &str) {
    set_background_hidden(true);
    if let Some(html) = document().document_element() {
        let _ = html.class_list().add_1(MODAL_OPEN_CLASS);
    }
    show_modal(modal_id);
}

/// モーダルを隠し、背景とスクロール位置を元に戻す
pub fn unlock_page(modal_id: &str, scroll_offset: f64) {
    hide_modal(modal_id);
    set_background_hidden(false);

    let Some(html) = document().document_element() else {
        return;
    };
    let _ = html.class_list().remove_1(MODAL_OPEN_CLASS);

    // smooth scroll のままだと元の位置へアニメーションしてしまう
    match html.dyn_into::<HtmlElement>() {
        Ok(html) => {
            let style = html.style();
            let _ = style.set_property("scroll-behavior", "auto");
            window().scroll_to_with_x_and_y(0.0, scroll_offset);
            let _ = style.remove_property("scroll-behavior");
        }
        Err(_) => window().scroll_to_with_x_and_y(0.0, scroll_offset),
    }
}

fn set_background_hidden(hidden: bool) {
    for node in query_all(BACKGROUND_SELECTOR) {
        let _ = if hidden {
            node.set_attribute("aria-hidden", "true")
        } else {
            node.remove_attribute("aria-hidden")
        };
    }
}

/// セレクタに一致する要素（見つからなければ空）
pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nodes) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
