//! ギャラリー以外のページ演出
//!
//! - ヒーローのタイピングアニメーション
//! - スキルバー
//! - モバイル用ハンバーガーメニュー
//!
//! いずれも対象要素がなければ何もしない。

use crate::dom::query_all;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use portfolio_common::{SkillLevel, Typewriter, TypingConfig};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub const TYPING_TARGET_ID: &str = "typing-effect";
pub const NAV_TOGGLE_ID: &str = "hamburgerBtn";

pub fn start_typing_effect(config: &TypingConfig) {
    let Some(target) = document().get_element_by_id(TYPING_TARGET_ID) else {
        log::debug!(target: "page", "#{} not found, typing effect skipped", TYPING_TARGET_ID);
        return;
    };
    run_typewriter(target, Typewriter::new(config.clone()));
}

/// 1文字ぶん進めて、次のタイマーを仕掛け直す
fn run_typewriter(target: Element, mut writer: Typewriter) {
    let step = writer.tick();
    target.set_text_content(Some(&step.text));
    Timeout::new(step.delay_ms, move || run_typewriter(target, writer)).forget();
}

pub fn apply_skill_bars() {
    for skill in query_all(".skill") {
        let level = SkillLevel::from_attributes(
            skill.get_attribute("data-skill").as_deref(),
            skill.get_attribute("data-color").as_deref(),
        );

        let fill = skill
            .query_selector(".skill-fill")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let percent = skill.query_selector(".skill-percent").ok().flatten();

        let (Some(fill), Some(percent)) = (fill, percent) else {
            continue;
        };
        let style = fill.style();
        let _ = style.set_property("width", &level.width());
        let _ = style.set_property("background-color", &level.color);
        percent.set_text_content(Some(&level.label()));
    }
}

pub fn bind_nav_toggle() {
    let Some(button) = document().get_element_by_id(NAV_TOGGLE_ID) else {
        return;
    };
    let Some(mobile_nav) = document().query_selector(".mobile-only").ok().flatten() else {
        return;
    };

    let target = button.clone();
    EventListener::new(&button, "click", move |_| {
        let _ = mobile_nav.class_list().toggle("show");
        let _ = target.class_list().toggle("active");
    })
    .forget();
}
