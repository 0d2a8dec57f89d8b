//! ページ内JSONからの設定・カタログ読み込み
//!
//! `<script type="application/json" id="...">` の中身を読む。
//! ないときは既定値、壊れているときは警告を出して既定値。

use leptos::prelude::*;
use portfolio_common::{Catalog, PageConfig, Result};

pub const CONFIG_SCRIPT_ID: &str = "portfolio-config";
pub const CATALOG_SCRIPT_ID: &str = "project-data";

fn read_json_script(id: &str) -> Option<String> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
}

pub fn load_page_config() -> PageConfig {
    let Some(json) = read_json_script(CONFIG_SCRIPT_ID) else {
        return PageConfig::default();
    };
    PageConfig::from_json(&json).unwrap_or_else(|e| {
        log::warn!(target: "page", "ignoring #{}: {}", CONFIG_SCRIPT_ID, e);
        PageConfig::default()
    })
}

/// ページ内カタログ、なければ組み込みカタログ
pub fn load_catalog() -> Result<Catalog> {
    if let Some(json) = read_json_script(CATALOG_SCRIPT_ID) {
        match Catalog::from_json(&json) {
            Ok(catalog) => return Ok(catalog),
            Err(e) => {
                log::warn!(target: "page", "ignoring #{}: {}", CATALOG_SCRIPT_ID, e);
            }
        }
    }
    Catalog::builtin()
}
