//! ギャラリーコントローラの統合テスト
//!
//! 絞り込み・いいね・モーダルの観測可能な振る舞いを検証

use portfolio_common::{
    Catalog, Gallery, GalleryConfig, KeyValueStore, LikeMap, LikeState, MemoryStore,
};

const LIKES_KEY: &str = "projectLikes";

fn catalog_json() -> &'static str {
    r#"[
        {
            "id": "airlines",
            "title": "TIP Airlines Booking System",
            "desc": "A Flight Booking Program.",
            "extended": "Booking <b>engine</b>.\n\nSecond paragraph.",
            "images": ["a1.png", "a2.png", "a3.png"],
            "tags": ["Python", "SQLite", "Group-Project"],
            "status": "completed",
            "repo": "https://example.com/airlines.git",
            "logs": ["2024-12-17: private", "2024-12-16: submitted"]
        },
        {
            "id": "pastry",
            "title": "Pastry Shop Management System",
            "desc": "Inventory and orders for a pastry shop.",
            "extended": "<script>alert('x')</script>",
            "image": "pastry.png",
            "tags": ["Java", "MySQL", "Group-Project"],
            "status": { "key": "in-progress", "text": "In Progress" }
        },
        {
            "id": "portfolio",
            "title": "Portfolio Site",
            "desc": "This very page.",
            "tags": ["Rust", "WASM"],
            "status": "paused"
        }
    ]"#
}

fn gallery_with(store: MemoryStore) -> Gallery<MemoryStore> {
    let catalog = Catalog::from_json(catalog_json()).expect("カタログ読み込み失敗");
    Gallery::new(catalog.into_projects(), store, GalleryConfig::default())
}

fn gallery() -> Gallery<MemoryStore> {
    gallery_with(MemoryStore::new())
}

fn rendered_ids(gallery: &Gallery<MemoryStore>) -> Vec<String> {
    gallery.render().cards.into_iter().map(|c| c.id).collect()
}

// ============================================
// 絞り込み
// ============================================

/// 条件なしなら全件を元の順序で表示
#[test]
fn test_render_all_in_order() {
    let g = gallery();
    let view = g.render();
    assert_eq!(rendered_ids(&g), vec!["airlines", "pastry", "portfolio"]);
    assert!(!view.show_empty);
    assert!(view.active_filters.is_empty());
}

/// 全条件の組み合わせで、描画結果 = 各述語を満たす部分集合（元の順序）
#[test]
fn test_render_matches_predicate_for_all_combinations() {
    let statuses = ["all", "completed", "in-progress", "paused", "under-maintenance", "bogus"];
    let tag_sets: Vec<Vec<&str>> = vec![
        vec![],
        vec!["Group-Project"],
        vec!["Group-Project", "Java"],
        vec!["Rust"],
        vec!["Nope"],
    ];
    let queries = ["", "system", "SQL", "page", "zzz"];

    for status in statuses {
        for tags in &tag_sets {
            for query in queries {
                let mut g = gallery();
                g.set_status(status);
                for tag in tags {
                    g.toggle_tag_filter(tag);
                }
                g.set_query(query);

                let q = query.to_lowercase();
                let expected: Vec<String> = g
                    .projects()
                    .iter()
                    .filter(|p| status == "all" || p.status.key() == status)
                    .filter(|p| tags.iter().all(|t| p.tags.iter().any(|pt| pt.as_str() == *t)))
                    .filter(|p| {
                        q.is_empty()
                            || p.title.to_lowercase().contains(&q)
                            || p.short_description.to_lowercase().contains(&q)
                            || p.tags.iter().any(|t| t.to_lowercase().contains(&q))
                    })
                    .map(|p| p.id.clone())
                    .collect();

                let view = g.render();
                let ids: Vec<String> = view.cards.iter().map(|c| c.id.clone()).collect();
                assert_eq!(ids, expected, "status={} tags={:?} query={}", status, tags, query);
                assert_eq!(view.show_empty, expected.is_empty());
            }
        }
    }
}

/// タグを2回トグルすると元の表示に戻る
#[test]
fn test_toggle_tag_twice_restores_view() {
    let mut g = gallery();
    g.set_query("s");
    let before = g.render();

    assert!(g.toggle_tag_filter("Java"));
    assert_eq!(rendered_ids(&g), vec!["pastry"]);
    assert_eq!(g.render().active_filters, vec!["Java"]);

    assert!(!g.toggle_tag_filter("Java"));
    assert_eq!(g.render(), before);
}

/// 該当なしメッセージ
#[test]
fn test_empty_placeholder() {
    let mut g = gallery();
    g.set_query("nothing matches this");
    let view = g.render();
    assert!(view.cards.is_empty());
    assert!(view.show_empty);
    assert_eq!(view.empty_message, "No matching projects or tags found.");
}

/// 未知のステータスは何にも一致しない
#[test]
fn test_unknown_status_fails_closed() {
    let mut g = gallery();
    g.set_status("archived");
    assert!(g.render().cards.is_empty());
}

/// チップは追加順、カードのタグクリックは重複追加しない
#[test]
fn test_chip_order_and_card_tag_click() {
    let mut g = gallery();
    g.add_tag_filter("Group-Project");
    g.add_tag_filter("Python");
    g.add_tag_filter("Group-Project");
    assert_eq!(g.active_filters(), &["Group-Project".to_string(), "Python".to_string()]);

    assert!(g.remove_tag_filter("Group-Project"));
    assert_eq!(g.active_filters(), &["Python".to_string()]);
    assert_eq!(rendered_ids(&g), vec!["airlines"]);
}

// ============================================
// いいね
// ============================================

/// {0,false} → {1,true} → {0,false}
#[test]
fn test_toggle_like_round_trip() {
    let store = MemoryStore::new();
    let mut g = gallery_with(store.clone());

    assert_eq!(g.toggle_like("pastry"), Some(LikeState { count: 1, liked: true }));
    assert_eq!(
        LikeMap::load(&store, LIKES_KEY).get("pastry"),
        LikeState { count: 1, liked: true }
    );

    assert_eq!(g.toggle_like("pastry"), Some(LikeState { count: 0, liked: false }));
    assert_eq!(
        LikeMap::load(&store, LIKES_KEY).get("pastry"),
        LikeState { count: 0, liked: false }
    );
}

/// どんな呼び出し順でも count は負にならず、liked と整合する
#[test]
fn test_like_count_never_negative() {
    let store = MemoryStore::with_entry(LIKES_KEY, r#"{"airlines": {"count": 0, "liked": true}}"#);
    let mut g = gallery_with(store);

    let mut last = g.like_state("airlines").unwrap();
    for _ in 0..7 {
        let next = g.toggle_like("airlines").unwrap();
        assert_ne!(next.liked, last.liked);
        last = next;
    }
    // 0で止まった後は 0/1 を往復する
    assert!(last.count <= 1);
}

/// 保存時は他プロジェクトのエントリを消さない
#[test]
fn test_like_persistence_merges_entries() {
    let store = MemoryStore::with_entry(
        LIKES_KEY,
        r#"{"someone-else": {"count": 12, "liked": false}, "portfolio": {"count": 3, "liked": true}}"#,
    );
    let mut g = gallery_with(store.clone());
    assert_eq!(g.like_state("portfolio"), Some(LikeState { count: 3, liked: true }));

    g.toggle_like("airlines");

    let saved = LikeMap::load(&store, LIKES_KEY);
    assert_eq!(saved.get("someone-else"), LikeState { count: 12, liked: false });
    assert_eq!(saved.get("portfolio"), LikeState { count: 3, liked: true });
    assert_eq!(saved.get("airlines"), LikeState { count: 1, liked: true });
}

/// 独立した2つのインスタンスが同じストアに書いても互いの値を保持する
#[test]
fn test_two_instances_share_store() {
    let store = MemoryStore::new();
    let mut first = gallery_with(store.clone());
    let mut second = gallery_with(store.clone());

    first.toggle_like("airlines");
    second.toggle_like("pastry");

    let saved = LikeMap::load(&store, LIKES_KEY);
    assert!(saved.get("airlines").liked);
    assert!(saved.get("pastry").liked);

    // 後から作ったインスタンスは保存済みの値で初期化される
    let third = gallery_with(store);
    assert_eq!(third.like_state("airlines"), Some(LikeState { count: 1, liked: true }));
}

/// 他プロジェクトのエントリは未知のフィールドごと書き戻す
#[test]
fn test_like_persistence_keeps_foreign_entries_verbatim() {
    let store = MemoryStore::with_entry(
        LIKES_KEY,
        r#"{"other": {"count": 2, "liked": true, "since": "2024"}, "weird": "keep-me"}"#,
    );
    let mut g = gallery_with(store.clone());

    g.toggle_like("airlines");

    let saved: serde_json::Value =
        serde_json::from_str(&store.get(LIKES_KEY).unwrap()).unwrap();
    assert_eq!(
        saved["other"],
        serde_json::json!({"count": 2, "liked": true, "since": "2024"})
    );
    assert_eq!(saved["weird"], "keep-me");
    assert_eq!(saved["airlines"], serde_json::json!({"count": 1, "liked": true}));
}

/// 壊れた保存値でも起動できる
#[test]
fn test_corrupt_storage_defaults() {
    let store = MemoryStore::with_entry(LIKES_KEY, "}}}");
    let mut g = gallery_with(store.clone());
    assert_eq!(g.like_state("airlines"), Some(LikeState::default()));

    g.toggle_like("airlines");
    assert!(store.get(LIKES_KEY).unwrap().contains("\"airlines\""));
}

/// カードにもいいね状態が載る
#[test]
fn test_card_shows_like_state() {
    let mut g = gallery();
    g.toggle_like("portfolio");
    let card = g
        .render()
        .cards
        .into_iter()
        .find(|c| c.id == "portfolio")
        .unwrap();
    assert_eq!(card.likes, LikeState { count: 1, liked: true });
}

// ============================================
// モーダル
// ============================================

/// 3枚: 2 → next → 0、0 → prev → 2
#[test]
fn test_carousel_wraps() {
    let mut g = gallery();
    g.open_detail("airlines", 0.0).unwrap();

    assert_eq!(g.show_image(2).unwrap().index, 2);
    assert_eq!(g.next_image().unwrap().index, 0);
    assert_eq!(g.prev_image().unwrap().index, 2);
    assert_eq!(g.detail().unwrap().carousel.counter, "3 / 3");
}

/// 画像1枚（旧形式の image）ならナビゲーションを隠す
#[test]
fn test_single_legacy_image_hides_controls() {
    let mut g = gallery();
    let detail = g.open_detail("pastry", 0.0).unwrap();
    assert_eq!(detail.carousel.src, "pastry.png");
    assert!(!detail.carousel.show_controls);
}

/// 画像なしでも開ける
#[test]
fn test_no_images() {
    let mut g = gallery();
    let detail = g.open_detail("portfolio", 0.0).unwrap();
    assert_eq!(detail.carousel.src, "");
    assert_eq!(detail.carousel.count, 0);
    assert_eq!(g.next_image().unwrap().index, 0);
}

/// 更新履歴が空なら代替の1件、N件ならN件を順序どおり
#[test]
fn test_logs_fallback_and_order() {
    let mut g = gallery();

    let empty = g.open_detail("pastry", 0.0).unwrap();
    assert_eq!(empty.logs, vec!["No updates yet."]);

    let full = g.open_detail("airlines", 0.0).unwrap();
    assert_eq!(full.logs, vec!["2024-12-17: private", "2024-12-16: submitted"]);
}

/// 説明文の <script> はエスケープされる
#[test]
fn test_description_is_escaped() {
    let mut g = gallery();

    let detail = g.open_detail("pastry", 0.0).unwrap();
    assert!(!detail.description_html.contains("<script>"));
    assert!(detail.description_html.contains("&lt;script&gt;"));

    let detail = g.open_detail("airlines", 0.0).unwrap();
    assert_eq!(
        detail.description_html,
        "<p>Booking &lt;b&gt;engine&lt;/b&gt;.</p><p>Second paragraph.</p>"
    );
}

/// ステータスラベル・タグ・リポジトリリンク
#[test]
fn test_detail_fields() {
    let mut g = gallery();
    let detail = g.open_detail("pastry", 0.0).unwrap();
    assert_eq!(detail.title, "Pastry Shop Management System");
    assert_eq!(detail.status.label(), "In Progress");
    assert_eq!(detail.tags, vec!["Java", "MySQL", "Group-Project"]);
    assert_eq!(detail.repo_url, "#");

    let detail = g.open_detail("airlines", 0.0).unwrap();
    assert_eq!(detail.repo_url, "https://example.com/airlines.git");
}

/// 閉じると開いた時点のスクロール位置が返る
#[test]
fn test_close_restores_scroll_offset() {
    let mut g = gallery();
    g.open_detail("airlines", 1234.5).unwrap();
    g.next_image();

    assert_eq!(g.close_detail(), Some(1234.5));
    assert!(!g.is_detail_open());
    assert!(g.detail().is_none());
    assert!(g.next_image().is_none());
    assert_eq!(g.close_detail(), None);
}

/// 再オープンでカルーセルは先頭に戻る
#[test]
fn test_reopen_resets_carousel() {
    let mut g = gallery();
    g.open_detail("airlines", 10.0).unwrap();
    g.next_image();
    g.close_detail();

    let detail = g.open_detail("airlines", 20.0).unwrap();
    assert_eq!(detail.carousel.index, 0);
    assert_eq!(g.close_detail(), Some(20.0));
}

/// モーダル内のいいねも反映される
#[test]
fn test_detail_like_state_updates() {
    let mut g = gallery();
    g.open_detail("airlines", 0.0).unwrap();
    g.toggle_like("airlines");
    assert_eq!(g.detail().unwrap().likes, LikeState { count: 1, liked: true });
}
