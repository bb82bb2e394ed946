//! Presentation state produced by ArticleContentResolver::view.
//!
//! - the edit link appears only for admins and is keyed by title
//! - body and outline come from the same normalized content
//! - a seeded in-memory store resolves end to end

use lore_core::{ArticleContentResolver, LoreConfig, SharedIdentity, StaticIdentity};
use lore_model::{Article, Viewer};
use lore_store::MemoryStore;
use lore_test_utils::{article_with_refs, store_with};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::sync::Arc;

async fn view_as(viewer: Option<Viewer>) -> lore_core::ArticleView {
    let resolver = ArticleContentResolver::new(
        Arc::new(store_with(&["c1"], &["u1"])),
        Arc::new(StaticIdentity::new(viewer)),
    );
    resolver
        .resolve(Arc::new(article_with_refs("Geralt of Rivia", &["c1"], &["u1"])))
        .await;
    resolver.view().unwrap()
}

#[tokio::test]
async fn anonymous_viewer_gets_no_edit_link() {
    assert!(view_as(None).await.edit.is_none());
}

#[tokio::test]
async fn non_admin_gets_no_edit_link() {
    assert!(view_as(Some(Viewer::member("u5"))).await.edit.is_none());
}

#[tokio::test]
async fn admin_edit_link_targets_article_title() {
    let view = view_as(Some(Viewer::admin("root"))).await;
    assert_eq!(view.edit.unwrap().href, "/edit-article/Geralt of Rivia");
}

#[tokio::test]
async fn configured_edit_prefix_is_used() {
    let config = LoreConfig::new().with_edit_prefix("/wiki/edit/");
    let resolver = ArticleContentResolver::new(
        Arc::new(store_with(&[], &[])),
        Arc::new(StaticIdentity::new(Some(Viewer::admin("root")))),
    )
    .with_config(&config);

    resolver.resolve(Arc::new(Article::new("Ciri"))).await;
    assert_eq!(resolver.view().unwrap().edit.unwrap().href, "/wiki/edit/Ciri");
}

#[tokio::test]
async fn edit_link_follows_sign_in_without_new_resolution() {
    let identity = Arc::new(SharedIdentity::new());
    let resolver = ArticleContentResolver::new(Arc::new(store_with(&[], &[])), identity.clone());
    resolver.resolve(Arc::new(Article::new("Yennefer"))).await;

    assert!(resolver.view().unwrap().edit.is_none());

    identity.sign_in(Viewer::admin("root"));
    assert!(resolver.view().unwrap().edit.is_some());

    identity.sign_out();
    assert!(resolver.view().unwrap().edit.is_none());
}

#[tokio::test]
async fn outline_matches_rendered_headings() {
    let resolver = ArticleContentResolver::new(
        Arc::new(store_with(&[], &[])),
        Arc::new(StaticIdentity::anonymous()),
    );
    let article = Article::new("Vesemir")
        .with_content("# Vesemir  Eldest witcher.  ## Training  ### Trials  Text.  ```  # not a heading  ```")
        .with_main_image("https://img.example/vesemir.png");
    resolver.resolve(Arc::new(article)).await;

    let view = resolver.view().unwrap();
    let outline: Vec<_> = view
        .outline
        .iter()
        .map(|e| (e.level, e.label.as_str()))
        .collect();
    assert_eq!(outline, vec![(1, "Vesemir"), (2, "Training"), (3, "Trials")]);

    for (_, label) in &outline {
        assert!(view.body.html.contains(label));
    }
    assert!(view.body.html.contains("<h3>Trials</h3>"));
    assert_eq!(view.image.unwrap().src, "https://img.example/vesemir.png");
}

#[tokio::test]
async fn raw_html_in_content_is_not_rendered() {
    let resolver = ArticleContentResolver::new(
        Arc::new(store_with(&[], &[])),
        Arc::new(StaticIdentity::anonymous()),
    );
    let article = Article::new("Trap").with_content("Hello <img src=x onerror=alert(1)> there");
    resolver.resolve(Arc::new(article)).await;

    let view = resolver.view().unwrap();
    assert!(!view.body.html.contains("<img"));
    assert_eq!(view.body.suppressed_html, 1);
}

#[tokio::test]
async fn seeded_store_resolves_end_to_end() {
    let seed = serde_json::json!({
        "Categories": {
            "witchers": { "title": "Witchers" },
            "rivia": { "title": "Rivia" }
        },
        "Users": {
            "u1": { "username": "dandelion", "img": "https://img.example/d.png" }
        },
        "Articles": [{
            "title": "Geralt",
            "content": "# Geralt  The White Wolf.",
            "mainImage": "https://img.example/geralt.png",
            "cats": ["witchers", "rivia"],
            "contributors": ["u1"]
        }]
    });
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{seed}").unwrap();

    let (store, mut articles) = MemoryStore::load_json(file.path()).await.unwrap();
    let resolver = ArticleContentResolver::new(
        Arc::new(store),
        Arc::new(StaticIdentity::anonymous()),
    );

    let report = resolver.resolve(Arc::new(articles.remove(0))).await;
    assert!(report.categories.is_committed());
    assert!(report.contributors.is_committed());

    let view = resolver.view().unwrap();
    let titles: Vec<_> = view.categories.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Witchers", "Rivia"]);
    assert_eq!(view.contributors[0].id.as_str(), "u1");
    assert_eq!(view.contributors[0].username, "dandelion");

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["title"], "Geralt");
    assert_eq!(json["outline"][0]["anchor"], "geralt");
}
