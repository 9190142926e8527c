//! End-to-end tests: configuration and category files on disk, driven
//! through a ShelfSession.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use collection::{BatchOutcome, DraftTarget, ReloadPhase, ShelfSession};
use data_loader::Movie;
use sources::FileSource;

const CONFIG: &str = "app/resources/config.json";

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn build_shelf(root: &Path) {
    write(
        root,
        CONFIG,
        r#"{
            "resourcePath": "app/resources/movies/",
            "categories": [
                { "name": "Action", "isSelected": false },
                { "name": "Drama", "isSelected": false },
                { "name": "Comedy", "isSelected": false }
            ],
            "printQualities": [
                { "name": "HD", "isSelected": false },
                { "name": "SD", "isSelected": false }
            ]
        }"#,
    );
    write(
        root,
        "app/resources/movies/English/Action.json",
        r#"[
            { "name": "Heat", "year": 1995, "printQuality": "HD", "isHindi": false },
            { "name": "Ronin", "year": 1998, "printQuality": "SD", "isHindi": false }
        ]"#,
    );
    write(
        root,
        "app/resources/movies/English/Drama.json",
        r#"[
            { "name": "Lagaan", "year": 2001, "printQuality": "HD", "isHindi": true },
            { "name": "Ran", "year": 1985, "printQuality": "SD", "isHindi": false }
        ]"#,
    );
    // Comedy has no file in English
    write(
        root,
        "app/resources/movies/Hindi/Action.json",
        r#"[{ "name": "Sholay", "year": 1975, "printQuality": "SD", "isHindi": true }]"#,
    );
}

fn sorted_names(movies: &[Movie]) -> Vec<String> {
    let mut names: Vec<String> = movies.iter().filter_map(|m| m.name.clone()).collect();
    names.sort();
    names
}

async fn open_session(root: &Path) -> ShelfSession {
    let source = Arc::new(FileSource::new(root));
    ShelfSession::open(source.as_ref(), CONFIG, source.clone())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_initial_load_shows_all_categories() {
    let dir = tempfile::tempdir().unwrap();
    build_shelf(dir.path());
    let mut session = open_session(dir.path()).await;

    assert_eq!(session.phase(), ReloadPhase::Fetching { pending: 3 });
    let outcomes = session.settle().await;

    // Comedy fails (missing file) without disturbing the others
    assert_eq!(outcomes.len(), 3);
    let failed: Vec<_> = outcomes
        .iter()
        .filter(|o| matches!(o, BatchOutcome::Failed { .. }))
        .map(|o| o.category().to_string())
        .collect();
    assert_eq!(failed, ["Comedy"]);

    assert_eq!(
        sorted_names(session.movies()),
        ["Heat", "Lagaan", "Ran", "Ronin"]
    );
    assert_eq!(session.phase(), ReloadPhase::Idle);
}

#[tokio::test]
async fn test_selecting_one_category() {
    let dir = tempfile::tempdir().unwrap();
    build_shelf(dir.path());
    let mut session = open_session(dir.path()).await;
    session.settle().await;

    assert!(session.toggle_category("Drama").unwrap());
    assert!(!session.state().all_categories_selected);
    session.settle().await;
    assert_eq!(sorted_names(session.movies()), ["Lagaan", "Ran"]);

    // Back to everything
    session.toggle_all_categories(true);
    session.settle().await;
    assert_eq!(session.movies().len(), 4);

    assert!(session.toggle_category("Western").is_err());
}

#[tokio::test]
async fn test_hindi_and_quality_filters() {
    let dir = tempfile::tempdir().unwrap();
    build_shelf(dir.path());
    let mut session = open_session(dir.path()).await;
    session.settle().await;

    assert!(session.toggle_print_quality("HD").unwrap());
    session.settle().await;
    assert_eq!(sorted_names(session.movies()), ["Heat", "Lagaan"]);

    assert!(session.toggle_hindi_only());
    session.settle().await;
    assert_eq!(sorted_names(session.movies()), ["Lagaan"]);

    assert!(session.toggle_print_quality("4K").is_err());
}

#[tokio::test]
async fn test_language_switch_reloads() {
    let dir = tempfile::tempdir().unwrap();
    build_shelf(dir.path());
    let mut session = open_session(dir.path()).await;

    // Switch before the first reload settles; its batches are dropped
    session.set_language("Hindi");
    let outcomes = session.settle().await;
    assert!(outcomes.iter().all(|o| !matches!(o, BatchOutcome::Appended { category, .. } if category == "Drama")));

    assert_eq!(sorted_names(session.movies()), ["Sholay"]);
}

#[tokio::test]
async fn test_edit_rows_in_collection() {
    let dir = tempfile::tempdir().unwrap();
    build_shelf(dir.path());
    let mut session = open_session(dir.path()).await;
    session.toggle_category("Action").unwrap();
    session.settle().await;
    assert_eq!(session.movies().len(), 2);

    session.begin_add();
    session.draft_mut().unwrap().name = Some("Ghayal".into());
    assert_eq!(session.save_draft(), Ok(DraftTarget::New));
    assert_eq!(session.movies().len(), 3);

    session.select_row(0).unwrap();
    let original = session.movies()[0].clone();
    session.draft_mut().unwrap().series_name = Some("Classics".into());
    session.save_draft().unwrap();
    assert_eq!(session.movies()[0].series_name.as_deref(), Some("Classics"));
    assert_eq!(session.movies()[0].name, original.name);

    session.select_row(0).unwrap();
    let removed = session.delete_selected().unwrap();
    assert_eq!(removed.name, original.name);
    assert_eq!(session.movies().len(), 2);

    // A reload drops an open draft and the unsaved edits with it
    session.select_row(0).unwrap();
    session.reset_all_categories(false);
    assert!(session.draft().is_none());
    session.settle().await;
    assert!(session.movies().iter().all(|m| m.name.as_deref() != Some("Ghayal")));
}

#[tokio::test]
async fn test_show_only_overrides_preselected_flags() {
    let dir = tempfile::tempdir().unwrap();
    build_shelf(dir.path());
    // Drama and HD come preselected from the configuration
    write(
        dir.path(),
        CONFIG,
        r#"{
            "resourcePath": "app/resources/movies/",
            "categories": [
                { "name": "Action", "isSelected": false },
                { "name": "Drama", "isSelected": true }
            ],
            "printQualities": [
                { "name": "HD", "isSelected": true },
                { "name": "SD", "isSelected": false }
            ]
        }"#,
    );
    let mut session = open_session(dir.path()).await;
    session.settle().await;

    let names = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    // Naming a preselected option keeps it selected, even twice
    session
        .show_only(&names(&["Drama", "Drama"]), &names(&["HD", "HD"]))
        .unwrap();
    session.settle().await;
    assert_eq!(sorted_names(session.movies()), ["Lagaan"]);

    // Naming only SD drops the preselected HD
    session.show_only(&names(&["Action"]), &names(&["SD"])).unwrap();
    session.settle().await;
    assert_eq!(sorted_names(session.movies()), ["Ronin"]);
    assert!(!session.state().categories[1].is_selected);

    // Nothing named means every category and any quality
    session.show_only(&[], &[]).unwrap();
    assert!(session.state().all_categories_selected);
    assert!(!session.state().has_quality_filter());
    session.settle().await;
    assert_eq!(sorted_names(session.movies()), ["Heat", "Lagaan", "Ran", "Ronin"]);

    // Unknown names change nothing
    let before = session.state().clone();
    assert!(session.show_only(&names(&["Western"]), &[]).is_err());
    assert!(session.show_only(&[], &names(&["4K"])).is_err());
    assert_eq!(session.state(), &before);
}

#[tokio::test]
async fn test_set_hindi_only_is_not_a_toggle() {
    let dir = tempfile::tempdir().unwrap();
    build_shelf(dir.path());
    let mut session = open_session(dir.path()).await;

    session.set_hindi_only(true);
    session.set_hindi_only(true);
    session.settle().await;
    assert_eq!(sorted_names(session.movies()), ["Lagaan"]);
}
