//! Integration test: declarations on disk -> validated tables -> redirect lookups.
//!
//! Writes redirect declarations and xref targets to a temp dir, derives the
//! site-wide and per-page tables, and checks navigation for sample locations.

use docredir_core::location::Location;
use docredir_core::redirector::{RecordingNavigator, RedirectTable, Redirector, Variant};
use docredir_core::redirects::{self, RedirectError, Redirects};
use docredir_core::script;
use std::fs;
use tempfile::tempdir;

const REDIRECTS: &str = r#"{
    "book": ["index.html"],
    "ch-installation": ["installation.html", "index.html#sec-installing", "install.html"],
    "opt-networking": ["options.html", "index.html#opt-net", "configuration.html#net"]
}"#;

const TARGETS: &str = r#"{
    "book": "index.html",
    "ch-installation": "installation.html",
    "opt-networking": "options.html"
}"#;

fn navigate(table: &RedirectTable, variant: Variant, loc: Location) -> Option<String> {
    let mut nav = RecordingNavigator::default();
    Redirector::new(table, variant).run(&loc, &mut nav);
    nav.target
}

#[test]
fn declarations_to_lookups() {
    let dir = tempdir().unwrap();
    let redirects_path = dir.path().join("redirects.json");
    let targets_path = dir.path().join("xref-targets.json");
    fs::write(&redirects_path, REDIRECTS).unwrap();
    fs::write(&targets_path, TARGETS).unwrap();

    let declared = Redirects::load(&redirects_path).unwrap();
    let targets = redirects::load_targets(&targets_path).unwrap();
    let validated = declared.validate(targets).expect("valid declarations");

    let site = validated.client_side_table();
    let moved_install =
        Location::parse("https://docs.example.org/manual/index#sec-installing").unwrap();
    assert_eq!(
        navigate(&site, Variant::Page, moved_install).as_deref(),
        Some("installation.html#ch-installation")
    );
    let moved_option = Location::parse("/manual/configuration.html#net").unwrap();
    assert_eq!(
        navigate(&site, Variant::Page, moved_option).as_deref(),
        Some("options.html#opt-networking")
    );
    let unrelated = Location::parse("/manual/configuration.html").unwrap();
    assert_eq!(navigate(&site, Variant::Page, unrelated), None);

    let index_page = validated.client_redirects("index.html");
    assert_eq!(
        navigate(&index_page, Variant::Anchor, Location::new("/manual/", "#opt-net")).as_deref(),
        Some("options.html#opt-networking")
    );
    assert_eq!(
        navigate(&index_page, Variant::Anchor, Location::new("/manual/", "#net")),
        None
    );

    let js = script::render(Variant::Anchor, &index_page).unwrap();
    assert!(js.contains(r#"\"opt-net\":\"options.html#opt-networking\""#));
    assert!(js.contains(r#"\"sec-installing\":\"installation.html#ch-installation\""#));
}

#[test]
fn table_file_scenarios() {
    let dir = tempdir().unwrap();
    let cases: [(&str, &str, &str, Variant, Option<&str>); 4] = [
        (
            "/manual/foo/",
            "",
            r#"{"index.html#": "/new/foo.html"}"#,
            Variant::Page,
            Some("/new/foo.html"),
        ),
        (
            "/manual/bar.html",
            "baz",
            r#"{"bar.html#baz": "/new/bar.html#baz"}"#,
            Variant::Page,
            Some("/new/bar.html#baz"),
        ),
        ("/manual/qux", "", "{}", Variant::Page, None),
        (
            "/manual/qux",
            "old-section",
            r#"{"old-section": "/new-page#new-section"}"#,
            Variant::Anchor,
            Some("/new-page#new-section"),
        ),
    ];
    for (i, (path, hash, json, variant, expected)) in cases.into_iter().enumerate() {
        let table_path = dir.path().join(format!("table-{i}.json"));
        fs::write(&table_path, json).unwrap();
        let table = RedirectTable::load(&table_path).unwrap();
        assert_eq!(
            navigate(&table, variant, Location::new(path, hash)).as_deref(),
            expected,
            "case {i}"
        );
    }
}

#[test]
fn server_side_source_cannot_host_anchor_redirects() {
    let redirects = Redirects::from_json_str(
        r#"{
            "book": ["index.html", "intro.html"],
            "ch-installation": ["installation.html", "intro.html#installing"]
        }"#,
    )
    .unwrap();
    let targets =
        write_targets(r#"{"book": "index.html", "ch-installation": "installation.html"}"#);
    match redirects.validate(targets) {
        Err(RedirectError::Transitive(pairs)) => assert_eq!(
            pairs,
            vec![(
                "intro.html#installing".to_string(),
                "index.html#installing".to_string()
            )]
        ),
        other => panic!("expected transitive error, got {other:?}"),
    }
}

#[test]
fn missing_table_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(RedirectTable::load(&dir.path().join("nope.json")).is_err());
}

fn write_targets(json: &str) -> redirects::XrefTargets {
    let dir = tempdir().unwrap();
    let path = dir.path().join("targets.json");
    fs::write(&path, json).unwrap();
    redirects::load_targets(&path).unwrap()
}
