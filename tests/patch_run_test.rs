use asset_rebrand::core::brand::HtmlBrander;
use asset_rebrand::core::bundle::BundlePatcher;
use asset_rebrand::core::recolor::Recolorer;
use asset_rebrand::core::theme::INJECTION_MARKER;
use asset_rebrand::core::Pass;
use asset_rebrand::{PatchConfig, PatchEngine, PatchError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const INDEX_HTML: &str = "<!DOCTYPE html><html><head>\
<title>IT Tools - Handy online tools for developers</title>\
<svg><stop stop-color=\"#3b956f\"/></svg>\
</head><body><div id=\"app\"></div></body></html>";

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "assets/index-a1b2c3.js",
        r#"const env={BASE_URL:"/",MODE:"production"};"#,
    );
    write(dir.path(), "index.html", INDEX_HTML);
    write(dir.path(), "assets/style.css", ".btn{color:#36AD6AFF}");
    dir
}

fn config_for(dir: &TempDir) -> PatchConfig {
    PatchConfig::for_web_root(dir.path()).with_base_path("/foo/")
}

#[test]
fn test_bundle_base_url_is_patched() {
    let dir = site();
    let outcome = BundlePatcher::new().unwrap().run(&config_for(&dir)).unwrap();

    assert_eq!(outcome.patched, vec![dir.path().join("assets/index-a1b2c3.js")]);
    assert_eq!(
        read(dir.path(), "assets/index-a1b2c3.js"),
        r#"const env={BASE_URL:"/foo/",MODE:"production"};"#
    );
}

#[test]
fn test_no_bundle_files_is_fatal_with_code_one() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "index.html", INDEX_HTML);

    let (mut out, mut err_out) = (Vec::<u8>::new(), Vec::<u8>::new());
    let err = PatchEngine::new(config_for(&dir))
        .run_with(&mut out, &mut err_out)
        .unwrap_err();
    assert!(matches!(err, PatchError::NoBundleFiles { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(!String::from_utf8(out).unwrap().contains("Patched bundle(s)"));
    // later passes never ran
    assert_eq!(read(dir.path(), "index.html"), INDEX_HTML);
}

#[test]
fn test_bundle_without_literal_is_fatal_with_code_two() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "assets/index-x.js", "console.log('changed upstream');");

    let err = BundlePatcher::new().unwrap().run(&config_for(&dir)).unwrap_err();
    assert!(matches!(err, PatchError::BundleLiteralNotFound { searched: 1 }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_second_bundle_run_fails_with_code_two() {
    let dir = site();
    let config = config_for(&dir);
    BundlePatcher::new().unwrap().run(&config).unwrap();

    let err = BundlePatcher::new().unwrap().run(&config).unwrap_err();
    assert!(matches!(err, PatchError::BundleLiteralNotFound { searched: 1 }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_root_base_path_fails_with_code_two() {
    let dir = site();
    let config = PatchConfig::for_web_root(dir.path()).with_base_path("");

    let err = PatchEngine::new(config)
        .run_with(&mut Vec::<u8>::new(), &mut Vec::<u8>::new())
        .unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_branding_injects_single_block_before_head_close() {
    let dir = site();
    let outcome = HtmlBrander.run(&config_for(&dir)).unwrap();
    assert_eq!(outcome.branded, vec![dir.path().join("index.html")]);

    let html = read(dir.path(), "index.html");
    assert_eq!(html.matches(&format!("id=\"{INJECTION_MARKER}\"")).count(), 1);
    assert!(html.find(INJECTION_MARKER).unwrap() < html.find("</head>").unwrap());
    assert!(html.contains("Heartbeat Utility Bench · IT Tools"));
    assert!(html.contains("stop-color=\"#ae2d1f\""));
}

#[test]
fn test_branding_is_idempotent() {
    let dir = site();
    let config = config_for(&dir);
    HtmlBrander.run(&config).unwrap();
    let first = read(dir.path(), "index.html");

    let outcome = HtmlBrander.run(&config).unwrap();
    assert!(outcome.branded.is_empty());
    assert_eq!(read(dir.path(), "index.html"), first);
}

#[test]
fn test_branding_walks_nested_pages_and_reports_bad_files() {
    let dir = site();
    write(dir.path(), "docs/nested/page.html", "<html><head></head></html>");
    fs::write(dir.path().join("broken.html"), [0xff, 0xfe, 0x00]).unwrap();

    let outcome = HtmlBrander.run(&config_for(&dir)).unwrap();
    assert_eq!(outcome.candidates, 3);
    assert_eq!(outcome.branded.len(), 2);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].path, dir.path().join("broken.html"));
}

#[test]
fn test_recolor_counts_touched_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.css", "x{color:#36AD6AFF}");
    write(dir.path(), "js/b.js", "const c='#36ad6aff';");
    write(dir.path(), "img/c.svg", "<svg fill=\"#36Ad6aFf\"/>");
    write(dir.path(), "d.css", "x{color:#000}");
    write(dir.path(), "e.html", "<p>plain</p>");
    write(dir.path(), "notes.txt", "#36AD6AFF");

    let config = config_for(&dir).with_accent("#112233");
    let recolorer = Recolorer::new(&config.recolor.target).unwrap();
    let outcome = recolorer.run(&config).unwrap();

    assert_eq!(outcome.touched.len(), 3);
    assert_eq!(outcome.occurrences, 3);
    assert_eq!(read(dir.path(), "js/b.js"), "const c='#112233';");
    assert_eq!(read(dir.path(), "notes.txt"), "#36AD6AFF");
}

#[test]
fn test_hidden_files_are_left_alone() {
    let dir = site();
    write(dir.path(), ".well-known/info.html", "<html><head></head></html>");
    write(dir.path(), ".cache/old.css", "x{color:#36AD6AFF}");

    let summary = PatchEngine::new(config_for(&dir))
        .run_with(&mut Vec::<u8>::new(), &mut Vec::<u8>::new())
        .unwrap();
    assert_eq!(summary.brand.branded, vec![dir.path().join("index.html")]);
    assert_eq!(summary.recolor.touched, vec![dir.path().join("assets/style.css")]);
    assert_eq!(read(dir.path(), ".well-known/info.html"), "<html><head></head></html>");
    assert_eq!(read(dir.path(), ".cache/old.css"), "x{color:#36AD6AFF}");
}

#[test]
fn test_recolor_without_matches_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.css", "x{color:red}");

    let config = config_for(&dir);
    let outcome = Recolorer::new(&config.recolor.target).unwrap().run(&config).unwrap();
    assert!(outcome.touched.is_empty());
    assert!(outcome.failures.is_empty());
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = site();
    let config = config_for(&dir).with_dry_run(true);

    let summary = PatchEngine::new(config)
        .run_with(&mut Vec::<u8>::new(), &mut Vec::<u8>::new())
        .unwrap();
    assert_eq!(summary.bundle.patched.len(), 1);
    assert_eq!(summary.brand.branded.len(), 1);
    assert_eq!(summary.recolor.touched.len(), 1);

    assert_eq!(read(dir.path(), "index.html"), INDEX_HTML);
    assert_eq!(read(dir.path(), "assets/style.css"), ".btn{color:#36AD6AFF}");
}

#[test]
fn test_full_run() {
    let dir = site();
    let config = config_for(&dir).with_accent("#0055AA");

    let (mut out, mut err_out) = (Vec::<u8>::new(), Vec::<u8>::new());
    let summary = PatchEngine::new(config).run_with(&mut out, &mut err_out).unwrap();
    assert_eq!(summary.soft_failures(), 0);

    let out = String::from_utf8(out).unwrap();
    let bundle = dir.path().join("assets/index-a1b2c3.js");
    assert!(out.contains(&format!("Patched bundle(s): {}", bundle.display())));
    assert!(out.contains("Swapped #36AD6AFF -> #0055aa in 1 asset(s)."));
    assert!(err_out.is_empty());
    assert_eq!(summary.recolor.touched, vec![dir.path().join("assets/style.css")]);
    assert_eq!(read(dir.path(), "assets/style.css"), ".btn{color:#0055aa}");
    assert!(read(dir.path(), "index.html").contains("--hb-accent: #0055aa;"));
}
