//! Integration test: full cleanup runs over scratch source trees.
//!
//! Each test builds a small tree under a temp directory, runs a
//! [`Cleaner`] over it, and checks both the rewritten files and the
//! report artifact.

use debrand_core::{Cleaner, CleanerConfig, FileOutcome, RunSummary};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RULES: &[(&str, &str)] = &[
    ("✨", ""),
    ("🤖", ""),
    (r"\bAssistant IA\b", "Assistant"),
    ("Powered by AI", "Automatisé"),
];

fn cleaner(tmp: &TempDir) -> Cleaner {
    Cleaner::builder()
        .config(CleanerConfig::default())
        .root(tmp.path().join("src"))
        .report(tmp.path().join("REPORT.txt"))
        .rules(RULES.iter().copied())
        .markers(["ai-badge", "ai-glow"])
        .build()
        .expect("cleaner should build")
}

fn write(path: &Path, content: impl AsRef<[u8]>) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read_report(tmp: &TempDir) -> String {
    fs::read_to_string(tmp.path().join("REPORT.txt")).expect("report should exist")
}

// ── Happy path ──

#[test]
fn rewrites_matching_files_and_reports_them() {
    let tmp = TempDir::new().unwrap();
    let hero = tmp.path().join("src/components/Hero.tsx");
    let styles = tmp.path().join("src/styles/app.css");
    let plain = tmp.path().join("src/util/math.ts");
    write(
        &hero,
        "// IA banner\n<h1 className=\"title ai-glow\">✨ Assistant IA</h1>\n",
    );
    write(&styles, "/* 🤖 theme */\n.card { color: red; }\n");
    write(&plain, "export const add = (a, b) => a + b;\n");

    let summary = cleaner(&tmp).run().expect("run should succeed");

    assert_eq!(summary.files_scanned, 3);
    assert_eq!(summary.files_modified(), 2);
    assert_eq!(
        fs::read_to_string(&hero).unwrap(),
        "\n<h1 className=\"title \"> Assistant</h1>\n"
    );
    assert_eq!(
        fs::read_to_string(&styles).unwrap(),
        "/*  theme */\n.card { color: red; }\n"
    );
    assert_eq!(
        fs::read_to_string(&plain).unwrap(),
        "export const add = (a, b) => a + b;\n"
    );

    let report = read_report(&tmp);
    assert!(report.contains("Files modified: 2\n"));
    assert!(report.contains(&format!("{}\n", hero.display())));
    assert!(report.contains(&format!("{}\n", styles.display())));
    assert!(!report.contains("math.ts"));
}

#[test]
fn untouched_file_is_byte_identical_and_not_reported() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("src/App.jsx");
    let content = "// plain comment\nexport default function App() {\n  return <div className=\"app\" />;\n}\n";
    write(&path, content);

    let summary = cleaner(&tmp).run().unwrap();

    assert_eq!(fs::read(&path).unwrap(), content.as_bytes());
    assert_eq!(summary.files_modified(), 0);
    assert_eq!(summary.files_scanned, 1);
}

#[test]
fn excluded_and_unrecognized_files_are_skipped() {
    let tmp = TempDir::new().unwrap();
    let vendored = tmp.path().join("src/node_modules/pkg/index.js");
    let notes = tmp.path().join("src/NOTES.md");
    write(&vendored, "✨\n");
    write(&notes, "✨\n");

    let summary = cleaner(&tmp).run().unwrap();

    assert_eq!(summary.files_scanned, 0);
    assert_eq!(fs::read_to_string(&vendored).unwrap(), "✨\n");
    assert_eq!(fs::read_to_string(&notes).unwrap(), "✨\n");
}

#[test]
fn dry_run_reports_without_writing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("src/Badge.tsx");
    write(&path, "<b>Powered by AI</b>\n");

    let cleaner = Cleaner::builder()
        .root(tmp.path().join("src"))
        .report(tmp.path().join("REPORT.txt"))
        .rules(RULES.iter().copied())
        .dry_run(true)
        .build()
        .unwrap();
    let summary = cleaner.run().unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.files_modified(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "<b>Powered by AI</b>\n");
    assert!(read_report(&tmp).starts_with("AI BRANDING CLEANUP REPORT (DRY RUN)"));
}

#[test]
fn callback_sees_every_file_in_order() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("src/a.ts"), "✨\n");
    write(&tmp.path().join("src/b.ts"), "ok\n");

    let mut seen: Vec<(PathBuf, bool)> = Vec::new();
    cleaner(&tmp)
        .run_with(|path, outcome| {
            seen.push((
                path.to_path_buf(),
                matches!(outcome, FileOutcome::Modified(_)),
            ));
        })
        .unwrap();

    assert_eq!(
        seen,
        vec![
            (tmp.path().join("src/a.ts"), true),
            (tmp.path().join("src/b.ts"), false),
        ]
    );
}

// ── Edge cases ──

#[test]
fn empty_tree_writes_zero_report() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("src")).unwrap();

    let summary = cleaner(&tmp).run().unwrap();

    assert_eq!(summary, RunSummary::new());
    let report = read_report(&tmp);
    assert!(report.contains("Files modified: 0\n"));
    assert!(report.contains("Replacements: 0\n"));
    assert!(report.contains("Lines modified: 0\n"));
    assert!(report.ends_with(&format!("MODIFIED FILES:\n{}\n", "-".repeat(60))));
}

#[test]
fn missing_root_is_treated_as_empty() {
    let tmp = TempDir::new().unwrap();

    let summary = cleaner(&tmp).run().unwrap();

    assert_eq!(summary.files_scanned, 0);
    assert!(tmp.path().join("REPORT.txt").exists());
}

#[test]
fn undecodable_file_is_skipped_and_run_completes() {
    let tmp = TempDir::new().unwrap();
    let bad = tmp.path().join("src/legacy.js");
    let good = tmp.path().join("src/modern.js");
    write(&bad, b"// \xe9t\xe9 \xe2\x9c\n");
    write(&good, "const label = \"✨ Assistant IA\";\n");

    let summary = cleaner(&tmp).run().unwrap();

    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.files_modified(), 1);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].path, bad);
    assert!(summary.failures[0].message.contains("UTF-8"));

    let report = read_report(&tmp);
    assert!(!report.contains("legacy.js"));
    assert!(report.contains("modern.js"));
    assert_eq!(fs::read(&bad).unwrap(), b"// \xe9t\xe9 \xe2\x9c\n");
}

#[test]
fn report_write_failure_is_an_error() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("src")).unwrap();

    let cleaner = Cleaner::builder()
        .root(tmp.path().join("src"))
        .report(tmp.path())
        .build()
        .unwrap();

    assert!(cleaner.run().is_err());
}
