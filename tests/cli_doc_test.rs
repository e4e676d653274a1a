use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("java")
        .join(name)
}

fn docsearch() -> Command {
    let mut cmd = Command::cargo_bin("docsearch").unwrap();
    cmd.env_remove("DOCSEARCH_DOCS_URL")
        .env_remove("DOCSEARCH_QUIET")
        .env_remove("DOCSEARCH_IMPLICIT_ROOT");
    cmd
}

#[test]
fn prints_page_for_imported_class() {
    let sample = fixture_path("Sample.java");
    docsearch()
        .args(["doc", sample.to_str().unwrap(), "--at", "8:13", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "https://docs.oracle.com/javase/7/docs/api/java/util/List.html\n",
        ));
}

#[test]
fn nested_class_page_and_several_carets() {
    let sample = fixture_path("Sample.java");
    docsearch()
        .args([
            "doc",
            sample.to_str().unwrap(),
            "--at",
            "10:27",
            "--at",
            "14:9",
            "--print",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://docs.oracle.com/javase/7/docs/api/java/util/Map.Entry.html",
        ))
        .stdout(predicate::str::contains(
            "https://docs.oracle.com/javase/7/docs/api/java/lang/String.html",
        ));
}

#[test]
fn class_without_documentation_source() {
    let sample = fixture_path("Sample.java");
    let list = fixture_path("classes.txt");
    docsearch()
        .args([
            "doc",
            sample.to_str().unwrap(),
            "--at",
            "8:18",
            "--print",
            "--class-list",
            list.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "No supported documentation for this class found: com.acme.model.Order",
        ));
}

#[test]
fn blank_caret_is_a_notice() {
    let sample = fixture_path("Sample.java");
    docsearch()
        .args(["doc", sample.to_str().unwrap(), "--at", "2:1", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No identifier under the caret at 2:1"));
}

#[test]
fn project_doc_source_from_config() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join(".docsearch.toml"),
        r#"
[[docs.sources]]
name = "acme"
base_url = "https://docs.acme.test/api"
packages = ["com.acme.*"]
"#,
    )
    .unwrap();

    docsearch()
        .current_dir(tmp.path())
        .args([
            "doc",
            fixture_path("Sample.java").to_str().unwrap(),
            "--at",
            "8:18",
            "--print",
            "--class-list",
            fixture_path("classes.txt").to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://docs.acme.test/api/com/acme/model/Order.html",
        ));
}

#[test]
fn docs_url_from_env() {
    docsearch()
        .env("DOCSEARCH_DOCS_URL", "https://docs.oracle.com/javase/8/docs/api")
        .args([
            "doc",
            fixture_path("Sample.java").to_str().unwrap(),
            "--at",
            "8:13",
            "--print",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://docs.oracle.com/javase/8/docs/api/java/util/List.html",
        ));
}

#[test]
fn all_classes_page() {
    docsearch()
        .args(["all-classes", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://docs.oracle.com/javase/7/docs/api/allclasses-noframe.html",
        ));
}

#[test]
fn doc_requires_a_caret() {
    docsearch()
        .args(["doc", fixture_path("Sample.java").to_str().unwrap()])
        .assert()
        .failure();
}
