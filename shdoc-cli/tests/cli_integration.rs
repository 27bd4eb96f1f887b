//! Integration tests for the shdoc CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn shdoc() -> Command {
    Command::cargo_bin("shdoc").unwrap()
}

#[test]
fn test_process_html_default() {
    let mut cmd = shdoc();
    cmd.arg("process").arg(fixture_path("deploy.sh"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<title>tests/fixtures/deploy.sh</title>"))
        .stdout(predicate::str::contains("<p>Deploy the site.</p>"))
        .stdout(predicate::str::contains(
            "<p>Build with <em>release</em> settings.</p>",
        ))
        .stdout(predicate::str::contains("make build"))
        .stdout(predicate::str::contains("<div class=\"outer\">").count(4));
}

#[test]
fn test_process_html_escapes_code() {
    let mut cmd = shdoc();
    cmd.arg("process")
        .write_stdin("# Redirect.\ncat <in >out && echo done\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cat &lt;in &gt;out &amp;&amp; echo done"))
        .stdout(predicate::str::contains("<title><stdin></title>"));
}

#[test]
fn test_shortname_title() {
    let mut cmd = shdoc();
    cmd.arg("process").arg(fixture_path("deploy.sh")).arg("-S");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<title>deploy.sh</title>"));
}

#[test]
fn test_explicit_title_wins() {
    let mut cmd = shdoc();
    cmd.arg("process")
        .arg(fixture_path("deploy.sh"))
        .arg("-S")
        .arg("-T")
        .arg("Deployment");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<title>Deployment</title>"));
}

#[test]
fn test_custom_template_with_language_and_metadata() {
    let mut cmd = shdoc();
    cmd.arg("process")
        .arg(fixture_path("deploy.sh"))
        .arg("-t")
        .arg(fixture_path("page.html"))
        .arg("-m")
        .arg(".py=python")
        .arg("-m")
        .arg(".sh=bash")
        .arg("-d")
        .arg("author=ops team");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("data-lang=\"bash\""))
        .stdout(predicate::str::contains("data-author=\"ops team\""))
        .stdout(predicate::str::contains("<p>Deploy the site.</p>"));
}

#[test]
fn test_language_fallback() {
    let mut cmd = shdoc();
    cmd.arg("process")
        .arg("-t")
        .arg(fixture_path("page.html"))
        .arg("-l")
        .arg("sh")
        .write_stdin("echo hi\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("data-lang=\"sh\""))
        .stdout(predicate::str::contains("data-author=\"\""));
}

#[test]
fn test_json_output() {
    let mut cmd = shdoc();
    cmd.arg("process")
        .arg("-f")
        .arg("json")
        .write_stdin("code1\n# doc\ncode2\n");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!([[["code1\n"], []], [["code2\n"], ["doc"]]])
    );
}

#[test]
fn test_json_empty_input() {
    let mut cmd = shdoc();
    cmd.arg("process").arg("-f").arg("json").write_stdin("");

    cmd.assert().success().stdout("[\n  [\n    [],\n    []\n  ]\n]\n");
}

#[test]
fn test_weave_output() {
    let mut cmd = shdoc();
    cmd.arg("process")
        .arg(fixture_path("deploy.sh"))
        .arg("--format")
        .arg("weave");

    cmd.assert().success().stdout(
        "\nDeploy the site.\n\nBuilds the static files and copies them to the web root.\n\
         Build with *release* settings.\nCopy files when the build succeeds.\n",
    );
}

#[test]
fn test_tangle_output() {
    let mut cmd = shdoc();
    cmd.arg("process").arg(fixture_path("deploy.sh")).arg("-f").arg("tangle");

    cmd.assert().success().stdout(
        "#!/bin/sh\n\nset -e\n\nmake build\n\n    cp -r public/ /var/www/site\n",
    );
}

#[test]
fn test_all_docs_file() {
    let mut cmd = shdoc();
    cmd.arg("process").arg(fixture_path("all-docs.sh")).arg("-f").arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!([[[], ["Nothing but prose.", "", "Second paragraph."]]])
    );
}

#[test]
fn test_custom_marker() {
    let mut cmd = shdoc();
    cmd.arg("process")
        .arg(fixture_path("query.sql"))
        .arg("--marker=--")
        .arg("-f")
        .arg("weave");

    cmd.assert().success().stdout("Active users.\n");
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("deploy.html");

    let mut cmd = shdoc();
    cmd.arg("process")
        .arg(fixture_path("deploy.sh"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success().stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("<p>Deploy the site.</p>"));
    assert!(content.contains("</html>"));
}

#[test]
fn test_invalid_file() {
    let mut cmd = shdoc();
    cmd.arg("process").arg("nonexistent.sh");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found: nonexistent.sh"));
}

#[test]
fn test_missing_template() {
    let mut cmd = shdoc();
    cmd.arg("process")
        .arg(fixture_path("deploy.sh"))
        .arg("-t")
        .arg("no-such-template.html");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("template not found"));
}

#[test]
fn test_malformed_metadata() {
    let mut cmd = shdoc();
    cmd.arg("process").arg(fixture_path("deploy.sh")).arg("-d").arg("author");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no '=' found in 'author'"));
}

#[test]
fn test_invalid_utf8_input() {
    let mut cmd = shdoc();
    cmd.arg("process").write_stdin(vec![b'#', b' ', 0xff, b'\n']);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read <stdin>"));
}

#[test]
fn test_help_command() {
    let mut cmd = shdoc();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Literate documentation"));
}

#[test]
fn test_list_formats() {
    let mut cmd = shdoc();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("html"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("weave"))
        .stdout(predicate::str::contains("tangle"));
}

#[test]
fn test_verbose_logging_goes_to_stderr() {
    let mut cmd = shdoc();
    cmd.env_remove("RUST_LOG")
        .arg("process")
        .arg("-v")
        .arg("-f")
        .arg("tangle")
        .write_stdin("echo hi\n");

    cmd.assert()
        .success()
        .stdout("echo hi\n")
        .stderr(predicate::str::contains("Wrote 1 chunks from <stdin>"));
}

#[test]
fn test_template_control_flow() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("page.j2");
    fs::write(
        &template,
        "{% if language %}<body class=\"{{ language }}\">{% endif %}\
         {% for key, value in metadata|items %}<meta name=\"{{ key }}\" content=\"{{ value }}\">{% endfor %}\
         {{ content }}",
    )
    .unwrap();

    let mut cmd = shdoc();
    cmd.arg("process")
        .arg("-t")
        .arg(&template)
        .arg("-l")
        .arg("bash")
        .arg("-d")
        .arg("author=ops")
        .write_stdin("# Hi.\necho hi\n");

    let output = cmd.assert().success().get_output().stdout.clone();
    let page = String::from_utf8(output).unwrap();
    assert!(page.starts_with("<body class=\"bash\"><meta name=\"author\" content=\"ops\"><div class=\"outer\">"));
    assert!(!page.contains("{%"));
}

#[test]
fn test_stylesheet_in_bundled_template() {
    let mut cmd = shdoc();
    cmd.arg("process")
        .arg("-s")
        .arg("site.css")
        .write_stdin("echo hi\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<link rel=\"stylesheet\" href=\"site.css\">"));
}

#[test]
fn test_failed_read_keeps_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("bad.sh");
    let output_file = temp_dir.path().join("out.html");
    fs::write(&input, b"# ok\n\xff\xfe\n").unwrap();
    fs::write(&output_file, "PREVIOUS GOOD OUTPUT").unwrap();

    let mut cmd = shdoc();
    cmd.arg("process").arg(&input).arg("-o").arg(&output_file);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));

    assert_eq!(
        fs::read_to_string(&output_file).unwrap(),
        "PREVIOUS GOOD OUTPUT"
    );
}
