use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

fn setup_config(test: &CliTest, keys_to_remove: &str) -> Result<()> {
    test.write_file(
        ".locsweeprc.json",
        &format!(
            r#"{{
            "localeDir": "./locales",
            "keysToRemove": {}
        }}"#,
            keys_to_remove
        ),
    )
}

fn json_key_exists(value: &Value, key_path: &str) -> bool {
    let mut current = value;
    for part in key_path.split('.') {
        match current.get(part) {
            Some(v) => current = v,
            None => return false,
        }
    }
    true
}

#[test]
fn prune_dry_run_reports_sizes_without_writing() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, r#"["a.c"]"#)?;

    let original = r#"{"a": {"b": "hello", "c": "world"}}"#;
    test.write_file("locales/en_US.json", original)?;

    let output = test.prune_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("en_US.json"), "stdout: {stdout}");
    assert!(stdout.contains("bytes"), "stdout: {stdout}");
    assert!(stdout.contains("--apply"), "stdout: {stdout}");

    // File untouched in dry-run
    assert_eq!(test.read_file("locales/en_US.json")?, original);
    Ok(())
}

#[test]
fn prune_apply_removes_keys_from_every_locale() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, r#"["a.c"]"#)?;

    test.write_file("locales/en_US.json", r#"{"a": {"b": "hello", "c": "world"}}"#)?;
    test.write_file("locales/zh_CN.json", r#"{"a": {"b": "你好", "c": "世界"}}"#)?;

    let output = test.prune_command().arg("--apply").output()?;
    assert_eq!(output.status.code(), Some(0));

    let en: Value = serde_json::from_str(&test.read_file("locales/en_US.json")?)?;
    assert!(json_key_exists(&en, "a.b"));
    assert!(!json_key_exists(&en, "a.c"));

    let zh: Value = serde_json::from_str(&test.read_file("locales/zh_CN.json")?)?;
    assert!(json_key_exists(&zh, "a.b"));
    assert!(!json_key_exists(&zh, "a.c"));
    Ok(())
}

#[test]
fn prune_apply_collapses_emptied_parents() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, r#"["a.b"]"#)?;

    test.write_file(
        "locales/en_US.json",
        r#"{"a": {"b": "only child"}, "keep": "me"}"#,
    )?;

    let output = test.prune_command().arg("--apply").output()?;
    assert_eq!(output.status.code(), Some(0));

    let parsed: Value = serde_json::from_str(&test.read_file("locales/en_US.json")?)?;
    assert!(!json_key_exists(&parsed, "a"));
    assert!(json_key_exists(&parsed, "keep"));
    Ok(())
}

#[test]
fn prune_apply_preserves_key_order_and_unicode() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, r#"["middle"]"#)?;

    test.write_file(
        "locales/zh_CN.json",
        r#"{"zebra": "斑马", "middle": "中", "alpha": "阿尔法"}"#,
    )?;

    let output = test.prune_command().arg("--apply").output()?;
    assert_eq!(output.status.code(), Some(0));

    let content = test.read_file("locales/zh_CN.json")?;
    let zebra = content.find("zebra").expect("zebra kept");
    let alpha = content.find("alpha").expect("alpha kept");
    assert!(zebra < alpha, "key order not preserved: {content}");
    assert!(content.contains("斑马"), "non-ASCII escaped: {content}");
    assert!(!content.contains("\\u"), "non-ASCII escaped: {content}");
    Ok(())
}

#[test]
fn prune_removing_nonexistent_key_is_noop() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, r#"["does.not.exist"]"#)?;

    test.write_file("locales/en_US.json", r#"{"a": {"b": "hello"}}"#)?;

    let output = test.prune_command().arg("--apply").output()?;
    assert_eq!(output.status.code(), Some(0));

    let parsed: Value = serde_json::from_str(&test.read_file("locales/en_US.json")?)?;
    assert!(json_key_exists(&parsed, "a.b"));
    Ok(())
}

#[test]
fn prune_with_empty_key_list_does_nothing() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, "[]")?;

    test.write_file("locales/en_US.json", r#"{"a": {"b": "hello"}}"#)?;

    let output = test.prune_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("No keys to remove"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn prune_reads_keys_from_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, "[]")?;

    test.write_file("locales/en_US.json", r#"{"a": {"b": "hello", "c": "world"}}"#)?;
    test.write_file("unused.txt", "# from the last scan\na.c\n")?;

    let output = test
        .prune_command()
        .args(["--keys-file", "unused.txt", "--apply"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let parsed: Value = serde_json::from_str(&test.read_file("locales/en_US.json")?)?;
    assert!(json_key_exists(&parsed, "a.b"));
    assert!(!json_key_exists(&parsed, "a.c"));
    Ok(())
}

#[test]
fn prune_container_path_removes_whole_subtree() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, r#"["a"]"#)?;

    test.write_file(
        "locales/en_US.json",
        r#"{"a": {"b": "x", "c": {"d": "y"}}, "keep": "me"}"#,
    )?;

    let output = test.prune_command().arg("--apply").output()?;
    assert_eq!(output.status.code(), Some(0));

    let parsed: Value = serde_json::from_str(&test.read_file("locales/en_US.json")?)?;
    assert!(!json_key_exists(&parsed, "a"));
    assert!(json_key_exists(&parsed, "keep"));
    Ok(())
}

#[test]
fn prune_refuses_malformed_locale_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, r#"["a.b"]"#)?;

    test.write_file("locales/en_US.json", "{ broken json")?;

    let output = test.prune_command().arg("--apply").output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.to_lowercase().contains("parse"), "stderr: {stderr}");

    // Original file left as it was
    assert_eq!(test.read_file("locales/en_US.json")?, "{ broken json");
    Ok(())
}
