use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .stringsweeprc.json"));

    let content = test.read_file(".stringsweeprc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["resRoot"], "app/src/main/res");
    assert_eq!(parsed["resourceFileName"], "strings.xml");
    assert_eq!(
        parsed["sourceRoots"],
        serde_json::json!(["app/src/main/java", "app/src/main/kotlin"])
    );
    assert_eq!(parsed["sourceExtensions"], serde_json::json!(["java", "kt"]));
    Ok(())
}

#[test]
fn test_init_existing_config_fails() -> Result<()> {
    let test = CliTest::with_file(".stringsweeprc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".stringsweeprc.json")?, "{}");
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));
    Ok(())
}
