use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{BASE_STRINGS, CliTest, stderr, stdout};

const ES_STRINGS: &str = "app/src/main/res/values-es/strings.xml";

const BASE_CONTENT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="used">Used</string>
    <string name="single">Single</string>
    <string name="wrapped">
    </string>
</resources>
"#;

const ES_CONTENT: &str = r#"<resources>
    <string name="used">Usado</string>
    <string name="single">Sencillo</string>
</resources>
"#;

fn setup_project(test: &CliTest) -> Result<()> {
    test.write_file(BASE_STRINGS, BASE_CONTENT)?;
    test.write_file(ES_STRINGS, ES_CONTENT)?;
    test.write_file(
        "app/src/main/kotlin/Main.kt",
        "fun f() = getString(R.string.used)\n",
    )
}

#[test]
fn test_clean_dry_run_leaves_files_untouched() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test.clean_command().output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file(BASE_STRINGS)?, BASE_CONTENT);
    assert_eq!(test.read_file(ES_STRINGS)?, ES_CONTENT);

    let out = stdout(&output);
    assert!(out.contains("- \"single\"  --> app/src/main/res/values/strings.xml:4:5"));
    assert!(out.contains("Would remove 2 unused strings (3 declarations in 2 files)"));
    assert!(out.contains("Run with --apply to delete them."));
    Ok(())
}

#[test]
fn test_clean_apply_removes_from_every_locale() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test.clean_command().arg("--apply").output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file(BASE_STRINGS)?,
        r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="used">Used</string>
</resources>
"#
    );
    assert_eq!(
        test.read_file(ES_STRINGS)?,
        r#"<resources>
    <string name="used">Usado</string>
</resources>
"#
    );
    assert!(stdout(&output).contains("Removed 2 unused strings (3 declarations from 2 files)"));

    // Second run finds nothing left to do.
    let output = test.clean_command().arg("--apply").output()?;
    assert!(stdout(&output).contains("No unused strings found"));
    Ok(())
}

#[test]
fn test_clean_nothing_unused_keeps_bytes() -> Result<()> {
    let base = "<resources>\r\n    <string name=\"a\">A</string>\r\n</resources>";
    let test = CliTest::with_file(BASE_STRINGS, base)?;
    test.write_file("app/src/main/java/A.java", "R.string.a")?;

    let output = test.clean_command().arg("--apply").output()?;
    assert!(output.status.success());
    assert_eq!(test.read_file(BASE_STRINGS)?, base);
    Ok(())
}

#[test]
fn test_clean_multiline_value_removes_only_first_line() -> Result<()> {
    let test = CliTest::with_file(
        BASE_STRINGS,
        "<resources>\n    <string name=\"long\">First\n        second</string>\n</resources>\n",
    )?;

    let output = test.clean_command().arg("--apply").output()?;
    assert!(output.status.success());
    assert_eq!(
        test.read_file(BASE_STRINGS)?,
        "<resources>\n        second</string>\n</resources>\n"
    );
    Ok(())
}

#[test]
fn test_clean_preserves_crlf_line_endings() -> Result<()> {
    let test = CliTest::with_file(
        BASE_STRINGS,
        "<resources>\r\n    <string name=\"gone\">G</string>\r\n    <string name=\"kept\">K</string>\r\n</resources>\r\n",
    )?;
    test.write_file("app/src/main/java/K.java", "R.string.kept")?;

    let output = test.clean_command().arg("--apply").output()?;
    assert!(output.status.success());
    assert_eq!(
        test.read_file(BASE_STRINGS)?,
        "<resources>\r\n    <string name=\"kept\">K</string>\r\n</resources>\r\n"
    );
    Ok(())
}

#[test]
fn test_clean_malformed_locale_is_still_edited() -> Result<()> {
    let test = CliTest::with_file(
        BASE_STRINGS,
        "<resources>\n    <string name=\"gone\">Gone</string>\n    <string name=\"kept\">Kept</string>\n</resources>\n",
    )?;
    test.write_file(
        ES_STRINGS,
        "<resources>\n    <string name=\"gone\">Ido</string>\n    <string name=\"kept\">Guardado\n",
    )?;
    test.write_file("app/src/main/java/K.java", "R.string.kept")?;

    let output = test.clean_command().arg("--apply").output()?;
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(
        test.read_file(BASE_STRINGS)?,
        "<resources>\n    <string name=\"kept\">Kept</string>\n</resources>\n"
    );
    assert_eq!(
        test.read_file(ES_STRINGS)?,
        "<resources>\n    <string name=\"kept\">Guardado\n"
    );
    assert!(stderr(&output).contains("1 resource file(s) could not be parsed"));
    Ok(())
}

#[test]
fn test_clean_malformed_base_removes_nothing() -> Result<()> {
    let base = "<resources>\n    <string name=\"unused\">U</string>\n";
    let test = CliTest::with_file(BASE_STRINGS, base)?;
    test.write_file(ES_STRINGS, ES_CONTENT)?;

    let output = test.clean_command().arg("--apply").output()?;
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(test.read_file(BASE_STRINGS)?, base);
    assert_eq!(test.read_file(ES_STRINGS)?, ES_CONTENT);
    assert!(stdout(&output).contains("No unused strings found"));
    Ok(())
}
