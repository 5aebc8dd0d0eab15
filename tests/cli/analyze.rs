use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{BASE_STRINGS, CliTest, stderr, stdout};

const ES_STRINGS: &str = "app/src/main/res/values-es/strings.xml";

fn setup_sample_project(test: &CliTest) -> Result<()> {
    test.write_file(
        BASE_STRINGS,
        r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="a">Hello</string>
    <string name="a">Hello again</string>
    <string name="b">World</string>
</resources>
"#,
    )?;
    test.write_file(
        ES_STRINGS,
        r#"<resources>
    <string name="a">Hola</string>
</resources>
"#,
    )?;
    test.write_file(
        "app/src/main/java/com/example/MainActivity.java",
        "class MainActivity { void f() { setTitle(R.string.a); } }\n",
    )
}

#[test]
fn test_analyze_writes_reports() -> Result<()> {
    let test = CliTest::new()?;
    setup_sample_project(&test)?;

    let output = test.analyze_command().output()?;
    assert_eq!(output.status.code(), Some(1), "duplicates fail the run");

    assert_eq!(
        test.read_file("duplicates.txt")?,
        "Duplicate strings in values/strings.xml:\n  a\n"
    );
    assert_eq!(
        test.read_file("missing_translations.txt")?,
        "Missing translations:\nvalues-es:\n  b\n"
    );
    assert_eq!(test.read_file("unused_strings.txt")?, "Unused strings:\n  b\n");

    let out = stdout(&output);
    assert!(out.contains("error: \"a\"  duplicate-string"));
    assert!(out.contains("--> app/src/main/res/values/strings.xml:3:5"));
    assert!(out.contains("warning: \"b\"  unused-string"));
    assert!(out.contains("summary: 1 duplicate, 1 missing translation, 1 unused"));
    assert!(out.contains("Analysis complete. Results saved to:"));
    assert!(out.contains("- ./unused_strings.txt"));
    Ok(())
}

#[test]
fn test_analyze_clean_project_succeeds() -> Result<()> {
    let test = CliTest::with_file(
        BASE_STRINGS,
        "<resources>\n    <string name=\"title\">Title</string>\n</resources>\n",
    )?;
    test.write_file(
        ES_STRINGS,
        "<resources>\n    <string name=\"title\">Titulo</string>\n</resources>\n",
    )?;
    test.write_file("app/src/main/kotlin/Ui.kt", "val t = getString(R.string.title)\n")?;

    let output = test.analyze_command().output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("duplicates.txt")?,
        "Duplicate strings in values/strings.xml:\n  None\n"
    );
    assert_eq!(
        test.read_file("missing_translations.txt")?,
        "Missing translations:\nvalues-es: None\n"
    );
    assert_eq!(
        test.read_file("unused_strings.txt")?,
        "Unused strings:\n  None\n"
    );
    assert!(stdout(&output).contains("no issues found"));
    Ok(())
}

#[test]
fn test_analyze_reference_in_comment_counts_as_use() -> Result<()> {
    let test = CliTest::with_file(
        BASE_STRINGS,
        "<resources>\n    <string name=\"legacy\">Old</string>\n</resources>\n",
    )?;
    test.write_file(
        "app/src/main/java/Old.java",
        "// TODO drop R.string.legacy once the old screen is gone\n",
    )?;

    let output = test.analyze_command().output()?;
    assert!(output.status.success());
    assert_eq!(test.read_file("unused_strings.txt")?, "Unused strings:\n  None\n");
    Ok(())
}

#[test]
fn test_analyze_malformed_base_file() -> Result<()> {
    let test = CliTest::with_file(BASE_STRINGS, "<resources>\n    <string name=\"a\">A\n")?;

    let output = test.analyze_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    assert_eq!(
        test.read_file("duplicates.txt")?,
        "Duplicate strings in values/strings.xml:\n  None\n"
    );
    assert_eq!(test.read_file("unused_strings.txt")?, "Unused strings:\n  None\n");
    assert!(stdout(&output).contains("parse-error"));
    assert!(stderr(&output).contains("1 resource file(s) could not be parsed"));
    Ok(())
}

#[test]
fn test_analyze_missing_locale_file_is_empty_locale() -> Result<()> {
    let test = CliTest::with_file(
        BASE_STRINGS,
        "<resources>\n    <string name=\"a\">A</string>\n</resources>\n",
    )?;
    test.write_file("app/src/main/res/values-fr/other.xml", "<resources/>")?;
    test.write_file("app/src/main/java/A.java", "R.string.a")?;

    let output = test.analyze_command().output()?;
    assert!(output.status.success());
    assert_eq!(
        test.read_file("missing_translations.txt")?,
        "Missing translations:\n"
    );
    Ok(())
}

#[test]
fn test_analyze_output_dir_and_overrides() -> Result<()> {
    let test = CliTest::with_file(
        "lib/res/values/strings.xml",
        "<resources>\n    <string name=\"x\">X</string>\n</resources>\n",
    )?;
    test.write_file("lib/src/X.kt", "R.string.y")?;

    let output = test
        .analyze_command()
        .args(["--res-root", "lib/res", "--source-dir", "lib/src"])
        .args(["--output-dir", "reports"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("reports/unused_strings.txt")?,
        "Unused strings:\n  x\n"
    );
    assert!(!test.root().join("unused_strings.txt").exists());
    Ok(())
}

#[test]
fn test_analyze_uses_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".stringsweeprc.json",
        r#"{ "resRoot": "res", "sourceRoots": ["src"], "outputDir": "out" }"#,
    )?;
    test.write_file(
        "res/values/strings.xml",
        "<resources>\n    <string name=\"used\">U</string>\n</resources>\n",
    )?;
    test.write_file("src/Main.java", "getString(R.string.used);")?;

    let output = test.analyze_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("out/unused_strings.txt")?, "Unused strings:\n  None\n");
    Ok(())
}

#[test]
fn test_analyze_missing_res_dir_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.analyze_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error:"));
    assert!(!test.root().join("duplicates.txt").exists());
    Ok(())
}

#[test]
fn test_analyze_resolves_dtd_entities() -> Result<()> {
    let test = CliTest::with_file(
        BASE_STRINGS,
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE resources [
    <!ENTITY app "Music">
]>
<resources>
    <string name="title">&app;</string>
    <string name="about">About &app;</string>
</resources>
"#,
    )?;
    test.write_file(
        ES_STRINGS,
        "<!DOCTYPE resources [<!ENTITY app \"Musica\">]>\n<resources>\n    <string name=\"title\">&app;</string>\n</resources>\n",
    )?;
    test.write_file("app/src/main/java/A.java", "R.string.title; R.string.about;")?;

    let output = test.analyze_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("missing_translations.txt")?,
        "Missing translations:\nvalues-es:\n  about\n"
    );
    assert!(!stderr(&output).contains("could not be parsed"));
    Ok(())
}
