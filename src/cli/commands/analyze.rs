use anyhow::Result;

use super::super::{args::AnalyzeCommand, report_files::write_reports};
use super::helper::finish;
use super::{AnalyzeSummary, CommandResult, CommandSummary};
use crate::{
    core::{CheckContext, context::resolve_path, resources::BASE_QUALIFIER},
    issues::Issue,
    rules::{
        duplicate::check_duplicate_strings_issues, missing::check_missing_translations_issues,
        unused::check_unused_strings_issues,
    },
};

pub fn analyze(cmd: AnalyzeCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let duplicate_issues = check_duplicate_strings_issues(&ctx);
    let missing_issues = check_missing_translations_issues(&ctx);
    let unused_issues = check_unused_strings_issues(&ctx);

    let output_dir = match &args.output_dir {
        Some(dir) => resolve_path(&ctx.root_dir, &dir.to_string_lossy()),
        None => ctx.output_dir(),
    };
    let base_label = format!("{}/{}", BASE_QUALIFIER, ctx.config.resource_file_name);
    let report_files = write_reports(
        &output_dir,
        &base_label,
        &duplicate_issues,
        &missing_issues,
        &unused_issues,
    )?;

    let mut all_issues: Vec<Issue> = Vec::new();
    all_issues.extend(duplicate_issues.iter().cloned().map(Issue::DuplicateString));
    all_issues.extend(missing_issues.iter().cloned().map(Issue::MissingTranslation));
    all_issues.extend(unused_issues.iter().cloned().map(Issue::UnusedString));
    all_issues.extend(
        ctx.resource_parse_errors()
            .iter()
            .cloned()
            .map(Issue::ParseError),
    );

    Ok(finish(
        CommandSummary::Analyze(AnalyzeSummary {
            duplicate_issues,
            missing_issues,
            unused_issues,
            report_files,
        }),
        all_issues,
        ctx.files.len(),
        ctx.resources().file_count(),
        true,
    ))
}
