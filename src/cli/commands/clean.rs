use anyhow::Result;

use super::super::{
    actions::{Action, RemoveString},
    args::CleanCommand,
};
use super::helper::finish;
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::{core::CheckContext, issues::Issue, rules::unused::check_unused_strings_issues};

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    let unused_issues = check_unused_strings_issues(&ctx);
    let unused_count = unused_issues.len();

    let stats = if apply {
        RemoveString::run(&unused_issues)?
    } else {
        RemoveString::dry_run(&unused_issues)?
    };

    let mut all_issues: Vec<Issue> = Vec::new();
    all_issues.extend(unused_issues.iter().cloned().map(Issue::UnusedString));
    all_issues.extend(
        ctx.resource_parse_errors()
            .iter()
            .cloned()
            .map(Issue::ParseError),
    );

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            unused_count,
            removed_count: stats.changes_applied,
            file_count: stats.files_modified,
            is_apply: apply,
            unused_issues,
        }),
        all_issues,
        ctx.files.len(),
        ctx.resources().file_count(),
        false,
    ))
}
