//! Missing translation detection rule.
//!
//! For every locale file, finds the base names the locale does not declare.

use std::collections::HashSet;

use crate::{
    core::{CheckContext, ResourceFile},
    issues::MissingTranslationIssue,
};

pub fn check_missing_translations_issues(ctx: &CheckContext) -> Vec<MissingTranslationIssue> {
    let resources = ctx.resources();
    check_missing_translations(&resources.base, &resources.locales)
}

/// Compute `base_names - locale_names` for each locale.
///
/// One issue per locale, in locale order, including complete locales (with
/// an empty `missing` list). A base name declared twice is listed once.
pub fn check_missing_translations(
    base: &ResourceFile,
    locales: &[ResourceFile],
) -> Vec<MissingTranslationIssue> {
    locales
        .iter()
        .map(|locale| {
            let locale_names = locale.name_set();
            let mut seen = HashSet::new();
            let missing = base
                .entries
                .iter()
                .filter(|entry| {
                    !locale_names.contains(entry.name.as_str()) && seen.insert(entry.name.as_str())
                })
                .cloned()
                .collect();

            MissingTranslationIssue {
                locale: locale.qualifier.clone(),
                file_path: locale.file_path.clone(),
                missing,
            }
        })
        .collect()
}
