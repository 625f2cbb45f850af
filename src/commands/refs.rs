//! Reference search command

use crate::cli::RefsArgs;
use crate::error::Result;
use crate::schema::ReferenceReport;

use super::CommandContext;

/// Run the refs command.
///
/// `--file` searches one file; otherwise `--project-root` (or
/// `GDSCOPE_PROJECT_ROOT`) is indexed and searched. With neither, the search
/// fails with a missing-root error.
pub fn run_refs(ctx: &CommandContext, args: &RefsArgs) -> Result<String> {
    let file = args.file.as_ref().map(|f| f.to_string_lossy().into_owned());

    if file.is_none() {
        if let Some(root) = &args.project_root {
            let set = ctx
                .analyzer
                .set_project_root(&root.to_string_lossy())?;
            tracing::info!(
                "Indexed {} GDScript files under {}",
                set.gdscript_files_count,
                set.project_root
            );
        }
    }

    let report = ctx.analyzer.find_references(&args.name, file.as_deref())?;
    ctx.render(&report, format_report)
}

fn format_report(report: &ReferenceReport) -> String {
    let mut output = format!(
        "{} reference(s) to '{}'\n",
        report.total_references, report.symbol
    );
    for reference in &report.references {
        match &reference.file {
            Some(file) => output.push_str(&format!(
                "  {}:{}:{}\n",
                file, reference.line, reference.column
            )),
            None => output.push_str(&format!(
                "  line {}, column {}\n",
                reference.line, reference.column
            )),
        }
    }
    if let Some(skipped) = report.skipped_files.as_ref().filter(|s| !s.is_empty()) {
        output.push_str(&format!("skipped {} file(s):\n", skipped.len()));
        for file in skipped {
            output.push_str(&format!("  {} ({})\n", file.file, file.reason));
        }
    }
    output
}
