//! Single-file commands: analyze, structure, symbol, deps, code

use std::io::Read;
use std::path::Path;

use crate::cli::{CodeArgs, FileArgs, SymbolArgs};
use crate::error::Result;
use crate::schema::{DependencyRecord, SymbolSummary};
use crate::structure::render_structure;

use super::CommandContext;

/// Run the analyze command
pub fn run_analyze(ctx: &CommandContext, args: &FileArgs) -> Result<String> {
    let analysis = ctx.analyzer.analyze_file(&path_arg(&args.file))?;
    ctx.render(&analysis, |a| {
        format!(
            "{}\n\n{}\n",
            render_structure(&a.symbols),
            format_summary(&a.summary)
        )
    })
}

/// Run the structure command
pub fn run_structure(ctx: &CommandContext, args: &FileArgs) -> Result<String> {
    let structure = ctx.analyzer.get_structure(&path_arg(&args.file))?;
    ctx.render(&structure, |s| format!("{}\n", s))
}

/// Run the symbol command
pub fn run_symbol(ctx: &CommandContext, args: &SymbolArgs) -> Result<String> {
    let found = ctx.analyzer.find_symbol(&path_arg(&args.file), &args.name)?;
    ctx.render(&found, |s| {
        format!(
            "{} {} (line {}, column {})\n",
            s.kind.as_str(),
            s.name,
            s.line,
            s.column
        )
    })
}

/// Run the deps command
pub fn run_deps(ctx: &CommandContext, args: &FileArgs) -> Result<String> {
    let deps = ctx.analyzer.get_dependencies(&path_arg(&args.file))?;
    ctx.render(&deps, |d| format_dependencies(&d.dependencies))
}

/// Run the code command, reading stdin when no code argument is given
pub fn run_code(ctx: &CommandContext, args: &CodeArgs) -> Result<String> {
    let code = match &args.code {
        Some(code) => code.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    tracing::debug!("Analyzing {} bytes of inline code", code.len());

    let analysis = ctx.analyzer.analyze_code(&code)?;
    ctx.render(&analysis, |a| {
        format!("{}\n\n{}\n", a.structure, format_summary(&a.summary))
    })
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn format_summary(summary: &SymbolSummary) -> String {
    format!(
        "classes: {}, functions: {}, signals: {}, variables: {}, enums: {}",
        summary.total_classes,
        summary.total_functions,
        summary.total_signals,
        summary.total_variables,
        summary.total_enums
    )
}

fn format_dependencies(deps: &DependencyRecord) -> String {
    let mut output = String::new();
    for (label, values) in [
        ("extends", &deps.extends),
        ("preload", &deps.preload),
        ("import", &deps.import),
    ] {
        output.push_str(&format!("{} ({}):\n", label, values.len()));
        for value in values {
            output.push_str(&format!("  - {}\n", value));
        }
    }
    output
}
