//! gdscope CLI entry point

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use gdscope::cli::{Cli, Commands};
use gdscope::commands::{
    run_analyze, run_code, run_deps, run_refs, run_serve, run_structure, run_symbol,
    CommandContext,
};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> gdscope::Result<String> {
    // The server installs its own subscriber
    if !matches!(cli.command, Commands::Serve(_)) {
        init_logging(cli.verbose);
    }

    let ctx = CommandContext::from_cli(cli.format, cli.verbose);

    match &cli.command {
        Commands::Analyze(args) => run_analyze(&ctx, args),
        Commands::Structure(args) => run_structure(&ctx, args),
        Commands::Symbol(args) => run_symbol(&ctx, args),
        Commands::Deps(args) => run_deps(&ctx, args),
        Commands::Code(args) => run_code(&ctx, args),
        Commands::Refs(args) => run_refs(&ctx, args),
        Commands::Serve(args) => run_serve(args),
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "gdscope=debug" } else { "gdscope=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
