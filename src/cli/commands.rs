use std::io;
use std::path::Path;

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use tracing::{debug, instrument};

use crate::arena::ArenaBst;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::tree::Bst;
use crate::{build_tree, format_traversal, read_values_file, DEMO_DATASET};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Traverse {
            values,
            file,
            arena,
        }) => traverse(values, file.as_deref(), *arena),
        Some(Commands::Shape { values, file }) => shape(values, file.as_deref()),
        Some(Commands::Stats { values, file }) => stats(values, file.as_deref()),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => demo(),
    }
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// The original exercise: fixed dataset, one traversal line.
#[instrument]
fn demo() -> CliResult<()> {
    let tree = build_tree(DEMO_DATASET);
    output::info(&format_traversal(tree.iter()));
    Ok(())
}

/// Positional values win; --file is the alternative source. Giving neither is
/// a usage error (the bare demo lives on the top-level command instead).
fn resolve_values(values: &[i64], file: Option<&Path>) -> CliResult<Vec<i64>> {
    match file {
        Some(path) => Ok(read_values_file(path)?),
        None if values.is_empty() => Err(CliError::InvalidArgs(
            "no values given (pass VALUES or --file)".to_string(),
        )),
        None => Ok(values.to_vec()),
    }
}

#[instrument]
fn traverse(values: &[i64], file: Option<&Path>, arena: bool) -> CliResult<()> {
    let values = resolve_values(values, file)?;
    debug!("values: {:?}, arena: {}", values, arena);

    let line = if arena {
        let tree: ArenaBst = values.into_iter().collect();
        format_traversal(tree.iter())
    } else {
        let tree = build_tree(values);
        format_traversal(tree.iter())
    };
    output::info(&line);
    Ok(())
}

#[instrument]
fn shape(values: &[i64], file: Option<&Path>) -> CliResult<()> {
    let values = resolve_values(values, file)?;
    let tree = build_tree(values);
    match tree.render() {
        Some(rendered) => output::info(&rendered),
        None => output::detail("(empty tree)"),
    }
    Ok(())
}

#[instrument]
fn stats(values: &[i64], file: Option<&Path>) -> CliResult<()> {
    let values = resolve_values(values, file)?;
    let tree: Bst = build_tree(values);
    output::header("Tree statistics");
    output::detail(&format!("nodes:  {}", tree.len()));
    output::detail(&format!("height: {}", tree.height()));
    Ok(())
}
