mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_directory, print_outcome};
use workflow::DirectoryWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for line in cli::format_themes(&medibook::theme::descriptors()) {
			println!("{line}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	medibook::logging::initialize(resolved.level_filter());
	log::debug!("resolved configuration: {resolved:?}");

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = DirectoryWorkflow::from_config(resolved)?;
	if cli.list {
		return print_directory(cli.output, &workflow.list());
	}

	run_directory(cli.output, workflow)
}

/// Execute the interactive workflow and print the outcome in the chosen format.
fn run_directory(format: OutputFormat, workflow: DirectoryWorkflow) -> Result<()> {
	let outcome = workflow.run()?;
	print_outcome(format, &outcome)
}
