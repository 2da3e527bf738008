use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `medibook` binary.
#[derive(Parser, Debug)]
#[command(
	name = "medibook",
	version,
	long_version = long_version(),
	about = "Browse a doctor directory and book appointment slots",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "MEDIBOOK_CONFIG",
		action = ArgAction::Append,
		help = "Merge settings from FILE; repeatable, later files win"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Ignore config.toml, .medibook.toml and medibook.toml"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "directory",
		value_name = "FILE",
		help = "Load doctor records from a JSON file (default: data directory or built-in seed)"
	)]
	pub(crate) directory: Option<PathBuf>,
	#[arg(
		short = 't',
		long,
		value_name = "TEXT",
		help = "Set the prompt title (default: \"Find a doctor\")"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "TEXT",
		help = "Prefill the search box"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 's',
		long,
		value_name = "NAME",
		help = "Start filtered to one specialization (default: all)"
	)]
	pub(crate) specialization: Option<String>,
	#[arg(
		long,
		value_name = "NAME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Minimum level captured in the log pane (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		long = "list",
		help = "Print the filtered directory and exit without starting the UI"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Show each resolved setting and where it came from"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "Print the theme names accepted by --theme and exit"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Format for --list output and the session summary"
	)]
	pub(crate) output: OutputFormat,
}
