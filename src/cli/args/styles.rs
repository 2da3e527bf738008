use std::sync::OnceLock;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use medibook::app_dirs;

fn describe_dir(dir: anyhow::Result<std::path::PathBuf>) -> String {
	dir.map_or_else(|err| format!("unavailable ({err})"), |path| path.display().to_string())
}

/// Version banner listing the directories the binary reads from.
pub(super) fn long_version() -> &'static str {
	static BANNER: OnceLock<String> = OnceLock::new();
	BANNER.get_or_init(|| {
		[
			format!("medibook {}", env!("CARGO_PKG_VERSION")),
			format!("config directory: {}", describe_dir(app_dirs::get_config_dir())),
			format!("data directory: {}", describe_dir(app_dirs::get_data_dir())),
		]
		.join("\n")
	})
}

/// Help colours.
pub(super) fn cli_styles() -> Styles {
	let heading = AnsiColor::Blue.on_default().effects(Effects::BOLD);
	Styles::styled()
		.header(heading)
		.usage(heading)
		.literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::Magenta.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
