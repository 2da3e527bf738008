use super::{DirectoryChoice, ResolvedConfig};

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec!["Effective configuration:".to_string()];
	lines.push(match &config.directory {
		DirectoryChoice::Configured(path) => format!("  Directory: {}", path.display()),
		DirectoryChoice::DataDir(path) => format!("  Directory: {} (data directory)", path.display()),
		DirectoryChoice::Builtin => format!(
			"  Directory: built-in seed ({} records)",
			DirectoryChoice::builtin_count()
		),
	});
	lines.push(format!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	));
	if let Some(title) = &config.title {
		lines.push(format!("  Prompt title: {title}"));
	}
	if let Some(title) = &config.list_title {
		lines.push(format!("  List title: {title}"));
	}
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines.push(format!(
		"  Specialization: {}",
		if config.specialization.is_empty() {
			"(all)"
		} else {
			config.specialization.as_str()
		}
	));
	lines.push(format!("  Log level: {}", config.log_level));
	lines
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	#[test]
	fn summary_lists_directory_and_filters() {
		let config = ResolvedConfig {
			directory: DirectoryChoice::Configured(PathBuf::from("/srv/doctors.json")),
			title: Some("Clinic".into()),
			initial_query: "neha".into(),
			specialization: String::new(),
			theme: Some("light".into()),
			list_title: None,
			log_level: "debug".into(),
		};

		let lines = summary_lines(&config);
		assert_eq!(lines[0], "Effective configuration:");
		assert!(lines.contains(&"  Directory: /srv/doctors.json".to_string()));
		assert!(lines.contains(&"  Initial query: neha".to_string()));
		assert!(lines.contains(&"  Specialization: (all)".to_string()));
		assert!(lines.contains(&"  Log level: debug".to_string()));
	}
}
