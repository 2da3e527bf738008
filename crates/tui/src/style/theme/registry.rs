//! Lookup of the bundled themes by name or alias.

use std::sync::OnceLock;

use super::builtins;
use super::types::{Theme, ThemeDescriptor, ThemeRegistration};

fn same_name(left: &str, right: &str) -> bool {
	left.trim().eq_ignore_ascii_case(right.trim())
}

impl ThemeDescriptor {
	fn answers_to(&self, name: &str) -> bool {
		same_name(&self.name, name) || self.aliases.iter().any(|alias| same_name(alias, name))
	}
}

/// Turn registrations into descriptors sorted by name.
///
/// Aliases repeating the theme's own name, or already claimed by an earlier
/// theme, are dropped.
fn build_table(registrations: Vec<ThemeRegistration>) -> Vec<ThemeDescriptor> {
	let mut table: Vec<ThemeDescriptor> = Vec::with_capacity(registrations.len());
	for ThemeRegistration {
		name,
		theme,
		aliases,
	} in registrations
	{
		let mut kept: Vec<String> = Vec::new();
		for alias in aliases {
			let taken = same_name(&alias, &name)
				|| kept.iter().any(|seen| same_name(seen, &alias))
				|| table.iter().any(|entry| entry.answers_to(&alias));
			if taken {
				log::debug!("theme alias {alias} for {name} ignored");
			} else {
				kept.push(alias);
			}
		}
		table.push(ThemeDescriptor {
			name,
			aliases: kept,
			theme,
		});
	}
	table.sort_by_key(|entry| entry.name.to_ascii_lowercase());
	table
}

fn table() -> &'static [ThemeDescriptor] {
	static TABLE: OnceLock<Vec<ThemeDescriptor>> = OnceLock::new();
	TABLE.get_or_init(|| build_table(builtins::builtin_themes()))
}

/// Lookup a theme by case-insensitive name, then by alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let table = table();
	table
		.iter()
		.find(|entry| same_name(&entry.name, name))
		.or_else(|| table.iter().find(|entry| entry.answers_to(name)))
		.map(|entry| entry.theme)
}

/// Canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	table().iter().map(|entry| entry.name.clone()).collect()
}

/// Every theme with its aliases, sorted by name.
#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
	table().to_vec()
}
