use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeRegistration};

/// Base colours a built-in theme is derived from.
struct Palette {
	text: Color,
	surface: Color,
	accent: Color,
	cursor: Color,
	muted: Color,
	ok: Color,
	alert: Color,
}

impl Palette {
	const fn theme(self) -> Theme {
		Theme {
			header: Style::new().fg(self.text).bg(self.surface),
			row_highlight: Style::new().fg(self.surface).bg(self.cursor),
			prompt: Style::new().fg(self.accent),
			empty: Style::new().fg(self.muted),
			highlight: Style::new().fg(self.cursor).add_modifier(Modifier::BOLD),
			success: Style::new().fg(self.ok).add_modifier(Modifier::BOLD),
			notice: Style::new().fg(self.alert).add_modifier(Modifier::BOLD),
		}
	}
}

pub const SLATE: Theme = Palette {
	text: Color::Rgb(203, 213, 225),
	surface: Color::Rgb(30, 41, 59),
	accent: Color::Rgb(45, 212, 191),
	cursor: Color::Rgb(96, 165, 250),
	muted: Color::Rgb(100, 116, 139),
	ok: Color::Rgb(74, 222, 128),
	alert: Color::Rgb(251, 146, 60),
}
.theme();

pub const LIGHT: Theme = Palette {
	text: Color::Rgb(30, 41, 59),
	surface: Color::Rgb(241, 245, 249),
	accent: Color::Rgb(13, 148, 136),
	cursor: Color::Rgb(37, 99, 235),
	muted: Color::Rgb(148, 163, 184),
	ok: Color::Rgb(22, 101, 52),
	alert: Color::Rgb(194, 65, 12),
}
.theme();

pub const SOLARIZED: Theme = Palette {
	text: Color::Rgb(147, 161, 161),
	surface: Color::Rgb(0, 43, 54),
	accent: Color::Rgb(42, 161, 152),
	cursor: Color::Rgb(181, 137, 0),
	muted: Color::Rgb(88, 110, 117),
	ok: Color::Rgb(133, 153, 0),
	alert: Color::Rgb(220, 50, 47),
}
.theme();

/// Registrations for every bundled theme, in listing order.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	vec![
		ThemeRegistration::new("slate", SLATE).alias("default"),
		ThemeRegistration::new("light", LIGHT).alias("day"),
		ThemeRegistration::new("solarized", SOLARIZED).aliases(["solarized-dark", "solarized_dark"]),
	]
}

/// The theme used when none is configured.
#[must_use]
pub const fn default_theme() -> Theme {
	SLATE
}

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}
