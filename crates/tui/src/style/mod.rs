//! Colour themes for the directory UI.

pub mod theme;

pub use theme::{
	Theme, ThemeDescriptor, ThemeRegistration, builtin_themes, by_name, default_theme,
	descriptors, names,
};
