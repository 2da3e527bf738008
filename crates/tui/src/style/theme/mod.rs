//! Theme values, the bundled themes and lookup by name.

mod builtins;
mod registry;
mod types;

pub use builtins::{builtin_themes, default_theme};
pub use registry::{by_name, descriptors, names};
pub use types::{Theme, ThemeDescriptor, ThemeRegistration};
