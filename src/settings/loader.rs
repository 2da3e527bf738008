use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Layer config files, `MEDIBOOK__*` environment variables and CLI flags,
/// then resolve and validate the result.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw = build_config(cli)?
		.try_deserialize::<RawConfig>()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
