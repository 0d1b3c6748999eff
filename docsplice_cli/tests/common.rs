#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use docsplice_core::AnyEmptyResult;
use insta_cmd::get_cargo_bin;

pub const PLUGIN_LUA: &str = "local M = {}\n\n--[=[@doc\n  category = \"api\"\n  name = \
                              \"open\"\n  desc = \"Open the prompt buffer.\"\n--]=]\nfunction \
                              M.open() end\n\n--[=[@doc\n  category = \"command\"\n  name = \
                              \"greet\"\n  desc = \"Say hello.\"\n--]=]\n\nreturn M\n";

pub const STALE_README: &str = "# Plugin\n\n<!-- auto-generate-s:api -->\nstale\n<!-- \
                                auto-generate-e:api -->\n";

pub const FRESH_README: &str = "# Plugin\n\n<!-- auto-generate-s:api -->\n### open\nOpen the \
                                prompt buffer.\n_No arguments_\n&nbsp;\n<!-- \
                                auto-generate-e:api -->\n";

pub fn docsplice_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("docsplice"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

/// Write a small plugin with one `api` and one `command` doc block and the
/// given README.
pub fn write_project(root: &Path, readme: &str) -> AnyEmptyResult {
	std::fs::create_dir_all(root.join("lua"))?;
	std::fs::write(root.join("lua/plugin.lua"), PLUGIN_LUA)?;
	std::fs::write(root.join("README.md"), readme)?;

	Ok(())
}
