use std::str::Split;
use std::sync::LazyLock;

use regex::Regex;

static CONFIG_BLOCK_START: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\s*--\[=\[\s*@doc$").expect("valid sentinel pattern"));

static CONFIG_BLOCK_END: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\s*(--)?\]=\]$").expect("valid sentinel pattern"));

static TYPE_BLOCK_START: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\s*---@doc\.type$").expect("valid sentinel pattern"));

/// Iterate over the raw TOML bodies of `--[=[@doc` ... `--]=]` blocks.
///
/// Every line between the sentinels is kept verbatim, each followed by `\n`.
/// The closing sentinel may be written as `--]=]` or `]=]`. A block that is
/// still open when the input ends is dropped.
pub fn config_blocks(content: &str) -> ConfigBlocks<'_> {
	ConfigBlocks {
		lines: content.split('\n'),
		body: None,
	}
}

/// Iterate over the bodies of `---@doc.type` annotation blocks.
///
/// The block runs until the first empty line. Each line is trimmed before it
/// is appended, and the emitted body is trimmed as a whole.
pub fn type_blocks(content: &str) -> TypeBlocks<'_> {
	TypeBlocks {
		lines: content.split('\n'),
		body: None,
	}
}

/// Scanner for config blocks. `body` is `None` while idle.
#[derive(Debug)]
pub struct ConfigBlocks<'a> {
	lines: Split<'a, char>,
	body: Option<String>,
}

impl Iterator for ConfigBlocks<'_> {
	type Item = String;

	fn next(&mut self) -> Option<Self::Item> {
		for line in self.lines.by_ref() {
			if CONFIG_BLOCK_START.is_match(line) {
				self.body = Some(String::new());
			} else if self.body.is_some() && CONFIG_BLOCK_END.is_match(line) {
				return self.body.take();
			} else if let Some(body) = &mut self.body {
				body.push_str(line);
				body.push('\n');
			}
		}

		None
	}
}

/// Scanner for type blocks. `body` is `None` while idle.
#[derive(Debug)]
pub struct TypeBlocks<'a> {
	lines: Split<'a, char>,
	body: Option<String>,
}

impl Iterator for TypeBlocks<'_> {
	type Item = String;

	fn next(&mut self) -> Option<Self::Item> {
		for line in self.lines.by_ref() {
			if TYPE_BLOCK_START.is_match(line) {
				self.body = Some(String::new());
			} else if line.is_empty() {
				if let Some(body) = self.body.take() {
					return Some(body.trim().to_string());
				}
			} else if let Some(body) = &mut self.body {
				body.push_str(line.trim());
				body.push('\n');
			}
		}

		None
	}
}
