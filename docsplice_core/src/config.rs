use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DocError;
use crate::DocResult;
use crate::render::RenderOptions;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"docsplice.toml",
	".docsplice.toml",
	".config/docsplice.toml",
];

/// Default target document, relative to the project root.
pub const DEFAULT_TARGET: &str = "README.md";

/// Default glob for the files scanned for doc blocks.
pub const DEFAULT_INCLUDE: &str = "**/*.lua";

/// Configuration loaded from a `docsplice.toml` file.
///
/// ```toml
/// target = "README.md"
///
/// [scan]
/// include = ["lua/**/*.lua"]
/// exclude = ["deps/"]
///
/// [render]
/// language = "lua"
/// command_prefix = "MyPlugin"
///
/// [default_config]
/// command = "nvim --headless --noplugin -u ./scripts/doc/minimal_init.lua -c qa"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct DocConfig {
	/// Markdown file holding the `auto-generate` markers. Defaults to
	/// `README.md`.
	#[serde(default)]
	pub target: Option<PathBuf>,
	/// Which files are scanned for doc blocks.
	#[serde(default)]
	pub scan: ScanConfig,
	/// Rendering options shared by all sections.
	#[serde(default)]
	pub render: RenderConfig,
	/// External command that prints the plugin's default configuration. When
	/// absent, the `default_config` section is left as is.
	#[serde(default)]
	pub default_config: Option<DefaultConfigCommand>,
}

/// File selection for the corpus.
#[derive(Debug, Default, Deserialize)]
pub struct ScanConfig {
	/// Glob patterns, relative to the project root, of files to scan.
	/// Defaults to `["**/*.lua"]` when empty.
	#[serde(default)]
	pub include: Vec<String>,
	/// Gitignore-style patterns for files and directories to skip.
	#[serde(default)]
	pub exclude: Vec<String>,
	/// When true, `.gitignore` files are not used for filtering.
	#[serde(default)]
	pub disable_gitignore: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenderConfig {
	/// Info string for fenced code blocks. Defaults to `lua`.
	#[serde(default)]
	pub language: Option<String>,
	/// Ex command that user commands are dispatched through, rendering
	/// `:Prefix name`. When unset, commands render as `:name`.
	#[serde(default)]
	pub command_prefix: Option<String>,
}

/// Shell command whose stdout is spliced into the `default_config` section.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
pub struct DefaultConfigCommand {
	pub command: String,
}

impl DocConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> DocResult<Option<DocConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: DocConfig =
			toml::from_str(&content).map_err(|e| DocError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// Absolute path of the target document.
	pub fn target_path(&self, root: &Path) -> PathBuf {
		root.join(
			self.target
				.as_deref()
				.unwrap_or_else(|| Path::new(DEFAULT_TARGET)),
		)
	}

	pub fn render_options(&self) -> RenderOptions {
		let defaults = RenderOptions::default();
		RenderOptions {
			language: self.render.language.clone().unwrap_or(defaults.language),
			command_prefix: self
				.render
				.command_prefix
				.clone()
				.filter(|prefix| !prefix.trim().is_empty()),
		}
	}
}

/// Sample config written by `docsplice init`.
pub const SAMPLE_CONFIG: &str = "# docsplice configuration\n\n# Markdown file that holds the \
                                 `<!-- auto-generate-s:KIND -->` markers.\ntarget = \
                                 \"README.md\"\n\n[scan]\ninclude = [\"**/*.lua\"]\n# exclude = \
                                 [\"deps/\"]\n\n[render]\nlanguage = \"lua\"\n# Commands render as `:MyPlugin <name>` with a prefix, `:<name>` \
                                 without one.\n# command_prefix = \
                                 \"MyPlugin\"\n\n# Command whose stdout fills the default_config \
                                 section.\n# [default_config]\n# command = \"nvim --headless \
                                 --noplugin -u ./scripts/doc/minimal_init.lua -c qa\"\n";
