use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate README sections from documentation blocks embedded in Lua sources.",
	long_about = "docsplice extracts `--[=[@doc ... --]=]` and `---@doc.type` comment blocks \
	              from Lua sources, renders them as markdown and splices the result between \
	              `<!-- auto-generate-s:KIND -->` / `<!-- auto-generate-e:KIND -->` markers in \
	              a target document.\n\nQuick start:\n  docsplice init    Create a \
	              docsplice.toml\n  docsplice update  Regenerate the target document\n  \
	              docsplice check   Verify the target is up to date"
)]
pub struct DocspliceCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output and debug logging.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a sample `docsplice.toml` in the project root.
	///
	/// If a config file already exists in any of the discovery locations,
	/// this command is a no-op and exits successfully.
	Init,
	/// Regenerate every marked section of the target document.
	///
	/// Scans the Lua sources for doc blocks, renders them and replaces the
	/// content between each pair of `auto-generate` markers. Sections whose
	/// markers are missing are left alone.
	Update {
		/// Report whether the target would change without writing it.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Check that the target document is up to date.
	///
	/// Exits with status 1 when regenerating would change the target. Ideal
	/// for CI pipelines.
	Check {
		/// Show a unified diff between the current and expected target.
		#[arg(long, default_value_t = false)]
		diff: bool,
	},
	/// List every documented item in render order.
	List {
		/// Output format. Use `text` for human-readable output or `json` for
		/// programmatic consumption.
		#[arg(long, value_enum, default_value_t = ListFormat::Text)]
		format: ListFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
	/// Human-readable text output grouped by category.
	Text,
	/// JSON array of documents, each tagged with its `category` and `file`.
	Json,
}
