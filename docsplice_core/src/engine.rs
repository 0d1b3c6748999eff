use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use crate::DocError;
use crate::DocResult;
use crate::config::DocConfig;
use crate::doc::Category;
use crate::project::DocEntry;
use crate::project::ScanOptions;
use crate::project::scan_corpus;
use crate::provider::capture_default_config;
use crate::render::RenderOptions;
use crate::render::render_doc;
use crate::splice::join_lines;
use crate::splice::marker_range;
use crate::splice::split_lines;
use crate::splice::splice;

/// A marker-bounded region of the target document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
	DefaultConfig,
	Api,
	Command,
	Type,
	Source,
	Autocmd,
}

impl SectionKind {
	/// Every section, in the order they are spliced.
	pub const ALL: [SectionKind; 6] = [
		Self::DefaultConfig,
		Self::Api,
		Self::Command,
		Self::Type,
		Self::Source,
		Self::Autocmd,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::DefaultConfig => "default_config",
			Self::Api => "api",
			Self::Command => "command",
			Self::Type => "type",
			Self::Source => "source",
			Self::Autocmd => "autocmd",
		}
	}

	/// Document category rendered into this section, `None` for the default
	/// config dump.
	pub fn category(self) -> Option<Category> {
		match self {
			Self::DefaultConfig => None,
			Self::Api => Some(Category::Api),
			Self::Command => Some(Category::Command),
			Self::Type => Some(Category::Type),
			Self::Source => Some(Category::Source),
			Self::Autocmd => Some(Category::Autocmd),
		}
	}

	pub fn start_marker(self) -> String {
		format!("<!-- auto-generate-s:{} -->", self.as_str())
	}

	pub fn end_marker(self) -> String {
		format!("<!-- auto-generate-e:{} -->", self.as_str())
	}
}

impl fmt::Display for SectionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Freshly rendered content for one section. Each element becomes one entry
/// in the target's line list; rendered documents may span several lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	pub kind: SectionKind,
	pub lines: Vec<String>,
}

/// Render the sections for `entries`, which must already be sorted.
///
/// `default_config` is the captured output of the default config command;
/// when it is `None` no `default_config` section is produced and that region
/// of the target is left alone.
pub fn render_sections(
	entries: &[DocEntry],
	options: &RenderOptions,
	mut default_config: Option<Vec<String>>,
) -> Vec<Section> {
	let mut sections = Vec::with_capacity(SectionKind::ALL.len());

	for kind in SectionKind::ALL {
		let lines = match kind.category() {
			None => {
				let Some(lines) = default_config.take() else {
					continue;
				};
				lines
			}
			Some(category) => {
				entries
					.iter()
					.filter(|entry| entry.doc.category() == category)
					.map(|entry| render_doc(&entry.doc, options))
					.collect()
			}
		};

		sections.push(Section { kind, lines });
	}

	sections
}

/// Splice every section into `target` in order, each operating on the result
/// of the previous one. Sections whose markers are missing or out of order
/// are skipped.
pub fn apply_sections(target: &str, sections: &[Section]) -> String {
	if target.contains("\r\n") {
		tracing::warn!("target uses CRLF line endings, marker lines only match with LF endings");
	}

	let mut lines = split_lines(target);

	for section in sections {
		let start_marker = section.kind.start_marker();
		let end_marker = section.kind.end_marker();
		if marker_range(&lines, &start_marker, &end_marker).is_none() {
			tracing::debug!(
				section = %section.kind,
				"markers missing or out of order, skipping section"
			);
			continue;
		}

		tracing::debug!(
			section = %section.kind,
			entries = section.lines.len(),
			"splicing section"
		);
		lines = splice(&lines, &start_marker, &end_marker, &section.lines);
	}

	join_lines(&lines)
}

/// Outcome of one generation run. Nothing has been written yet.
#[derive(Debug)]
pub struct GenerateResult {
	/// Absolute path of the target document.
	pub target: PathBuf,
	/// Target content before the run.
	pub original: String,
	/// Target content with every present section regenerated.
	pub updated: String,
	/// All documents found in the corpus, in render order.
	pub docs: Vec<DocEntry>,
}

impl GenerateResult {
	/// Returns true when the target would change.
	pub fn is_changed(&self) -> bool {
		self.original != self.updated
	}
}

/// Scan the corpus under `root` and collect its documents, using the
/// discovered config (if any).
pub fn collect_docs(root: &Path) -> DocResult<Vec<DocEntry>> {
	let config = DocConfig::load(root)?;
	let options = ScanOptions::from_config(config.as_ref())?;
	scan_corpus(root, &options)
}

/// Run the whole pipeline for the project at `root` with its discovered
/// config. Any malformed block or failing default config command aborts the
/// run before the target is touched.
pub fn generate(root: &Path) -> DocResult<GenerateResult> {
	let config = DocConfig::load(root)?.unwrap_or_default();
	generate_with_config(root, &config)
}

/// Run the whole pipeline with an explicit config.
pub fn generate_with_config(root: &Path, config: &DocConfig) -> DocResult<GenerateResult> {
	let target = config.target_path(root);
	if !target.is_file() {
		return Err(DocError::TargetNotFound(target.display().to_string()));
	}

	let options = ScanOptions::from_config(Some(config))?;
	let docs = scan_corpus(root, &options)?;

	let default_config = config
		.default_config
		.as_ref()
		.map(|command| capture_default_config(root, command))
		.transpose()?;

	let original = std::fs::read_to_string(&target)?;
	let sections = render_sections(&docs, &config.render_options(), default_config);
	let updated = apply_sections(&original, &sections);

	Ok(GenerateResult {
		target,
		original,
		updated,
		docs,
	})
}

/// Write the regenerated target when it changed. Returns whether a write
/// happened.
pub fn write_result(result: &GenerateResult) -> DocResult<bool> {
	if !result.is_changed() {
		return Ok(false);
	}

	std::fs::write(&result.target, &result.updated)?;
	Ok(true)
}
