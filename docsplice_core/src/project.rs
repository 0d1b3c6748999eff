use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;
use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;
use serde::Serialize;

use crate::DocError;
use crate::DocResult;
use crate::config::DEFAULT_INCLUDE;
use crate::config::DocConfig;
use crate::decoder::decode_file;
use crate::doc::Doc;

/// Options for controlling which files are scanned.
///
/// Use [`ScanOptions::from_config`] to construct from a [`DocConfig`].
#[derive(Debug, Clone)]
pub struct ScanOptions {
	/// Glob set a file's root-relative path must match to be scanned.
	pub include_set: GlobSet,
	/// Gitignore-style patterns to exclude from scanning.
	pub exclude_patterns: Vec<String>,
	/// Whether to disable `.gitignore` integration.
	pub disable_gitignore: bool,
}

impl ScanOptions {
	/// Construct [`ScanOptions`] from an optional [`DocConfig`]. Without
	/// include patterns every `*.lua` file is scanned.
	pub fn from_config(config: Option<&DocConfig>) -> DocResult<Self> {
		let mut include_patterns = config
			.map(|c| c.scan.include.clone())
			.unwrap_or_default();
		if include_patterns.is_empty() {
			include_patterns.push(DEFAULT_INCLUDE.to_string());
		}

		Ok(Self {
			include_set: build_glob_set(&include_patterns)?,
			exclude_patterns: config
				.map(|c| c.scan.exclude.clone())
				.unwrap_or_default(),
			disable_gitignore: config.is_some_and(|c| c.scan.disable_gitignore),
		})
	}
}

/// A document together with the file it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocEntry {
	pub file: PathBuf,
	#[serde(flatten)]
	pub doc: Doc,
}

/// Scan every corpus file under `root` and return the documents in their
/// final order (see [`sort_docs`]).
pub fn scan_corpus(root: &Path, options: &ScanOptions) -> DocResult<Vec<DocEntry>> {
	let files = collect_files(root, options)?;
	let mut entries = Vec::new();

	for file in &files {
		let bytes = std::fs::read(file).map_err(|source| {
			DocError::ReadFile {
				path: file.display().to_string(),
				source,
			}
		})?;
		// Invalid UTF-8 is replaced rather than rejected.
		let content = normalize_line_endings(&String::from_utf8_lossy(&bytes));
		let docs = decode_file(file, &content)?;
		tracing::debug!(file = %file.display(), docs = docs.len(), "scanned file");

		entries.extend(docs.into_iter().map(|doc| {
			DocEntry {
				file: file.clone(),
				doc,
			}
		}));
	}

	sort_docs(&mut entries);
	warn_duplicates(&entries);

	Ok(entries)
}

/// Order documents by category and then by name. The sort is stable, so
/// entries with the same key keep their discovery order.
pub fn sort_docs(entries: &mut [DocEntry]) {
	entries.sort_by(|a, b| {
		a.doc
			.category()
			.as_str()
			.cmp(b.doc.category().as_str())
			.then_with(|| a.doc.name().cmp(b.doc.name()))
	});
}

/// Log each `(category, name)` pair documented more than once. Duplicates are
/// still rendered.
fn warn_duplicates(entries: &[DocEntry]) {
	for pair in entries.windows(2) {
		let [previous, current] = pair else {
			continue;
		};

		if previous.doc.category() == current.doc.category()
			&& previous.doc.name() == current.doc.name()
		{
			tracing::warn!(
				category = %current.doc.category(),
				name = current.doc.name(),
				first = %previous.file.display(),
				second = %current.file.display(),
				"duplicate documentation entry"
			);
		}
	}
}

/// Normalize CRLF line endings to LF.
pub fn normalize_line_endings(content: &str) -> String {
	if content.contains('\r') {
		content.replace("\r\n", "\n").replace('\r', "\n")
	} else {
		content.to_string()
	}
}

/// Build a `GlobSet` from a list of glob pattern strings.
fn build_glob_set(patterns: &[String]) -> DocResult<GlobSet> {
	let mut builder = GlobSetBuilder::new();
	for pattern in patterns {
		let glob = Glob::new(pattern).map_err(|e| {
			DocError::InvalidPattern {
				pattern: pattern.clone(),
				reason: e.to_string(),
			}
		})?;
		builder.add(glob);
	}

	builder.build().map_err(|e| {
		DocError::InvalidPattern {
			pattern: patterns.join(", "),
			reason: e.to_string(),
		}
	})
}

/// Build a `Gitignore` matcher from exclude patterns specified in
/// `docsplice.toml` `[scan]`. These follow `.gitignore` syntax and are
/// applied on top of any `.gitignore` rules.
fn build_exclude_matcher(root: &Path, patterns: &[String]) -> DocResult<Gitignore> {
	let mut builder = GitignoreBuilder::new(root);
	for pattern in patterns {
		builder.add_line(None, pattern).map_err(|e| {
			DocError::InvalidPattern {
				pattern: pattern.clone(),
				reason: e.to_string(),
			}
		})?;
	}

	builder.build().map_err(|e| {
		DocError::InvalidPattern {
			pattern: patterns.join(", "),
			reason: e.to_string(),
		}
	})
}

/// Build a `Gitignore` matcher from the project's `.gitignore` file (if any).
fn build_gitignore(root: &Path) -> Gitignore {
	let mut builder = GitignoreBuilder::new(root);
	let gitignore_path = root.join(".gitignore");
	if gitignore_path.exists() {
		let _ = builder.add(gitignore_path);
	}
	builder.build().unwrap_or_else(|_| Gitignore::empty())
}

/// Collect every corpus file under `root`, sorted by path.
///
/// Hidden directories, `node_modules` and `target` are never entered. Unless
/// `disable_gitignore` is set, files matched by the root `.gitignore` are
/// skipped; exclude patterns are always applied on top.
pub fn collect_files(root: &Path, options: &ScanOptions) -> DocResult<Vec<PathBuf>> {
	let mut files = Vec::new();
	let mut visited_dirs = HashSet::new();

	let gitignore = if options.disable_gitignore {
		Gitignore::empty()
	} else {
		build_gitignore(root)
	};
	let custom_exclude = build_exclude_matcher(root, &options.exclude_patterns)?;

	walk_dir(
		root,
		root,
		&mut files,
		&Matchers {
			include: &options.include_set,
			gitignore: &gitignore,
			custom_exclude: &custom_exclude,
		},
		&mut visited_dirs,
	)?;
	// Sort for deterministic ordering.
	files.sort();
	Ok(files)
}

struct Matchers<'a> {
	include: &'a GlobSet,
	gitignore: &'a Gitignore,
	custom_exclude: &'a Gitignore,
}

fn is_ignored_directory_name(name: &str) -> bool {
	name.starts_with('.') || name == "node_modules" || name == "target"
}

fn walk_dir(
	root: &Path,
	dir: &Path,
	files: &mut Vec<PathBuf>,
	matchers: &Matchers<'_>,
	visited_dirs: &mut HashSet<PathBuf>,
) -> DocResult<()> {
	if !dir.is_dir() {
		return Ok(());
	}

	// Symlinked directories can loop back on themselves.
	let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
	if !visited_dirs.insert(canonical) {
		tracing::debug!(dir = %dir.display(), "skipping already visited directory");
		return Ok(());
	}

	for entry in std::fs::read_dir(dir)? {
		let path = entry?.path();
		let is_dir = path.is_dir();

		if is_dir
			&& path
				.file_name()
				.and_then(|n| n.to_str())
				.is_some_and(is_ignored_directory_name)
		{
			continue;
		}

		if matchers.gitignore.matched(&path, is_dir).is_ignore()
			|| matchers.custom_exclude.matched(&path, is_dir).is_ignore()
		{
			continue;
		}

		if is_dir {
			walk_dir(root, &path, files, matchers, visited_dirs)?;
		} else if path
			.strip_prefix(root)
			.is_ok_and(|rel_path| matchers.include.is_match(rel_path))
		{
			files.push(path);
		}
	}

	Ok(())
}
