use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DocError {
	#[error(transparent)]
	#[diagnostic(code(docsplice::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read {path}: {source}")]
	#[diagnostic(code(docsplice::read_file))]
	ReadFile {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(docsplice::config_parse),
		help("check that docsplice.toml is valid TOML with optional [scan], [render] and [default_config] sections")
	)]
	ConfigParse(String),

	#[error("invalid glob pattern `{pattern}`: {reason}")]
	#[diagnostic(code(docsplice::invalid_pattern))]
	InvalidPattern { pattern: String, reason: String },

	#[error("malformed doc block in {path}: {reason}\n{body}")]
	#[diagnostic(
		code(docsplice::malformed_block),
		help("the body of a `--[=[@doc` block must be valid TOML")
	)]
	MalformedBlock {
		path: String,
		body: String,
		reason: String,
	},

	#[error("invalid doc block in {path}: {reason}\n{body}")]
	#[diagnostic(
		code(docsplice::invalid_doc),
		help(
			"`category` must be one of api, autocmd, command, source, type and every required \
			 field for that category must be present"
		)
	)]
	InvalidDoc {
		path: String,
		body: String,
		reason: String,
	},

	#[error("default config command `{command}` failed: {reason}")]
	#[diagnostic(code(docsplice::default_config))]
	DefaultConfig { command: String, reason: String },

	#[error("target document not found: `{0}`")]
	#[diagnostic(
		code(docsplice::target_not_found),
		help("set `target` in docsplice.toml to the markdown file that holds the markers")
	)]
	TargetNotFound(String),
}

pub type DocResult<T> = Result<T, DocError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
