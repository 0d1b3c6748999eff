use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::DocError;
use crate::DocResult;
use crate::doc::Doc;
use crate::doc::TypeDoc;
use crate::doc::validate;
use crate::scanner::config_blocks;
use crate::scanner::type_blocks;

// An optional LuaLS attribute such as `(exact)` may sit between the tag and
// the name.
static CLASS_NAME: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"@class\s+(?:\([^)\n]*\)\s*)?([^:\n]+)").expect("valid class pattern")
});

static ALIAS_NAME: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"@alias\s+([^:\n]+)").expect("valid alias pattern"));

/// Decode the raw body of a config block into a validated [`Doc`].
///
/// Both a TOML syntax error and a schema violation are fatal; the error keeps
/// the file path and the raw body so the offending comment can be located.
pub fn decode_config_block(path: &Path, body: &str) -> DocResult<Doc> {
	let table: toml::Table = toml::from_str(body).map_err(|e| {
		DocError::MalformedBlock {
			path: path.display().to_string(),
			body: body.to_string(),
			reason: e.to_string(),
		}
	})?;

	validate(table).map_err(|e| {
		DocError::InvalidDoc {
			path: path.display().to_string(),
			body: body.to_string(),
			reason: e.to_string(),
		}
	})
}

/// Build a `type` document from a trimmed type block body.
///
/// Returns `None` when the body is empty or declares neither a class nor an
/// alias. `@class` wins when both are present.
pub fn decode_type_block(body: &str) -> Option<Doc> {
	let definition = body.trim();
	if definition.is_empty() {
		return None;
	}

	let name = CLASS_NAME
		.captures(definition)
		.or_else(|| ALIAS_NAME.captures(definition))
		.and_then(|captures| captures.get(1))
		.map(|name| name.as_str().trim())
		.filter(|name| !name.is_empty())?;

	Some(Doc::Type(TypeDoc {
		name: name.to_string(),
		definition: definition.to_string(),
	}))
}

/// Extract every document from one file: config blocks first, then type
/// blocks, each in the order they appear.
pub fn decode_file(path: &Path, content: &str) -> DocResult<Vec<Doc>> {
	let mut docs = Vec::new();

	for body in config_blocks(content) {
		docs.push(decode_config_block(path, &body)?);
	}

	docs.extend(type_blocks(content).filter_map(|body| decode_type_block(&body)));

	Ok(docs)
}
