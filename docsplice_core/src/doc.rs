use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// The document kind selected by the `category` key of a doc block.
///
/// Variants are declared in the same order as their string names so that the
/// derived ordering agrees with lexicographic ordering of [`Category::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	Api,
	Autocmd,
	Command,
	Source,
	Type,
}

impl Category {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Api => "api",
			Self::Autocmd => "autocmd",
			Self::Command => "command",
			Self::Source => "source",
			Self::Type => "type",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A validated documentation entry.
///
/// The enum is internally tagged by `category`, so a TOML body such as
///
/// ```toml
/// category = "command"
/// name = "echoHello"
/// desc = "says hi"
/// ```
///
/// deserializes into [`Doc::Command`]. Keys that don't belong to the selected
/// variant are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Doc {
	Type(TypeDoc),
	Source(SourceDoc),
	Command(CommandDoc),
	Autocmd(AutocmdDoc),
	Api(ApiDoc),
}

/// A declared type or alias with its literal annotation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDoc {
	pub name: String,
	pub definition: String,
}

/// A pluggable data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDoc {
	pub name: String,
	pub desc: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub options: Option<Vec<SourceOption>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOption {
	pub name: String,
	pub r#type: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub desc: Option<String>,
}

/// A user command and its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDoc {
	pub name: String,
	pub desc: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub args: Option<Vec<CommandArg>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandArg {
	pub name: String,
	pub desc: String,
}

/// An event fired by the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocmdDoc {
	pub name: String,
	pub desc: String,
}

/// A callable entry point and its typed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDoc {
	pub name: String,
	pub desc: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub args: Option<Vec<ApiArg>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiArg {
	pub name: String,
	pub r#type: String,
	pub desc: String,
}

impl Doc {
	pub fn category(&self) -> Category {
		match self {
			Self::Type(_) => Category::Type,
			Self::Source(_) => Category::Source,
			Self::Command(_) => Category::Command,
			Self::Autocmd(_) => Category::Autocmd,
			Self::Api(_) => Category::Api,
		}
	}

	pub fn name(&self) -> &str {
		match self {
			Self::Type(doc) => &doc.name,
			Self::Source(doc) => &doc.name,
			Self::Command(doc) => &doc.name,
			Self::Autocmd(doc) => &doc.name,
			Self::Api(doc) => &doc.name,
		}
	}
}

/// Reason a decoded record could not be narrowed into a [`Doc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError(pub String);

impl fmt::Display for SchemaError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl std::error::Error for SchemaError {}

/// Validate an untyped TOML record against the closed [`Doc`] schema.
///
/// The `category` key selects the variant. Missing or unknown categories,
/// missing required fields, wrongly typed values and empty names are all
/// rejected.
pub fn validate(table: toml::Table) -> Result<Doc, SchemaError> {
	let doc: Doc = toml::Value::Table(table)
		.try_into()
		.map_err(|e| SchemaError(e.to_string()))?;

	if doc.name().trim().is_empty() {
		return Err(SchemaError(format!(
			"`name` must not be empty for category `{}`",
			doc.category()
		)));
	}

	if let Doc::Type(type_doc) = &doc {
		if type_doc.definition.trim().is_empty() {
			return Err(SchemaError(format!(
				"`definition` must not be empty for type `{}`",
				type_doc.name
			)));
		}
	}

	Ok(doc)
}
