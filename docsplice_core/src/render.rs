use crate::doc::ApiDoc;
use crate::doc::AutocmdDoc;
use crate::doc::CommandDoc;
use crate::doc::Doc;
use crate::doc::SourceDoc;
use crate::doc::TypeDoc;

/// Placeholder emitted when a command or api has no arguments.
pub const NO_ARGUMENTS: &str = "_No arguments_";
/// Placeholder emitted when a source has no options.
pub const NO_OPTIONS: &str = "_No options_";
/// Trailing spacer after command and api entries.
pub const SPACER: &str = "&nbsp;";

/// Knobs shared by all renderers.
#[derive(Debug, Clone)]
pub struct RenderOptions {
	/// Info string for fenced code blocks holding definitions and examples.
	pub language: String,
	/// Ex command that user commands are dispatched through. Set it when the
	/// plugin exposes one command taking the subcommand name as its argument:
	/// `MyPlugin` renders `:MyPlugin name`. Without a prefix every documented
	/// command is assumed to be its own Ex command and renders as `:name`.
	pub command_prefix: Option<String>,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			language: "lua".to_string(),
			command_prefix: None,
		}
	}
}

/// Escape a table cell so `|` can't be read as a column separator.
pub fn escape_table_cell(value: &str) -> String {
	value.replace('|', "\\|")
}

/// Render any document with the renderer for its category.
pub fn render_doc(doc: &Doc, options: &RenderOptions) -> String {
	match doc {
		Doc::Type(doc) => render_type(doc, options),
		Doc::Source(doc) => render_source(doc, options),
		Doc::Command(doc) => render_command(doc, options),
		Doc::Autocmd(doc) => render_autocmd(doc),
		Doc::Api(doc) => render_api(doc),
	}
}

/// ``*Name*`` anchor followed by the fenced definition.
pub fn render_type(doc: &TypeDoc, options: &RenderOptions) -> String {
	format!(
		"`*{}*`\n{}",
		doc.name,
		fenced(&options.language, &doc.definition)
	)
}

pub fn render_source(doc: &SourceDoc, options: &RenderOptions) -> String {
	let rows: Vec<[&str; 4]> = doc
		.options
		.iter()
		.flatten()
		.map(|option| {
			[
				option.name.as_str(),
				option.r#type.as_str(),
				option.default.as_deref().unwrap_or_default(),
				option.desc.as_deref().unwrap_or_default(),
			]
		})
		.collect();
	let options_table = table(&["Name", "Type", "Default", "Description"], &rows)
		.unwrap_or_else(|| NO_OPTIONS.to_string());

	let mut output = format!("### {}\n\n{}\n\n{options_table}", doc.name, doc.desc);
	if let Some(example) = &doc.example {
		output.push_str("\n\n");
		output.push_str(&fenced(&options.language, example));
	}

	output
}

pub fn render_command(doc: &CommandDoc, options: &RenderOptions) -> String {
	let rows: Vec<[&str; 2]> = doc
		.args
		.iter()
		.flatten()
		.map(|arg| [arg.name.as_str(), arg.desc.as_str()])
		.collect();
	let args_table =
		table(&["Name", "Description"], &rows).unwrap_or_else(|| NO_ARGUMENTS.to_string());

	let invocation = match &options.command_prefix {
		Some(prefix) => format!(":{prefix} {}", doc.name),
		None => format!(":{}", doc.name),
	};

	format!(
		"### {}\n{}\n\n{}\n\n{args_table}\n{SPACER}",
		doc.name,
		fenced("", &invocation),
		doc.desc
	)
}

pub fn render_autocmd(doc: &AutocmdDoc) -> String {
	format!("- `{}`\n  - {}", doc.name, doc.desc)
}

pub fn render_api(doc: &ApiDoc) -> String {
	let rows: Vec<[&str; 3]> = doc
		.args
		.iter()
		.flatten()
		.map(|arg| [arg.name.as_str(), arg.r#type.as_str(), arg.desc.as_str()])
		.collect();
	let args_table = table(&["Name", "Type", "Description"], &rows)
		.unwrap_or_else(|| NO_ARGUMENTS.to_string());

	format!("### {}\n{}\n{args_table}\n{SPACER}", doc.name, doc.desc)
}

fn fenced(language: &str, content: &str) -> String {
	format!("```{language}\n{content}\n```")
}

/// Build a markdown table, or `None` when there are no rows.
fn table<const N: usize>(headers: &[&str; N], rows: &[[&str; N]]) -> Option<String> {
	if rows.is_empty() {
		return None;
	}

	let header = headers
		.iter()
		.map(|header| format!(" {header} |"))
		.collect::<String>();
	let separator = headers
		.iter()
		.map(|header| format!("{}|", "-".repeat(header.len() + 2)))
		.collect::<String>();

	let mut lines = vec![format!("|{header}"), format!("|{separator}")];
	for row in rows {
		let cells = row
			.iter()
			.map(|cell| format!(" {} |", escape_table_cell(cell)))
			.collect::<String>();
		lines.push(format!("|{cells}"));
	}

	Some(lines.join("\n"))
}
