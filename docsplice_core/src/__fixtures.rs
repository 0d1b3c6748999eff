use std::path::Path;

use crate::AnyEmptyResult;

pub const PLUGIN_SOURCE: &str = r#"local M = {}

--[=[@doc
  category = "api"
  name = "delete_thread"
  desc = "Delete the specified thread."

  [[args]]
  name = "thread_id"
  type = "string"
  desc = "thread id"
--]=]
function M.delete_thread(thread_id) end

--[=[@doc
  category = "command"
  name = "echoHello"
  desc = "says hi"
]=]

---@doc.type
---@class MyPlugin.Config
---@field timeout integer

return M
"#;

pub const RENDERED_API: &str = "### delete_thread\nDelete the specified thread.\n| Name | Type | \
                                Description |\n|------|------|-------------|\n| thread_id | \
                                string | thread id |\n&nbsp;";

pub const RENDERED_COMMAND: &str =
	"### echoHello\n```\n:echoHello\n```\n\nsays hi\n\n_No arguments_\n&nbsp;";

pub const RENDERED_TYPE: &str =
	"`*MyPlugin.Config*`\n```lua\n---@class MyPlugin.Config\n---@field timeout integer\n```";

pub const README: &str = "# Plugin\n\n## API\n\n<!-- auto-generate-s:api -->\nstale\n<!-- \
                          auto-generate-e:api -->\n\n## Commands\n\n<!-- \
                          auto-generate-s:command -->\n<!-- auto-generate-e:command -->\n\n## \
                          Types\n\n<!-- auto-generate-s:type -->\n<!-- auto-generate-e:type \
                          -->\n";

pub fn expected_readme() -> String {
	format!(
		"# Plugin\n\n## API\n\n<!-- auto-generate-s:api -->\n{RENDERED_API}\n<!-- \
		 auto-generate-e:api -->\n\n## Commands\n\n<!-- auto-generate-s:command \
		 -->\n{RENDERED_COMMAND}\n<!-- auto-generate-e:command -->\n\n## Types\n\n<!-- \
		 auto-generate-s:type -->\n{RENDERED_TYPE}\n<!-- auto-generate-e:type -->\n"
	)
}

/// Write `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> AnyEmptyResult {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, content)?;

	Ok(())
}
