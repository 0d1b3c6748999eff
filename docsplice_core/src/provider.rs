use std::path::Path;
use std::process::Command;

use crate::DocError;
use crate::DocResult;
use crate::config::DefaultConfigCommand;

/// Run the default config command in `root` and return its stdout split on
/// `\n`.
///
/// The whole output is buffered before it is split. A non-zero exit status is
/// fatal and carries the captured stderr (or the exit status when stderr is
/// empty).
pub fn capture_default_config(
	root: &Path,
	default_config: &DefaultConfigCommand,
) -> DocResult<Vec<String>> {
	let command = default_config.command.as_str();
	tracing::debug!(command, "running default config command");

	let output = if cfg!(windows) {
		Command::new("cmd")
			.arg("/C")
			.arg(command)
			.current_dir(root)
			.output()?
	} else {
		Command::new("sh")
			.arg("-c")
			.arg(command)
			.current_dir(root)
			.output()?
	};

	if !output.status.success() {
		let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
		let reason = if stderr.is_empty() {
			format!(
				"command exited with status {}",
				output
					.status
					.code()
					.map_or_else(|| "unknown".to_string(), |code| code.to_string())
			)
		} else {
			stderr
		};

		return Err(DocError::DefaultConfig {
			command: command.to_string(),
			reason,
		});
	}

	let stdout = String::from_utf8_lossy(&output.stdout);
	Ok(stdout.split('\n').map(str::to_string).collect())
}
