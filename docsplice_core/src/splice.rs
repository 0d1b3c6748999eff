/// Replace every line strictly between `start_marker` and `end_marker` with
/// `replacement`.
///
/// Markers are matched as whole lines and only their first occurrence counts.
/// When either marker is missing, or the end marker comes before the start
/// marker, the lines are returned unchanged. Splicing the same replacement
/// into its own output yields the same lines again.
pub fn splice<S: AsRef<str>>(
	lines: &[String],
	start_marker: &str,
	end_marker: &str,
	replacement: &[S],
) -> Vec<String> {
	let Some((start, end)) = marker_range(lines, start_marker, end_marker) else {
		return lines.to_vec();
	};

	let mut result = Vec::with_capacity(start + 1 + replacement.len() + lines.len() - end);
	result.extend_from_slice(&lines[..=start]);
	result.extend(replacement.iter().map(|line| line.as_ref().to_string()));
	result.extend_from_slice(&lines[end..]);
	result
}

/// Indices of the first `start_marker` and `end_marker` lines. `None` when
/// either is missing or the end marker comes first.
pub fn marker_range(lines: &[String], start_marker: &str, end_marker: &str) -> Option<(usize, usize)> {
	let start = lines.iter().position(|line| line == start_marker)?;
	let end = lines.iter().position(|line| line == end_marker)?;

	(end > start).then_some((start, end))
}

/// Split document text into lines on `\n` only, keeping a trailing empty line
/// when the text ends with a newline so that joining restores it exactly.
pub fn split_lines(text: &str) -> Vec<String> {
	text.split('\n').map(str::to_string).collect()
}

/// Inverse of [`split_lines`].
pub fn join_lines(lines: &[String]) -> String {
	lines.join("\n")
}
