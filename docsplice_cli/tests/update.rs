mod common;

use docsplice_core::AnyEmptyResult;
use similar_asserts::assert_eq;

#[test]
fn update_regenerates_stale_sections() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), common::STALE_README)?;

	common::docsplice_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Updated README.md."));

	let content = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert_eq!(content, common::FRESH_README);

	Ok(())
}

#[test]
fn update_noop_when_in_sync() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), common::FRESH_README)?;

	common::docsplice_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("README.md is already up to date."));

	Ok(())
}

#[test]
fn update_dry_run_does_not_write() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), common::STALE_README)?;

	common::docsplice_cmd()
		.arg("update")
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Dry run: would update README.md."));

	let content = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert_eq!(content, common::STALE_README);

	Ok(())
}

#[test]
fn update_uses_configured_target_and_prefix() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), common::STALE_README)?;
	std::fs::create_dir_all(tmp.path().join("docs"))?;
	std::fs::write(
		tmp.path().join("docs/usage.md"),
		"<!-- auto-generate-s:command -->\n<!-- auto-generate-e:command -->\n",
	)?;
	std::fs::write(
		tmp.path().join("docsplice.toml"),
		"target = \"docs/usage.md\"\n\n[render]\ncommand_prefix = \"Plugin\"\n",
	)?;

	common::docsplice_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Updated docs/usage.md."));

	let content = std::fs::read_to_string(tmp.path().join("docs/usage.md"))?;
	assert_eq!(
		content,
		"<!-- auto-generate-s:command -->\n### greet\n```\n:Plugin greet\n```\n\nSay \
		 hello.\n\n_No arguments_\n&nbsp;\n<!-- auto-generate-e:command -->\n"
	);

	// The default target is not touched once another one is configured.
	let readme = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert_eq!(readme, common::STALE_README);

	Ok(())
}

#[test]
fn update_fails_on_malformed_block_without_writing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), common::STALE_README)?;
	std::fs::write(
		tmp.path().join("lua/broken.lua"),
		"--[=[@doc\ncategory = \"api\nname = \"x\"\n--]=]\n",
	)?;

	common::docsplice_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("docsplice::malformed_block"));

	let content = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert_eq!(content, common::STALE_README);

	Ok(())
}

#[test]
fn update_fails_on_invalid_doc() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), common::STALE_README)?;
	std::fs::write(
		tmp.path().join("lua/incomplete.lua"),
		"--[=[@doc\ncategory = \"api\"\nname = \"x\"\n--]=]\n",
	)?;

	common::docsplice_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("docsplice::invalid_doc"));

	Ok(())
}

#[test]
fn update_fails_when_target_is_missing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("init.lua"), common::PLUGIN_LUA)?;

	common::docsplice_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("docsplice::target_not_found"));

	Ok(())
}

#[test]
fn update_verbose_emits_debug_logs() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), common::STALE_README)?;

	common::docsplice_cmd()
		.arg("update")
		.arg("--verbose")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Scanned 2 document(s)"))
		.stderr(predicates::str::contains("scanned file"))
		.stderr(predicates::str::contains("splicing section"));

	Ok(())
}
