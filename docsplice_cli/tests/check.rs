mod common;

use docsplice_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn check_passes_when_up_to_date() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), common::FRESH_README)?;

	common::docsplice_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Check passed: README.md is up to date."));

	Ok(())
}

#[test]
fn check_fails_when_stale() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), common::STALE_README)?;

	common::docsplice_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("README.md is out of date"))
		.stderr(predicates::str::contains("+### open").not());

	// Checking never writes.
	let content = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert!(content.contains("stale"));

	Ok(())
}

#[test]
fn check_diff_shows_changes() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), common::STALE_README)?;

	common::docsplice_cmd()
		.arg("check")
		.arg("--diff")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("-stale"))
		.stderr(predicates::str::contains("+### open"))
		.stderr(predicates::str::contains("+_No arguments_"));

	Ok(())
}

#[test]
fn check_ignores_sections_without_markers() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	// The command doc has no section in this README.
	common::write_project(tmp.path(), "# Plugin\n\nNo markers here.\n")?;

	common::docsplice_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("up to date"));

	Ok(())
}

#[test]
fn check_without_subcommand_fails() {
	common::docsplice_cmd()
		.assert()
		.code(1)
		.stderr(predicates::str::contains("No subcommand specified"));
}
