mod common;

use docsplice_core::AnyEmptyResult;
use docsplice_core::DocConfig;
use predicates::prelude::PredicateBooleanExt;
use rstest::rstest;

#[test]
fn can_init() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::docsplice_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Created docsplice.toml"))
		.stdout(predicates::str::contains("<!-- auto-generate-s:api -->"));

	let config_path = tmp.path().join("docsplice.toml");
	let content = std::fs::read_to_string(&config_path)?;
	assert!(content.contains("[scan]"));
	assert!(content.contains("[render]"));

	// The sample must load as a valid config.
	let config = DocConfig::load(tmp.path())?;
	assert!(config.is_some());

	Ok(())
}

#[rstest]
#[case::root("docsplice.toml")]
#[case::hidden(".docsplice.toml")]
#[case::config_dir(".config/docsplice.toml")]
fn init_does_not_overwrite(#[case] existing: &str) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let existing_path = tmp.path().join(existing);
	if let Some(parent) = existing_path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(&existing_path, "target = \"docs.md\"\n")?;

	common::docsplice_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains(format!(
			"Config file already exists: {existing}"
		)))
		.stdout(predicates::str::contains("Created").not());

	assert_eq!(std::fs::read_to_string(&existing_path)?, "target = \"docs.md\"\n");

	Ok(())
}
