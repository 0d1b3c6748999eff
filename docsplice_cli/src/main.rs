use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use docsplice_cli::Commands;
use docsplice_cli::DocspliceCli;
use docsplice_cli::ListFormat;
use docsplice_core::Category;
use docsplice_core::DocConfig;
use docsplice_core::SAMPLE_CONFIG;
use docsplice_core::collect_docs;
use docsplice_core::generate;
use docsplice_core::project::DocEntry;
use docsplice_core::write_result;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = DocspliceCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Update { dry_run }) => run_update(&args, dry_run),
		Some(Commands::Check { diff }) => run_check(&args, diff),
		Some(Commands::List { format }) => run_list(&args, format),
		None => {
			eprintln!("No subcommand specified. Run `docsplice --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Library errors carry codes and help text, so render them through
		// miette.
		match e.downcast::<docsplice_core::DocError>() {
			Ok(doc_err) => {
				let report: miette::Report = (*doc_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Logs go to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_directive = if verbose { "docsplice=debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &DocspliceCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn run_init(args: &DocspliceCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);

	if let Some(existing) = DocConfig::resolve_path(&root) {
		println!(
			"Config file already exists: {}",
			make_relative(&existing, &root)
		);
		return Ok(());
	}

	let config_path = root.join("docsplice.toml");
	std::fs::write(&config_path, SAMPLE_CONFIG)?;
	println!("Created docsplice.toml");

	println!();
	println!("Next steps:");
	println!("  1. Add the section markers to your README.md:");
	println!("     <!-- auto-generate-s:api -->");
	println!("     <!-- auto-generate-e:api -->");
	println!("  2. Document your Lua code with `--[=[@doc ... --]=]` blocks");
	println!("  3. Run `docsplice update` to generate the sections");

	Ok(())
}

fn run_update(args: &DocspliceCli, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let result = generate(&root)?;
	let target = make_relative(&result.target, &root);

	if args.verbose {
		println!("Scanned {} document(s)", result.docs.len());
	}

	if !result.is_changed() {
		println!("{target} is already up to date.");
		return Ok(());
	}

	if dry_run {
		println!("Dry run: would update {target}.");
		if args.verbose {
			print_diff(&result.original, &result.updated);
		}
		return Ok(());
	}

	write_result(&result)?;
	println!("{} {target}.", colored!("Updated", green));

	Ok(())
}

fn run_check(args: &DocspliceCli, show_diff: bool) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let result = generate(&root)?;
	let target = make_relative(&result.target, &root);

	if !result.is_changed() {
		println!("Check passed: {target} is up to date.");
		return Ok(());
	}

	eprintln!(
		"{} {target} is out of date. Run `docsplice update` to regenerate it.",
		colored!("stale:", yellow)
	);
	if show_diff {
		print_diff(&result.original, &result.updated);
	}

	process::exit(1);
}

fn run_list(args: &DocspliceCli, format: ListFormat) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let docs = collect_docs(&root)?;

	match format {
		ListFormat::Json => {
			let entries: Vec<DocEntry> = docs
				.into_iter()
				.map(|entry| {
					DocEntry {
						file: PathBuf::from(make_relative(&entry.file, &root)),
						doc: entry.doc,
					}
				})
				.collect();
			println!("{}", serde_json::to_string_pretty(&entries)?);
		}
		ListFormat::Text => {
			if docs.is_empty() {
				println!("No documentation blocks found.");
				return Ok(());
			}

			let mut current: Option<Category> = None;
			for entry in &docs {
				let category = entry.doc.category();
				if current != Some(category) {
					if current.is_some() {
						println!();
					}
					println!("{}", colored!(format!("{category}:"), bold));
					current = Some(category);
				}

				let rel = make_relative(&entry.file, &root);
				println!("  {} ({rel})", entry.doc.name());
			}

			println!("\n{} document(s)", docs.len());
		}
	}

	Ok(())
}

fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
