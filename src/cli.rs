//! CLI: args, logging setup, path display, and run logic.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;

use crate::codegen::{generate, interface_name, write_output};
use crate::error::Error;
use crate::scanner::{scan_directory, ScanResult};

/// Directories skipped unless --exclude-dir is given.
const DEFAULT_EXCLUDE_DIRS: &[&str] = &["**/node_modules", "**/.godot"];

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "GD2TS_LOG";

#[derive(Parser)]
#[command(name = "godot2ts")]
#[command(about = "Generate TypeScript declarations for the classes in a Godot GDScript project.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory scanned recursively for .gd files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub input: PathBuf,

    /// Directory the generated.ts file is written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Directory name (or **/name) to exclude from scan; can be repeated (default: **/node_modules, **/.godot)
    #[arg(long = "exclude-dir", value_name = "DIR")]
    pub exclude_dirs: Vec<String>,

    /// Print the generated code to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Debug mode: print the extracted record (JSON) of classes with this interface name
    #[arg(long, value_name = "NAME")]
    pub debug_class: Option<String>,

    /// Verbose: -v = summary, -vv = every file, -vvv = directory traversal
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Format path for user-facing output: strip Windows extended path prefix `\\?\` so it displays as a normal path.
pub fn display_path(path: &Path) -> std::borrow::Cow<'_, str> {
    let s = path.to_string_lossy();
    #[cfg(windows)]
    {
        if let Some(stripped) = s.strip_prefix(r"\\?\") {
            return std::borrow::Cow::Owned(stripped.to_string());
        }
    }
    s
}

fn log_level(args: &Args) -> log::LevelFilter {
    if args.quiet {
        return log::LevelFilter::Error;
    }
    match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Install the stderr logger. Later calls (e.g. repeated `run` in one process) are no-ops.
fn init_logging(args: &Args) {
    let _ = env_logger::Builder::new()
        .filter_level(log_level(args))
        .parse_env(LOG_ENV)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

fn resolve_root(path: &Path) -> Result<PathBuf, i32> {
    let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if !root.is_dir() {
        log::error!("{}", Error::NotADirectory(root));
        return Err(2);
    }
    Ok(root)
}

fn exclude_dirs(args: &Args) -> Vec<String> {
    if args.exclude_dirs.is_empty() {
        DEFAULT_EXCLUDE_DIRS.iter().map(|d| d.to_string()).collect()
    } else {
        args.exclude_dirs.clone()
    }
}

fn run_debug_mode(class_name: &str, scan: &ScanResult) -> i32 {
    let matches: Vec<_> = scan
        .scripts
        .iter()
        .flat_map(|s| s.classes.iter().map(move |c| (s, c)))
        .filter(|(s, c)| interface_name(c, &s.resource_path) == class_name)
        .collect();
    if matches.is_empty() {
        log::warn!("no class found for '{}'", class_name);
    }
    for (script, class) in matches {
        eprintln!("{}:", script.resource_path);
        match serde_json::to_string_pretty(class) {
            Ok(json) => eprintln!("{}", json),
            Err(err) => log::error!("cannot serialize {}: {}", script.resource_path, err),
        }
    }
    0
}

pub fn run(args: Args) -> i32 {
    init_logging(&args);
    let started = Instant::now();

    let root = match resolve_root(&args.input) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let exclude_dirs = exclude_dirs(&args);
    let scan = scan_directory(&root, Some(&exclude_dirs));
    log::info!(
        "extracted {} class(es) from {} script(s); {} skipped",
        scan.class_count(),
        scan.scripts.len(),
        scan.failures.len()
    );

    if let Some(ref class_name) = args.debug_class {
        return run_debug_mode(class_name, &scan);
    }

    let code = generate(&scan.scripts);
    if args.stdout {
        print!("{}", code);
    } else {
        match write_output(&args.output, &code) {
            Ok(path) => log::info!("wrote {}", display_path(&path)),
            Err(err) => {
                log::error!("{}", err);
                return 1;
            }
        }
    }
    log::info!("generation took {:.2?}", started.elapsed());
    0
}
