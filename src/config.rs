use crate::compiler::{Compiler, DEFAULT_PROGRAM};
use crate::shader::ExtensionCase;

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Compile every .vert and .frag shader below a directory with one compiler call
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to search, defaults to the directory of this executable
    #[arg(short, long, env = "SHADERBATCH_ROOT")]
    pub root: Option<PathBuf>,

    /// Shader compiler to run
    #[arg(long, env = "SHADERBATCH_COMPILER", default_value = DEFAULT_PROGRAM)]
    pub compiler: PathBuf,

    /// Only accept lowercase .vert and .frag extensions
    #[arg(long)]
    pub case_sensitive: bool,

    /// Visit directory entries sorted by name
    #[arg(long)]
    pub sort: bool,

    /// Print the compiler command instead of running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_filter(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub compiler: Compiler,
    pub case: ExtensionCase,
    pub sort: bool,
    pub dry_run: bool,
}

impl Config {
    pub fn resolve(args: &Args) -> Result<Self, anyhow::Error> {
        let root = match &args.root {
            Some(root) => absolute(root)?,
            None => exe_dir()?,
        };
        let case = if args.case_sensitive {
            ExtensionCase::Sensitive
        } else {
            ExtensionCase::Insensitive
        };
        Ok(Self {
            root,
            compiler: Compiler::new(&args.compiler),
            case,
            sort: args.sort,
            dry_run: args.dry_run,
        })
    }
}

fn absolute(path: &Path) -> Result<PathBuf, anyhow::Error> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to get the current directory")?;
    Ok(cwd.join(path))
}

fn exe_dir() -> Result<PathBuf, anyhow::Error> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable {} has no parent directory", exe.display()))
}
