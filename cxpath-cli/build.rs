//! Build script for cxpath-cli.
//!
//! Renders the `cxpath.1` man page into `OUT_DIR` with clap_mangen. The
//! command tree is declared here because a build script cannot depend on the
//! crate it builds; keep it in step with src/cli.rs.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("cxpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect, normalize and canonicalize filesystem paths")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("platform")
                .long("platform")
                .help("Path grammar to use (posix or windows)")
                .value_name("PLATFORM")
                .global(true)
                .env("CXPATH_PLATFORM"),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Directory holding config.yaml")
                .value_name("DIR")
                .global(true)
                .env("CXPATH_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("decompose").about("Show every lexical part of paths"),
            Command::new("normal").about("Print the lexical normal form of paths"),
            Command::new("relative").about("Express a path relative to a base"),
            Command::new("absolute").about("Anchor a path onto an absolute base"),
            Command::new("canonical").about("Resolve a path to its canonical form"),
            Command::new("weakly-canonical")
                .about("Canonicalize the existing prefix of a path"),
            Command::new("mkdirs").about("Create a directory and any missing parents"),
            Command::new("split-list").about("Split a delimited path list"),
            Command::new("join-list").about("Join paths into a delimited path list"),
            Command::new("check").about("Check a path against the platform's rules"),
            Command::new("validate").about("Validate a configuration file"),
            Command::new("completions").about("Generate shell completion scripts"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer).unwrap();
    fs::write(man_dir.join("cxpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
