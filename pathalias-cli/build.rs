//! Build script for pathalias-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathalias")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve alias-qualified path references")
        .long_about(
            "Command-line tool for resolving alias:path references against registered directories",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load this configuration file instead of discovering one")
                .value_name("FILE")
                .global(true)
                .env("PATHALIAS_CONFIG"),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help("Override the root directory")
                .value_name("DIR")
                .global(true),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help("Override the base URL used for URIs")
                .value_name("URL")
                .global(true),
        )
        .arg(
            Arg::new("alias")
                .long("alias")
                .help("Register DIR under alias NAME (repeatable, searched first)")
                .value_name("NAME=DIR")
                .global(true)
                .action(clap::ArgAction::Append),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Find the first existing file for a reference")
                .long_about("Search the directories of an alias in order and print the first match"),
            Command::new("paths")
                .about("List the directories registered for an alias")
                .long_about("Print each registered directory with its slot index, as text or JSON"),
            Command::new("uri")
                .about("Build the absolute URL of a reference")
                .long_about("Resolve a reference under the root and prefix it with the base URL"),
            Command::new("urn")
                .about("Show the root-relative path of a reference")
                .long_about("Resolve a reference and strip the root directory from it"),
            Command::new("clean")
                .about("Normalize a path string")
                .long_about("Unify separators and collapse . and .. segments without touching disk"),
            Command::new("inspect")
                .about("Show how a reference is classified and resolved")
                .long_about("Print the prefix, virtual flag, alias, subpath and resolution of a reference"),
            Command::new("validate")
                .about("Validate the configuration")
                .long_about("Check a configuration file, or the discovered configuration, for errors"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main pathalias.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathalias.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
