// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Global options pick the account and the log level; each subcommand is
// one "page" of the explorer:
//   profile   -> the profile card
//   repos     -> the repository grid
//   languages -> the language chart
//   ls / view -> one directory / one file
//   browse    -> interactive directory browser
// =============================================================================

use clap::{Parser, Subcommand};

use crate::repos::RepoFilter;

#[derive(Parser, Debug)]
#[command(
    name = "gh-explorer",
    version,
    about = "Explore a GitHub account's repositories, languages and files",
    long_about = "gh-explorer browses one GitHub account through the REST API: its profile, \
                  repositories, an account-wide language breakdown, directory trees and \
                  file contents. Set GITHUB_TOKEN to authenticate requests."
)]
pub struct Cli {
    /// Account to explore (overrides GH_EXPLORER_USERNAME)
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Log every request (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the account's profile
    Profile {
        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List repositories, most starred first
    ///
    /// Example: gh-explorer repos --filter stars
    Repos {
        /// Which repositories to show
        #[arg(long, value_enum, default_value_t = RepoFilter::All)]
        filter: RepoFilter,

        #[arg(long)]
        json: bool,
    },

    /// Total bytes of code per language across every repository
    Languages {
        /// Only show the N largest languages
        #[arg(long)]
        top: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// List one directory of a repository
    ///
    /// Example: gh-explorer ls my-repo --path src
    Ls {
        repo: String,

        /// Directory inside the repository (default: root)
        #[arg(long, default_value = "")]
        path: String,

        #[arg(long)]
        json: bool,
    },

    /// Print a file with line numbers
    ///
    /// Example: gh-explorer view my-repo src/main.rs
    View {
        repo: String,

        /// File path inside the repository
        path: String,

        #[arg(long)]
        json: bool,
    },

    /// Browse a repository interactively (type `help` once inside)
    Browse {
        repo: String,

        /// Start from a shared browser link, e.g. http://localhost:5173/github/repo?path=src
        #[arg(long)]
        url: Option<String>,
    },
}
