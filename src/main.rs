// src/main.rs
// =============================================================================
// This is the entry point of the explorer CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr)
// 3. Build the immutable Config and the GitHub client from it
// 4. Dispatch to the subcommand handler
// 5. Exit with a proper code (0 = success, 1 = requested file could not be
//    shown, 2 = unexpected error)
//
// Each handler applies the failure policy of its page: profile and listing
// problems show up as "nothing here", a file that cannot be fetched is an
// error the user gets to see.
// =============================================================================

mod browser;
mod cli;
mod config;
mod error;
mod github;
mod languages;
mod render;
mod repos;
mod shell;
mod viewer;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use browser::{browser_url, linked_repo, links_to_repo, Location, NavigationPath};
use cli::{Cli, Commands};
use config::Config;
use github::{GithubApi, GithubClient};
use viewer::ViewOutcome;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    // Step 1: Parse command-line arguments
    // clap handles --help and bad input itself
    let cli = Cli::parse();

    // Step 2: Logging goes to stderr so stdout stays clean for --json
    init_logging(cli.verbose);

    // Step 3: Read the environment once; --user overrides the configured account
    let config = Config::from_env()?.with_username(cli.user);
    if config.token.is_none() {
        warn!("GITHUB_TOKEN is not set; requests are unauthenticated and may be rate limited");
    }

    // Step 4: One HTTP client for the whole run
    let client = GithubClient::new(config.clone()).context("Failed to create HTTP client")?;

    // Step 5: Hand off to the subcommand; each returns its exit code
    match cli.command {
        Commands::Profile { json } => handle_profile(&client, json).await,
        Commands::Repos { filter, json } => handle_repos(&client, filter, json).await,
        Commands::Languages { top, json } => handle_languages(&client, top, json).await,
        Commands::Ls { repo, path, json } => handle_ls(&client, &config, &repo, &path, json).await,
        Commands::View { repo, path, json } => handle_view(&client, &repo, &path, json).await,
        Commands::Browse { repo, url } => handle_browse(&client, &config, &repo, url).await,
    }
}

// RUST_LOG wins; otherwise warnings only, or everything with --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn handle_profile(client: &GithubClient, json: bool) -> Result<i32> {
    // A missing profile is not an error, the card just stays empty
    match github::load_profile(client).await {
        Some(profile) if json => render::print_json(&profile)?,
        Some(profile) => render::print_profile(&profile),
        None => println!("⏳ No profile available for {}", client.username()),
    }
    Ok(0)
}

async fn handle_repos(client: &GithubClient, filter: repos::RepoFilter, json: bool) -> Result<i32> {
    // Failed fetch -> empty list (already logged)
    let all = github::load_repositories(client).await;

    // Sort by stars, then keep only what the filter asks for
    let selected = repos::select(&all, filter);

    if json {
        render::print_json(&selected)?;
    } else {
        render::print_repos(&selected);
    }
    Ok(0)
}

async fn handle_languages(client: &GithubClient, top: Option<usize>, json: bool) -> Result<i32> {
    // Step 1: Every repository of the account
    let all = github::load_repositories(client).await;

    // Step 2: Fetch their languages concurrently and sum the ones that answered
    let report = languages::aggregate_languages(client, &all).await;

    // Step 3: Pick the rows to show (all, or the top N by bytes)
    let rows = render::language_rows(&report.tally, top);

    if json {
        render::print_json(&rows)?;
    } else {
        render::print_languages(&report.tally, &rows);
    }

    // Step 4: Each failure was logged on its own; add a summary for --verbose runs
    if !report.failures.is_empty() {
        let skipped: Vec<&str> = report
            .failures
            .iter()
            .map(|failure| failure.repo.as_str())
            .collect();
        info!(
            skipped = skipped.len(),
            total = all.len(),
            repos = %skipped.join(", "),
            "Language totals leave out repositories whose fetch failed"
        );
    }
    Ok(0)
}

async fn handle_ls(
    client: &GithubClient,
    config: &Config,
    repo: &str,
    path: &str,
    json: bool,
) -> Result<i32> {
    // Normalize "a//b/" to "a/b" before it reaches the API or the link
    let path = NavigationPath::parse(path);

    // Any failure shows up as an empty directory
    let entries = github::list_directory(client, repo, &path.to_string()).await;

    if json {
        render::print_json(&entries)?;
    } else {
        // Shareable link first, like the browser's address bar
        println!("{}", browser_url(&config.site_base, repo, &path));
        render::print_listing(&entries);
    }
    Ok(0)
}

async fn handle_view(client: &GithubClient, repo: &str, path: &str, json: bool) -> Result<i32> {
    // Step 1: Fetch and decode; only a failed request is an error here
    let outcome = match viewer::open_file(client, repo, path).await {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("❌ Could not load {}: {}", path, e);
            return Ok(1);
        }
    };

    // Step 2: Show it, or fall back the way the file page does
    match outcome {
        ViewOutcome::Show(content) if json => render::print_json(&content)?,
        ViewOutcome::Show(content) => {
            let link = viewer::github_blob_url(client.username(), repo, &content.path);
            render::print_file(&content, &link);
        }
        ViewOutcome::RedirectToListing(parent) => {
            // Same recovery as the file page: show the enclosing directory
            eprintln!("📂 {} is a directory; listing /{} instead", path, parent);
            let entries = github::list_directory(client, repo, &parent.to_string()).await;
            if json {
                render::print_json(&entries)?;
            } else {
                render::print_listing(&entries);
            }
        }
        ViewOutcome::NothingToShow => {
            eprintln!("⚠️  {} has no displayable content", path);
            return Ok(1);
        }
    }
    Ok(0)
}

async fn handle_browse(
    client: &GithubClient,
    config: &Config,
    repo: &str,
    url: Option<String>,
) -> Result<i32> {
    // The starting URL is read once to seed the path; without one, start at the root
    let location = match url {
        Some(url) => {
            let location =
                Location::parse(&url).with_context(|| format!("Invalid browser link: {}", url))?;

            // A link into another repository would be browsed under the wrong name
            if !links_to_repo(location.current(), repo) {
                bail!(
                    "Browser link is for repository '{}', not '{}': {}",
                    linked_repo(location.current()).unwrap_or_default(),
                    repo,
                    url
                );
            }
            location
        }
        None => Location::new(browser_url(&config.site_base, repo, &NavigationPath::root())),
    };

    shell::run(client, repo, config.site_base.clone(), location).await?;
    Ok(0)
}
