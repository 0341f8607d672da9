// src/shell.rs
// =============================================================================
// Interactive repository browser.
//
// Reads one command per line from stdin and drives a RepoBrowser:
//
//   ls            show the current directory again
//   cd <dir>      enter a directory
//   up            go up one level
//   root          go to the repository root
//   crumb <n>     jump to breadcrumb n (0 = first directory)
//   open <name>   enter a directory or view a file from the listing
//   cat <path>    view a file relative to the current directory
//   pwd           print the shareable link for the current directory
//   help, quit
//
// Every navigation re-fetches the listing. Viewing a file pushes its
// viewer link and steps back once the file is printed. Viewing a path
// that turns out to be a directory lands on the listing of its parent
// instead.
// =============================================================================

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;
use url::Url;

use crate::browser::{Activation, Location, PendingListing, RepoBrowser};
use crate::github::GithubApi;
use crate::render;
use crate::viewer::{github_blob_url, open_file, ViewOutcome};

const HELP: &str = "\
commands:
  ls            list the current directory
  cd <dir>      enter a directory
  up            go up one level
  root          go to the repository root
  crumb <n>     jump to breadcrumb n
  open <name>   open an entry from the listing
  cat <path>    view a file
  pwd           print the link to this directory
  quit          leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Cd(String),
    Up,
    Root,
    Crumb(usize),
    Open(String),
    Cat(String),
    Pwd,
    Help,
    Quit,
    Unknown(String),
}

/// Parses one input line. Blank lines yield None.
pub fn parse_command(line: &str) -> Option<ShellCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match (word, rest) {
        ("ls", _) => ShellCommand::List,
        ("cd", "..") | ("up", _) => ShellCommand::Up,
        ("cd", "/") | ("cd", "") | ("root", _) => ShellCommand::Root,
        ("cd", dir) => ShellCommand::Cd(dir.to_string()),
        ("crumb", n) => match n.parse() {
            Ok(index) => ShellCommand::Crumb(index),
            Err(_) => ShellCommand::Unknown(line.to_string()),
        },
        ("open", name) if !name.is_empty() => ShellCommand::Open(name.to_string()),
        ("cat", path) if !path.is_empty() => ShellCommand::Cat(path.to_string()),
        ("pwd", _) => ShellCommand::Pwd,
        ("help", _) | ("?", _) => ShellCommand::Help,
        ("quit", _) | ("exit", _) | ("q", _) => ShellCommand::Quit,
        _ => ShellCommand::Unknown(line.to_string()),
    };
    Some(command)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a, A: GithubApi + ?Sized> {
    api: &'a A,
    browser: RepoBrowser,
}

impl<'a, A: GithubApi + ?Sized> Shell<'a, A> {
    /// Mounts the browser from `location` and loads the first listing.
    pub async fn start(api: &'a A, repo: &str, site_base: Url, location: Location) -> Self {
        let (browser, pending) = RepoBrowser::mount(repo, site_base, location);
        let mut shell = Self { api, browser };
        shell.load(pending).await;
        shell
    }

    pub fn browser(&self) -> &RepoBrowser {
        &self.browser
    }

    async fn load(&mut self, pending: PendingListing) {
        let path = pending.path().clone();
        if !self.browser.load(self.api, pending).await {
            debug!(
                %path,
                still_loading = self.browser.is_loading(),
                "Listing arrived after a newer navigation"
            );
        }
        render::print_browser(&self.browser);
    }

    pub async fn handle(&mut self, command: ShellCommand) -> Flow {
        match command {
            ShellCommand::List => render::print_browser(&self.browser),
            ShellCommand::Cd(dir) => {
                let pending = self.browser.enter_directory(&dir);
                self.load(pending).await;
            }
            ShellCommand::Up => {
                if self.browser.path().is_root() {
                    println!("Already at the repository root");
                }
                let pending = self.browser.go_up_one_level();
                self.load(pending).await;
            }
            ShellCommand::Root => {
                let pending = self.browser.go_to_root();
                self.load(pending).await;
            }
            ShellCommand::Crumb(index) => {
                // Out of range keeps the current path but still re-fetches
                if index >= self.browser.path().depth() {
                    println!("No breadcrumb {}; staying here", index);
                }
                let pending = self.browser.go_to_segment(index);
                self.load(pending).await;
            }
            ShellCommand::Open(name) => {
                let entry = self.browser.entry(&name).cloned();
                match entry {
                    // Directories are entered, files get their own history entry
                    Some(entry) => match self.browser.activate(&entry) {
                        Activation::Entered(pending) => self.load(pending).await,
                        Activation::OpenFile { path, url } => {
                            println!("→ {}", url);
                            self.view(&path).await;
                        }
                    },
                    None => println!("No entry named '{}' here (try `ls`)", name),
                }
            }
            ShellCommand::Cat(path) => {
                let path = self.browser.path().join(&path);
                let url = self.browser.open_file(&path);
                println!("→ {}", url);
                self.view(&path).await;
            }
            ShellCommand::Pwd => println!("{}", self.browser.location().current()),
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Quit => return Flow::Quit,
            ShellCommand::Unknown(line) => println!("Unknown command: {} (try `help`)", line),
        }
        Flow::Continue
    }

    // Shows a file whose viewer link is already on the history, then leaves it
    async fn view(&mut self, file_path: &str) {
        let repo = self.browser.repo().to_string();
        let outcome = open_file(self.api, &repo, file_path).await;

        // Back to the directory entry before any redirect rewrites it
        self.browser.close_file();

        match outcome {
            Ok(ViewOutcome::Show(content)) => {
                let link = github_blob_url(self.api.username(), &repo, &content.path);
                render::print_file(&content, &link);
            }
            Ok(ViewOutcome::RedirectToListing(parent)) => {
                let pending = self.browser.navigate_to(parent);
                self.load(pending).await;
            }
            Ok(ViewOutcome::NothingToShow) => {
                println!("Nothing to display for {}", file_path);
            }
            Err(e) => println!("❌ Could not load {}: {}", file_path, e),
        }
    }
}

/// Runs the shell on stdin until `quit` or end of input.
pub async fn run<A: GithubApi + ?Sized>(
    api: &A,
    repo: &str,
    site_base: Url,
    location: Location,
) -> Result<()> {
    let mut shell = Shell::start(api, repo, site_base, location).await;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout
            .write_all(format!("{}:/{}> ", shell.browser().repo(), shell.browser().path()).as_bytes())
            .await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        if let Some(command) = parse_command(&line) {
            if shell.handle(command).await == Flow::Quit {
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fake::{entry, FakeGithub};
    use crate::github::EntryKind;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("ls"), Some(ShellCommand::List));
        assert_eq!(parse_command("cd src"), Some(ShellCommand::Cd("src".to_string())));
        assert_eq!(parse_command("cd my docs"), Some(ShellCommand::Cd("my docs".to_string())));
        assert_eq!(parse_command("cd .."), Some(ShellCommand::Up));
        assert_eq!(parse_command("cd"), Some(ShellCommand::Root));
        assert_eq!(parse_command("crumb 1"), Some(ShellCommand::Crumb(1)));
        assert_eq!(
            parse_command("crumb x"),
            Some(ShellCommand::Unknown("crumb x".to_string()))
        );
        assert_eq!(parse_command("open"), Some(ShellCommand::Unknown("open".to_string())));
        assert_eq!(parse_command("q"), Some(ShellCommand::Quit));
    }

    fn fake() -> FakeGithub {
        FakeGithub::new()
            .with_dir("site", "", vec![entry("", "src", EntryKind::Dir)])
            .with_dir(
                "site",
                "src",
                vec![
                    entry("src", "lib", EntryKind::Dir),
                    entry("src", "main.rs", EntryKind::File),
                ],
            )
            .with_dir("site", "src/lib", vec![])
            .with_text_file("site", "src/main.rs", "fn main() {}\n")
    }

    async fn start(api: &FakeGithub) -> Shell<'_, FakeGithub> {
        let site = Url::parse("https://portfolio.example/").unwrap();
        let location = Location::parse("https://portfolio.example/github/site").unwrap();
        Shell::start(api, "site", site, location).await
    }

    #[tokio::test]
    async fn test_navigation_commands() {
        let api = fake();
        let mut shell = start(&api).await;

        shell.handle(ShellCommand::Open("src".to_string())).await;
        shell.handle(ShellCommand::Cd("lib".to_string())).await;
        assert_eq!(shell.browser().path().to_string(), "src/lib");

        shell.handle(ShellCommand::Crumb(0)).await;
        assert_eq!(shell.browser().path().to_string(), "src");
        assert_eq!(shell.browser().entries().len(), 2);

        shell.handle(ShellCommand::Root).await;
        assert!(shell.browser().path().is_root());
    }

    #[tokio::test]
    async fn test_cat_of_directory_returns_to_parent() {
        let api = fake();
        let mut shell = start(&api).await;
        shell.handle(ShellCommand::Cd("src".to_string())).await;

        shell.handle(ShellCommand::Cat("lib".to_string())).await;
        assert_eq!(shell.browser().path().to_string(), "src");
        assert!(!shell.browser().is_loading());

        // The viewer entry is gone; the directory link was rewritten in place
        let location = shell.browser().location();
        assert_eq!(location.history_len(), 1);
        assert_eq!(location.current().path(), "/github/site");
    }

    #[tokio::test]
    async fn test_out_of_range_crumb_stays_put() {
        let api = fake();
        let mut shell = start(&api).await;
        shell.handle(ShellCommand::Cd("src".to_string())).await;

        shell.handle(ShellCommand::Crumb(5)).await;
        assert_eq!(shell.browser().path().to_string(), "src");
        assert_eq!(shell.browser().entries().len(), 2);
    }

    #[tokio::test]
    async fn test_open_file_keeps_directory() {
        let api = fake();
        let mut shell = start(&api).await;
        shell.handle(ShellCommand::Cd("src".to_string())).await;

        let listing_url = shell.browser().location().current().clone();

        let flow = shell.handle(ShellCommand::Open("main.rs".to_string())).await;
        assert_eq!(flow, Flow::Continue);
        assert_eq!(shell.browser().path().to_string(), "src");
        assert_eq!(shell.browser().location().current(), &listing_url);
        assert_eq!(shell.browser().location().history_len(), 1);
        assert_eq!(api.requested_paths().last().map(String::as_str), Some("src/main.rs"));
    }

    #[tokio::test]
    async fn test_quit() {
        let api = fake();
        let mut shell = start(&api).await;
        assert_eq!(shell.handle(ShellCommand::Quit).await, Flow::Quit);
    }
}
