// src/render.rs
// =============================================================================
// Prints explorer data to stdout, either as text or as JSON.
//
// Diagnostics never go through here; they are logged with tracing to
// stderr so that `--json` output stays machine-readable.
// =============================================================================

use anyhow::Result;
use serde::Serialize;

use crate::browser::{Breadcrumb, Listing, RepoBrowser};
use crate::github::{DirectoryEntry, EntryKind, RepoSummary, UserProfile};
use crate::languages::{LanguageShare, LanguageTally};
use crate::viewer::FileContent;

// Width of the longest language bar
const BAR_WIDTH: usize = 30;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_profile(profile: &UserProfile) {
    let display_name = profile.name.as_deref().unwrap_or(&profile.login);
    println!("{} (@{})", display_name, profile.login);
    if let Some(bio) = profile.bio.as_deref().filter(|bio| !bio.is_empty()) {
        println!("  {}", bio);
    }
    if let Some(location) = profile.location.as_deref().filter(|l| !l.is_empty()) {
        println!("  📍 {}", location);
    }
    if let Some(blog) = profile.blog.as_deref().filter(|b| !b.is_empty()) {
        println!("  🔗 {}", blog);
    }
    println!(
        "  👥 {} followers · {} following · 📦 {} public repos",
        profile.followers, profile.following, profile.public_repos
    );
    println!("  {}", profile.html_url);
}

pub fn print_repos(repos: &[RepoSummary]) {
    if repos.is_empty() {
        println!("No repositories to show");
        return;
    }

    println!("{:<32} {:>6} {:>6} {:<14} {}", "NAME", "STARS", "FORKS", "LANGUAGE", "DESCRIPTION");
    println!("{}", "=".repeat(100));
    for repo in repos {
        println!(
            "{:<32} {:>6} {:>6} {:<14} {}",
            truncate(&repo.name, 32),
            repo.stargazers_count,
            repo.forks_count,
            repo.language.as_deref().unwrap_or("-"),
            truncate(repo.description.as_deref().unwrap_or(""), 40),
        );
    }
    println!();
    println!("📊 {} repositor{}", repos.len(), if repos.len() == 1 { "y" } else { "ies" });
}

/// Language records to display: ranked and cut to `top` if asked, else as collected.
pub fn language_rows(tally: &LanguageTally, top: Option<usize>) -> Vec<LanguageShare> {
    match top {
        Some(n) => tally.ranked().into_iter().take(n).collect(),
        None => tally.shares().to_vec(),
    }
}

pub fn print_languages(tally: &LanguageTally, rows: &[LanguageShare]) {
    if tally.is_empty() {
        println!("No language data");
        return;
    }

    let total = tally.total().max(1);
    let largest = rows.iter().map(|row| row.value).max().unwrap_or(1).max(1);

    for row in rows {
        let percent = row.value as f64 * 100.0 / total as f64;
        let bar = (row.value as f64 / largest as f64 * BAR_WIDTH as f64).round() as usize;
        println!(
            "{:<16} {:>12} bytes {:>6.2}%  {}",
            truncate(&row.name, 16),
            row.value,
            percent,
            "█".repeat(bar.max(1))
        );
    }
    println!();
    println!(
        "📊 {} language{} · {} bytes",
        tally.len(),
        if tally.len() == 1 { "" } else { "s" },
        tally.total()
    );
}

pub fn print_breadcrumbs(repo: &str, crumbs: &[Breadcrumb]) {
    let mut line = format!("📁 {}", repo);
    for crumb in crumbs {
        line.push_str(&format!(" / [{}] {}", crumb.index, crumb.label));
    }
    println!("{}", line);
}

pub fn print_listing(entries: &[DirectoryEntry]) {
    if entries.is_empty() {
        println!("  (empty directory)");
        return;
    }
    for entry in entries {
        match entry.kind {
            EntryKind::Dir => println!("  📂 {}/", entry.name),
            EntryKind::File => println!("  📄 {}", entry.name),
        }
    }
}

pub fn print_browser(browser: &RepoBrowser) {
    print_breadcrumbs(browser.repo(), &browser.breadcrumbs());
    match browser.listing() {
        Listing::Loading => println!("  loading…"),
        Listing::Ready(entries) => print_listing(entries),
    }
}

pub fn print_file(content: &FileContent, github_url: &str) {
    println!("── {} ({}) ──", content.path, content.language);
    println!("{}", number_lines(&content.text));
    println!("── {} ──", github_url);
}

/// Prefixes each line with a right-aligned line number.
pub fn number_lines(text: &str) -> String {
    let count = text.lines().count().max(1);
    let width = count.to_string().len();
    text.lines()
        .enumerate()
        .map(|(i, line)| format!("{:>width$} │ {}", i + 1, line, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}
