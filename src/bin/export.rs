//! Static export tool for dashboard-site.
//!
//! Renders the site pages to plain HTML files so the marketing site can be
//! hosted without running the server.
//!
//! # Usage
//!
//! ```bash
//! # Export every page to ./public
//! cargo run --bin export
//!
//! # Export only the dashboards page with fixed chart data
//! cargo run --bin export -- --page dashboards --seed 42 --out-dir dist
//!
//! # Overwrite a non-empty output directory without asking
//! cargo run --bin export -- -y
//! ```
//!
//! # Output Layout
//!
//! ```text
//! public/
//! ├── index.html
//! ├── dashboards/index.html
//! ├── about/index.html
//! └── static/            (copied from STATIC_DIR when it exists)
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (`SITE_NAME`, `PLOTLY_JS_URL`, `CHART_HEIGHT`,
//! `CHART_SEED`, `CHART_ID_PREFIX`, `STATIC_DIR`). `--seed` takes precedence over `CHART_SEED`.

use dashboard_site::application::services::{ChartSettings, DashboardService};
use dashboard_site::config::{self, Config};
use dashboard_site::infrastructure::plotly::PlotlyRenderer;
use dashboard_site::state::SiteSettings;
use dashboard_site::web::handlers::{AboutTemplate, DashboardsTemplate, HomeTemplate};

use anyhow::{Context, Result};
use askama::Template;
use clap::{Parser, ValueEnum};
use colored::*;
use dialoguer::Confirm;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Render the site pages to static HTML.
#[derive(Parser)]
#[command(name = "export")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory
    #[arg(short, long, default_value = "public")]
    out_dir: PathBuf,

    /// Page to export
    #[arg(short, long, value_enum, default_value_t = PageArg::All)]
    page: PageArg,

    /// Seed for the chart data (overrides CHART_SEED)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PageArg {
    Home,
    Dashboards,
    About,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Dashboards,
    About,
}

impl Page {
    /// Output file, relative to the output directory.
    fn file(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Dashboards => "dashboards/index.html",
            Page::About => "about/index.html",
        }
    }
}

impl PageArg {
    fn pages(self) -> Vec<Page> {
        match self {
            PageArg::Home => vec![Page::Home],
            PageArg::Dashboards => vec![Page::Dashboards],
            PageArg::About => vec![Page::About],
            PageArg::All => vec![Page::Home, Page::Dashboards, Page::About],
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;

    println!("{}", "📦 Static export".bright_blue().bold());
    println!();
    println!("  Output: {}", cli.out_dir.display().to_string().cyan());
    println!("  Site:   {}", config.site_name.cyan());
    match cli.seed.or(config.chart_seed) {
        Some(seed) => println!("  Seed:   {}", seed.to_string().cyan()),
        None => println!("  Seed:   {}", "random".bright_black()),
    }
    println!();

    if !cli.yes && !is_empty_dir(&cli.out_dir)? {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "{} is not empty. Overwrite existing files?",
                cli.out_dir.display()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let written = export(&config, &cli)?;

    println!();
    println!(
        "{} {} file(s) written",
        "✅ Export complete:".green().bold(),
        written.to_string().bright_white().bold()
    );

    Ok(())
}

/// Renders the selected pages and copies static assets.
///
/// Returns the number of files written.
fn export(config: &Config, cli: &Cli) -> Result<usize> {
    let site = SiteSettings::from(config);
    let settings = ChartSettings {
        seed: cli.seed.or(config.chart_seed),
        ..config.chart_settings()
    };
    let service = DashboardService::new(Arc::new(config.renderer()?), settings);

    let mut written = 0;

    for page in cli.page.pages() {
        let html = render_page(page, &site, &service)?;
        let path = cli.out_dir.join(page.file());
        write_file(&path, &html)?;

        println!("  {} {}", "✓".green(), path.display());
        written += 1;
    }

    let static_dir = Path::new(&config.static_dir);
    if static_dir.is_dir() {
        let copied = copy_dir(static_dir, &cli.out_dir.join("static"))?;
        println!(
            "  {} {} ({} file(s))",
            "✓".green(),
            cli.out_dir.join("static").display(),
            copied
        );
        written += copied;
    } else {
        println!(
            "  {} static directory {} not found, skipping assets",
            "⚠️ ".yellow(),
            static_dir.display()
        );
    }

    Ok(written)
}

fn render_page(
    page: Page,
    site: &SiteSettings,
    service: &DashboardService<PlotlyRenderer>,
) -> Result<String> {
    let html = match page {
        Page::Home => HomeTemplate::new(site).render()?,
        Page::Dashboards => {
            let context = service
                .render_dashboard()
                .map_err(|e| anyhow::anyhow!("Failed to render dashboards: {}", e))?;
            DashboardsTemplate::new(site, context).render()?
        }
        Page::About => AboutTemplate::new(site).render()?,
    };

    Ok(html)
}

fn is_empty_dir(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(true);
    }

    let mut entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;
    Ok(entries.next().is_none())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

/// Recursively copies `from` into `to`, returning the number of files copied.
fn copy_dir(from: &Path, to: &Path) -> Result<usize> {
    fs::create_dir_all(to).with_context(|| format!("Failed to create {}", to.display()))?;

    let mut copied = 0;
    for entry in fs::read_dir(from).with_context(|| format!("Failed to read {}", from.display()))? {
        let entry = entry?;
        let target = to.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copied += copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
            copied += 1;
        }
    }

    Ok(copied)
}
