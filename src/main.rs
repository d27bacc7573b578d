use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docnav::config::{self, DEFAULT_PLUGIN_ID, SiteConfig};
use docnav::navbar::{DocsVersionDropdown, HtmlNavbarRenderer, NavbarItemRenderer};
use docnav::prefs::{PreferredVersionStore, SqliteStore};
use docnav::site::SiteContext;

#[derive(Parser)]
#[command(name = "docnav")]
#[command(version, about = "Version switcher navigation for documentation sites")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the version dropdown navbar item as HTML
    Render {
        /// Path to the site configuration JSON
        #[arg(long)]
        config: PathBuf,
        /// Docs plugin instance to render
        #[arg(long, default_value = DEFAULT_PLUGIN_ID)]
        plugin_id: String,
        /// Identifier of the document currently being viewed
        #[arg(long)]
        active_doc: Option<String>,
        /// Render the compact mobile layout
        #[arg(long)]
        mobile: bool,
        /// Preferences database path (defaults to the data directory)
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Show, set, or clear the preferred version of a plugin instance
    Prefer {
        /// Docs plugin instance
        #[arg(long, default_value = DEFAULT_PLUGIN_ID)]
        plugin_id: String,
        /// Version name to store; omit to print the current preference
        version_name: Option<String>,
        /// Forget the stored preference
        #[arg(long, conflicts_with = "version_name")]
        clear: bool,
        /// Preferences database path (defaults to the data directory)
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // HTML goes to stdout; keep logs on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render {
            config,
            plugin_id,
            active_doc,
            mobile,
            db,
        } => render(config, plugin_id, active_doc, mobile, db),
        Command::Prefer {
            plugin_id,
            version_name,
            clear,
            db,
        } => prefer(plugin_id, version_name, clear, db),
    }
}

fn render(
    config_path: PathBuf,
    plugin_id: String,
    active_doc: Option<String>,
    mobile: bool,
    db: Option<PathBuf>,
) -> anyhow::Result<()> {
    let site_config = SiteConfig::load(&config_path)
        .with_context(|| format!("loading site config {}", config_path.display()))?;
    let mut context = SiteContext::from_config(&site_config)?;
    if let Some(doc_id) = &active_doc {
        context.activate_doc(&plugin_id, doc_id)?;
    }

    let store = open_store(db)?;
    let dropdown = DocsVersionDropdown::new(mobile, plugin_id.as_str());
    let item = dropdown.compose(&context, &store)?;

    println!("{}", HtmlNavbarRenderer::new().render(&item));
    Ok(())
}

fn prefer(
    plugin_id: String,
    version_name: Option<String>,
    clear: bool,
    db: Option<PathBuf>,
) -> anyhow::Result<()> {
    let store = open_store(db)?;

    if clear {
        store.clear(&plugin_id)?;
        return Ok(());
    }

    match version_name {
        Some(name) => store.set_version_name(&plugin_id, &name)?,
        None => match store.version_name(&plugin_id)? {
            Some(name) => println!("{name}"),
            None => println!("(no preferred version stored)"),
        },
    }
    Ok(())
}

fn open_store(db: Option<PathBuf>) -> anyhow::Result<SqliteStore> {
    let db_path = db.unwrap_or_else(config::db_path);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating data directory {}", parent.display()))?;
    }
    Ok(SqliteStore::new(&db_path)?)
}
