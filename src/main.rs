//! PYRE Configurator - Main entry point
//!
//! Without a subcommand this launches the interactive wizard TUI. The
//! `quote` and `catalog` subcommands are one-shot: they run the same engine
//! against flag-provided selections and print, with no session or terminal
//! takeover involved.

use anyhow::Result;
use pyretui::app::App;
use pyretui::catalog::{BaseOption, Catalog, ColorOption, ModuleOption};
use pyretui::cli::{Cli, Commands};
use pyretui::pricing::{self, LineItemKind, Quote};
use pyretui::scene::{self, ScenePlan};
use pyretui::session::{Configuration, ConfiguratorSession};
use pyretui::ui::format_dollars;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use std::io::stdout;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Initialize tracing with env-filter support (RUST_LOG overrides)
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Quote {
            color,
            base,
            modules,
            accessories,
            tools,
            json,
        }) => run_quote(color, base, modules, accessories, tools, json),
        Some(Commands::Catalog { json }) => run_catalog(json),
        None => run_tui(),
    }
}

/// Run the interactive wizard TUI
fn run_tui() -> Result<()> {
    info!("launching configurator TUI");

    enable_raw_mode()?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = app.run(&mut terminal);

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}

/// Full output of a `quote --json` run
#[derive(Serialize)]
struct QuoteOutput<'a> {
    config: &'a Configuration,
    quote: Quote,
    scene: ScenePlan,
}

/// Price a flag-described build and print it.
///
/// Selections go through the same validated session operations the TUI
/// uses, so a typo in a flag is rejected up front instead of silently
/// pricing as zero.
fn run_quote(
    color: Option<String>,
    base: Option<String>,
    modules: Vec<String>,
    accessories: Vec<String>,
    tools: Vec<String>,
    json: bool,
) -> Result<()> {
    let catalog = Catalog::standard();
    let mut session = ConfiguratorSession::new();

    if let Some(id) = color {
        session.select_color(&catalog, &id)?;
    }
    if let Some(id) = base {
        session.select_base(&catalog, &id)?;
    }
    for id in &modules {
        session.toggle_module(&catalog, id)?;
    }
    for id in &accessories {
        session.toggle_accessory(&catalog, id)?;
    }
    for id in &tools {
        session.toggle_tool(&catalog, id)?;
    }

    let config = session.config();
    let quote = pricing::build_quote(&catalog, config);

    if json {
        let output = QuoteOutput {
            config,
            scene: scene::derive_scene(&catalog, config),
            quote,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for item in &quote.items {
        let price = if item.kind == LineItemKind::BaseUnit {
            format!("${}", format_dollars(item.price))
        } else if item.price == 0 {
            "Included".to_string()
        } else {
            format!("+${}", format_dollars(item.price))
        };
        println!("{:<40}{:>10}", item.label, price);
    }
    println!("{:<40}{:>10}", "Total", format!("${}", format_dollars(quote.total)));
    Ok(())
}

/// Serializable view of the full catalog
#[derive(Serialize)]
struct CatalogOutput<'a> {
    base_price: u64,
    colors: &'a [ColorOption],
    bases: &'a [BaseOption],
    modules: &'a [ModuleOption],
    accessories: &'a [ModuleOption],
    tools: &'a [ModuleOption],
}

/// Print every selectable option with id, name, and price.
fn run_catalog(json: bool) -> Result<()> {
    let catalog = Catalog::standard();

    if json {
        let output = CatalogOutput {
            base_price: catalog.base_price(),
            colors: catalog.colors(),
            bases: catalog.bases(),
            modules: catalog.cooking_modules(),
            accessories: catalog.accessories(),
            tools: catalog.tools(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Base unit: ${}", format_dollars(catalog.base_price()));

    println!("\nExterior finishes (--color):");
    for c in catalog.colors() {
        println!("  {:<16}{:<28}{:>8}", c.id, c.name, price_tag(c.price));
    }
    println!("\nBases (--base):");
    for b in catalog.bases() {
        println!("  {:<16}{:<28}{:>8}", b.id, b.name, price_tag(b.price));
    }
    println!("\nCooking modules (--module):");
    for m in catalog.cooking_modules() {
        println!("  {:<16}{:<28}{:>8}", m.id, m.name, price_tag(m.price));
    }
    println!("\nAccessories (--accessory):");
    for a in catalog.accessories() {
        println!("  {:<16}{:<28}{:>8}", a.id, a.name, price_tag(a.price));
    }
    println!("\nTools (--tool):");
    for t in catalog.tools() {
        println!("  {:<16}{:<28}{:>8}", t.id, t.name, price_tag(t.price));
    }
    Ok(())
}

fn price_tag(price: u64) -> String {
    if price == 0 {
        "$0".to_string()
    } else {
        format!("+${}", format_dollars(price))
    }
}
