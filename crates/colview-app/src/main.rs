// ABOUTME: Demo binary that lays out placeholder panels on an in-memory grid.
// ABOUTME: Prints the rendered grid, or the panel geometry as JSON.

mod cli;
mod panels;

use anyhow::{Context, Result};
use clap::Parser;
use colview_core::{Config, Rect};
use colview_grid::{BufferSurface, Surface};
use colview_layout::View;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::cli::{parse_setting, Cli};
use crate::panels::DemoFactory;

#[derive(Debug, Serialize)]
struct ColumnDump {
    level: i32,
    main: bool,
    visible: bool,
    rect: Rect,
}

#[derive(Debug, Serialize)]
struct LayoutDump {
    perspective: String,
    collapsed: bool,
    columns: Vec<ColumnDump>,
    pager: Option<Rect>,
    cursor: Option<(u16, u16)>,
}

impl LayoutDump {
    fn of(view: &View<BufferSurface>) -> Self {
        Self {
            perspective: view.perspective().to_string(),
            collapsed: view.is_collapsed(),
            columns: view
                .columns()
                .iter()
                .map(|column| ColumnDump {
                    level: column.level(),
                    main: column.is_main_column(),
                    visible: column.is_visible(),
                    rect: column.geometry(),
                })
                .collect(),
            pager: view
                .pager()
                .filter(|pager| pager.is_visible())
                .map(|pager| pager.geometry()),
            cursor: view.surface().cursor(),
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load_or_default()),
    }
}

fn build_view(cli: &Cli, config: Config) -> Result<View<BufferSurface>> {
    let grid = BufferSurface::new(cli.height, cli.width);
    let ratios = config.settings.column_ratios.clone();
    let mut view = View::new(
        grid,
        &ratios,
        !cli.no_preview,
        config.settings,
        Box::new(DemoFactory::new(cli.empty_preview)),
    )
    .context("Failed to create the view")?;
    view.set_bookmarks(config.bookmarks);

    for assignment in &cli.set {
        let setting = parse_setting(assignment)?;
        tracing::info!("Setting {}", assignment);
        view.set_option(setting)
            .with_context(|| format!("Failed to apply {assignment}"))?;
    }

    if cli.pager {
        view.open_pager();
    }
    if cli.bookmarks {
        view.show_bookmarks();
    }
    Ok(view)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing::info!("Loaded config: perspective={}", config.settings.perspective);

    let mut view = build_view(&cli, config)?;
    view.draw();
    view.finalize();

    if cli.json {
        let dump = LayoutDump::of(&view);
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        let (height, _) = view.surface().size();
        for row in 0..height {
            println!("{}", view.surface().row_text(row));
        }
    }

    view.destroy();
    Ok(())
}
