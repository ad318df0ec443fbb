// ABOUTME: Command line arguments for the demo renderer.
// ABOUTME: Parses `option=value` overrides into typed settings.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use colview_core::Setting;

#[derive(Parser, Debug)]
#[command(name = "colview")]
#[command(about = "Render the column browser layout into the terminal")]
#[command(version)]
#[command(after_help = "Examples:
  colview --width 100 --height 30
  colview --set perspective=dual
  colview --set draw_borders=true --set column_ratios=1,2,5
  colview --bookmarks --json")]
pub struct Cli {
    /// Config file to read instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Viewport width in cells
    #[arg(long, default_value_t = 80)]
    pub width: u16,

    /// Viewport height in cells
    #[arg(long, default_value_t = 24)]
    pub height: u16,

    /// Change an option after startup (repeatable), e.g. perspective=long
    #[arg(short, long = "set", value_name = "OPTION=VALUE")]
    pub set: Vec<String>,

    /// Do not create a preview pane
    #[arg(long)]
    pub no_preview: bool,

    /// Pretend the rightmost column has nothing to preview
    #[arg(long)]
    pub empty_preview: bool,

    /// Open the preview pane over the last two columns
    #[arg(long)]
    pub pager: bool,

    /// Show the bookmark overlay instead of the columns
    #[arg(long)]
    pub bookmarks: bool,

    /// Print panel geometry as JSON instead of the rendered grid
    #[arg(long)]
    pub json: bool,
}

/// Parse `option=value` into a setting
pub fn parse_setting(assignment: &str) -> Result<Setting> {
    let (name, value) = assignment
        .split_once('=')
        .ok_or_else(|| anyhow!("expected OPTION=VALUE, got {assignment:?}"))?;
    let value = value.trim();

    let setting = match name.trim() {
        "perspective" => Setting::Perspective(value.to_string()),
        "column_ratios" => Setting::ColumnRatios(parse_ratios(value)?),
        "preview_directories" => Setting::PreviewDirectories(parse_bool(value)?),
        "preview_files" => Setting::PreviewFiles(parse_bool(value)?),
        "draw_borders" => Setting::DrawBorders(parse_bool(value)?),
        "draw_bookmark_borders" => Setting::DrawBookmarkBorders(parse_bool(value)?),
        "show_hidden_bookmarks" => Setting::ShowHiddenBookmarks(parse_bool(value)?),
        "collapse_preview" => Setting::CollapsePreview(parse_bool(value)?),
        other => bail!("unknown option {other:?}"),
    };
    Ok(setting)
}

fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => bail!("expected a boolean, got {value:?}"),
    }
}

fn parse_ratios(value: &str) -> Result<Vec<f64>> {
    if value.is_empty() {
        return Ok(Vec::new());
    }
    value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("bad ratio {part:?}"))
        })
        .collect()
}
