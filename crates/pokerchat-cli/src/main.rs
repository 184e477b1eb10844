use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;

use pokerchat_cli::config::CliConfig;
use pokerchat_cli::logging::init_logging;
use pokerchat_cli::row::parse_row;
use pokerchat_core::{CardGridRenderer, IconTables, Layout};
use pokerchat_ui::{IconManifest, IconStyle};

/// Preview the two-row card strips posted into chat.
#[derive(Debug, Parser)]
#[command(
    name = "pokerchat",
    author,
    version,
    about = "Render card rows as two-line icon strips"
)]
struct Cli {
    /// Path to a YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Icon manifest (JSON); defaults to $POKERCHAT_ICON_MANIFEST or built-in glyphs.
    #[arg(short, long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Icon display style: plain, mention or mention:<name>.
    #[arg(long, value_name = "STYLE")]
    style: Option<IconStyle>,

    /// Layout preset: flat, hole, board or showdown.
    #[arg(short, long, value_name = "PRESET")]
    layout: Option<String>,

    /// Insert the gap before this padded position.
    #[arg(long, value_name = "INDEX")]
    split: Option<usize>,

    /// Pad the row with face-down cards up to this length.
    #[arg(long, value_name = "COUNT")]
    min_slots: Option<usize>,

    /// Exit after loading the configuration and icon manifest.
    #[arg(long)]
    validate_only: bool,

    /// Cards such as `As`, `10h`, `??` (face down); `|` marks the split.
    #[arg(value_name = "CARD")]
    cards: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => CliConfig::from_path(path)?,
        None => CliConfig::default(),
    };

    if let Some(manifest) = cli.manifest {
        config.icons.manifest = Some(manifest);
    }

    if let Some(style) = cli.style {
        config.icons.style = style;
    }

    if let Some(preset) = cli.layout {
        config.layout.preset = Some(preset);
        config.layout.split = None;
        config.layout.min_slots = None;
    }

    config.validate()?;

    let _logging_guard = init_logging(&config.logging);

    let loaded;
    let tables: &IconTables = match &config.icons.manifest {
        Some(path) => {
            loaded = IconManifest::load_tables(path)?;
            tracing::info!(target: "pokerchat_cli", path = %path.display(), "icon manifest loaded");
            &loaded
        }
        None => IconManifest::current().context("loading process icon manifest")?,
    };

    if cli.validate_only {
        println!("Configuration and icon manifest are valid.");
        return Ok(());
    }

    let row = parse_row(&cli.cards).context("parsing cards")?;
    let mut layout: Layout = config.layout.resolve();
    if let Some(split) = row.split {
        layout = layout.with_split(split);
    }
    if let Some(split) = cli.split {
        layout = layout.with_split(split);
    }
    if let Some(min_slots) = cli.min_slots {
        layout = layout.with_min_slots(min_slots);
    }
    if row.slots.is_empty() && layout.min_slots == 0 {
        bail!("nothing to render: pass cards or a layout with padding");
    }

    tracing::debug!(
        target: "pokerchat_cli",
        slots = row.slots.len(),
        split = ?layout.split,
        min_slots = layout.min_slots,
        style = %config.icons.style,
        "rendering card row"
    );

    let renderer = CardGridRenderer::new(tables, config.icons.style.clone());
    println!("{}", renderer.render_layout(&row.slots, layout));

    Ok(())
}
