use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use tinct_engine::generate::Generator;
use tinct_engine::gradient::PRESETS;
use tinct_engine::logging::{init_logging, LoggingConfig};
use tinct_ui::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "tinct-studio", about = "Generate, inspect and export color gradients")]
struct Cli {
    /// Color style, e.g. Warm, Pastel, Triadic.
    #[arg(long)]
    style: Option<Style>,

    /// Number of colors, 2 to 8.
    #[arg(long)]
    count: Option<usize>,

    /// Linear or Radial.
    #[arg(long)]
    kind: Option<GradientKind>,

    /// Linear angle in degrees.
    #[arg(long, allow_hyphen_values = true)]
    angle: Option<i32>,

    /// Load a named preset instead of generating.
    #[arg(long)]
    preset: Option<String>,

    /// Seed for reproducible generation.
    #[arg(long)]
    seed: Option<u64>,

    /// PNG, JPEG, SVG or CSS.
    #[arg(long, default_value = "PNG")]
    format: ExportFormat,

    /// Export size as WIDTHxHEIGHT [default: 800x400].
    #[arg(long, value_parser = parse_size)]
    size: Option<(String, String)>,

    /// Font for the HEX labels of palette swatches.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Write the four base palettes of this color as swatch strips into
    /// the --out directory.
    #[arg(long)]
    palettes: Option<String>,

    /// Export to this path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Copy the CSS declaration to the clipboard.
    #[arg(long)]
    copy: bool,

    /// List styles and presets, then exit.
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn editor_config(&self) -> EditorConfig {
        let mut config = EditorConfig::default();
        if let Some(style) = self.style {
            config.style = style;
        }
        if let Some(count) = self.count {
            config.color_count = count;
        }
        if let Some(kind) = self.kind {
            config.kind = kind;
        }
        if let Some(angle) = self.angle {
            config.angle_degrees = angle;
        }
        config
    }
}

/// Splits `WxH`; the halves are validated later by the export itself.
fn parse_size(s: &str) -> Result<(String, String), String> {
    s.split_once(['x', 'X'])
        .map(|(w, h)| (w.to_string(), h.to_string()))
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))
}

/// Prints a status line; warnings become errors.
fn report(response: Response) -> anyhow::Result<()> {
    match response.status {
        Some(StatusMessage { level: StatusLevel::Warning, text }) => Err(anyhow!(text)),
        Some(status) => {
            println!("  {status}");
            Ok(())
        }
        None => Ok(()),
    }
}

fn list() {
    println!("Styles:");
    for style in Style::ALL {
        println!("  {style}");
    }
    println!();
    println!("Presets:");
    for preset in PRESETS {
        let colors: Vec<String> = preset.colors.iter().map(|c| c.to_hex()).collect();
        println!("  {:<14} {}", preset.name, colors.join(" "));
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig { timestamps: false, ..LoggingConfig::default() });

    let cli = Cli::parse();
    if cli.list {
        list();
        return Ok(());
    }

    let generator = cli.seed.map(Generator::seeded).unwrap_or_else(Generator::from_os_rng);
    let mut editor = GradientEditor::with_generator(cli.editor_config(), generator, SystemClipboard)
        .context("could not create the gradient")?;
    log::info!("tinct-studio: {} style, {} colors", editor.style(), editor.color_count());

    if let Some(name) = &cli.preset {
        report(editor.load_preset(name))?;
    }

    let spec = editor.spec();
    println!();
    println!("  {} gradient, {} stops", spec.kind(), spec.len());
    for (label, stop) in editor.hex_labels().iter().zip(spec.stops()) {
        println!("    {label}  {:>5.1}%", stop.position * 100.0);
    }
    println!();
    println!("  {}", editor.css());
    println!();

    if let Some(path) = &cli.font {
        let bytes = std::fs::read(path).with_context(|| format!("could not read {}", path.display()))?;
        report(editor.load_swatch_font(&bytes))?;
    }

    if let Some(base) = &cli.palettes {
        let dir = cli.out.as_deref().context("--palettes needs --out DIR")?;
        std::fs::create_dir_all(dir).with_context(|| format!("could not create {}", dir.display()))?;
        let palettes = editor
            .base_palettes(base)
            .ok_or_else(|| anyhow!("invalid base color {base:?}"))?;
        for (name, colors) in palettes.named() {
            report(editor.export_palette(name, colors, dir))?;
        }
        return Ok(());
    }

    if let Some(path) = &cli.out {
        let (width, height) = cli.size.clone().unwrap_or_else(|| editor.export_fields());
        report(editor.export(cli.format, &width, &height, path))?;
    }
    if cli.copy {
        report(editor.copy_css())?;
    }
    Ok(())
}
