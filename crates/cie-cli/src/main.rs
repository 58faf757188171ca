// File: crates/cie-cli/src/main.rs
// Summary: Reads `x y [label]` lines, marks them on the CIE chart backdrop and writes a PNG.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cie_core::{
    load_background, mark_points, ChartConfig, MarkError, MarkerStyle, DOWNLOAD_FILE_NAME, PNG_MIME, SAMPLE_INPUT,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Mark CIE 1931 xy chromaticity points on a chart image", long_about = None)]
struct Cli {
    /// Coordinate file, one `x y [label]` per line. Reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Chart backdrop image.
    #[arg(long, default_value = "assets/background.jpg")]
    background: PathBuf,
    #[arg(long, default_value = DOWNLOAD_FILE_NAME)]
    output: PathBuf,
    /// JSON file overriding the chart's pixel anchors and domain bounds.
    #[arg(long)]
    config: Option<PathBuf>,
    /// TrueType font for labels (falls back to system fonts).
    #[arg(long)]
    font: Option<PathBuf>,
    /// Draw cross-hairs only.
    #[arg(long)]
    no_labels: bool,
    /// Print example input and exit.
    #[arg(long)]
    sample: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.sample {
        println!("{SAMPLE_INPUT}");
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => ChartConfig::from_json_file(path)
            .with_context(|| format!("loading chart config {}", path.display()))?,
        None => ChartConfig::default(),
    };
    let style = MarkerStyle { font_path: cli.font.clone(), draw_labels: !cli.no_labels, ..Default::default() };

    let text = read_input(cli.input.as_deref())?;
    if text.trim().is_empty() {
        anyhow::bail!(MarkError::EmptyInput);
    }

    let background = load_background(&cli.background)?;
    let out = mark_points(&text, &background, &config, &style)?;
    for warning in &out.warnings {
        eprintln!("warning: {warning}");
    }

    write_png(&cli.output, &out.png)?;
    println!(
        "Wrote {} ({} marker(s), {} skipped, {PNG_MIME})",
        cli.output.display(),
        out.records.len(),
        out.warnings.len()
    );
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn write_png(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
