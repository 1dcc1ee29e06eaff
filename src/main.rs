// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command line front end: load an image, position the crop square and
// export it.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use kadr::AppConfig;
use kadr::app::ImageSource;
use kadr::domain::crop::Coordinate;
use kadr::ui::CropApp;
use kadr::ui::app::{format_for, output_path};

/// Crop a square out of an image.
///
/// The crop square starts centered at three quarters of the shorter image
/// side. Values given on the command line behave like typing them into the
/// coordinate form; drags behave like pointer drags on the editor.
#[derive(Parser, Debug)]
#[command(name = "kadr", version, about = "Interactive square-crop editor")]
struct Args {
    /// Image to crop (PNG, JPEG, GIF, WEBP, BMP).
    input: PathBuf,

    /// Left edge of the crop square.
    #[arg(short, long)]
    x: Option<f64>,

    /// Top edge of the crop square.
    #[arg(short, long)]
    y: Option<f64>,

    /// Side length of the crop square.
    #[arg(short, long)]
    side: Option<f64>,

    /// Pointer drag in surface coordinates, as FROM_X,FROM_Y:TO_X,TO_Y.
    /// May be repeated.
    #[arg(long, value_name = "FX,FY:TX,TY", value_parser = parse_drag)]
    drag: Vec<(Coordinate, Coordinate)>,

    /// Save the editor preview (mask, border and label) to this file.
    #[arg(long, value_name = "FILE")]
    preview: Option<PathBuf>,

    /// Output file. Defaults to "<stem>-crop.png" in the pictures directory.
    /// The format follows the extension.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the crop as a data URL instead of writing a file.
    #[arg(long)]
    data_url: bool,

    /// Border dot diameter.
    #[arg(long)]
    line_weight: Option<f64>,

    /// Space between border dots.
    #[arg(long)]
    gap: Option<f64>,

    /// Do not draw the size label.
    #[arg(long)]
    no_label: bool,

    /// How long to wait for the image to decode.
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_point(text: &str) -> Result<Coordinate, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{text}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok(Coordinate::new(x, y))
}

fn parse_drag(text: &str) -> Result<(Coordinate, Coordinate), String> {
    let (from, to) = text
        .split_once(':')
        .ok_or_else(|| format!("expected FX,FY:TX,TY, got '{text}'"))?;
    Ok((parse_point(from)?, parse_point(to)?))
}

impl Args {
    fn config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        if let Some(ms) = self.timeout_ms {
            config.load_timeout = Duration::from_millis(ms);
        }
        if let Some(line_weight) = self.line_weight {
            config.cropper.line_weight = line_weight;
        }
        if let Some(gap) = self.gap {
            config.cropper.gap = gap;
        }
        if self.no_label {
            config.cropper.show_label = false;
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = args.config();
    let mut app = CropApp::new(ImageSource::Path(args.input.clone()), config)?;
    app.wait_ready()
        .await
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    if args.x.is_some() || args.y.is_some() || args.side.is_some() {
        app.edit(args.x, args.y, args.side)?;
    }
    for (from, to) in &args.drag {
        app.drag(*from, *to)?;
    }
    app.pump()?;

    if let Some(form) = app.form() {
        let square = form.values();
        log::info!(
            "Crop: x={} y={} side={}",
            square.x,
            square.y,
            square.side
        );
        if let Some(message) = form.error_message() {
            anyhow::bail!("{message}: {square:?}");
        }
    }

    if let Some(path) = &args.preview {
        app.preview()?
            .save(path)
            .with_context(|| format!("failed to write preview {}", path.display()))?;
        log::info!("Wrote preview to {}", path.display());
    }

    if args.data_url {
        let exported = app.submit(image::ImageFormat::Png)?;
        println!("{}", exported.to_data_url());
    } else {
        let path = output_path(&args.input, args.output.as_deref(), &app.config);
        let exported = app.submit(format_for(&path))?;
        std::fs::write(&path, &exported.bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!(
            "{} ({}x{})",
            path.display(),
            exported.width,
            exported.height
        );
    }

    app.close();
    Ok(())
}
