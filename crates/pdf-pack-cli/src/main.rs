use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;
use pdf_pack::constants::pt_to_mm;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdfpack",
    about = "Pack images into PDF using efficient packing algorithm",
    version
)]
struct Cli {
    /// Input folder containing images
    #[arg(short, long, default_value = "input_images")]
    input: PathBuf,

    /// Output PDF file path
    #[arg(short, long, default_value = "output.pdf")]
    output: PathBuf,

    /// JPEG quality for compression (1-100)
    #[arg(short, long, default_value = "85", conflicts_with = "config")]
    quality: u8,

    /// Output paper size
    #[arg(long, default_value = "a4", value_enum, conflicts_with = "config")]
    paper: PaperArg,

    /// Output orientation
    #[arg(long, default_value = "portrait", value_enum, conflicts_with = "config")]
    orientation: OrientationArg,

    /// Page margin in mm (uniform on all sides)
    #[arg(long, default_value = "10.0", conflicts_with = "config")]
    margin: f32,

    /// Gap between images in mm
    #[arg(long, default_value = "5.0", conflicts_with = "config")]
    spacing: f32,

    /// Keep transparent/white borders instead of cropping to content
    #[arg(long, conflicts_with = "config")]
    no_crop: bool,

    /// What to do with images taller than a page
    #[arg(long, default_value = "fail", value_enum, conflicts_with = "config")]
    too_tall: TooTallArg,

    /// Also write each processed JPEG into this folder
    #[arg(long)]
    processed_dir: Option<PathBuf>,

    /// Load options from a JSON file (command-line paths still apply,
    /// layout flags cannot be combined with it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Show statistics only, don't generate PDF
    #[arg(long, conflicts_with = "preview")]
    stats_only: bool,

    /// Only write the first N pages
    #[arg(long)]
    preview: Option<usize>,

    /// Log every placement
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum TooTallArg {
    Fail,
    Skip,
    Shrink,
}

impl From<PaperArg> for pdf_pack::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for pdf_pack::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<TooTallArg> for pdf_pack::TooTallPolicy {
    fn from(arg: TooTallArg) -> Self {
        match arg {
            TooTallArg::Fail => Self::Fail,
            TooTallArg::Skip => Self::Skip,
            TooTallArg::Shrink => Self::Shrink,
        }
    }
}

impl Cli {
    async fn options(&self) -> Result<pdf_pack::PackOptions> {
        let mut options = match &self.config {
            Some(path) => pdf_pack::PackOptions::load(path).await?,
            None => pdf_pack::PackOptions {
                paper_size: self.paper.into(),
                orientation: self.orientation.into(),
                margin_mm: self.margin,
                spacing_mm: self.spacing,
                quality: self.quality,
                auto_crop: !self.no_crop,
                too_tall: self.too_tall.into(),
                ..Default::default()
            },
        };
        options.input_folder = self.input.clone();
        options.output_file = self.output.clone();
        if self.processed_dir.is_some() {
            options.processed_dir = self.processed_dir.clone();
        }
        Ok(options)
    }
}

fn print_statistics(stats: &pdf_pack::PackingStatistics, spec: &pdf_pack::PageSpec) {
    println!("Packing Statistics:");
    println!(
        "  Page size: {:.1} x {:.1} mm",
        pt_to_mm(spec.width),
        pt_to_mm(spec.height)
    );
    println!("  Images placed: {}", stats.images);
    println!("  Pages: {}", stats.pages);
    println!("  Shelves: {}", stats.shelves);
    println!("  Fill ratio: {:.1}%", stats.fill_ratio * 100.0);
    for (page, fill) in stats.per_page_fill.iter().enumerate() {
        println!("    Page {}: {:.1}%", page + 1, fill * 100.0);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let options = cli.options().await?;
    options.validate()?;

    if let Some(path) = &cli.save_config {
        options.save(path).await?;
        info!("Saved options to {}", path.display());
    }

    let spec = options.page_spec()?;

    if !cli.stats_only && cli.preview.is_none() {
        let report = pdf_pack::pack_folder(&options).await?;
        print_statistics(&report.statistics, &spec);
        for name in &report.skipped {
            println!("  Skipped (too tall): {}", name);
        }
        println!("Packed → {}", options.output_file.display());
        return Ok(());
    }

    // Statistics and previews need the layout without the full document
    let images = pdf_pack::load_images(&options).await?;
    if images.is_empty() {
        return Err(pdf_pack::PackError::NoImages(options.input_folder.clone()).into());
    }
    let sources: Vec<pdf_pack::SourceImage> =
        images.iter().map(|img| img.source.clone()).collect();
    let outcome = pdf_pack::layout_images(&sources, &spec, options.too_tall)?;

    let stats = pdf_pack::calculate_statistics(&outcome.result, &spec);
    print_statistics(&stats, &spec);

    if cli.stats_only {
        return Ok(());
    }

    if let Some(max_pages) = cli.preview {
        let preview =
            pdf_pack::generate_preview(&images, &outcome.result, &spec, max_pages).await?;
        pdf_pack::save_pdf(preview, &options.output_file).await?;
        println!(
            "Preview ({} of {} pages) → {}",
            max_pages.min(outcome.result.page_count),
            outcome.result.page_count,
            options.output_file.display()
        );
    }

    Ok(())
}
