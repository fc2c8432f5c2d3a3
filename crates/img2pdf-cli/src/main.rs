use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "img2pdf", about = "Turn images into a multi-page PDF", version)]
struct Cli {
    /// Input image file(s), one page each, in the given order
    #[arg(required = true, num_args = 1..)]
    images: Vec<PathBuf>,

    /// Output PDF file
    #[arg(short, long, default_value = "image-to-pdf.pdf")]
    output: PathBuf,

    /// Paper size
    #[arg(long, default_value = "a4", value_enum)]
    paper: PaperArg,

    /// Margin preset
    #[arg(long, default_value = "normal", value_enum)]
    margin: MarginArg,

    /// Image placement on each page
    #[arg(long, default_value = "cover", value_enum)]
    placement: PlacementArg,

    /// Document title
    #[arg(long, default_value = "Image to PDF")]
    title: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    Letter,
    Legal,
    Tabloid,
    Executive,
}

#[derive(Clone, Copy, ValueEnum)]
enum MarginArg {
    None,
    Small,
    Normal,
    Large,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlacementArg {
    Cover,
    Top,
    Center,
    Bottom,
    Stretch,
}

impl From<PaperArg> for img2pdf::PageSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
            PaperArg::Executive => Self::Executive,
        }
    }
}

impl From<MarginArg> for img2pdf::MarginPreset {
    fn from(arg: MarginArg) -> Self {
        match arg {
            MarginArg::None => Self::None,
            MarginArg::Small => Self::Small,
            MarginArg::Normal => Self::Normal,
            MarginArg::Large => Self::Large,
        }
    }
}

impl From<PlacementArg> for img2pdf::Placement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Cover => Self::Cover,
            PlacementArg::Top => Self::Top,
            PlacementArg::Center => Self::Center,
            PlacementArg::Bottom => Self::Bottom,
            PlacementArg::Stretch => Self::Stretch,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = img2pdf::Img2PdfOptions {
        input_files: cli.images.clone(),
        page_size: cli.paper.into(),
        margin: cli.margin.into(),
        placement: cli.placement.into(),
        title: cli.title,
    };
    options.validate()?;

    let images = img2pdf::load_images(&options.input_files).await?;
    img2pdf::generate_pdf(&images, &options, &cli.output).await?;

    println!(
        "Generated {} page(s) → {}",
        images.len(),
        cli.output.display()
    );

    Ok(())
}
