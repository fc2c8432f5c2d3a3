use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Img2PdfError {
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No images to place")]
    NoImages,
}

pub type Result<T> = std::result::Result<T, Img2PdfError>;

/// Standard paper sizes for output pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Tabloid,
    Executive,
}

impl PageSize {
    /// Page dimensions in points (1/72 inch), always portrait
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Tabloid => (792.0, 1224.0),
            PageSize::Executive => (522.0, 756.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PageSize::A4 => "a4",
            PageSize::Letter => "letter",
            PageSize::Legal => "legal",
            PageSize::Tabloid => "tabloid",
            PageSize::Executive => "executive",
        }
    }
}

impl FromStr for PageSize {
    type Err = Img2PdfError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            "tabloid" => Ok(PageSize::Tabloid),
            "executive" => Ok(PageSize::Executive),
            _ => Err(Img2PdfError::InvalidArgument(format!(
                "unknown page size '{s}'"
            ))),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named margin presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarginPreset {
    None,
    Small,
    #[default]
    Normal,
    Large,
}

impl MarginPreset {
    /// Margin width in points, applied uniformly on all four sides
    pub fn points(self) -> f32 {
        match self {
            MarginPreset::None => 0.0,
            MarginPreset::Small => 10.0,
            MarginPreset::Normal => 15.0,
            MarginPreset::Large => 25.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MarginPreset::None => "none",
            MarginPreset::Small => "small",
            MarginPreset::Normal => "normal",
            MarginPreset::Large => "large",
        }
    }
}

impl FromStr for MarginPreset {
    type Err = Img2PdfError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(MarginPreset::None),
            "small" => Ok(MarginPreset::Small),
            "normal" => Ok(MarginPreset::Normal),
            "large" => Ok(MarginPreset::Large),
            _ => Err(Img2PdfError::InvalidArgument(format!(
                "unknown margin preset '{s}'"
            ))),
        }
    }
}

impl fmt::Display for MarginPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How an image is positioned and sized on its page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Stretch to the full page, ignoring margins
    #[default]
    Cover,
    /// Upper half of the content area
    Top,
    /// Vertically centered in the content area
    Center,
    /// Flush against the bottom margin
    Bottom,
    /// Stretch to fill the content area inside the margins
    Stretch,
}

impl Placement {
    pub fn name(self) -> &'static str {
        match self {
            Placement::Cover => "cover",
            Placement::Top => "top",
            Placement::Center => "center",
            Placement::Bottom => "bottom",
            Placement::Stretch => "stretch",
        }
    }
}

impl FromStr for Placement {
    type Err = Img2PdfError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cover" => Ok(Placement::Cover),
            "top" => Ok(Placement::Top),
            "center" => Ok(Placement::Center),
            "bottom" => Ok(Placement::Bottom),
            "stretch" => Ok(Placement::Stretch),
            _ => Err(Img2PdfError::InvalidArgument(format!(
                "unknown placement '{s}'"
            ))),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The rectangle an image is drawn into, in points.
///
/// `y` is measured from the top edge of the page; the PDF renderer converts
/// to bottom-left origin when emitting operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}
