use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conversion configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Img2PdfOptions {
    /// Input image files, in page order
    pub input_files: Vec<PathBuf>,

    /// Output page size
    pub page_size: PageSize,

    /// Margin preset, applied uniformly on all sides
    pub margin: MarginPreset,

    /// How each image is placed on its page
    pub placement: Placement,

    /// Document title written to the PDF metadata
    pub title: String,
}

impl Default for Img2PdfOptions {
    fn default() -> Self {
        Self {
            input_files: Vec::new(),
            page_size: PageSize::A4,
            margin: MarginPreset::Normal,
            placement: Placement::Cover,
            title: "Image to PDF".to_string(),
        }
    }
}

impl Img2PdfOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| Img2PdfError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Img2PdfError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input_files.is_empty() {
            return Err(Img2PdfError::Config(
                "No input images specified".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    // The enums serialize to their lowercase table keys so config files read
    // the same as the CLI arguments.

    impl Serialize for PageSize {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for PageSize {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(|_| {
                serde::de::Error::unknown_variant(
                    &s,
                    &["a4", "letter", "legal", "tabloid", "executive"],
                )
            })
        }
    }

    impl Serialize for MarginPreset {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for MarginPreset {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(|_| {
                serde::de::Error::unknown_variant(&s, &["none", "small", "normal", "large"])
            })
        }
    }

    impl Serialize for Placement {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Placement {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(|_| {
                serde::de::Error::unknown_variant(
                    &s,
                    &["cover", "top", "center", "bottom", "stretch"],
                )
            })
        }
    }
}
