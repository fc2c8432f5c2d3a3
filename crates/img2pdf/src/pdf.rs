//! PDF document assembly
//!
//! One page per image, in input order. Placement geometry comes from the
//! layout calculator; decoding and binary encoding are owned by `printpdf`.

use printpdf::*;
use std::path::Path;

use crate::layout::compute_layout;
use crate::options::Img2PdfOptions;
use crate::types::{Img2PdfError, Result};

/// Generate the PDF and write it to `output_path`.
pub async fn generate_pdf(
    images: &[Vec<u8>],
    options: &Img2PdfOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let images = images.to_vec();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    // PDF generation is CPU-bound, spawn blocking
    let bytes =
        tokio::task::spawn_blocking(move || generate_pdf_bytes(&images, &options)).await??;

    // Async file write
    tokio::fs::write(&output_path, bytes).await?;

    Ok(())
}

/// Build the PDF in memory, one page per image.
pub fn generate_pdf_bytes(images: &[Vec<u8>], options: &Img2PdfOptions) -> Result<Vec<u8>> {
    if images.is_empty() {
        return Err(Img2PdfError::NoImages);
    }

    let (page_width, page_height) = options.page_size.dimensions_pt();
    let layout = compute_layout(options.page_size, options.margin, options.placement);

    let mut doc = PdfDocument::new(&options.title);
    let mut warnings = Vec::new();
    let mut pages = Vec::new();

    for bytes in images {
        let image =
            RawImage::decode_from_bytes(bytes, &mut warnings).map_err(Img2PdfError::Pdf)?;

        // At 72 dpi one pixel renders as one point, so the scale factors map
        // the pixel dimensions onto the layout box.
        let scale_x = layout.width / image.width as f32;
        let scale_y = layout.height / image.height as f32;

        let image_id = doc.add_image(&image);

        // The layout box measures y from the top edge; PDF pages have their
        // origin at the bottom left.
        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(layout.x)),
                translate_y: Some(Pt(page_height - layout.y - layout.height)),
                rotate: None,
                scale_x: Some(scale_x),
                scale_y: Some(scale_y),
                dpi: Some(72.0),
            },
        }];

        pages.push(PdfPage::new(
            Mm::from(Pt(page_width)),
            Mm::from(Pt(page_height)),
            ops,
        ));
    }

    doc.pages = pages;

    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(bytes)
}
