pub mod layout;
mod io;
mod options;
mod pdf;
mod types;

pub use io::{load_image, load_images};
pub use layout::{compute_layout, compute_layout_pt};
pub use options::*;
pub use pdf::{generate_pdf, generate_pdf_bytes};
pub use types::*;
