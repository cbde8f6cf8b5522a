mod image_size;

pub use image_size::{image_url, ImageSize};
