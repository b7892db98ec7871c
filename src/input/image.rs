use std::path::Path;

use crate::input::{InputError, ensure_exists};

/// Pixel width of a diagram image, read from its header only.
pub fn image_width(path: &Path) -> Result<u32, InputError> {
    ensure_exists(path)?;
    let size = imagesize::size(path).map_err(|e| match e {
        imagesize::ImageError::IoError(io) => InputError::Io(io),
        other => InputError::Image {
            path: path.to_path_buf(),
            msg: other.to_string(),
        },
    })?;
    if size.width == 0 {
        return Err(InputError::Image {
            path: path.to_path_buf(),
            msg: "zero width".to_string(),
        });
    }
    u32::try_from(size.width).map_err(|_| InputError::Image {
        path: path.to_path_buf(),
        msg: format!("width {} out of range", size.width),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/image.rs"]
mod tests;
