//! Program image loading.
//!
//! A program image is a raw sequence of little-endian 32-bit instruction
//! words. It is loaded verbatim at address 0 before the first step; the
//! image must not exceed the memory size.

use std::path::Path;

use tracing::debug;

use crate::common::error::LoadError;
use crate::core::Cpu;

/// Reads a raw image file and places it at address 0.
///
/// Returns the image length in bytes.
///
/// # Errors
///
/// [`LoadError::Io`] when the file cannot be read, [`LoadError::TooLarge`]
/// when the image does not fit in memory.
pub fn load_image(cpu: &mut Cpu, path: &Path) -> Result<usize, LoadError> {
    let image = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    load_bytes(cpu, &image)?;
    debug!(path = %path.display(), len = image.len(), "image loaded");
    Ok(image.len())
}

/// Places an in-memory image at address 0.
///
/// # Errors
///
/// [`LoadError::TooLarge`] when the image does not fit in memory.
pub fn load_bytes(cpu: &mut Cpu, image: &[u8]) -> Result<(), LoadError> {
    cpu.mem.load_image(image)
}
