//! Bi-level raster rendering for automaton history matrices.
//!
//! Turns the boolean matrix produced by `lightcone-automata` into a
//! grayscale image, one square of `block_size` pixels per cell, and
//! exports it as a PNG.
//!
//! # Example
//!
//! ```no_run
//! use lightcone_image::{export_png, render_matrix};
//!
//! let matrix = vec![vec![false, true, false]];
//! let image = render_matrix(&matrix, 4).unwrap();
//! export_png(&image, "strip.png").unwrap();
//! ```

use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use thiserror::Error;

/// Pixel value for a live cell.
const FOREGROUND: u8 = 0;
/// Pixel value for a dead cell.
const BACKGROUND: u8 = 255;

/// Errors from rendering or exporting an image.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The block size was zero.
    #[error("block size must be positive")]
    ZeroBlockSize,
    /// The image could not be encoded or written.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Renders a boolean matrix as a grayscale image.
///
/// Every cell becomes a `block_size` by `block_size` square; live cells
/// are drawn black on a white background. The result is
/// `(columns * block_size) x (rows * block_size)` pixels.
///
/// Fails if `block_size` is zero.
pub fn render_matrix(matrix: &[Vec<bool>], block_size: u32) -> Result<GrayImage, RenderError> {
    if block_size == 0 {
        return Err(RenderError::ZeroBlockSize);
    }
    let rows = matrix.len() as u32;
    let columns = matrix.first().map_or(0, |row| row.len()) as u32;

    let mut image = GrayImage::from_pixel(
        columns * block_size,
        rows * block_size,
        Luma([BACKGROUND]),
    );

    for (i, row) in matrix.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            if !cell {
                continue;
            }
            let x0 = j as u32 * block_size;
            let y0 = i as u32 * block_size;
            for y in y0..y0 + block_size {
                for x in x0..x0 + block_size {
                    image.put_pixel(x, y, Luma([FOREGROUND]));
                }
            }
        }
    }

    Ok(image)
}

/// Writes an image to `path` as a PNG.
pub fn export_png<P: AsRef<Path>>(image: &GrayImage, path: P) -> Result<(), RenderError> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightcone_automata::Automaton;

    #[test]
    fn test_zero_block_size_rejected() {
        let matrix = vec![vec![true]];
        assert!(matches!(
            render_matrix(&matrix, 0),
            Err(RenderError::ZeroBlockSize)
        ));
    }

    #[test]
    fn test_dimensions_block_size_1() {
        let ca = Automaton::new(5, 30).unwrap();
        let image = render_matrix(ca.matrix(), 1).unwrap();
        assert_eq!(image.dimensions(), (9, 5));
    }

    #[test]
    fn test_dimensions_scale_with_block_size() {
        let ca = Automaton::new(5, 30).unwrap();
        let image = render_matrix(ca.matrix(), 3).unwrap();
        assert_eq!(image.dimensions(), (27, 15));
    }

    #[test]
    fn test_pixels_match_cells() {
        let matrix = vec![vec![false, true], vec![true, false]];
        let image = render_matrix(&matrix, 1).unwrap();

        assert_eq!(image.get_pixel(0, 0).0[0], BACKGROUND);
        assert_eq!(image.get_pixel(1, 0).0[0], FOREGROUND);
        assert_eq!(image.get_pixel(0, 1).0[0], FOREGROUND);
        assert_eq!(image.get_pixel(1, 1).0[0], BACKGROUND);
    }

    #[test]
    fn test_blocks_are_uniform() {
        let matrix = vec![vec![true, false]];
        let block_size = 4;
        let image = render_matrix(&matrix, block_size).unwrap();

        for y in 0..block_size {
            for x in 0..block_size {
                assert_eq!(image.get_pixel(x, y).0[0], FOREGROUND);
                assert_eq!(image.get_pixel(x + block_size, y).0[0], BACKGROUND);
            }
        }
    }

    #[test]
    fn test_rule_30_raster_matches_matrix() {
        let ca = Automaton::new(5, 30).unwrap();
        let image = render_matrix(ca.matrix(), 2).unwrap();

        for i in 0..ca.rows() {
            for j in 0..ca.columns() {
                let expected = if ca.get(i, j) { FOREGROUND } else { BACKGROUND };
                let pixel = image.get_pixel(j as u32 * 2, i as u32 * 2).0[0];
                assert_eq!(pixel, expected, "cell ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_empty_matrix_renders_empty_image() {
        let image = render_matrix(&[], 1).unwrap();
        assert_eq!(image.dimensions(), (0, 0));
    }
}
