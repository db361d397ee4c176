//! Binary mask container for a single extracted region

use image::GrayImage;

/// A binary region mask over the canvas
///
/// Holds one byte per pixel in row-major order: 1 where the pixel belongs
/// to the region, 0 everywhere else.
#[derive(Debug, Clone)]
pub struct RegionMask {
    /// Width of the mask (columns)
    pub width: u32,
    /// Height of the mask (rows)
    pub height: u32,
    /// Mask values in row-major order
    pub data: Vec<u8>,
}

impl RegionMask {
    /// Create an all-zero mask
    pub fn new(width: u32, height: u32) -> Self {
        RegionMask {
            width,
            height,
            data: vec![0; (width * height) as usize],
        }
    }

    /// Create a mask with a single pixel already set
    pub fn with_pixel(width: u32, height: u32, x: u32, y: u32) -> Self {
        let mut mask = RegionMask::new(width, height);
        mask.set(x, y);
        mask
    }

    /// Mark a pixel as belonging to the region
    pub fn set(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) as usize;
            self.data[idx] = 1;
        }
    }

    /// Get the value at a position, or None if out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) as usize;
        self.data.get(idx).copied()
    }

    /// Number of pixels the region covers
    pub fn area(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Render the mask as a grayscale image (set pixels become white)
    ///
    /// Useful for debug export; the in-memory representation stays 0/1.
    pub fn to_image(&self) -> GrayImage {
        let rendered: Vec<u8> = self
            .data
            .iter()
            .map(|&v| if v != 0 { 255 } else { 0 })
            .collect();
        // Buffer length matches width*height by construction
        GrayImage::from_raw(self.width, self.height, rendered)
            .unwrap_or_else(|| GrayImage::new(self.width, self.height))
    }
}
