//! RGB pixel grid backing both the source image and the output canvas

use image::RgbImage;
use ndarray::{Array3, ArrayView2, ArrayViewMut2, Axis};

/// Fixed-size grid of RGB pixels stored as a `(height, width, 3)` array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    data: Array3<u8>,
}

impl PixelGrid {
    /// Create an all-black grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: Array3::zeros((height, width, 3)),
        }
    }

    /// Create a grid filled with one color
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        Self::from_fn(width, height, |_, _| rgb)
    }

    /// Create a grid by evaluating `pixel(x, y)` for every position
    pub fn from_fn(
        width: usize,
        height: usize,
        mut pixel: impl FnMut(usize, usize) -> [u8; 3],
    ) -> Self {
        let mut grid = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, pixel(x, y));
            }
        }
        grid
    }

    /// Copy pixels out of a decoded RGB image
    pub fn from_rgb_image(image: &RgbImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut grid = Self::new(width, height);
        for (x, y, pixel) in image.enumerate_pixels() {
            grid.set(x as usize, y as usize, pixel.0);
        }
        grid
    }

    /// Convert to an RGB image for encoding
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            image::Rgb(self.get(x as usize, y as usize).unwrap_or([0, 0, 0]))
        })
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Color at `(x, y)`, or `None` off the grid
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        Some([
            *self.data.get((y, x, 0))?,
            *self.data.get((y, x, 1))?,
            *self.data.get((y, x, 2))?,
        ])
    }

    /// Overwrite the color at `(x, y)`; writes off the grid are ignored
    pub fn set(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        for (channel, value) in rgb.into_iter().enumerate() {
            if let Some(slot) = self.data.get_mut((y, x, channel)) {
                *slot = value;
            }
        }
    }

    /// Overwrite every pixel with one color
    pub fn fill(&mut self, rgb: [u8; 3]) {
        for mut pixel in self.data.lanes_mut(Axis(2)) {
            for (slot, value) in pixel.iter_mut().zip(rgb) {
                *slot = value;
            }
        }
    }

    /// Underlying `(height, width, 3)` channel array
    pub const fn as_array(&self) -> &Array3<u8> {
        &self.data
    }

    /// Mutable access to a row of pixels as a `(width, 3)` view
    pub(crate) fn row_mut(&mut self, y: usize) -> Option<ArrayViewMut2<'_, u8>> {
        if y < self.height() {
            Some(self.data.index_axis_mut(Axis(0), y))
        } else {
            None
        }
    }

    /// Read-only row of pixels as a `(width, 3)` view
    pub(crate) fn row(&self, y: usize) -> Option<ArrayView2<'_, u8>> {
        if y < self.height() {
            Some(self.data.index_axis(Axis(0), y))
        } else {
            None
        }
    }
}
