//! Renders bipolar patterns as text pictures or grayscale images.

use super::{OFF, ON};
use crate::core::{pattern::BinaryVector, shape::ImageShape};
use image::{GrayImage, Luma};

/// Renders `pattern` as `shape.height` lines of `shape.width` glyphs, each line newline-terminated.
pub fn to_ascii(pattern: &BinaryVector, shape: ImageShape) -> String {
    debug_assert_eq!(pattern.len(), shape.len());
    let mut picture = String::with_capacity(shape.len() + shape.height);

    for row in pattern.as_slice().chunks(shape.width) {
        picture.extend(row.iter().map(|&v| if v > 0 { ON } else { OFF }));
        picture.push('\n');
    }

    picture
}

/// Renders `pattern` as a grayscale image, each pixel blown up to a `scale`×`scale` block.
/// Active neurons are black, inactive ones white.
pub fn to_image(pattern: &BinaryVector, shape: ImageShape, scale: u32) -> GrayImage {
    debug_assert_eq!(pattern.len(), shape.len());
    let scale = scale.max(1);

    GrayImage::from_fn(
        shape.width as u32 * scale,
        shape.height as u32 * scale,
        |x, y| {
            let index = shape.index((y / scale) as usize, (x / scale) as usize);
            Luma([if pattern[index] > 0 { 0 } else { 255 }])
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> BinaryVector {
        BinaryVector::from_bipolar(vec![1, -1, -1, -1, 1, 1]).unwrap()
    }

    #[test]
    fn test_ascii_rows() {
        assert_eq!(to_ascii(&pattern(), ImageShape::new(3, 2)), "*..\n.**\n");
    }

    #[test]
    fn test_image_scaling() {
        let image = to_image(&pattern(), ImageShape::new(3, 2), 4);
        assert_eq!(image.dimensions(), (12, 8));
        assert_eq!(image.get_pixel(0, 0), &Luma([0]));
        assert_eq!(image.get_pixel(3, 3), &Luma([0]));
        assert_eq!(image.get_pixel(4, 0), &Luma([255]));
        assert_eq!(image.get_pixel(11, 7), &Luma([0]));
    }
}
