use image::DynamicImage;

/// Side length of the fixed sampling canvas, in pixels
///
/// Every image is resized to this canvas before sampling so histograms are
/// comparable regardless of source resolution.
pub const CANVAS_SIZE: u32 = 200;

/// Sampling stride: every Nth pixel of the buffer is examined
pub const SAMPLE_STRIDE_PIXELS: usize = 10;

/// Sampled pixels with alpha below this are treated as background
pub const ALPHA_CUTOFF: u8 = 128;

/// Coarse color classification for a sampled pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBucket {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Brown,
    White,
    Dark,
    Other,
}

impl ColorBucket {
    /// All buckets, in classification order
    pub const ALL: [ColorBucket; 10] = [
        ColorBucket::Red,
        ColorBucket::Orange,
        ColorBucket::Yellow,
        ColorBucket::Green,
        ColorBucket::Blue,
        ColorBucket::Purple,
        ColorBucket::Brown,
        ColorBucket::White,
        ColorBucket::Dark,
        ColorBucket::Other,
    ];

    /// Classifies an opaque RGB pixel into exactly one bucket
    ///
    /// The rules are evaluated top to bottom and the first match wins; the
    /// ordering is part of the contract (e.g. a pixel satisfying both the
    /// orange and brown thresholds counts as orange).
    pub fn classify(r: u8, g: u8, b: u8) -> ColorBucket {
        if r > 200 && g < 100 && b < 100 {
            ColorBucket::Red
        } else if r > 200 && g > 150 && b < 100 {
            ColorBucket::Orange
        } else if r > 200 && g > 200 && b < 100 {
            ColorBucket::Yellow
        } else if r < 100 && g > 150 && b < 100 {
            ColorBucket::Green
        } else if r < 100 && g < 100 && b > 150 {
            ColorBucket::Blue
        } else if r > 150 && g < 150 && b > 150 {
            ColorBucket::Purple
        } else if r > 180 && g > 150 && b < 150 {
            ColorBucket::Brown
        } else if r > 200 && g > 200 && b > 200 {
            ColorBucket::White
        } else if r < 100 && g < 100 && b < 100 {
            ColorBucket::Dark
        } else {
            ColorBucket::Other
        }
    }

    /// Lowercase label, as used by the ingredient pattern table
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorBucket::Red => "red",
            ColorBucket::Orange => "orange",
            ColorBucket::Yellow => "yellow",
            ColorBucket::Green => "green",
            ColorBucket::Blue => "blue",
            ColorBucket::Purple => "purple",
            ColorBucket::Brown => "brown",
            ColorBucket::White => "white",
            ColorBucket::Dark => "dark",
            ColorBucket::Other => "other",
        }
    }

    fn index(self) -> usize {
        match self {
            ColorBucket::Red => 0,
            ColorBucket::Orange => 1,
            ColorBucket::Yellow => 2,
            ColorBucket::Green => 3,
            ColorBucket::Blue => 4,
            ColorBucket::Purple => 5,
            ColorBucket::Brown => 6,
            ColorBucket::White => 7,
            ColorBucket::Dark => 8,
            ColorBucket::Other => 9,
        }
    }
}

/// Pixel counts per color bucket for one sampled image
///
/// Built fresh per image and discarded after pattern matching. The default
/// value is the empty histogram, which downstream stages read as "no
/// evidence" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorHistogram {
    counts: [u32; 10],
}

impl ColorHistogram {
    pub fn record(&mut self, bucket: ColorBucket) {
        self.counts[bucket.index()] += 1;
    }

    pub fn count(&self, bucket: ColorBucket) -> u32 {
        self.counts[bucket.index()]
    }

    /// Whether the bucket has any sampled pixels
    pub fn contains(&self, bucket: ColorBucket) -> bool {
        self.count(bucket) > 0
    }

    /// Total sampled, non-transparent pixels
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}

/// Builds a histogram from a raw RGBA byte buffer
///
/// Examines every `SAMPLE_STRIDE_PIXELS`th pixel, skipping pixels whose
/// alpha is below `ALPHA_CUTOFF`. Total on any input; a trailing partial
/// pixel is ignored.
pub fn from_rgba_buffer(data: &[u8]) -> ColorHistogram {
    let mut histogram = ColorHistogram::default();
    let step = SAMPLE_STRIDE_PIXELS * 4;

    let mut i = 0;
    while i + 3 < data.len() {
        let (r, g, b, a) = (data[i], data[i + 1], data[i + 2], data[i + 3]);
        if a >= ALPHA_CUTOFF {
            histogram.record(ColorBucket::classify(r, g, b));
        }
        i += step;
    }

    histogram
}

/// Resizes a decoded image to the fixed canvas and builds its histogram
pub fn from_image(image: &DynamicImage) -> ColorHistogram {
    let canvas = image
        .resize_exact(CANVAS_SIZE, CANVAS_SIZE, image::imageops::FilterType::Triangle)
        .to_rgba8();
    from_rgba_buffer(canvas.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba_pixels(pixels: &[(u8, u8, u8, u8)]) -> Vec<u8> {
        pixels
            .iter()
            .flat_map(|&(r, g, b, a)| [r, g, b, a])
            .collect()
    }

    #[test]
    fn test_classify_each_bucket() {
        assert_eq!(ColorBucket::classify(255, 50, 50), ColorBucket::Red);
        assert_eq!(ColorBucket::classify(255, 160, 50), ColorBucket::Orange);
        assert_eq!(ColorBucket::classify(255, 255, 50), ColorBucket::Yellow);
        assert_eq!(ColorBucket::classify(50, 200, 50), ColorBucket::Green);
        assert_eq!(ColorBucket::classify(50, 50, 200), ColorBucket::Blue);
        assert_eq!(ColorBucket::classify(200, 100, 200), ColorBucket::Purple);
        assert_eq!(ColorBucket::classify(190, 160, 120), ColorBucket::Brown);
        assert_eq!(ColorBucket::classify(240, 240, 240), ColorBucket::White);
        assert_eq!(ColorBucket::classify(20, 20, 20), ColorBucket::Dark);
        assert_eq!(ColorBucket::classify(150, 120, 120), ColorBucket::Other);
    }

    #[test]
    fn test_classify_first_match_wins() {
        // Satisfies both the orange and brown thresholds; orange is earlier.
        assert_eq!(ColorBucket::classify(210, 160, 90), ColorBucket::Orange);
        // Satisfies both the yellow and orange thresholds; orange is earlier.
        assert_eq!(ColorBucket::classify(255, 255, 90), ColorBucket::Orange);
    }

    #[test]
    fn test_classification_is_total() {
        // Spot-check a grid of values; every pixel lands in some bucket.
        for r in (0u16..=255).step_by(51) {
            for g in (0u16..=255).step_by(51) {
                for b in (0u16..=255).step_by(51) {
                    let bucket = ColorBucket::classify(r as u8, g as u8, b as u8);
                    assert!(ColorBucket::ALL.contains(&bucket));
                }
            }
        }
    }

    #[test]
    fn test_stride_samples_every_tenth_pixel() {
        // 30 pixels: pixel 0, 10, and 20 are red, the rest green.
        let pixels: Vec<(u8, u8, u8, u8)> = (0..30)
            .map(|i| {
                if i % 10 == 0 {
                    (255, 0, 0, 255)
                } else {
                    (0, 255, 0, 255)
                }
            })
            .collect();
        let histogram = from_rgba_buffer(&rgba_pixels(&pixels));

        assert_eq!(histogram.count(ColorBucket::Red), 3);
        assert_eq!(histogram.count(ColorBucket::Green), 0);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn test_transparent_pixels_skipped() {
        let pixels = vec![(255, 0, 0, 127); 50];
        let histogram = from_rgba_buffer(&rgba_pixels(&pixels));
        assert!(histogram.is_empty());

        let pixels = vec![(255, 0, 0, 128); 50];
        let histogram = from_rgba_buffer(&rgba_pixels(&pixels));
        assert_eq!(histogram.count(ColorBucket::Red), 5);
    }

    #[test]
    fn test_sampling_deterministic() {
        let pixels: Vec<(u8, u8, u8, u8)> = (0..500)
            .map(|i| ((i % 256) as u8, ((i * 7) % 256) as u8, ((i * 13) % 256) as u8, 255))
            .collect();
        let buffer = rgba_pixels(&pixels);

        assert_eq!(from_rgba_buffer(&buffer), from_rgba_buffer(&buffer));
    }

    #[test]
    fn test_empty_buffer_yields_empty_histogram() {
        assert!(from_rgba_buffer(&[]).is_empty());
        // Trailing partial pixel is ignored.
        assert!(from_rgba_buffer(&[255, 0]).is_empty());
    }

    #[test]
    fn test_from_image_solid_color() {
        let solid = image::RgbaImage::from_pixel(50, 50, image::Rgba([255, 30, 30, 255]));
        let histogram = from_image(&DynamicImage::ImageRgba8(solid));

        // 200x200 canvas sampled at stride 10 = 4000 pixels, all red.
        assert_eq!(histogram.count(ColorBucket::Red), 4000);
        assert_eq!(histogram.total(), 4000);
    }
}
