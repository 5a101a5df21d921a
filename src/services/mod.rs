pub mod detection;
pub mod histogram;
pub mod matching;
pub mod patterns;

pub use detection::{detect_ingredients, validate_upload, Detection, MAX_IMAGE_BYTES};
pub use histogram::{ColorBucket, ColorHistogram};
pub use matching::{rank, RankStrategy};
