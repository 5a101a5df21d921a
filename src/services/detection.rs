use crate::error::AppError;

use super::{histogram, patterns};

/// Maximum accepted upload size: 5 MiB
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Outcome of running detection over a valid image
///
/// `NoneDetected` is a normal result, distinct from the decode failure path:
/// the photo was readable but no pattern produced a candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    Detected {
        ingredients: Vec<String>,
        summary: String,
    },
    NoneDetected,
}

/// Validates an upload before any decode work
///
/// Both checks run on metadata alone; a rejected upload never reaches the
/// histogram extractor.
pub fn validate_upload(content_type: Option<&str>, size: usize) -> Result<(), AppError> {
    match content_type {
        Some(content_type) if content_type.starts_with("image/") => {}
        _ => {
            return Err(AppError::InvalidInput(
                "Please select a valid image file".into(),
            ))
        }
    }

    if size > MAX_IMAGE_BYTES {
        return Err(AppError::InvalidInput(
            "Image size must be less than 5MB".into(),
        ));
    }

    Ok(())
}

/// Runs the detection pipeline: decode → resize → histogram → patterns
pub fn detect_ingredients(
    bytes: &[u8],
    catalog_ingredients: &[String],
) -> Result<Detection, AppError> {
    let image = image::load_from_memory(bytes).map_err(|err| {
        tracing::debug!(error = %err, "Image decode failed");
        AppError::Decode("Unable to load image. Please try another file.".into())
    })?;

    let histogram = histogram::from_image(&image);
    let ingredients = patterns::detect_candidates(&histogram, catalog_ingredients);

    tracing::debug!(
        sampled = histogram.total(),
        detected = ingredients.len(),
        "Detection pipeline complete"
    );

    if ingredients.is_empty() {
        return Ok(Detection::NoneDetected);
    }

    let noun = if ingredients.len() == 1 {
        "ingredient"
    } else {
        "ingredients"
    };
    let summary = format!(
        "Detected {} {}: {}",
        ingredients.len(),
        noun,
        ingredients.join(", ")
    );

    Ok(Detection::Detected {
        ingredients,
        summary,
    })
}
