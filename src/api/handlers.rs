use axum::{
    body::Bytes,
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{CookTimeRange, DietaryTag, Difficulty, Recipe, RecipeMatch, SearchFilters};
use crate::services::{detect_ingredients, rank, validate_upload, Detection, RankStrategy};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Typed/selected ingredient names; empty means "no ingredient filter"
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub dietary: Vec<DietaryTag>,
    #[serde(default)]
    pub difficulty: Vec<Difficulty>,
    #[serde(default)]
    pub cook_time: CookTimeRange,
}

/// A recipe decorated with its ranking results, as returned to clients
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub match_score: f64,
    pub matched_count: usize,
}

impl From<&RecipeMatch<'_>> for MatchResponse {
    fn from(entry: &RecipeMatch<'_>) -> Self {
        Self {
            recipe: entry.recipe.clone(),
            match_score: entry.match_score,
            matched_count: entry.matched_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub results: Vec<MatchResponse>,
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    /// Ingredient labels detected in the uploaded photo
    pub detected: Vec<String>,
    /// Human-readable summary ("Detected 2 ingredients: …" or the distinct
    /// "no ingredients detected" message)
    pub message: String,
    pub count: usize,
    /// Recipes that use every detected ingredient, best match first
    pub results: Vec<MatchResponse>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get all recipes in stable catalog order
pub async fn get_recipes(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    Json(state.catalog.recipes().to_vec())
}

/// Get a single recipe by id
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Recipe>> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No recipe with id {id}")))
}

/// Get every ingredient name known to the catalog
pub async fn get_ingredients(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.all_ingredients())
}

/// Inclusive weighted search over typed ingredient names
pub async fn search_recipes(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    tracing::info!(
        selected = request.ingredients.len(),
        dietary = request.dietary.len(),
        "Processing recipe search"
    );

    let filters = SearchFilters {
        dietary: request.dietary,
        difficulty: request.difficulty,
        cook_time: request.cook_time,
    };

    let ranked = rank(
        state.catalog.recipes(),
        RankStrategy::Inclusive {
            selected: &request.ingredients,
            filters: &filters,
        },
    );

    let results: Vec<MatchResponse> = ranked.iter().map(MatchResponse::from).collect();
    Json(SearchResponse {
        count: results.len(),
        results,
    })
}

/// Detect ingredients from an uploaded photo, then rank recipes that use
/// every detected ingredient
pub async fn detect_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<DetectResponse>> {
    let (content_type, data) = read_image_field(&mut multipart).await?;
    validate_upload(content_type.as_deref(), data.len())?;

    let all_ingredients = state.catalog.all_ingredients();
    let detection = detect_ingredients(&data, &all_ingredients)?;

    let (detected, message) = match detection {
        Detection::Detected {
            ingredients,
            summary,
        } => (ingredients, summary),
        Detection::NoneDetected => (
            Vec::new(),
            "No common ingredients detected. Try uploading a clearer food image.".to_string(),
        ),
    };

    tracing::info!(detected = detected.len(), "Image detection complete");

    let ranked = rank(
        state.catalog.recipes(),
        RankStrategy::AllRequired {
            detected: &detected,
        },
    );

    let results: Vec<MatchResponse> = ranked.iter().map(MatchResponse::from).collect();
    Ok(Json(DetectResponse {
        detected,
        message,
        count: results.len(),
        results,
    }))
}

/// Pulls the `file` part out of a multipart upload
async fn read_image_field(multipart: &mut Multipart) -> AppResult<(Option<String>, Bytes)> {
    while let Some(field) = multipart.next_field().await.map_err(|err| {
        AppError::InvalidInput(format!("Malformed multipart request: {err}"))
    })? {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field.content_type().map(str::to_owned);
        let data = field
            .bytes()
            .await
            .map_err(|err| AppError::InvalidInput(format!("Unable to read upload: {err}")))?;
        return Ok((content_type, data));
    }

    Err(AppError::InvalidInput(
        "Missing image upload field 'file'".to_string(),
    ))
}
