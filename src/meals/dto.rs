use serde::{Deserialize, Serialize};

/// Request body for logging a meal. All fields are required; values are
/// stored as given, without range checks.
#[derive(Debug, Deserialize)]
pub struct MealRequest {
    pub name: String,
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Confirmation body for write operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Meal row as exposed by the listing endpoint.
#[derive(Debug, Serialize)]
pub struct MealListItem {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// The static recommendation payload. Integer-valued on the wire.
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub meal: &'static str,
    pub calories: u32,
    pub proteins: u32,
    pub carbs: u32,
    pub fats: u32,
}
