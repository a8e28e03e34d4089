use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{error::ApiError, meals::repo::Meal, state::AppState};

use super::dto::{MealListItem, MealRequest, MessageResponse, RecommendationResponse};

/// Owner assigned to every logged meal. The client does not send its token
/// along with meal submissions yet, so ownership is pinned to the seed user.
/// TODO: attribute meals to the authenticated caller once the client
/// forwards its bearer token on this endpoint.
const DEFAULT_OWNER_ID: i64 = 1;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals))
        .route("/recommendation", get(recommendation))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/meals", post(add_meal))
}

#[instrument(skip(state, payload))]
pub async fn add_meal(
    State(state): State<AppState>,
    Json(payload): Json<MealRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let meal = Meal::create(
        &state.db,
        DEFAULT_OWNER_ID,
        &payload.name,
        payload.calories,
        payload.proteins,
        payload.carbs,
        payload.fats,
    )
    .await?;

    info!(meal_id = meal.id, name = %meal.name, "meal added");
    Ok(Json(MessageResponse {
        message: "Meal added successfully",
    }))
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
) -> Result<Json<Vec<MealListItem>>, ApiError> {
    let meals = Meal::list_all(&state.db).await?;
    let items = meals
        .into_iter()
        .map(|m| MealListItem {
            id: m.id,
            user_id: m.user_id,
            name: m.name,
            calories: m.calories,
            proteins: m.proteins,
            carbs: m.carbs,
            fats: m.fats,
        })
        .collect();
    Ok(Json(items))
}

#[instrument]
pub async fn recommendation() -> Json<RecommendationResponse> {
    info!("recommendation requested");
    Json(RecommendationResponse {
        meal: "Poulet et riz",
        calories: 600,
        proteins: 40,
        carbs: 50,
        fats: 10,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;

    #[tokio::test]
    async fn add_meal_then_list_returns_it_with_the_default_owner() {
        let state = test_state().await;

        let resp = add_meal(
            State(state.clone()),
            Json(MealRequest {
                name: "Oeufs".into(),
                calories: 150.0,
                proteins: 12.0,
                carbs: 1.0,
                fats: 10.0,
            }),
        )
        .await
        .expect("add meal");
        assert_eq!(resp.0.message, "Meal added successfully");

        let listing = list_meals(State(state.clone())).await.unwrap();
        assert_eq!(listing.0.len(), 1);
        let meal = &listing.0[0];
        assert!(meal.id > 0);
        assert_eq!(meal.user_id, DEFAULT_OWNER_ID);
        assert_eq!(meal.name, "Oeufs");
        assert_eq!(meal.calories, 150.0);
        assert_eq!(meal.proteins, 12.0);
        assert_eq!(meal.carbs, 1.0);
        assert_eq!(meal.fats, 10.0);
    }

    #[tokio::test]
    async fn recommendation_is_the_fixed_literal() {
        let before = serde_json::to_value(recommendation().await.0).unwrap();
        assert_eq!(
            before,
            serde_json::json!({
                "meal": "Poulet et riz",
                "calories": 600,
                "proteins": 40,
                "carbs": 50,
                "fats": 10
            })
        );

        // Prior state does not influence the payload.
        let state = test_state().await;
        add_meal(
            State(state),
            Json(MealRequest {
                name: "Poisson".into(),
                calories: 300.0,
                proteins: 30.0,
                carbs: 0.0,
                fats: 15.0,
            }),
        )
        .await
        .unwrap();
        let after = serde_json::to_value(recommendation().await.0).unwrap();
        assert_eq!(before, after);
    }
}
