//! Dashboard Actions
//!
//! The four backend-facing operations of the dashboard. Each takes an
//! `apply` closure that performs the matching state transition, so the view
//! can route it through the reactive store and tests through a plain
//! `DashboardState`.
//!
//! Load and add mutate state only after the backend answers. Update and
//! delete mutate state first and hand back their request for the caller to
//! spawn without awaiting; a failed request is logged and never rolled back.

use std::future::Future;
use std::pin::Pin;

use crate::api::FoodApi;
use crate::models::{FoodPlate, NewFoodPlate};

/// Request detached from the state change that preceded it
pub type PendingRequest = Pin<Box<dyn Future<Output = ()>>>;

/// `GET /foods`, then hand the whole list to `apply`
pub async fn load_foods<A: FoodApi>(api: &A, apply: impl FnOnce(Vec<FoodPlate>)) {
    match api.list_foods().await {
        Ok(foods) => {
            log::info!("loaded {} foods", foods.len());
            apply(foods);
        }
        Err(e) => log::warn!("failed to load foods: {}", e),
    }
}

/// `POST /foods`, then hand the stored plate to `apply`
pub async fn add_food<A: FoodApi>(api: &A, draft: NewFoodPlate, apply: impl FnOnce(FoodPlate)) {
    match api.create_food(&draft).await {
        Ok(food) => {
            log::info!("created food #{} ({})", food.id, food.name);
            apply(food);
        }
        Err(e) => log::error!("failed to create food {:?}: {}", draft.name, e),
    }
}

/// Replace the plate locally, return the `PUT /foods/{id}` still to be sent
pub fn update_food<A: FoodApi + 'static>(
    api: A,
    updated: FoodPlate,
    apply: impl FnOnce(FoodPlate),
) -> PendingRequest {
    apply(updated.clone());

    Box::pin(async move {
        if let Err(e) = api.update_food(&updated).await {
            log::error!("failed to update food #{}: {}", updated.id, e);
        }
    })
}

/// Remove the plate locally, return the `DELETE /foods/{id}` still to be sent
pub fn delete_food<A: FoodApi + 'static>(api: A, id: u32, apply: impl FnOnce(u32)) -> PendingRequest {
    apply(id);

    Box::pin(async move {
        if let Err(e) = api.delete_food(id).await {
            log::error!("failed to delete food #{}: {}", id, e);
        }
    })
}
