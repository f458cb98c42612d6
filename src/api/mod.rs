//! REST API Bindings
//!
//! Frontend access to the backend's `/foods` resource.

mod foods;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{FoodPlate, NewFoodPlate};

pub use foods::FoodsClient;

/// Operations the dashboard needs from the backend.
///
/// Futures are not `Send`: on wasm32 they wrap browser `fetch` promises.
#[async_trait(?Send)]
pub trait FoodApi {
    /// `GET /foods`
    async fn list_foods(&self) -> Result<Vec<FoodPlate>, ApiError>;

    /// `POST /foods`, returns the stored plate with its assigned id
    async fn create_food(&self, draft: &NewFoodPlate) -> Result<FoodPlate, ApiError>;

    /// `PUT /foods/{id}`, the response body is ignored
    async fn update_food(&self, food: &FoodPlate) -> Result<(), ApiError>;

    /// `DELETE /foods/{id}`, the response body is ignored
    async fn delete_food(&self, id: u32) -> Result<(), ApiError>;
}
