//! Food Endpoints
//!
//! HTTP implementation of [`FoodApi`] on top of reqwest.

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;

use super::FoodApi;
use crate::error::ApiError;
use crate::models::{FoodPlate, NewFoodPlate};

const FOODS_PATH: &str = "foods";

/// Stateless client for the foods resource; cloning shares the connection pool
#[derive(Debug, Clone)]
pub struct FoodsClient {
    base_url: String,
    http: reqwest::Client,
}

impl FoodsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        join_url(&self.base_url, FOODS_PATH)
    }

    fn item_url(&self, id: u32) -> String {
        join_url(&self.base_url, &format!("{}/{}", FOODS_PATH, id))
    }
}

#[async_trait(?Send)]
impl FoodApi for FoodsClient {
    async fn list_foods(&self) -> Result<Vec<FoodPlate>, ApiError> {
        let response = self.http.get(self.collection_url()).send().await?;
        decode(response).await
    }

    async fn create_food(&self, draft: &NewFoodPlate) -> Result<FoodPlate, ApiError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    async fn update_food(&self, food: &FoodPlate) -> Result<(), ApiError> {
        let response = self
            .http
            .put(self.item_url(food.id))
            .json(food)
            .send()
            .await?;
        ensure_success(response).await.map(drop)
    }

    async fn delete_food(&self, id: u32) -> Result<(), ApiError> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        ensure_success(response).await.map(drop)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::from_response(response).await)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = ensure_success(response).await?.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_single_slash() {
        assert_eq!(join_url("http://localhost:3333", "foods"), "http://localhost:3333/foods");
        assert_eq!(join_url("http://localhost:3333/", "/foods"), "http://localhost:3333/foods");
        assert_eq!(join_url("https://api.example.com/v1//", "foods/2"), "https://api.example.com/v1/foods/2");
    }

    #[test]
    fn test_resource_urls() {
        let client = FoodsClient::new("http://localhost:3333/");
        assert_eq!(client.base_url(), "http://localhost:3333/");
        assert_eq!(client.collection_url(), "http://localhost:3333/foods");
        assert_eq!(client.item_url(7), "http://localhost:3333/foods/7");
    }
}
