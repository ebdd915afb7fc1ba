use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::product::{
        get::{get_all_products, get_product_by_id},
        post::create_product,
    },
    models::product::Product,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: Option<String>,
}

pub async fn add_product_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Json(payload): Json<CreateProductPayload>,
) -> Result<(StatusCode, Json<Product>), (StatusCode, String)> {
    match create_product(
        payload.name,
        payload.price,
        payload.category,
        payload.description,
        state.postgres.clone(),
    )
    .await
    {
        Ok(product) => Ok((StatusCode::CREATED, Json(product))),
        Err(err) => {
            tracing::error!("Error creating product: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_all_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, (StatusCode, String)> {
    match get_all_products(state.postgres.clone()).await {
        Ok(products) => Ok(Json(products)),
        Err(err) => {
            tracing::error!("Error fetching products: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<Json<Product>, (StatusCode, String)> {
    let product = get_product_by_id(product_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving product: {}", e);
            e.to_response()
        })?;

    Ok(Json(product))
}
