use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{CreateProduct, Product},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let store = state.store.read().await;
    let products = store.list();

    info!(count = products.len(), "Listed products");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "total": products.len(),
            "products": products,
        })),
    ))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let store = state.store.read().await;

    // An unparseable id cannot match any stored record, so it falls through
    // to the same not-found response as an unknown one.
    let product = Uuid::parse_str(&id)
        .ok()
        .and_then(|id| store.get(id))
        .cloned()
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    info!(id = %product.id, "Fetched product");

    Ok(Json(product))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    // Required means present and non-empty for the name; a price of 0 is a
    // legitimate value and counts as provided.
    let name = payload.name.filter(|n| !n.is_empty());

    let (name, price) = match (name, payload.price) {
        (Some(name), Some(price)) => (name, price),
        _ => {
            return Err(AppError::BadRequest(
                "Name and price are required".to_string(),
            ))
        }
    };

    let product = Product::new(
        name,
        payload.description.unwrap_or_default(),
        price,
        payload.stock.unwrap_or(0),
    );

    let mut store = state.store.write().await;
    store.append(product.clone());

    info!(id = %product.id, name = %product.name, total = store.len(), "Created product");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Product created successfully",
            "product": product,
        })),
    ))
}
