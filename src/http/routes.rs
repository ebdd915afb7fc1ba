use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{
    http::handlers::{
        add_product_handler, create_review_handler, create_user_handler, delete_review_handler,
        get_all_products_handler, get_product_handler, get_product_reviews_handler,
        get_user_handler, toggle_helpful_handler, update_review_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", post(create_user_handler))
        .route("/users/{user_id}", get(get_user_handler))
        .route(
            "/products",
            post(add_product_handler).get(get_all_products_handler),
        )
        .route("/products/{product_id}", get(get_product_handler))
        .route(
            "/products/{product_id}/reviews",
            get(get_product_reviews_handler),
        )
        .route("/reviews", post(create_review_handler))
        .route(
            "/reviews/{review_id}",
            put(update_review_handler).delete(delete_review_handler),
        )
        .route("/reviews/{review_id}/helpful", post(toggle_helpful_handler))
        .with_state(state)
}
