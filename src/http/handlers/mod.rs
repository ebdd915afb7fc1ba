pub mod product;
pub mod review;
pub mod user;

pub use product::{add_product_handler, get_all_products_handler, get_product_handler};

pub use review::{
    create_review_handler, delete_review_handler, get_product_reviews_handler,
    toggle_helpful_handler, update_review_handler,
};

pub use user::{create_user_handler, get_user_handler};
