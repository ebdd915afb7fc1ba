#[tokio::main]
async fn main() {
    product_review_be::start_server().await;
}
