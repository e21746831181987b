//! # m2d — orders service

use twinsvcd::service::Orders;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    twinsvcd::run::<Orders>().await
}
