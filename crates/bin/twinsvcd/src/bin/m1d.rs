//! # m1d — products service

use twinsvcd::service::Products;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    twinsvcd::run::<Products>().await
}
