//! The two services this workspace ships, and what sets them apart.

use twinsvc_app::seed::SeedMode;
use twinsvc_domain::order::{NewOrder, Order, seed_orders};
use twinsvc_domain::product::{NewProduct, Product, seed_products};
use twinsvc_domain::record::Record;

/// Static facts about one service binary.
#[derive(Debug, Clone, Copy)]
pub struct ServiceProfile {
    /// Short name, also the config file stem and env var prefix (`m1`, `m2`).
    pub name: &'static str,
    /// Body of `GET /health`.
    pub health_message: &'static str,
    /// Port used when neither the config file nor the environment sets one.
    pub default_port: u16,
    /// Seed policy used when the configuration does not override it.
    pub default_seed_mode: SeedMode,
}

impl ServiceProfile {
    /// Config file looked up in the working directory, e.g. `m1.toml`.
    #[must_use]
    pub fn config_file(&self) -> String {
        format!("{}.toml", self.name)
    }

    /// Service-scoped environment variable name, e.g. `M1_PORT`.
    #[must_use]
    pub fn env_var(&self, key: &str) -> String {
        format!("{}_{key}", self.name.to_ascii_uppercase())
    }
}

/// A service: one record collection plus its profile and seed records.
pub trait Service {
    type Record: Record;

    const PROFILE: ServiceProfile;

    /// Records inserted by the startup seed routine.
    fn seed_records() -> Vec<<Self::Record as Record>::Draft>;
}

/// `m1`: products, seeded on every start.
pub struct Products;

/// `m2`: orders, seeded only into an empty store.
pub struct Orders;

impl Service for Products {
    type Record = Product;

    const PROFILE: ServiceProfile = ServiceProfile {
        name: "m1",
        health_message: "m1 ok",
        default_port: 5001,
        default_seed_mode: SeedMode::AlwaysAppend,
    };

    fn seed_records() -> Vec<NewProduct> {
        seed_products()
    }
}

impl Service for Orders {
    type Record = Order;

    const PROFILE: ServiceProfile = ServiceProfile {
        name: "m2",
        health_message: "m2 ok",
        default_port: 5002,
        default_seed_mode: SeedMode::SeedIfEmpty,
    };

    fn seed_records() -> Vec<NewOrder> {
        seed_orders()
    }
}
