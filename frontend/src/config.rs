//! Build-time configuration of the client.

use log::LevelFilter;

/// Base path of the marketplace API. Override at build time with
/// `FARMGATE_API_BASE` (e.g. `https://market.example.com/api`).
pub const API_BASE: &str = match option_env!("FARMGATE_API_BASE") {
    Some(base) => base,
    None => "/api",
};

pub const FARMERS_PATH: &str = "/farmers";
pub const MY_ORDERS_PATH: &str = "/orders/my-orders";
pub const FARMER_ORDERS_PATH: &str = "/orders/farmer-orders";
pub const PRODUCTS_PATH: &str = "/products";
pub const CATEGORIES_PATH: &str = "/categories";
pub const SESSION_PATH: &str = "/auth/me";

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3000;

pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE.trim_end_matches('/'), path)
}
