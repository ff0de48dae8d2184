//! Calls to the marketplace API.
//!
//! Every collection response goes through `common::normalize` so pages only
//! ever see typed, possibly empty, lists. Transport and status failures are
//! reported as [`ApiError`].

use common::model::category::Category;
use common::model::farmer::Farmer;
use common::model::order::Order;
use common::model::product::{Product, ProductDraft};
use common::model::user::SessionUser;
use common::normalize::{
    normalize_entries, normalize_records, CATEGORY_KEYS, FARMER_KEYS, ORDER_KEYS, PRODUCT_KEYS,
};
use gloo_net::http::{Request, Response};
use log::debug;
use serde_json::Value;
use thiserror::Error;
use web_sys::{File, FormData};

use crate::config;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[source] gloo_net::Error),

    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unreadable response: {0}")]
    Decode(#[source] gloo_net::Error),

    #[error("could not build request body: {0}")]
    Payload(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }
}

async fn get_json(path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
    let url = config::api_url(path);
    debug!("GET {}", url);

    let mut request = Request::get(&url);
    if !query.is_empty() {
        request = request.query(query.iter().copied());
    }
    let response = request.send().await.map_err(ApiError::Network)?;

    read_json(response).await
}

async fn read_json(response: Response) -> Result<Value, ApiError> {
    ensure_ok(&response).await?;
    response.json::<Value>().await.map_err(ApiError::Decode)
}

async fn ensure_ok(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status(),
        body: response.text().await.unwrap_or_default(),
    })
}

pub async fn fetch_farmers() -> Result<Vec<Farmer>, ApiError> {
    let raw = get_json(config::FARMERS_PATH, &[]).await?;
    Ok(normalize_records(&raw, FARMER_KEYS))
}

/// Orders placed by the signed-in consumer.
pub async fn fetch_my_orders() -> Result<Vec<Order>, ApiError> {
    let raw = get_json(config::MY_ORDERS_PATH, &[]).await?;
    Ok(normalize_entries(&raw, ORDER_KEYS))
}

/// Orders received by the signed-in farmer.
pub async fn fetch_farmer_orders() -> Result<Vec<Order>, ApiError> {
    let raw = get_json(config::FARMER_ORDERS_PATH, &[]).await?;
    Ok(normalize_entries(&raw, ORDER_KEYS))
}

pub async fn fetch_products(farmer_id: &str) -> Result<Vec<Product>, ApiError> {
    let raw = get_json(config::PRODUCTS_PATH, &[("farmer", farmer_id)]).await?;
    Ok(normalize_records(&raw, PRODUCT_KEYS))
}

pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    let raw = get_json(config::CATEGORIES_PATH, &[]).await?;
    Ok(normalize_records(&raw, CATEGORY_KEYS))
}

/// The signed-in user, `None` when nobody is signed in.
pub async fn fetch_session() -> Result<Option<SessionUser>, ApiError> {
    match get_json(config::SESSION_PATH, &[]).await {
        Ok(raw) => Ok(SessionUser::from_payload(&raw)),
        Err(err) if err.is_unauthorized() => Ok(None),
        Err(err) => Err(err),
    }
}

/// Submits a validated draft as `multipart/form-data`, one `images` part per
/// attached file.
pub async fn create_product(draft: &ProductDraft, images: &[File]) -> Result<(), ApiError> {
    let form = product_form(draft, images)?;
    let url = config::api_url(config::PRODUCTS_PATH);
    debug!("POST {} with {} image(s)", url, images.len());

    let response = Request::post(&url)
        .body(form)
        .map_err(ApiError::Network)?
        .send()
        .await
        .map_err(ApiError::Network)?;

    ensure_ok(&response).await
}

fn product_form(draft: &ProductDraft, images: &[File]) -> Result<FormData, ApiError> {
    let payload_err = |err: wasm_bindgen::JsValue| ApiError::Payload(format!("{:?}", err));

    let form = FormData::new().map_err(payload_err)?;
    for (name, value) in draft.form_fields() {
        form.append_with_str(name, &value).map_err(payload_err)?;
    }
    for image in images {
        form.append_with_blob_and_filename("images", image, &image.name())
            .map_err(payload_err)?;
    }
    Ok(form)
}
