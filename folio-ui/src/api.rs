//! REST client for the portfolio backend.
//!
//! Wire structs mirror the server's JSON (list fields as serialized strings)
//! and are converted once, here, into the typed `shared-types` records. All
//! functions surface failures as human-readable `String`s carrying the HTTP
//! status; callers keep whatever collection they already had.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared_types::{
    parse_string_list, BlogPost, ContactMessage, NewContactMessage, Product, Project,
};
use std::sync::OnceLock;

/// Get the API base URL based on current environment
/// - In development (localhost): the backend dev server on port 5000
/// - In production: same origin under /api
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:5000/api".to_string()
    } else {
        "/api".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

async fn describe_http_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        return format!("HTTP error: {status}");
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({error})");
        }
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({message})");
        }
    }

    format!("HTTP error: {status} ({body})")
}

// ============================================================================
// Envelopes & Queries
// ============================================================================

/// Collection envelope: `{ success, data, count, error }`
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    success: bool,
    data: Option<Vec<T>>,
    #[allow(dead_code)]
    count: Option<i64>,
    error: Option<String>,
}

/// Single-record envelope: `{ success, data, error, message }`
#[derive(Debug, Deserialize)]
struct ItemResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

async fn fetch_list<W, T>(url: &str) -> Result<Vec<T>, String>
where
    W: DeserializeOwned,
    T: From<W>,
{
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: ListResponse<W> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if !data.success {
        return Err(data
            .error
            .unwrap_or_else(|| "API returned success=false".to_string()));
    }

    Ok(data
        .data
        .unwrap_or_default()
        .into_iter()
        .map(T::from)
        .collect())
}

fn unwrap_item<W, T>(data: ItemResponse<W>) -> Result<T, String>
where
    T: From<W>,
{
    if !data.success {
        return Err(data
            .error
            .unwrap_or_else(|| "API returned success=false".to_string()));
    }
    data.data
        .map(T::from)
        .ok_or_else(|| "API returned no data".to_string())
}

/// Optional server-side list filters; the views fetch unfiltered and filter
/// client-side, but the endpoints accept these.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<u32>,
}

impl ListQuery {
    fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            let encoded = js_sys::encode_uri_component(category)
                .as_string()
                .unwrap_or_else(|| category.clone());
            params.push(format!("category={encoded}"));
        }
        if let Some(featured) = self.featured {
            params.push(format!("featured={featured}"));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Deserialize)]
struct ApiProject {
    id: i64,
    title: String,
    description: String,
    short_description: Option<String>,
    category: String,
    tags: Option<String>,
    tech_stack: Option<String>,
    image_url: Option<String>,
    demo_url: Option<String>,
    github_url: Option<String>,
    featured: bool,
    status: String,
    created_at: Option<chrono::NaiveDateTime>,
    updated_at: Option<chrono::NaiveDateTime>,
}

impl From<ApiProject> for Project {
    fn from(p: ApiProject) -> Self {
        Project {
            id: p.id,
            title: p.title,
            description: p.description,
            short_description: p.short_description,
            category: p.category,
            tags: parse_string_list(p.tags.as_deref()),
            tech_stack: parse_string_list(p.tech_stack.as_deref()),
            image_url: p.image_url,
            demo_url: p.demo_url,
            github_url: p.github_url,
            featured: p.featured,
            status: p.status,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Outgoing project payload for create/update. Unlike stored records, list
/// fields go out as real JSON arrays; the server serializes them itself.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub tech_stack: Vec<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub status: Option<String>,
}

pub async fn fetch_projects(query: &ListQuery) -> Result<Vec<Project>, String> {
    let url = format!("{}/projects{}", api_base(), query.to_query_string());
    fetch_list::<ApiProject, Project>(&url).await
}

pub async fn create_project(payload: &ProjectPayload) -> Result<Project, String> {
    let url = format!("{}/projects", api_base());

    let response = Request::post(&url)
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: ItemResponse<ApiProject> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;
    unwrap_item(data)
}

pub async fn update_project(id: i64, payload: &ProjectPayload) -> Result<Project, String> {
    let url = format!("{}/projects/{}", api_base(), id);

    let response = Request::put(&url)
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: ItemResponse<ApiProject> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;
    unwrap_item(data)
}

pub async fn delete_project(id: i64) -> Result<(), String> {
    let url = format!("{}/projects/{}", api_base(), id);

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    #[derive(Debug, Deserialize)]
    struct Response {
        success: bool,
        error: Option<String>,
    }

    let data: Response = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if !data.success {
        return Err(data.error.unwrap_or_else(|| "Unknown error".to_string()));
    }

    Ok(())
}

// ============================================================================
// Blog
// ============================================================================

#[derive(Debug, Deserialize)]
struct ApiBlogPost {
    id: i64,
    title: String,
    slug: String,
    content: String,
    excerpt: Option<String>,
    category: String,
    tags: Option<String>,
    featured_image: Option<String>,
    published: bool,
    featured: bool,
    reading_time: Option<i32>,
    views: Option<i32>,
    created_at: Option<chrono::NaiveDateTime>,
    published_at: Option<chrono::NaiveDateTime>,
}

impl From<ApiBlogPost> for BlogPost {
    fn from(p: ApiBlogPost) -> Self {
        BlogPost {
            id: p.id,
            title: p.title,
            slug: p.slug,
            content: p.content,
            excerpt: p.excerpt,
            category: p.category,
            tags: parse_string_list(p.tags.as_deref()),
            featured_image: p.featured_image,
            published: p.published,
            featured: p.featured,
            reading_time: p.reading_time,
            views: p.views.unwrap_or(0),
            created_at: p.created_at,
            published_at: p.published_at,
        }
    }
}

pub async fn fetch_posts(query: &ListQuery) -> Result<Vec<BlogPost>, String> {
    let url = format!("{}/blog/posts{}", api_base(), query.to_query_string());
    fetch_list::<ApiBlogPost, BlogPost>(&url).await
}

/// Fetch one post by slug; the server increments its view counter.
pub async fn fetch_post_by_slug(slug: &str) -> Result<BlogPost, String> {
    let encoded = js_sys::encode_uri_component(slug)
        .as_string()
        .unwrap_or_else(|| slug.to_string());
    let url = format!("{}/blog/posts/{}", api_base(), encoded);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: ItemResponse<ApiBlogPost> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;
    unwrap_item(data)
}

// ============================================================================
// Shop
// ============================================================================

#[derive(Debug, Deserialize)]
struct ApiProduct {
    id: i64,
    name: String,
    description: String,
    short_description: Option<String>,
    price: f64,
    original_price: Option<f64>,
    category: String,
    tags: Option<String>,
    image_url: Option<String>,
    gallery_images: Option<String>,
    download_url: Option<String>,
    file_size: Option<String>,
    file_format: Option<String>,
    featured: bool,
    active: bool,
    stock_quantity: Option<i32>,
    sales_count: Option<i32>,
    created_at: Option<chrono::NaiveDateTime>,
    updated_at: Option<chrono::NaiveDateTime>,
}

impl From<ApiProduct> for Product {
    fn from(p: ApiProduct) -> Self {
        Product {
            id: p.id,
            name: p.name,
            description: p.description,
            short_description: p.short_description,
            price: p.price,
            original_price: p.original_price,
            category: p.category,
            tags: parse_string_list(p.tags.as_deref()),
            image_url: p.image_url,
            gallery_images: parse_string_list(p.gallery_images.as_deref()),
            download_url: p.download_url,
            file_size: p.file_size,
            file_format: p.file_format,
            featured: p.featured,
            active: p.active,
            stock_quantity: p.stock_quantity.unwrap_or(-1),
            sales_count: p.sales_count.unwrap_or(0),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

pub async fn fetch_products(query: &ListQuery) -> Result<Vec<Product>, String> {
    let url = format!("{}/shop/products{}", api_base(), query.to_query_string());
    fetch_list::<ApiProduct, Product>(&url).await
}

pub async fn fetch_product(id: i64) -> Result<Product, String> {
    let url = format!("{}/shop/products/{}", api_base(), id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: ItemResponse<ApiProduct> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;
    unwrap_item(data)
}

/// Record a purchase. The server increments the sales count, decrements
/// finite stock, and returns the updated product.
pub async fn record_purchase(id: i64) -> Result<Product, String> {
    let url = format!("{}/shop/products/{}/purchase", api_base(), id);

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: ItemResponse<ApiProduct> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;
    unwrap_item(data)
}

// ============================================================================
// Contact
// ============================================================================

#[derive(Debug, Deserialize)]
struct ApiContactMessage {
    id: i64,
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
    status: Option<String>,
    created_at: Option<chrono::NaiveDateTime>,
}

impl From<ApiContactMessage> for ContactMessage {
    fn from(m: ApiContactMessage) -> Self {
        ContactMessage {
            id: m.id,
            name: m.name,
            email: m.email,
            subject: m.subject,
            message: m.message,
            status: m.status.unwrap_or_else(|| "new".to_string()),
            created_at: m.created_at,
        }
    }
}

pub async fn send_contact_message(
    message: &NewContactMessage,
) -> Result<ContactMessage, String> {
    let url = format!("{}/contact/messages", api_base());

    let response = Request::post(&url)
        .json(message)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: ItemResponse<ApiContactMessage> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;
    unwrap_item(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_project_deserializes_serialized_lists_once() {
        let json = r#"{
            "id": 3,
            "title": "Pipeline",
            "description": "ETL pipeline",
            "short_description": "ETL",
            "category": "data",
            "tags": "[\"etl\", \"rust\"]",
            "tech_stack": "[\"dioxus\"]",
            "image_url": null,
            "demo_url": null,
            "github_url": null,
            "featured": false,
            "status": "in_progress",
            "created_at": null,
            "updated_at": null
        }"#;

        let wire: ApiProject = serde_json::from_str(json).unwrap();
        let project = Project::from(wire);
        assert_eq!(project.tags, vec!["etl".to_string(), "rust".to_string()]);
        assert_eq!(project.tech_stack, vec!["dioxus".to_string()]);
    }

    #[test]
    fn wire_product_defaults_missing_counters() {
        let json = r#"{
            "id": 1,
            "name": "Icons",
            "description": "Icon pack",
            "short_description": null,
            "price": 9.0,
            "original_price": null,
            "category": "assets",
            "tags": "broken json",
            "image_url": null,
            "gallery_images": null,
            "download_url": null,
            "file_size": null,
            "file_format": null,
            "featured": true,
            "active": true,
            "stock_quantity": null,
            "sales_count": null,
            "created_at": null,
            "updated_at": null
        }"#;

        let wire: ApiProduct = serde_json::from_str(json).unwrap();
        let product = Product::from(wire);
        assert!(product.tags.is_empty());
        assert_eq!(product.stock_quantity, -1);
        assert_eq!(product.sales_count, 0);
    }
}
