//! Shared types for the FolioOS desktop shell
//!
//! These types are used by both:
//! - The window-manager reducer (pure, testable without a DOM)
//! - Dioxus components (WASM)
//!
//! Serializable with serde for JSON over HTTP

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// Desktop State
// ============================================================================

/// Layout mode of a window.
///
/// A single tagged variant instead of independent minimized/maximized
/// booleans, so the minimized+maximized combination is unrepresentable.
/// `Minimized` remembers whether the window was maximized at the time, so
/// focusing it later restores the pre-minimize layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WindowMode {
    Normal,
    Maximized,
    Minimized { from_maximized: bool },
}

impl Default for WindowMode {
    fn default() -> Self {
        Self::Normal
    }
}

/// Individual window state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowState {
    pub id: String,
    pub app_id: String, // "portfolio", "shop", "journal", etc.
    pub title: String,
    pub icon: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub mode: WindowMode,
}

impl WindowState {
    /// Create a window for an app at the given position, in `Normal` mode
    /// with the app's default size. Ids are UUIDv4; windows are only ever
    /// created serially from user input.
    pub fn new(app: &AppDefinition, x: i32, y: i32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            app_id: app.id.clone(),
            title: app.name.clone(),
            icon: app.icon.clone(),
            x,
            y,
            width: app.default_width,
            height: app.default_height,
            mode: WindowMode::Normal,
        }
    }

    pub fn is_minimized(&self) -> bool {
        matches!(self.mode, WindowMode::Minimized { .. })
    }

    pub fn is_maximized(&self) -> bool {
        self.mode == WindowMode::Maximized
    }
}

/// Desktop state - all windows and the single active window
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DesktopState {
    /// Windows in creation order; never reordered by focus changes.
    pub windows: Vec<WindowState>,
    pub active_window: Option<String>,
}

/// Start-menu grouping for an app entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppCategory {
    Main,
    Secondary,
}

/// A launchable app: start-menu entry, command-palette entry, and the
/// defaults used when a window for it is opened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppDefinition {
    pub id: String,
    pub name: String,
    pub icon: String, // emoji
    pub description: String,
    pub keywords: Vec<String>,
    pub category: AppCategory,
    pub default_width: i32,
    pub default_height: i32,
}

// ============================================================================
// Domain Records
// ============================================================================
//
// Read-only client-side views of server-owned data. List fields (tags, tech
// stack, gallery images) arrive from the API as JSON-serialized strings and
// are deserialized exactly once at the fetch boundary, never at render time.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
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
    pub status: String, // completed, in_progress, planned
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub short_description: Option<String>,
    pub price: f64,
    pub original_price: Option<f64>,
    pub category: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub gallery_images: Vec<String>,
    pub download_url: Option<String>,
    pub file_size: Option<String>,
    pub file_format: Option<String>,
    pub featured: bool,
    pub active: bool,
    /// -1 means unlimited (digital products)
    pub stock_quantity: i32,
    pub sales_count: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Product {
    pub fn has_discount(&self) -> bool {
        self.original_price
            .is_some_and(|original| original > self.price)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub published: bool,
    pub featured: bool,
    /// in minutes
    pub reading_time: Option<i32>,
    pub views: i32,
    pub created_at: Option<NaiveDateTime>,
    pub published_at: Option<NaiveDateTime>,
}

/// Outgoing contact-form submission. name, email and message are required by
/// the server; the rest is optional context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub company: Option<String>,
    pub message: String,
}

/// Server receipt for a stored contact message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub status: String, // new, read, replied, archived
    pub created_at: Option<NaiveDateTime>,
}

// ============================================================================
// Wire Helpers
// ============================================================================

/// Deserialize a JSON-serialized string list (`"[\"a\", \"b\"]"`) as stored
/// by the backend. Lenient: missing, empty, or malformed input yields an
/// empty list rather than an error, matching how the views treat absent tags.
pub fn parse_string_list(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(s) if !s.trim().is_empty() => {
            serde_json::from_str::<Vec<String>>(s).unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_app() -> AppDefinition {
        AppDefinition {
            id: "portfolio".to_string(),
            name: "Portfolio".to_string(),
            icon: "📁".to_string(),
            description: "View my projects and work".to_string(),
            keywords: vec!["projects".to_string(), "work".to_string()],
            category: AppCategory::Main,
            default_width: 800,
            default_height: 600,
        }
    }

    #[test]
    fn window_ids_are_unique() {
        let app = sample_app();
        let a = WindowState::new(&app, 100, 100);
        let b = WindowState::new(&app, 130, 130);
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 36); // UUID length
    }

    #[test]
    fn new_window_uses_app_defaults() {
        let app = sample_app();
        let window = WindowState::new(&app, 100, 130);
        assert_eq!(window.width, 800);
        assert_eq!(window.height, 600);
        assert_eq!(window.mode, WindowMode::Normal);
        assert!(!window.is_minimized());
        assert!(!window.is_maximized());
    }

    #[test]
    fn window_mode_flags() {
        let app = sample_app();
        let mut window = WindowState::new(&app, 0, 0);

        window.mode = WindowMode::Maximized;
        assert!(window.is_maximized());
        assert!(!window.is_minimized());

        window.mode = WindowMode::Minimized {
            from_maximized: true,
        };
        assert!(window.is_minimized());
        assert!(!window.is_maximized());
    }

    #[test]
    fn parse_string_list_accepts_serialized_lists() {
        assert_eq!(
            parse_string_list(Some(r#"["rust", "wasm"]"#)),
            vec!["rust".to_string(), "wasm".to_string()]
        );
    }

    #[test]
    fn parse_string_list_is_lenient() {
        assert!(parse_string_list(None).is_empty());
        assert!(parse_string_list(Some("")).is_empty());
        assert!(parse_string_list(Some("   ")).is_empty());
        assert!(parse_string_list(Some("not json")).is_empty());
        assert!(parse_string_list(Some(r#"{"a": 1}"#)).is_empty());
    }

    #[test]
    fn project_deserializes_backend_timestamps() {
        let json = r#"{
            "id": 7,
            "title": "Desktop Shell",
            "description": "A browser desktop",
            "short_description": null,
            "category": "web",
            "tags": ["rust"],
            "tech_stack": ["dioxus"],
            "image_url": null,
            "demo_url": null,
            "github_url": null,
            "featured": true,
            "status": "completed",
            "created_at": "2025-11-03T09:15:00.412390",
            "updated_at": null
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, 7);
        assert!(project.featured);
        assert!(project.created_at.is_some());
        assert!(project.updated_at.is_none());
    }

    #[test]
    fn product_discount_requires_higher_original_price() {
        let json = r#"{
            "id": 1,
            "name": "Template",
            "description": "A template",
            "short_description": null,
            "price": 19.0,
            "original_price": 29.0,
            "category": "templates",
            "tags": [],
            "image_url": null,
            "gallery_images": [],
            "download_url": null,
            "file_size": null,
            "file_format": null,
            "featured": false,
            "active": true,
            "stock_quantity": -1,
            "sales_count": 12,
            "created_at": null,
            "updated_at": null
        }"#;

        let mut product: Product = serde_json::from_str(json).unwrap();
        assert!(product.has_discount());

        product.original_price = Some(19.0);
        assert!(!product.has_discount());

        product.original_price = None;
        assert!(!product.has_discount());
    }

    #[test]
    fn window_mode_serde_round_trip() {
        let mode = WindowMode::Minimized {
            from_maximized: true,
        };
        let json = serde_json::to_string(&mode).unwrap();
        let back: WindowMode = serde_json::from_str(&json).unwrap();
        assert_eq!(mode, back);
    }
}
