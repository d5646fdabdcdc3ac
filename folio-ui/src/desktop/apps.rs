use shared_types::{AppCategory, AppDefinition};

/// Every launchable app, in start-menu order.
pub fn core_apps() -> Vec<AppDefinition> {
    vec![
        AppDefinition {
            id: "portfolio".to_string(),
            name: "Portfolio".to_string(),
            icon: "📁".to_string(),
            description: "View my projects and work".to_string(),
            keywords: str_vec(&["portfolio", "projects", "work", "showcase"]),
            category: AppCategory::Main,
            default_width: 800,
            default_height: 600,
        },
        AppDefinition {
            id: "shop".to_string(),
            name: "Shop".to_string(),
            icon: "🛍️".to_string(),
            description: "Digital products and templates".to_string(),
            keywords: str_vec(&["shop", "store", "products", "templates", "buy"]),
            category: AppCategory::Main,
            default_width: 860,
            default_height: 620,
        },
        AppDefinition {
            id: "journal".to_string(),
            name: "Journal".to_string(),
            icon: "📓".to_string(),
            description: "Blog posts and articles".to_string(),
            keywords: str_vec(&["journal", "blog", "articles", "writing", "posts"]),
            category: AppCategory::Main,
            default_width: 780,
            default_height: 580,
        },
        AppDefinition {
            id: "contact".to_string(),
            name: "Contact".to_string(),
            icon: "✉️".to_string(),
            description: "Get in touch".to_string(),
            keywords: str_vec(&["contact", "email", "message", "reach out"]),
            category: AppCategory::Main,
            default_width: 620,
            default_height: 560,
        },
        AppDefinition {
            id: "about".to_string(),
            name: "About".to_string(),
            icon: "👤".to_string(),
            description: "Learn more about me".to_string(),
            keywords: str_vec(&["about", "bio", "me", "profile"]),
            category: AppCategory::Secondary,
            default_width: 560,
            default_height: 480,
        },
        AppDefinition {
            id: "settings".to_string(),
            name: "Settings".to_string(),
            icon: "⚙️".to_string(),
            description: "System preferences".to_string(),
            keywords: str_vec(&["settings", "preferences", "theme"]),
            category: AppCategory::Secondary,
            default_width: 560,
            default_height: 420,
        },
    ]
}

fn str_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
