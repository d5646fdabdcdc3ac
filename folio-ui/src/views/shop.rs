//! Digital shop: fetched products with client-side filtering, a local
//! unpersisted cart, and a purchase action that calls the API and then drops
//! the item from the cart. No inventory reconciliation.

use std::cmp::Ordering;

use dioxus::prelude::*;
use shared_types::Product;

use crate::api::{self, ListQuery};
use crate::views::status::{ErrorState, LoadingState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShopSort {
    #[default]
    Featured,
    Newest,
    Popular,
    PriceLow,
    PriceHigh,
}

impl ShopSort {
    pub fn from_key(key: &str) -> Self {
        match key {
            "newest" => Self::Newest,
            "popular" => Self::Popular,
            "price_low" => Self::PriceLow,
            "price_high" => Self::PriceHigh,
            _ => Self::Featured,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

/// Add a product to the cart; an already-carted product gets its quantity
/// bumped instead of a second line item.
pub fn add_to_cart(cart: &mut Vec<CartItem>, product: &Product) {
    if let Some(item) = cart.iter_mut().find(|item| item.product.id == product.id) {
        item.quantity += 1;
    } else {
        cart.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
    }
}

pub fn remove_from_cart(cart: &mut Vec<CartItem>, product_id: i64) {
    cart.retain(|item| item.product.id != product_id);
}

pub fn cart_count(cart: &[CartItem]) -> u32 {
    cart.iter().map(|item| item.quantity).sum()
}

pub fn in_cart(cart: &[CartItem], product_id: i64) -> bool {
    cart.iter().any(|item| item.product.id == product_id)
}

/// `"all"` plus the distinct categories of active products, in source order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut out = vec!["all".to_string()];
    for product in products.iter().filter(|p| p.active) {
        if !out.contains(&product.category) {
            out.push(product.category.clone());
        }
    }
    out
}

/// Active products only, filtered by category and search, then sorted. All
/// sorts are stable.
pub fn visible_products(
    products: &[Product],
    category: &str,
    query: &str,
    sort: ShopSort,
) -> Vec<Product> {
    let query = query.trim().to_lowercase();

    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| p.active)
        .filter(|p| category == "all" || p.category == category)
        .filter(|p| {
            query.is_empty()
                || p.name.to_lowercase().contains(&query)
                || p.description.to_lowercase().contains(&query)
                || p.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .cloned()
        .collect();

    match sort {
        ShopSort::Featured => filtered.sort_by_key(|p| !p.featured),
        ShopSort::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ShopSort::Popular => filtered.sort_by(|a, b| b.sales_count.cmp(&a.sales_count)),
        ShopSort::PriceLow => filtered.sort_by(|a, b| {
            a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
        }),
        ShopSort::PriceHigh => filtered.sort_by(|a, b| {
            b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal)
        }),
    }

    filtered
}

fn discount_percent(product: &Product) -> Option<i32> {
    let original = product.original_price?;
    if original <= product.price {
        return None;
    }
    Some(((1.0 - product.price / original) * 100.0).round() as i32)
}

async fn load_products(
    mut products: Signal<Vec<Product>>,
    mut loading: Signal<bool>,
    mut error: Signal<Option<String>>,
) {
    loading.set(true);

    match api::fetch_products(&ListQuery::default()).await {
        Ok(list) => {
            products.set(list);
            error.set(None);
        }
        Err(e) => {
            error.set(Some(e));
        }
    }

    loading.set(false);
}

#[component]
pub fn ShopView() -> Element {
    let products = use_signal(Vec::<Product>::new);
    let loading = use_signal(|| true);
    let error = use_signal(|| None::<String>);
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| "all".to_string());
    let mut sort = use_signal(ShopSort::default);
    let mut selected = use_signal(|| None::<Product>);
    let cart = use_signal(Vec::<CartItem>::new);
    let mut notice = use_signal(|| None::<String>);

    let reload = use_callback(move |_: ()| {
        spawn(async move {
            load_products(products, loading, error).await;
        });
    });

    use_effect(move || {
        reload.call(());
    });

    let add_to_cart_cb = use_callback(move |product: Product| {
        let mut cart = cart;
        add_to_cart(&mut cart.write(), &product);
    });

    // Records the purchase, then drops the item from the cart. There is no
    // transactional guarantee between the two steps.
    let purchase_cb = use_callback(move |product: Product| {
        let mut cart = cart;
        let mut selected = selected;
        spawn(async move {
            match api::record_purchase(product.id).await {
                Ok(updated) => {
                    remove_from_cart(&mut cart.write(), updated.id);
                    selected.set(None);
                    notice.set(Some(format!(
                        "Thank you for purchasing {}! A download link is on its way.",
                        updated.name
                    )));
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Purchase failed: {}", e);
                    notice.set(Some(format!("Purchase failed: {e}")));
                }
            }
        });
    });

    let select_product = use_callback(move |product: Product| {
        selected.set(Some(product));
    });

    let close_modal = use_callback(move |_: ()| {
        selected.set(None);
    });

    let source = products.read().clone();
    let visible = visible_products(&source, &category(), &search(), sort());
    let category_options: Vec<(String, String)> = categories(&source)
        .into_iter()
        .map(|c| {
            let label = if c == "all" {
                "All Categories".to_string()
            } else {
                c.clone()
            };
            (c, label)
        })
        .collect();
    let product_count = source.iter().filter(|p| p.active).count();
    let cart_total = cart_count(&cart.read());
    let cart_snapshot = cart.read().clone();

    rsx! {
        div {
            style: "height: 100%; display: flex; flex-direction: column;",

            div {
                style: "padding: 1.25rem 1.5rem; border-bottom: 1px solid var(--border-color, #334155);",
                div {
                    style: "display: flex; align-items: baseline; justify-content: space-between; margin-bottom: 1rem;",
                    div {
                        h1 { style: "margin: 0 0 0.25rem 0; font-size: 1.4rem; color: var(--text-primary, white);", "Digital Shop" }
                        p { style: "margin: 0; font-size: 0.85rem; color: var(--text-secondary, #94a3b8);", "Premium templates, tools, and resources" }
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 1rem;",
                        span { style: "font-size: 0.85rem; color: var(--text-muted, #64748b);", "{product_count} products" }
                        if cart_total > 0 {
                            span {
                                style: "padding: 0.25rem 0.6rem; background: var(--accent-bg, #3b82f6); color: var(--accent-text, white); border-radius: 999px; font-size: 0.8rem; font-weight: 600;",
                                "🛒 {cart_total}"
                            }
                        }
                    }
                }

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 0.75rem;",
                    input {
                        style: "flex: 1; min-width: 12rem; padding: 0.5rem 0.75rem; background: var(--input-bg, #1f2937); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); outline: none;",
                        placeholder: "Search products...",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                    }
                    select {
                        style: "padding: 0.5rem 0.75rem; background: var(--input-bg, #1f2937); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px);",
                        onchange: move |e| category.set(e.value()),
                        for (value, label) in category_options {
                            option {
                                value: "{value}",
                                selected: value == category(),
                                "{label}"
                            }
                        }
                    }
                    select {
                        style: "padding: 0.5rem 0.75rem; background: var(--input-bg, #1f2937); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px);",
                        onchange: move |e| sort.set(ShopSort::from_key(&e.value())),
                        option { value: "featured", selected: sort() == ShopSort::Featured, "Featured" }
                        option { value: "newest", selected: sort() == ShopSort::Newest, "Newest" }
                        option { value: "popular", selected: sort() == ShopSort::Popular, "Most Popular" }
                        option { value: "price_low", selected: sort() == ShopSort::PriceLow, "Price: Low to High" }
                        option { value: "price_high", selected: sort() == ShopSort::PriceHigh, "Price: High to Low" }
                    }
                }
            }

            if let Some(message) = notice.read().clone() {
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; gap: 1rem; padding: 0.6rem 1.5rem; background: var(--hover-bg, rgba(255,255,255,0.06)); border-bottom: 1px solid var(--border-color, #334155); font-size: 0.85rem; color: var(--text-secondary, #94a3b8);",
                    span { "{message}" }
                    button {
                        style: "background: transparent; border: none; color: var(--text-muted, #64748b); cursor: pointer;",
                        onclick: move |_| notice.set(None),
                        "×"
                    }
                }
            }

            div {
                style: "flex: 1; overflow-y: auto; padding: 1.5rem;",

                if loading() && product_count == 0 {
                    LoadingState { label: "Loading products...".to_string() }
                } else if let Some(err) = error.read().clone() {
                    ErrorState { error: "Error loading products: {err}", on_retry: reload }
                } else if visible.is_empty() {
                    div {
                        style: "text-align: center; padding: 3rem 1rem; color: var(--text-muted, #64748b);",
                        p { style: "margin: 0; font-size: 1.1rem;", "No products found" }
                        p { style: "margin: 0.25rem 0 0 0; font-size: 0.85rem;", "Try adjusting your search or filters" }
                    }
                } else {
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem;",
                        for product in visible.iter() {
                            ProductCard {
                                key: "{product.id}",
                                product: product.clone(),
                                carted: in_cart(&cart_snapshot, product.id),
                                on_select: select_product,
                                on_add_to_cart: add_to_cart_cb,
                                on_purchase: purchase_cb,
                            }
                        }
                    }
                }
            }

            if let Some(product) = selected() {
                ProductModal {
                    product,
                    on_close: close_modal,
                    on_add_to_cart: add_to_cart_cb,
                    on_purchase: purchase_cb,
                }
            }
        }
    }
}

#[component]
fn ProductCard(
    product: Product,
    carted: bool,
    on_select: Callback<Product>,
    on_add_to_cart: Callback<Product>,
    on_purchase: Callback<Product>,
) -> Element {
    let product_for_click = product.clone();
    let product_for_cart = product.clone();
    let product_for_buy = product.clone();
    let summary = product
        .short_description
        .clone()
        .unwrap_or_else(|| product.description.clone());
    let discount = discount_percent(&product);
    let extra_tags = product.tags.len().saturating_sub(2);
    let cart_style = if carted {
        "flex: 1; padding: 0.5rem; background: transparent; color: var(--success-bg, #10b981); border: 1px solid var(--success-bg, #10b981); border-radius: var(--radius-md, 8px); font-weight: 600; font-size: 0.8rem; cursor: pointer;"
    } else {
        "flex: 1; padding: 0.5rem; background: var(--accent-bg, #3b82f6); color: var(--accent-text, white); border: none; border-radius: var(--radius-md, 8px); font-weight: 600; font-size: 0.8rem; cursor: pointer;"
    };

    rsx! {
        div {
            class: "app-card",
            style: "display: flex; flex-direction: column; gap: 0.6rem; padding: 1rem; background: var(--window-bg, #1f2937); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-lg, 12px); cursor: pointer;",
            onclick: move |_| on_select.call(product_for_click.clone()),

            div {
                style: "display: flex; align-items: center; gap: 0.4rem;",
                if product.featured {
                    span {
                        style: "padding: 0.15rem 0.5rem; background: var(--warning-bg, #f59e0b); color: #111827; border-radius: var(--radius-sm, 4px); font-size: 0.7rem; font-weight: 700;",
                        "FEATURED"
                    }
                }
                if let Some(percent) = discount {
                    span {
                        style: "padding: 0.15rem 0.5rem; background: var(--danger-bg, #ef4444); color: white; border-radius: var(--radius-sm, 4px); font-size: 0.7rem; font-weight: 700;",
                        "-{percent}%"
                    }
                }
            }

            h3 { style: "margin: 0; font-size: 1rem; color: var(--text-primary, white);", "{product.name}" }
            p { style: "margin: 0; font-size: 0.85rem; color: var(--text-secondary, #94a3b8);", "{summary}" }

            div {
                style: "display: flex; align-items: baseline; justify-content: space-between;",
                div {
                    style: "display: flex; align-items: baseline; gap: 0.4rem;",
                    span { style: "font-size: 1.3rem; font-weight: 700; color: var(--text-primary, white);", "${product.price}" }
                    if let Some(original) = product.original_price.filter(|original| *original > product.price) {
                        span { style: "font-size: 0.8rem; color: var(--text-muted, #64748b); text-decoration: line-through;", "${original}" }
                    }
                }
                span { style: "font-size: 0.75rem; color: var(--text-muted, #64748b);", "⬇ {product.sales_count} sales" }
            }

            if !product.tags.is_empty() {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 0.35rem;",
                    for tag in product.tags.iter().take(2) {
                        span {
                            style: "padding: 0.15rem 0.5rem; background: var(--hover-bg, rgba(255,255,255,0.1)); border-radius: 999px; font-size: 0.7rem; color: var(--text-secondary, #94a3b8);",
                            "{tag}"
                        }
                    }
                    if extra_tags > 0 {
                        span {
                            style: "padding: 0.15rem 0.5rem; border-radius: 999px; font-size: 0.7rem; color: var(--text-muted, #64748b);",
                            "+{extra_tags}"
                        }
                    }
                }
            }

            div {
                style: "display: flex; gap: 0.5rem; margin-top: auto;",
                button {
                    style: "{cart_style}",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_add_to_cart.call(product_for_cart.clone());
                    },
                    if carted { "In Cart" } else { "Add to Cart" }
                }
                button {
                    style: "padding: 0.5rem 0.9rem; background: var(--hover-bg, rgba(255,255,255,0.1)); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); font-weight: 600; font-size: 0.8rem; cursor: pointer;",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_purchase.call(product_for_buy.clone());
                    },
                    "Buy"
                }
            }
        }
    }
}

#[component]
fn ProductModal(
    product: Product,
    on_close: Callback<()>,
    on_add_to_cart: Callback<Product>,
    on_purchase: Callback<Product>,
) -> Element {
    let product_for_cart = product.clone();
    let product_for_buy = product.clone();
    let file_format = product
        .file_format
        .clone()
        .unwrap_or_else(|| "Digital".to_string());
    let file_size = product.file_size.clone().unwrap_or_else(|| "N/A".to_string());
    let stock = if product.stock_quantity == -1 {
        "Unlimited".to_string()
    } else {
        product.stock_quantity.to_string()
    };

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: var(--overlay-bg, rgba(0,0,0,0.5)); z-index: 80; display: flex; align-items: center; justify-content: center; padding: 1.5rem;",
            onclick: move |_| on_close.call(()),

            div {
                style: "width: 100%; max-width: 42rem; max-height: 90vh; overflow-y: auto; background: var(--panel-bg, #0b1220); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-lg, 12px); padding: 1.5rem;",
                onclick: move |e| e.stop_propagation(),

                div {
                    style: "display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 0.75rem;",
                    div {
                        h2 { style: "margin: 0 0 0.25rem 0; color: var(--text-primary, white);", "{product.name}" }
                        p { style: "margin: 0; font-size: 0.85rem; color: var(--text-muted, #64748b);", "{product.category}" }
                    }
                    button {
                        style: "padding: 0.25rem 0.6rem; background: var(--hover-bg, rgba(255,255,255,0.1)); color: var(--text-secondary, #94a3b8); border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-size: 1rem;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div {
                    style: "display: flex; align-items: baseline; gap: 0.6rem; margin-bottom: 1rem;",
                    span { style: "font-size: 1.8rem; font-weight: 700; color: var(--text-primary, white);", "${product.price}" }
                    if let Some(original) = product.original_price.filter(|original| *original > product.price) {
                        span { style: "font-size: 1rem; color: var(--text-muted, #64748b); text-decoration: line-through;", "${original}" }
                    }
                }

                p {
                    style: "margin: 0 0 1rem 0; line-height: 1.6; color: var(--text-secondary, #94a3b8);",
                    "{product.description}"
                }

                div {
                    style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.75rem; margin-bottom: 1rem; font-size: 0.85rem;",
                    div {
                        style: "padding: 0.75rem; background: var(--hover-bg, rgba(255,255,255,0.05)); border-radius: var(--radius-md, 8px);",
                        div { style: "color: var(--text-muted, #64748b);", "File Format" }
                        div { style: "font-weight: 600; color: var(--text-primary, white);", "{file_format}" }
                    }
                    div {
                        style: "padding: 0.75rem; background: var(--hover-bg, rgba(255,255,255,0.05)); border-radius: var(--radius-md, 8px);",
                        div { style: "color: var(--text-muted, #64748b);", "File Size" }
                        div { style: "font-weight: 600; color: var(--text-primary, white);", "{file_size}" }
                    }
                    div {
                        style: "padding: 0.75rem; background: var(--hover-bg, rgba(255,255,255,0.05)); border-radius: var(--radius-md, 8px);",
                        div { style: "color: var(--text-muted, #64748b);", "Sales" }
                        div { style: "font-weight: 600; color: var(--text-primary, white);", "{product.sales_count} downloads" }
                    }
                    div {
                        style: "padding: 0.75rem; background: var(--hover-bg, rgba(255,255,255,0.05)); border-radius: var(--radius-md, 8px);",
                        div { style: "color: var(--text-muted, #64748b);", "Stock" }
                        div { style: "font-weight: 600; color: var(--text-primary, white);", "{stock}" }
                    }
                }

                if !product.tags.is_empty() {
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 0.4rem; margin-bottom: 1rem;",
                        for tag in product.tags.iter() {
                            span {
                                style: "padding: 0.2rem 0.6rem; background: var(--hover-bg, rgba(255,255,255,0.1)); border-radius: 999px; font-size: 0.75rem; color: var(--text-secondary, #94a3b8);",
                                "{tag}"
                            }
                        }
                    }
                }

                div {
                    style: "display: flex; gap: 0.75rem;",
                    button {
                        style: "flex: 1; padding: 0.7rem; background: var(--hover-bg, rgba(255,255,255,0.1)); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); font-weight: 600; cursor: pointer;",
                        onclick: move |_| on_add_to_cart.call(product_for_cart.clone()),
                        "Add to Cart"
                    }
                    button {
                        style: "flex: 1; padding: 0.7rem; background: var(--accent-bg, #3b82f6); color: var(--accent-text, white); border: none; border-radius: var(--radius-md, 8px); font-weight: 600; cursor: pointer;",
                        onclick: move |_| on_purchase.call(product_for_buy.clone()),
                        "Buy Now"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn product(id: i64, name: &str, price: f64, featured: bool, active: bool, day: u32) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            short_description: None,
            price,
            original_price: None,
            category: "templates".to_string(),
            tags: Vec::new(),
            image_url: None,
            gallery_images: Vec::new(),
            download_url: None,
            file_size: None,
            file_format: None,
            featured,
            active,
            stock_quantity: -1,
            sales_count: id as i32 * 10,
            created_at: NaiveDate::from_ymd_opt(2025, 5, day)
                .and_then(|d| d.and_hms_opt(9, 0, 0)),
            updated_at: None,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Starter Kit", 29.0, false, true, 1),
            product(2, "Pro Kit", 59.0, true, true, 2),
            product(3, "Retired Kit", 9.0, false, false, 3),
            product(4, "Icon Pack", 12.0, true, true, 4),
        ]
    }

    #[test]
    fn inactive_products_are_never_shown() {
        let shown = visible_products(&sample(), "all", "", ShopSort::Featured);
        assert!(shown.iter().all(|p| p.active));
        assert_eq!(shown.len(), 3);
    }

    #[test]
    fn featured_sort_is_stable() {
        let shown = visible_products(&sample(), "all", "", ShopSort::Featured);
        let names: Vec<&str> = shown.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Pro Kit", "Icon Pack", "Starter Kit"]);
    }

    #[test]
    fn price_sorts_in_both_directions() {
        let low = visible_products(&sample(), "all", "", ShopSort::PriceLow);
        assert_eq!(low.first().map(|p| p.price), Some(12.0));
        assert_eq!(low.last().map(|p| p.price), Some(59.0));

        let high = visible_products(&sample(), "all", "", ShopSort::PriceHigh);
        assert_eq!(high.first().map(|p| p.price), Some(59.0));
    }

    #[test]
    fn popular_sorts_by_sales_count() {
        let shown = visible_products(&sample(), "all", "", ShopSort::Popular);
        assert_eq!(shown[0].name, "Icon Pack");
    }

    #[test]
    fn adding_same_product_increments_quantity() {
        let mut cart = Vec::new();
        let products = sample();

        add_to_cart(&mut cart, &products[0]);
        add_to_cart(&mut cart, &products[0]);
        add_to_cart(&mut cart, &products[1]);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart[0].quantity, 2);
        assert_eq!(cart_count(&cart), 3);
        assert!(in_cart(&cart, products[0].id));
    }

    #[test]
    fn removing_deletes_the_whole_line_item() {
        let mut cart = Vec::new();
        let products = sample();

        add_to_cart(&mut cart, &products[0]);
        add_to_cart(&mut cart, &products[0]);
        remove_from_cart(&mut cart, products[0].id);

        assert!(cart.is_empty());
        assert!(!in_cart(&cart, products[0].id));
    }

    #[test]
    fn discount_percent_rounds() {
        let mut p = product(9, "Deal", 15.0, false, true, 5);
        assert_eq!(discount_percent(&p), None);

        p.original_price = Some(30.0);
        assert_eq!(discount_percent(&p), Some(50));

        p.original_price = Some(15.0);
        assert_eq!(discount_percent(&p), None);
    }
}
