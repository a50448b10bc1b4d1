// web_app/components/product.rs - Product display components
//
// - ProductCard: grid card for one product
// - ResultsGrid: the current page of products, or an empty state

use leptos::prelude::*;

use super::common::{PriceDisplay, StarRating};
use crate::web_app::model::Product;

/// Cuts `text` to at most `max_chars` characters, adding "..." when cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Product card for the listing grid
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let description_preview = truncate_chars(&product.description, 120);
    let rating = product.rating_rate();
    let review_count = product.rating.and_then(|r| r.count);

    view! {
        <div class="group bg-white dark:bg-gray-900 rounded-xl shadow-sm hover:shadow-xl \
                    transition-all duration-300 border border-gray-100 dark:border-gray-800 \
                    flex flex-col h-full overflow-hidden">
            <div class="h-48 bg-white flex items-center justify-center p-4">
                {match product.image.clone() {
                    Some(src) => view! {
                        <img src=src alt=product.title.clone() class="max-h-full object-contain" />
                    }.into_any(),
                    None => view! { <span class="text-4xl text-gray-300">"📦"</span> }.into_any(),
                }}
            </div>

            <div class="p-5 flex flex-col flex-1">
                <div class="flex justify-between items-start mb-3 gap-2">
                    <StarRating rating=rating count=review_count.unwrap_or(0) />
                    <PriceDisplay price=product.price_or_zero() highlight=true />
                </div>

                <h3 class="font-bold text-gray-900 dark:text-gray-100 mb-2 line-clamp-2 text-lg">
                    {product.title.clone()}
                </h3>

                <p class="text-gray-600 dark:text-gray-400 text-sm mb-4 line-clamp-3 flex-1">
                    {description_preview}
                </p>

                <div class="text-xs text-gray-400 pt-3 border-t border-gray-100 dark:border-gray-800">
                    {product.category.clone()}
                </div>
            </div>
        </div>
    }
}

/// "1 product" / "n products"
pub fn product_count_label(count: usize) -> String {
    if count == 1 {
        "1 product".to_string()
    } else {
        format!("{} products", count)
    }
}

/// Grid of products for the current page
#[component]
pub fn ResultsGrid(
    /// Products on the current page
    products: Signal<Vec<Product>>,
    /// Total number of products across all pages
    total_count: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="w-full">
            <div class="flex justify-between items-center mb-6">
                <span class="text-gray-500 dark:text-gray-400 font-medium">
                    {move || product_count_label(total_count.get())}
                </span>
            </div>

            <Show
                when=move || !products.with(Vec::is_empty)
                fallback=|| view! {
                    <div class="text-center py-16 bg-white dark:bg-gray-900 rounded-2xl border border-dashed border-gray-300 dark:border-gray-700">
                        <div class="text-gray-300 text-6xl mb-4">"🛍"</div>
                        <h3 class="text-xl font-bold text-gray-900 dark:text-gray-100 mb-2">"No products here"</h3>
                        <p class="text-gray-500 max-w-md mx-auto">
                            "Try another category or go back to the first page."
                        </p>
                    </div>
                }
            >
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {move || products.get().into_iter().map(|product| view! {
                        <ProductCard product=product />
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
