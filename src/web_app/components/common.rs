// web_app/components/common.rs - Reusable UI components
//
// Small, stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600 dark:border-gray-700"></div>
            <span class="mt-4 text-gray-500 dark:text-gray-400 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
    /// Optional retry handler; the button is hidden without one
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 dark:bg-red-950 border border-red-200 dark:border-red-800 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div class="flex-1">
                <h3 class="text-red-800 dark:text-red-300 font-bold mb-1">"Something went wrong"</h3>
                <p class="text-red-600 dark:text-red-400 text-sm">{error}</p>
            </div>
            {on_retry.map(|retry| view! {
                <button
                    type="button"
                    class="px-3 py-1 text-sm rounded-lg border border-red-300 text-red-700 hover:bg-red-100"
                    on:click=move |_| retry.run(())
                >
                    "Try again"
                </button>
            })}
        </div>
    }
}

/// Full, half and empty star counts for a 0-5 rating
pub fn star_counts(rating: f64) -> (usize, bool, usize) {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let has_half = full < 5 && (rating - rating.floor()) >= 0.5;
    let empty = 5 - full - usize::from(has_half);
    (full, has_half, empty)
}

/// Star rating display component
///
/// Displays a star rating (0-5) with filled and empty stars.
#[component]
pub fn StarRating(
    /// The rating value (0.0 to 5.0)
    rating: f64,
    /// Review count shown after the stars (hidden when 0)
    #[prop(default = 0)]
    count: u64,
) -> impl IntoView {
    let (full_stars, has_half, empty_stars) = star_counts(rating);

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            {(0..full_stars).map(|_| view! {
                <span class="text-yellow-400 text-lg">"★"</span>
            }).collect_view()}

            {has_half.then(|| view! {
                <div class="relative inline-block text-lg">
                    <span class="text-gray-200">"★"</span>
                    <span class="absolute top-0 left-0 overflow-hidden w-1/2 text-yellow-400">"★"</span>
                </div>
            })}

            {(0..empty_stars).map(|_| view! {
                <span class="text-gray-200 dark:text-gray-600 text-lg">"★"</span>
            }).collect_view()}

            <span class="ml-2 text-sm font-bold text-gray-700 dark:text-gray-200">
                {format!("{:.1}", rating)}
            </span>
            {(count > 0).then(|| view! {
                <span class="ml-1 text-xs text-gray-400">{format!("({})", count)}</span>
            })}
        </div>
    }
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Price display component
#[component]
pub fn PriceDisplay(
    /// The price value
    price: f64,
    /// Whether to highlight (larger, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-xl font-bold text-blue-600 dark:text-blue-400"
    } else {
        "text-gray-900 dark:text-gray-100 font-medium"
    };

    view! {
        <span class=class>{format_price(price)}</span>
    }
}
