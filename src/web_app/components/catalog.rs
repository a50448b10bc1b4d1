// web_app/components/catalog.rs - Listing controls
//
// - SortDropdown: sort option selector (resets to page 1)
// - CategoryFilter: "all" plus one button per category
// - Pagination: previous/next with the "Showing X–Y of N" range

use leptos::prelude::*;

use crate::web_app::model::{Category, SortOption, ALL_CATEGORIES};
use crate::web_app::state::PaginationSort;

/// Sort option selector
#[component]
pub fn SortDropdown(
    /// Pagination state; changing the sort goes back to page 1
    pagination: RwSignal<PaginationSort>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 bg-white dark:bg-gray-800 px-4 py-2 rounded-lg border border-gray-200 dark:border-gray-700 shadow-sm">
            <label class="text-sm font-medium text-gray-600 dark:text-gray-300">"Sort by:"</label>
            <select
                class="text-sm font-semibold text-gray-800 dark:text-gray-100 bg-transparent border-none \
                       focus:ring-0 cursor-pointer pr-8"
                on:change=move |ev| {
                    let option = SortOption::parse(&event_target_value(&ev));
                    pagination.update(|p| p.set_sort(option));
                }
            >
                {SortOption::ALL.into_iter().map(|option| {
                    view! {
                        <option
                            value=option.as_query()
                            selected=move || pagination.with(|p| p.sort_option() == option)
                        >
                            {option.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Category selector
#[component]
pub fn CategoryFilter(
    /// Categories loaded from the API
    categories: Signal<Vec<Category>>,
    /// Selected category, "all" for no filter
    selected: RwSignal<String>,
) -> impl IntoView {
    let button_class = move |category: &str| {
        if selected.with(|s| s == category) {
            "px-3 py-1.5 rounded-full text-sm font-semibold bg-blue-600 text-white"
        } else {
            "px-3 py-1.5 rounded-full text-sm font-medium bg-gray-100 dark:bg-gray-800 \
             text-gray-700 dark:text-gray-200 hover:bg-gray-200 dark:hover:bg-gray-700"
        }
    };

    view! {
        <div class="flex flex-wrap gap-2">
            <button
                type="button"
                class=move || button_class(ALL_CATEGORIES)
                on:click=move |_| selected.set(ALL_CATEGORIES.to_string())
            >
                "All"
            </button>
            <For
                each=move || categories.get()
                key=|c| c.clone()
                children=move |category| {
                    let for_class = category.clone();
                    let for_click = category.clone();
                    view! {
                        <button
                            type="button"
                            class=move || button_class(&for_class)
                            on:click=move |_| selected.set(for_click.clone())
                        >
                            {category}
                        </button>
                    }
                }
            />
        </div>
    }
}

/// "Showing 5–8 of 20"
pub fn range_label(start: usize, end: usize, total: usize) -> String {
    if total == 0 {
        "No products".to_string()
    } else {
        format!("Showing {}–{} of {}", start, end, total)
    }
}

/// Pagination controls
#[component]
pub fn Pagination(
    /// Pagination state (1-based pages)
    pagination: RwSignal<PaginationSort>,
    /// Number of items being paginated
    total_items: Signal<usize>,
) -> impl IntoView {
    let total_pages = move || pagination.with(|p| p.page_count(total_items.get()));
    let current_page = move || pagination.with(|p| p.current_page());

    let can_go_prev = move || current_page() > 1;
    let can_go_next = move || current_page() < total_pages();

    let go_prev = move |_| {
        if can_go_prev() {
            pagination.update(|p| p.set_page(p.current_page() - 1));
        }
    };

    let go_next = move |_| {
        if can_go_next() {
            pagination.update(|p| p.set_page(p.current_page() + 1));
        }
    };

    let label = move || {
        let total = total_items.get();
        let (start, end) = pagination.with(|p| p.display_range(total));
        range_label(start, end, total)
    };

    view! {
        <div class="flex flex-col items-center gap-3 mt-12 mb-8">
            <span class="text-sm text-gray-500 dark:text-gray-400">{label}</span>
            <div class="flex items-center justify-center gap-4">
                <button
                    type="button"
                    class="px-4 py-2 bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg shadow-sm \
                           disabled:opacity-50 disabled:cursor-not-allowed \
                           hover:bg-gray-50 transition-all font-medium text-gray-700 dark:text-gray-200"
                    disabled=move || !can_go_prev()
                    on:click=go_prev
                >
                    "← Previous"
                </button>

                <span class="text-sm font-medium text-gray-600 dark:text-gray-300 bg-gray-100 dark:bg-gray-800 px-4 py-2 rounded-lg">
                    "Page " {current_page} " of " {move || total_pages().max(1)}
                </span>

                <button
                    type="button"
                    class="px-4 py-2 bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg shadow-sm \
                           disabled:opacity-50 disabled:cursor-not-allowed \
                           hover:bg-gray-50 transition-all font-medium text-gray-700 dark:text-gray-200"
                    disabled=move || !can_go_next()
                    on:click=go_next
                >
                    "Next →"
                </button>
            </div>
        </div>
    }
}
