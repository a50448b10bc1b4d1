// web_app/pages/products.rs - Product listing page
//
// Wires the state helpers to the view:
// - CategoryProvider / ProductProvider fetch on the client (effects do not
//   run during SSR) and their snapshots are copied into signals
// - PaginationSort lives in a signal and is kept in step with `?page=`

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::web_app::api::HttpStoreApi;
use crate::web_app::components::*;
use crate::web_app::model::{Category, FetchState, Product, ALL_CATEGORIES};
use crate::web_app::state::{page_from_query, query_with_page, CategoryProvider, ProductProvider};

/// Main listing page
#[component]
pub fn ProductsPage() -> impl IntoView {
    let state = use_app_state();
    let config = state.with_untracked(|s| s.config.clone());
    let location = use_location();
    let navigate = use_navigate();

    let api = HttpStoreApi::from_config(&config);
    let category_provider = Arc::new(CategoryProvider::new(api.clone()));
    let product_provider = Arc::new(ProductProvider::new(api));

    // Start in the loading state so SSR and the first client render agree
    let categories = RwSignal::new(FetchState::<Category>::default());
    let products = RwSignal::new(FetchState::<Product> {
        loading: true,
        ..FetchState::default()
    });
    let selected_category = RwSignal::new(ALL_CATEGORIES.to_string());
    let reload = RwSignal::new(0_u32);

    let pagination = RwSignal::new(
        state.with_untracked(|s| s.pagination(&location.search.get_untracked())),
    );

    Effect::new(move |_| {
        let provider = Arc::clone(&category_provider);
        categories.update(FetchState::begin);
        spawn_local(async move {
            provider.fetch().await;
            // A superseded fetch copies the still-loading state; the newer
            // fetch overwrites it when it settles
            categories.set(provider.state());
        });
    });

    Effect::new(move |_| {
        let category = selected_category.get();
        reload.track();

        let provider = Arc::clone(&product_provider);
        products.update(FetchState::begin);
        spawn_local(async move {
            // "all" loads the unscoped list
            provider.fetch(Some(category.as_str())).await;
            // May still show loading if a newer fetch is in flight
            products.set(provider.state());
        });
    });

    // New category: back to the first page
    Effect::new(move |prev: Option<String>| {
        let category = selected_category.get();
        if prev.is_some_and(|p| p != category) {
            pagination.update(|p| p.set_page(1));
        }
        category
    });

    // URL -> state
    Effect::new(move |_| {
        let search = location.search.get();
        if pagination.with_untracked(|p| p.current_page()) != page_from_query(&search) {
            pagination.update(|p| {
                p.sync_from_query(&search);
            });
        }
    });

    // state -> URL
    Effect::new(move |_| {
        let page = pagination.with(|p| p.current_page());
        let search = location.search.get_untracked();
        if page_from_query(&search) != page {
            let path = location.pathname.get_untracked();
            navigate(
                &format!("{}{}", path, query_with_page(&search, page)),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let page_view = Memo::new(move |_| {
        let pagination = pagination.get();
        products.with(|s| pagination.view(&s.data))
    });
    let page_items = Signal::derive(move || page_view.with(|v| v.items.clone()));
    let total = Signal::derive(move || page_view.with(|v| v.total));
    let category_names = Signal::derive(move || categories.with(|s| s.data.clone()));

    let retry = Callback::new(move |()| reload.update(|n| *n += 1));

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 text-gray-900 dark:text-gray-100">
            <section class="flex flex-col md:flex-row md:items-center justify-between gap-4 mb-8">
                <CategoryFilter categories=category_names selected=selected_category />
                <SortDropdown pagination=pagination />
            </section>

            {move || categories.with(|s| s.error.clone()).map(|e| view! {
                <p class="text-sm text-red-500 mb-4">{e}</p>
            })}

            {move || {
                let (loading, error) = products.with(|s| (s.loading, s.error.clone()));
                if loading {
                    view! { <Loading message="Loading products..." /> }.into_any()
                } else if let Some(error) = error {
                    view! { <ErrorDisplay error=error on_retry=retry /> }.into_any()
                } else {
                    view! {
                        <div>
                            <ResultsGrid products=page_items total_count=total />
                            <Show when=move || { total.get() > 0 }>
                                <Pagination pagination=pagination total_items=total />
                            </Show>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
