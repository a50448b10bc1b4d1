// web_app/app.rs - Root application component
//
// Creates the AppState once, provides it as context and resolves the
// theme after hydration.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::Header;
use crate::web_app::pages::ProductsPage;
use crate::web_app::state::AppState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(AppState::for_target());
    provide_context(state);

    // Effects only run in the browser, where the platform is live
    Effect::new(move |_| {
        state.update(|s| {
            s.theme.resolve();
        });
    });

    view! {
        <Title text="Storefront" />
        <Meta name="description" content="Browse products by category, sorted and paginated" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/storefront.css" />

        <Router>
            <div class="min-h-screen bg-gray-50 dark:bg-gray-950 font-sans">
                <Header />
                <main>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=ProductsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 dark:text-gray-400 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Back to the shop"
                </a>
            </div>
        </div>
    }
}
