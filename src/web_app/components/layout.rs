// web_app/components/layout.rs - Page chrome
//
// Header with the theme toggle and the mobile navigation drawer. Both read
// the AppState signal the App component puts into context.

use leptos::prelude::*;

use crate::web_app::state::AppState;

/// Navigation entries as (href, label)
pub const NAV_LINKS: [(&str, &str); 2] = [("/", "Shop"), ("https://fakestoreapi.com/docs", "API")];

/// AppState signal provided by [`crate::web_app::App`]
pub fn use_app_state() -> RwSignal<AppState> {
    expect_context::<RwSignal<AppState>>()
}

/// Dark/light switch
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_app_state();
    let is_dark = move || state.with(|s| s.theme.is_dark());

    view! {
        <button
            type="button"
            class="p-2 rounded-full hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
            title=move || if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| state.update(|s| s.theme.toggle())
        >
            {move || if is_dark() { "☀" } else { "☾" }}
        </button>
    }
}

/// Hamburger button plus the drawer it opens
#[component]
pub fn MobileMenu() -> impl IntoView {
    let state = use_app_state();
    let is_open = move || state.with(|s| s.menu.is_open());

    view! {
        <button
            type="button"
            class="md:hidden p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800"
            aria-label="Toggle navigation"
            aria-expanded=move || is_open().to_string()
            on:click=move |_| state.update(|s| s.menu.toggle())
        >
            "☰"
        </button>

        <Show when=is_open>
            <div class="fixed inset-0 z-50 md:hidden">
                <div
                    class="absolute inset-0 bg-gray-900/60 backdrop-blur-sm"
                    on:click=move |_| state.update(|s| s.menu.close())
                ></div>
                <nav class="absolute right-0 top-0 h-full w-64 bg-white dark:bg-gray-900 shadow-2xl p-6 flex flex-col gap-4">
                    <button
                        type="button"
                        class="self-end text-gray-400 hover:text-gray-600"
                        title="Close"
                        on:click=move |_| state.update(|s| s.menu.close())
                    >
                        "✕"
                    </button>
                    {NAV_LINKS.into_iter().map(|(href, label)| view! {
                        <a
                            href=href
                            class="text-lg font-medium text-gray-800 dark:text-gray-100 hover:text-blue-600"
                            on:click=move |_| state.update(|s| s.menu.close())
                        >
                            {label}
                        </a>
                    }).collect_view()}
                </nav>
            </div>
        </Show>
    }
}

/// Sticky site header
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white dark:bg-gray-900 shadow-sm sticky top-0 z-40 border-b border-gray-200 dark:border-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href="/" class="flex items-center gap-2">
                    <span class="text-2xl">"🛍"</span>
                    <h1 class="text-xl font-bold text-gray-900 dark:text-gray-100">"Storefront"</h1>
                </a>
                <nav class="hidden md:flex items-center gap-6">
                    {NAV_LINKS.into_iter().map(|(href, label)| view! {
                        <a href=href class="text-gray-600 dark:text-gray-300 hover:text-blue-600 font-medium">{label}</a>
                    }).collect_view()}
                </nav>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <MobileMenu />
                </div>
            </div>
        </header>
    }
}
