// web_app/app.rs - Root application component
//
// Sets up meta tags, the router and the HTML shell used for SSR.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::ProductFilterPage;

pub const APP_TITLE: &str = "Food List";

/// HTML document wrapping the app, rendered by the server for every route
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component
///
/// One screen at "/"; anything else falls through to NotFound.
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Filterable list of food products grouped by category" />

        // Stylesheet produced by cargo-leptos from style/tailwind.css
        <Stylesheet id="leptos" href="/pkg/food_list.css" />

        <Router>
            <main class="min-h-screen bg-white">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProductFilterPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a href="/" class="text-blue-600 hover:underline">
                    "Back to products"
                </a>
            </div>
        </div>
    }
}
