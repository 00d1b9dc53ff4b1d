// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types (Product, FilterState, CategoryGroup, RowStyle)
// - catalog.rs: The fixed product catalog
// - filter.rs: Filter-and-group pass that builds the grouped view
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;

pub mod catalog;

pub mod filter;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
