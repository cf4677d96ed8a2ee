pub mod app;
pub mod catalog;
pub mod components;
pub mod error;
pub mod filter;
pub mod models;
pub mod rating;
pub mod seed;
pub mod utils;

pub use catalog::Catalog;
pub use error::CatalogError;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
