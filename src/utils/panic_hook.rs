use std::panic;
use leptos::logging::{error, log};

/// Routes panics to the browser console and adds a tagged summary line.
/// Panics from a disposed signal usually mean a handler outlived the page that owned the catalog.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        error!("[PANIC] {} at {}", message, location);
        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A signal was used after its owner was disposed; an event handler probably outlived the school page.");
        }
    }));
}

/// Call in main.rs or the hydrate entry point
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
