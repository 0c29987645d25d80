//! Alert banners for form and page feedback. Messages come from user input
//! or server error bodies and must never include tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-md border border-rose-300 bg-rose-50 px-4 py-3 text-sm text-rose-800 dark:border-rose-500 dark:bg-rose-950/40 dark:text-rose-200"
        }
        AlertKind::Success => {
            "rounded-md border border-green-300 bg-green-50 px-4 py-3 text-sm text-green-800 dark:border-green-500 dark:bg-green-950/40 dark:text-green-200"
        }
        AlertKind::Info => {
            "rounded-md border border-sky-300 bg-sky-50 px-4 py-3 text-sm text-sky-800 dark:border-sky-500 dark:bg-sky-950/40 dark:text-sky-200"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
