use leptos::prelude::*;
use leptos_router::components::A;

use crate::app_lib::browser;
use crate::components::layout::AppShell;

/// Fallback for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex min-h-[50vh] flex-col items-center justify-center px-4 text-center">
                <div class="relative">
                    <h1 class="select-none text-9xl font-black text-gray-100 dark:text-gray-800">
                        "404"
                    </h1>
                    <p class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 whitespace-nowrap text-2xl font-bold text-gray-900 dark:text-white">
                        "Page not found"
                    </p>
                </div>
                <div class="mt-4 space-y-6">
                    <p class="mx-auto max-w-sm text-gray-500 dark:text-gray-400">
                        "The page you requested does not exist or has moved."
                    </p>
                    <div class="flex flex-col items-center justify-center gap-4 sm:flex-row">
                        <A
                            href="/"
                            {..}
                            class="inline-flex items-center rounded-md bg-indigo-600 px-5 py-2.5 text-sm font-medium text-white hover:bg-indigo-700"
                        >
                            "Go Home"
                        </A>
                        <button
                            type="button"
                            class="inline-flex items-center rounded-md border border-gray-300 bg-white px-5 py-2.5 text-sm font-medium text-gray-900 hover:bg-gray-100 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-200 dark:hover:bg-gray-700"
                            on:click=move |_| browser::history_back()
                        >
                            "Go Back"
                        </button>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
