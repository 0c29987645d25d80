//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup and the mobile menu toggle so routes can focus
//! on content. Navigation remains client-side; the API enforces access.

use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use crate::app_lib::GIT_COMMIT_HASH;
use crate::features::auth::state::use_auth;

const NAV_LINK: &str = "block rounded px-3 py-2 text-gray-900 hover:bg-gray-100 md:border-0 md:p-0 md:hover:bg-transparent md:hover:text-indigo-700 dark:text-white dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent md:dark:hover:text-indigo-400";

const PRIVATE_LINKS: [(&str, &str); 4] = [
    ("/dashboard", "Dashboard"),
    ("/learn", "Learn"),
    ("/practice", "Practice"),
    ("/history", "History"),
];

/// Wraps routes with a header, main content container, and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let has_session = auth.has_session;
    let location = use_location();
    let on_login = move || location.pathname.get() == "/login";

    view! {
        <div class="flex min-h-screen flex-col">
            <header class="border-b border-gray-200 dark:border-gray-800 dark:bg-gray-900">
                <div class="mx-auto flex max-w-screen-xl flex-wrap items-center justify-between p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-2"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="text-xl font-semibold text-indigo-600 dark:text-indigo-400">
                            "Gnosis"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex h-10 w-10 items-center justify-center rounded-lg p-2 text-sm text-gray-500 hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 md:hidden dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="main-nav"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="h-5 w-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <nav
                        id="main-nav"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="mt-4 flex flex-col rounded-lg border border-gray-100 bg-gray-50 p-4 font-medium md:mt-0 md:flex-row md:space-x-6 md:border-0 md:bg-transparent md:p-0 dark:border-gray-700 dark:bg-gray-800 md:dark:bg-transparent">
                            <Show
                                when=move || has_session.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <Show
                                                when=on_login
                                                fallback=move || {
                                                    view! {
                                                        <A
                                                            href="/login"
                                                            {..}
                                                            class=NAV_LINK
                                                            on:click=move |_| set_menu_open.set(false)
                                                        >
                                                            "Sign In"
                                                        </A>
                                                    }
                                                }
                                            >
                                                <A
                                                    href="/register"
                                                    {..}
                                                    class=NAV_LINK
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    "Sign Up"
                                                </A>
                                            </Show>
                                        </li>
                                    }
                                }
                            >
                                {PRIVATE_LINKS
                                    .into_iter()
                                    .map(|(href, label)| {
                                        view! {
                                            <li>
                                                <A
                                                    href={href}
                                                    {..}
                                                    class=NAV_LINK
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    {label}
                                                </A>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                                <li>
                                    <button
                                        type="button"
                                        class=NAV_LINK
                                        on:click=move |_| {
                                            set_menu_open.set(false);
                                            auth.logout();
                                        }
                                    >
                                        "Sign Out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto mt-6 p-4">{children()}</div>
            </main>
            <footer class="border-t border-gray-200 py-4 text-center text-xs text-gray-500 dark:border-gray-800 dark:text-gray-400">
                <p>{format!("Gnosis · build {GIT_COMMIT_HASH}")}</p>
            </footer>
        </div>
    }
}
