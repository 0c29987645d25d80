use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::AppShell;
use crate::features::auth::{guards::RequireAuth, state::use_auth};

const QUICK_LINKS: &[(&str, &str, &str)] = &[
    (
        "/learn",
        "Learn",
        "Generate a fresh lesson on any topic at your level",
    ),
    (
        "/practice",
        "Practice",
        "Quiz yourself with generated multiple-choice questions",
    ),
    (
        "/history",
        "History",
        "Revisit every lesson and quiz you have generated",
    ),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth children=ToChildren::to_children(move || {
                let auth = use_auth();
                let greeting = move || {
                    auth.user
                        .get()
                        .map(|user| {
                            let name = user.display_name.unwrap_or(user.username);
                            format!("Welcome back, {name}")
                        })
                        .unwrap_or_else(|| "Welcome back".to_string())
                };

                view! {
                    <section class="py-8">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            {greeting}
                        </h1>
                        <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                            "What would you like to do today?"
                        </p>
                        <div class="mt-8 grid gap-6 sm:grid-cols-3">
                            {QUICK_LINKS
                                .iter()
                                .map(|(href, title, description)| {
                                    view! {
                                        <A
                                            href={*href}
                                            {..}
                                            class="block rounded-lg border border-gray-200 bg-white p-6 hover:border-indigo-400 dark:border-gray-700 dark:bg-gray-800 dark:hover:border-indigo-500"
                                        >
                                            <h2 class="text-base font-semibold text-indigo-600 dark:text-indigo-400">
                                                {*title}
                                            </h2>
                                            <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                                                {*description}
                                            </p>
                                        </A>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>
                }
            }) />
        </AppShell>
    }
}
