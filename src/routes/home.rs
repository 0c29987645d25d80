use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::AppShell;
use crate::features::auth::state::use_auth;

const FEATURES: &[(&str, &str)] = &[
    (
        "Personalized Learning",
        "Lessons generated around your interests and written for your level",
    ),
    (
        "Interactive Quizzes",
        "Multiple-choice checks with explanations for every answer",
    ),
    (
        "Pick Your Difficulty",
        "Beginner, intermediate, or advanced treatment of any topic",
    ),
    (
        "Track Progress",
        "Everything you generate is saved and searchable later",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AppShell>
            <section class="py-16 text-center">
                <h1 class="text-4xl font-bold tracking-tight text-gray-900 dark:text-white">
                    "Gnosis"
                </h1>
                <p class="mx-auto mt-4 max-w-xl text-lg text-gray-600 dark:text-gray-300">
                    "Unlock your knowledge through AI-powered learning. Pick a topic, pick a difficulty, and get a lesson or quiz written just for you."
                </p>
                <div class="mt-8 flex justify-center gap-4">
                    <Show
                        when=move || auth.has_session.get()
                        fallback=|| {
                            view! {
                                <A
                                    href="/register"
                                    {..}
                                    class="rounded-md bg-indigo-600 px-5 py-2.5 text-sm font-medium text-white hover:bg-indigo-700"
                                >
                                    "Get Started"
                                </A>
                                <A
                                    href="/login"
                                    {..}
                                    class="rounded-md border border-indigo-600 px-5 py-2.5 text-sm font-medium text-indigo-600 hover:bg-indigo-50 dark:text-indigo-400 dark:hover:bg-gray-800"
                                >
                                    "Sign In"
                                </A>
                            }
                                .into_any()
                        }
                    >
                        <A
                            href="/dashboard"
                            {..}
                            class="rounded-md bg-indigo-600 px-5 py-2.5 text-sm font-medium text-white hover:bg-indigo-700"
                        >
                            "Go to Dashboard"
                        </A>
                    </Show>
                </div>
            </section>
            <section class="grid gap-6 pb-16 sm:grid-cols-2 lg:grid-cols-4">
                {FEATURES
                    .iter()
                    .map(|(title, description)| {
                        view! {
                            <div class="rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800">
                                <h2 class="text-base font-semibold text-gray-900 dark:text-white">
                                    {*title}
                                </h2>
                                <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                                    {*description}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </AppShell>
    }
}
