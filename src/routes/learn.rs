use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::{Alert, AlertKind, Button, Spinner, layout::AppShell};
use crate::features::auth::guards::RequireAuth;
use crate::features::learning::{client, types::Difficulty};

const SUGGESTED_TOPICS: &[&str] = &[
    "Calculus",
    "Photosynthesis",
    "Data Structures",
    "Spanish Grammar",
    "World War II",
];

const CHIP: &str = "rounded-full border px-3 py-1 text-sm";
const CHIP_IDLE: &str =
    "border-gray-300 text-gray-700 hover:border-indigo-400 dark:border-gray-600 dark:text-gray-200";
const CHIP_ACTIVE: &str = "border-indigo-600 bg-indigo-600 text-white";

fn chip_class(active: bool) -> String {
    format!("{CHIP} {}", if active { CHIP_ACTIVE } else { CHIP_IDLE })
}

#[component]
pub fn LearnPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth children=ToChildren::to_children(move || view! { <LessonGenerator /> }) />
        </AppShell>
    }
}

#[component]
fn LessonGenerator() -> impl IntoView {
    let (topic, set_topic) = signal(String::new());
    let (difficulty, set_difficulty) = signal(Difficulty::Intermediate);

    let generate = Action::new_local(move |input: &(String, Difficulty)| {
        let (topic, difficulty) = input.clone();
        async move { client::generate_lesson(&topic, difficulty).await }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let topic_value = topic.get_untracked().trim().to_string();
        if topic_value.is_empty() {
            return;
        }
        generate.dispatch((topic_value, difficulty.get_untracked()));
    };

    let submit_blocked = Signal::derive(move || {
        generate.pending().get() || topic.get().trim().is_empty()
    });

    view! {
        <section class="py-8">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                "Learn Something New"
            </h1>
            <form class="mt-6 max-w-2xl space-y-5" on:submit=on_submit>
                <div>
                    <label
                        class="mb-1 block text-sm font-medium text-gray-900 dark:text-gray-100"
                        for="topic"
                    >
                        "Topic"
                    </label>
                    <input
                        id="topic"
                        type="text"
                        class="block w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm text-gray-900 focus:border-indigo-500 focus:ring-indigo-500 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100"
                        placeholder="What do you want to learn about?"
                        prop:value=move || topic.get()
                        on:input=move |event| set_topic.set(event_target_value(&event))
                    />
                    <div class="mt-2 flex flex-wrap gap-2">
                        {SUGGESTED_TOPICS
                            .iter()
                            .map(|suggestion| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || chip_class(topic.get() == *suggestion)
                                        on:click=move |_| set_topic.set(suggestion.to_string())
                                    >
                                        {*suggestion}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div>
                    <span class="mb-1 block text-sm font-medium text-gray-900 dark:text-gray-100">
                        "Difficulty"
                    </span>
                    <div class="flex gap-2">
                        {Difficulty::ALL
                            .into_iter()
                            .map(|level| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || chip_class(difficulty.get() == level)
                                        on:click=move |_| set_difficulty.set(level)
                                    >
                                        {level.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <Button button_type="submit" disabled=submit_blocked>
                    "Generate Lesson"
                </Button>
            </form>
            <div class="mt-8 max-w-2xl">
                {move || {
                    if generate.pending().get() {
                        return view! {
                            <div class="flex items-center gap-3 text-sm text-gray-500 dark:text-gray-400">
                                <Spinner />
                                "Writing your lesson. This can take a little while."
                            </div>
                        }
                            .into_any();
                    }
                    match generate.value().get() {
                        Some(Ok(response)) => {
                            view! {
                                <article class="whitespace-pre-wrap rounded-lg border border-gray-200 bg-white p-6 text-sm leading-relaxed text-gray-800 dark:border-gray-700 dark:bg-gray-800 dark:text-gray-200">
                                    {response.lesson}
                                </article>
                            }
                                .into_any()
                        }
                        Some(Err(err)) => {
                            view! {
                                <Alert
                                    kind=AlertKind::Error
                                    message=err.user_message("Could not generate a lesson. Please try again.")
                                />
                            }
                                .into_any()
                        }
                        None => ().into_any(),
                    }
                }}
            </div>
        </section>
    }
}
