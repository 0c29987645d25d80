use leptos::prelude::*;

use crate::components::{Alert, AlertKind, QuestionCard, Spinner, layout::AppShell};
use crate::features::auth::guards::RequireAuth;
use crate::features::learning::{
    client,
    types::{ContentKind, Difficulty, HistoryDetail, QuizResponse},
};

const CLEAR_CONFIRMATION: &str = "CONFIRM";

#[component]
pub fn HistoryPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth children=ToChildren::to_children(move || view! { <HistoryBrowser /> }) />
        </AppShell>
    }
}

#[component]
fn HistoryBrowser() -> impl IntoView {
    let history = LocalResource::new(move || async move { client::fetch_history().await });
    let selected = RwSignal::new(None::<i64>);
    let (confirming_clear, set_confirming_clear) = signal(false);
    let (confirm_text, set_confirm_text) = signal(String::new());

    let detail = LocalResource::new(move || {
        let id = selected.get();
        async move {
            match id {
                Some(id) => client::fetch_history_item(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let delete_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move { client::delete_history_item(id).await }
    });
    Effect::new(move |_| {
        if let Some(Ok(_)) = delete_action.value().get() {
            history.refetch();
        }
    });

    let clear_action =
        Action::new_local(move |_: &()| async move { client::clear_history().await });
    Effect::new(move |_| {
        if let Some(Ok(_)) = clear_action.value().get() {
            selected.set(None);
            set_confirming_clear.set(false);
            set_confirm_text.set(String::new());
            history.refetch();
        }
    });

    let action_error = Signal::derive(move || {
        if let Some(Err(err)) = delete_action.value().get() {
            return Some(err.user_message("Could not delete the history item."));
        }
        if let Some(Err(err)) = clear_action.value().get() {
            return Some(err.user_message("Could not clear your history."));
        }
        None
    });

    let has_entries = move || {
        matches!(history.get(), Some(Ok(ref entries)) if !entries.is_empty())
    };

    view! {
        <section class="py-8">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Learning History"
                </h1>
                <Show when=has_entries fallback=|| ()>
                    <Show
                        when=move || confirming_clear.get()
                        fallback=move || {
                            view! {
                                <button
                                    type="button"
                                    class="rounded-md border border-rose-600 px-3 py-1.5 text-sm font-medium text-rose-600 hover:bg-rose-50 dark:text-rose-400 dark:hover:bg-gray-800"
                                    on:click=move |_| set_confirming_clear.set(true)
                                >
                                    "Clear All History"
                                </button>
                            }
                        }
                    >
                        <div class="flex flex-wrap items-center gap-2 text-sm">
                            <span class="text-gray-600 dark:text-gray-300">
                                {format!("This cannot be undone. Type {CLEAR_CONFIRMATION} to proceed:")}
                            </span>
                            <input
                                type="text"
                                class="w-28 rounded-md border border-gray-300 bg-white px-2 py-1 text-sm text-gray-900 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100"
                                prop:value=move || confirm_text.get()
                                on:input=move |event| set_confirm_text.set(event_target_value(&event))
                            />
                            <button
                                type="button"
                                class="rounded-md bg-rose-600 px-3 py-1.5 font-medium text-white hover:bg-rose-700 disabled:opacity-60"
                                disabled=move || confirm_text.get() != CLEAR_CONFIRMATION
                                on:click=move |_| {
                                    clear_action.dispatch(());
                                }
                            >
                                "Clear All"
                            </button>
                            <button
                                type="button"
                                class="rounded-md border border-gray-300 px-3 py-1.5 text-gray-700 hover:bg-gray-50 dark:border-gray-600 dark:text-gray-200 dark:hover:bg-gray-800"
                                on:click=move |_| {
                                    set_confirming_clear.set(false);
                                    set_confirm_text.set(String::new());
                                }
                            >
                                "Cancel"
                            </button>
                        </div>
                    </Show>
                </Show>
            </div>
            {move || {
                action_error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                    })
            }}
            <div class="mt-6">
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match history.get() {
                        Some(Ok(entries)) if entries.is_empty() => {
                            view! {
                                <div class="rounded-lg border border-dashed border-gray-300 p-10 text-center text-sm text-gray-500 dark:border-gray-600 dark:text-gray-400">
                                    "Nothing here yet. Generate a lesson or quiz to build your history."
                                </div>
                            }
                                .into_any()
                        }
                        Some(Ok(entries)) => {
                            view! {
                                <ul class="space-y-3">
                                    <For
                                        each=move || entries.clone()
                                        key=|entry| entry.id
                                        children=move |entry| {
                                            let id = entry.id;
                                            let difficulty = entry.difficulty.clone();
                                            view! {
                                                <li class="flex flex-wrap items-center justify-between gap-3 rounded-lg border border-gray-200 bg-white p-4 dark:border-gray-700 dark:bg-gray-800">
                                                    <div>
                                                        <p class="font-medium text-gray-900 dark:text-white">
                                                            {entry.topic.clone()}
                                                        </p>
                                                        <p class="mt-1 flex flex-wrap items-center gap-2 text-xs text-gray-500 dark:text-gray-400">
                                                            <span class="rounded-full bg-indigo-100 px-2 py-0.5 font-medium text-indigo-700 dark:bg-indigo-900/60 dark:text-indigo-300">
                                                                {kind_label(entry.content_type)}
                                                            </span>
                                                            {difficulty
                                                                .map(|raw| {
                                                                    view! {
                                                                        <span class="rounded-full bg-gray-100 px-2 py-0.5 dark:bg-gray-700">
                                                                            {difficulty_label(&raw)}
                                                                        </span>
                                                                    }
                                                                })}
                                                            <span>{format_timestamp(&entry.created_at)}</span>
                                                        </p>
                                                    </div>
                                                    <div class="flex gap-2">
                                                        <button
                                                            type="button"
                                                            class="rounded-md border border-indigo-600 px-3 py-1.5 text-sm font-medium text-indigo-600 hover:bg-indigo-50 dark:text-indigo-400 dark:hover:bg-gray-700"
                                                            on:click=move |_| selected.set(Some(id))
                                                        >
                                                            "View"
                                                        </button>
                                                        <button
                                                            type="button"
                                                            class="rounded-md border border-rose-600 px-3 py-1.5 text-sm font-medium text-rose-600 hover:bg-rose-50 dark:text-rose-400 dark:hover:bg-gray-700"
                                                            on:click=move |_| {
                                                                if selected.get_untracked() == Some(id) {
                                                                    selected.set(None);
                                                                }
                                                                delete_action.dispatch(id);
                                                            }
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </div>
                                                </li>
                                            }
                                        }
                                    />
                                </ul>
                            }
                                .into_any()
                        }
                        Some(Err(err)) => {
                            view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                .into_any()
                        }
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
            </div>
            <Show when=move || selected.get().is_some() fallback=|| ()>
                <div class="mt-8">
                    <div class="flex items-center justify-between">
                        <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                            "Saved content"
                        </h2>
                        <button
                            type="button"
                            class="text-sm font-medium text-gray-500 hover:underline dark:text-gray-400"
                            on:click=move |_| selected.set(None)
                        >
                            "Close"
                        </button>
                    </div>
                    <div class="mt-3">
                        <Suspense fallback=move || view! { <Spinner /> }>
                            {move || match detail.get() {
                                Some(Ok(Some(item))) => {
                                    view! { <HistoryContent item=item /> }.into_any()
                                }
                                Some(Ok(None)) => ().into_any(),
                                Some(Err(err)) => {
                                    view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                        .into_any()
                                }
                                None => view! { <Spinner /> }.into_any(),
                            }}
                        </Suspense>
                    </div>
                </div>
            </Show>
        </section>
    }
}

/// Renders a saved history row. Quiz rows carry their questions as serialized
/// JSON; when that fails to parse the raw text is still shown.
#[component]
fn HistoryContent(item: HistoryDetail) -> impl IntoView {
    let content = item.content.unwrap_or_default();

    match item.content_type {
        ContentKind::Lesson => view! {
            <article class="whitespace-pre-wrap rounded-lg border border-gray-200 bg-white p-6 text-sm leading-relaxed text-gray-800 dark:border-gray-700 dark:bg-gray-800 dark:text-gray-200">
                {content}
            </article>
        }
        .into_any(),
        ContentKind::Quiz => match serde_json::from_str::<QuizResponse>(&content) {
            Ok(quiz) => view! {
                <div class="space-y-6">
                    {quiz
                        .questions
                        .into_iter()
                        .enumerate()
                        .map(|(index, question)| {
                            view! {
                                <QuestionCard number=index + 1 question=question revealed=true />
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any(),
            Err(_) => view! {
                <pre class="overflow-x-auto rounded-lg border border-gray-200 bg-white p-6 text-sm text-gray-800 dark:border-gray-700 dark:bg-gray-800 dark:text-gray-200">
                    {content}
                </pre>
            }
            .into_any(),
        },
    }
}

fn kind_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Lesson => "Lesson",
        ContentKind::Quiz => "Quiz",
    }
}

fn difficulty_label(raw: &str) -> String {
    Difficulty::from_str_opt(raw)
        .map(|level| level.label().to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Server timestamps come back ISO-ish ("2026-08-20T10:30:00"); show them
/// to the minute with a space separator.
fn format_timestamp(raw: &str) -> String {
    raw.replace('T', " ").chars().take(16).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_to_the_minute() {
        assert_eq!(format_timestamp("2026-08-20T10:30:00"), "2026-08-20 10:30");
        assert_eq!(format_timestamp("2026-08-20"), "2026-08-20");
    }

    #[test]
    fn difficulty_labels_capitalize_known_levels() {
        assert_eq!(difficulty_label("beginner"), "Beginner");
        assert_eq!(difficulty_label("custom"), "custom");
    }

    #[test]
    fn kind_labels_match_the_badge_text() {
        assert_eq!(kind_label(ContentKind::Lesson), "Lesson");
        assert_eq!(kind_label(ContentKind::Quiz), "Quiz");
    }
}
