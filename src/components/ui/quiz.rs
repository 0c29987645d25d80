use leptos::prelude::*;

use crate::features::learning::types::QuizQuestion;

/// One multiple-choice question. With `revealed` set the correct option is
/// highlighted and the explanation, when the generator produced one, shown.
#[component]
pub fn QuestionCard(
    number: usize,
    question: QuizQuestion,
    #[prop(into)] revealed: Signal<bool>,
) -> impl IntoView {
    let correct = question.correct_answer.clone();
    let explanation = question.explanation.clone();

    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-5 dark:border-gray-700 dark:bg-gray-800">
            <p class="text-xs font-medium uppercase tracking-wide text-gray-500 dark:text-gray-400">
                {format!("Question {number}")}
            </p>
            <p class="mt-1 text-base font-medium text-gray-900 dark:text-white">
                {question.question}
            </p>
            <ul class="mt-3 space-y-2">
                {question
                    .options
                    .into_iter()
                    .map(|option| {
                        let is_correct = option == correct;
                        view! {
                            <li
                                class="rounded-md border border-gray-200 px-3 py-2 text-sm text-gray-800 dark:border-gray-600 dark:text-gray-200"
                                class:border-green-500=move || revealed.get() && is_correct
                                class:bg-green-50=move || revealed.get() && is_correct
                            >
                                {option}
                                {move || {
                                    (revealed.get() && is_correct)
                                        .then_some(
                                            view! {
                                                <span class="ml-2 text-green-600 dark:text-green-400">
                                                    {"\u{2713}"}
                                                </span>
                                            },
                                        )
                                }}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <Show when=move || revealed.get() fallback=|| ()>
                {explanation
                    .clone()
                    .map(|text| {
                        view! {
                            <p class="mt-3 rounded-md bg-sky-50 p-3 text-sm text-sky-800 dark:bg-sky-900/40 dark:text-sky-200">
                                {text}
                            </p>
                        }
                    })}
            </Show>
        </div>
    }
}
