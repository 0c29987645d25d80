//! Text input bound to a validation [`FieldState`]. Shows the first failing
//! rule message under the input and, for availability-checked fields, an
//! inline status glyph while a query is in flight or settled.

use leptos::prelude::*;

use crate::features::validation::FieldState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Indicator {
    None,
    Checking,
    Available,
    Unavailable,
}

/// Labelled input wired to a validation field.
#[component]
pub fn ValidatedField(
    label: &'static str,
    field: FieldState,
    /// Reactive so callers can flip a password field to plain text.
    #[prop(optional, into, default = Signal::from("text"))]
    input_type: Signal<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let autocomplete = autocomplete.unwrap_or("off");

    let indicator = Signal::derive(move || {
        if !field.checks_availability() || !field.is_dirty.get() {
            return Indicator::None;
        }
        if field.is_checking.get() {
            return Indicator::Checking;
        }
        if field.value.get().chars().count() < 3 {
            return Indicator::None;
        }
        if field.is_available.get() {
            Indicator::Available
        } else {
            Indicator::Unavailable
        }
    });

    view! {
        <div>
            <label class="mb-1 block text-sm font-medium text-gray-900 dark:text-gray-100">
                {label}
            </label>
            <div class="relative">
                <input
                    type=move || input_type.get()
                    autocomplete=autocomplete
                    placeholder=placeholder.unwrap_or_default()
                    class="block w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm text-gray-900 focus:border-indigo-500 focus:ring-indigo-500 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100"
                    class:border-rose-500=move || field.error.get().is_some()
                    prop:value=move || field.value.get()
                    on:input=move |ev| field.on_input(&event_target_value(&ev))
                />
                <span class="absolute inset-y-0 right-3 flex items-center text-sm">
                    {move || match indicator.get() {
                        Indicator::None => ().into_any(),
                        Indicator::Checking => {
                            view! {
                                <span
                                    class="inline-block h-4 w-4 animate-spin rounded-full border-2 border-indigo-200 border-t-indigo-600"
                                    aria-label="Checking availability"
                                ></span>
                            }
                                .into_any()
                        }
                        Indicator::Available => {
                            view! {
                                <span class="text-green-600 dark:text-green-400" aria-label="Available">
                                    {"\u{2713}"}
                                </span>
                            }
                                .into_any()
                        }
                        Indicator::Unavailable => {
                            view! {
                                <span class="text-rose-600 dark:text-rose-400" aria-label="Not available">
                                    {"\u{2715}"}
                                </span>
                            }
                                .into_any()
                        }
                    }}
                </span>
            </div>
            <Show when=move || field.error.get().is_some() fallback=|| ()>
                <p class="mt-1 text-sm text-rose-600 dark:text-rose-400">
                    {move || field.error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
