use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

use crate::components::{Alert, AlertKind, Button, Spinner, layout::AppShell};
use crate::features::auth::state::use_auth;

#[derive(Clone)]
struct LoginInput {
    identifier: String,
    secret: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (identifier, set_identifier) = signal(String::new());
    let (secret, set_secret) = signal(String::new());
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move { auth.login(&input.identifier, &input.secret).await }
    });

    // Covers both a fresh login and an already signed-in visitor.
    Effect::new(move |_| {
        if auth.has_session.get() {
            navigate("/dashboard", Default::default());
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_form_error.set(None);

        let identifier_value = identifier.get_untracked().trim().to_string();
        let secret_value = secret.get_untracked();
        if identifier_value.is_empty() || secret_value.is_empty() {
            set_form_error.set(Some(
                "Please enter your username or email and your password.".to_string(),
            ));
            return;
        }

        login_action.dispatch(LoginInput {
            identifier: identifier_value,
            secret: secret_value,
        });
    };

    let shown_error = Signal::derive(move || form_error.get().or_else(|| auth.last_error.get()));

    view! {
        <AppShell>
            <form class="mx-auto max-w-sm space-y-5" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Sign In"</h1>
                <div>
                    <label
                        class="mb-1 block text-sm font-medium text-gray-900 dark:text-gray-100"
                        for="identifier"
                    >
                        "Username or email"
                    </label>
                    <input
                        id="identifier"
                        type="text"
                        class="block w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm text-gray-900 focus:border-indigo-500 focus:ring-indigo-500 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100"
                        autocomplete="username"
                        placeholder="ada"
                        required
                        on:input=move |event| set_identifier.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label
                        class="mb-1 block text-sm font-medium text-gray-900 dark:text-gray-100"
                        for="secret"
                    >
                        "Password"
                    </label>
                    <input
                        id="secret"
                        type="password"
                        class="block w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm text-gray-900 focus:border-indigo-500 focus:ring-indigo-500 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100"
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_secret.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign In"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-2"><Spinner /></div> })
                }}
                {move || {
                    shown_error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-2">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "No account yet? "
                    <A
                        href="/register"
                        {..}
                        class="font-medium text-indigo-600 hover:underline dark:text-indigo-400"
                    >
                        "Sign up"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
