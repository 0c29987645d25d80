use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

use crate::components::{Alert, AlertKind, Button, Spinner, ValidatedField, layout::AppShell};
use crate::features::auth::{state::use_auth, types::RegisterRequest};
use crate::features::validation::{FieldKind, FieldRules, FieldState};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let username = FieldState::new(
        FieldRules {
            required: true,
            min_length: 3,
            max_length: 20,
            ..FieldRules::new(FieldKind::Username)
        },
        true,
    );
    let email = FieldState::new(
        FieldRules {
            required: true,
            ..FieldRules::new(FieldKind::Email)
        },
        true,
    );
    let password = FieldState::new(
        FieldRules {
            required: true,
            min_length: 8,
            max_length: 50,
            ..FieldRules::new(FieldKind::Password)
        },
        false,
    );

    let (show_password, set_show_password) = signal(false);
    let password_type = Signal::derive(move || if show_password.get() { "text" } else { "password" });
    let strength = Signal::derive(move || password_strength(&password.value.get()));

    // A fresh account is signed in right away with the same credentials.
    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move {
            auth.register(&request).await?;
            auth.login(&request.username, &request.secret).await
        }
    });

    Effect::new(move |_| {
        if auth.has_session.get() {
            navigate("/dashboard", Default::default());
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        // Run every field so all errors surface at once, not just the first.
        let username_ok = username.validate();
        let email_ok = email.validate();
        let password_ok = password.validate();
        if !(username_ok && email_ok && password_ok) {
            return;
        }
        if !username.is_available.get_untracked() || !email.is_available.get_untracked() {
            return;
        }

        register_action.dispatch(RegisterRequest {
            username: username.value.get_untracked().trim().to_string(),
            email: email.value.get_untracked().trim().to_string(),
            secret: password.value.get_untracked(),
        });
    };

    let submit_blocked = Signal::derive(move || {
        register_action.pending().get()
            || !username.is_available.get()
            || !email.is_available.get()
            || password.error.get().is_some()
    });

    view! {
        <AppShell>
            <form class="mx-auto max-w-sm space-y-5" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Sign Up"</h1>
                <ValidatedField
                    label="Username"
                    field=username
                    placeholder="ada"
                    autocomplete="username"
                />
                <ValidatedField
                    label="Email"
                    field=email
                    input_type="email"
                    placeholder="ada@example.com"
                    autocomplete="email"
                />
                <div>
                    <ValidatedField
                        label="Password"
                        field=password
                        input_type=password_type
                        autocomplete="new-password"
                    />
                    <div class="mt-2 flex items-center justify-between">
                        <PasswordStrengthMeter strength=strength />
                        <button
                            type="button"
                            class="text-sm font-medium text-indigo-600 hover:underline dark:text-indigo-400"
                            on:click=move |_| set_show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if show_password.get() { "Hide password" } else { "Show password" }}
                        </button>
                    </div>
                </div>
                <Button button_type="submit" disabled=submit_blocked>
                    "Create Account"
                </Button>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-2"><Spinner /></div> })
                }}
                {move || {
                    auth.last_error
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
                    "Already have an account? "
                    <A
                        href="/login"
                        {..}
                        class="font-medium text-indigo-600 hover:underline dark:text-indigo-400"
                    >
                        "Sign in"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}

#[component]
fn PasswordStrengthMeter(strength: Signal<u32>) -> impl IntoView {
    view! {
        <div class="w-40">
            <div class="h-1.5 w-full overflow-hidden rounded-full bg-gray-200 dark:bg-gray-700">
                <div
                    class=move || format!("h-full rounded-full {}", strength_bar_class(strength.get()))
                    style=move || format!("width: {}%", strength.get())
                ></div>
            </div>
            <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                {move || format!("Password strength: {}%", strength.get())}
            </p>
        </div>
    }
}

/// Rough score out of 100 for the strength meter. Purely advisory; the
/// validation rules are what actually gate submission.
fn password_strength(secret: &str) -> u32 {
    let length = secret.chars().count();
    let mut strength = 0;
    if length >= 8 {
        strength += 20;
    }
    if length >= 12 {
        strength += 10;
    }
    if secret.chars().any(|c| c.is_ascii_uppercase()) {
        strength += 20;
    }
    if secret.chars().any(|c| c.is_ascii_lowercase()) {
        strength += 20;
    }
    if secret.chars().any(|c| c.is_ascii_digit()) {
        strength += 20;
    }
    if secret.chars().any(|c| !c.is_ascii_alphanumeric()) {
        strength += 20;
    }
    strength.min(100)
}

fn strength_bar_class(strength: u32) -> &'static str {
    if strength < 30 {
        "bg-rose-500"
    } else if strength < 50 {
        "bg-amber-500"
    } else if strength < 80 {
        "bg-sky-500"
    } else {
        "bg-green-500"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_rewards_each_character_class() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abcdefgh"), 40);
        assert_eq!(password_strength("Abcdefgh"), 60);
        assert_eq!(password_strength("Abcdefg1"), 80);
        assert_eq!(password_strength("Abcdef1!"), 100);
    }

    #[test]
    fn strength_caps_at_one_hundred() {
        assert_eq!(password_strength("Abcdefghij1!xyz"), 100);
    }

    #[test]
    fn short_secrets_still_earn_class_points() {
        // Below the length floor only the class checks contribute.
        assert_eq!(password_strength("A1!"), 60);
    }
}
