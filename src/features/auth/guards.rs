use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app_lib::browser;
use crate::components::ui::Spinner;
use crate::features::auth::state::use_auth;

/// Wraps private routes. While the startup probe runs it shows a spinner;
/// afterwards it renders children only for a confirmed session and sends
/// everyone else to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let ready = !auth.loading.get();
        let session = auth.has_session.get();
        if ready && !session && !auth.is_authenticated() {
            // Presentation-level gate; the API enforces real access control.
            navigate(browser::LOGIN_PATH, Default::default());
        }
    });

    view! {
        <Show
            when=move || !auth.loading.get() && auth.has_session.get()
            fallback=move || {
                view! {
                    <Show when=move || auth.loading.get() fallback=|| ()>
                        <div class="flex min-h-[50vh] items-center justify-center">
                            <Spinner/>
                        </div>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}
