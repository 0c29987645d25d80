mod dashboard;
mod history;
mod home;
mod learn;
mod login;
mod not_found;
mod practice;
mod register;

pub(crate) use dashboard::DashboardPage;
pub(crate) use history::HistoryPage;
pub(crate) use home::HomePage;
pub(crate) use learn::LearnPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use practice::PracticePage;
pub(crate) use register::RegisterPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/learn") view=LearnPage />
            <Route path=path!("/practice") view=PracticePage />
            <Route path=path!("/history") view=HistoryPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
