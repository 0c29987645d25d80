#[cfg(target_arch = "wasm32")]
pub fn main() {
    use gnosis_web::app::App;
    use leptos::prelude::mount_to_body;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
