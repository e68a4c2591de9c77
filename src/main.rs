use biruk_portfolio::components::App;

fn main() {
    console_error_panic_hook::set_once();
    // Errors only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
