#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen_futures::spawn_local;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting Aegis frontend");

    spawn_local(async {
        aegis_frontend::config::init().await;
        log::info!("runtime config initialized");
        aegis_frontend::router::mount_app();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // The app only runs as a wasm bundle; the host build exists for tests.
}
