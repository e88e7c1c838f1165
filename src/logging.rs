use std::sync::Once;

static INIT: Once = Once::new();

/// Routes `tracing` events and panics to the browser console. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
        tracing::info!("console logging initialised");
    });
}
