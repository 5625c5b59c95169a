// Console helpers

/// Debug-only browser console logging. No-op in release and on native targets.
#[cfg_attr(not(all(target_arch = "wasm32", debug_assertions)), allow(unused_variables))]
pub fn clog(msg: &str) {
    #[cfg(all(target_arch = "wasm32", debug_assertions))]
    web_sys::console::debug_1(&wasm_bindgen::JsValue::from_str(msg));
}
