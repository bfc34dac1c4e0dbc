// ============================================================================
// FLATPICKR FFI - Selector de fecha del paso 1
// ============================================================================
// La página puede no cargar flatpickr: se comprueba `window.flatpickr` antes
// de llamar, igual que con Leaflet y Bootstrap
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::config::DatePickerConfig;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = flatpickr, catch)]
    fn flatpickr_js(selector: &str, options: &JsValue) -> Result<JsValue, JsValue>;
}

/// `window.flatpickr` es una función
pub fn is_available() -> bool {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &"flatpickr".into()).ok())
        .is_some_and(|value| value.is_function())
}

/// Opciones serializadas como objeto JS
fn picker_options(settings: &DatePickerConfig) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(settings).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

/// Monta el selector sobre `settings.field_selector`; sin flatpickr no hace nada
pub fn attach_date_picker(settings: &DatePickerConfig) -> Result<(), JsValue> {
    if !is_available() {
        log::debug!("📅 [DATE] flatpickr no disponible");
        return Ok(());
    }
    flatpickr_js(&settings.field_selector, &picker_options(settings)?)?;
    log::info!("📅 [DATE] Selector de fecha en {}", settings.field_selector);
    Ok(())
}
