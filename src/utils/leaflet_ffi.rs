// ============================================================================
// LEAFLET / BOOTSTRAP FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para las librerías JS de la página - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn leaflet_map(container_id: &str) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &LeafletMap);

    #[wasm_bindgen(method)]
    pub fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub fn remove_layer(this: &LeafletMap, layer: &LeafletMarker);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_tiles_to(this: &TileLayer, map: &LeafletMap);

    pub type LeafletMarker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn leaflet_marker(latlng: &JsValue) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_marker_to(this: &LeafletMarker, map: &LeafletMap);

    #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
    pub type BootstrapModal;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Modal")]
    pub fn new(element: &Element) -> BootstrapModal;

    #[wasm_bindgen(method, js_class = "Modal")]
    pub fn show(this: &BootstrapModal);

    #[wasm_bindgen(method, js_class = "Modal")]
    pub fn hide(this: &BootstrapModal);
}

/// Helper: `[lat, lng]` para Leaflet
pub fn lat_lng(lat: f64, lng: f64) -> JsValue {
    let array = js_sys::Array::new();
    array.push(&JsValue::from_f64(lat));
    array.push(&JsValue::from_f64(lng));
    array.into()
}

/// Helper: opciones de la capa de teselas OpenStreetMap
pub fn osm_tile_options() -> JsValue {
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"maxZoom".into(), &JsValue::from_f64(19.0));
    let _ = js_sys::Reflect::set(&options, &"attribution".into(), &"© OpenStreetMap".into());
    options.into()
}

/// Helper: extraer `(lat, lng)` de un evento de click de Leaflet (`e.latlng`)
pub fn event_lat_lng(event: &JsValue) -> Option<(f64, f64)> {
    let latlng = js_sys::Reflect::get(event, &"latlng".into()).ok()?;
    let lat = js_sys::Reflect::get(&latlng, &"lat".into()).ok()?.as_f64()?;
    let lng = js_sys::Reflect::get(&latlng, &"lng".into()).ok()?.as_f64()?;
    Some((lat, lng))
}
