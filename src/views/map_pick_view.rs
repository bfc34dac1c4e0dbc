// ============================================================================
// MAP PICK VIEW - Modal Leaflet del paso 1 (coordenadas + autocompletado)
// ============================================================================
// El mapa se crea en la primera apertura, tras un pequeño retraso para que
// el modal tenga tamaño. Las aperturas siguientes solo recalculan el tamaño.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{get_element_by_id, on_click, on_event, set_field_value, set_text_content};
use crate::models::geocoding::{AddressFill, GeoPoint};
use crate::services::ApiClient;
use crate::utils::constants::{
    MAP_CONFIRM_BUTTON_ID, MAP_CONTAINER_ID, MAP_MODAL_ID, MAP_STATUS_ID, OPEN_MAP_BUTTON_ID,
    TILE_LAYER_URL,
};
use crate::utils::leaflet_ffi::{
    event_lat_lng, lat_lng, leaflet_map, leaflet_marker, osm_tile_options, tile_layer,
    BootstrapModal, LeafletMap, LeafletMarker,
};
use crate::viewmodels::MapPickViewModel;
use crate::views::form_fields::{csrf_token, DraftBinding};

struct MapPickView {
    vm: RefCell<MapPickViewModel>,
    map: RefCell<Option<LeafletMap>>,
    marker: RefCell<Option<LeafletMarker>>,
    modal: BootstrapModal,
    status: Option<Element>,
    api: ApiClient,
    draft: DraftBinding,
}

/// Sin botón de apertura en la página => no hay selección por mapa
pub fn bind_map_pick(draft: DraftBinding) -> Result<(), JsValue> {
    let Some(open_button) = get_element_by_id(OPEN_MAP_BUTTON_ID) else {
        return Ok(());
    };
    let Some(modal_element) = get_element_by_id(MAP_MODAL_ID) else {
        log::warn!("⚠️ [MAP] #{} no encontrado", MAP_MODAL_ID);
        return Ok(());
    };

    let view = Rc::new(MapPickView {
        vm: RefCell::new(MapPickViewModel::new()),
        map: RefCell::new(None),
        marker: RefCell::new(None),
        modal: BootstrapModal::new(&modal_element),
        status: get_element_by_id(MAP_STATUS_ID),
        api: ApiClient::new(csrf_token()),
        draft,
    });

    {
        let view = view.clone();
        on_click(&open_button, move |_| {
            view.modal.show();
            let view = view.clone();
            Timeout::new(CONFIG.map_config.init_delay_ms, move || view.ensure_map()).forget();
        })?;
    }

    {
        let view = view.clone();
        on_event(&modal_element, "show.bs.modal", move |_| view.reset_selection())?;
    }

    if let Some(confirm_button) = get_element_by_id(MAP_CONFIRM_BUTTON_ID) {
        let view = view.clone();
        on_click(&confirm_button, move |_| view.confirm())?;
    }

    Ok(())
}

impl MapPickView {
    fn render_status(&self) {
        if let Some(status) = &self.status {
            set_text_content(status, self.vm.borrow().status());
        }
    }

    fn remove_marker(&self) {
        let marker = self.marker.borrow_mut().take();
        if let (Some(marker), Some(map)) = (marker, self.map.borrow().as_ref()) {
            map.remove_layer(&marker);
        }
    }

    fn reset_selection(&self) {
        self.vm.borrow_mut().open();
        self.render_status();
        self.remove_marker();
    }

    fn ensure_map(self: &Rc<Self>) {
        if let Some(map) = self.map.borrow().as_ref() {
            map.invalidate_size();
            return;
        }

        let settings = &CONFIG.map_config;
        let map = leaflet_map(MAP_CONTAINER_ID);
        map.set_view(
            &lat_lng(settings.default_center_lat, settings.default_center_lng),
            settings.default_zoom,
        );
        tile_layer(TILE_LAYER_URL, &osm_tile_options()).add_tiles_to(&map);

        let view = self.clone();
        let on_map_click = Closure::wrap(Box::new(move |event: JsValue| {
            if let Some((lat, lng)) = event_lat_lng(&event) {
                view.select(GeoPoint::new(lat, lng));
            }
        }) as Box<dyn FnMut(JsValue)>);
        map.on("click", on_map_click.as_ref().unchecked_ref());
        on_map_click.forget();

        log::info!("🗺️ [MAP] Mapa inicializado");
        *self.map.borrow_mut() = Some(map);
    }

    fn select(self: &Rc<Self>, point: GeoPoint) {
        self.remove_marker();
        if let Some(map) = self.map.borrow().as_ref() {
            let marker = leaflet_marker(&lat_lng(point.lat, point.lng));
            marker.add_marker_to(map);
            *self.marker.borrow_mut() = Some(marker);
        }

        self.vm.borrow_mut().select(point);
        self.render_status();

        let view = self.clone();
        spawn_local(async move {
            match view.api.reverse_geocode(&point).await {
                Ok(response) => {
                    let fill = view.vm.borrow_mut().apply_geocode(point, &response);
                    view.render_status();
                    if let Some(fill) = fill {
                        fill_address(&fill);
                        view.draft.save_now();
                    }
                }
                Err(e) => {
                    log::error!("❌ [MAP] Reverse geocoding falló: {}", e);
                    view.vm.borrow_mut().geocode_failed(point);
                    view.render_status();
                }
            }
        });
    }

    fn confirm(&self) {
        if let Some((latitude, longitude)) = self.vm.borrow().confirm() {
            if let Some(input) = get_element_by_id("latitude") {
                set_field_value(&input, &latitude);
            }
            if let Some(input) = get_element_by_id("longitude") {
                set_field_value(&input, &longitude);
            }
            log::info!("📍 [MAP] Coordenadas confirmadas: {}, {}", latitude, longitude);
            self.draft.save_now();
        }
        self.modal.hide();
    }
}

fn fill_address(fill: &AddressFill) {
    for (id, value) in fill.fields() {
        if let Some(input) = get_element_by_id(id) {
            set_field_value(&input, value);
        }
    }
}
