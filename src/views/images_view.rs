// ============================================================================
// IMAGES VIEW - Paso 5: subida de imágenes provisionales + imagen principal
// ============================================================================
// La lista pertenece al ImageState; los callbacks HTTP (spawn_local) solo la
// modifican con `state.update`, y cada cambio re-renderiza las miniaturas.
// ============================================================================

use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, File, FileList, HtmlElement, HtmlInputElement};

use crate::config::CONFIG;
use crate::dom::{
    add_class, append_child, closest, event_element, field_name, field_value, get_attribute,
    get_element_by_id, on_change, on_click, on_drag, query_all_in, remove_class, set_checked,
    set_display, set_text_content, submit_form, ElementBuilder,
};
use crate::models::image::{ImageId, ProvisionalImage};
use crate::services::ApiClient;
use crate::state::image_state::{new_image_state, ImageState};
use crate::utils::constants::{
    DELETE_IMAGE_SELECTOR, DROP_HIGHLIGHT_CLASSES, DROP_ZONE_ID, FILE_INPUT_ID,
    FINISH_BUTTON_SELECTOR, IMAGE_ERROR_ID, PREVIEW_LIST_ID, PRIMARY_RADIO_NAME,
};
use crate::viewmodels::ImagesViewModel;
use crate::views::form_fields::csrf_token;

struct ImagesView {
    state: ImageState,
    api: ApiClient,
    preview_list: Element,
    error: Option<Element>,
}

pub fn bind_images_step(form: &Element) -> Result<(), JsValue> {
    let (Some(drop_zone), Some(preview_list)) =
        (get_element_by_id(DROP_ZONE_ID), get_element_by_id(PREVIEW_LIST_ID))
    else {
        log::warn!("⚠️ [IMAGES] Zona de subida no encontrada");
        return Ok(());
    };

    let view = Rc::new(ImagesView {
        state: new_image_state(CONFIG.max_images()),
        api: ApiClient::new(csrf_token()),
        preview_list,
        error: get_element_by_id(IMAGE_ERROR_ID),
    });

    // Weak: el estado vive en la vista, el subscriber no la retiene
    {
        let weak: Weak<ImagesView> = Rc::downgrade(&view);
        view.state.subscribe(move |vm| {
            if let Some(view) = weak.upgrade() {
                if let Err(e) = view.render(vm) {
                    log::error!("❌ [IMAGES] Error renderizando miniaturas: {:?}", e);
                }
            }
        });
    }

    bind_preview_actions(&view)?;

    let file_input = get_element_by_id(FILE_INPUT_ID);
    bind_drop_zone(&view, &drop_zone, file_input.as_ref())?;

    if let Some(input) = file_input {
        let view = view.clone();
        on_change(&input, move |e| {
            let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            if let Some(files) = input.files() {
                view.upload_files(&files);
            }
            input.set_value("");
        })?;
    }

    for button in query_all_in(form, FINISH_BUTTON_SELECTOR) {
        let view = view.clone();
        let form = form.clone();
        on_click(&button, move |e| {
            e.prevent_default();
            if view.state.update(ImagesViewModel::validate_for_finish).is_ok() {
                log::info!("✅ [IMAGES] Wizard terminado, enviando");
                if let Err(err) = submit_form(&form) {
                    log::error!("❌ [STEP5] Error enviando formulario: {:?}", err);
                }
            }
        })?;
    }

    view.fetch_images();
    Ok(())
}

fn bind_drop_zone(
    view: &Rc<ImagesView>,
    drop_zone: &Element,
    file_input: Option<&Element>,
) -> Result<(), JsValue> {
    if let Some(input) = file_input.and_then(|i| i.dyn_ref::<HtmlElement>().cloned()) {
        on_click(drop_zone, move |_| input.click())?;
    }

    let zone = drop_zone.clone();
    on_drag(drop_zone, "dragover", move |e| {
        e.prevent_default();
        highlight(&zone, true);
    })?;

    let zone = drop_zone.clone();
    on_drag(drop_zone, "dragleave", move |e| {
        e.prevent_default();
        highlight(&zone, false);
    })?;

    let zone = drop_zone.clone();
    let view = view.clone();
    on_drag(drop_zone, "drop", move |e| {
        e.prevent_default();
        highlight(&zone, false);
        if let Some(files) = e.data_transfer().and_then(|dt| dt.files()) {
            view.upload_files(&files);
        }
    })
}

/// Delegación sobre la lista: las miniaturas se recrean en cada render
/// sin registrar listeners propios
fn bind_preview_actions(view: &Rc<ImagesView>) -> Result<(), JsValue> {
    let list = view.preview_list.clone();
    {
        let view = view.clone();
        on_change(&list, move |e| {
            let Some(radio) = event_element(&e) else {
                return;
            };
            if field_name(&radio).as_deref() != Some(PRIMARY_RADIO_NAME) {
                return;
            }
            if let Some(value) = field_value(&radio) {
                view.state.update(|vm| vm.set_primary(&ImageId::new(value)));
            }
        })?;
    }

    let view = view.clone();
    on_click(&list, move |e| {
        let id = event_element(&e)
            .and_then(|target| closest(&target, DELETE_IMAGE_SELECTOR))
            .and_then(|button| get_attribute(&button, "data-id"));
        if let Some(id) = id {
            view.delete(ImageId::new(id));
        }
    })
}

fn highlight(zone: &Element, on: bool) {
    for class in DROP_HIGHLIGHT_CLASSES {
        let _ = if on {
            add_class(zone, class)
        } else {
            remove_class(zone, class)
        };
    }
}

impl ImagesView {
    fn fetch_images(self: &Rc<Self>) {
        let view = self.clone();
        spawn_local(async move {
            match view.api.list_images().await {
                Ok(Some(images)) => view.state.update(|vm| vm.load(images)),
                Ok(None) => {
                    log::info!("🖼️ [IMAGES] Sin imágenes provisionales");
                    view.state.update(|vm| vm.load(Vec::new()));
                }
                Err(e) => view.state.update(|vm| vm.load_failed(&e)),
            }
        });
    }

    /// Un lote: todo o nada; cada fichero se sube por separado
    fn upload_files(self: &Rc<Self>, files: &FileList) {
        let files: Vec<File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
        if files.is_empty() {
            return;
        }
        if let Err(e) = self.state.update(|vm| vm.begin_batch(files.len())) {
            log::warn!("⚠️ [IMAGES] Lote rechazado: {}", e);
            return;
        }

        log::info!("📤 [IMAGES] Lote de {} imágenes", files.len());
        for file in files {
            let view = self.clone();
            spawn_local(async move {
                let result = view.api.upload_image(&file).await;
                view.state.update(|vm| vm.upload_completed(result));
            });
        }
    }

    fn delete(self: &Rc<Self>, id: ImageId) {
        let view = self.clone();
        spawn_local(async move {
            let result = view.api.delete_image(&id).await;
            view.state.update(|vm| vm.delete_completed(&id, result));
        });
    }

    fn render(&self, vm: &ImagesViewModel) -> Result<(), JsValue> {
        self.preview_list.set_inner_html("");
        for image in vm.images() {
            let card = self.render_card(image)?;
            append_child(&self.preview_list, &card)?;
        }

        if let Some(error) = &self.error {
            match vm.error() {
                Some(message) => {
                    set_text_content(error, message);
                    set_display(error, "block");
                }
                None => set_display(error, "none"),
            }
        }
        Ok(())
    }

    fn render_card(&self, image: &ProvisionalImage) -> Result<Element, JsValue> {
        let radio_id = format!("primary_{}", image.id);

        let radio = ElementBuilder::new("input")?
            .class("form-check-input me-1")
            .attrs(&[
                ("type", "radio"),
                ("name", PRIMARY_RADIO_NAME),
                ("value", image.id.as_str()),
                ("id", radio_id.as_str()),
            ])?
            .build();
        set_checked(&radio, image.is_primary);

        let delete_button = ElementBuilder::new("button")?
            .class("btn btn-sm btn-danger position-absolute top-0 end-0 m-1 btn-delete-image")
            .attrs(&[("type", "button"), ("data-id", image.id.as_str())])?
            .child(ElementBuilder::new("i")?.class("fas fa-times").build())?
            .build();

        let body = ElementBuilder::new("div")?
            .class("card-body py-2 px-2")
            .child(radio)?
            .child(
                ElementBuilder::new("label")?
                    .class("form-check-label small")
                    .attr("for", &radio_id)?
                    .text("Image principale")
                    .build(),
            )?
            .child(delete_button)?
            .build();

        let card = ElementBuilder::new("div")?
            .class("card position-relative")
            .child(
                ElementBuilder::new("img")?
                    .class("card-img-top")
                    .attrs(&[("src", image.url.as_str()), ("style", "object-fit:cover;height:120px;")])?
                    .build(),
            )?
            .child(body)?
            .build();

        Ok(ElementBuilder::new("div")?
            .class("col-6 col-md-4 col-lg-3")
            .child(card)?
            .build())
    }
}
