// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollIntoViewOptions, Window,
};

use crate::utils::constants::{ERROR_BANNER_CLASS, ERROR_BANNER_SELECTOR, INVALID_CLASS};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Obtener atributo
pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Primer descendiente de `scope` que cumple el selector
pub fn query_in(scope: &Element, selector: &str) -> Option<Element> {
    scope.query_selector(selector).ok().flatten()
}

/// Todos los descendientes de `scope` que cumplen el selector
pub fn query_all_in(scope: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = scope.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Búsqueda en todo el documento
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.document_element())
        .map(|root| query_all_in(&root, selector))
        .unwrap_or_default()
}

/// Campo del formulario por atributo `name`
pub fn field_by_name(scope: &Element, name: &str) -> Option<Element> {
    query_in(scope, &format!("[name=\"{}\"]", name))
}

/// Ancestro más cercano que cumple el selector
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

// ----------------------------------------------------------------------------
// Campos de formulario (input / textarea / select)
// ----------------------------------------------------------------------------

pub fn field_name(element: &Element) -> Option<String> {
    get_attribute(element, "name").filter(|name| !name.is_empty())
}

pub fn field_type(element: &Element) -> String {
    element
        .dyn_ref::<HtmlInputElement>()
        .map(|input| input.type_())
        .unwrap_or_default()
}

pub fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(textarea.value());
    }
    element
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| select.value())
}

pub fn set_field_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_value(value);
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    }
}

pub fn is_checked(element: &Element) -> bool {
    element
        .dyn_ref::<HtmlInputElement>()
        .map(|input| input.checked())
        .unwrap_or(false)
}

pub fn set_checked(element: &Element, checked: bool) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_checked(checked);
    }
}

pub fn set_disabled(element: &Element, disabled: bool) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_disabled(disabled);
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_disabled(disabled);
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_disabled(disabled);
    }
}

/// Mostrar/ocultar con `style.display`
pub fn set_display(element: &Element, display: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", display);
    }
}

// ----------------------------------------------------------------------------
// Errores de validación
// ----------------------------------------------------------------------------

pub fn set_invalid(element: &Element, invalid: bool) {
    let _ = if invalid {
        add_class(element, INVALID_CLASS)
    } else {
        remove_class(element, INVALID_CLASS)
    };
}

pub fn clear_invalid_marks(scope: &Element) {
    for element in query_all_in(scope, &format!(".{}", INVALID_CLASS)) {
        set_invalid(&element, false);
    }
}

/// Inserta un banner de error al inicio del formulario
pub fn insert_error_banner(form: &Element, message: &str) -> Result<(), JsValue> {
    let banner = create_element("div")?;
    set_class_name(&banner, ERROR_BANNER_CLASS);
    set_attribute(&banner, "role", "alert")?;
    set_text_content(&banner, message);
    form.insert_before(&banner, form.first_child().as_ref())?;
    Ok(())
}

pub fn remove_error_banners(form: &Element) {
    for banner in query_all_in(form, ERROR_BANNER_SELECTOR) {
        banner.remove();
    }
}

pub fn scroll_into_view_smooth(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Envío nativo del formulario (sin disparar `submit`)
pub fn submit_form(form: &Element) -> Result<(), JsValue> {
    form.dyn_ref::<HtmlFormElement>()
        .ok_or_else(|| JsValue::from_str("Element is not a form"))?
        .submit()
}

// ----------------------------------------------------------------------------
// Navegación
// ----------------------------------------------------------------------------

pub fn current_href() -> Option<String> {
    window()?.location().href().ok()
}

pub fn navigate_to(url: &str) -> Result<(), JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_href(url)
}

/// `window.confirm`, false si no hay ventana
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
