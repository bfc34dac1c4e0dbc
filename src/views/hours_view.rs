// ============================================================================
// HOURS VIEW - Paso 2: tabla semanal (una fila `tr[data-day]` por día)
// ============================================================================
// El DOM es la fuente de verdad: cada handler relee las filas, aplica la
// lógica del HoursViewModel y vuelve a escribir lo que cambió
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    clear_invalid_marks, closest, event_element, field_value, get_attribute, insert_error_banner,
    is_checked, on_change, on_click, query_all_in, query_in, remove_error_banners,
    scroll_into_view_smooth, set_checked, set_disabled, set_field_value, set_invalid,
    submit_form,
};
use crate::models::hours::{format_time, parse_time, DayHours, RowValidation, TimeField};
use crate::utils::constants::{DUPLICATE_BUTTON_SELECTOR, NEXT_BUTTON_SELECTOR, OPEN_CHECKBOX_CLASS};
use crate::viewmodels::{HoursError, HoursViewModel};
use crate::views::form_fields::DraftBinding;

const ROW_SELECTOR: &str = "tr[data-day]";
const TIME_INPUT_SELECTOR: &str = "input[type=\"time\"]";

struct HoursView {
    form: Element,
    vm: RefCell<HoursViewModel>,
    draft: DraftBinding,
}

pub fn bind_hours_step(form: &Element, draft: DraftBinding) -> Result<(), JsValue> {
    let view = Rc::new(HoursView {
        form: form.clone(),
        vm: RefCell::new(HoursViewModel::default()),
        draft,
    });

    // Tras restaurar el borrador: inputs habilitados según su checkbox
    view.reload();
    view.sync_enabled_state();

    for checkbox in query_all_in(form, &format!(".{}", OPEN_CHECKBOX_CLASS)) {
        let view = view.clone();
        on_change(&checkbox, move |e| {
            if let Some(checkbox) = event_element(&e) {
                view.toggle(&checkbox);
            }
        })?;
    }

    for input in query_all_in(form, TIME_INPUT_SELECTOR) {
        let view = view.clone();
        on_change(&input, move |e| {
            if let Some(input) = event_element(&e) {
                view.time_changed(&input);
            }
        })?;
    }

    for button in query_all_in(form, DUPLICATE_BUTTON_SELECTOR) {
        let view = view.clone();
        let source = get_attribute(&button, "data-day").and_then(|d| d.parse::<u8>().ok());
        on_click(&button, move |e| {
            e.prevent_default();
            if let Some(source) = source {
                view.duplicate(source);
            }
        })?;
    }

    for button in query_all_in(form, NEXT_BUTTON_SELECTOR) {
        let view = view.clone();
        on_click(&button, move |e| {
            e.prevent_default();
            view.advance();
        })?;
    }

    Ok(())
}

// ----------------------------------------------------------------------------
// Lectura / escritura de filas
// ----------------------------------------------------------------------------

fn row_day(row: &Element) -> Option<u8> {
    get_attribute(row, "data-day")?.parse().ok()
}

fn time_input(row: &Element, field: TimeField) -> Option<Element> {
    query_in(row, &format!(".{}", field.css_class()))
}

fn time_field_of(input: &Element) -> Option<TimeField> {
    TimeField::ALL
        .into_iter()
        .find(|field| input.class_list().contains(field.css_class()))
}

fn read_row(row: &Element) -> Option<DayHours> {
    let mut hours = DayHours::closed(row_day(row)?);
    hours.is_open = query_in(row, &format!(".{}", OPEN_CHECKBOX_CLASS))
        .map(|checkbox| is_checked(&checkbox))
        .unwrap_or(false);
    for field in TimeField::ALL {
        let value = time_input(row, field).and_then(|input| field_value(&input));
        hours.set(field, value.as_deref().and_then(parse_time));
    }
    Some(hours)
}

fn write_row(row: &Element, hours: &DayHours) {
    if let Some(checkbox) = query_in(row, &format!(".{}", OPEN_CHECKBOX_CLASS)) {
        set_checked(&checkbox, hours.is_open);
    }
    for field in TimeField::ALL {
        if let Some(input) = time_input(row, field) {
            set_field_value(&input, &format_time(hours.get(field)));
            set_disabled(&input, !hours.is_open);
        }
    }
}

fn mark_row(row: &Element, validation: &RowValidation) {
    for field in TimeField::ALL {
        if let Some(input) = time_input(row, field) {
            set_invalid(&input, validation.is_invalid(field));
        }
    }
}

impl HoursView {
    fn rows(&self) -> Vec<Element> {
        query_all_in(&self.form, ROW_SELECTOR)
    }

    fn row(&self, day: u8) -> Option<Element> {
        query_in(&self.form, &format!("tr[data-day=\"{}\"]", day))
    }

    fn reload(&self) {
        let days = self.rows().iter().filter_map(read_row).collect();
        *self.vm.borrow_mut() = HoursViewModel::new(days);
    }

    fn sync_enabled_state(&self) {
        for row in self.rows() {
            let open = read_row(&row).is_some_and(|hours| hours.is_open);
            for input in query_all_in(&row, TIME_INPUT_SELECTOR) {
                set_disabled(&input, !open);
            }
        }
    }

    fn toggle(&self, checkbox: &Element) {
        let Some(row) = closest(checkbox, ROW_SELECTOR) else {
            return;
        };
        let Some(day) = row_day(&row) else {
            return;
        };
        self.reload();

        let open = is_checked(checkbox);
        let updated = self.vm.borrow_mut().toggle_day(day, open).cloned();
        if let Some(hours) = updated {
            write_row(&row, &hours);
            if !open {
                mark_row(&row, &RowValidation::default());
            }
        }
        self.draft.save_now();
    }

    fn time_changed(&self, input: &Element) {
        let (Some(row), Some(field)) = (closest(input, ROW_SELECTOR), time_field_of(input)) else {
            return;
        };
        let Some(day) = row_day(&row) else {
            return;
        };
        self.reload();

        let value = field_value(input).as_deref().and_then(parse_time);
        if let Some(validation) = self.vm.borrow_mut().set_time(day, field, value) {
            mark_row(&row, &validation);
        }
    }

    fn duplicate(&self, source: u8) {
        self.reload();
        let copied = self.vm.borrow_mut().duplicate_day(source);

        let vm = self.vm.borrow();
        for (day, validation) in copied {
            let (Some(row), Some(hours)) = (self.row(day), vm.day(day)) else {
                continue;
            };
            write_row(&row, hours);
            mark_row(&row, &validation);
        }
        drop(vm);
        self.draft.save_now();
    }

    fn advance(&self) {
        remove_error_banners(&self.form);
        clear_invalid_marks(&self.form);
        self.reload();

        let result = self.vm.borrow().validate_for_advance();
        match result {
            Ok(()) => {
                if let Err(e) = submit_form(&self.form) {
                    log::error!("❌ [STEP2] Error enviando formulario: {:?}", e);
                }
            }
            Err(error) => {
                if let HoursError::InvalidRows(days) = &error {
                    let vm = self.vm.borrow();
                    for day in days {
                        if let (Some(row), Some(validation)) = (self.row(*day), vm.validate_day(*day)) {
                            mark_row(&row, &validation);
                        }
                    }
                }
                log::info!("⚠️ [STEP2] Avance bloqueado: {}", error);
                if let Err(e) = insert_error_banner(&self.form, &error.to_string()) {
                    log::error!("❌ [STEP2] Error mostrando banner: {:?}", e);
                }
                scroll_into_view_smooth(&self.form);
            }
        }
    }
}
