use std::collections::BTreeSet;

use chrono::NaiveTime;

/// Días de la semana (0 = lunes ... 6 = domingo)
pub const WEEK_DAYS: [u8; 7] = [0, 1, 2, 3, 4, 5, 6];

/// Campos horarios de una fila
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeField {
    Opening,
    Closing,
    BreakStart,
    BreakEnd,
}

impl TimeField {
    pub const ALL: [TimeField; 4] = [
        TimeField::Opening,
        TimeField::Closing,
        TimeField::BreakStart,
        TimeField::BreakEnd,
    ];

    /// Clase CSS del input en la fila del formulario
    pub fn css_class(self) -> &'static str {
        match self {
            TimeField::Opening => "opening-time",
            TimeField::Closing => "closing-time",
            TimeField::BreakStart => "break-start",
            TimeField::BreakEnd => "break-end",
        }
    }
}

/// Parsea el valor de un `<input type="time">` (vacío o inválido => None)
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

pub fn format_time(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}

/// Horario de un día
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayHours {
    pub day: u8,
    pub is_open: bool,
    pub opening_time: Option<NaiveTime>,
    pub closing_time: Option<NaiveTime>,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
}

impl DayHours {
    pub fn closed(day: u8) -> Self {
        Self {
            day,
            ..Self::default()
        }
    }

    pub fn get(&self, field: TimeField) -> Option<NaiveTime> {
        match field {
            TimeField::Opening => self.opening_time,
            TimeField::Closing => self.closing_time,
            TimeField::BreakStart => self.break_start,
            TimeField::BreakEnd => self.break_end,
        }
    }

    pub fn set(&mut self, field: TimeField, value: Option<NaiveTime>) {
        match field {
            TimeField::Opening => self.opening_time = value,
            TimeField::Closing => self.closing_time = value,
            TimeField::BreakStart => self.break_start = value,
            TimeField::BreakEnd => self.break_end = value,
        }
    }

    /// Abrir/cerrar el día. Cerrar borra todos los horarios.
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
        if !open {
            for field in TimeField::ALL {
                self.set(field, None);
            }
        }
    }

    /// Copia el estado y los cuatro horarios de otro día (conserva `day`)
    pub fn copy_schedule_from(&mut self, other: &DayHours) {
        self.is_open = other.is_open;
        self.opening_time = other.opening_time;
        self.closing_time = other.closing_time;
        self.break_start = other.break_start;
        self.break_end = other.break_end;
    }

    pub fn validate(&self) -> RowValidation {
        let mut validation = RowValidation::default();
        if !self.is_open {
            return validation;
        }

        match (self.opening_time, self.closing_time) {
            (Some(opening), Some(closing)) if closing > opening => {}
            _ => {
                validation.mark(TimeField::Opening);
                validation.mark(TimeField::Closing);
            }
        }

        match (self.break_start, self.break_end) {
            (None, None) => {}
            (Some(start), Some(end)) => {
                if end <= start {
                    validation.mark(TimeField::BreakStart);
                    validation.mark(TimeField::BreakEnd);
                } else {
                    if self.opening_time.is_some_and(|opening| start < opening) {
                        validation.mark(TimeField::BreakStart);
                    }
                    if self.closing_time.is_some_and(|closing| end > closing) {
                        validation.mark(TimeField::BreakEnd);
                    }
                }
            }
            _ => {
                validation.mark(TimeField::BreakStart);
                validation.mark(TimeField::BreakEnd);
            }
        }

        validation
    }
}

/// Resultado de validar una fila: campos a marcar como inválidos
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowValidation {
    invalid: BTreeSet<TimeField>,
}

impl RowValidation {
    fn mark(&mut self, field: TimeField) {
        self.invalid.insert(field);
    }

    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn is_invalid(&self, field: TimeField) -> bool {
        self.invalid.contains(&field)
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = TimeField> + '_ {
        self.invalid.iter().copied()
    }
}
