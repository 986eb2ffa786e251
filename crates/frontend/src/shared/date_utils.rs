//! Formato de fechas para las tablas y el detalle.
//!
//! Las fechas se muestran como `<día de la semana> <dd>/<mm>/<yyyy>` en español.
//! El día calendario se toma del valor guardado (UTC para fechas con hora),
//! nunca de la zona horaria del navegador.

use chrono::{Datelike, NaiveDate, Weekday};
use contracts::shared::wire_date::parse_wire_date;

/// Nombre del día en español, en minúsculas
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// `miércoles 10/01/2024`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {}",
        weekday_name(date.weekday()),
        date.format("%d/%m/%Y")
    )
}

/// Formatea una fecha del backend para una celda.
///
/// Sin fecha: cadena vacía. Valor no reconocido: se muestra tal cual.
pub fn format_record_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };
    match parse_wire_date(raw) {
        Some(date) => format_long_date(date),
        None => raw.to_string(),
    }
}
