//! Lectura de fechas tal como las entrega el backend.
//!
//! Una misma columna puede llegar en tres formatos:
//! - `2024-01-10` (date)
//! - `2024-01-10T00:00:00Z` / `2024-01-10T00:00:00` (ISO-8601)
//! - `Wed, 10 Jan 2024 00:00:00 GMT` (RFC 1123, codificación por defecto de fechas en el JSON del backend)
//!
//! El día calendario siempre se toma en UTC: el resultado no depende
//! de la zona horaria de quien mira la página.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Formato de fecha en consultas y campos de formulario
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Interpreta una fecha en cualquiera de los formatos soportados.
///
/// Una cadena vacía o un formato desconocido devuelven `None`.
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, WIRE_DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }

    None
}

/// Normaliza la fecha a `YYYY-MM-DD` (para `<input type="date">` y campos multipart)
pub fn to_wire_date(raw: &str) -> Option<String> {
    parse_wire_date(raw).map(|d| d.format(WIRE_DATE_FORMAT).to_string())
}
