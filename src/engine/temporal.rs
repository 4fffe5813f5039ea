// ==========================================
// Gestión Postventa - Clasificador temporal
// ==========================================
// Responsabilidad: parseo de fecha día-primero + antigüedad + urgencia
// Línea roja: sin estado, sin reloj ambiente — `today` siempre llega
// como parámetro explícito
// ==========================================

use chrono::NaiveDate;

// Formatos día-primero observados en los exports del sistema comercial
const DAY_FIRST_DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d/%m/%y"];
const DAY_FIRST_DATETIME_FORMATS: &[&str] = &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"];

const MONTH_FIRST_DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%m-%d-%Y", "%m/%d/%y"];
const MONTH_FIRST_DATETIME_FORMATS: &[&str] = &["%m/%d/%Y %H:%M:%S", "%m/%d/%Y %H:%M"];

// ISO se acepta siempre como respaldo
const ISO_DATE_FORMATS: &[&str] = &["%Y-%m-%d"];
const ISO_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S"];

// ==========================================
// TemporalClassifier
// ==========================================
pub struct TemporalClassifier;

impl TemporalClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Parsea la fecha de apertura cruda.
    ///
    /// # Regla
    /// - Entrada vacía o no parseable → None (nunca es error)
    /// - `day_first` decide la convención de los formatos con barra;
    ///   ISO se intenta siempre al final
    pub fn parse_opened_at(&self, raw: &str, day_first: bool) -> Option<NaiveDate> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }

        let (date_formats, datetime_formats) = if day_first {
            (DAY_FIRST_DATE_FORMATS, DAY_FIRST_DATETIME_FORMATS)
        } else {
            (MONTH_FIRST_DATE_FORMATS, MONTH_FIRST_DATETIME_FORMATS)
        };

        for format in date_formats.iter().chain(ISO_DATE_FORMATS) {
            if let Ok(date) = NaiveDate::parse_from_str(value, format) {
                return Some(date);
            }
        }

        for format in datetime_formats.iter().chain(ISO_DATETIME_FORMATS) {
            if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(value, format) {
                return Some(dt.date());
            }
        }

        None
    }

    /// Antigüedad en días: hoy - fecha de apertura.
    ///
    /// None exactamente cuando la fecha no parseó. Valores negativos
    /// (fecha futura) son válidos.
    pub fn age_days(&self, opened_at: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
        opened_at.map(|date| today.signed_duration_since(date).num_days())
    }

    /// Urgencia: antigüedad presente y mayor al umbral.
    ///
    /// Una fecha no parseable nunca marca urgencia, pero tampoco
    /// excluye la orden por sí sola.
    pub fn is_urgent(&self, age_days: Option<i64>, threshold_days: i64) -> bool {
        matches!(age_days, Some(age) if age > threshold_days)
    }

    /// Etiqueta de urgencia para el export (columna "Alerta").
    pub fn alert_label(&self, is_urgent: bool, threshold_days: i64) -> String {
        if is_urgent {
            format!("🚩 CRÍTICO (+{}d)", threshold_days)
        } else {
            "OK".to_string()
        }
    }
}

impl Default for TemporalClassifier {
    fn default() -> Self {
        Self::new()
    }
}
