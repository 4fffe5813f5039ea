// ==========================================
// Gestión Postventa - Entidades de órdenes de servicio
// ==========================================
// Separación: registro crudo (tal como llega del archivo) vs.
// estado derivado (calculado por los motores, nunca de entrada)
// ==========================================

use crate::domain::types::GroupPriority;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// RawOrderRecord - Registro crudo de una orden
// ==========================================
// Una fila de la tabla de entrada, ya resuelta a roles lógicos.
// Valores ausentes quedan como cadena vacía (contrato del filtro
// de elegibilidad y del particionador de grupos).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOrderRecord {
    // Identificador opaco de la orden
    pub order_id: String,

    // Fecha de apertura tal como vino (se conserva para el export)
    pub opened_at_raw: String,

    // Técnico / taller asignado
    pub technician: String,

    // Estado libre de la orden
    pub status: String,

    // Campos de producto
    pub product: String,
    pub serial: String,
    pub parts_note: String,

    // Número de fila en el archivo origen (1-based, sin cabecera)
    pub row_number: usize,
}

// ==========================================
// OrderState - Estado derivado de una orden
// ==========================================
// Calculado en una sola pasada por los motores. Inmutable dentro
// de una corrida: cada corrida es función pura de (tabla, hoy, config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderState {
    /// Fecha parseada (convención día-primero); None si no parsea
    pub opened_at: Option<NaiveDate>,

    /// Antigüedad en días (hoy - opened_at); None exactamente cuando
    /// opened_at no parseó
    pub age_days: Option<i64>,

    /// age_days presente y mayor al umbral configurado
    pub is_urgent: bool,

    /// El técnico empieza (sin distinguir mayúsculas) con el prefijo
    /// privilegiado
    pub is_privileged_group: bool,

    /// Clase de prioridad del grupo (0 privilegiado, 1 resto)
    pub group_priority: GroupPriority,

    /// Estado normalizado (mayúsculas + recortado), cacheado para el
    /// filtro de elegibilidad
    pub status_normalized: String,
}

/// Par (registro crudo, estado derivado) que circula por el pipeline.
pub type ClassifiedOrder = (RawOrderRecord, OrderState);

// ==========================================
// GroupSummary - Resumen por taller
// ==========================================
// Los grupos son derivados, no entidades almacenadas: se recomputan
// en cada corrida sobre el conjunto elegible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Valor exacto del campo técnico (clave de agrupación sensible
    /// a mayúsculas)
    pub label: String,

    /// Cantidad de órdenes del grupo
    pub member_count: usize,

    /// Cantidad de órdenes críticas del grupo
    pub urgent_count: usize,

    /// Marca de grupo privilegiado, para que el consumidor pueda
    /// aplicar estilos sin recalcular la regla
    pub is_privileged: bool,
}

// ==========================================
// ReportTotals - Totales generales
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportTotals {
    pub total_eligible: usize,
    pub total_urgent: usize,
    pub distinct_groups: usize,
}

// ==========================================
// ExportRow - Proyección fija de diez campos
// ==========================================
// Orden de campos congelado: casilla de acuse, etiqueta de urgencia,
// orden, fecha cruda, técnico, estado, producto, serie, repuestos,
// antigüedad en días.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub acknowledgement: String,
    pub alert_label: String,
    pub order_id: String,
    pub opened_at_raw: String,
    pub technician: String,
    pub status: String,
    pub product: String,
    pub serial: String,
    pub parts_note: String,
    pub age_days: Option<i64>,
}

// ==========================================
// ExportLine - Secuencia de export aplanada
// ==========================================
// Los marcadores de límite de grupo se insertan inmediatamente antes
// de la primera orden de cada grupo nuevo, solo si el formato
// consumidor los pide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportLine {
    GroupBoundary { label: String, is_privileged: bool },
    Order(ExportRow),
}
