// ==========================================
// Gestión Postventa - Configuración de triaje
// ==========================================
// Responsabilidad: valores por defecto canónicos + carga desde archivo
// Nota: las fronteras del filtro (listas de estados, prefijo, bypass)
// son configurables porque las variantes del negocio no coinciden
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ==========================================
// FieldCandidates - Fragmentos candidatos por rol lógico
// ==========================================
// Cada rol lleva una lista ordenada de fragmentos de nombre de
// columna; el resolutor los recorre en orden de prioridad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldCandidates {
    pub order_id: Vec<String>,
    pub opened_at: Vec<String>,
    pub technician: Vec<String>,
    pub status: Vec<String>,
    pub product: Vec<String>,
    pub serial: Vec<String>,
    pub parts_note: Vec<String>,
}

impl Default for FieldCandidates {
    fn default() -> Self {
        Self {
            order_id: vec_of(&["#Orden", "Orden", "Order"]),
            opened_at: vec_of(&["Fecha", "Date"]),
            technician: vec_of(&["Técnico", "Tecnico", "Tech", "Responsable"]),
            status: vec_of(&["Estado", "Status"]),
            product: vec_of(&["Producto", "Product"]),
            serial: vec_of(&["Serie/Artículo", "Serie", "Artículo", "Serial"]),
            parts_note: vec_of(&["Repuestos", "Repuesto", "Parts"]),
        }
    }
}

fn vec_of(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ==========================================
// TriageConfig - Configuración de una corrida
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Umbral de antigüedad en días para marcar una orden como crítica
    pub urgency_threshold_days: i64,

    /// Lista negra: tokens de estado terminal (subcadena, sin
    /// distinguir mayúsculas). Excluyen la orden sin importar el grupo.
    pub terminal_status_tokens: Vec<String>,

    /// Lista blanca: tokens de actividad. Solo se exige a los grupos
    /// no privilegiados.
    pub whitelist_status_tokens: Vec<String>,

    /// Prefijo de técnico que define un grupo privilegiado
    pub privileged_prefix: String,

    /// Si true, los grupos privilegiados tampoco pasan por la lista
    /// negra. Canónico: false (la lista negra aplica a todos).
    pub privileged_bypass_blacklist: bool,

    /// Convención día-primero al parsear fechas
    pub date_parse_day_first: bool,

    /// Insertar filas marcadoras al inicio de cada grupo en el export
    pub include_boundary_markers: bool,

    /// Plantilla del mensaje por grupo. Marcadores: {group_label},
    /// {member_count}, {urgent_count}.
    pub message_template: String,

    /// Fragmentos candidatos para resolver columnas
    pub field_candidates: FieldCandidates,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            urgency_threshold_days: 15,
            terminal_status_tokens: vec_of(&[
                "ANULADA",
                "ANULADO",
                "FACTURADO",
                "TERMINADO",
                "CERRADA",
                "ENTREGADO",
                "REPARADO",
                "RECLAMO PROVEEDOR",
            ]),
            whitelist_status_tokens: vec_of(&["SOLICITA", "PROCESO/REPUESTOS"]),
            privileged_prefix: "GO".to_string(),
            privileged_bypass_blacklist: false,
            date_parse_day_first: true,
            include_boundary_markers: false,
            message_template: DEFAULT_MESSAGE_TEMPLATE.to_string(),
            field_candidates: FieldCandidates::default(),
        }
    }
}

/// Plantilla canónica del mensaje de seguimiento por taller.
pub const DEFAULT_MESSAGE_TEMPLATE: &str = "Estimados {group_label}:\n\n\
Reciban un cordial saludo, el presente mensaje es para consultarles el estado \
de las siguientes ordenes de servicio pendientes ({member_count}), en especial \
informacion de las ordenes críticas ({urgent_count}). Agradezco la favorable \
atencion de la presente y sus comentarios sobre las ordenes.\n\n\
Atentamente,\nDepartamento Postventa";

impl TriageConfig {
    /// Carga la configuración desde un archivo JSON.
    ///
    /// Los campos ausentes toman el valor por defecto canónico, de modo
    /// que un archivo parcial solo sobreescribe lo que declara.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ImportError::ConfigReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        serde_json::from_str(&raw).map_err(|e| ImportError::ConfigValueError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Instantánea JSON de la configuración efectiva.
    ///
    /// Se registra junto al reporte para poder reproducir la corrida:
    /// (tabla, hoy, configuración) determinan el resultado por completo.
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
