// ==========================================
// Gestión Postventa - Tipos de dominio
// ==========================================
// Prioridad de grupo: sistema de clases, no de puntajes
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Prioridad de grupo (Group Priority)
// ==========================================
// Orden: Privileged (0) < Standard (1) — los talleres privilegiados
// encabezan siempre el reporte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupPriority {
    Privileged, // Taller con prefijo privilegiado (ej. "GO")
    Standard,   // Resto de técnicos/talleres
}

impl GroupPriority {
    /// Valor numérico de la clase (0 = privilegiado, 1 = resto),
    /// el mismo que aparece en los reportes exportados.
    pub fn rank(self) -> u8 {
        match self {
            GroupPriority::Privileged => 0,
            GroupPriority::Standard => 1,
        }
    }
}

impl fmt::Display for GroupPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupPriority::Privileged => write!(f, "PRIVILEGED"),
            GroupPriority::Standard => write!(f, "STANDARD"),
        }
    }
}
