// ==========================================
// Gestión Postventa - Capa de configuración
// ==========================================

pub mod triage_config;

pub use triage_config::{FieldCandidates, TriageConfig, DEFAULT_MESSAGE_TEMPLATE};
