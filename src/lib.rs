// ==========================================
// Gestión Postventa - Biblioteca núcleo
// ==========================================
// Sistema de triaje de órdenes de servicio postventa
// Posicionamiento: apoyo al seguimiento (el operador decide)
// ==========================================

// ==========================================
// Declaración de módulos
// ==========================================

// Capa de dominio - entidades y tipos
pub mod domain;

// Capa de importación - archivo → registros
pub mod importer;

// Capa de motores - reglas de triaje
pub mod engine;

// Capa de configuración
pub mod config;

// Escritores de salida (CSV, mensajes)
pub mod export;

// Sistema de logs
pub mod logging;

// ==========================================
// Re-export de tipos núcleo
// ==========================================

// Dominio
pub use domain::{
    ClassifiedOrder, ExportLine, ExportRow, GroupPriority, GroupSummary, OrderState,
    RawOrderRecord, ReportTotals,
};

// Motores
pub use engine::{
    EligibilityFilter, GroupPartitioner, PrioritySorter, ReportAssembler, TemporalClassifier,
    TriageOrchestrator, TriageReport,
};

// Importación
pub use importer::{
    ColumnBindings, FieldResolver, ImportError, ImportResult, RawTable, RecordMapper,
    UniversalFileParser,
};

// Configuración
pub use config::{FieldCandidates, TriageConfig};

// ==========================================
// Constantes del sistema
// ==========================================

// Versión del sistema
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nombre del sistema
pub const APP_NAME: &str = "Gestión de Postventa y Comunicaciones";
