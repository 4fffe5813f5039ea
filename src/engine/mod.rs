// ==========================================
// Gestión Postventa - Capa de motores
// ==========================================
// Responsabilidad: reglas de negocio del triaje, sin I/O
// Línea roja: los motores nunca fallan — recuperan localmente
// (fecha inválida → sin antigüedad, estado ausente → cadena vacía)
// ==========================================

pub mod eligibility;
pub mod grouping;
pub mod orchestrator;
pub mod report;
pub mod temporal;

pub use eligibility::EligibilityFilter;
pub use grouping::{GroupPartitioner, PrioritySorter};
pub use orchestrator::{TriageOrchestrator, TriageReport};
pub use report::{ReportAssembler, ACKNOWLEDGEMENT_PLACEHOLDER};
pub use temporal::TemporalClassifier;
