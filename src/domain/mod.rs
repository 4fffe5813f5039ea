// ==========================================
// Gestión Postventa - Capa de dominio
// ==========================================
// Entidades y tipos compartidos por importador y motores
// ==========================================

pub mod order;
pub mod types;

pub use order::{
    ClassifiedOrder, ExportLine, ExportRow, GroupSummary, OrderState, RawOrderRecord, ReportTotals,
};
pub use types::GroupPriority;
