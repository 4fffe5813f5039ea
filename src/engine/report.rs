// ==========================================
// Gestión Postventa - Ensamblador de reportes
// ==========================================
// Responsabilidad: resúmenes por taller + totales + secuencia de
// export aplanada + mensaje de seguimiento por grupo
// El export lleva estructura (límites de grupo, marca de privilegio);
// el estilo visual es del consumidor
// ==========================================

use crate::config::TriageConfig;
use crate::domain::{
    ClassifiedOrder, ExportLine, ExportRow, GroupSummary, ReportTotals,
};
use crate::engine::temporal::TemporalClassifier;
use std::ops::Range;

/// Casilla de acuse en blanco de la primera columna del export.
pub const ACKNOWLEDGEMENT_PLACEHOLDER: &str = "[  ]";

// ==========================================
// ReportAssembler
// ==========================================
pub struct ReportAssembler {
    temporal: TemporalClassifier,
}

impl ReportAssembler {
    pub fn new() -> Self {
        Self {
            temporal: TemporalClassifier::new(),
        }
    }

    /// Resumen por grupo, en el orden de primera aparición.
    pub fn summarize(
        &self,
        sorted: &[ClassifiedOrder],
        groups: &[(String, Range<usize>)],
    ) -> Vec<GroupSummary> {
        groups
            .iter()
            .map(|(label, range)| {
                let members = &sorted[range.clone()];
                GroupSummary {
                    label: label.clone(),
                    member_count: members.len(),
                    urgent_count: members.iter().filter(|(_, s)| s.is_urgent).count(),
                    is_privileged: members
                        .first()
                        .map(|(_, s)| s.is_privileged_group)
                        .unwrap_or(false),
                }
            })
            .collect()
    }

    /// Totales generales del conjunto elegible.
    ///
    /// Conjunto vacío → totales en cero; es un resultado definido,
    /// no un error.
    pub fn totals(&self, sorted: &[ClassifiedOrder], summaries: &[GroupSummary]) -> ReportTotals {
        ReportTotals {
            total_eligible: sorted.len(),
            total_urgent: sorted.iter().filter(|(_, s)| s.is_urgent).count(),
            distinct_groups: summaries.len(),
        }
    }

    /// Secuencia de export aplanada: las órdenes en orden total, con
    /// marcador de límite antes de la primera orden de cada grupo si
    /// la configuración lo pide.
    pub fn export_lines(
        &self,
        sorted: &[ClassifiedOrder],
        groups: &[(String, Range<usize>)],
        config: &TriageConfig,
    ) -> Vec<ExportLine> {
        let mut lines = Vec::with_capacity(sorted.len() + groups.len());

        for (label, range) in groups {
            if config.include_boundary_markers {
                let is_privileged = sorted[range.start].1.is_privileged_group;
                lines.push(ExportLine::GroupBoundary {
                    label: label.clone(),
                    is_privileged,
                });
            }

            for order in &sorted[range.clone()] {
                lines.push(ExportLine::Order(self.export_row(order, config)));
            }
        }

        lines
    }

    /// Proyección fija de diez campos de una orden.
    pub fn export_row(&self, order: &ClassifiedOrder, config: &TriageConfig) -> ExportRow {
        let (record, state) = order;

        ExportRow {
            acknowledgement: ACKNOWLEDGEMENT_PLACEHOLDER.to_string(),
            alert_label: self
                .temporal
                .alert_label(state.is_urgent, config.urgency_threshold_days),
            order_id: record.order_id.clone(),
            opened_at_raw: record.opened_at_raw.clone(),
            technician: record.technician.clone(),
            status: record.status.clone(),
            product: record.product.clone(),
            serial: record.serial.clone(),
            parts_note: record.parts_note.clone(),
            age_days: state.age_days,
        }
    }

    /// Mensaje de seguimiento de un grupo, con los marcadores
    /// {group_label}, {member_count} y {urgent_count} sustituidos.
    pub fn render_message(&self, template: &str, summary: &GroupSummary) -> String {
        template
            .replace("{group_label}", &summary.label)
            .replace("{member_count}", &summary.member_count.to_string())
            .replace("{urgent_count}", &summary.urgent_count.to_string())
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new()
    }
}
