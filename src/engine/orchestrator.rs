// ==========================================
// Gestión Postventa - Orquestador de triaje
// ==========================================
// Coordina las cinco etapas en secuencia estricta:
// resolución de campos → clasificación temporal → elegibilidad →
// partición y orden → ensamblado del reporte
// Línea roja: pasada única, síncrona y pura — misma (tabla, hoy,
// configuración) ⇒ mismo reporte
// ==========================================

use crate::config::TriageConfig;
use crate::domain::{
    ClassifiedOrder, ExportLine, GroupPriority, GroupSummary, OrderState, RawOrderRecord,
    ReportTotals,
};
use crate::engine::eligibility::EligibilityFilter;
use crate::engine::grouping::{GroupPartitioner, PrioritySorter};
use crate::engine::report::ReportAssembler;
use crate::engine::temporal::TemporalClassifier;
use crate::importer::{ColumnBindings, FieldResolver, RawTable, RecordMapper};
use chrono::NaiveDate;
use std::ops::Range;
use tracing::{debug, info};

// ==========================================
// TriageReport - Resultado de una corrida
// ==========================================
#[derive(Debug, Clone)]
pub struct TriageReport {
    /// Enlaces rol → columna efectivos (para re-mapeo manual aguas arriba)
    pub bindings: ColumnBindings,

    /// Conjunto elegible en orden total
    pub orders: Vec<ClassifiedOrder>,

    /// Tramos contiguos por taller, en orden de primera aparición
    pub groups: Vec<(String, Range<usize>)>,

    /// Resumen por taller
    pub summaries: Vec<GroupSummary>,

    /// Totales generales
    pub totals: ReportTotals,

    /// Secuencia de export aplanada (con o sin marcadores según config)
    pub export: Vec<ExportLine>,

    /// Mensaje de seguimiento por taller: (etiqueta, texto)
    pub messages: Vec<(String, String)>,
}

// ==========================================
// TriageOrchestrator
// ==========================================
pub struct TriageOrchestrator {
    resolver: FieldResolver,
    mapper: RecordMapper,
    temporal: TemporalClassifier,
    eligibility: EligibilityFilter,
    sorter: PrioritySorter,
    partitioner: GroupPartitioner,
    assembler: ReportAssembler,
}

impl TriageOrchestrator {
    pub fn new() -> Self {
        Self {
            resolver: FieldResolver::new(),
            mapper: RecordMapper::new(),
            temporal: TemporalClassifier::new(),
            eligibility: EligibilityFilter::new(),
            sorter: PrioritySorter::new(),
            partitioner: GroupPartitioner::new(),
            assembler: ReportAssembler::new(),
        }
    }

    /// Ejecuta el triaje completo sobre una tabla cruda.
    ///
    /// # Parámetros
    /// - `table`: tabla decodificada (cabeceras + filas)
    /// - `today`: instante de referencia de la corrida; se fija una vez
    ///   al inicio, nunca se lee el reloj a mitad del cálculo
    /// - `config`: política efectiva (umbrales, listas, prefijo)
    pub fn run(&self, table: &RawTable, today: NaiveDate, config: &TriageConfig) -> TriageReport {
        info!(
            rows = table.rows.len(),
            columns = table.headers.len(),
            %today,
            "inicio de corrida de triaje"
        );

        // Etapa 1: resolución de campos (una sola vez por tabla)
        let bindings = self.resolver.resolve(&table.headers, &config.field_candidates);

        // Etapa 2: mapeo + clasificación temporal por registro
        let records = self.mapper.map_table(&bindings, &table.rows);
        let classified: Vec<ClassifiedOrder> = records
            .into_iter()
            .map(|record| {
                let state = self.classify(&record, today, config);
                (record, state)
            })
            .collect();
        debug!(classified = classified.len(), "clasificación temporal completa");

        // Etapa 3: filtro de elegibilidad
        let eligible = self.eligibility.filter(classified, config);

        // Etapa 4: orden total + partición por taller
        let orders = self.sorter.sort(eligible);
        let groups = self.partitioner.partition(&orders);

        // Etapa 5: ensamblado del reporte
        let summaries = self.assembler.summarize(&orders, &groups);
        let totals = self.assembler.totals(&orders, &summaries);
        let export = self.assembler.export_lines(&orders, &groups, config);
        let messages = summaries
            .iter()
            .map(|summary| {
                (
                    summary.label.clone(),
                    self.assembler.render_message(&config.message_template, summary),
                )
            })
            .collect();

        info!(
            eligible = totals.total_eligible,
            urgent = totals.total_urgent,
            groups = totals.distinct_groups,
            "corrida de triaje completa"
        );

        TriageReport {
            bindings,
            orders,
            groups,
            summaries,
            totals,
            export,
            messages,
        }
    }

    /// Deriva el estado de una orden: parseo de fecha, antigüedad,
    /// urgencia, privilegio y estado normalizado.
    fn classify(&self, record: &RawOrderRecord, today: NaiveDate, config: &TriageConfig) -> OrderState {
        let opened_at = self
            .temporal
            .parse_opened_at(&record.opened_at_raw, config.date_parse_day_first);
        let age_days = self.temporal.age_days(opened_at, today);
        let is_urgent = self.temporal.is_urgent(age_days, config.urgency_threshold_days);

        let is_privileged_group =
            EligibilityFilter::is_privileged(&record.technician, &config.privileged_prefix);
        let group_priority = if is_privileged_group {
            GroupPriority::Privileged
        } else {
            GroupPriority::Standard
        };

        OrderState {
            opened_at,
            age_days,
            is_urgent,
            is_privileged_group,
            group_priority,
            status_normalized: EligibilityFilter::normalize_status(&record.status),
        }
    }
}

impl Default for TriageOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()
    }

    #[test]
    fn test_run_is_deterministic() {
        let table = table(
            &["#Orden", "Fecha", "Técnico", "Estado", "Producto", "Serie", "Repuestos"],
            &[
                &["OS-1", "05/03/2024", "GOnorte", "en espera", "Licuadora", "S1", ""],
                &["OS-2", "01/02/2024", "Taller Sur", "Solicita repuesto", "Horno", "S2", "resistencia"],
            ],
        );
        let config = TriageConfig::default();
        let orchestrator = TriageOrchestrator::new();

        let first = orchestrator.run(&table, today(), &config);
        let second = orchestrator.run(&table, today(), &config);

        assert_eq!(first.orders, second.orders);
        assert_eq!(first.summaries, second.summaries);
        assert_eq!(first.totals, second.totals);
    }

    #[test]
    fn test_run_pipeline_end_to_end() {
        let table = table(
            &["#Orden", "Fecha", "Técnico", "Estado", "Producto", "Serie", "Repuestos"],
            &[
                &["OS-1", "05/03/2024", "GOnorte", "en espera", "Licuadora", "S1", ""],
                &["OS-2", "01/02/2024", "Taller Sur", "Solicita repuesto", "Horno", "S2", "resistencia"],
                &["OS-3", "01/03/2024", "Taller Sur", "facturado parcial", "Plancha", "S3", ""],
            ],
        );
        let report = TriageOrchestrator::new().run(&table, today(), &TriageConfig::default());

        // OS-3 queda fuera por lista negra; GOnorte encabeza por privilegio
        assert_eq!(report.totals.total_eligible, 2);
        assert_eq!(report.orders[0].0.order_id, "OS-1");
        assert_eq!(report.summaries[0].label, "GOnorte");
        assert_eq!(report.messages.len(), 2);
    }
}
