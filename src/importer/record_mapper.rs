// ==========================================
// Gestión Postventa - Mapeo de filas a registros
// ==========================================
// Responsabilidad: fila cruda + enlaces de columna → RawOrderRecord
// ==========================================

use crate::domain::RawOrderRecord;
use crate::importer::field_resolver::ColumnBindings;

pub struct RecordMapper;

impl RecordMapper {
    pub fn new() -> Self {
        Self
    }

    /// Proyecta una fila a registro de orden según los enlaces resueltos.
    ///
    /// Celdas fuera de rango o vacías quedan como cadena vacía: el
    /// filtro y el particionador tratan el vacío de forma determinista
    /// (falla la lista blanca, forma su propio grupo).
    pub fn map_row(
        &self,
        bindings: &ColumnBindings,
        row: &[String],
        row_number: usize,
    ) -> RawOrderRecord {
        RawOrderRecord {
            order_id: cell(row, bindings.order_id),
            opened_at_raw: cell(row, bindings.opened_at),
            technician: cell(row, bindings.technician),
            status: cell(row, bindings.status),
            product: cell(row, bindings.product),
            serial: cell(row, bindings.serial),
            parts_note: cell(row, bindings.parts_note),
            row_number,
        }
    }

    /// Mapea todas las filas de una tabla (numeradas desde 1).
    pub fn map_table(
        &self,
        bindings: &ColumnBindings,
        rows: &[Vec<String>],
    ) -> Vec<RawOrderRecord> {
        rows.iter()
            .enumerate()
            .map(|(idx, row)| self.map_row(bindings, row, idx + 1))
            .collect()
    }
}

impl Default for RecordMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}
