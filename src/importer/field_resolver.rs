// ==========================================
// Gestión Postventa - Resolutor de campos
// ==========================================
// Responsabilidad: rol lógico → índice de columna real
// Se resuelve una sola vez por tabla, nunca fila a fila
// ==========================================

use crate::config::FieldCandidates;
use std::fmt;

// ==========================================
// LogicalRole - Roles lógicos de la tabla
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalRole {
    OrderId,
    OpenedAt,
    Technician,
    Status,
    Product,
    Serial,
    PartsNote,
}

impl fmt::Display for LogicalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalRole::OrderId => write!(f, "order_id"),
            LogicalRole::OpenedAt => write!(f, "opened_at"),
            LogicalRole::Technician => write!(f, "technician"),
            LogicalRole::Status => write!(f, "status"),
            LogicalRole::Product => write!(f, "product"),
            LogicalRole::Serial => write!(f, "serial"),
            LogicalRole::PartsNote => write!(f, "parts_note"),
        }
    }
}

// ==========================================
// ColumnBindings - Enlaces rol → columna
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBindings {
    pub order_id: usize,
    pub opened_at: usize,
    pub technician: usize,
    pub status: usize,
    pub product: usize,
    pub serial: usize,
    pub parts_note: usize,
}

// ==========================================
// FieldResolver
// ==========================================
pub struct FieldResolver;

impl FieldResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resuelve los siete roles lógicos contra las cabeceras disponibles.
    ///
    /// # Regla
    /// Para cada rol se recorren los fragmentos en orden de prioridad;
    /// para cada fragmento, las columnas en su orden original. Gana la
    /// primera cabecera que contenga el fragmento sin distinguir
    /// mayúsculas. Sin coincidencia alguna, el rol se enlaza a la
    /// columna 0: el consumidor permite re-mapear a mano, así que un
    /// default utilizable vale más que abortar.
    pub fn resolve(&self, headers: &[String], candidates: &FieldCandidates) -> ColumnBindings {
        let bindings = ColumnBindings {
            order_id: self.resolve_role(headers, &candidates.order_id),
            opened_at: self.resolve_role(headers, &candidates.opened_at),
            technician: self.resolve_role(headers, &candidates.technician),
            status: self.resolve_role(headers, &candidates.status),
            product: self.resolve_role(headers, &candidates.product),
            serial: self.resolve_role(headers, &candidates.serial),
            parts_note: self.resolve_role(headers, &candidates.parts_note),
        };

        tracing::debug!(
            order_id = bindings.order_id,
            opened_at = bindings.opened_at,
            technician = bindings.technician,
            status = bindings.status,
            "columnas resueltas"
        );

        bindings
    }

    /// Primer índice de cabecera que contiene alguno de los fragmentos
    /// (prioridad: orden de fragmentos, luego orden de columnas).
    fn resolve_role(&self, headers: &[String], fragments: &[String]) -> usize {
        for fragment in fragments {
            let fragment_lower = fragment.to_lowercase();
            for (idx, header) in headers.iter().enumerate() {
                if header.to_lowercase().contains(&fragment_lower) {
                    return idx;
                }
            }
        }

        // Default seguro: columna 0
        0
    }
}

impl Default for FieldResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_exact_headers() {
        let headers = headers(&[
            "#Orden",
            "Fecha",
            "Técnico",
            "Estado",
            "Producto",
            "Serie/Artículo",
            "Repuestos",
        ]);

        let bindings = FieldResolver::new().resolve(&headers, &FieldCandidates::default());

        assert_eq!(bindings.order_id, 0);
        assert_eq!(bindings.opened_at, 1);
        assert_eq!(bindings.technician, 2);
        assert_eq!(bindings.status, 3);
        assert_eq!(bindings.product, 4);
        assert_eq!(bindings.serial, 5);
        assert_eq!(bindings.parts_note, 6);
    }

    #[test]
    fn test_resolve_substring_case_insensitive() {
        let headers = headers(&["FECHA APERTURA", "tecnico asignado", "ESTADO ACTUAL"]);

        let bindings = FieldResolver::new().resolve(&headers, &FieldCandidates::default());

        assert_eq!(bindings.opened_at, 0);
        assert_eq!(bindings.technician, 1);
        assert_eq!(bindings.status, 2);
    }

    #[test]
    fn test_fragment_priority_beats_column_order() {
        // "Responsable" aparece antes en la tabla, pero "Técnico" tiene
        // prioridad de fragmento
        let headers = headers(&["Responsable", "Técnico"]);

        let bindings = FieldResolver::new().resolve(&headers, &FieldCandidates::default());

        assert_eq!(bindings.technician, 1);
    }

    #[test]
    fn test_unresolved_role_defaults_to_first_column() {
        let headers = headers(&["ColA", "ColB"]);

        let bindings = FieldResolver::new().resolve(&headers, &FieldCandidates::default());

        assert_eq!(bindings.technician, 0);
        assert_eq!(bindings.status, 0);
    }

    #[test]
    fn test_first_matching_column_wins() {
        let headers = headers(&["Estado anterior", "Estado"]);

        let bindings = FieldResolver::new().resolve(&headers, &FieldCandidates::default());

        // Coincidencia por subcadena: gana la primera en orden de columna
        assert_eq!(bindings.status, 0);
    }
}
