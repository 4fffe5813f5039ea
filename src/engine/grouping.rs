// ==========================================
// Gestión Postventa - Particionador y ordenador de grupos
// ==========================================
// Clave compuesta: (prioridad de grupo asc, técnico asc,
// antigüedad desc con None al final)
// La clave de agrupación es el técnico exacto (sensible a mayúsculas),
// a diferencia de la comprobación de privilegio
// ==========================================

use crate::domain::ClassifiedOrder;
use std::cmp::Ordering;
use std::ops::Range;

// ==========================================
// PrioritySorter - Orden total sobre el conjunto elegible
// ==========================================
pub struct PrioritySorter;

impl PrioritySorter {
    pub fn new() -> Self {
        Self
    }

    /// Ordena el conjunto elegible con la clave compuesta.
    ///
    /// Orden estable: registros con clave idéntica conservan su orden
    /// de llegada, así la corrida es determinista.
    pub fn sort(&self, mut orders: Vec<ClassifiedOrder>) -> Vec<ClassifiedOrder> {
        orders.sort_by(|a, b| self.compare(a, b));
        orders
    }

    /// Compara dos órdenes clasificadas.
    ///
    /// 1. group_priority ascendente (privilegiados primero)
    /// 2. técnico ascendente lexicográfico (valor exacto)
    /// 3. age_days descendente; None (fecha no parseable) al final
    fn compare(&self, a: &ClassifiedOrder, b: &ClassifiedOrder) -> Ordering {
        let (record_a, state_a) = a;
        let (record_b, state_b) = b;

        match state_a.group_priority.cmp(&state_b.group_priority) {
            Ordering::Equal => {}
            other => return other,
        }

        match record_a.technician.cmp(&record_b.technician) {
            Ordering::Equal => {}
            other => return other,
        }

        // Antigüedad descendente, None como el menos urgente
        match (state_a.age_days, state_b.age_days) {
            (Some(age_a), Some(age_b)) => age_b.cmp(&age_a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl Default for PrioritySorter {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// GroupPartitioner - Partición por técnico
// ==========================================
pub struct GroupPartitioner;

impl GroupPartitioner {
    pub fn new() -> Self {
        Self
    }

    /// Particiona la secuencia ya ordenada en grupos contiguos.
    ///
    /// Como el técnico es clave de orden y la prioridad se deriva de él,
    /// cada grupo ocupa un tramo contiguo; los grupos salen en orden de
    /// primera aparición dentro de la secuencia ordenada (el orden
    /// canónico de los resúmenes y del export).
    pub fn partition(&self, sorted: &[ClassifiedOrder]) -> Vec<(String, Range<usize>)> {
        let mut groups: Vec<(String, Range<usize>)> = Vec::new();

        for (idx, (record, _)) in sorted.iter().enumerate() {
            match groups.last_mut() {
                Some((label, range)) if *label == record.technician => {
                    range.end = idx + 1;
                }
                _ => {
                    groups.push((record.technician.clone(), idx..idx + 1));
                }
            }
        }

        groups
    }
}

impl Default for GroupPartitioner {
    fn default() -> Self {
        Self::new()
    }
}
