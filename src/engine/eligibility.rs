// ==========================================
// Gestión Postventa - Filtro de elegibilidad
// ==========================================
// Responsabilidad: decidir qué órdenes representan trabajo activo
// Dos ejes: exclusión por estado terminal (lista negra) + inclusión
// por actividad (lista blanca, solo grupos no privilegiados)
// Línea roja: el filtro es una proyección de subconjunto — nunca
// duplica ni sintetiza registros
// ==========================================

use crate::config::TriageConfig;
use crate::domain::ClassifiedOrder;

// ==========================================
// EligibilityFilter
// ==========================================
pub struct EligibilityFilter;

impl EligibilityFilter {
    pub fn new() -> Self {
        Self
    }

    /// Normaliza un estado: recortado + mayúsculas.
    ///
    /// Estado ausente se trata como cadena vacía: no coincide con
    /// ninguna lista y, de no ser privilegiada, la orden queda fuera.
    pub fn normalize_status(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    /// Grupo privilegiado: el técnico empieza con el prefijo, sin
    /// distinguir mayúsculas. La clave de agrupación sigue siendo el
    /// valor exacto; esta comprobación es aparte.
    pub fn is_privileged(technician: &str, prefix: &str) -> bool {
        if prefix.is_empty() {
            return false;
        }
        technician.to_uppercase().starts_with(&prefix.to_uppercase())
    }

    /// Exclusión por estado terminal: alguna subcadena de la lista
    /// negra aparece en el estado normalizado.
    pub fn is_blacklisted(&self, status_normalized: &str, terminal_tokens: &[String]) -> bool {
        terminal_tokens
            .iter()
            .any(|token| status_normalized.contains(token.trim().to_uppercase().as_str()))
    }

    /// Inclusión por actividad: alguna subcadena de la lista blanca
    /// aparece en el estado normalizado.
    pub fn matches_whitelist(&self, status_normalized: &str, whitelist_tokens: &[String]) -> bool {
        whitelist_tokens
            .iter()
            .any(|token| status_normalized.contains(token.trim().to_uppercase().as_str()))
    }

    /// Regla completa de elegibilidad.
    ///
    /// # Regla (política canónica)
    /// 1. Lista negra → fuera, para todos los grupos
    ///    (con `privileged_bypass_blacklist` los privilegiados la saltan;
    ///    las variantes del negocio no coinciden en este punto)
    /// 2. Grupo privilegiado → dentro sin exigir lista blanca
    /// 3. Resto → dentro solo si coincide con la lista blanca
    pub fn is_eligible(
        &self,
        status_normalized: &str,
        is_privileged: bool,
        config: &TriageConfig,
    ) -> bool {
        let blacklisted = self.is_blacklisted(status_normalized, &config.terminal_status_tokens);

        if blacklisted && !(is_privileged && config.privileged_bypass_blacklist) {
            return false;
        }

        is_privileged || self.matches_whitelist(status_normalized, &config.whitelist_status_tokens)
    }

    /// Filtra el conjunto clasificado, conservando el orden de entrada.
    pub fn filter(
        &self,
        orders: Vec<ClassifiedOrder>,
        config: &TriageConfig,
    ) -> Vec<ClassifiedOrder> {
        let before = orders.len();

        let eligible: Vec<ClassifiedOrder> = orders
            .into_iter()
            .filter(|(_, state)| {
                self.is_eligible(&state.status_normalized, state.is_privileged_group, config)
            })
            .collect();

        tracing::debug!(
            total = before,
            eligible = eligible.len(),
            excluded = before - eligible.len(),
            "filtro de elegibilidad aplicado"
        );

        eligible
    }
}

impl Default for EligibilityFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> EligibilityFilter {
        EligibilityFilter::new()
    }

    #[test]
    fn test_normalize_status() {
        assert_eq!(EligibilityFilter::normalize_status("  facturado parcial "), "FACTURADO PARCIAL");
        assert_eq!(EligibilityFilter::normalize_status(""), "");
    }

    #[test]
    fn test_is_privileged_case_insensitive() {
        assert!(EligibilityFilter::is_privileged("GOnorte", "GO"));
        assert!(EligibilityFilter::is_privileged("gosur", "GO"));
        assert!(!EligibilityFilter::is_privileged("Taller Sur", "GO"));
        assert!(!EligibilityFilter::is_privileged("", "GO"));
    }

    #[test]
    fn test_blacklist_substring_match() {
        let config = TriageConfig::default();
        let status = EligibilityFilter::normalize_status("facturado parcial");

        assert!(filter().is_blacklisted(&status, &config.terminal_status_tokens));
        // Excluida sin importar el grupo
        assert!(!filter().is_eligible(&status, true, &config));
        assert!(!filter().is_eligible(&status, false, &config));
    }

    #[test]
    fn test_privileged_bypasses_whitelist() {
        let config = TriageConfig::default();
        let status = EligibilityFilter::normalize_status("en espera");

        assert!(filter().is_eligible(&status, true, &config));
        assert!(!filter().is_eligible(&status, false, &config));
    }

    #[test]
    fn test_whitelist_token_includes_standard_group() {
        let config = TriageConfig::default();
        let status = EligibilityFilter::normalize_status("Solicita repuesto");

        assert!(filter().is_eligible(&status, false, &config));
    }

    #[test]
    fn test_non_privileged_without_token_excluded() {
        let config = TriageConfig::default();
        let status = EligibilityFilter::normalize_status("En revisión");

        assert!(!filter().is_eligible(&status, false, &config));
    }

    #[test]
    fn test_empty_status_fails_whitelist() {
        let config = TriageConfig::default();

        assert!(!filter().is_eligible("", false, &config));
        // Privilegiada con estado vacío sí entra (no hay lista negra que la toque)
        assert!(filter().is_eligible("", true, &config));
    }

    #[test]
    fn test_privileged_bypass_blacklist_config() {
        let mut config = TriageConfig::default();
        config.privileged_bypass_blacklist = true;
        let status = EligibilityFilter::normalize_status("ENTREGADO al cliente");

        assert!(filter().is_eligible(&status, true, &config));
        assert!(!filter().is_eligible(&status, false, &config));
    }
}
