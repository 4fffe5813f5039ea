// ==========================================
// Gestión Postventa - Entrada de línea de comandos
// ==========================================
// Flujo: argumentos → logs → configuración → archivo → triaje →
// resumen en consola + export CSV + mensajes por taller
// ==========================================

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use postventa_triage::{logging, TriageConfig, TriageOrchestrator, UniversalFileParser};
use std::path::PathBuf;

/// Triaje de órdenes de servicio postventa.
#[derive(Parser, Debug)]
#[command(name = "postventa-triage", version, about)]
struct Cli {
    /// Archivo de órdenes (.csv / .xlsx / .xls)
    entrada: PathBuf,

    /// Archivo de configuración JSON (parcial o completo)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fecha de referencia de la corrida (YYYY-MM-DD; por defecto, hoy)
    #[arg(long)]
    hoy: Option<NaiveDate>,

    /// Ruta del CSV de salida con la proyección fija
    #[arg(long)]
    salida: Option<PathBuf>,

    /// Directorio donde escribir los mensajes por taller
    #[arg(long)]
    mensajes: Option<PathBuf>,

    /// Insertar filas marcadoras al inicio de cada grupo en el export
    #[arg(long)]
    separadores: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", postventa_triage::APP_NAME);
    tracing::info!("Versión: {}", postventa_triage::VERSION);
    tracing::info!("==================================================");

    // Configuración efectiva
    let mut config = match &cli.config {
        Some(path) => TriageConfig::from_json_file(path)
            .with_context(|| format!("no se pudo cargar la configuración {}", path.display()))?,
        None => TriageConfig::default(),
    };
    if cli.separadores {
        config.include_boundary_markers = true;
    }

    // El instante de referencia se fija una sola vez, antes del cálculo
    let today = cli.hoy.unwrap_or_else(|| chrono::Local::now().date_naive());

    // Lectura del archivo (única etapa que puede abortar la corrida)
    let table = UniversalFileParser
        .parse(&cli.entrada)
        .with_context(|| format!("no se pudo leer {}", cli.entrada.display()))?;

    let report = TriageOrchestrator::new().run(&table, today, &config);

    if report.totals.total_eligible == 0 {
        // Resultado definido, no un error
        println!("No hay órdenes activas.");
    } else {
        for summary in &report.summaries {
            let icon = if summary.is_privileged { "🏢" } else { "🔧" };
            let mut line = format!(
                "{} {} ({} órdenes)",
                icon, summary.label, summary.member_count
            );
            if summary.urgent_count > 0 {
                line.push_str(&format!(" | 🚩 {} CRÍTICOS", summary.urgent_count));
            }
            println!("{}", line);
        }
        println!(
            "Total: {} pendientes, {} críticas, {} talleres",
            report.totals.total_eligible, report.totals.total_urgent, report.totals.distinct_groups
        );
    }

    if let Some(path) = &cli.salida {
        postventa_triage::export::write_export_csv(path, &report.export)
            .with_context(|| format!("no se pudo escribir {}", path.display()))?;
        tracing::info!(path = %path.display(), "export CSV escrito");
    }

    if let Some(dir) = &cli.mensajes {
        let written = postventa_triage::export::write_group_messages(dir, &report.messages)
            .with_context(|| format!("no se pudieron escribir los mensajes en {}", dir.display()))?;
        tracing::info!(count = written.len(), dir = %dir.display(), "mensajes escritos");
    }

    Ok(())
}
