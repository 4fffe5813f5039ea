// ==========================================
// Gestión Postventa - Escritores de salida
// ==========================================
// Colaboradores de I/O del ensamblador: CSV con la proyección fija y
// archivos de mensaje por taller. El estilo visual (colores, anchos)
// queda para el consumidor del export.
// ==========================================

use crate::domain::{ExportLine, ExportRow};
use crate::importer::error::{ImportError, ImportResult};
use std::path::{Path, PathBuf};

/// Cabeceras canónicas del export, en el orden fijo de la proyección.
pub const EXPORT_HEADERS: [&str; 10] = [
    "Enviado",
    "Alerta",
    "#Orden",
    "Fecha",
    "Técnico",
    "Estado",
    "Producto",
    "Serie/Artículo",
    "Repuestos",
    "Dias_Antiguedad",
];

/// Escribe la secuencia de export como CSV.
///
/// Los marcadores de límite se vuelcan como una fila con la etiqueta
/// del taller en la primera celda y el resto vacío.
pub fn write_export_csv<P: AsRef<Path>>(path: P, lines: &[ExportLine]) -> ImportResult<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path).map_err(|e| ImportError::ExportWriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    writer.write_record(EXPORT_HEADERS)?;

    for line in lines {
        match line {
            ExportLine::GroupBoundary { label, .. } => {
                let mut record = vec![format!("=== {} ===", label)];
                record.extend(std::iter::repeat(String::new()).take(EXPORT_HEADERS.len() - 1));
                writer.write_record(&record)?;
            }
            ExportLine::Order(row) => {
                writer.write_record(csv_record(row))?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

fn csv_record(row: &ExportRow) -> Vec<String> {
    vec![
        row.acknowledgement.clone(),
        row.alert_label.clone(),
        row.order_id.clone(),
        row.opened_at_raw.clone(),
        row.technician.clone(),
        row.status.clone(),
        row.product.clone(),
        row.serial.clone(),
        row.parts_note.clone(),
        row.age_days.map(|d| d.to_string()).unwrap_or_default(),
    ]
}

/// Escribe un archivo de mensaje por taller (`Mensaje_{taller}.txt`).
///
/// # Retorno
/// Rutas de los archivos escritos, en el mismo orden de los grupos.
pub fn write_group_messages<P: AsRef<Path>>(
    dir: P,
    messages: &[(String, String)],
) -> ImportResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(messages.len());
    for (label, body) in messages {
        let file_name = format!("Mensaje_{}.txt", sanitize_label(label));
        let path = dir.join(file_name);
        std::fs::write(&path, body).map_err(|e| ImportError::ExportWriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        written.push(path);
    }

    Ok(written)
}

/// La etiqueta del taller es texto libre; se limpia lo que no puede
/// ir en un nombre de archivo.
fn sanitize_label(label: &str) -> String {
    let cleaned: String = label
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            other => other,
        })
        .collect();

    if cleaned.trim().is_empty() {
        "SIN_TECNICO".to_string()
    } else {
        cleaned
    }
}
