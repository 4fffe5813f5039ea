// ==========================================
// Gestión Postventa - Errores del importador
// ==========================================
// Herramienta: macros derive de thiserror
// Nota: esta capa es la única que puede abortar una corrida; los
// motores aguas abajo nunca fallan (recuperan localmente)
// ==========================================

use thiserror::Error;

/// Errores de la capa de importación y configuración.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Errores de archivo =====
    #[error("archivo no encontrado: {0}")]
    FileNotFound(String),

    #[error("formato de archivo no soportado: {0} (solo .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("fallo al leer el archivo: {0}")]
    FileReadError(String),

    #[error("fallo al parsear CSV: {0}")]
    CsvParseError(String),

    #[error("fallo al parsear Excel: {0}")]
    ExcelParseError(String),

    #[error("tabla vacía: {0}")]
    EmptyTable(String),

    // ===== Errores de configuración =====
    #[error("fallo al leer la configuración ({path}): {message}")]
    ConfigReadError { path: String, message: String },

    #[error("configuración inválida ({path}): {message}")]
    ConfigValueError { path: String, message: String },

    // ===== Errores de export =====
    #[error("fallo al escribir el export ({path}): {message}")]
    ExportWriteError { path: String, message: String },

    // ===== Genérico =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Alias de Result para la capa de importación.
pub type ImportResult<T> = Result<T, ImportError>;
