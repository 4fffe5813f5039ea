// ==========================================
// Gestión Postventa - Parseo de archivos de órdenes
// ==========================================
// Soporta: Excel (.xlsx/.xls) / CSV (.csv)
// CSV: primero UTF-8 con coma; si falla, Latin-1 con punto y coma
// (los exports del sistema comercial llegan en ambas formas)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::path::Path;

// ==========================================
// RawTable - Tabla cruda decodificada
// ==========================================
// Las cabeceras conservan el orden original de columnas: el resolutor
// de campos depende de ese orden para el barrido y para el fallback
// a la columna 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ==========================================
// CsvParser
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// Parsea un archivo CSV a tabla cruda.
    ///
    /// Intento 1: UTF-8 delimitado por coma. Intento 2 (si el primero
    /// falla por codificación o estructura): Latin-1 delimitado por
    /// punto y coma. Latin-1 se decodifica byte a byte (mapa identidad
    /// a U+00FF), no hace falta tabla externa.
    pub fn parse(&self, file_path: &Path) -> ImportResult<RawTable> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let bytes = std::fs::read(file_path)?;

        match String::from_utf8(bytes.clone()) {
            Ok(text) => match parse_delimited(&text, b',') {
                Ok(table) => Ok(table),
                Err(_) => {
                    let latin1 = decode_latin1(&bytes);
                    parse_delimited(&latin1, b';')
                }
            },
            Err(_) => {
                let latin1 = decode_latin1(&bytes);
                parse_delimited(&latin1, b';')
            }
        }
    }
}

/// Decodifica Latin-1: cada byte es el code point homónimo.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Parsea texto delimitado ya decodificado.
fn parse_delimited(text: &str, delimiter: u8) -> ImportResult<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true) // se toleran filas de largo distinto
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() {
        return Err(ImportError::EmptyTable("CSV sin cabecera".to_string()));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Vec<String> = record.iter().map(|v| v.trim().to_string()).collect();

        // Se descartan las filas completamente en blanco
        if row.iter().all(|v| v.is_empty()) {
            continue;
        }

        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

// ==========================================
// ExcelParser
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    /// Parsea la primera hoja de un libro Excel a tabla cruda.
    pub fn parse(&self, file_path: &Path) -> ImportResult<RawTable> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook = open_workbook_auto(file_path)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::EmptyTable(
                "el libro Excel no tiene hojas".to_string(),
            ));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut sheet_rows = range.rows();
        let header_row = sheet_rows.next().ok_or_else(|| {
            ImportError::EmptyTable("la hoja Excel no tiene filas".to_string())
        })?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for data_row in sheet_rows {
            let row: Vec<String> = data_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect();

            if row.iter().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row);
        }

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// UniversalFileParser (elige por extensión)
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse(path),
            "xlsx" | "xls" => ExcelParser.parse(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn temp_csv(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_csv_utf8_comma() {
        let file = temp_csv("Fecha,Técnico,Estado\n01/02/2024,GOnorte,Solicita\n".as_bytes());

        let table = CsvParser.parse(file.path()).unwrap();

        assert_eq!(table.headers, vec!["Fecha", "Técnico", "Estado"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][1], "GOnorte");
    }

    #[test]
    fn test_csv_latin1_semicolon_fallback() {
        // "Técnico" en Latin-1: la é es el byte 0xE9, inválido en UTF-8
        let mut content: Vec<u8> = Vec::new();
        content.extend_from_slice(b"Fecha;T\xE9cnico;Estado\n");
        content.extend_from_slice(b"01/02/2024;Taller Sur;Solicita repuesto\n");
        let file = temp_csv(&content);

        let table = CsvParser.parse(file.path()).unwrap();

        assert_eq!(table.headers[1], "Técnico");
        assert_eq!(table.rows[0][1], "Taller Sur");
    }

    #[test]
    fn test_csv_skips_blank_rows() {
        let file = temp_csv(b"A,B\n1,2\n,\n3,4\n");

        let table = CsvParser.parse(file.path()).unwrap();

        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_csv_trims_cells() {
        let file = temp_csv(b"A,B\n  x  , y\n");

        let table = CsvParser.parse(file.path()).unwrap();

        assert_eq!(table.rows[0], vec!["x", "y"]);
    }

    #[test]
    fn test_csv_file_not_found() {
        let result = CsvParser.parse(Path::new("no_existe.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let result = UniversalFileParser.parse("ordenes.pdf");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
