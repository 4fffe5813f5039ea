// ==========================================
// Gestión Postventa - Capa de importación
// ==========================================
// Responsabilidad: archivo → tabla cruda → registros de orden
// El núcleo de triaje recibe valores ya decodificados; los fallos de
// lectura se quedan en esta capa
// ==========================================

pub mod error;
pub mod field_resolver;
pub mod file_parser;
pub mod record_mapper;

pub use error::{ImportError, ImportResult};
pub use field_resolver::{ColumnBindings, FieldResolver, LogicalRole};
pub use file_parser::{CsvParser, ExcelParser, RawTable, UniversalFileParser};
pub use record_mapper::RecordMapper;
