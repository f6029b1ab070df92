pub mod csv_table;
pub mod table_schema;

pub use csv_table::{CsvTable, read_csv_table};
pub use table_schema::parse_table_schema;
