pub mod error;
pub mod headers;
pub mod mapping;

pub use error::{IngestError, Result};
pub use headers::{read_csv_headers, read_headers, read_tsv_headers};
pub use mapping::{TermMapping, load_term_mapping};
