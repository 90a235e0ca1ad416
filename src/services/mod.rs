pub mod answer_key;
pub mod csv_export;
pub mod extractor;
pub mod reshape;
pub mod resolver;
pub mod splitter;
pub mod warn_writer;

pub use answer_key::parse_answer_key;
pub use csv_export::CsvExporter;
pub use extractor::{extract_question, SkipReason};
pub use reshape::ReshapeService;
pub use resolver::resolve_correct_answer;
pub use splitter::{normalize_line_endings, split_blocks};
pub use warn_writer::WarnWriter;
