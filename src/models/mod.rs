pub mod answer_key;
pub mod import_record;
pub mod job;
pub mod loaders;
pub mod question;

pub use answer_key::AnswerKey;
pub use import_record::ImportRecord;
pub use job::ConvertJob;
pub use loaders::{load_job_file, load_text_file};
pub use question::{ChoiceSet, ExtractedQuestion, ParseStats, ParsedQuestion, QuestionBlock};
