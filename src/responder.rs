//! Static question answering over the bundled Q&A table.

mod engine;
mod fallback;
mod knowledge;
mod matching;
mod templating;

pub use engine::StaticResponder;
pub use knowledge::{BUNDLED_QA, QaRecord, QaTable};
pub use templating::render_template;
