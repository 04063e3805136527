mod extractor;
mod isolator;
pub mod labels;
mod pipeline;
mod renderer;
mod sanitizer;
mod steps;

pub use extractor::{extract_images, extract_page_reference, Extraction};
pub use isolator::isolate_first_answer;
pub use pipeline::{AnswerPipeline, ChatResult};
pub use renderer::render_html;
pub use sanitizer::{clean_citations, scrub, scrub_stages};
pub use steps::number_steps;
