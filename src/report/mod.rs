mod console;
mod markdown;

pub use console::ConsoleReport;
pub use markdown::MarkdownReport;
