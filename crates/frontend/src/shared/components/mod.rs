pub mod markdown;
pub mod research_panel;

pub use markdown::Markdown;
pub use research_panel::ResearchPanel;
