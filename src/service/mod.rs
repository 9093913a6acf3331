pub mod analyzer;
pub mod crawler;
pub mod fetcher;
pub mod http;
pub mod links;
pub mod reporter;
pub mod text;

pub use analyzer::Analyzer;
pub use crawler::Crawler;
pub use fetcher::PageFetcher;
