//! Record fetcher implementations

pub mod failing;
pub mod in_memory;

pub use failing::FailingFetcher;
pub use in_memory::InMemoryFetcher;
