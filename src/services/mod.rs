pub mod backend;
pub mod feedback;
pub mod filter;
pub mod loader;
pub mod recommendations;

pub use backend::{ArticleBackend, HttpBackend};
pub use filter::FilterQuery;
pub use loader::LoadedCollection;
