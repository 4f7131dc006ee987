//! # Folio Search
//!
//! In-document text search with relevance scoring and pagination.
//! Every request is a stateless, synchronous pipeline over one document;
//! nothing is cached between requests.
//!
//! ## Architecture
//! ```text
//! SearchEngine::search(request)
//!   ├── ContentLoader   path / file:// / http(s) → UTF-8 text
//!   ├── Document        split into lines, line → page mapping
//!   ├── matcher         case-insensitive substring scan per line
//!   ├── per hit: context window + relevance score + <mark> highlight
//!   └── paginate        slice the ordered hit list into the requested page
//! ```

pub mod command;
pub mod context;
pub mod document;
pub mod engine;
pub mod highlight;
pub mod loader;
pub mod matcher;
pub mod paginate;
pub mod score;

pub use command::{CommandParser, ReadingCommand};
pub use document::Document;
pub use engine::{SearchEngine, SearchHit, SearchRequest, SearchResponse};
pub use highlight::Highlighter;
pub use loader::ContentLoader;
pub use score::RelevanceScorer;
