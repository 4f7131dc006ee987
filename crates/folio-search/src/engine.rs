//! Search engine — orchestrates the load → index → match → rank pipeline.

use folio_core::config::SearchConfig;
use folio_core::error::Result;
use serde::{Deserialize, Serialize};

use crate::context;
use crate::document::Document;
use crate::highlight::Highlighter;
use crate::loader::ContentLoader;
use crate::matcher;
use crate::paginate;
use crate::score::RelevanceScorer;

/// A search request against a single document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Local path, `file://` URL, or HTTP(S) URL of the document.
    pub document_locator: String,
    pub query: String,
    /// 1-based result page.
    #[serde(default = "default_page")]
    pub page: usize,
    /// Results per page.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    10
}

/// One matching line of a searched document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Display page the line falls on.
    pub page: usize,
    /// Windowed snippet with the hit line wrapped in `>>> … <<<`.
    pub context: String,
    /// The hit line with every occurrence wrapped in `<mark>` tags.
    pub highlighted_text: String,
    /// 1-based line number, stringly typed for client compatibility.
    pub position: String,
    pub relevance_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    /// Matching-line count before pagination.
    pub total_results: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub results: Vec<SearchHit>,
}

/// Stateless per-request search pipeline over plain-text documents.
/// No caching: every search re-reads and re-scans the document.
pub struct SearchEngine {
    loader: ContentLoader,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(loader: ContentLoader, config: SearchConfig) -> Self {
        Self { loader, config }
    }

    /// Run a full search: load, scan, rank, paginate.
    pub async fn search(&self, req: &SearchRequest) -> Result<SearchResponse> {
        let current_page = req.page.max(1);

        // Lenient by contract: a blank query is zero results, not an error.
        if req.query.trim().is_empty() {
            tracing::debug!("blank query for {}, returning empty result set", req.document_locator);
            return Ok(SearchResponse {
                query: req.query.clone(),
                total_results: 0,
                current_page,
                total_pages: 0,
                results: Vec::new(),
            });
        }

        let text = self.loader.load(&req.document_locator).await?;
        let doc = Document::from_text(&text);

        let matches = matcher::matching_lines(doc.lines(), &req.query);
        let total_results = matches.len();

        let scorer = RelevanceScorer::new(&req.query);
        let highlighter = Highlighter::new(&req.query);

        let hits: Vec<SearchHit> = matches
            .iter()
            .map(|&idx| {
                let line = &doc.lines()[idx];
                SearchHit {
                    page: doc.page_for_line(idx, self.config.lines_per_page),
                    context: context::context_snippet(doc.lines(), idx, self.config.context_lines),
                    highlighted_text: highlighter.highlight(line),
                    position: (idx + 1).to_string(),
                    relevance_score: scorer.score(line),
                }
            })
            .collect();

        let (results, total_pages) = paginate::paginate(&hits, req.page, req.limit);

        tracing::debug!(
            "🔎 '{}' in {}: {} match(es), page {}/{}",
            req.query,
            req.document_locator,
            total_results,
            current_page,
            total_pages
        );

        Ok(SearchResponse {
            query: req.query.clone(),
            total_results,
            current_page,
            total_pages,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn engine() -> SearchEngine {
        let config = SearchConfig::default();
        let loader = ContentLoader::new(config.max_document_bytes, config.fetch_timeout_secs)
            .expect("loader");
        SearchEngine::new(loader, config)
    }

    fn write_doc(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, "{content}").expect("write");
        file
    }

    fn request(locator: &str, query: &str, page: usize, limit: usize) -> SearchRequest {
        SearchRequest {
            document_locator: locator.into(),
            query: query.into(),
            page,
            limit,
        }
    }

    const CAT_DOC: &str = "The cat sat.\nA cat ran far.\nDogs bark.";

    #[tokio::test]
    async fn test_two_hits_first_page() {
        let doc = write_doc(CAT_DOC);
        let locator = doc.path().to_str().expect("utf8 path");

        let resp = engine().search(&request(locator, "cat", 1, 10)).await.expect("search");
        assert_eq!(resp.total_results, 2);
        assert_eq!(resp.total_pages, 1);
        assert_eq!(resp.current_page, 1);
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[0].position, "1");
        assert_eq!(resp.results[1].position, "2");
        assert_eq!(resp.results[0].page, 1);
        assert_eq!(resp.results[1].page, 1);
    }

    #[tokio::test]
    async fn test_second_page_limit_one() {
        let doc = write_doc(CAT_DOC);
        let locator = doc.path().to_str().expect("utf8 path");

        let resp = engine().search(&request(locator, "cat", 2, 1)).await.expect("search");
        assert_eq!(resp.total_results, 2);
        assert_eq!(resp.total_pages, 2);
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].position, "2");
        assert_eq!(resp.results[0].highlighted_text, "A <mark>cat</mark> ran far.");
    }

    #[tokio::test]
    async fn test_no_matches() {
        let doc = write_doc(CAT_DOC);
        let locator = doc.path().to_str().expect("utf8 path");

        let resp = engine().search(&request(locator, "elephant", 1, 10)).await.expect("search");
        assert_eq!(resp.total_results, 0);
        assert_eq!(resp.total_pages, 0);
        assert!(resp.results.is_empty());
    }

    #[tokio::test]
    async fn test_blank_query_is_empty_success() {
        let doc = write_doc(CAT_DOC);
        let locator = doc.path().to_str().expect("utf8 path");

        for query in ["", "   ", "\t"] {
            let resp = engine().search(&request(locator, query, 1, 10)).await.expect("search");
            assert_eq!(resp.total_results, 0);
            assert_eq!(resp.total_pages, 0);
            assert!(resp.results.is_empty());
        }
    }

    #[tokio::test]
    async fn test_total_results_independent_of_pagination() {
        let doc = write_doc(&"cat\n".repeat(25));
        let locator = doc.path().to_str().expect("utf8 path");

        let resp = engine().search(&request(locator, "cat", 3, 4)).await.expect("search");
        assert_eq!(resp.total_results, 25);
        assert_eq!(resp.total_pages, 7);
        assert_eq!(resp.results.len(), 4);
        assert_eq!(resp.results[0].position, "9");
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_empty() {
        let doc = write_doc(CAT_DOC);
        let locator = doc.path().to_str().expect("utf8 path");

        let resp = engine().search(&request(locator, "cat", 9, 10)).await.expect("search");
        assert_eq!(resp.total_results, 2);
        assert!(resp.results.is_empty());
    }

    #[tokio::test]
    async fn test_context_marks_hit_line() {
        let doc = write_doc(CAT_DOC);
        let locator = doc.path().to_str().expect("utf8 path");

        let resp = engine().search(&request(locator, "cat", 1, 10)).await.expect("search");
        assert_eq!(resp.results[0].context, ">>> The cat sat. <<<\nA cat ran far.\nDogs bark.");
    }

    #[tokio::test]
    async fn test_page_numbers_follow_lines_per_page() {
        // 34 lines; the hit on line 31 lands on display page 2.
        let mut content = vec!["filler"; 34];
        content[30] = "the cat";
        let doc = write_doc(&content.join("\n"));
        let locator = doc.path().to_str().expect("utf8 path");

        let resp = engine().search(&request(locator, "cat", 1, 10)).await.expect("search");
        assert_eq!(resp.results[0].page, 2);
        assert_eq!(resp.results[0].position, "31");
    }

    #[tokio::test]
    async fn test_missing_document_fails() {
        let resp = engine().search(&request("/nonexistent/book.txt", "cat", 1, 10)).await;
        assert!(resp.is_err());
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let hit = SearchHit {
            page: 1,
            context: "ctx".into(),
            highlighted_text: "<mark>x</mark>".into(),
            position: "1".into(),
            relevance_score: 0.8,
        };
        let json = serde_json::to_value(&hit).expect("serialize");
        assert!(json.get("highlightedText").is_some());
        assert!(json.get("relevanceScore").is_some());

        let req: SearchRequest = serde_json::from_str(
            r#"{"documentLocator": "book.txt", "query": "cat"}"#,
        )
        .expect("deserialize");
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 10);
    }
}
