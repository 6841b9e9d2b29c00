use serde_json::Value;

use crate::dictionary::Dictionary;

pub const DEFAULT_ENDPOINT: &str = "https://he.wiktionary.org/w/api.php";

/// Dictionary backed by a MediaWiki `prop=extracts` query against the
/// Hebrew Wiktionary. A candidate is looked up by exact title; the first
/// sentence of the markup-stripped extract becomes the definition. Every
/// transport or parse failure collapses to "absent", same as a missing page.
#[derive(Debug, Clone)]
pub struct WiktionaryDictionary {
    endpoint: String,
}

impl WiktionaryDictionary {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }
}

impl Default for WiktionaryDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for WiktionaryDictionary {
    fn lookup(&self, candidate: &str) -> Option<String> {
        let mut resp = ureq::get(&self.endpoint)
            .query("action", "query")
            .query("titles", candidate)
            .query("prop", "extracts")
            .query("format", "json")
            .call()
            .ok()?;
        let body: Value = resp.body_mut().read_json().ok()?;
        definition_from_response(&body)
    }
}

/// Pull the definition out of a `action=query&prop=extracts` response.
/// Returns `None` for missing pages, empty extracts, and any shape the
/// parser does not recognize.
pub fn definition_from_response(body: &Value) -> Option<String> {
    let pages = body.get("query")?.get("pages")?.as_object()?;
    let page = pages.values().next()?;
    if page.get("missing").is_some() {
        return None;
    }
    let extract = page.get("extract")?.as_str()?;
    definition_from_extract(extract)
}

/// Strip HTML markup from an extract and keep the text up to the first
/// period.
pub fn definition_from_extract(extract: &str) -> Option<String> {
    let text = strip_markup(extract);
    let first_sentence = text.split('.').next().unwrap_or("").trim();
    if first_sentence.is_empty() {
        None
    } else {
        Some(first_sentence.to_string())
    }
}

/// Drop `<...>` tag spans, keeping the text between them.
fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}
