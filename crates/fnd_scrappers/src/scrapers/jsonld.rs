use scraper::{Html, Selector};
use serde_json::Value;

/// Headline from JSON-LD metadata, if the page declares one.
pub fn extract_headline(document: &Html) -> Option<String> {
    let selector = Selector::parse("script[type='application/ld+json']").ok()?;
    document
        .select(&selector)
        .filter_map(|script| {
            serde_json::from_str::<Value>(script.text().collect::<String>().trim()).ok()
        })
        .find_map(|json| headline_of(&json))
}

fn headline_of(json: &Value) -> Option<String> {
    match json {
        // @graph documents and top-level arrays list several nodes
        Value::Array(nodes) => nodes.iter().find_map(headline_of),
        Value::Object(obj) => obj
            .get("headline")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(str::to_string)
            .or_else(|| obj.get("@graph").and_then(headline_of)),
        _ => None,
    }
}
