//! Response parsing for the search and extract calls.

use serde_json::Value;

use crate::types::{PageDocument, SearchEntry, SearchHit, SearchResults};
use crate::LookupError;

/// MediaWiki reports request problems in an `error` object with a 200 status.
fn api_error(json: &Value) -> Option<LookupError> {
    let error = json.get("error")?;
    let info = error["info"]
        .as_str()
        .or_else(|| error["code"].as_str())
        .unwrap_or("unknown error");
    Some(LookupError::Api(info.to_string()))
}

pub(crate) fn parse_search(json: &Value, limit: usize) -> Result<SearchResults, LookupError> {
    if let Some(err) = api_error(json) {
        return Err(err);
    }

    let items = json
        .get("query")
        .and_then(|q| q.get("search"))
        .and_then(Value::as_array)
        .ok_or_else(|| LookupError::Malformed("response has no query.search".to_string()))?;

    let entries = items
        .iter()
        .take(limit)
        .map(|item| {
            let page_id = item["pageid"].as_u64();
            match (page_id, item["title"].as_str(), item["snippet"].as_str()) {
                (Some(page_id), Some(title), Some(snippet)) => SearchEntry::Hit(SearchHit {
                    page_id,
                    title: title.to_string(),
                    snippet: snippet.to_string(),
                }),
                _ => SearchEntry::Incomplete { page_id },
            }
        })
        .collect();

    Ok(SearchResults { entries })
}

pub(crate) fn parse_extract(json: &Value, page_id: u64) -> Result<PageDocument, LookupError> {
    if let Some(err) = api_error(json) {
        return Err(err);
    }

    let page = json
        .get("query")
        .and_then(|q| q.get("pages"))
        .and_then(Value::as_array)
        .and_then(|pages| pages.first())
        .ok_or_else(|| LookupError::Malformed("response has no query.pages".to_string()))?;

    if page["missing"].as_bool().unwrap_or(false) || page["invalid"].as_bool().unwrap_or(false) {
        return Err(LookupError::PageMissing(page_id));
    }

    let text = page["extract"]
        .as_str()
        .ok_or_else(|| LookupError::Malformed("page has no extract".to_string()))?;

    Ok(PageDocument {
        page_id: page["pageid"].as_u64().unwrap_or(page_id),
        title: page["title"].as_str().unwrap_or_default().to_string(),
        text: text.to_string(),
    })
}
