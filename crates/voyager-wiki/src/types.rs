//! Search and page types.

/// The wiki API never returns more than this many candidates for us.
pub const MAX_RESULTS: usize = 5;

/// One usable search candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub page_id: u64,
    pub title: String,
    /// Raw snippet as returned by the API, including match markers.
    pub snippet: String,
}

/// A search result slot, kept in provider order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEntry {
    Hit(SearchHit),
    /// The API returned an entry without a title, snippet or page ID.
    Incomplete { page_id: Option<u64> },
}

impl SearchEntry {
    pub fn hit(&self) -> Option<&SearchHit> {
        match self {
            SearchEntry::Hit(hit) => Some(hit),
            SearchEntry::Incomplete { .. } => None,
        }
    }
}

/// Ordered candidates from one search call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub entries: Vec<SearchEntry>,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The hit at zero-based `index`, unless that slot is incomplete.
    pub fn selectable(&self, index: usize) -> Option<&SearchHit> {
        self.entries.get(index).and_then(SearchEntry::hit)
    }
}

/// Plain-text body of one wiki page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDocument {
    pub page_id: u64,
    pub title: String,
    pub text: String,
}
