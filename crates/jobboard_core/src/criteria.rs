pub const DEFAULT_QUERY: &str = "data scientist";
pub const DEFAULT_RESULTS_WANTED: u32 = 150;

/// Which search input the user edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Query,
    ExcludeKeywords,
    ExcludeTitles,
    ResultsWanted,
}

/// Current text of the search form. Criteria are derived from it per action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInputs {
    pub query: String,
    pub exclude_keywords: String,
    pub exclude_titles: String,
    pub results_wanted: String,
}

impl Default for SearchInputs {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            exclude_keywords: String::new(),
            exclude_titles: String::new(),
            results_wanted: DEFAULT_RESULTS_WANTED.to_string(),
        }
    }
}

impl SearchInputs {
    pub(crate) fn set(&mut self, field: InputField, text: String) {
        match field {
            InputField::Query => self.query = text,
            InputField::ExcludeKeywords => self.exclude_keywords = text,
            InputField::ExcludeTitles => self.exclude_titles = text,
            InputField::ResultsWanted => self.results_wanted = text,
        }
    }

    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            query: self.query.clone(),
            exclude_keywords: self.exclude_keywords.clone(),
            exclude_titles: self.exclude_titles.clone(),
            results_wanted: parse_results_wanted(&self.results_wanted),
        }
    }
}

/// Parameters of a single start-search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query: String,
    /// Comma-separated keywords; the service splits them.
    pub exclude_keywords: String,
    /// Comma-separated title fragments; the service splits them.
    pub exclude_titles: String,
    pub results_wanted: u32,
}

fn parse_results_wanted(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(count) if count > 0 => count,
        _ => DEFAULT_RESULTS_WANTED,
    }
}
