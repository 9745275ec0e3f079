use crate::{Generation, SearchCriteria};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartSearch { criteria: SearchCriteria },
    FetchResults { generation: Generation, query: String },
}
