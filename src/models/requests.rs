use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to score one catalog item for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "candidate_id", rename = "candidateId")]
    pub candidate_id: String,
}

/// Request for a user's recommendation list
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to summarize saved favourites
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SummarizeRequest {
    #[validate(length(min = 1, message = "No items provided"))]
    #[serde(alias = "item_ids", rename = "itemIds", default)]
    pub item_ids: Vec<String>,
}
