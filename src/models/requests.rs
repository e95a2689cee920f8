use crate::models::domain::{OptionIndex, QuestionId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Request to submit (or replace) a participant's full answer set
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitAnswersRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub answers: HashMap<QuestionId, OptionIndex>,
}

/// Request for a participant's ranked matches
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchesRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}
