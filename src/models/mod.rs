// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AnswerSet, Catalog, OptionIndex, PairMatch, ParticipantAnswers, ParticipantSummary, Question,
    QuestionId, RankedMatch,
};
pub use requests::{MatchesRequest, SubmitAnswersRequest};
pub use responses::{ErrorResponse, HealthResponse, SubmitAnswersResponse};
