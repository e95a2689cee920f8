// Core algorithm exports
pub mod eligibility;
pub mod matcher;
pub mod similarity;

pub use eligibility::has_full_coverage;
pub use matcher::{Matcher, RANKED_MATCH_LIMIT};
pub use similarity::{agreement_count, similarity_percent};
