pub mod games_json;

pub use games_json::{
    compare_result_json, size_summary_json, CompareRequest, CompareResponse, SizeRow,
    SummaryRequest, SummaryResponse, TierRow,
};
