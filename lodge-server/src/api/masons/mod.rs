pub mod join_query;
pub mod join_response;
pub mod masons;
pub mod roster_response;
