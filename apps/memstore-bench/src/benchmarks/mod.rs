pub mod load;
pub mod query_mix;
