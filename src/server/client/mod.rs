//! HTTP clients for the services this admin server fronts: the VeerPreps backend API and S3
//! object storage. Both share one `reqwest::Client` connection pool.

pub mod backend;
pub mod storage;
