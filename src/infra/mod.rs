pub mod http_client;
pub mod payload;

pub use http_client::ReqwestRecordSource;
