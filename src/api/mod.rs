pub mod client;
pub mod decode;
pub(crate) mod probe;
pub mod request;
pub mod response;
pub use client::RedirectClient;
pub use decode::decode;
pub use request::LookupRequest;
pub use response::{ApiError, LookupResult, RedirectChain, RedirectHop};

#[cfg(test)]
pub mod test_helpers;
