pub mod explanation;
pub mod request;
pub mod response;
pub mod risk;
