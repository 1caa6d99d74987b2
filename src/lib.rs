pub mod builder;
pub mod codes;
pub mod document;
pub mod error;
pub mod fraud;
pub mod gateway;
pub mod operation;
pub mod request;
pub mod response;
pub mod transport;
