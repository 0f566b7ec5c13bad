pub mod arguments;
pub mod deploy_stakeable_realms;
mod error;
pub mod realm_data;
pub mod send;
pub mod set_realm_data;

pub use error::Error;
