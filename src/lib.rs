pub use authenticator::Authenticator;
pub use config::Config;
pub use directory::{Connection, Connector, DirectoryError, LdapConnector};
pub use error::Error;
pub use outcome::{Denial, Outcome};
pub use plugin::{authenticate_with, AuthPlugin};
pub use server::router;

mod authenticator;
mod config;
pub mod directory;
mod error;
mod outcome;
mod plugin;
mod response;
mod server;
