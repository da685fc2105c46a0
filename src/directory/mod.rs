use async_trait::async_trait;
use ldap3::Scope;
use thiserror::Error;

pub use ldap::{LdapConnection, LdapConnector};

mod ldap;

/// Failures reported by the directory layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Other(String),
}

/// Opens a fresh directory connection for every authentication attempt.
#[async_trait]
pub trait Connector: Send + Sync {
    type Connection: Connection;

    async fn connect(&self) -> Result<Self::Connection, DirectoryError>;
}

#[async_trait]
pub trait Connection: Send {
    async fn simple_bind(&mut self, dn: &str, password: &str) -> Result<(), DirectoryError>;

    /// Returns the DNs of the matching entries.
    async fn search(
        &mut self,
        base: &str,
        scope: Scope,
        filter: &str,
    ) -> Result<Vec<String>, DirectoryError>;

    /// Must be safe to call whatever state the connection is in.
    async fn unbind(&mut self) -> Result<(), DirectoryError>;
}
