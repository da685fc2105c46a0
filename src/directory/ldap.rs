use std::time::Duration;

use async_trait::async_trait;
use ldap3::{Ldap, LdapConnAsync, LdapConnSettings, LdapError, Scope, SearchEntry};

use crate::directory::{Connection, Connector, DirectoryError};
use crate::Config;

const INVALID_CREDENTIALS: u32 = 49;
// Requests no attributes, only the DNs are needed.
const NO_ATTRIBUTES: &str = "1.1";

pub struct LdapConnector {
    address: String,
    connect_timeout: Option<Duration>,
}

impl LdapConnector {
    pub fn new(address: String, connect_timeout: Option<Duration>) -> Self {
        Self {
            address,
            connect_timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.url.clone(), config.connect_timeout)
    }
}

#[async_trait]
impl Connector for LdapConnector {
    type Connection = LdapConnection;

    async fn connect(&self) -> Result<LdapConnection, DirectoryError> {
        let mut settings = LdapConnSettings::new();
        if let Some(timeout) = self.connect_timeout {
            settings = settings.set_conn_timeout(timeout);
        }
        let (conn, ldap) = LdapConnAsync::with_settings(settings, &self.address).await?;
        ldap3::drive!(conn);

        Ok(LdapConnection(ldap))
    }
}

pub struct LdapConnection(Ldap);

#[async_trait]
impl Connection for LdapConnection {
    async fn simple_bind(&mut self, dn: &str, password: &str) -> Result<(), DirectoryError> {
        self.0.simple_bind(dn, password).await?.success()?;
        Ok(())
    }

    async fn search(
        &mut self,
        base: &str,
        scope: Scope,
        filter: &str,
    ) -> Result<Vec<String>, DirectoryError> {
        let (entries, _res) = self
            .0
            .search(base, scope, filter, vec![NO_ATTRIBUTES])
            .await?
            .success()?;

        Ok(entries
            .into_iter()
            .map(|entry| SearchEntry::construct(entry).dn)
            .collect())
    }

    async fn unbind(&mut self) -> Result<(), DirectoryError> {
        Ok(self.0.unbind().await?)
    }
}

impl From<LdapError> for DirectoryError {
    fn from(err: LdapError) -> Self {
        match err {
            LdapError::LdapResult { result } if result.rc == INVALID_CREDENTIALS => {
                DirectoryError::InvalidCredentials
            }
            err => DirectoryError::Other(err.to_string()),
        }
    }
}
