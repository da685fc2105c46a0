use ldap3::Scope;

use crate::directory::{Connection, Connector, DirectoryError};
use crate::{Config, Denial, Outcome};

/// Checks credentials with a simple bind, then group membership when a group is required.
pub struct Authenticator<C> {
    config: Config,
    connector: C,
}

impl<C: Connector> Authenticator<C> {
    pub fn new(config: Config, connector: C) -> Self {
        Self { config, connector }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> Outcome {
        let mut conn = match self.connector.connect().await {
            Ok(conn) => conn,
            Err(err) => return failure(username, err),
        };

        let outcome = match self.verify(&mut conn, username, password).await {
            Ok(outcome) => outcome,
            Err(err) => failure(username, err),
        };

        if let Err(err) = conn.unbind().await {
            log::debug!("Cannot release LDAP connection: {}", err);
        }
        outcome
    }

    async fn verify(
        &self,
        conn: &mut C::Connection,
        username: &str,
        password: &str,
    ) -> Result<Outcome, DirectoryError> {
        let dn = self.config.bind_dn(username);
        conn.simple_bind(&dn, password).await?;

        if let Some(group) = &self.config.group {
            let entries = conn
                .search(
                    &dn,
                    Scope::Subtree,
                    &self.config.membership_filter(username, group),
                )
                .await?;
            if entries.is_empty() {
                log::warn!("LDAP - User {} not in group {}", username, group);
                return Ok(Outcome::Denied(Denial::NotInGroup {
                    username: username.to_owned(),
                    group: group.clone(),
                }));
            }
        }

        Ok(Outcome::Granted(vec![username.to_owned()]))
    }
}

fn failure(username: &str, err: DirectoryError) -> Outcome {
    match err {
        DirectoryError::InvalidCredentials => {
            log::warn!("LDAP - Invalid credentials for user {}", username);
            Outcome::Denied(Denial::InvalidCredentials)
        }
        DirectoryError::Other(detail) => {
            log::warn!("LDAP - Could not authenticate user {}: {}", username, detail);
            Outcome::SystemError(detail)
        }
    }
}
