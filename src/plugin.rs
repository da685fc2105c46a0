use async_trait::async_trait;

use crate::directory::Connector;
use crate::{Authenticator, Error};

/// Contract expected by the host's authentication pipeline.
#[async_trait]
pub trait AuthPlugin: Send + Sync {
    /// Resolves to the identities granted to `username`, or the reason they were refused.
    async fn authenticate(&self, username: &str, password: &str) -> Result<Vec<String>, Error>;
}

#[async_trait]
impl<C: Connector> AuthPlugin for Authenticator<C> {
    async fn authenticate(&self, username: &str, password: &str) -> Result<Vec<String>, Error> {
        Authenticator::authenticate(self, username, password)
            .await
            .into_result()
    }
}

/// Callback flavour of [`AuthPlugin::authenticate`], for hosts that expect one.
pub async fn authenticate_with<P, F>(plugin: &P, username: &str, password: &str, callback: F)
where
    P: AuthPlugin + ?Sized,
    F: FnOnce(Result<Vec<String>, Error>),
{
    callback(plugin.authenticate(username, password).await)
}
