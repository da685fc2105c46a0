use std::time::Duration;

use ldap3::{dn_escape, ldap_escape};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Directory settings, fixed for the lifetime of an [`Authenticator`](crate::Authenticator).
///
/// Keys follow the host's plugin configuration: `url`, `baseDN` and `groupName`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub url: String,
    #[serde(rename = "baseDN")]
    pub base_dn: String,
    #[serde(default, rename = "groupName")]
    pub group: Option<String>,
    /// Left to the LDAP client default when absent.
    #[serde(default, deserialize_with = "humantime_duration")]
    pub connect_timeout: Option<Duration>,
    /// Escape DN and filter metacharacters in usernames. Off by default: the username is
    /// inserted verbatim, so `uid=<username>,<baseDN>` may be altered by a crafted username.
    #[serde(default)]
    pub escape_username: bool,
}

impl Config {
    pub fn new(url: String, base_dn: String) -> Self {
        Self {
            url,
            base_dn,
            group: None,
            connect_timeout: None,
            escape_username: false,
        }
    }

    pub fn with_group(mut self, group: String) -> Self {
        self.group = Some(group);
        self
    }

    pub fn bind_dn(&self, username: &str) -> String {
        if self.escape_username {
            format!("uid={},{}", dn_escape(username), self.base_dn)
        } else {
            format!("uid={},{}", username, self.base_dn)
        }
    }

    pub fn membership_filter(&self, username: &str, group: &str) -> String {
        let username = if self.escape_username {
            ldap_escape(username)
        } else {
            username.into()
        };
        format!(
            "(&(uid={})(memberOf=cn={},{}))",
            username, group, self.base_dn
        )
    }
}

fn humantime_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| humantime::parse_duration(&s).map_err(D::Error::custom))
        .transpose()
}
