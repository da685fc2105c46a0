use std::net::IpAddr;
use std::time::Duration;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use ldap_gate::Config;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Options {
    /// Increase logs verbosity (Error (default), Warn, Info, Debug, Trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub log_level: u8,
    /// HTTP listening address.
    #[arg(short = 'a', long, default_value = "127.0.0.1")]
    pub address: IpAddr,
    /// HTTP listening port.
    #[arg(short = 'p', long, default_value = "8080")]
    pub port: u16,
    /// URI of the LDAP used to authenticate users.
    #[arg(long)]
    pub ldap_url: String,
    /// Base DN appended to usernames, e.g. "ou=people,dc=example,dc=org" binds as "uid=USER,ou=people,dc=example,dc=org".
    #[arg(long)]
    pub ldap_base_dn: String,
    /// Common name of the group users must belong to.
    #[arg(long)]
    pub ldap_group: Option<String>,
    /// LDAP connection timeout (e.g. "5s"). Uses the LDAP client default if omitted.
    #[arg(long, value_parser = humantime::parse_duration)]
    pub ldap_timeout: Option<Duration>,
    /// Escape DN and filter special characters in usernames.
    #[arg(long)]
    pub escape_username: bool,
}

impl Options {
    pub fn log_level(&self) -> LevelFilter {
        use LevelFilter::*;
        match self.log_level {
            0 => Error,
            1 => Warn,
            2 => Info,
            3 => Debug,
            _ => Trace,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            url: self.ldap_url.clone(),
            base_dn: self.ldap_base_dn.clone(),
            group: self.ldap_group.clone(),
            connect_timeout: self.ldap_timeout,
            escape_username: self.escape_username,
        }
    }
}
