use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;

use ldap_gate::{router, AuthPlugin, Authenticator, LdapConnector};
use options::Options;

#[macro_use]
mod misc;
mod options;

#[tokio::main]
async fn main() {
    let options = Options::parse();
    env_logger::Builder::new()
        .filter_level(options.log_level())
        .init();

    let config = options.config();
    let connector = LdapConnector::from_config(&config);
    let plugin: Arc<dyn AuthPlugin> = Arc::new(Authenticator::new(config, connector));

    let address = SocketAddr::new(options.address, options.port);
    let server = axum::Server::try_bind(&address)
        .unwrap_or_else(|e| exit_error!("Cannot bind {}: {}", address, e));

    log::info!("App is running on: {}", address);
    server
        .serve(router(plugin).into_make_service_with_connect_info::<SocketAddr>())
        .await
        .unwrap_or_else(|e| exit_error!("Server stopped: {}", e))
}
