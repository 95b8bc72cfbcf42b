pub mod builders;
pub mod mocks;

use marquee::config::Config;

/// Config pointing the catalog client at a mock server, without retries.
pub fn test_config(server_url: &str) -> Config {
    let mut config = Config::default();
    config.catalog.api_base_url = server_url.to_string();
    config.catalog.api_key = mocks::TEST_API_KEY.to_string();
    config.network.max_retries = 0;
    config.network.connection_timeout = 5;
    config
}
