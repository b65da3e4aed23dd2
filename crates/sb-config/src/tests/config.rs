use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, StartupMode, UpstreamMode};

use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    let _env = setup_config_dir();

    let config = Config::load().expect("load with defaults");

    assert_eq!(config.server.port, crate::DEFAULT_PORT);
    assert_eq!(config.server.max_connections, crate::DEFAULT_MAX_CONNECTIONS);
    assert_eq!(config.upstream.mode, UpstreamMode::Simulated);
    assert_eq!(config.upstream.startup_mode, StartupMode::Permissive);
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    let _env = setup_config_dir();

    let config = Config::load().unwrap();
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    let (temp, _env) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000

            [upstream]
            mode = "http"
            startup_mode = "strict"
            poll_interval_ms = 1500
            endpoint = "http://upstream.local/events"

            [relay]
            command_topic = "commands"
            partition = 2
        "#,
    )
    .unwrap();

    let config = Config::load().unwrap();
    config.validate().unwrap();

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.upstream.mode, UpstreamMode::Http);
    assert_eq!(config.upstream.startup_mode, StartupMode::Strict);
    assert_eq!(config.upstream.poll_interval_ms, 1500);
    assert_eq!(config.relay.command_topic, "commands");
    assert_eq!(config.relay.partition, 2);
}

#[test]
#[serial]
fn given_malformed_toml_file_when_load_then_toml_error() {
    let (temp, _env) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "server = [not toml").unwrap();

    let result = Config::load();
    assert!(matches!(result, Err(crate::ConfigError::Toml { .. })));
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_env_wins_over_defaults() {
    let _dir = setup_config_dir();
    let _port = EnvGuard::set("SB_SERVER_PORT", "4321");
    let _mode = EnvGuard::set("SB_UPSTREAM_MODE", "disabled");
    let _startup = EnvGuard::set("SB_UPSTREAM_STARTUP_MODE", "strict");
    let _topic = EnvGuard::set("SB_RELAY_COMMAND_TOPIC", "ops-commands");

    let config = Config::load().unwrap();

    assert_eq!(config.server.port, 4321);
    assert_eq!(config.upstream.mode, UpstreamMode::Disabled);
    assert_eq!(config.upstream.startup_mode, StartupMode::Strict);
    assert_eq!(config.relay.command_topic, "ops-commands");
}

#[test]
#[serial]
fn given_unparseable_env_override_when_load_then_default_kept() {
    let _dir = setup_config_dir();
    let _port = EnvGuard::set("SB_SERVER_PORT", "not-a-port");

    let config = Config::load().unwrap();
    assert_eq!(config.server.port, crate::DEFAULT_PORT);
}

#[test]
#[serial]
fn given_config_when_bind_addr_then_host_and_port_joined() {
    let _env = setup_config_dir();

    let config = Config::load().unwrap();
    assert_eq!(
        config.bind_addr(),
        format!("{}:{}", crate::DEFAULT_HOST, crate::DEFAULT_PORT)
    );
}
