use ferrous_doh_domain::{CliOverrides, Config, ConfigError, RecordType};
use std::io::Write;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.client.server, "https://dns.google.com/resolve");
    assert_eq!(config.client.timeout, 30);
    assert!(!config.client.allow_http);
    assert_eq!(config.server.port, 8053);
    assert_eq!(config.server.path, "/resolve");
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_full_file() {
    let config = Config::from_toml(
        r#"
        [client]
        server = "https://cloudflare-dns.com/dns-query"
        timeout = 5

        [server]
        bind_address = "127.0.0.1"
        port = 8443
        path = "/dns-query"
        allow_http = true
        upstream = "https://dns.google.com/resolve"

        [logging]
        level = "debug"

        [[local_records]]
        name = "router.lan"
        data = "192.168.1.1"

        [[local_records]]
        name = "nas.lan."
        type = "AAAA"
        ttl = 60
        data = "fd00::10"

        [[local_records]]
        name = "mail.lan"
        type = 15
        data = "10 mx.lan."
        "#,
    )
    .unwrap();

    assert_eq!(config.client.timeout, 5);
    assert!(config.server.allow_http);
    assert_eq!(
        config.server.upstream.as_deref(),
        Some("https://dns.google.com/resolve")
    );
    assert_eq!(config.local_records.len(), 3);

    let router = config.local_records[0].to_record();
    assert_eq!(router.name, "router.lan.");
    assert_eq!(router.record_type, RecordType::A);
    assert_eq!(router.ttl, 300);

    let nas = config.local_records[1].to_record();
    assert_eq!(nas.name, "nas.lan.");
    assert_eq!(nas.record_type, RecordType::AAAA);
    assert_eq!(nas.ttl, 60);

    assert_eq!(config.local_records[2].record_type, RecordType::MX);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_rejects_unknown_record_type() {
    let err = Config::from_toml(
        r#"
        [[local_records]]
        name = "x.lan"
        type = "BOGUS"
        data = "1.2.3.4"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = Config::default();
    config.server.path = "resolve".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

    let mut config = Config::default();
    config.server.port = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.client.server = String::new();
    assert!(config.validate().is_err());

    let config = Config::from_toml(
        r#"
        [[local_records]]
        name = "x.lan"
        type = 0
        data = "1.2.3.4"
        "#,
    )
    .unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_load_from_file_with_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nport = 9000\n\n[logging]\nlevel = \"warn\"").unwrap();

    let overrides = CliOverrides {
        path: Some("/dns-query".to_string()),
        server_allow_http: true,
        log_level: Some("trace".to_string()),
        ..Default::default()
    };

    let config = Config::load(file.path().to_str(), overrides).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.path, "/dns-query");
    assert!(config.server.allow_http);
    assert!(!config.client.allow_http);
    assert!(!config.server.upstream_allow_http);
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_plain_http_overrides_are_independent() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path().to_str();

    let overrides = CliOverrides {
        client_allow_http: true,
        ..Default::default()
    };
    let config = Config::load(path, overrides).unwrap();
    assert!(config.client.allow_http);
    assert!(!config.server.allow_http);
    assert!(!config.server.upstream_allow_http);

    let overrides = CliOverrides {
        upstream_allow_http: true,
        ..Default::default()
    };
    let config = Config::load(path, overrides).unwrap();
    assert!(config.server.upstream_allow_http);
    assert!(!config.server.allow_http);
    assert!(!config.client.allow_http);
}

#[test]
fn test_forwarded_proto_is_untrusted_by_default() {
    assert!(!Config::default().server.trust_forwarded_proto);

    let config = Config::from_toml("[server]\ntrust_forwarded_proto = true\n").unwrap();
    assert!(config.server.trust_forwarded_proto);
}

#[test]
fn test_load_missing_file() {
    let err = Config::load(Some("/nonexistent/ferrous-doh.toml"), CliOverrides::default())
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileRead(_, _)));
}
