use vizbridge::Config;

#[test]
fn test_config_defaults_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing");

    let cfg = Config::load(path.to_str().unwrap()).unwrap();

    assert_eq!(cfg.service.name, "vizbridge");
    assert_eq!(cfg.service.http.bind, "127.0.0.1");
    assert_eq!(cfg.service.http.port, 8080);
    assert_eq!(cfg.visuals.spectrum_bands, 32);
    assert_eq!(cfg.visuals.burst_revert_ms, 1000);
}

#[test]
fn test_config_loads_from_toml() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("vizbridge.toml");
    std::fs::write(
        &file,
        r#"
[service]
name = "studio-bridge"

[service.http]
bind = "0.0.0.0"
port = 9090

[visuals]
spectrum_bands = 16
burst_revert_ms = 500
"#,
    )
    .unwrap();

    let stem = dir.path().join("vizbridge");
    let cfg = Config::load(stem.to_str().unwrap()).unwrap();

    assert_eq!(cfg.service.name, "studio-bridge");
    assert_eq!(cfg.service.http.bind, "0.0.0.0");
    assert_eq!(cfg.service.http.port, 9090);
    assert_eq!(cfg.visuals.spectrum_bands, 16);
    assert_eq!(cfg.visuals.burst_revert_ms, 500);
}

#[test]
fn test_config_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("vizbridge.toml");
    std::fs::write(
        &file,
        r#"
[visuals]
burst_revert_ms = 250
"#,
    )
    .unwrap();

    let stem = dir.path().join("vizbridge");
    let cfg = Config::load(stem.to_str().unwrap()).unwrap();

    assert_eq!(cfg.visuals.burst_revert_ms, 250);
    assert_eq!(cfg.visuals.spectrum_bands, 32);
    assert_eq!(cfg.service.http.port, 8080);
}
