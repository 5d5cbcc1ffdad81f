use super::{resolve_settings, Settings};

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults_bind_all_interfaces_on_port_5000() {
    let settings = resolve_settings(None, no_env);
    assert_eq!(settings, Settings::default());
    assert_eq!(
        settings.bind_addr().expect("addr").to_string(),
        "0.0.0.0:5000"
    );
}

#[test]
fn settings_file_overrides_default_bind() {
    let settings = resolve_settings(Some("bind_addr = \"127.0.0.1:6000\""), no_env);
    assert_eq!(settings.server_bind, "127.0.0.1:6000");
}

#[test]
fn unreadable_settings_file_falls_back_to_defaults() {
    let settings = resolve_settings(Some("this is = = not toml"), no_env);
    assert_eq!(settings, Settings::default());
}

#[test]
fn app_prefixed_env_wins_over_plain_env_and_file() {
    let settings = resolve_settings(Some("bind_addr = \"127.0.0.1:6000\""), |key| match key {
        "SERVER_BIND" => Some("127.0.0.1:7000".to_string()),
        "APP__BIND_ADDR" => Some("127.0.0.1:8000".to_string()),
        _ => None,
    });
    assert_eq!(settings.server_bind, "127.0.0.1:8000");
}

#[test]
fn invalid_bind_address_is_reported() {
    let settings = Settings {
        server_bind: "localhost".into(),
    };
    let err = settings.bind_addr().expect_err("must fail");
    assert!(err.to_string().contains("invalid bind address"));
}
