use super::*;

#[test]
fn default_mounts_into_root() {
    assert_eq!(BootConfig::default().mount_id, "root");
    assert_eq!(BootConfig::new(), BootConfig::default());
}

#[test]
fn strict_defaults_to_debug_builds_only() {
    assert_eq!(BootConfig::default().strict, cfg!(debug_assertions));
}

#[test]
fn builder_overrides_fields() {
    let config = BootConfig::new()
        .with_mount_id("app")
        .with_log_level(log::Level::Debug)
        .with_strict(false);

    assert_eq!(config.mount_id, "app");
    assert_eq!(config.log_level, log::Level::Debug);
    assert!(!config.strict);
}
