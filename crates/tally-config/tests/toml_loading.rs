//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use tally_config::{ConfigError, DefaultFormat, TallyConfig};

#[test]
fn loads_flight_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[flight]
takeoff_speed = 120
takeoff_altitude = 500
"#,
        )?;

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.flight.takeoff_speed, 120);
        assert_eq!(config.flight.takeoff_altitude, 500);
        assert_eq!(config.general.format, DefaultFormat::Text);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[flight]
takeoff_speed = 90
"#,
        )?;

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.flight.takeoff_speed, 90);
        assert_eq!(config.flight.takeoff_altitude, 1000);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_from_dot_tally() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tally")?;
        jail.create_file(
            ".tally/config.toml",
            r#"
[general]
format = "json"
"#,
        )?;

        let config = TallyConfig::load().expect("config loads");
        assert_eq!(config.general.format, DefaultFormat::Json);
        Ok(())
    });
}

#[test]
fn zero_takeoff_altitude_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[flight]
takeoff_altitude = 0
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = TallyConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "flight.takeoff_altitude"
        ));
        Ok(())
    });
}

#[test]
fn unknown_format_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
format = "xml"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = TallyConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

// dirs only honours XDG_CONFIG_HOME on Linux.
#[cfg(target_os = "linux")]
#[test]
fn user_config_applies_and_project_config_overrides_it() {
    Jail::expect_with(|jail| {
        let xdg = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
        jail.create_dir("xdg/tally")?;
        jail.create_file(
            "xdg/tally/config.toml",
            r#"
[flight]
takeoff_speed = 120
takeoff_altitude = 800

[general]
format = "json"
"#,
        )?;

        let config = TallyConfig::load().expect("user config loads");
        assert_eq!(config.flight.takeoff_speed, 120);
        assert_eq!(config.flight.takeoff_altitude, 800);
        assert_eq!(config.general.format, DefaultFormat::Json);

        jail.create_dir(".tally")?;
        jail.create_file(
            ".tally/config.toml",
            r#"
[flight]
takeoff_speed = 140
"#,
        )?;

        let config = TallyConfig::load().expect("layered config loads");
        assert_eq!(config.flight.takeoff_speed, 140);
        assert_eq!(config.flight.takeoff_altitude, 800);
        assert_eq!(config.general.format, DefaultFormat::Json);
        Ok(())
    });
}

#[cfg(target_os = "linux")]
#[test]
fn env_overrides_user_and_project_config() {
    Jail::expect_with(|jail| {
        let xdg = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
        jail.create_dir("xdg/tally")?;
        jail.create_file("xdg/tally/config.toml", "[flight]\ntakeoff_speed = 120\n")?;
        jail.create_dir(".tally")?;
        jail.create_file(".tally/config.toml", "[flight]\ntakeoff_speed = 140\n")?;
        jail.set_env("TALLY_FLIGHT__TAKEOFF_SPEED", "100");

        let config = TallyConfig::load().expect("config loads");
        assert_eq!(config.flight.takeoff_speed, 100);
        Ok(())
    });
}
