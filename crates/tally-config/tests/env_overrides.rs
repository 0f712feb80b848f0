use figment::Jail;
use tally_config::{DefaultFormat, TallyConfig};

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("TALLY_FLIGHT__TAKEOFF_SPEED", "200");
        jail.set_env("TALLY_GENERAL__FORMAT", "json");

        let config = TallyConfig::load().expect("config loads");
        assert_eq!(config.flight.takeoff_speed, 200);
        assert_eq!(config.flight.takeoff_altitude, 1000);
        assert_eq!(config.general.format, DefaultFormat::Json);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tally")?;
        jail.create_file(
            ".tally/config.toml",
            r#"
[flight]
takeoff_speed = 100
takeoff_altitude = 800
"#,
        )?;
        jail.set_env("TALLY_FLIGHT__TAKEOFF_SPEED", "140");

        let config = TallyConfig::load().expect("config loads");
        assert_eq!(config.flight.takeoff_speed, 140);
        assert_eq!(config.flight.takeoff_altitude, 800);
        Ok(())
    });
}

#[test]
fn invalid_env_value_is_reported() {
    Jail::expect_with(|jail| {
        jail.set_env("TALLY_FLIGHT__TAKEOFF_SPEED", "0");

        let err = TallyConfig::load().unwrap_err();
        assert!(err.to_string().contains("flight.takeoff_speed"));
        Ok(())
    });
}
