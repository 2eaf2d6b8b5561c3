//! Configuration loading tests

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use casework::Config;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EXAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/config/casework.yaml.example");

    #[tokio::test]
    async fn test_shipped_example_is_valid() {
        let config = assert_ok!(Config::from_file(EXAMPLE).await);

        assert_eq!(config.server().port, 8000);
        assert_eq!(config.auth().login_limit.max_attempts, 5);
        assert!(config.storage().database.is_sqlite());
        assert!(!config.server().cors.allows_all_origins());
    }

    #[tokio::test]
    async fn test_environment_overrides_file_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
server:
  port: 9000
auth:
  jwt_secret: "File-Secret-That-Is-Long-Enough-For-Tests-42"
"#
        )
        .unwrap();

        let mut config = assert_ok!(Config::from_file(file.path()).await);
        assert_eq!(config.server().port, 9000);

        let env: HashMap<&str, &str> = [
            ("CASEWORK_PORT", "9100"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_EXPIRATION", "3600"),
        ]
        .into_iter()
        .collect();
        assert_ok!(
            config
                .casework
                .apply_overrides_from(|key| env.get(key).map(|v| v.to_string()))
        );

        assert_eq!(config.server().port, 9100);
        assert_eq!(config.storage().database.url, "sqlite::memory:");
        assert_eq!(config.auth().jwt_expiration, 3600);
        assert_eq!(
            config.auth().jwt_secret,
            "File-Secret-That-Is-Long-Enough-For-Tests-42"
        );
        assert_ok!(config.validate());
    }

    #[tokio::test]
    async fn test_unparseable_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "server: [not, a, map]").unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, casework::CaseworkError::Config(_)));
    }
}
