#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;

    use crate::implementations::config::{
        api_base_url, ClientConfig, API_URL_ENV_VAR, DEFAULT_API_URL,
    };

    // All environment manipulation lives in this one test so parallel test
    // threads never race on the variable.
    #[test]
    fn api_url_resolution_precedence() {
        env::remove_var(API_URL_ENV_VAR);

        // Nothing configured: built-in default
        let config = ClientConfig::default();
        assert_eq!(config.resolve_api_url(None), DEFAULT_API_URL);

        // Config file beats the default
        let config = ClientConfig {
            api_url: Some("http://config.example/validate".to_string()),
            timeout_secs: None,
        };
        assert_eq!(
            config.resolve_api_url(None),
            "http://config.example/validate"
        );

        // Environment beats the config file
        env::set_var(API_URL_ENV_VAR, "http://env.example/validate");
        assert_eq!(config.resolve_api_url(None), "http://env.example/validate");

        // The command-line flag beats everything
        assert_eq!(
            config.resolve_api_url(Some("http://flag.example/validate")),
            "http://flag.example/validate"
        );

        env::remove_var(API_URL_ENV_VAR);
    }

    #[test]
    fn base_url_strips_the_validate_segment() {
        assert_eq!(
            api_base_url("http://127.0.0.1:8000/validate"),
            "http://127.0.0.1:8000"
        );
        assert_eq!(
            api_base_url("http://127.0.0.1:8000/validate/"),
            "http://127.0.0.1:8000"
        );
        assert_eq!(
            api_base_url("https://validator.example.com/api/validate"),
            "https://validator.example.com/api"
        );
        // URLs without the segment only lose a trailing slash
        assert_eq!(
            api_base_url("http://127.0.0.1:8000/"),
            "http://127.0.0.1:8000"
        );
        assert_eq!(
            api_base_url("http://127.0.0.1:8000"),
            "http://127.0.0.1:8000"
        );
    }

    #[test]
    fn config_loads_from_yaml() {
        let path = env::temp_dir().join("claimlens_config_test.yaml");
        fs::write(
            &path,
            "api_url: \"http://file.example/validate\"\ntimeout_secs: 30\n",
        )
        .unwrap();

        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(
            config.api_url.as_deref(),
            Some("http://file.example/validate")
        );
        assert_eq!(config.timeout_secs, Some(30));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_file_fields_are_optional() {
        let path = env::temp_dir().join("claimlens_config_empty_test.yaml");
        fs::write(&path, "{}\n").unwrap();

        let config = ClientConfig::from_file(&path).unwrap();
        assert!(config.api_url.is_none());
        assert!(config.timeout_secs.is_none());

        let _ = fs::remove_file(&path);
    }
}
