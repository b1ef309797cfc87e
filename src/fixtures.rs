#[cfg(test)]
pub mod test {
    use std::collections::HashMap;

    use confique::Config;
    use serde::{Deserialize, Serialize};

    #[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct ServiceConfig {
        /// Application identity.
        #[config(nested)]
        pub app: AppSection,

        /// Listener settings.
        #[config(nested)]
        pub server: ServerSection,

        /// Storage account settings.
        #[config(nested)]
        pub azure: AzureSection,
    }

    #[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct AppSection {
        /// The application name.
        pub name: String,

        /// Deployment environment name.
        #[config(default = "local")]
        pub env: String,

        /// Enable debug mode.
        #[config(default = false)]
        pub debug: bool,

        /// Commit the binary was built from.
        pub commit_sha: Option<String>,
    }

    #[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct ServerSection {
        /// Host to bind to.
        #[config(default = "localhost")]
        pub host: String,

        /// Port to bind to.
        #[config(default = "8080")]
        pub port: String,

        /// Worker thread count.
        #[config(default = 4)]
        pub workers: u32,
    }

    #[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct AzureSection {
        /// Storage account name.
        pub account_name: Option<String>,

        /// Storage account key.
        pub account_key: Option<String>,

        /// Queues to consume from.
        #[config(default = ["jobs"])]
        pub queues: Vec<String>,
    }

    /// A fully populated tree with no placeholders.
    pub fn plain_config() -> ServiceConfig {
        ServiceConfig {
            app: AppSection {
                name: "orders".into(),
                env: "prod".into(),
                debug: false,
                commit_sha: None,
            },
            server: ServerSection {
                host: "localhost".into(),
                port: "8080".into(),
                workers: 4,
            },
            azure: AzureSection {
                account_name: Some("ordersstore".into()),
                account_key: None,
                queues: vec!["jobs".into()],
            },
        }
    }

    pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn required_name_has_no_default() {
        assert!(ServiceConfig::builder().load().is_err());
    }
}
