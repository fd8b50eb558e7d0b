#[cfg(test)]
pub mod tests {
    use reqwest::Client;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    use armyforge_app::{app_bus::AppBus, config::Config};
    use armyforge_db::InMemoryUnitOfWorkProvider;
    use armyforge_types::errors::{ApplicationError, Result};
    use armyforge_web::{AppState, WebRouter};

    pub struct TestApp {
        pub client: Client,
        pub base_url: String,
    }

    impl TestApp {
        pub fn url(&self, path: &str) -> String {
            format!("{}/api{}", self.base_url, path)
        }
    }

    /// Starts the HTTP server on an ephemeral port over a fresh in-memory
    /// store. The catalog is left unseeded.
    pub async fn setup_web_app() -> Result<TestApp> {
        setup_web_app_with_config(Config::default()).await
    }

    #[allow(dead_code)]
    pub async fn setup_web_app_with_config(config: Config) -> Result<TestApp> {
        let config = Arc::new(config);
        let uow_provider = Arc::new(InMemoryUnitOfWorkProvider::new());
        let app_bus = Arc::new(AppBus::new(config.clone(), uow_provider));
        let state = AppState::new(app_bus, config);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;
        let addr = listener
            .local_addr()
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;
        tokio::spawn(WebRouter::serve_with_listener(state, listener));

        Ok(TestApp {
            client: Client::new(),
            base_url: format!("http://{addr}"),
        })
    }
}
