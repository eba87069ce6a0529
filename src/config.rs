/// Port used when `PORT` is absent or not a number.
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Loads configuration from the environment. The only knob is the
    /// listening port (`PORT`); anything unparseable falls back to 8000.
    pub fn load() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { port }
    }

    /// Address the listener binds.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
