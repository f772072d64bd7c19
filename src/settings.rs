use anyhow::Context;

/// Runtime settings, read from the environment. A `.env` file works too.
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub db_path: String,
}

impl Settings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn load() -> anyhow::Result<Settings> {
    let host = dotenv::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = dotenv::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .context("Variable PORT should be a port number")?;
    let db_path = dotenv::var("DB_PATH").context("DB_PATH must be set")?;
    Ok(Settings {
        host,
        port,
        db_path,
    })
}
