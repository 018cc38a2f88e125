use crate::errors::ConfigError;
use crate::map::{LatLng, MapOptions, TileLayer};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub workers: usize,
    pub database_path: String,
    pub schema_path: String,
    pub seed_path: String,
    pub seed_demo_data: bool,
    pub map: MapOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            workers: 8,
            database_path: "posacalles.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            seed_path: "sql/seed.sql".to_string(),
            seed_demo_data: true,
            map: MapOptions::default(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment, falling back to defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = parse_or("SERVER_HOST", lookup("SERVER_HOST"), defaults.host)?;
        let port = parse_or("SERVER_PORT", lookup("SERVER_PORT"), defaults.port)?;
        let workers = parse_or("SERVER_WORKERS", lookup("SERVER_WORKERS"), defaults.workers)?;
        if workers == 0 {
            return Err(ConfigError::Invalid {
                key: "SERVER_WORKERS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        let seed_demo_data = match lookup("SEED_DEMO_DATA") {
            Some(raw) => parse_flag("SEED_DEMO_DATA", &raw)?,
            None => defaults.seed_demo_data,
        };

        let mut map = defaults.map;
        if let Some(url) = lookup("TILE_URL") {
            map.tiles = TileLayer {
                url,
                attribution: lookup("TILE_ATTRIBUTION").unwrap_or(map.tiles.attribution),
            };
        } else if let Some(attribution) = lookup("TILE_ATTRIBUTION") {
            map.tiles.attribution = attribution;
        }
        if let (Some(lat), Some(lng)) = (lookup("MAP_CENTER_LAT"), lookup("MAP_CENTER_LNG")) {
            let lat: f64 = parse_or("MAP_CENTER_LAT", Some(lat), 0.0)?;
            let lng: f64 = parse_or("MAP_CENTER_LNG", Some(lng), 0.0)?;
            map.initial_center = LatLng::new(lat, lng).ok_or(ConfigError::Invalid {
                key: "MAP_CENTER_LAT",
                value: format!("{lat},{lng}"),
                reason: "not a valid coordinate".into(),
            })?;
        }

        Ok(Self {
            host,
            port,
            workers,
            database_path: lookup("DATABASE_PATH").unwrap_or(defaults.database_path),
            schema_path: lookup("SCHEMA_PATH").unwrap_or(defaults.schema_path),
            seed_path: lookup("SEED_PATH").unwrap_or(defaults.seed_path),
            seed_demo_data,
            map,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "expected a boolean".into(),
        }),
    }
}
