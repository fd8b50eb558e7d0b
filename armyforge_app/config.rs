use dotenvy::dotenv;
use std::{env, path::PathBuf};

use armyforge_game::validation::{
    DEFAULT_MAX_UNIT_SHARE_PERCENT, DEFAULT_POINTS_PER_HERO, RosterRules,
};

pub struct Config {
    pub port: u16,
    pub cors_origins: Vec<String>,
    /// Extra directory of `*.json` faction files loaded by catalog seeding.
    pub data_dir: Option<PathBuf>,
    pub points_per_hero: i64,
    pub max_unit_share_percent: i64,
    /// Postgres connection string; the in-memory store is used without it.
    pub database_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8001,
            cors_origins: vec!["*".to_string()],
            data_dir: None,
            points_per_hero: DEFAULT_POINTS_PER_HERO,
            max_unit_share_percent: DEFAULT_MAX_UNIT_SHARE_PERCENT,
            database_url: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = Self::default();

        let port = match env::var("ARMYFORGE_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(defaults.port),
            Err(_) => defaults.port,
        };

        let cors_origins = match env::var("ARMYFORGE_CORS_ORIGINS") {
            Ok(val) => parse_origins(&val),
            Err(_) => defaults.cors_origins,
        };

        let data_dir = env::var("ARMYFORGE_DATA_DIR")
            .ok()
            .filter(|val| !val.trim().is_empty())
            .map(PathBuf::from);

        let points_per_hero = match env::var("ARMYFORGE_POINTS_PER_HERO") {
            Ok(val) => val
                .parse::<i64>()
                .unwrap_or(defaults.points_per_hero)
                .max(1),
            Err(_) => defaults.points_per_hero,
        };

        let max_unit_share_percent = match env::var("ARMYFORGE_MAX_UNIT_SHARE") {
            Ok(val) => val
                .parse::<i64>()
                .unwrap_or(defaults.max_unit_share_percent)
                .clamp(0, 100),
            Err(_) => defaults.max_unit_share_percent,
        };

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|val| !val.trim().is_empty());

        Self {
            port,
            cors_origins,
            data_dir,
            points_per_hero,
            max_unit_share_percent,
            database_url,
        }
    }

    pub fn roster_rules(&self) -> RosterRules {
        RosterRules::new(self.points_per_hero, self.max_unit_share_percent)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}
