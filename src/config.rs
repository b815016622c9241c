use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },

    #[error("{key} must be positive")]
    NotPositive { key: &'static str },

    #[error("{key} must be at most {max}")]
    TooLarge { key: &'static str, max: i64 },
}

/// 画面座標は `i32` で扱うため, 画面サイズはその範囲に収める.
pub const MAX_SCREEN_SIZE: i64 = i32::MAX as i64;
/// 折り返し位置 `-2 * radius` や半径の和が `i32` に収まる上限.
pub const MAX_RADIUS: i64 = (i32::MAX / 4) as i64;
pub const MAX_SPEED: i64 = (i32::MAX / 4) as i64;

/// `Config` は画面サイズと円の大きさ・速さを表す.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub title: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub radius: i32,
    /// 1 フレーム (またはキー入力 1 回) あたりの移動量.
    pub speed: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Circle Collision".to_owned(),
            screen_width: 500,
            screen_height: 500,
            radius: 20,
            speed: 10,
        }
    }
}

impl Config {
    /// `.env` があれば読み込んだ上で, `CIRCLES_*` 環境変数から設定を作る.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default = Self::default();

        let config = Self {
            title: lookup("CIRCLES_TITLE").unwrap_or(default.title),
            screen_width: parse(&lookup, "CIRCLES_SCREEN_WIDTH", default.screen_width)?,
            screen_height: parse(&lookup, "CIRCLES_SCREEN_HEIGHT", default.screen_height)?,
            radius: parse(&lookup, "CIRCLES_RADIUS", default.radius)?,
            speed: parse(&lookup, "CIRCLES_SPEED", default.speed)?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("CIRCLES_SCREEN_WIDTH", self.screen_width as i64, MAX_SCREEN_SIZE),
            ("CIRCLES_SCREEN_HEIGHT", self.screen_height as i64, MAX_SCREEN_SIZE),
            ("CIRCLES_RADIUS", self.radius as i64, MAX_RADIUS),
            ("CIRCLES_SPEED", self.speed as i64, MAX_SPEED),
        ];

        for &(key, value, max) in &checks {
            if value <= 0 {
                return Err(ConfigError::NotPositive { key });
            }
            if value > max {
                return Err(ConfigError::TooLarge { key, max });
            }
        }
        Ok(())
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.screen_width, 500);
        assert_eq!(config.radius, 20);
        assert_eq!(config.speed, 10);
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("CIRCLES_SCREEN_WIDTH", "640"),
            ("CIRCLES_RADIUS", " 8 "),
            ("CIRCLES_TITLE", "circles"),
        ]))
        .unwrap();

        assert_eq!(config.screen_width, 640);
        assert_eq!(config.screen_height, 500);
        assert_eq!(config.radius, 8);
        assert_eq!(config.title, "circles");
    }

    #[test]
    fn rejects_garbage() {
        let err = Config::from_lookup(lookup_from(&[("CIRCLES_SPEED", "fast")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "CIRCLES_SPEED",
                value: "fast".to_owned()
            }
        );
    }

    #[test]
    fn rejects_non_positive() {
        let err = Config::from_lookup(lookup_from(&[("CIRCLES_RADIUS", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::NotPositive { key: "CIRCLES_RADIUS" });

        let err = Config::from_lookup(lookup_from(&[("CIRCLES_SCREEN_HEIGHT", "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotPositive {
                key: "CIRCLES_SCREEN_HEIGHT"
            }
        );
    }

    #[test]
    fn rejects_sizes_outside_i32() {
        let err =
            Config::from_lookup(lookup_from(&[("CIRCLES_SCREEN_WIDTH", "3000000000")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::TooLarge {
                key: "CIRCLES_SCREEN_WIDTH",
                max: i32::MAX as i64
            }
        );

        let config =
            Config::from_lookup(lookup_from(&[("CIRCLES_SCREEN_HEIGHT", "2147483647")])).unwrap();
        assert_eq!(config.screen_height, i32::MAX as u32);
    }

    #[test]
    fn rejects_huge_radius_and_speed() {
        let err =
            Config::from_lookup(lookup_from(&[("CIRCLES_RADIUS", "2000000000")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::TooLarge {
                key: "CIRCLES_RADIUS",
                max: MAX_RADIUS
            }
        );

        let err = Config::from_lookup(lookup_from(&[("CIRCLES_SPEED", "1000000000")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::TooLarge {
                key: "CIRCLES_SPEED",
                max: MAX_SPEED
            }
        );
    }
}
