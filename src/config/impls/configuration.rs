use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cache_group_config::CacheGroupConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_cache_config::HttpCacheConfig;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;

const GROUP_NAME_PATTERN: &str = r"^[a-z_][a-z0-9_]{0,30}$";
const PREFIX_PATTERN: &str = r"^[A-Za-z0-9_:.\-]{0,64}$";
const TAG_PREFIX_PATTERN: &str = r"^[A-Za-z0-9_:.\-]{1,32}$";
const LOG_LEVEL_PATTERN: &str = r"^(off|trace|debug|info|warn|error)$";

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        let mut cache = BTreeMap::new();
        cache.insert(String::from("default"), CacheGroupConfig::file("cache"));
        Configuration {
            log_level: String::from("info"),
            default_group: String::from("default"),
            http_cache: HttpCacheConfig::default(),
            cache,
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string(self).map_err(ConfigurationError::SerializeError)
    }

    /// Loads `path`, or writes the defaults there when `create` is set and the file is unusable.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config_toml = Configuration::init().to_toml()?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(ConfigurationError::ValidationError(format!("created {}", path)))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(e)
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.cache.contains_key(&self.default_group) {
            return Err(ConfigurationError::ValidationError(format!(
                "[VALIDATE CONFIG] default_group \"{}\" has no [cache.{}] section",
                self.default_group, self.default_group
            )));
        }
        if let Some(group) = &self.http_cache.group
            && !self.cache.contains_key(group)
        {
            return Err(ConfigurationError::ValidationError(format!(
                "[VALIDATE CONFIG] http_cache.group \"{}\" has no [cache.{}] section",
                group, group
            )));
        }

        let mut check_map = vec![("log_level", self.log_level.clone(), LOG_LEVEL_PATTERN)];
        for (name, group) in &self.cache {
            check_map.push(("[cache] group name", name.clone(), GROUP_NAME_PATTERN));
            check_map.push(("[cache] prefix", group.prefix.clone(), PREFIX_PATTERN));
            if let Some(tag_prefix) = &group.tag_prefix {
                check_map.push(("[cache] tag_prefix", tag_prefix.clone(), TAG_PREFIX_PATTERN));
            }
            if let Some(missing) = group.missing_parameters().first() {
                return Err(ConfigurationError::ValidationError(format!(
                    "[VALIDATE CONFIG] [cache.{}] driver {} requires \"{}\"",
                    name, group.driver, missing
                )));
            }
        }

        for (name, value, regex) in check_map {
            Self::validate_value(name, &value, regex)?;
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("invalid pattern {}: {}", regex, e)))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "[VALIDATE CONFIG] Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"",
                name, value, regex_check
            )));
        }
        Ok(())
    }
}
