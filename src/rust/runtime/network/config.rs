// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::{
    fail::Fail,
    network::{
        consts::{
            DEFAULT_MTU,
            MAX_MTU,
            MIN_MTU,
        },
        types::MacAddress,
    },
};
use ::std::{
    fs,
    ops::Index,
    str::FromStr,
};
use ::yaml_rust::{
    Yaml,
    YamlLoader,
};

//======================================================================================================================
// Constants
//======================================================================================================================

// Link options.
mod link_config {
    pub const SECTION_NAME: &str = "ethif";
    // Local network MAC address.
    pub const LOCAL_LINK_ADDR: &str = "local_link_addr";
    // Link MTU, excluding the Ethernet header.
    pub const MTU: &str = "mtu";
}

//======================================================================================================================
// Structures
//======================================================================================================================

/// Link configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Yaml);

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Config {
    /// Reads a configuration file into a [Config] object.
    pub fn new(config_path: &str) -> Result<Self, Fail> {
        let config_s: String = match fs::read_to_string(config_path) {
            Ok(s) => s,
            Err(e) => {
                let cause: String = format!("cannot read configuration file (path={:?})", config_path);
                error!("new(): {}", cause);
                return Err(Fail::with_source(libc::EINVAL, &cause, Fail::from(e)));
            },
        };
        Self::from_yaml_str(&config_s)
    }

    /// Parses a YAML document into a [Config] object.
    pub fn from_yaml_str(config_s: &str) -> Result<Self, Fail> {
        let config: Vec<Yaml> = match YamlLoader::load_from_str(config_s) {
            Ok(config) => config,
            Err(e) => {
                let cause: String = format!("malformed configuration: {}", e);
                return Err(Fail::new(libc::EINVAL, &cause));
            },
        };
        let config_obj: &Yaml = match &config[..] {
            [c] => c,
            _ => return Err(Fail::new(libc::EINVAL, "Wrong number of config objects")),
        };

        Ok(Self(config_obj.clone()))
    }

    fn get_link_config(&self) -> Result<&Yaml, Fail> {
        Self::get_subsection(&self.0, link_config::SECTION_NAME)
    }

    /// Reads the "local link address" parameter from the environment variable first and then the underlying
    /// configuration file. Only unicast addresses may identify a station.
    pub fn local_link_addr(&self) -> Result<MacAddress, Fail> {
        let local_link_addr: MacAddress =
            if let Some(addr) = Self::get_typed_env_option(link_config::LOCAL_LINK_ADDR)? {
                addr
            } else {
                Self::get_typed_str_option(self.get_link_config()?, link_config::LOCAL_LINK_ADDR, |val: &str| {
                    MacAddress::parse_canonical_str(val).ok()
                })?
            };

        if !local_link_addr.is_unicast() || local_link_addr.is_nil() {
            let cause: String = format!("invalid local link address (addr={})", local_link_addr);
            error!("local_link_addr(): {}", cause);
            return Err(Fail::new(libc::EINVAL, &cause));
        }
        Ok(local_link_addr)
    }

    /// Reads the link MTU from the environment variable first and then the underlying configuration file. Falls back
    /// to [DEFAULT_MTU] when neither sets it.
    pub fn mtu(&self) -> Result<usize, Fail> {
        let mtu: usize = if let Some(mtu) = Self::get_typed_env_option(link_config::MTU)? {
            mtu
        } else {
            let section: &Yaml = self.get_link_config()?;
            match section.index(link_config::MTU) {
                Yaml::BadValue => DEFAULT_MTU,
                _ => Self::get_int_option(section, link_config::MTU)?,
            }
        };

        if !(MIN_MTU..=MAX_MTU).contains(&mtu) {
            let cause: String = format!("MTU out of range (mtu={}, min={}, max={})", mtu, MIN_MTU, MAX_MTU);
            error!("mtu(): {}", cause);
            return Err(Fail::new(libc::ERANGE, &cause));
        }
        Ok(mtu)
    }

    /// Index `yaml` to find the value at `index`, validating that it is a subsection.
    fn get_subsection<'a>(yaml: &'a Yaml, index: &str) -> Result<&'a Yaml, Fail> {
        let section: &'a Yaml = Self::get_option(yaml, index)?;
        match section {
            Yaml::Hash(_) => Ok(section),
            _ => {
                let message: String = format!("parameter \"{}\" has unexpected type", index);
                Err(Fail::new(libc::EINVAL, message.as_str()))
            },
        }
    }

    /// Index `yaml` to find the value at `index`, validating that the index exists.
    fn get_option<'a>(yaml: &'a Yaml, index: &str) -> Result<&'a Yaml, Fail> {
        match yaml.index(index) {
            Yaml::BadValue => {
                let message: String = format!("missing configuration option \"{}\"", index);
                Err(Fail::new(libc::EINVAL, message.as_str()))
            },
            value => Ok(value),
        }
    }

    /// Index `yaml` to find value at `index`, validating it as a string.
    fn get_typed_str_option<T, Fn>(yaml: &Yaml, index: &str, parser: Fn) -> Result<T, Fail>
    where
        Fn: FnOnce(&str) -> Option<T>,
    {
        let option: &Yaml = Self::get_option(yaml, index)?;
        if let Some(value) = option.as_str().and_then(parser) {
            return Ok(value);
        }
        let message: String = format!("parameter {} has unexpected type", index);
        Err(Fail::new(libc::EINVAL, message.as_str()))
    }

    /// Name of the environment variable that overrides `index`, e.g. `ETHIF_MTU`.
    fn env_var_name(index: &str) -> String {
        format!("{}_{}", link_config::SECTION_NAME, index).to_uppercase()
    }

    /// Get value where the environment value overrides the config file if it exists.
    fn get_typed_env_option<T: FromStr>(index: &str) -> Result<Option<T>, Fail> {
        let name: String = Self::env_var_name(index);
        match ::std::env::var(&name) {
            Ok(var) => match var.as_str().parse() {
                Ok(value) => Ok(Some(value)),
                Err(_) => {
                    let message: String = format!("environment variable {} has unexpected type", name);
                    Err(Fail::new(libc::EINVAL, message.as_str()))
                },
            },
            Err(_) => Ok(None),
        }
    }

    /// Reads an integer at `index`, verifying that the destination type may hold it.
    fn get_int_option<T: TryFrom<i64>>(yaml: &Yaml, index: &str) -> Result<T, Fail> {
        let val: i64 = match Self::get_option(yaml, index)?.as_i64() {
            Some(val) => val,
            None => {
                let message: String = format!("parameter {} has unexpected type", index);
                return Err(Fail::new(libc::EINVAL, message.as_str()));
            },
        };
        match T::try_from(val) {
            Ok(val) => Ok(val),
            _ => {
                let message: String = format!("parameter \"{}\" is out of range", index);
                Err(Fail::new(libc::ERANGE, message.as_str()))
            },
        }
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
