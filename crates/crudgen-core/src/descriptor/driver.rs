use crate::{Error, Result};

use std::fmt;
use std::str::FromStr;

/// Storage dialect a repository targets.
///
/// Each dialect selects exactly one default base class for generated
/// repositories. Parsing, including through serde, is case-insensitive and
/// accepts `postgres` as an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Driver {
    Postgresql,
    Mysql,
}

impl Driver {
    pub const ALL: [Driver; 2] = [Driver::Postgresql, Driver::Mysql];

    pub fn as_str(self) -> &'static str {
        match self {
            Driver::Postgresql => "postgresql",
            Driver::Mysql => "mysql",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Driver {
    type Err = Error;

    fn from_str(src: &str) -> Result<Driver> {
        match src.to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" => Ok(Driver::Postgresql),
            "mysql" => Ok(Driver::Mysql),
            _ => Err(Error::UnknownDriver(src.to_string())),
        }
    }
}

impl TryFrom<String> for Driver {
    type Error = Error;

    fn try_from(src: String) -> Result<Driver> {
        src.parse()
    }
}

impl From<Driver> for String {
    fn from(driver: Driver) -> String {
        driver.as_str().to_string()
    }
}
