//! SSL mode enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConfigError, ConfigResult};

/// SSL/TLS mode for connections.
///
/// `Unspecified` is the default and is never rendered into a DSN, so an
/// unset config does not produce an empty `sslmode=` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SslMode {
    /// Not configured.
    #[default]
    Unspecified = 0,
    /// Disable SSL.
    Disable = 1,
    /// Allow SSL but don't require it.
    Allow = 2,
    /// Prefer SSL but allow non-SSL.
    Prefer = 3,
    /// Require SSL.
    Require = 4,
    /// Require SSL and verify the server certificate.
    VerifyCa = 5,
    /// Require SSL and verify the server certificate and hostname.
    VerifyFull = 6,
}

impl SslMode {
    /// Every mode that has a wire token, in declaration order.
    pub const ALL: [SslMode; 6] = [
        Self::Disable,
        Self::Allow,
        Self::Prefer,
        Self::Require,
        Self::VerifyCa,
        Self::VerifyFull,
    ];

    /// Convert to the wire token. `Unspecified` maps to the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Disable => "disable",
            Self::Allow => "allow",
            Self::Prefer => "prefer",
            Self::Require => "require",
            Self::VerifyCa => "verify-ca",
            Self::VerifyFull => "verify-full",
        }
    }

    /// Parse a wire token. The empty string is `Unspecified`.
    pub fn parse(s: &str) -> ConfigResult<Self> {
        match s {
            "" => Ok(Self::Unspecified),
            "disable" => Ok(Self::Disable),
            "allow" => Ok(Self::Allow),
            "prefer" => Ok(Self::Prefer),
            "require" => Ok(Self::Require),
            "verify-ca" => Ok(Self::VerifyCa),
            "verify-full" => Ok(Self::VerifyFull),
            other => Err(ConfigError::invalid_enum("sslmode", other)),
        }
    }

    /// Check if this mode is unset.
    pub fn is_unspecified(&self) -> bool {
        *self == Self::Unspecified
    }
}

impl FromStr for SslMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<u8> for SslMode {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unspecified),
            1 => Ok(Self::Disable),
            2 => Ok(Self::Allow),
            3 => Ok(Self::Prefer),
            4 => Ok(Self::Require),
            5 => Ok(Self::VerifyCa),
            6 => Ok(Self::VerifyFull),
            other => Err(ConfigError::invalid_enum("sslmode", other.to_string())),
        }
    }
}

impl From<SslMode> for u8 {
    fn from(mode: SslMode) -> Self {
        mode as u8
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SslMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SslMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Self::parse(&token).map_err(serde::de::Error::custom)
    }
}
