//! Layered settings: defaults, then `israeli.toml`, then `ISRAELI_*`
//! environment variables, then command-line flags.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use israeli_validator::{IdentifierKind, Style};
use israeli_validator::validators::{
    AccountFormat, AccountStyle, PhoneStyle, PhoneType, PostalStyle,
};
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "israeli.toml";

/// Prefix for environment overrides, e.g. `ISRAELI_PHONE_TYPE=mobile`.
pub const ENV_PREFIX: &str = "ISRAELI_";

/// `ISRAELI_*` variables read elsewhere, never as settings.
const IGNORED_ENV: &[&str] = &["log", "log_format", "config"];

/// Resolved settings for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputFormat,
    pub phone_type: PhoneType,
    pub phone_style: PhoneStyle,
    pub postal_style: PostalStyle,
    pub account_format: AccountFormat,
    pub account_style: AccountStyle,
}

/// Flag values; only the ones actually given are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_type: Option<PhoneType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_style: Option<PhoneStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_style: Option<PostalStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_format: Option<AccountFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_style: Option<AccountStyle>,
}

// figment::Error is handed unboxed to anyhow and to `Jail` closures.
#[allow(clippy::result_large_err)]
impl Settings {
    /// Builds the layered figment.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn figment(
        config: Option<&Path>,
        overrides: &Overrides,
    ) -> Result<Figment, figment::Error> {
        let file = match config {
            Some(path) if !path.is_file() => {
                return Err(figment::Error::from(format!(
                    "configuration file `{}` not found",
                    path.display()
                )));
            }
            Some(path) => Toml::file(path),
            None => Toml::file(DEFAULT_CONFIG_FILE),
        };

        Ok(Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX).ignore(IGNORED_ENV))
            .merge(Serialized::defaults(overrides)))
    }

    pub fn load(config: Option<&Path>, overrides: &Overrides) -> Result<Self, figment::Error> {
        let settings: Self = Self::figment(config, overrides)?.extract()?;
        tracing::debug!(?settings, "settings resolved");
        Ok(settings)
    }

    /// The output style configured for `kind`.
    pub fn style_for(&self, kind: IdentifierKind) -> Option<Style> {
        match kind {
            IdentifierKind::Id => None,
            IdentifierKind::Phone => Some(self.phone_style.into()),
            IdentifierKind::PostalCode => Some(self.postal_style.into()),
            IdentifierKind::BankAccount => Some(self.account_style.into()),
        }
    }
}
