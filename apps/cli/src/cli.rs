//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use israeli_validator::validators::{
    AccountFormat, AccountStyle, PhoneStyle, PhoneType, PostalStyle, bank_account, id, phone,
    postal_code,
};
use israeli_validator::{IdentifierKind, Outcome};

use crate::config::Overrides;
use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "israeli",
    version,
    about = "Validate, normalize and format Israeli identifiers",
    long_about = None
)]
pub struct Cli {
    /// Configuration file (defaults to ./israeli.toml when present)
    #[arg(long, global = true, env = "ISRAELI_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a national ID number (Mispar Zehut)
    Id {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Validate a phone number
    Phone {
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Required category: mobile, landline, voip or any
        #[arg(long = "type", value_name = "TYPE")]
        phone_type: Option<PhoneType>,

        /// Output style: dashed, international or compact
        #[arg(long)]
        style: Option<PhoneStyle>,
    },

    /// Validate a postal code (Mikud)
    Postal {
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Output style: compact or spaced
        #[arg(long)]
        style: Option<PostalStyle>,
    },

    /// Validate a bank account (domestic or IBAN)
    Bank {
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Required format: domestic, iban or any
        #[arg(long)]
        format: Option<AccountFormat>,

        /// Output style: domestic, compact or iban
        #[arg(long)]
        style: Option<AccountStyle>,
    },
}

impl Cli {
    /// Flag values that take precedence over file and environment settings.
    pub fn overrides(&self) -> Overrides {
        let mut overrides = Overrides {
            output: self.output,
            ..Overrides::default()
        };

        match &self.command {
            Command::Id { .. } => {}
            Command::Phone {
                phone_type, style, ..
            } => {
                overrides.phone_type = *phone_type;
                overrides.phone_style = *style;
            }
            Command::Postal { style, .. } => overrides.postal_style = *style,
            Command::Bank { format, style, .. } => {
                overrides.account_format = *format;
                overrides.account_style = *style;
            }
        }

        overrides
    }
}

impl Command {
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::Id { .. } => IdentifierKind::Id,
            Self::Phone { .. } => IdentifierKind::Phone,
            Self::Postal { .. } => IdentifierKind::PostalCode,
            Self::Bank { .. } => IdentifierKind::BankAccount,
        }
    }

    /// Runs the validator for this command with the resolved settings.
    pub fn run(&self, settings: &crate::config::Settings) -> Outcome {
        match self {
            Self::Id { value } => id::parse(value),
            Self::Phone { value, .. } => phone::parse(value, settings.phone_type),
            Self::Postal { value, .. } => postal_code::parse(value),
            Self::Bank { value, .. } => bank_account::parse(value, settings.account_format),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_phone_flags_become_overrides() {
        let cli = Cli::parse_from([
            "israeli",
            "phone",
            "0501234567",
            "--type",
            "mobile",
            "--style",
            "international",
        ]);
        let overrides = cli.overrides();
        assert_eq!(overrides.phone_type, Some(PhoneType::Mobile));
        assert_eq!(overrides.phone_style, Some(PhoneStyle::International));
        assert_eq!(overrides.account_format, None);
    }

    #[test]
    fn test_value_may_start_with_plus_or_hyphen() {
        let cli = Cli::parse_from(["israeli", "phone", "+972501234567"]);
        let Command::Phone { value, .. } = cli.command else {
            panic!("expected the phone subcommand");
        };
        assert_eq!(value, "+972501234567");
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let result = Cli::try_parse_from(["israeli", "bank", "123", "--format", "swift"]);
        assert!(result.is_err());
    }
}
