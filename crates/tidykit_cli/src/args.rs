//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tidykit_clean::EnumPhonePolicy;
use tidykit_gen::{C_SECRETS_PATH_DEFAULT, EnumContentStyle, SpecConfigSources};

#[derive(Debug, Parser)]
#[command(name = "tidykit")]
#[command(about = "Spreadsheet column normalizer and marketing-copy generator")]
#[command(version)]
pub struct Cli {
    /// Gemini API key
    #[arg(long, env = "GEMINI_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Gemini model id
    #[arg(long, env = "TIDYKIT_GEMINI_MODEL", global = true)]
    pub model: Option<String>,

    /// Gemini REST base URL
    #[arg(long, env = "TIDYKIT_GEMINI_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Secrets TOML consulted when no key is set
    #[arg(long, default_value = C_SECRETS_PATH_DEFAULT, global = true)]
    pub secrets_file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config_sources(&self) -> SpecConfigSources {
        SpecConfigSources {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: None,
            secrets_path: Some(self.secrets_file.clone()),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize name, phone and date columns of an .xlsx file
    Normalize {
        /// Input workbook (first sheet, first row is the header)
        file: PathBuf,

        /// Output directory (defaults to the input's directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Rows of the original data to preview
        #[arg(long, default_value_t = 5)]
        preview: usize,

        /// Phone cleaning policy
        #[arg(long, value_enum, default_value = "strict")]
        phone_policy: PhonePolicyArg,
    },

    /// Generate advertising copy for a product
    Generate {
        /// Product name
        #[arg(long)]
        product: String,

        /// Tone of the copy
        #[arg(long, value_enum)]
        style: Option<ContentStyleArg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PhonePolicyArg {
    /// Keep every digit, ensure a leading 0
    Strict,
    /// Keep the last 9 digits behind a leading 0
    Suffix,
}

impl From<PhonePolicyArg> for EnumPhonePolicy {
    fn from(value: PhonePolicyArg) -> Self {
        match value {
            PhonePolicyArg::Strict => Self::Strict,
            PhonePolicyArg::Suffix => Self::Suffix,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContentStyleArg {
    Humorous,
    Professional,
    EmotionalAppeal,
    DeepDiscount,
}

impl From<ContentStyleArg> for EnumContentStyle {
    fn from(value: ContentStyleArg) -> Self {
        match value {
            ContentStyleArg::Humorous => Self::Humorous,
            ContentStyleArg::Professional => Self::Professional,
            ContentStyleArg::EmotionalAppeal => Self::EmotionalAppeal,
            ContentStyleArg::DeepDiscount => Self::DeepDiscount,
        }
    }
}
