pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use toml_config::{LogFormat, OutputFormat, TomlConfig};

#[cfg(feature = "cli")]
use crate::domain::model::CustomerForm;
#[cfg(feature = "cli")]
use clap::Parser;

/// Effective settings after layering CLI flags over the TOML file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub model_path: String,
    pub log_format: LogFormat,
    pub output_format: OutputFormat,
    pub show_features: bool,
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            model_path: config.model.path.clone(),
            log_format: config.logging.format,
            output_format: config.output.format,
            show_features: config.output.show_features,
        }
    }

    /// Flags given on the command line win over the file.
    pub fn with_overrides(
        mut self,
        model_path: Option<String>,
        output_format: Option<OutputFormat>,
        show_features: bool,
    ) -> Self {
        if let Some(path) = model_path {
            self.model_path = path;
        }
        if let Some(format) = output_format {
            self.output_format = format;
        }
        self.show_features |= show_features;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_toml(&TomlConfig::default())
    }
}

impl ConfigProvider for Settings {
    fn model_path(&self) -> &str {
        &self.model_path
    }

    fn show_features(&self) -> bool {
        self.show_features
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("model.path", &self.model_path)
    }
}

/// The customer form, one flag per field, plus run options.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "churn-advisor")]
#[command(about = "Predict customer churn and suggest retention actions")]
pub struct CliConfig {
    #[arg(long, default_value_t = 100)]
    pub account_length: u32,

    #[arg(long, default_value = "Yes", help = "Yes or No")]
    pub international_plan: String,

    #[arg(long, default_value = "Yes", help = "Yes or No")]
    pub voice_mail_plan: String,

    #[arg(long, default_value_t = 0)]
    pub number_vmail_messages: u32,

    #[arg(long, default_value_t = 150.0)]
    pub total_day_minutes: f64,

    #[arg(long, default_value_t = 50)]
    pub total_day_calls: u32,

    #[arg(long, default_value_t = 120.0)]
    pub total_eve_minutes: f64,

    #[arg(long, default_value_t = 40)]
    pub total_eve_calls: u32,

    #[arg(long, default_value_t = 100.0)]
    pub total_night_minutes: f64,

    #[arg(long, default_value_t = 30)]
    pub total_night_calls: u32,

    #[arg(long, default_value_t = 10.0)]
    pub total_intl_minutes: f64,

    #[arg(long, default_value_t = 3)]
    pub total_intl_calls: u32,

    #[arg(long, default_value_t = 1)]
    pub customer_service_calls: u32,

    #[arg(long, help = "Read the customer form from a JSON file instead of flags")]
    pub input: Option<String>,

    #[arg(long, help = "Path to the decision tree artifact")]
    pub model: Option<String>,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Print the encoded feature vector")]
    pub show_features: bool,

    #[arg(long, help = "Print a summary of the loaded model and exit")]
    pub model_info: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn form(&self) -> CustomerForm {
        CustomerForm {
            account_length: self.account_length,
            international_plan: self.international_plan.clone(),
            voice_mail_plan: self.voice_mail_plan.clone(),
            number_vmail_messages: self.number_vmail_messages,
            total_day_minutes: self.total_day_minutes,
            total_day_calls: self.total_day_calls,
            total_eve_minutes: self.total_eve_minutes,
            total_eve_calls: self.total_eve_calls,
            total_night_minutes: self.total_night_minutes,
            total_night_calls: self.total_night_calls,
            total_intl_minutes: self.total_intl_minutes,
            total_intl_calls: self.total_intl_calls,
            customer_service_calls: self.customer_service_calls,
        }
    }

    pub fn settings(&self, file: Option<&TomlConfig>) -> Settings {
        let base = file.map(Settings::from_toml).unwrap_or_default();
        base.with_overrides(self.model.clone(), self.format, self.show_features)
    }

    /// Reads `--config` when given, layers the flags over it and validates.
    pub fn load_settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };
        let settings = self.settings(file.as_ref());
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let file = TomlConfig::from_toml_str(
            "[model]\npath = \"from_file.json\"\n[output]\nformat = \"json\"\n",
        )
        .unwrap();
        let settings = Settings::from_toml(&file).with_overrides(
            Some("from_flag.json".to_string()),
            None,
            true,
        );
        assert_eq!(settings.model_path(), "from_flag.json");
        assert_eq!(settings.output_format, OutputFormat::Json);
        assert!(settings.show_features());
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.model_path, toml_config::DEFAULT_MODEL_PATH);
        assert_eq!(settings.output_format, OutputFormat::Text);
        assert!(settings.validate().is_ok());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_form_defaults_match_form_defaults() {
        let cli = CliConfig::parse_from(["churn-advisor"]);
        assert_eq!(cli.form(), CustomerForm::default());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_flags() {
        let cli = CliConfig::parse_from([
            "churn-advisor",
            "--account-length",
            "200",
            "--international-plan",
            "No",
            "--total-intl-minutes",
            "20",
            "--format",
            "json",
            "--model",
            "m.json",
        ]);
        let form = cli.form();
        assert_eq!(form.account_length, 200);
        assert_eq!(form.international_plan, "No");
        assert_eq!(form.total_intl_minutes, 20.0);
        let settings = cli.settings(None);
        assert_eq!(settings.output_format, OutputFormat::Json);
        assert_eq!(settings.model_path, "m.json");
    }
}
