use churn_advisor::config::toml_config::OutputFormat;
use churn_advisor::core::{intake, presenter};
use churn_advisor::domain::ports::ConfigProvider;
use churn_advisor::utils::logger;
use churn_advisor::{ChurnAdvisor, ChurnError, CliConfig, LocalStorage};
use clap::Parser;

fn fail(e: &ChurnError) -> ! {
    tracing::debug!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // Settings decide the log format, so they load before the subscriber exists.
    let settings = cli.load_settings();
    let log_format = settings
        .as_ref()
        .map(|s| s.log_format)
        .unwrap_or_default();
    logger::init_cli_logger(cli.verbose, log_format);

    tracing::info!("Starting churn-advisor");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = settings.unwrap_or_else(|e| fail(&e));
    let storage = LocalStorage::new(".".to_string());

    // The form is checked before the model is touched.
    let form = if cli.model_info {
        None
    } else {
        let form = match &cli.input {
            Some(path) => intake::read_form(&storage, path).await,
            None => Ok(cli.form()),
        };
        Some(form.unwrap_or_else(|e| fail(&e)))
    };

    let advisor = ChurnAdvisor::from_config(&storage, &settings)
        .await
        .unwrap_or_else(|e| fail(&e));

    let Some(form) = form else {
        let model = advisor.scorer();
        println!("Model: {}", model.source());
        println!("  Nodes:  {}", model.n_nodes());
        println!("  Leaves: {}", model.n_leaves());
        println!("  Depth:  {}", model.depth());
        return;
    };

    let assessment = advisor.assess(&form).unwrap_or_else(|e| fail(&e));

    match settings.output_format {
        OutputFormat::Text => {
            if settings.show_features() {
                println!("{}", presenter::render_features(&assessment.features));
            }
            print!("{}", presenter::render_text(&assessment.result));
        }
        OutputFormat::Json => {
            let features = settings.show_features().then_some(&assessment.features);
            let json = presenter::render_json(&assessment.result, features)
                .unwrap_or_else(|e| fail(&e));
            println!("{}", json);
        }
    }
}
