use clap::Parser;
use std::time::Duration;
use vacancy_stats::adapters::http::build_client;
use vacancy_stats::utils::{logger, validation::Validate};
use vacancy_stats::{
    render, CliConfig, HeadHunter, Provider, Result, SuperJob, SurveyConfig, SurveyEngine,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // .env must be loaded before parsing so SUPERJOB_KEY is visible to clap
    let _ = dotenvy::dotenv();
    let cli = CliConfig::parse();

    // logging
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting vacancy-stats");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli.config);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ Survey failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

async fn run(cli: &CliConfig) -> Result<()> {
    let config = cli.survey_config()?;
    config.validate()?;

    let client = build_client(
        &config.survey.user_agent,
        Duration::from_secs(config.survey.timeout_seconds),
    )?;

    if cli.provider.includes_superjob() {
        let superjob = SuperJob::new(config.superjob.clone(), client.clone());
        print_report(superjob, &config).await?;
    }

    if cli.provider.includes_headhunter() {
        let headhunter = HeadHunter::new(config.headhunter.clone(), client);
        print_report(headhunter, &config).await?;
    }

    Ok(())
}

async fn print_report<P: Provider>(provider: P, config: &SurveyConfig) -> Result<()> {
    let engine = SurveyEngine::new(
        provider,
        config.survey.languages.clone(),
        config.template(),
        config.survey.period_days,
    );

    let statistics = engine.run().await?;
    println!("{}", render(&statistics, engine.provider().title()));
    Ok(())
}
