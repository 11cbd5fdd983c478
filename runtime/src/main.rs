use agent::{AgentSettings, PromptAgent};
use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use log::info;
use runtime::{Cli, ConsoleObserver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let (client, config) =
        llm::client_from_env(|c| cli.apply(c)).context("loading completion API configuration")?;
    info!("using model {} at {}", config.model, client.base_url());

    let settings = AgentSettings::new(config.model.clone());
    let mut agent = PromptAgent::connect(client, settings).await?;

    let mut console = ConsoleObserver::new(std::io::stdout(), !cli.quiet);
    for input in cli.inputs() {
        console.begin(&input);
        agent.run_observed(&input, &mut console).await;
        console.end();
        if let Some(e) = console.take_error() {
            return Err(e).context("writing prompts to stdout");
        }
    }
    Ok(())
}
