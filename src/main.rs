use std::process;
use std::sync::Arc;

use anyhow::Result;
use log::{error, info};
use teloxide::prelude::*;

use calories::bot;
use calories::config::BotConfig;
use calories::provider::build_provider;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting Calorie Counter Telegram Bot");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Missing secrets abort startup before any update is served
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            process::exit(1);
        }
    };

    info!(
        "Using analysis provider: {} (model {})",
        config.provider, config.provider_config.model_name
    );

    // Initialize the bot and the analysis provider
    let bot = Bot::new(config.bot_token.clone());
    let provider = build_provider(&config);

    info!("Bot initialized, starting dispatcher");

    // Set up the dispatcher with the provider injected into the handler
    let handler = dptree::entry().branch(Update::filter_message().endpoint({
        let provider = Arc::clone(&provider);
        move |bot: Bot, msg: Message| {
            let provider = Arc::clone(&provider);
            async move { bot::message_handler(bot, msg, provider).await }
        }
    }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
