use clap::{Parser, Subcommand};

use urban_bot::application::errors::BotError;
use urban_bot::application::messaging::CommandRouter;
use urban_bot::application::services::reply;
use urban_bot::domain::entities::CommandType;
use urban_bot::domain::traits::{Bot, TermLookup, WhisperIgnoreList};
use urban_bot::infrastructure::adapters::{ConsoleAdapter, TwitchAdapter};
use urban_bot::infrastructure::config::Config;
use urban_bot::infrastructure::database::Database;
use urban_bot::infrastructure::lookup::UrbanDictionaryClient;
use urban_bot::infrastructure::storage::MemoryStore;

#[derive(Parser)]
#[command(name = "urban-bot")]
#[command(about = "Twitch chat bot for Urban Dictionary lookups", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run {
        /// Read chat from stdin instead of connecting to Twitch
        #[arg(long)]
        console: bool,

        /// Sender login for console messages
        #[arg(long, default_value = "viewer")]
        user: String,
    },
    /// Look up a term once and print the chat reply
    Lookup {
        /// Fetch the usage example instead of the definition
        #[arg(long)]
        example: bool,

        #[arg(required = true)]
        term: Vec<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { console, user } => run_bot(load_config(&cli.config), console, user),
        Commands::Lookup { example, term } => lookup_once(load_config(&cli.config), example, term),
        Commands::Version => {
            println!("urban-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(config_path: &str) -> Config {
    if std::path::Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    }
}

fn runtime() -> Result<tokio::runtime::Runtime, BotError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| BotError::Internal(format!("Failed to start runtime: {}", e)))
}

fn open_ignore_list(config: &Config) -> Box<dyn WhisperIgnoreList> {
    match Database::new(&config.storage.database) {
        Ok(db) => {
            tracing::info!("Database initialized at {}", config.storage.database.display());
            match db.list_whisper_ignore() {
                Ok(users) => tracing::info!("{} user(s) opted out of whispers", users.len()),
                Err(e) => tracing::warn!("Failed to read whisper opt-outs: {}", e),
            }
            Box::new(db)
        }
        Err(e) => {
            tracing::error!("Failed to initialize database: {}, whisper opt-outs will not persist", e);
            Box::new(MemoryStore::new())
        }
    }
}

fn run_bot(config: Config, console: bool, user: String) -> Result<(), BotError> {
    config.validate()?;

    let lookup = UrbanDictionaryClient::new(&config.lookup.endpoint, config.lookup.timeout())?;
    let mut router = CommandRouter::new(
        lookup,
        open_ignore_list(&config),
        config.reply.max_chars,
        config.reply.cooldown(),
    );

    let rt = runtime()?;
    if console || config.twitch.authentication.is_none() {
        let mut bot = ConsoleAdapter::new(user, config.twitch.channel.clone());
        rt.block_on(serve(&mut bot, &mut router))
    } else {
        let mut bot = TwitchAdapter::new(config.twitch.clone())?;
        rt.block_on(serve(&mut bot, &mut router))
    }
}

/// Feed transport events through the router one at a time
async fn serve<B, L, S>(bot: &mut B, router: &mut CommandRouter<L, S>) -> Result<(), BotError>
where
    B: Bot,
    L: TermLookup,
    S: WhisperIgnoreList,
{
    bot.start().await?;

    let info = bot.bot_info();
    tracing::info!("Bot started: {} in #{}", info.username, info.channel);

    while let Some(event) = bot.next_event().await? {
        router.handle(&*bot, event).await;
    }

    tracing::info!("Event stream closed, shutting down");
    Ok(())
}

fn lookup_once(config: Config, example: bool, term: Vec<String>) -> Result<(), BotError> {
    let kind = if example { CommandType::Example } else { CommandType::Definition };
    let term = term.join(" ");

    let client = UrbanDictionaryClient::new(&config.lookup.endpoint, config.lookup.timeout())?;
    let result = runtime()?.block_on(client.fetch(&term, kind));

    println!("{}", reply::render(&result, kind, config.reply.max_chars));
    Ok(())
}

fn init_config() -> Result<(), BotError> {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config)
        .map_err(|e| BotError::Parse(format!("Failed to render config: {}", e)))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
