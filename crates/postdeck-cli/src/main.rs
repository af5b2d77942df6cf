use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use postdeck_application::AppContext;
use postdeck_core::content::{CommentTone, CommentType, ContentLength, ContentTone};
use postdeck_core::route::Route;
use postdeck_infrastructure::ConfigService;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "postdeck")]
#[command(about = "Postdeck - social media operations dashboard", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/postdeck/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session token
    Login {
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Sign out and forget the session token
    Logout,
    /// Show the signed-in operator
    Whoami,
    /// List connected social accounts
    Accounts {
        /// Group accounts by platform
        #[arg(long)]
        grouped: bool,
    },
    /// Connect a platform account
    Connect {
        platform: String,
        /// Credentials as a JSON object
        #[arg(long, default_value = "{}")]
        credentials: String,
    },
    /// Mark an account disconnected
    Disconnect { account_id: String },
    /// Generate a post about a topic
    GenerateContent {
        topic: String,
        #[arg(long, default_value = "twitter")]
        platform: String,
        #[arg(long, default_value = "professional")]
        tone: ContentTone,
        #[arg(long, default_value = "medium")]
        length: ContentLength,
        #[arg(long = "keyword")]
        keywords: Vec<String>,
        #[arg(long)]
        audience: Option<String>,
    },
    /// Generate a comment replying to a post
    GenerateComment {
        original_post: String,
        #[arg(long = "type", default_value = "supportive")]
        comment_type: CommentType,
        #[arg(long, default_value = "friendly")]
        tone: CommentTone,
        #[arg(long)]
        context: Option<String>,
    },
    /// Score a draft
    Evaluate { content: String },
    /// Publish or schedule content to accounts
    Publish {
        content: String,
        #[arg(long = "account", required = true)]
        accounts: Vec<String>,
        /// RFC 3339 time to schedule for
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long = "media")]
        media_urls: Vec<String>,
    },
    /// List tweets
    Tweets,
    /// Create a tweet
    Tweet {
        account_id: String,
        content: String,
        #[arg(long = "media")]
        media_urls: Vec<String>,
        /// RFC 3339 time to schedule for
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// List executor bot accounts
    Bots,
    /// List automation rules
    Rules,
    /// List engagement strategies
    Strategies,
    /// Show the route table and what the current session may open
    Routes,
}

impl Commands {
    fn route(&self) -> Option<Route> {
        let route = match self {
            Commands::Login { .. } => Route::Login,
            Commands::Logout | Commands::Whoami => Route::Settings,
            Commands::Accounts { .. } | Commands::Connect { .. } | Commands::Disconnect { .. } => {
                Route::Accounts
            }
            Commands::GenerateContent { .. } | Commands::Publish { .. } => {
                Route::IntegratedOperations
            }
            Commands::GenerateComment { .. } => Route::CommentGeneration,
            Commands::Evaluate { .. } => Route::ContentEvaluation,
            Commands::Tweets | Commands::Tweet { .. } => Route::Tweets,
            Commands::Bots | Commands::Rules | Commands::Strategies => Route::Automation,
            Commands::Routes => return None,
        };
        Some(route)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    };
    let config = config_service.load()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let context = AppContext::bootstrap(config).await?;

    if let Some(route) = cli.command.route()
        && !commands::enter(&context, route).await
    {
        return Ok(());
    }

    match cli.command {
        Commands::Login { email, password } => commands::session::login(&context, &email, &password).await,
        Commands::Logout => commands::session::logout(&context).await,
        Commands::Whoami => commands::session::whoami(&context).await,
        Commands::Accounts { grouped } => commands::accounts::list(&context, grouped).await,
        Commands::Connect {
            platform,
            credentials,
        } => commands::accounts::connect(&context, &platform, &credentials).await?,
        Commands::Disconnect { account_id } => {
            commands::accounts::disconnect(&context, &account_id).await
        }
        Commands::GenerateContent {
            topic,
            platform,
            tone,
            length,
            keywords,
            audience,
        } => {
            let request = postdeck_core::content::ContentGenerationRequest {
                topic,
                platform,
                tone,
                length,
                keywords: (!keywords.is_empty()).then_some(keywords),
                target_audience: audience,
            };
            commands::content::generate(&context, &request).await
        }
        Commands::GenerateComment {
            original_post,
            comment_type,
            tone,
            context: post_context,
        } => {
            let request = postdeck_core::content::CommentGenerationRequest {
                original_post,
                comment_type,
                tone,
                context: post_context,
            };
            commands::content::comment(&context, &request).await
        }
        Commands::Evaluate { content } => commands::content::evaluate(&context, &content).await,
        Commands::Publish {
            content,
            accounts,
            at,
            tags,
            media_urls,
        } => {
            let request = postdeck_core::content::PublishRequest {
                content,
                accounts,
                scheduled_time: at,
                tags: (!tags.is_empty()).then_some(tags),
                media_urls: (!media_urls.is_empty()).then_some(media_urls),
            };
            commands::content::publish(&context, &request).await
        }
        Commands::Tweets => commands::twitter::tweets(&context).await,
        Commands::Tweet {
            account_id,
            content,
            media_urls,
            at,
        } => {
            let media = (!media_urls.is_empty()).then_some(media_urls);
            commands::twitter::create_tweet(&context, &account_id, &content, media, at).await
        }
        Commands::Bots => commands::twitter::bots(&context).await,
        Commands::Rules => commands::twitter::rules(&context).await,
        Commands::Strategies => commands::twitter::strategies(&context).await,
        Commands::Routes => commands::routes::list(&context).await,
    }

    Ok(())
}
