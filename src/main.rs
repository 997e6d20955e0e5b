//! Glimmerly CLI
//!
//! Terminal front end for Glimmerly:
//! - Play the daily glimmer interactively
//! - Draw a glimmer without starting a session
//! - Browse the catalog, the feed and profiles
//! - Validate the login form
//! - Reset saved onboarding

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use glimmerly::config::{generate_default_config, LoggingConfig};
use glimmerly::login::{LoginForm, LoginMethod, SocialProvider};
use glimmerly::shell::{self, Flow, ShellCommand};
use glimmerly::storage::{clear_onboarding, load_onboarding, FileStore, MemoryStore};
use glimmerly::views::{CategoryFilter, ProfileTab, ProfileView};
use glimmerly::{Catalog, Category, Config, Glimmerly, SimulatedCapture};

#[derive(Parser)]
#[command(name = "glimmerly")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "One small challenge a day")]
#[command(long_about = "Glimmerly draws one small daily challenge from the categories you pick.\nRecord it, share it, and watch what others did.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: ~/.config/glimmerly/config.toml or ./glimmerly.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the storage directory
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Keep onboarding in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (default)
    Play,

    /// Draw a glimmer
    Draw {
        /// Categories to draw from (default: saved onboarding, else all)
        #[arg(short = 'C', long, value_delimiter = ',')]
        categories: Vec<Category>,
        /// Seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List catalog glimmers
    Catalog {
        /// Only this category
        #[arg(short = 'C', long)]
        category: Option<Category>,
    },

    /// List completed challenges in feed order
    Feed {
        /// `all` or a category name
        #[arg(short = 'C', long, default_value = "all")]
        category: CategoryFilter,
    },

    /// Show a profile
    Profile {
        /// User id (default: the signed-in user)
        user_id: Option<String>,
        /// all, videos or photos
        #[arg(short, long, default_value = "all")]
        tab: ProfileTab,
    },

    /// Validate the login form
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        /// Continue with google, facebook or apple instead
        #[arg(long)]
        social: Option<String>,
    },

    /// Forget saved onboarding
    Reset,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = dir.clone();
    }

    init_logging(&config.logging);
    tracing::debug!("Glimmerly v{}", env!("CARGO_PKG_VERSION"));

    let json = cli.format == "json";

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut app = if cli.ephemeral {
                Glimmerly::new(
                    Catalog::sample(),
                    Box::new(MemoryStore::new()),
                    Arc::new(
                        SimulatedCapture::new(config.capture.delay())
                            .url(config.capture.placeholder_url.clone()),
                    ),
                    &config.session,
                )
            } else {
                Glimmerly::from_config(&config)
                    .with_context(|| format!("Cannot open storage in {:?}", config.data_dir()))?
            };
            play(&mut app).await?;
        }

        Commands::Draw { categories, seed } => {
            let catalog = Catalog::sample();
            let categories = if categories.is_empty() && !cli.ephemeral {
                let store = FileStore::open(config.data_dir())?;
                load_onboarding(&store)?.unwrap_or_default()
            } else {
                categories
            };

            let mut rng = match seed.or(config.session.seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let glimmer = catalog.random_glimmer(&categories, &mut rng);

            if json {
                println!("{}", serde_json::to_string_pretty(glimmer)?);
            } else {
                println!(
                    "{} {}  {}",
                    glimmer.category.emoji(),
                    glimmer.category,
                    glimmer.title
                );
                println!("{}", glimmer.description);
            }
        }

        Commands::Catalog { category } => {
            let catalog = Catalog::sample();
            let filter: Vec<Category> = category.into_iter().collect();
            let glimmers: Vec<_> = if filter.is_empty() {
                catalog.glimmers().iter().collect()
            } else {
                catalog.glimmers_in(&filter).collect()
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&glimmers)?);
            } else {
                println!("{}", shell::glimmer_table(&glimmers));
            }
        }

        Commands::Feed { category } => {
            let catalog = Catalog::sample();
            let items = catalog.feed_in(category.as_category());

            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                println!("{}", shell::feed_table(&catalog, &items));
            }
        }

        Commands::Profile { user_id, tab } => {
            let catalog = Catalog::sample();
            let user_id = user_id.unwrap_or_else(|| catalog.current_user().id.clone());
            let user = catalog
                .user(&user_id)
                .ok_or_else(|| glimmerly::AppError::UserNotFound(user_id.clone()))?;
            let challenges = catalog
                .challenges_by(&user.id, tab.media_type())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>();

            if json {
                let body = serde_json::json!({
                    "user": user,
                    "completedChallenges": challenges,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                let mut view =
                    ProfileView::new(user.clone(), catalog.is_current_user(&user.id), challenges);
                view.set_tab(tab);
                println!("{}", shell::profile_summary(&view));
            }
        }

        Commands::Login {
            email,
            password,
            social,
        } => {
            let mut form = LoginForm::new().email(email).password(password);

            let result = match social {
                Some(name) => {
                    form.set_method(LoginMethod::Social);
                    let provider = SocialProvider::all()
                        .iter()
                        .copied()
                        .find(|p| p.to_string().eq_ignore_ascii_case(&name))
                        .ok_or_else(|| anyhow::anyhow!("Unknown social provider: {}", name))?;
                    form.continue_with(provider)
                }
                None => form.submit(),
            };

            match result {
                Ok(request) => println!("{}", request),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Reset => {
            let mut store = FileStore::open(config.data_dir())?;
            clear_onboarding(&mut store)?;
            println!("Onboarding reset ({:?})", store.path());
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("glimmerly={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn prompt() -> std::io::Result<()> {
    print!("glimmerly> ");
    std::io::stdout().flush()
}

async fn play(app: &mut Glimmerly) -> anyhow::Result<()> {
    if let Err(e) = app.mount() {
        tracing::warn!("Could not restore onboarding: {}", e);
        eprintln!("Saved preferences are unreadable ({}). Run `glimmerly reset` to clear them.", e);
    }

    println!("{}", shell::render(app));
    println!();
    println!("Type `help` for commands.");
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let Some(line) = line else {
            println!();
            break;
        };

        let flow = match line.parse::<ShellCommand>() {
            Ok(cmd) => shell::execute(app, cmd).await,
            Err(e) => Err(e.into()),
        };

        match flow {
            Ok(Flow::Quit) => break,
            Ok(Flow::Help) => println!("{}", shell::HELP),
            Ok(Flow::Continue) => {
                for notice in app.drain_notices() {
                    println!("» {}", notice);
                }
                println!("{}", shell::render(app));
            }
            Err(e) => println!("! {}", e),
        }
        prompt()?;
    }

    app.cancel_capture();
    tracing::info!(session = %app.session_id(), "Session ended");
    Ok(())
}
