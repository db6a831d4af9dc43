//! Chatterbox CLI
//!
//! Command-line front end for the Chatterbox client core:
//! - Sign in, register, recover a password
//! - Browse the feed and a post's comments
//! - Post a comment, optionally with an image

use anyhow::Context;
use chatterbox::auth::{self, ForgotPasswordForm, LoginForm, RegisterForm};
use chatterbox::comment::{self, CommentDraft, ImageAttachment, COMMENT_POSTED, IMAGE_UPLOAD_FAILED};
use chatterbox::config::{generate_default_config, Config};
use chatterbox::logging::init_logging;
use chatterbox::posts::fetch_feed;
use chatterbox::{ApiClient, FileTokenStore, ReqwestTransport, Session};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatterbox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the Chatterbox social chat service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with an email address or phone number
    Login {
        /// Email or phone number
        identifier: String,
        #[arg(short, long)]
        password: String,
    },

    /// Create an account
    Register {
        #[arg(long)]
        display_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },

    /// Request password reset instructions
    ForgotPassword {
        email: String,
    },

    /// Forget the stored access token
    Logout,

    /// Show the signed-in user
    Whoami,

    /// List posts
    Feed {
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// List comments on a post
    Comments {
        /// Post id
        post: String,
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Comment on a post
    Comment {
        /// Post id
        post: String,
        /// Comment text
        text: Option<String>,
        /// Image to attach
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Logging disabled: {}", e);
    }

    let store = FileTokenStore::new(&config.storage.token_file);
    let transport = ReqwestTransport::new(config.api.request_timeout_secs)?;
    let client = ApiClient::new(config.api.base_url.as_str(), transport, store);
    let mut session = Session::new();

    match cli.command {
        Commands::Login {
            identifier,
            password,
        } => {
            let form = LoginForm {
                identifier,
                password,
            };
            match auth::login(&client, &mut session, &form).await {
                Ok(profile) => println!("Signed in as {}", profile.display_name),
                Err(e) => fail(e),
            }
        }

        Commands::Register {
            display_name,
            email,
            phone,
            password,
            confirm_password,
        } => {
            let form = RegisterForm {
                display_name,
                email,
                phone,
                password,
                confirm_password,
            };
            match auth::register(&client, &form).await {
                Ok(message) => println!("{}", message),
                Err(e) => fail(e),
            }
        }

        Commands::ForgotPassword { email } => {
            match auth::forgot_password(&client, &ForgotPasswordForm { email }).await {
                Ok(message) => println!("{}", message),
                Err(e) => fail(e),
            }
        }

        Commands::Logout => {
            auth::logout(client.credentials(), &mut session)?;
            println!("Signed out");
        }

        Commands::Whoami => {
            session = auth::restore_session(&client).await;
            match session.profile() {
                Some(profile) => {
                    println!("{} ({})", profile.display_name, profile.id);
                    if let Some(avatar) = &profile.avatar_url {
                        println!("Avatar: {}", avatar);
                    }
                }
                None => {
                    println!("Not signed in.");
                    println!();
                    println!("Sign in with:");
                    println!("  chatterbox login <email-or-phone> --password <password>");
                }
            }
        }

        Commands::Feed { page } => {
            let posts = fetch_feed(&client, page).await.unwrap_or_else(|e| fail(e));

            if posts.is_empty() {
                println!("No posts on page {}.", page);
            } else {
                println!(
                    "{:<26} {:<18} {:>6} {:>9} {:>8}  {}",
                    "ID", "Author", "Images", "Reactions", "Comments", "Content"
                );
                println!("{}", "-".repeat(100));

                for post in posts {
                    println!(
                        "{:<26} {:<18} {:>6} {:>9} {:>8}  {}",
                        post.id,
                        truncate(&post.author.display_name, 18),
                        post.image_urls.len(),
                        post.total_reactions,
                        post.total_comments,
                        truncate(&post.content, 40)
                    );
                }
            }
        }

        Commands::Comments { post, page } => {
            let comments = comment::fetch_comments(&client, &post, page)
                .await
                .unwrap_or_else(|e| fail(e));

            if comments.is_empty() {
                println!("No comments on page {}.", page);
            }
            for c in comments {
                let when = c.created_at.format("%Y-%m-%d %H:%M");
                println!("[{}] {}: {}", when, c.author.display_name, c.content);
                if let Some(url) = &c.image_url {
                    println!("    image: {}", url);
                }
            }
        }

        Commands::Comment { post, text, image } => {
            let mut draft = CommentDraft::new();
            draft.set_content(text.unwrap_or_default());
            if let Some(path) = image {
                let attachment = ImageAttachment::from_path(&path)
                    .with_context(|| format!("Failed to read image {:?}", path))?;
                draft.attach_image(attachment);
            }

            match draft.submit(&client, &post).await {
                Ok(report) => {
                    if report.image_dropped {
                        eprintln!("{}", IMAGE_UPLOAD_FAILED);
                    }
                    println!("{}", COMMENT_POSTED);
                }
                Err(e) => fail(e),
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
