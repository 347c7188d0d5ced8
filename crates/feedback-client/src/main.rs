use std::process::ExitCode;

use clap::{Parser, Subcommand};

use feedback_client::notify::{Notification, NotificationVariant, Notifier};
use feedback_client::render::render_board;
use feedback_client::{FeedbackBoard, FeedbackClient};
use feedback_types::api::CreateFeedbackRequest;

#[derive(Parser)]
#[command(name = "feedback", version, about = "Read and post to a feedback board")]
struct Cli {
    /// Base URL of the feedback server
    #[arg(long, global = true, env = "FEEDBACK_SERVER_URL", default_value = "http://127.0.0.1:5000")]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every entry, newest first
    List,
    /// Submit a new entry and show the refreshed board
    Post {
        #[arg(long)]
        name: String,
        #[arg(long)]
        content: String,
    },
}

struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, n: Notification) {
        match n.variant {
            NotificationVariant::Success => println!("✔ {}\n  {}\n", n.title, n.description),
            NotificationVariant::Error => eprintln!("✖ {}\n  {}", n.title, n.description),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "feedback_client=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let board = FeedbackBoard::new(FeedbackClient::new(cli.server)?, TerminalNotifier);

    match cli.command {
        Command::List => match board.feedbacks().await {
            Ok(list) => print!("{}", render_board(&list, chrono::Utc::now())),
            Err(e) => {
                eprintln!("{}", e);
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Post { name, content } => {
            // Failures were already reported by the notifier.
            if board.submit(CreateFeedbackRequest::new(name, content)).await.is_err() {
                return Ok(ExitCode::FAILURE);
            }
            match board.feedbacks().await {
                Ok(list) => print!("{}", render_board(&list, chrono::Utc::now())),
                Err(e) => eprintln!("{}", e),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
