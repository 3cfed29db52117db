use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotify_nvim::{
    cli,
    config::{self, Config},
    error,
    management::Session,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify and initialize the session
    Auth,

    /// Skip to the next track
    Next,

    /// Skip to the previous track
    Previous,

    /// Search tracks by artist and/or title
    Search(SearchOptions),

    /// Start playback of one or more Spotify URIs
    Play(PlayOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Filter by artist name
    #[clap(long)]
    pub artist: Option<String>,

    /// Filter by track title
    #[clap(long)]
    pub track: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    /// Spotify URIs, e.g. spotify:track:4uLU6hMCjMI75M1A2tKUQC
    #[clap(required = true, num_args = 1..)]
    pub uris: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let session = Session::new(Config::from_env());

    match cli.command {
        Command::Auth => cli::auth(&session).await,
        Command::Next => cli::next_track(&session).await,
        Command::Previous => cli::previous_track(&session).await,
        Command::Search(opt) => cli::search(&session, opt.artist, opt.track).await,
        Command::Play(opt) => cli::play(&session, opt.uris).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
