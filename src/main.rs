use std::path::PathBuf;

use clap::{
    CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use fmsquared::{
    cli::{self, CollageRequest},
    collage::CaptionOptions,
    config, error, info,
    types::Period,
    utils, warning,
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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Your Last.fm API key
    #[clap(required_unless_present = "completions")]
    token: Option<String>,

    /// The user to generate the collage for
    #[clap(required_unless_present = "completions")]
    user: Option<String>,

    /// The amount of albums to display horizontally
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// The amount of albums to display vertically
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// The time period to get albums from (overall, 7day, 1month, 3month, 6month, 12month)
    #[clap(long, default_value = "overall", value_parser = utils::parse_period)]
    period: Period,

    /// Remove albums that have no album art
    #[clap(long)]
    no_empty: bool,

    /// Display only artist name
    #[clap(long)]
    artist_only: bool,

    /// Display listen count
    #[clap(long)]
    listen_count: bool,

    /// Increase verbosity of output
    #[clap(long)]
    verbose: bool,

    /// Font used for captions (defaults to FMSQUARED_FONT, a system font or the bundled DejaVu Sans)
    #[clap(long)]
    font: Option<PathBuf>,

    /// Where to write the collage
    #[clap(long, default_value = "final.png")]
    output: PathBuf,

    /// Print shell completions and exit
    #[clap(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    fmsquared::set_verbose(cli.verbose);
    info!(
        "{} | version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let (Some(token), Some(user)) = (cli.token, cli.user) else {
        error!("Both token and user are required");
    };

    let request = CollageRequest {
        token,
        user,
        width: cli.width,
        height: cli.height,
        period: cli.period,
        exclude_empty_art: cli.no_empty,
        caption: CaptionOptions {
            artist_only: cli.artist_only,
            show_playcount: cli.listen_count,
        },
        font: cli.font,
        output: cli.output,
    };

    cli::generate(request).await;
}
