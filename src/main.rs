use clap::Parser;
use log::debug;
use manga_cli::{
    app,
    config::Config,
    external::{self, ExternalViewer, ZipCommand},
    fetch::HttpFetcher,
    prompt::TerminalPrompt,
    scrape::HtmlExtractor,
};

/// Search a manga, pick a chapter and read it; chapters are cached as .cbz files.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
struct Args {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let _args = Args::parse();

    let config = Config::from_home()?;
    debug!("{config:?}");
    external::check_dependencies(config.required_programs())?;

    let fetcher = HttpFetcher::new(&config)?;
    let archiver = ZipCommand::new(&config.archive_program, &config.cache_dir);
    let viewer = ExternalViewer::new(&config.viewer_program);

    app::run(
        &config,
        &fetcher,
        &HtmlExtractor,
        &archiver,
        &viewer,
        &TerminalPrompt::default(),
    )
    .await?;

    Ok(())
}
