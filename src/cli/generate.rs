use std::path::PathBuf;

use crate::{
    collage::{self, CaptionOptions},
    config, error,
    error::CollageError,
    info,
    lastfm::LastFmClient,
    success,
    types::Period,
    utils,
};

/// Everything a single collage run needs.
#[derive(Debug, Clone)]
pub struct CollageRequest {
    pub token: String,
    pub user: String,
    pub width: u32,
    pub height: u32,
    pub period: Period,
    pub exclude_empty_art: bool,
    pub caption: CaptionOptions,
    pub font: Option<PathBuf>,
    pub output: PathBuf,
}

/// Runs the whole pipeline and reports the outcome on the console.
///
/// Exits the process with status 1 on failure.
pub async fn generate(request: CollageRequest) {
    match run(&request, None).await {
        Ok(path) => success!("Saved the collage to {}", path.display()),
        Err(e) if e.is_remote() => error!(
            "Last.fm rejected the request, check the API key and user {}. Err: {}",
            request.user,
            e
        ),
        Err(e) => error!("Cannot generate collage. Err: {}", e),
    }
}

/// Runs the whole pipeline and returns the path of the written collage.
///
/// `client` overrides the Last.fm client built from `request.token`.
pub async fn run(
    request: &CollageRequest,
    client: Option<LastFmClient>,
) -> Result<PathBuf, CollageError> {
    let font = config::load_font(request.font.clone()).await?;
    let client = client.unwrap_or_else(|| LastFmClient::new(request.token.clone()));
    info!("Initialized the collage generator");

    let limit = utils::fetch_limit(request.width, request.height, request.exclude_empty_art);
    let pb = utils::spinner(&format!("Fetching top albums of {}...", request.user));
    let albums = client
        .top_albums(&request.user, request.period, limit)
        .await;
    pb.finish_and_clear();
    let albums = albums?;
    info!("Got {} albums", albums.len());

    let grid = collage::build_grid(
        request.width as usize,
        request.height as usize,
        albums,
        request.exclude_empty_art,
    )?;
    info!("Built the collage data");

    let image = collage::compose_collage(client.http(), &grid, Some(&font), request.caption).await?;
    info!("Generated the final image");

    collage::save_png(&image, &request.output).await?;
    Ok(request.output.clone())
}
