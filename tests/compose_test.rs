mod common;

use common::{offline_albums, test_album};
use fmsquared::{
    CollageError,
    collage::{
        COVER_SIZE, CaptionOptions, build_grid, compose::render_cell, compose_collage,
        resolve_cover, save_png,
    },
    config,
};
use image::Rgb;
use reqwest::Client;

#[tokio::test]
async fn test_empty_largest_url_gives_black_cover_without_request() {
    let mock = common::start_mock(0).await;
    let album = test_album(0, &[&mock.cover_url("0-small.png"), ""]);

    let cover = resolve_cover(&Client::new(), &album).await.unwrap();

    assert_eq!(cover.dimensions(), (COVER_SIZE, COVER_SIZE));
    assert!(cover.pixels().all(|p| *p == Rgb([0, 0, 0])));
    assert_eq!(mock.cover_hits(), 0);
}

#[tokio::test]
async fn test_unsupported_extension_gives_black_cover_without_request() {
    let mock = common::start_mock(0).await;
    let album = test_album(0, &[&mock.cover_url("0.svg")]);

    let cover = resolve_cover(&Client::new(), &album).await.unwrap();

    assert!(cover.pixels().all(|p| *p == Rgb([0, 0, 0])));
    assert_eq!(mock.cover_hits(), 0);
}

#[tokio::test]
async fn test_cover_is_downloaded_and_fitted() {
    let mock = common::start_mock(0).await;
    // mock serves 300x300, even indices white
    let album = test_album(0, &[&mock.cover_url("2.png")]);

    let cover = resolve_cover(&Client::new(), &album).await.unwrap();

    assert_eq!(cover.dimensions(), (COVER_SIZE, COVER_SIZE));
    assert_eq!(*cover.get_pixel(100, 100), Rgb([255, 255, 255]));
    assert_eq!(mock.cover_hits(), 1);
}

#[tokio::test]
async fn test_undecodable_cover_fails() {
    let mock = common::start_mock(0).await;
    let album = test_album(0, &[&mock.cover_url("broken.png")]);

    let err = resolve_cover(&Client::new(), &album).await.unwrap_err();
    assert!(matches!(err, CollageError::Image(_)));
}

#[tokio::test]
async fn test_missing_cover_fails() {
    let mock = common::start_mock(0).await;
    let album = test_album(0, &[&mock.cover_url("gone.png")]);

    let err = resolve_cover(&Client::new(), &album).await.unwrap_err();
    assert!(matches!(err, CollageError::Http(_)));
}

#[tokio::test]
async fn test_single_cell_collage_size() {
    let grid = build_grid(1, 1, offline_albums(1), false).unwrap();

    let collage = compose_collage(&Client::new(), &grid, None, CaptionOptions::default())
        .await
        .unwrap();

    assert_eq!(collage.dimensions(), (200, 200));
}

#[tokio::test]
async fn test_rectangular_collage_size() {
    let grid = build_grid(4, 2, offline_albums(8), false).unwrap();

    let collage = compose_collage(&Client::new(), &grid, None, CaptionOptions::default())
        .await
        .unwrap();

    assert_eq!(collage.dimensions(), (800, 400));
}

#[tokio::test]
async fn test_nine_albums_from_api_make_600_square() {
    let mock = common::start_mock(9).await;
    let client = mock.client();

    let albums = client
        .top_albums("rj", Default::default(), 9)
        .await
        .unwrap();
    let grid = build_grid(3, 3, albums, false).unwrap();
    let collage = compose_collage(client.http(), &grid, None, CaptionOptions::default())
        .await
        .unwrap();

    assert_eq!(collage.dimensions(), (600, 600));
    assert_eq!(mock.cover_hits(), 9);

    // cells keep row-major order: album 0 white, album 1 black, album 3 black
    assert_eq!(*collage.get_pixel(100, 100), Rgb([255, 255, 255]));
    assert_eq!(*collage.get_pixel(300, 100), Rgb([0, 0, 0]));
    assert_eq!(*collage.get_pixel(100, 300), Rgb([0, 0, 0]));
    assert_eq!(*collage.get_pixel(500, 500), Rgb([255, 255, 255]));
}

#[tokio::test]
async fn test_eight_albums_from_api_are_too_few() {
    let mock = common::start_mock(8).await;

    let albums = mock
        .client()
        .top_albums("rj", Default::default(), 9)
        .await
        .unwrap();
    let err = build_grid(3, 3, albums, false).unwrap_err();

    assert!(matches!(err, CollageError::TooFewAlbums { .. }));
    assert_eq!(mock.cover_hits(), 0);
}

#[tokio::test]
async fn test_caption_contrasts_with_cover() {
    let font = config::bundled_font().unwrap();
    let client = Client::new();

    // black cover gets white text
    let album = test_album(0, &[""]);
    let cell = render_cell(&client, &album, Some(&font), CaptionOptions::default())
        .await
        .unwrap();
    assert_eq!(cell.dimensions(), (COVER_SIZE, COVER_SIZE));

    let lit = cell.pixels().filter(|p| p[0] > 128).count();
    assert!(lit > 0, "caption was not drawn");

    // text stays in the top-left corner
    let bottom_lit = cell
        .enumerate_pixels()
        .filter(|(_, y, p)| *y > 100 && p[0] > 0)
        .count();
    assert_eq!(bottom_lit, 0);
}

#[tokio::test]
async fn test_save_png_writes_complete_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("final.png");
    let grid = build_grid(2, 1, offline_albums(2), false).unwrap();
    let collage = compose_collage(&Client::new(), &grid, None, CaptionOptions::default())
        .await
        .unwrap();

    save_png(&collage, &path).await.unwrap();

    let written = image::open(&path).unwrap();
    assert_eq!((written.width(), written.height()), (400, 200));

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name() != "final.png")
        .collect();
    assert!(leftovers.is_empty());
}
