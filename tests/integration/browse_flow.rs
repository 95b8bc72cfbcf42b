use std::sync::Arc;

use marquee::backends::{CatalogClient, TmdbBackend};
use marquee::core::{
    BrowseLoader, BrowsePage, Direction, Location, OverlayController, Row, derive_selection,
};
use marquee::models::{ItemId, MediaKind};
use marquee::ui::TextRenderer;
use mockito::Server;

use crate::common::builders::{movie, movies, paged, show};
use crate::common::mocks::{mock_endpoint, mock_failure};
use crate::common::test_config;

#[tokio::test]
async fn test_movie_landing_page_end_to_end() {
    let mut server = Server::new_async().await;
    let now_playing = mock_endpoint(&mut server, "movie/now_playing", &paged(movies(1, 8))).await;
    let popular = mock_endpoint(
        &mut server,
        "movie/popular",
        &paged(vec![
            movie(549, "Imageless", None),
            movie(550, "Fight Club", Some("/fight-club.jpg")),
        ]),
    )
    .await;
    let top_rated = mock_endpoint(&mut server, "movie/top_rated", &paged(movies(100, 3))).await;
    let upcoming = mock_endpoint(
        &mut server,
        "movie/upcoming",
        &paged(vec![
            movie(2, "Also Now Playing", Some("/2.jpg")),
            movie(550, "Fight Club", Some("/fight-club.jpg")),
        ]),
    )
    .await;

    let config = test_config(&server.url());
    let client: Arc<dyn CatalogClient> = Arc::new(TmdbBackend::from_config(&config).unwrap());
    let loader = BrowseLoader::new(client);

    let results = loader.load(MediaKind::Movie).await;
    let mut page = BrowsePage::new(Location::landing(MediaKind::Movie), results, 6);

    assert!(!page.is_loading());
    assert_eq!(page.banner().unwrap().display_name, "Fight Club");
    assert!(page.overlay().is_none());

    let rows = page.rows();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|row| matches!(row, Row::Carousel(_))));

    let upcoming_ids: Vec<ItemId> = page.carousels()[3]
        .cards()
        .iter()
        .map(|card| card.item.id)
        .collect();
    assert_eq!(upcoming_ids, vec![ItemId::new(550)]);

    // Page to the trailing partial page of Now Playing and open its card.
    let landing = page.location().clone();
    let now_playing_row = &mut page.carousels_mut()[0];
    now_playing_row.navigate(Direction::Forward);
    now_playing_row.navigate(Direction::Forward);
    assert!(now_playing_row.transition_complete());
    assert_eq!(now_playing_row.page_indicator(), (2, 2));
    assert_eq!(now_playing_row.cards().len(), 2);

    let opened = now_playing_row
        .select(&landing, ItemId::new(7))
        .unwrap();
    assert_eq!(opened.to_string(), "/movies/7");

    // Reopening the page for the new location is served from the query cache.
    let results = loader.load(MediaKind::Movie).await;
    let detail = BrowsePage::new(opened, results, 6);
    let overlay = detail.overlay().unwrap();
    assert_eq!(overlay.visual_key().as_str(), "Now Playing-7");
    assert_eq!(overlay.item.display_name, "Movie 7");

    let closed = OverlayController::close(detail.location());
    assert_eq!(closed, Location::landing(MediaKind::Movie));
    assert!(!derive_selection(&closed).is_open());

    for mock in [now_playing, popular, top_rated, upcoming] {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_failed_show_category_keeps_siblings() {
    let mut server = Server::new_async().await;
    let airing = mock_endpoint(
        &mut server,
        "tv/airing_today",
        &paged(vec![show(1399, "Game of Thrones", Some("/got.jpg"))]),
    )
    .await;
    let on_the_air = mock_failure(&mut server, "tv/on_the_air", 500).await;
    let popular = mock_endpoint(
        &mut server,
        "tv/popular",
        &paged(vec![show(1399, "Game of Thrones", Some("/got.jpg"))]),
    )
    .await;
    let top_rated = mock_endpoint(&mut server, "tv/top_rated", &paged(Vec::new())).await;

    let config = test_config(&server.url());
    let client: Arc<dyn CatalogClient> = Arc::new(TmdbBackend::from_config(&config).unwrap());
    let results = BrowseLoader::new(client).load(MediaKind::Show).await;
    let page = BrowsePage::new(Location::parse("/tv/1399").unwrap(), results, 6);

    assert!(!page.is_loading());
    let rows = page.rows();
    assert!(matches!(&rows[1], Row::Placeholder(label) if label == "On The Air"));
    assert!(matches!(rows[2], Row::Carousel(c) if c.title() == "Popular"));

    let overlay = page.overlay().unwrap();
    assert_eq!(overlay.category_label(), "Airing Today");

    let text = TextRenderer::new(config.catalog.image_base_url.as_str()).render_browse(&page);
    assert!(text.starts_with("# Game of Thrones\n"));
    assert!(text.contains("## On The Air\n  Loading..."));
    assert!(text.contains("-- [Airing Today-1399] --"));
    assert!(text.contains("Game of Thrones (2011-04-17)"));

    for mock in [airing, on_the_air, popular, top_rated] {
        mock.assert_async().await;
    }
}
