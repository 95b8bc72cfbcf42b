use std::sync::Arc;

use marquee::backends::{CatalogClient, TmdbBackend};
use marquee::core::{Location, SearchAggregator, SearchPage, SearchStatus};
use marquee::models::{ItemId, MediaKind};
use marquee::ui::TextRenderer;
use mockito::{Matcher, Server};

use crate::common::builders::{movie, paged};
use crate::common::mocks::{TEST_API_KEY, mock_search};
use crate::common::test_config;

#[tokio::test]
async fn test_batman_search_end_to_end() {
    let mut server = Server::new_async().await;
    let movies = mock_search(
        &mut server,
        "movie",
        "batman",
        &paged(vec![
            movie(268, "Batman", Some("/batman.jpg")),
            movie(2661, "Batman: The Movie", None),
            movie(272, "Batman Begins", Some("/begins.jpg")),
        ]),
    )
    .await;
    let shows = mock_search(&mut server, "tv", "batman", &paged(Vec::new())).await;

    let config = test_config(&server.url());
    let client: Arc<dyn CatalogClient> = Arc::new(TmdbBackend::from_config(&config).unwrap());

    let location = Location::parse("/search?keyword=batman").unwrap();
    let keyword = SearchPage::keyword_of(&location);
    let results = SearchAggregator::new(client).run(keyword.as_deref()).await;
    let page = SearchPage::new(location, results, 6);

    assert_eq!(page.status(), SearchStatus::Results);
    assert_eq!(page.carousels().len(), 1);
    let carousel = &page.carousels()[0];
    assert_eq!(carousel.kind(), MediaKind::Movie);
    assert_eq!(carousel.item_count(), 2);

    let opened = carousel.select(page.location(), ItemId::new(272)).unwrap();
    assert_eq!(opened.to_string(), "/search?keyword=batman&movie=272");

    let detail = SearchPage::new(opened, page.results().clone(), 6);
    let text = TextRenderer::new(config.catalog.image_base_url.as_str()).render_search(&detail);
    assert!(text.contains("## Movies matching \"batman\" [1/1]"));
    assert!(text.contains("-- [Movies matching \"batman\"-272] --"));
    assert!(!text.contains("TV Shows matching"));

    movies.assert_async().await;
    shows.assert_async().await;
}

#[tokio::test]
async fn test_keyword_is_percent_encoded() {
    let mut server = Server::new_async().await;
    let movies = mock_search(
        &mut server,
        "movie",
        "the dark knight",
        &paged(vec![movie(155, "The Dark Knight", Some("/tdk.jpg"))]),
    )
    .await;
    let shows = mock_search(&mut server, "tv", "the dark knight", &paged(Vec::new())).await;

    let config = test_config(&server.url());
    let client: Arc<dyn CatalogClient> = Arc::new(TmdbBackend::from_config(&config).unwrap());

    let location = Location::parse("/search?keyword=the%20dark%20knight").unwrap();
    let keyword = SearchPage::keyword_of(&location);
    let results = SearchAggregator::new(client).run(keyword.as_deref()).await;

    assert_eq!(results.filtered_count(MediaKind::Movie), 1);
    movies.assert_async().await;
    shows.assert_async().await;
}

#[tokio::test]
async fn test_empty_keyword_never_hits_the_network() {
    let mut server = Server::new_async().await;
    let any = server
        .mock("GET", Matcher::Any)
        .match_query(Matcher::UrlEncoded("api_key".into(), TEST_API_KEY.into()))
        .expect(0)
        .create_async()
        .await;

    let config = test_config(&server.url());
    let client: Arc<dyn CatalogClient> = Arc::new(TmdbBackend::from_config(&config).unwrap());

    let location = Location::parse("/search?keyword=%20%20").unwrap();
    let keyword = SearchPage::keyword_of(&location);
    let results = SearchAggregator::new(client).run(keyword.as_deref()).await;
    let page = SearchPage::new(location, results, 6);

    assert_eq!(page.status(), SearchStatus::Idle);
    assert_eq!(
        TextRenderer::new(config.catalog.image_base_url.as_str()).render_search(&page),
        ""
    );
    any.assert_async().await;
}
