use serde_json::{Value, json};

pub fn movie(id: u64, title: &str, backdrop: Option<&str>) -> Value {
    json!({
        "adult": false,
        "backdrop_path": backdrop,
        "genre_ids": [18],
        "id": id,
        "original_title": title,
        "overview": format!("{} overview", title),
        "poster_path": format!("/poster-{}.jpg", id),
        "release_date": "1999-10-15",
        "title": title,
        "vote_average": 8.4
    })
}

pub fn show(id: u64, name: &str, backdrop: Option<&str>) -> Value {
    json!({
        "backdrop_path": backdrop,
        "first_air_date": "2011-04-17",
        "id": id,
        "name": name,
        "origin_country": ["US"],
        "overview": format!("{} overview", name),
        "poster_path": format!("/poster-{}.jpg", id),
    })
}

pub fn paged(results: Vec<Value>) -> Value {
    let total = results.len();
    json!({
        "page": 1,
        "results": results,
        "total_pages": 1,
        "total_results": total
    })
}

/// Movies with backdrops, ids `first..first + count`.
pub fn movies(first: u64, count: u64) -> Vec<Value> {
    (first..first + count)
        .map(|id| {
            let backdrop = format!("/backdrop-{}.jpg", id);
            movie(id, &format!("Movie {}", id), Some(backdrop.as_str()))
        })
        .collect()
}
