/// Canned TMDB payloads and configuration for integration tests
use cinefinder_lib::shared::CatalogConfig;

pub const TEST_API_KEY: &str = "test-api-key";
pub const INCEPTION_ID: u64 = 27205;

pub fn config_for(base_url: &str) -> CatalogConfig {
    CatalogConfig::new(TEST_API_KEY).with_base_url(base_url)
}

pub fn inception_search_body() -> String {
    r#"{
        "page": 1,
        "results": [
            {
                "adult": false,
                "id": 27205,
                "title": "Inception",
                "original_title": "Inception",
                "release_date": "2010-07-15",
                "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
                "vote_average": 8.369,
                "genre_ids": [28, 878, 12]
            }
        ],
        "total_pages": 1,
        "total_results": 1
    }"#
    .to_string()
}

pub fn search_body_with_pages(total_pages: u32, total_results: u64) -> String {
    format!(
        r#"{{"page":1,"results":[{{"id":11,"title":"Star Wars","release_date":"1977-05-25","poster_path":null,"vote_average":8.2}}],"total_pages":{},"total_results":{}}}"#,
        total_pages, total_results
    )
}

pub fn search_body_on_page(page: u32, total_pages: u32) -> String {
    format!(
        r#"{{"page":{},"results":[{{"id":438631,"title":"Dune","release_date":"2021-09-15","poster_path":"/d5NXSklXo0qyIYkgV94XAgMIckC.jpg","vote_average":7.8}}],"total_pages":{},"total_results":{}}}"#,
        page,
        total_pages,
        total_pages * 20
    )
}

/// What TMDB answers for a page past the end: the echoed page with no results
pub fn empty_search_page_body(page: u32, total_pages: u32) -> String {
    format!(
        r#"{{"page":{},"results":[],"total_pages":{},"total_results":{}}}"#,
        page,
        total_pages,
        total_pages * 20
    )
}

pub fn missing_results_body() -> String {
    r#"{"page": 1, "total_pages": 1, "total_results": 1}"#.to_string()
}

pub fn inception_details_body() -> String {
    r#"{
        "id": 27205,
        "title": "Inception",
        "original_language": "en",
        "overview": "Cobb, a skilled thief who commits corporate espionage by infiltrating the subconscious of his targets.",
        "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
        "release_date": "2010-07-15",
        "runtime": 148,
        "vote_average": 8.369,
        "genres": [
            {"id": 28, "name": "Action"},
            {"id": 878, "name": "Science Fiction"}
        ],
        "credits": {
            "cast": [
                {"name": "Leonardo DiCaprio", "character": "Cobb", "order": 0},
                {"name": "Joseph Gordon-Levitt", "character": "Arthur", "order": 1},
                {"name": "Ken Watanabe", "character": "Saito", "order": 2}
            ],
            "crew": [
                {"name": "Hans Zimmer", "job": "Original Music Composer", "department": "Sound"},
                {"name": "Christopher Nolan", "job": "Director", "department": "Directing"},
                {"name": "Christopher Nolan", "job": "Writer", "department": "Writing"}
            ]
        }
    }"#
    .to_string()
}
