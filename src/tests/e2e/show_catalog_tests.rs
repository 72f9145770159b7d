// Drives the full router against the in-memory store, one catalog per test.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::shared::infrastructure::in_memory::InMemoryDatabase;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::ids::SequenceIdGenerator;

struct Catalog {
    database: Arc<InMemoryDatabase>,
    app: Router,
}

impl Catalog {
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn create_show(&self, title: &str, slug: &str) -> String {
        let (status, json) = self
            .post("/show", json!({"title": title, "slug": slug}))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json["id"].as_str().unwrap().to_string()
    }
}

#[fixture]
fn catalog() -> Catalog {
    let database = Arc::new(InMemoryDatabase::new());
    let state = AppState::in_memory(database.clone(), Arc::new(SequenceIdGenerator::new()));
    Catalog {
        database,
        app: router(state),
    }
}

#[rstest]
#[tokio::test]
async fn it_should_read_back_a_created_show_with_empty_collections(catalog: Catalog) {
    let show_id = catalog.create_show("Gopher Talk", "gopher-talk").await;

    let (status, json) = catalog.get(&format!("/show/{show_id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "id": show_id,
            "title": "Gopher Talk",
            "slug": "gopher-talk",
            "episodes": [],
            "distributions": []
        })
    );
}

#[rstest]
#[case(json!({"title": "Gopher Talk", "slug": "another-slug"}))]
#[case(json!({"title": "Another title", "slug": "gopher-talk"}))]
#[tokio::test]
async fn it_should_reject_a_show_clashing_on_one_field(catalog: Catalog, #[case] body: Value) {
    catalog.create_show("Gopher Talk", "gopher-talk").await;
    let saves_before = catalog.database.save_calls();

    let (status, json) = catalog.post("/show", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().ends_with("or given slug already exists"));
    assert_eq!(catalog.database.save_calls(), saves_before);
}

#[rstest]
#[tokio::test]
async fn it_should_list_each_child_once_despite_the_join_cross_product(catalog: Catalog) {
    let show_id = catalog.create_show("Gopher Talk", "gopher-talk").await;
    for title in ["Pilot", "Second"] {
        let (status, _) = catalog
            .post(&format!("/show/{show_id}/episode"), json!({"title": title}))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    for slug in ["rss", "spotify", "apple"] {
        let (status, _) = catalog
            .post(
                &format!("/show/{show_id}/distribution"),
                json!({"title": format!("{slug} feed"), "slug": slug}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = catalog.get(&format!("/show/{show_id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["episodes"], json!(["id-0002", "id-0003"]));
    assert_eq!(json["distributions"], json!(["id-0004", "id-0005", "id-0006"]));
}

#[rstest]
#[tokio::test]
async fn it_should_round_trip_an_episode(catalog: Catalog) {
    let show_id = catalog.create_show("Gopher Talk", "gopher-talk").await;

    let (status, created) = catalog
        .post(&format!("/show/{show_id}/episode"), json!({"title": "T"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let episode_id = created["id"].as_str().unwrap();

    let (status, loaded) = catalog
        .get(&format!("/show/{show_id}/episode/{episode_id}"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(loaded, json!({"id": episode_id, "showId": show_id, "title": "T"}));
    assert_eq!(loaded, created);
}

#[rstest]
#[case("episode", json!({"title": "Pilot"}))]
#[case("distribution", json!({"title": "Main feed", "slug": "main-feed"}))]
#[tokio::test]
async fn it_should_not_write_children_of_a_missing_show(
    catalog: Catalog,
    #[case] child: &str,
    #[case] body: Value,
) {
    let (status, json) = catalog.post(&format!("/show/missing/{child}"), body).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "show with id 'missing' does not exist");
    assert_eq!(catalog.database.save_calls(), 0);
}

#[rstest]
#[case("episode", json!({"title": "Pilot"}), json!({"title": "Pilot"}))]
#[case(
    "distribution",
    json!({"title": "Main feed", "slug": "main-feed"}),
    json!({"title": "Other feed", "slug": "main-feed"})
)]
#[tokio::test]
async fn it_should_reject_duplicate_children_before_the_show_lookup(
    catalog: Catalog,
    #[case] child: &str,
    #[case] first: Value,
    #[case] duplicate: Value,
) {
    let show_id = catalog.create_show("Gopher Talk", "gopher-talk").await;
    let (status, _) = catalog
        .post(&format!("/show/{show_id}/{child}"), first)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let saves_before = catalog.database.save_calls();
    let lookups_before = catalog.database.show_lookups();

    let (status, _) = catalog
        .post(&format!("/show/missing/{child}"), duplicate)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(catalog.database.save_calls(), saves_before);
    assert_eq!(catalog.database.show_lookups(), lookups_before);
}

#[rstest]
#[tokio::test]
async fn it_should_keep_the_show_unchanged_when_a_child_write_fails(catalog: Catalog) {
    let show_id = catalog.create_show("Gopher Talk", "gopher-talk").await;
    catalog.database.toggle_junction_failure();

    let (status, json) = catalog
        .post(&format!("/show/{show_id}/episode"), json!({"title": "Pilot"}))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal Server Error");

    catalog.database.toggle_junction_failure();
    let (_, show) = catalog.get(&format!("/show/{show_id}")).await;
    assert_eq!(show["episodes"], json!([]));

    let (status, _) = catalog
        .post(&format!("/show/{show_id}/episode"), json!({"title": "Pilot"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[rstest]
#[tokio::test]
async fn it_should_return_not_found_for_an_unknown_show(catalog: Catalog) {
    let (status, json) = catalog.get("/show/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"error": "show with id 'missing' does not exist"}));
}
