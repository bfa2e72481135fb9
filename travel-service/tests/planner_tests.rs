mod common;

use common::TestApp;
use reqwest::multipart::Form;
use reqwest::multipart::Part;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_itinerary_crud() {
    let app = TestApp::spawn().await;
    let token = app.signup("alice@example.com", "secret123").await;
    let trip_id = app.create_trip(&token, "Oslo").await;

    let response = app
        .post_authenticated(&format!("/api/v1/trips/{}/itineraries", trip_id), &token)
        .json(&json!({ "slug": "day-1", "title": "Arrival", "date": "2025-06-01" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: serde_json::Value = response.json().await.unwrap();
    let itinerary_id = created["id"].as_str().unwrap();
    assert_eq!(created["trip_id"], trip_id.as_str());
    assert_eq!(created["date"], "2025-06-01");

    let updated: serde_json::Value = app
        .put_authenticated(&format!("/api/v1/itineraries/{}", itinerary_id), &token)
        .json(&json!({ "title": "Fjord cruise" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(updated["title"], "Fjord cruise");
    assert_eq!(updated["slug"], "day-1");

    let listed: serde_json::Value = app
        .get_authenticated(&format!("/api/v1/trips/{}/itineraries", trip_id), &token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let deleted = app
        .delete_authenticated(&format!("/api/v1/itineraries/{}", itinerary_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(deleted.status(), StatusCode::OK);

    let gone = app
        .get_authenticated(&format!("/api/v1/itineraries/{}", itinerary_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_itinerary_on_foreign_trip_is_not_found() {
    let app = TestApp::spawn().await;
    let alice = app.signup("alice@example.com", "secret123").await;
    let mallory = app.signup("mallory@example.com", "secret123").await;
    let trip_id = app.create_trip(&alice, "Oslo").await;

    let response = app
        .post_authenticated(&format!("/api/v1/trips/{}/itineraries", trip_id), &mallory)
        .json(&json!({ "slug": "day-1", "date": "2025-06-01" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_activity_lifecycle() {
    let app = TestApp::spawn().await;
    let token = app.signup("alice@example.com", "secret123").await;
    let trip_id = app.create_trip(&token, "Oslo").await;
    let itinerary_id = app.create_itinerary(&token, &trip_id).await;

    let response = app
        .post_authenticated(
            &format!("/api/v1/itineraries/{}/activities", itinerary_id),
            &token,
        )
        .json(&json!({
            "name": "Opera house",
            "type": "sightseeing",
            "start_time": "2025-06-01T18:00:00Z",
            "end_time": "2025-06-01T21:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: serde_json::Value = response.json().await.unwrap();
    let activity_id = created["id"].as_str().unwrap();
    assert_eq!(created["trip_id"], trip_id.as_str());
    assert_eq!(created["itinerary_id"], itinerary_id.as_str());
    assert_eq!(created["type"], "sightseeing");
    assert_eq!(created["status"], "planned");

    let updated = app
        .put_authenticated(&format!("/api/v1/activities/{}", activity_id), &token)
        .json(&json!({ "status": "confirmed" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(updated.status(), StatusCode::OK);
    let updated: serde_json::Value = updated.json().await.unwrap();
    assert_eq!(updated["status"], "confirmed");
    assert_eq!(updated["name"], "Opera house");

    let deleted = app
        .delete_authenticated(&format!("/api/v1/activities/{}", activity_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(deleted.status(), StatusCode::OK);

    let gone = app
        .get_authenticated(&format!("/api/v1/activities/{}", activity_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_activities_listed_by_start_time() {
    let app = TestApp::spawn().await;
    let token = app.signup("alice@example.com", "secret123").await;
    let trip_id = app.create_trip(&token, "Oslo").await;
    let itinerary_id = app.create_itinerary(&token, &trip_id).await;
    let path = format!("/api/v1/itineraries/{}/activities", itinerary_id);

    for (name, start) in [("Dinner", "2025-06-01T19:00:00Z"), ("Breakfast", "2025-06-01T08:00:00Z")] {
        app.post_authenticated(&path, &token)
            .json(&json!({ "name": name, "start_time": start }))
            .send()
            .await
            .expect("Failed to execute request");
    }

    let listed: serde_json::Value = app
        .get_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Breakfast", "Dinner"]);
}

#[tokio::test]
async fn test_activity_validation() {
    let app = TestApp::spawn().await;
    let token = app.signup("alice@example.com", "secret123").await;
    let trip_id = app.create_trip(&token, "Oslo").await;
    let itinerary_id = app.create_itinerary(&token, &trip_id).await;
    let path = format!("/api/v1/itineraries/{}/activities", itinerary_id);

    let inverted = app
        .post_authenticated(&path, &token)
        .json(&json!({
            "name": "Backwards",
            "start_time": "2025-06-01T12:00:00Z",
            "end_time": "2025-06-01T10:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(inverted.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let unknown_status = app
        .post_authenticated(&path, &token)
        .json(&json!({ "name": "Museum", "status": "maybe" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(unknown_status.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_upload_and_list_media() {
    let app = TestApp::spawn().await;
    let token = app.signup("alice@example.com", "secret123").await;
    let trip_id = app.create_trip(&token, "Oslo").await;
    let itinerary_id = app.create_itinerary(&token, &trip_id).await;
    let activity_id = app.create_activity(&token, &itinerary_id).await;

    let form = Form::new().text("activity_id", activity_id.clone()).part(
        "file",
        Part::bytes(b"fake-jpeg-bytes".to_vec())
            .file_name("park-photo.jpg")
            .mime_str("image/jpeg")
            .unwrap(),
    );

    let response = app
        .post_authenticated("/api/v1/media/upload", &token)
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let media: serde_json::Value = response.json().await.unwrap();
    let url = media["url"].as_str().unwrap();
    assert_eq!(media["type"], "image");
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with("_park-photo.jpg"));

    let served = app
        .get(url)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(served.status(), StatusCode::OK);
    assert_eq!(served.bytes().await.unwrap().as_ref(), b"fake-jpeg-bytes");

    let listed: serde_json::Value = app
        .get_authenticated(&format!("/api/v1/activities/{}/media", activity_id), &token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], media["id"]);
}

#[tokio::test]
async fn test_upload_requires_file_and_activity() {
    let app = TestApp::spawn().await;
    let token = app.signup("alice@example.com", "secret123").await;

    let no_file = app
        .post_authenticated("/api/v1/media/upload", &token)
        .multipart(Form::new().text("activity_id", uuid::Uuid::new_v4().to_string()))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(no_file.status(), StatusCode::BAD_REQUEST);

    let unknown_activity = app
        .post_authenticated("/api/v1/media/upload", &token)
        .multipart(
            Form::new()
                .text("activity_id", uuid::Uuid::new_v4().to_string())
                .part("file", Part::bytes(b"data".to_vec()).file_name("notes.txt")),
        )
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(unknown_activity.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_and_save_place() {
    let app = TestApp::spawn().await;
    let token = app.signup("alice@example.com", "secret123").await;

    let response = app
        .get_authenticated("/api/v1/locations/search?query=Oslo", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let places: serde_json::Value = response.json().await.unwrap();
    let place = &places[0];
    assert_eq!(place["name"], "Oslo");
    assert!(place["geometry"]["location"]["lat"].is_number());

    let first: serde_json::Value = app
        .post_authenticated("/api/v1/locations", &token)
        .json(place)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    let second: serde_json::Value = app
        .post_authenticated("/api/v1/locations", &token)
        .json(place)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    assert_eq!(first["google_place_id"], place["place_id"]);
    assert_eq!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_search_rejects_blank_query() {
    let app = TestApp::spawn().await;
    let token = app.signup("alice@example.com", "secret123").await;

    let response = app
        .get_authenticated("/api/v1/locations/search?query=%20", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
