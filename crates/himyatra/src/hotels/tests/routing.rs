use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::hotels::domain::{PriceUpdate, DELUXE_LABEL};
use crate::hotels::HotelPricingService;

fn put_prices(body: serde_json::Value) -> Request<Body> {
    Request::put("/api/hotels/update-prices")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("json body")))
        .expect("request builds")
}

#[tokio::test]
async fn list_route_wraps_hotels() {
    let (service, _) = build_service(sample_hotels());
    let response = router_with_service(service)
        .oneshot(
            Request::get("/api/hotels")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    let hotels = body["hotels"].as_array().expect("hotels array");
    assert_eq!(hotels.len(), 2);
    assert_eq!(hotels[1]["id"], "hy-002");
}

#[tokio::test]
async fn list_handler_reports_store_errors() {
    let service = Arc::new(HotelPricingService::new(Arc::new(UnreadableHotels)));
    let response = crate::hotels::router::list_handler::<UnreadableHotels>(State(service)).await;

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Invalid hotel data format: expected an array of hotels"
    );
}

#[tokio::test]
async fn update_route_returns_receipt() {
    let (service, repository) = build_service(sample_hotels());
    let response = router_with_service(service)
        .oneshot(put_prices(json!({ "deluxePrice": 2625, "premiumSuitePrice": 8750 })))
        .await
        .expect("router responds");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Prices updated successfully");
    assert_eq!(body["updatedPrices"]["deluxe"], 2625);
    assert_eq!(body["updatedPrices"]["premiumSuite"], 8750);
    assert_eq!(price_of(&repository.snapshot(), 1, DELUXE_LABEL), Some(2625));
}

#[tokio::test]
async fn list_route_passes_loose_room_types_through() {
    let hotels = serde_json::from_value(json!([
        { "id": 3, "roomTypes": [{ "name": "Deluxe", "price": "2400" }, { "label": "Dorm" }] },
        { "id": 9, "roomTypes": "tbd" }
    ]))
    .expect("loose hotels parse");
    let (service, _) = build_service(hotels);
    let response = router_with_service(service)
        .oneshot(
            Request::get("/api/hotels")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hotels"][0]["roomTypes"][0]["price"], "2400");
    assert_eq!(body["hotels"][0]["roomTypes"][1], json!({ "label": "Dorm" }));
    assert_eq!(body["hotels"][1]["roomTypes"], "tbd");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_updates_all_land() {
    let (service, repository) = build_service(sample_hotels());
    let router = router_with_service(service);

    let requests = (1..=8).map(|step| {
        let router = router.clone();
        tokio::spawn(async move {
            router
                .oneshot(put_prices(
                    json!({ "deluxePrice": 2000 + step, "premiumSuitePrice": 5000 + step }),
                ))
                .await
                .expect("router responds")
                .status()
        })
    });

    for request in requests.collect::<Vec<_>>() {
        assert_eq!(request.await.expect("task joins"), StatusCode::OK);
    }
    assert_eq!(repository.write_count(), 8);
}

#[tokio::test]
async fn update_route_rejects_missing_prices() {
    let (service, repository) = build_service(sample_hotels());
    let response = router_with_service(service)
        .oneshot(put_prices(json!({ "deluxePrice": 2625 })))
        .await
        .expect("router responds");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required price values");
    assert_eq!(repository.write_count(), 0);
}

#[tokio::test]
async fn update_handler_reports_invalid_room_types() {
    let mut hotels = sample_hotels();
    hotels[0].room_types = None;
    let (service, _) = build_service(hotels);

    let response = crate::hotels::router::update_prices_handler::<MemoryHotels>(
        State(service),
        axum::Json(PriceUpdate::new(2500, 9000)),
    )
    .await;

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error updating prices");
    assert_eq!(body["details"], "Invalid room types format for hotel 1");
}
