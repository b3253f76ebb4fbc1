//! Provider clients against a local stub server.

mod fixtures;

use route_legs::azure::AzureRouteClient;
use route_legs::config::RoutingConfig;
use route_legs::error::RouteError;
use route_legs::google::GoogleDirectionsClient;
use route_legs::route::{RouteLeg, RouteRequest};
use route_legs::traits::{ProviderKind, RouteProvider};

use fixtures::stub_server::StubServer;
use fixtures::{GREEN_VALLEY_POOLS, TECH_HOMES};

const GOOGLE_OPTIMIZED: &str = r#"{
    "status": "OK",
    "routes": [{
        "legs": [
            { "distance": { "text": "1.4 mi", "value": 2253 }, "duration": { "text": "5 mins", "value": 301 } },
            { "distance": { "text": "0.6 mi", "value": 966 }, "duration": { "text": "2 mins", "value": 150 } },
            { "distance": { "text": "1.1 mi", "value": 1770 }, "duration": { "text": "4 mins", "value": 233 } }
        ],
        "waypoint_order": [1, 0],
        "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC" }
    }]
}"#;

const AZURE_ERROR: &str = r#"{
    "error": { "code": "400 BadRequest", "message": "The provided coordinates in query are invalid." }
}"#;

const AZURE_OK: &str = r#"{
    "routes": [{
        "legs": [
            { "summary": { "lengthInMeters": 3218.7, "travelTimeInSeconds": 420 }, "points": [] },
            { "summary": { "lengthInMeters": 1609.3, "travelTimeInSeconds": 180 }, "points": [] }
        ]
    }],
    "optimizedWaypoints": [{ "providedIndex": 0, "optimizedIndex": 0 }]
}"#;

fn request(optimize: bool, waypoints: usize) -> RouteRequest {
    RouteRequest {
        origin: TECH_HOMES[0].coords(),
        destination: TECH_HOMES[0].coords(),
        waypoints: GREEN_VALLEY_POOLS[..waypoints].iter().map(|p| p.coords()).collect(),
        optimize_waypoints: optimize,
    }
}

fn google_config(base_url: &str) -> RoutingConfig {
    RoutingConfig {
        google_api_key: Some("test-key".to_string()),
        google_directions_url: base_url.to_string(),
        timeout_secs: 5,
        ..RoutingConfig::default()
    }
}

fn azure_config(base_url: &str) -> RoutingConfig {
    RoutingConfig {
        azure_api_key: Some("azure-key".to_string()),
        azure_route_url: base_url.to_string(),
        timeout_secs: 5,
        ..RoutingConfig::default()
    }
}

#[test]
fn google_directions_round_trip() {
    let server = StubServer::respond_once(200, GOOGLE_OPTIMIZED);
    let client =
        GoogleDirectionsClient::new(&google_config(&server.base_url)).expect("build client");

    let result = client.route(&request(true, 2)).expect("route");
    let request_line = server.request_line();

    assert!(request_line.starts_with("GET /route?"), "{}", request_line);
    assert!(request_line.contains("key=test-key"));
    assert!(request_line.contains("optimize%3Atrue"));
    assert_eq!(result.provider, ProviderKind::Google);
    assert_eq!(result.legs.len(), 3);
    assert_eq!(result.legs[1], RouteLeg::new(150.0, 966.0));
    assert_eq!(result.waypoint_order, Some(vec![1, 0]));
    assert_eq!(result.geometry.map(|g| g.into_points().len()), Some(2));
}

#[test]
fn google_http_failure_is_http_error() {
    let server = StubServer::respond_once(500, "{}");
    let client =
        GoogleDirectionsClient::new(&google_config(&server.base_url)).expect("build client");

    let err = client.route(&request(false, 1)).unwrap_err();
    server.request_line();

    assert!(matches!(err, RouteError::Http(_)), "got {:?}", err);
}

#[test]
fn google_malformed_body_is_json_error() {
    let server = StubServer::respond_once(200, "not json");
    let client =
        GoogleDirectionsClient::new(&google_config(&server.base_url)).expect("build client");

    let err = client.route(&request(false, 1)).unwrap_err();
    server.request_line();

    assert!(matches!(err, RouteError::Json(_)), "got {:?}", err);
}

#[test]
fn azure_error_body_becomes_provider_error() {
    let server = StubServer::respond_once(400, AZURE_ERROR);
    let client = AzureRouteClient::new(&azure_config(&server.base_url)).expect("build client");

    let err = client.route(&request(true, 1)).unwrap_err();
    let request_line = server.request_line();

    assert!(request_line.contains("subscription-key=azure-key"));
    assert!(request_line.contains("computeBestOrder=true"));
    match err {
        RouteError::Provider { provider, status, message } => {
            assert_eq!(provider, ProviderKind::Microsoft);
            assert_eq!(status, "400");
            assert!(message.contains("coordinates"));
        }
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[test]
fn azure_directions_round_trip() {
    let server = StubServer::respond_once(200, AZURE_OK);
    let client = AzureRouteClient::new(&azure_config(&server.base_url)).expect("build client");

    let result = client.route(&request(true, 1)).expect("route");
    server.request_line();

    assert_eq!(result.provider, ProviderKind::Microsoft);
    assert_eq!(result.legs.len(), 2);
    assert_eq!(result.waypoint_order, Some(vec![0]));
    assert_eq!(result.total_duration_minutes(), 10);
    assert_eq!(result.total_distance_miles(), 3.0);
    assert!(result.geometry.is_none());
}
