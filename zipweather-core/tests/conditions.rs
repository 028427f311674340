//! Conditions client against a mock wunderground endpoint.

use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zipweather_core::{
    Config, ConditionsClient, LocationQuery, WeatherError, config::API_KEY_ENV, render_summary,
};

fn conditions_body() -> serde_json::Value {
    serde_json::json!({
        "response": {
            "version": "0.1",
            "termsofService": "http://www.wunderground.com/weather/api/d/terms.html",
            "features": {"conditions": 1}
        },
        "current_observation": {
            "display_location": {"full": "Austin, TX", "city": "Austin", "state": "TX"},
            "observation_location": {"full": "South Congress, Austin, Texas"},
            "station_id": "KTXAUSTI90",
            "observation_time": "Last Updated on June 1, 3:00 PM CDT",
            "observation_epoch": "1496347200",
            "weather": "Partly Cloudy",
            "temperature_string": "88.1 F (31.2 C)",
            "temp_f": 88.1,
            "temp_c": 31.2,
            "relative_humidity": "52%",
            "wind_string": "From the South at 6.0 MPH",
            "wind_mph": 6.0,
            "wind_gust_mph": "NA",
            "wind_kph": 9.7,
            "wind_gust_kph": "NA",
            "dewpoint_string": "68 F (20 C)",
            "dewpoint_f": 68,
            "dewpoint_c": 20,
            "heat_index_string": "93 F (34 C)",
            "heat_index_f": 93,
            "heat_index_c": 34,
            "windchill_string": "NA",
            "windchill_f": "NA",
            "windchill_c": "NA",
            "feelslike_f": "93",
            "precip_1hr_in": "0.00"
        }
    })
}

#[tokio::test]
async fn fetches_and_decodes_conditions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/KEY/conditions/q/TX/Austin.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(conditions_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ConditionsClient::with_base_url("KEY", mock_server.uri()).unwrap();
    let record = client.current_conditions("Austin, TX").await.unwrap();
    let obs = &record.current_observation;

    assert_eq!(record.response.version, "0.1");
    assert_eq!(obs.station_id, "KTXAUSTI90");
    assert_eq!(obs.wind_mph.as_str(), "6.0");
    assert_eq!(obs.wind_gust_mph.as_str(), "NA");
    assert_eq!(obs.dewpoint_f.as_str(), "68");
    assert_eq!(obs.windchill_c.as_str(), "NA");
    assert_eq!(obs.feelslike_f.as_str(), "93");
    assert_eq!(obs.observed_at().map(|t| t.timestamp()), Some(1_496_347_200));

    let summary = render_summary(&record);
    assert!(summary.starts_with("Current Weather For Austin, TX\n"));
    assert!(summary.contains("Heat index: 93 F (34 C)\n"));
    assert!(summary.contains("Wind chill: NA\n"));
}

#[tokio::test]
async fn invalid_query_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ConditionsClient::with_base_url("KEY", mock_server.uri()).unwrap();

    for query in ["Austin TX", "Austin, Texas", "Austin1, TX"] {
        match client.current_conditions(query).await {
            Err(WeatherError::Validation(msg)) => assert!(msg.contains(query)),
            other => panic!("expected validation error for {query:?}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn api_key_from_config_is_used() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/FROM_ENV/conditions/q/TX/Austin.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(conditions_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = Config { conditions_url: mock_server.uri(), ..Config::default() };
    config.apply_env_overrides(|name| (name == API_KEY_ENV).then(|| "FROM_ENV".to_string()));

    let client = ConditionsClient::from_config(&config).unwrap();
    let location = LocationQuery::parse("Austin,TX").unwrap();
    let record = client.conditions_for(&location).await.unwrap();

    assert_eq!(record.current_observation.weather, "Partly Cloudy");
}

#[tokio::test]
async fn rejected_key_surfaces_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("keynotfound"))
        .mount(&mock_server)
        .await;

    let client = ConditionsClient::with_base_url("", mock_server.uri()).unwrap();
    let err = client.current_conditions("Austin, TX").await.unwrap_err();

    assert!(matches!(err, WeatherError::Status { status, .. } if status.as_u16() == 401));
}

#[tokio::test]
async fn wrong_shape_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"current_observation": {"temp_f": "hot"}})),
        )
        .mount(&mock_server)
        .await;

    let client = ConditionsClient::with_base_url("KEY", mock_server.uri()).unwrap();
    let err = client.current_conditions("Austin, TX").await.unwrap_err();

    assert!(matches!(err, WeatherError::Decode(_)));
}
