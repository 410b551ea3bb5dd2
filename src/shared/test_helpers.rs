use std::sync::Arc;

use axum_test::TestServer;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

use crate::core::config::Config;
use crate::core::router::build_router;
use crate::features::categories::models::Category;
use crate::features::reports::models::{Location, NewReport};
use crate::features::users::models::User;
use crate::modules::store::InMemoryStore;

/// Unverified user with random name and email
pub fn fake_user(national_id: &str) -> User {
    User {
        national_id: national_id.to_string(),
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        email: SafeEmail().fake(),
        password: "password123".to_string(),
        phone: "01000000000".to_string(),
        address: "1 Test St.".to_string(),
        city: "Cairo".to_string(),
        governorate: "Cairo".to_string(),
        verified: false,
        points: 0,
    }
}

pub fn sample_new_report() -> NewReport {
    NewReport {
        title: "Pothole".to_string(),
        category: Category::RoadDamage,
        description: "Deep hole near the market".to_string(),
        location: Location {
            lat: 30.0444,
            lng: 31.2357,
        },
        image: "data:image/png;base64,aGVsbG8=".to_string(),
        reporter: None,
    }
}

/// Full application router over a fresh store
pub fn test_server(config: Config) -> TestServer {
    let store = if config.seed.sample_data {
        InMemoryStore::seeded()
    } else {
        InMemoryStore::new()
    };
    TestServer::new(build_router(&config, Arc::new(store))).unwrap()
}

pub fn empty_server() -> TestServer {
    test_server(Config::for_tests())
}

/// Server over the sample users and reports
pub fn seeded_server() -> TestServer {
    let mut config = Config::for_tests();
    config.seed.sample_data = true;
    test_server(config)
}
