/// Common test utilities and fixtures
use axum::Router;
use std::sync::Arc;
use usersearch_server::{
    api, dataset::load_dataset, AppState, Dataset, StaticToken, UserDirectory,
};

pub const TEST_TOKEN: &str = "123qwerty";

/// The bundled 30-user fixture
pub fn fixture_dataset() -> Dataset {
    load_dataset(concat!(env!("CARGO_MANIFEST_DIR"), "/data/dataset.xml")).unwrap()
}

/// Router over the fixture dataset, guarded by `TEST_TOKEN`
pub fn create_test_app() -> Router {
    let directory = Arc::new(UserDirectory::new(fixture_dataset().users));
    let credentials = Arc::new(StaticToken::new(TEST_TOKEN));
    api::router(AppState::new(directory, credentials))
}

/// Serve the test app on an ephemeral loopback port and return its base URL
pub async fn spawn_test_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_test_app()).await.unwrap();
    });

    format!("http://{}", addr)
}
