use axum::{handler::get, Router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    env_logger::init();

    let router = Router::new()
        .route("/latest", get(latest))
        .route("/event/2", get(event_2))
        .route("/event/1", get(event_1))
        .route("/event/3/acks", get(acks_3));

    let arg = std::env::args().nth(1);
    let listen_uri = arg.as_deref().unwrap_or("0.0.0.0:3000");

    println!("Serving a three page feed on {}", listen_uri);

    axum::Server::bind(&listen_uri.parse().expect("URI"))
        .serve(router.into_make_service())
        .await
        .unwrap();

    Ok(())
}

async fn latest() -> String {
    r#"{
        "event": { "id": 3, "created": "2019-04-03T08:00:00Z", "description": "pump restarted" },
        "links": { "next": "/event/2", "acknowledgements": "/event/3/acks" }
    }"#
    .to_owned()
}

async fn event_2() -> String {
    r#"{
        "event": { "id": 2, "created": "2019-04-02T16:20:00Z", "description": "pressure drop" },
        "links": { "next": "/event/1" }
    }"#
    .to_owned()
}

async fn event_1() -> String {
    r#"{
        "event": { "id": 1, "created": "2019-04-01T09:45:00Z", "description": "water main break" },
        "links": {}
    }"#
    .to_owned()
}

async fn acks_3() -> String {
    r#"[{ "who": "amy" }, { "who": "ben" }]"#.to_owned()
}
