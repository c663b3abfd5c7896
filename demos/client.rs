use futures_util::StreamExt;
use notify_client::EventClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    env_logger::init();

    let arg = std::env::args().nth(1);
    let endpoint = arg.as_deref().unwrap_or("http://0.0.0.0:3000");

    let client = EventClient::new(endpoint);

    let mut pages = client.fetch_all();
    while let Some(page) = pages.next().await {
        let page = page?;
        println!("event {} created {}", page.event.id, page.event.created);

        if page.links.acknowledgements.is_some() {
            let acks = client.fetch_acknowledgements(&page).await?;
            println!("  acknowledged {} time(s)", acks.len());
        }
    }

    Ok(())
}
