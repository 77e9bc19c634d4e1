//! Album search demo
//!
//! Loads a small catalog, filters and sorts it, then refreshes against a
//! backend that fails to show the notification path.
//!
//! Run with: `RUST_LOG=album_search=debug cargo run --example album_search`

use album_search::logging::init_tracing;
use album_search::prelude::*;
use std::time::Duration;

const CATALOG: &str = r#"[
    {"id": 1, "title": "Abbey Road", "artist": "The Beatles", "releaseDate": "1969-09-26"},
    {"id": 2, "title": "Revolver", "artist": "The Beatles", "releaseDate": "1966-08-05"},
    {"id": 3, "title": "Rubber Soul", "artist": "The Beatles", "releaseDate": "1965-12-03"},
    {"id": 4, "title": "Let It Be", "artist": "The Beatles", "releaseDate": "1970-05-08"}
]"#;

fn print_view(store: &SearchStore<Album>) {
    println!(
        "Albums ({}) query={:?} order={}",
        store.total_count(),
        store.query(),
        store.order()
    );
    for album in store.filtered_records() {
        println!("  - {} ({})", album.title, album.artist);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("album_search=info")?;

    let config = StoreConfig::default();
    let notifier = BroadcastNotifier::from_config(&config.notification);
    let mut notifications = notifier.subscribe();

    let fetcher = InMemoryFetcher::<Album>::from_json_str(CATALOG)?
        .with_latency(Duration::from_millis(300));

    let store = SearchStore::<Album>::builder()
        .with_fetcher(fetcher.clone())
        .with_notifier(notifier.clone())
        .with_config(config.clone())
        .build()?;

    println!("spinner visible: {}", store.show_spinner());
    store.subscribe().wait_for(|state| !state.loading).await?;
    print_view(&store);

    store.update_query("r");
    store.update_order(SortOrder::Desc);
    print_view(&store);

    // A second store sharing the notifier, backed by a broken endpoint
    let broken = SearchStore::<Album>::builder()
        .with_fetcher(FailingFetcher::new("Simulated network error").with_latency(Duration::from_millis(300)))
        .with_notifier(notifier)
        .with_config(config)
        .build()?;

    broken.refresh();
    broken.refresh();

    if let Ok(notification) = notifications.recv().await {
        println!(
            "notification: {} [{}] for {:?}",
            notification.message, notification.action, notification.duration
        );
    }
    broken.subscribe().wait_for(|state| !state.loading).await?;
    println!("broken store records: {}", broken.records().len());

    fetcher.set_records(Vec::new())?;
    match store.load_all().await {
        LoadOutcome::Loaded(count) => println!("reloaded {} albums", count),
        other => println!("reload: {:?}", other),
    }

    Ok(())
}
