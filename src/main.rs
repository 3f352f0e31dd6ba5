use rental_scout::catalog::{parse_price_bound, CatalogSource, JsonFileCatalog, SampleCatalog};
use rental_scout::config::Settings;
use rental_scout::{AmenityIcon, Catalog, CriteriaPatch, Listing, Session};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    info!("🏠 Rental Scout - Student Accommodation Browser");
    info!("===============================================");

    let source: Box<dyn CatalogSource> = match &settings.catalog_path {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => Box::new(SampleCatalog),
    };

    info!("Loading catalog from {} source...", source.source_name());
    let catalog = Arc::new(Catalog::new(source.load().await?)?);
    let mut session = Session::new(Arc::clone(&catalog));

    println!("All listings:");
    print_listings(&session.filtered_listings());

    // Same steps a visitor takes in the filter panel
    session.set_criteria(
        CriteriaPatch::new()
            .price_range(parse_price_bound("150")?, parse_price_bound("300")?)
            .amenities(["WiFi", "Kitchen"]),
    );
    println!("Filters: {}", session.criteria().active_filters().join(", "));
    print_listings(&session.filtered_listings());

    let picks: Vec<String> = session
        .filtered_listings()
        .iter()
        .map(|listing| listing.id.clone())
        .collect();
    for id in &picks {
        session.add_to_comparison_by_id(id);
    }
    if let Some(first) = picks.first() {
        session.toggle_favorite(first);
    }

    session.open_comparison();
    print_comparison(&session);

    info!(
        "✅ {} favorites, {} listings in comparison",
        session.favorite_listings().len(),
        session.comparison_count()
    );

    session.clear_criteria();
    info!(
        "Filters cleared, {} listings visible",
        session.filtered_listings().len()
    );

    Ok(())
}

fn print_listings(listings: &[&Listing]) {
    for (i, listing) in listings.iter().enumerate() {
        println!("{}. {} (${}/month)", i + 1, listing.title, listing.monthly_price);
        println!("   {} · {}", listing.location, listing.room_type);
        println!(
            "   ⭐ {:.1} ({} reviews), {} spots left",
            listing.rating, listing.review_count, listing.available_spots
        );
        println!(
            "   Amenities: {}",
            listing.amenities.iter().cloned().collect::<Vec<_>>().join(", ")
        );
        println!();
    }
}

fn print_comparison(session: &Session) {
    let comparison = session.comparison();
    println!("Comparing {} listings:", comparison.count());
    for listing in comparison.iter() {
        let marker = if session.is_favorited(&listing.id) { "♥" } else { " " };
        println!("  {} {} (${})", marker, listing.title, listing.monthly_price);
    }

    for row in comparison.amenity_matrix() {
        let icon = match AmenityIcon::for_tag(&row.amenity) {
            AmenityIcon::Wifi => "📶",
            AmenityIcon::Parking => "🚗",
            AmenityIcon::Kitchen => "🍳",
            AmenityIcon::Security => "🛡",
            AmenityIcon::Generic => "•",
        };
        let cells: Vec<&str> = row
            .present
            .iter()
            .map(|&has| if has { "yes" } else { "-" })
            .collect();
        println!("  {} {:<18} {}", icon, row.amenity, cells.join("  "));
    }
    println!();
}
