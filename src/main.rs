use clap::{Parser, Subcommand};

// Declare the application modules
mod catalog;
mod contact;

use catalog::data::{Mural, MuralDetail};
use catalog::query::{self, Mode};
use catalog::store::Catalog;
use contact::ContactInfo;

/// Terminal front end for the mural portfolio catalog
#[derive(Parser)]
#[command(name = "mural-catalog", version, about = "Browse the mural portfolio catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List murals, optionally searched and reordered
    List {
        /// Free-text search across title, location, description and tags
        #[arg(long, default_value = "")]
        query: String,
        /// Sort mode: all, recent or popular (anything else means all)
        #[arg(long, default_value = "all")]
        mode: String,
    },
    /// Show the full detail of one mural
    Show {
        /// Mural id, as it appears in the listing
        id: String,
    },
    /// Print the artist's contact card
    Contact,
}

fn main() {
    let cli = Cli::parse();

    // If this fails the authored portfolio data is broken, and nothing
    // else in the application can work
    let catalog = Catalog::builtin().expect("Failed to load the built-in portfolio");

    match cli.command {
        Command::List { query, mode } => {
            println!("🎨 Mural catalog ({} murals)\n", catalog.len());

            let visible = query::apply_mode(
                &query::search(catalog.all(), &query),
                Mode::parse(&mode),
            );
            render_listing(&visible, &query);
        }
        Command::Show { id } => {
            let detail = query::lookup_by_id(&catalog, query::route_id(&id));
            render_detail(&detail);
        }
        Command::Contact => {
            let card = ContactInfo::artist();
            println!("👤 {}", card.name);
            println!("   {}\n", card.title);
            print!("{}", card.share_text());
            println!("Tags: {}", card.tags.join(", "));
        }
    }
}

/// Render the listing screen: result count, empty state, one card per mural
fn render_listing(visible: &[Mural], query: &str) {
    if !query.trim().is_empty() {
        let noun = if visible.len() == 1 { "mural" } else { "murals" };
        println!("Found {} {} matching your search\n", visible.len(), noun);
    }

    if visible.is_empty() {
        println!("No murals found.");
        println!("Try adjusting your search or filter to find what you're looking for.");
        return;
    }

    for mural in visible {
        println!("[{}] {}", mural.id, mural.title);
        println!("    📍 {}  🗓  {}", mural.location, mural.date);
        if !mural.tags.is_empty() {
            println!("    🏷  {}", mural.tags.join(", "));
        }
        println!("    {}\n", mural.description);
    }
}

/// Render the detail screen; works for the placeholder record too
fn render_detail(detail: &MuralDetail) {
    println!("{}", detail.title);
    println!("📍 {}", detail.location);
    if !detail.address.is_empty() {
        println!("   ({})", detail.address);
    }
    println!("🗓  {}", detail.date);
    println!("🏷  {}\n", detail.category);

    println!("{}\n", detail.description);

    // Commission details, skipping fields the record doesn't carry
    if !detail.client.is_empty() {
        println!("Client:     {}", detail.client);
    }
    if !detail.size.is_empty() {
        println!("Dimensions: {}", detail.size);
    }
    if !detail.materials.is_empty() {
        println!("Materials:  {}", detail.materials);
    }

    if !detail.tags.is_empty() {
        println!("Tags:       {}", detail.tags.join(", "));
    }

    if detail.photos.is_empty() {
        println!("\n📷 No photos available");
    } else {
        println!("\n📷 Photos:");
        for photo in &detail.photos {
            println!("   {}. {} ({})", photo.id, photo.url, photo.caption);
        }
    }
}
