//! Content Forge service entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use content_forge::api::{create_router, AppState};
use content_forge::brand::{BrandProfile, BrandVoice, Industry};
use content_forge::calendar::CalendarPlanner;
use content_forge::config::Config;
use content_forge::content::{ContentForge, PostType, TemplateKind};
use content_forge::metrics;
use content_forge::utils::shutdown_signal;

/// Instagram content generation service.
#[derive(Parser, Debug)]
#[command(name = "content-forge")]
#[command(about = "Instagram content generator for multi-brand marketing")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides the PORT environment variable).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port (overrides the PORT environment variable).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Generate and print sample content.
    Demo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("content_forge=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Demo) => cmd_demo(),
        Some(Command::Serve { port }) => cmd_serve(port).await,
        None => cmd_serve(args.port).await,
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("CONTENT FORGE - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Port: {}", config.port);
    println!("  Default Brand: {}", config.default_brand_name);
    println!("  Default Industry: {}", config.default_industry);
    println!("  Default Voice: {}", config.default_voice);
    println!("  Slide Range: {}-{}", config.min_slides, config.max_slides);
    println!("  Max Hashtag Sets: {}", config.max_hashtag_sets);
    println!(
        "  Calendar Limits: {} weeks, {} posts/week",
        config.max_calendar_weeks, config.max_posts_per_week
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server.
async fn cmd_serve(port: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;
    if let Some(port) = port {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!("Default brand: {}", config.default_brand_name);
    info!(
        "Slide range: {}-{}",
        config.min_slides, config.max_slides
    );

    // Install the Prometheus recorder
    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("failed to install metrics recorder: {e}"))?;

    // Create app state
    let app_state = AppState::new(config.clone()).with_prometheus(prometheus);
    app_state.set_ready(true);

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(app_state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Generate and print sample content.
fn cmd_demo() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    let forge = ContentForge::default();

    println!("======================================================================");
    println!("CONTENT FORGE - DEMO");
    println!("======================================================================");

    // Create a sample brand
    println!("\n1. Creating brand profile...");
    let brand = BrandProfile::new(
        "BlazeIgnite",
        Industry::Marketing,
        BrandVoice::Professional,
        "entrepreneurs",
        vec![
            "email marketing".to_string(),
            "shopify growth".to_string(),
            "facebook ads".to_string(),
            "automation".to_string(),
            "client acquisition".to_string(),
        ],
        5,
        &mut rng,
    )?;
    println!("   Created brand: {}", brand.name);
    println!("   Voice: {}", brand.voice);
    println!("   Content pillars: {}", brand.content_pillars.join(", "));

    // Generate a carousel
    println!("\n2. Generating carousel post...");
    let carousel = forge.generate_carousel(
        &brand,
        "email marketing",
        TemplateKind::Tips,
        7,
        &mut rng,
    )?;
    println!("   Title: {}", carousel.title);
    println!("   Engagement Score: {}/100", carousel.engagement_score);
    println!("   Best Posting Time: {}", carousel.best_posting_time);
    println!("   {} slides generated", carousel.slides.len());

    // Show hook and caption
    println!("\n3. Generated Content:");
    println!("   Hook: {}", carousel.hook);
    let preview: String = carousel.caption.chars().take(200).collect();
    println!("\n   Caption Preview:\n   {}...", preview);
    println!("\n   Hashtags: {}", carousel.hashtags.join(" "));

    // Show slide outline
    println!("\n4. Slide Outline:");
    for (i, slide) in carousel.slides.iter().enumerate() {
        let text: String = slide.display_text(i + 1).chars().take(50).collect();
        println!("   Slide {} [{}]: {}...", i + 1, slide.kind, text);
    }

    // Generate content calendar
    println!("\n5. Content Calendar (Next 5 Days):");
    let planner = CalendarPlanner::default();
    let calendar = planner.plan(&forge, &brand, 1, 5, &mut rng)?;
    for item in &calendar {
        println!("   {} ({}): {}", item.day, item.date, item.title);
        println!(
            "      Topic: {} | Score: {}/100",
            item.topic, item.engagement_score
        );
    }

    // Generate single post
    println!("\n6. Bonus Single Post:");
    let single = forge.generate_single(&brand, "facebook ads", PostType::Educational, &mut rng)?;
    println!("   Type: {}", single.content_type);
    println!("   Hook: {}", single.hook);
    let caption_preview: String = single.caption.chars().take(150).collect();
    println!("   Caption: {}...", caption_preview);

    println!("\n======================================================================");
    println!("Demo complete.");
    println!("======================================================================");

    Ok(())
}
