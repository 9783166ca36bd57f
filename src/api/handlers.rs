//! HTTP API handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use strum::IntoEnumIterator;

use crate::brand::{BrandProfile, BrandRegistry, BrandVoice, Industry};
use crate::calendar::{CalendarEntry, CalendarPlanner};
use crate::config::Config;
use crate::content::{ContentForge, ContentPiece, PostType, TemplateKind};
use crate::engagement::{self, ContentRecord, PerformanceInsights};
use crate::error::ForgeError;
use crate::metrics;

/// Running totals reported by the status endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ForgeStats {
    /// Carousels generated.
    pub carousels_generated: u64,
    /// Single posts generated.
    pub singles_generated: u64,
    /// Standalone captions generated.
    pub captions_generated: u64,
    /// Hashtag sets generated.
    pub hashtag_sets_generated: u64,
    /// Calendars generated.
    pub calendars_generated: u64,
    /// Brands created via the API.
    pub brands_created: u64,
}

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Whether the service is ready to serve generation requests.
    pub ready: Arc<std::sync::atomic::AtomicBool>,
    /// Generation engine.
    pub forge: Arc<ContentForge>,
    /// Calendar planner.
    pub planner: Arc<CalendarPlanner>,
    /// Brand registry.
    pub registry: Arc<BrandRegistry>,
    /// Service configuration.
    pub config: Arc<Config>,
    /// Running totals.
    pub stats: Arc<tokio::sync::RwLock<ForgeStats>>,
    /// Prometheus render handle, when the exporter is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state from configuration, seeding the default brand.
    pub fn new(config: Config) -> Self {
        Self {
            ready: Arc::new(std::sync::atomic::AtomicBool::new(false)),
            forge: Arc::new(ContentForge::from_config(&config)),
            planner: Arc::new(CalendarPlanner::from_config(&config)),
            registry: Arc::new(BrandRegistry::with_default_brand(&config)),
            config: Arc::new(config),
            stats: Arc::new(tokio::sync::RwLock::new(ForgeStats::default())),
            prometheus: None,
        }
    }

    /// Attach a Prometheus render handle for the /metrics endpoint.
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    /// Set ready state.
    pub fn set_ready(&self, ready: bool) {
        self.ready
            .store(ready, std::sync::atomic::Ordering::SeqCst);
    }

    /// Check if ready.
    pub fn is_ready(&self) -> bool {
        self.ready.load(std::sync::atomic::Ordering::SeqCst)
    }

    /// Ephemeral brand profile for requests that do not reference a
    /// registered brand.
    fn ad_hoc_brand(
        &self,
        name: &str,
        industry: Industry,
        voice: BrandVoice,
        posting_frequency: u32,
    ) -> Result<BrandProfile, ForgeError> {
        let mut rng = rand::thread_rng();
        let brand = BrandProfile::new(
            name,
            industry,
            voice,
            "General audience",
            vec![
                "tips".to_string(),
                "products".to_string(),
                "stories".to_string(),
                "behind_scenes".to_string(),
            ],
            posting_frequency,
            &mut rng,
        )?;
        Ok(brand)
    }
}

// === Request bodies ===

fn default_topic() -> String {
    "Marketing Tips".to_string()
}

fn default_industry_field() -> String {
    "ecommerce".to_string()
}

fn default_voice_field() -> String {
    "friendly".to_string()
}

fn default_num_slides() -> usize {
    7
}

fn default_template() -> String {
    "tips".to_string()
}

fn default_num_sets() -> usize {
    3
}

fn default_brand_name_field() -> String {
    "Brand".to_string()
}

fn default_weeks() -> u32 {
    2
}

fn default_posts_per_week() -> u32 {
    3
}

fn default_post_type() -> String {
    "educational".to_string()
}

fn default_posting_frequency() -> u32 {
    5
}

/// Carousel generation request.
#[derive(Debug, Deserialize)]
pub struct CarouselRequest {
    /// Post topic.
    #[serde(default = "default_topic")]
    pub topic: String,
    /// Industry vertical (unknown values read as general).
    #[serde(default = "default_industry_field")]
    pub industry: String,
    /// Copy tone (unknown values read as friendly).
    #[serde(default = "default_voice_field")]
    pub brand_voice: String,
    /// Requested slide count, clamped to the configured range.
    #[serde(default = "default_num_slides")]
    pub num_slides: usize,
    /// Template kind (unknown values read as tips).
    #[serde(default = "default_template")]
    pub template: String,
    /// Use a registered brand instead of an ad-hoc profile.
    #[serde(default)]
    pub brand_name: Option<String>,
}

/// Caption generation request.
#[derive(Debug, Deserialize)]
pub struct CaptionRequest {
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_industry_field")]
    pub industry: String,
}

/// Hashtag set generation request.
#[derive(Debug, Deserialize)]
pub struct HashtagsRequest {
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_industry_field")]
    pub industry: String,
    #[serde(default = "default_num_sets")]
    pub num_sets: usize,
}

/// Calendar generation request.
#[derive(Debug, Deserialize)]
pub struct CalendarRequest {
    #[serde(default = "default_brand_name_field")]
    pub brand_name: String,
    #[serde(default = "default_industry_field")]
    pub industry: String,
    #[serde(default = "default_weeks")]
    pub weeks: u32,
    #[serde(default = "default_posts_per_week")]
    pub posts_per_week: u32,
}

/// Single post generation request.
#[derive(Debug, Deserialize)]
pub struct SingleRequest {
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_industry_field")]
    pub industry: String,
    #[serde(default = "default_post_type")]
    pub post_type: String,
    /// Use a registered brand instead of an ad-hoc profile.
    #[serde(default)]
    pub brand_name: Option<String>,
}

/// Brand creation request.
#[derive(Debug, Deserialize)]
pub struct CreateBrandRequest {
    pub name: String,
    #[serde(default = "default_industry_field")]
    pub industry: String,
    #[serde(default = "default_voice_field")]
    pub voice: String,
    #[serde(default)]
    pub target_audience: String,
    pub content_pillars: Vec<String>,
    #[serde(default = "default_posting_frequency")]
    pub posting_frequency: u32,
}

/// Performance analysis request.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub history: Vec<ContentRecord>,
}

// === Response bodies ===

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Whether service is ready.
    pub ready: bool,
    /// Registered brand count.
    pub brands: usize,
}

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Service status.
    pub status: &'static str,
    /// Registered brand count.
    pub brands: usize,
    /// Running totals.
    pub stats: ForgeStats,
}

/// Generated content response.
#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub success: bool,
    pub content: ContentPiece,
}

/// Caption response.
#[derive(Debug, Serialize)]
pub struct CaptionResponse {
    pub success: bool,
    pub caption: String,
    pub hashtags: Vec<String>,
}

/// One generated hashtag set.
#[derive(Debug, Serialize)]
pub struct HashtagSet {
    pub set_number: usize,
    pub hashtags: Vec<String>,
    pub count: usize,
}

/// Hashtag sets response.
#[derive(Debug, Serialize)]
pub struct HashtagsResponse {
    pub success: bool,
    pub hashtag_sets: Vec<HashtagSet>,
}

/// Calendar response.
#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub success: bool,
    pub calendar: Vec<CalendarEntry>,
}

/// Brand list response.
#[derive(Debug, Serialize)]
pub struct BrandsResponse {
    pub brands: Vec<BrandProfile>,
}

/// Brand creation response.
#[derive(Debug, Serialize)]
pub struct CreateBrandResponse {
    pub success: bool,
    pub brand: BrandProfile,
}

/// Analysis response.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub insights: PerformanceInsights,
}

// === Handlers ===

/// Service info handler - describes the API surface.
pub async fn service_info() -> impl IntoResponse {
    Json(json!({
        "message": "Content Forge API",
        "status": "running",
        "endpoints": {
            "GET /health": "Liveness check",
            "GET /ready": "Readiness check",
            "GET /metrics": "Prometheus metrics",
            "GET /api/v1/status": "Service status and stats",
            "GET /api/v1/industries": "List supported industries",
            "GET /api/v1/brands": "List brand profiles",
            "POST /api/v1/brands": "Create a brand profile",
            "POST /api/v1/generate/carousel": "Generate carousel post",
            "POST /api/v1/generate/caption": "Generate caption only",
            "POST /api/v1/generate/hashtags": "Generate hashtag sets",
            "POST /api/v1/generate/calendar": "Generate content calendar",
            "POST /api/v1/generate/single": "Generate single-image post",
            "POST /api/v1/analyze": "Analyze content performance",
        }
    }))
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Readiness check handler - returns 200 if ready, 503 otherwise.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let is_ready = state.is_ready();

    let response = ReadyResponse {
        ready: is_ready,
        brands: state.registry.len(),
    };

    if is_ready {
        (StatusCode::OK, Json(response))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response))
    }
}

/// Status handler - returns service status and generation totals.
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.stats.read().await.clone();
    let status = if state.is_ready() { "running" } else { "starting" };

    Json(StatusResponse {
        status,
        brands: state.registry.len(),
        stats,
    })
}

/// Prometheus metrics handler.
pub async fn render_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.prometheus {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics exporter not installed\n".to_string(),
        ),
    }
}

/// List supported industries.
pub async fn industries() -> impl IntoResponse {
    let industries: Vec<String> = Industry::iter().map(|i| i.to_string()).collect();
    Json(json!({ "industries": industries }))
}

/// List registered brand profiles.
pub async fn list_brands(State(state): State<AppState>) -> impl IntoResponse {
    Json(BrandsResponse {
        brands: state.registry.list(),
    })
}

/// Create a brand profile.
pub async fn create_brand(
    State(state): State<AppState>,
    Json(req): Json<CreateBrandRequest>,
) -> Result<impl IntoResponse, ForgeError> {
    let audience = if req.target_audience.trim().is_empty() {
        "General audience".to_string()
    } else {
        req.target_audience
    };

    let brand = {
        let mut rng = rand::thread_rng();
        BrandProfile::new(
            req.name,
            Industry::parse_or_general(&req.industry),
            BrandVoice::parse_or_friendly(&req.voice),
            audience,
            req.content_pillars,
            req.posting_frequency,
            &mut rng,
        )?
    };

    state.registry.insert(brand.clone())?;
    metrics::inc_brands_created();
    state.stats.write().await.brands_created += 1;

    Ok((
        StatusCode::CREATED,
        Json(CreateBrandResponse {
            success: true,
            brand,
        }),
    ))
}

/// Generate an Instagram carousel post.
pub async fn generate_carousel(
    State(state): State<AppState>,
    Json(req): Json<CarouselRequest>,
) -> Result<Json<ContentResponse>, ForgeError> {
    let _timer = metrics::GenerationTimer::new("carousel");

    let brand = match &req.brand_name {
        Some(name) => state.registry.get(name)?,
        None => state.ad_hoc_brand(
            &state.config.default_brand_name,
            Industry::parse_or_general(&req.industry),
            BrandVoice::parse_or_friendly(&req.brand_voice),
            3,
        )?,
    };

    let kind = TemplateKind::parse_or_tips(&req.template);
    let num_slides = state.config.clamp_slides(req.num_slides);

    let content = {
        let mut rng = rand::thread_rng();
        state
            .forge
            .generate_carousel(&brand, &req.topic, kind, num_slides, &mut rng)
            .inspect_err(|_| metrics::inc_generation_failed())?
    };

    metrics::inc_content_generated("carousel");
    state.stats.write().await.carousels_generated += 1;

    Ok(Json(ContentResponse {
        success: true,
        content,
    }))
}

/// Generate a caption with hashtags.
pub async fn generate_caption(
    State(state): State<AppState>,
    Json(req): Json<CaptionRequest>,
) -> Result<Json<CaptionResponse>, ForgeError> {
    let _timer = metrics::GenerationTimer::new("caption");

    let brand = state.ad_hoc_brand(
        &state.config.default_brand_name,
        Industry::parse_or_general(&req.industry),
        BrandVoice::Friendly,
        3,
    )?;

    let (caption, hashtags) = {
        let mut rng = rand::thread_rng();
        state
            .forge
            .generate_caption(&brand, &req.topic, &mut rng)
            .inspect_err(|_| metrics::inc_generation_failed())?
    };

    metrics::inc_content_generated("caption");
    state.stats.write().await.captions_generated += 1;

    Ok(Json(CaptionResponse {
        success: true,
        caption,
        hashtags,
    }))
}

/// Generate one or more hashtag sets.
pub async fn generate_hashtags(
    State(state): State<AppState>,
    Json(req): Json<HashtagsRequest>,
) -> Result<Json<HashtagsResponse>, ForgeError> {
    let _timer = metrics::GenerationTimer::new("hashtags");

    let industry = Industry::parse_or_general(&req.industry);
    let num_sets = req.num_sets.clamp(1, state.config.max_hashtag_sets);

    let hashtag_sets: Vec<HashtagSet> = {
        let mut rng = rand::thread_rng();
        (0..num_sets)
            .map(|i| {
                let tags =
                    crate::content::hashtags::generate_hashtags(industry, &req.topic, &mut rng);
                HashtagSet {
                    set_number: i + 1,
                    count: tags.len(),
                    hashtags: tags,
                }
            })
            .collect()
    };

    metrics::inc_content_generated("hashtags");
    state.stats.write().await.hashtag_sets_generated += hashtag_sets.len() as u64;

    Ok(Json(HashtagsResponse {
        success: true,
        hashtag_sets,
    }))
}

/// Generate a content calendar.
pub async fn generate_calendar(
    State(state): State<AppState>,
    Json(req): Json<CalendarRequest>,
) -> Result<Json<CalendarResponse>, ForgeError> {
    let _timer = metrics::GenerationTimer::new("calendar");

    let brand = state.ad_hoc_brand(
        &req.brand_name,
        Industry::parse_or_general(&req.industry),
        BrandVoice::Friendly,
        req.posts_per_week.max(1),
    )?;

    let calendar = {
        let mut rng = rand::thread_rng();
        state
            .planner
            .plan(&state.forge, &brand, req.weeks, req.posts_per_week, &mut rng)
            .inspect_err(|_| metrics::inc_generation_failed())?
    };

    metrics::add_calendar_entries(calendar.len() as u64);
    state.stats.write().await.calendars_generated += 1;

    Ok(Json(CalendarResponse {
        success: true,
        calendar,
    }))
}

/// Generate a single-image post.
pub async fn generate_single(
    State(state): State<AppState>,
    Json(req): Json<SingleRequest>,
) -> Result<Json<ContentResponse>, ForgeError> {
    let _timer = metrics::GenerationTimer::new("single");

    let brand = match &req.brand_name {
        Some(name) => state.registry.get(name)?,
        None => state.ad_hoc_brand(
            &state.config.default_brand_name,
            Industry::parse_or_general(&req.industry),
            BrandVoice::Friendly,
            3,
        )?,
    };

    let post_type = PostType::parse_or_educational(&req.post_type);

    let content = {
        let mut rng = rand::thread_rng();
        state
            .forge
            .generate_single(&brand, &req.topic, post_type, &mut rng)
            .inspect_err(|_| metrics::inc_generation_failed())?
    };

    metrics::inc_content_generated("single");
    state.stats.write().await.singles_generated += 1;

    Ok(Json(ContentResponse {
        success: true,
        content,
    }))
}

/// Analyze past content performance.
pub async fn analyze(
    State(_state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ForgeError> {
    let insights = engagement::analyze_performance(&req.history)?;
    metrics::inc_analyses_run();

    Ok(Json(AnalyzeResponse {
        success: true,
        insights,
    }))
}
