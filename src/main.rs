mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use mixplan::config::EngineConfig;
use mixplan::recommend::{
    ActivitySelection, AudienceMode, ShareContext, ShareLinkBuilder, AUDIENCE_PRESETS,
};
use mixplan::reference::{
    CompetitiveForce, CustomizationLevel, ForceRating, LifecycleStage, MarketConcentration,
    MarketType, ProductType, ReferenceData, SegmentationCriterion,
};
use mixplan::{
    format_percent, plan_promotion_mix, recommend_strategy, PromotionMixInput, Selection, Step,
    WizardState,
};

#[derive(Parser)]
#[command(name = "mixplan", about = "Marketing strategy and promotion mix planner")]
struct Cli {
    /// Path to the engine config (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Walk the six-step strategy flow and print recommendations
    Strategy(StrategyArgs),
    /// Rank promotional activities for a target audience
    Promotion(PromotionArgs),
    /// Print the built-in reference tables
    Reference(ReferenceArgs),
    /// Serve the JSON API
    Serve(ServeArgs),
    /// Write the default config file
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone)]
struct StrategyArgs {
    #[arg(long)]
    product_type: Option<String>,
    #[arg(long)]
    stage: Option<String>,
    /// Ansoff cell: new-new, new-existing, existing-new or existing-existing
    #[arg(long)]
    market: Option<String>,
    #[arg(long = "segment")]
    segments: Vec<String>,
    /// Force rating as force=rating, e.g. rivalry=high
    #[arg(long = "force")]
    forces: Vec<String>,
    #[arg(long)]
    customization: Option<String>,
    #[arg(long)]
    concentration: Option<String>,
    #[arg(long)]
    channel: Option<String>,
    #[arg(long)]
    share: bool,
    #[arg(long)]
    details: bool,
}

#[derive(Args, Debug, Clone)]
struct PromotionArgs {
    #[arg(long)]
    audience: String,
    #[arg(long, default_value = "")]
    product_type: String,
    #[arg(long)]
    stage: Option<String>,
    /// Add a catalog activity to your mix (repeatable)
    #[arg(long = "select")]
    selections: Vec<String>,
    #[arg(long)]
    details: bool,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone, Default)]
struct ReferenceArgs {
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8790)]
    port: u16,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = "config/mixplan.toml")]
    path: PathBuf,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, config_path) = EngineConfig::load(cli.config)?;
    if let Some(path) = config_path.as_ref() {
        tracing::debug!(path = %path.display(), exists = path.exists(), "engine config resolved");
    }

    let command = cli.command.unwrap_or(Command::Reference(ReferenceArgs::default()));
    match command {
        Command::Strategy(args) => run_strategy(args, &config),
        Command::Promotion(args) => run_promotion(args, &config),
        Command::Reference(args) => run_reference(args),
        Command::Serve(args) => server::serve(args, config).await,
        Command::InitConfig(args) => {
            EngineConfig::default().write(&args.path)?;
            println!("Wrote default config to {}", args.path.display());
            Ok(())
        }
    }
}

fn run_strategy(args: StrategyArgs, config: &EngineConfig) -> Result<(), String> {
    let mut wizard = WizardState::new();

    if let Some(value) = args.product_type.as_deref() {
        let product = ProductType::from_str(value)
            .ok_or_else(|| format!("invalid product type: {}", value))?;
        apply(&mut wizard, Selection::ProductType(product))?;
    }
    if let Some(value) = args.stage.as_deref() {
        let stage = LifecycleStage::from_str(value)
            .ok_or_else(|| format!("invalid product stage: {}", value))?;
        apply(&mut wizard, Selection::ProductStage(stage))?;
    }
    advance(&mut wizard)?;

    if let Some(value) = args.market.as_deref() {
        let market =
            MarketType::from_str(value).ok_or_else(|| format!("invalid market type: {}", value))?;
        apply(&mut wizard, Selection::MarketType(market))?;
    }
    advance(&mut wizard)?;

    for value in &args.segments {
        let criterion = SegmentationCriterion::from_str(value)
            .ok_or_else(|| format!("invalid segmentation criterion: {}", value))?;
        apply(&mut wizard, Selection::AddSegment(criterion))?;
    }
    advance(&mut wizard)?;

    for value in &args.forces {
        let (force, rating) = parse_force(value)?;
        apply(&mut wizard, Selection::Force { force, rating })?;
    }
    advance(&mut wizard)?;

    if let Some(value) = args.customization.as_deref() {
        let level = CustomizationLevel::from_str(value)
            .ok_or_else(|| format!("invalid customization level: {}", value))?;
        apply(&mut wizard, Selection::Customization(level))?;
    }
    if let Some(value) = args.concentration.as_deref() {
        let concentration = MarketConcentration::from_str(value)
            .ok_or_else(|| format!("invalid market concentration: {}", value))?;
        apply(&mut wizard, Selection::Concentration(concentration))?;
    }
    if let Some(value) = args.channel.as_deref() {
        apply(&mut wizard, Selection::Channel(value.to_string()))?;
    }
    advance(&mut wizard)?;

    let recommendations = recommend_strategy(&wizard);
    println!("Core strategy: {}", recommendations.strategy);
    println!("Promotion strategy: {}", recommendations.promotion);
    println!("Pricing strategy: {}", recommendations.pricing);
    println!("Distribution strategy: {}", recommendations.distribution);

    if args.details {
        if let Some(profile) = wizard.distribution_channel() {
            println!("\n{} ({})", profile.display_name, profile.model_label);
            println!("Pros:");
            for pro in profile.pros {
                println!("  + {}", pro);
            }
            println!("Cons:");
            for con in profile.cons {
                println!("  - {}", con);
            }
            println!("Channel options: {}", profile.examples.join(", "));
        }
    }

    if let Some(channel) = wizard.selected_channel.as_deref() {
        println!("Selected channel: {}", channel);
    }

    if !recommendations.messaging.is_empty() {
        println!("\nKey messaging insights:");
        for insight in &recommendations.messaging {
            println!("- {}", insight);
        }
    }

    if args.share {
        let link = ShareLinkBuilder::new(&config.share).build(&ShareContext::from_state(&wizard));
        println!("\nShare link: {}", link);
    }

    Ok(())
}

fn run_promotion(args: PromotionArgs, config: &EngineConfig) -> Result<(), String> {
    let product_stage = match args.stage.as_deref() {
        Some(value) => Some(
            LifecycleStage::from_str(value)
                .ok_or_else(|| format!("invalid product stage: {}", value))?,
        ),
        None => None,
    };
    let input = PromotionMixInput {
        audience: args.audience,
        product_type: args.product_type,
        product_stage,
    };
    let output = plan_promotion_mix(&input, config);
    // Each generated mix starts with an empty pick list.
    let mut activities = ActivitySelection::new();
    for name in &args.selections {
        activities.add(name).map_err(|err| err.to_string())?;
    }
    tracing::info!(
        audience = %input.audience,
        results = output.recommendations.len(),
        "promotion mix generated"
    );

    if args.json {
        let payload = serde_json::to_string_pretty(&serde_json::json!({
            "plan": output,
            "activities": activities,
        }))
        .map_err(|err| format!("failed to serialize output: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    println!("Product stage insight: {}", output.stage_advice);
    println!("Product type insight: {}", output.type_advice);
    if let Some(mode) = output.mode {
        println!("Audience mode: {}", mode.label());
    }

    if output.recommendations.is_empty() {
        println!("\nNo recommendations: describe a target audience to score activities.");
        return Ok(());
    }

    println!("\nRecommended promotional activities:");
    for (index, recommendation) in output.recommendations.iter().enumerate() {
        println!(
            "{:>2}. {} [{}] - {}",
            index + 1,
            recommendation.name(),
            recommendation.priority().label(),
            recommendation.reasoning
        );
        if args.details {
            println!(
                "    Type: {} | Partner focus: {} | Customer focus: {}",
                recommendation.category().label(),
                recommendation.partner().label(),
                recommendation.customer().label()
            );
            for resource in recommendation.resources() {
                println!(
                    "    {} {} - {}: {}",
                    resource.icon, resource.name, resource.description, resource.url
                );
            }
        }
    }

    if !activities.is_empty() {
        println!("\nYour promotion mix ({} selected):", activities.len());
        for (index, name) in activities.iter().enumerate() {
            println!("{:>2}. {}", index + 1, name);
        }
    }

    Ok(())
}

fn run_reference(args: ReferenceArgs) -> Result<(), String> {
    let reference = ReferenceData::builtin();
    if args.json {
        let payload = serde_json::to_string_pretty(&reference)
            .map_err(|err| format!("failed to serialize reference data: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    println!("Steps:");
    for step in Step::ALL {
        println!(
            "  {}. {} ({}) - {}",
            step.number(),
            step.label(),
            format_percent(step.progress()),
            step.title()
        );
    }
    println!("\nProduct types:");
    for entry in &reference.product_types {
        println!("  {:<12} {} - {}", entry.key, entry.name, entry.description);
    }
    println!("\nLifecycle stages: {}", reference.lifecycle_stages.join(", "));
    println!("\nMarket strategies (Ansoff):");
    for entry in &reference.market_types {
        println!("  {:<18} {} -> {}", entry.key, entry.name, entry.strategy);
    }
    println!("\nSegmentation criteria:");
    for entry in &reference.segmentation {
        println!("  {:<14} {} - {}", entry.key, entry.name, entry.description);
    }
    println!("\nCompetitive forces ({}):", reference.force_ratings.join("/"));
    for entry in &reference.competitive_forces {
        println!("  {:<12} {}", entry.key, entry.label);
    }
    println!("\nDistribution channels:");
    for profile in &reference.distribution_channels {
        println!(
            "  {:<18} {} ({})",
            profile.key, profile.display_name, profile.model_label
        );
    }
    println!("\nAudience presets:");
    for preset in AUDIENCE_PRESETS {
        println!("  {} ({})", preset, AudienceMode::classify(preset).label());
    }
    println!("\nCommunication tools:");
    for tool in reference.communication_tools {
        println!(
            "  {} [{}] partner: {} | customer: {}",
            tool.name,
            tool.category.label(),
            tool.partner.label(),
            tool.customer.label()
        );
    }
    Ok(())
}

fn apply(wizard: &mut WizardState, selection: Selection) -> Result<(), String> {
    wizard.apply(selection).map_err(|err| err.to_string())
}

fn advance(wizard: &mut WizardState) -> Result<(), String> {
    let current = wizard.step;
    let next = wizard
        .next()
        .map_err(|err| format!("step {} ({}): {}", current.number(), current.label(), err))?;
    tracing::info!(step = next.number(), label = next.label(), "advanced");
    Ok(())
}

fn parse_force(value: &str) -> Result<(CompetitiveForce, ForceRating), String> {
    let (force, rating) = value
        .split_once('=')
        .ok_or_else(|| format!("invalid force rating (expected force=rating): {}", value))?;
    let force = CompetitiveForce::from_str(force)
        .ok_or_else(|| format!("invalid competitive force: {}", force))?;
    let rating =
        ForceRating::from_str(rating).ok_or_else(|| format!("invalid force rating: {}", rating))?;
    Ok((force, rating))
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
