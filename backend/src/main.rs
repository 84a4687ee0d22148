use anyhow::{Context, bail};
use artistly_config::CONFIG_BACKEND;
use artistly_core::domain::artist::Artist;
use artistly_core::domain::booking::{BookingRequest, BookingStatus};
use artistly_core::domain::filter::ArtistFilter;
use artistly_lib::{AppState, WizardEdit};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Artistly: catálogo de artistas, gestión de solicitudes y alta de artistas.
#[derive(Parser, Debug)]
#[command(name = "artistly", version, about = "Artist booking marketplace")]
struct Cli {
  /// Print results as JSON instead of text
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List categories with their artist counts
  Categories,

  /// Browse artists (filters are OR within a group, AND across groups)
  Artists {
    #[arg(long = "category", value_name = "NAME")]
    categories: Vec<String>,

    #[arg(long = "location", value_name = "LOCATION")]
    locations: Vec<String>,

    #[arg(long = "fee-range", value_name = "LABEL")]
    fee_ranges: Vec<String>,
  },

  /// List the values accepted by the artist filters
  Facets,

  /// Show one artist
  Artist { id: String },

  /// List booking requests
  Requests {
    /// all, pending, approved or rejected
    #[arg(long, default_value = "all")]
    status: String,

    /// Case-insensitive match on artist name or location
    #[arg(long, default_value = "")]
    search: String,
  },

  /// Show the details of a booking request
  Show { id: String },

  /// Approve one or more pending booking requests
  Approve {
    #[arg(required = true)]
    ids: Vec<String>,
  },

  /// Reject one or more pending booking requests
  Reject {
    #[arg(required = true)]
    ids: Vec<String>,
  },

  /// Fill in the onboarding form step by step and submit it
  Onboard(OnboardArgs),

  /// Inspect or initialise the configuration file
  Config {
    #[command(subcommand)]
    action: ConfigAction,
  },
}

#[derive(clap::Args, Debug)]
struct OnboardArgs {
  #[arg(long)]
  name: String,

  #[arg(long)]
  bio: String,

  #[arg(long)]
  image_url: Option<String>,

  #[arg(long = "category", value_name = "NAME")]
  categories: Vec<String>,

  #[arg(long = "language", value_name = "LANGUAGE")]
  languages: Vec<String>,

  #[arg(long, value_name = "LABEL")]
  fee_range: String,

  #[arg(long)]
  location: String,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
  /// Print the effective settings
  Show,
  /// Write the config file with defaults for every missing section
  Init,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  if let Command::Config { action } = &cli.command {
    return run_config(action, cli.json);
  }

  let state = AppState::from_config().context("failed to initialise artistly")?;
  run(&state, cli.command, cli.json).await
}

fn run_config(action: &ConfigAction, json: bool) -> anyhow::Result<()> {
  let path = CONFIG_BACKEND.paths().config_file();

  match action {
    ConfigAction::Init => {
      let settings = artistly_lib::settings_init().map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&settings);
      }
      println!("Config written to {}", path.display());
    }
    ConfigAction::Show => {
      let settings = artistly_lib::settings_get().map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&settings);
      }
      println!("# {}", path.display());
      println!("seed_path            = {}", settings.seed_path.as_deref().unwrap_or("(built-in)"));
      println!("transition_delay_ms  = {}", settings.transition_delay_ms);
      println!("submission_delay_ms  = {}", settings.submission_delay_ms);
      println!("enforce_pending_only = {}", settings.enforce_pending_only);
    }
  }

  Ok(())
}

async fn run(state: &AppState, command: Command, json: bool) -> anyhow::Result<()> {
  match command {
    Command::Categories => {
      let counts = artistly_lib::categories_list(state).await.map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&counts);
      }
      for c in counts {
        println!("{} {:<10} {:>2} artists  {}", c.category.icon, c.category.name, c.artists, c.category.description);
      }
    }

    Command::Artists { categories, locations, fee_ranges } => {
      let filter = ArtistFilter::new()
        .with_categories(categories)
        .with_locations(locations)
        .with_fee_ranges(fee_ranges);
      let artists = artistly_lib::artists_browse(state, &filter).await.map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&artists);
      }
      if artists.is_empty() {
        println!("No artists found matching your criteria");
      }
      for a in &artists {
        print_artist_line(a);
      }
    }

    Command::Facets => {
      let facets = artistly_lib::catalog_facets(state).await.map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&facets);
      }
      println!("Categories: {}", facets.categories.join(", "));
      println!("Locations:  {}", facets.locations.join(", "));
      println!("Fee ranges: {}", facets.fee_ranges.join(", "));
      println!("Languages:  {}", facets.languages.join(", "));
    }

    Command::Artist { id } => {
      let artist = artistly_lib::artist_get(state, &id).await.map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&artist);
      }
      print_artist_line(&artist);
      println!("  {}", artist.bio);
      println!("  Languages: {}", artist.languages.join(", "));
      if let Some(rating) = artist.rating {
        println!("  Rating: {rating}");
      }
      if let Some(experience) = &artist.experience {
        println!("  Experience: {experience}");
      }
    }

    Command::Requests { status, search } => {
      let list = artistly_lib::requests_list(state, &status, &search).await.map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&list);
      }
      let c = list.counts;
      println!("Total: {}  Pending: {}  Approved: {}  Rejected: {}", c.total, c.pending, c.approved, c.rejected);
      if list.requests.is_empty() {
        println!("No requests found matching your criteria");
      }
      for r in &list.requests {
        print_request_line(r);
      }
    }

    Command::Show { id } => {
      let details = artistly_lib::request_details(state, &id).await.map_err(anyhow::Error::msg)?;
      if json {
        return print_json(&details);
      }
      println!("{details}");
    }

    Command::Approve { ids } => transition(state, &ids, BookingStatus::Approved, json).await?,
    Command::Reject { ids } => transition(state, &ids, BookingStatus::Rejected, json).await?,

    Command::Onboard(args) => onboard(state, args, json).await?,

    Command::Config { action } => run_config(&action, json)?,
  }

  Ok(())
}

async fn transition(state: &AppState, ids: &[String], target: BookingStatus, json: bool) -> anyhow::Result<()> {
  info!(count = ids.len(), %target, "processing booking requests");
  let results = artistly_lib::requests_transition(state, ids, target).await;
  let failed = results.iter().filter(|r| r.error.is_some()).count();

  if json {
    print_json(&results)?;
  } else {
    for r in &results {
      match (&r.request, &r.error) {
        (Some(request), _) => print_request_line(request),
        (None, Some(error)) => println!("{:>3}  error: {error}", r.id),
        (None, None) => {}
      }
    }
  }

  if failed > 0 {
    bail!("{failed} of {} requests could not be updated", results.len());
  }
  Ok(())
}

async fn onboard(state: &AppState, args: OnboardArgs, json: bool) -> anyhow::Result<()> {
  // Paso 1: datos básicos.
  artistly_lib::wizard_edit(state, WizardEdit::Name(args.name)).await;
  artistly_lib::wizard_edit(state, WizardEdit::Bio(args.bio)).await;
  artistly_lib::wizard_edit(state, WizardEdit::ImageUrl(args.image_url)).await;
  artistly_lib::wizard_next(state).await;

  // Paso 2: categorías e idiomas.
  for category in args.categories {
    artistly_lib::wizard_edit(state, WizardEdit::ToggleCategory(category)).await;
  }
  for language in args.languages {
    artistly_lib::wizard_edit(state, WizardEdit::ToggleLanguage(language)).await;
  }
  artistly_lib::wizard_next(state).await;

  // Paso 3: tarifa y ubicación.
  artistly_lib::wizard_edit(state, WizardEdit::FeeRange(args.fee_range)).await;
  let wizard = artistly_lib::wizard_edit(state, WizardEdit::Location(args.location)).await;

  if !wizard.can_submit {
    let wizard = artistly_lib::wizard_validate(state).await;
    if json {
      print_json(&wizard)?;
    } else {
      for (field, message) in wizard.errors.iter() {
        eprintln!("{:<10} {message}", field.as_str());
      }
    }
    bail!("profile has {} invalid field(s)", wizard.errors.len());
  }

  if !json {
    println!("Submitting...");
  }
  let receipt = artistly_lib::wizard_submit(state).await.map_err(anyhow::Error::msg)?;

  if json {
    return print_json(&receipt);
  }
  println!("Application Submitted!");
  println!(
    "Thank you for submitting your artist profile. We'll review your application and get back to you within 2-3 business days."
  );
  println!("Reference: {}", receipt.id);
  Ok(())
}

fn print_artist_line(a: &Artist) {
  let rating = a.rating.map(|r| r.to_string()).unwrap_or_default();
  println!(
    "{:>3}  {:<18} {:<22} {:<20} {:<12} {}",
    a.id.as_str(),
    a.name,
    a.category.join(", "),
    a.location,
    a.fee_range,
    rating
  );
}

fn print_request_line(r: &BookingRequest) {
  println!(
    "{:>3}  {:<18} {:<20} {:<12} {:<9} {}",
    r.id.as_str(),
    r.artist_name,
    r.location,
    r.fee_range,
    r.status.title(),
    r.request_date
  );
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}
