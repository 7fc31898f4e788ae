/// Trip planner CLI
/// Runs one plan from command-line flags and prints it to the terminal

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use trip_client::{logging, render, Planner, PlannerConfig, PlanView};
use trip_core::{
    BudgetTier, FlightClass, HotelRating, TravelTheme, TripRequest, AIRPORTS,
    DEFAULT_ACTIVITIES, DEFAULT_TRIP_DAYS,
};

#[derive(Parser, Debug)]
#[command(name = "trip-planner", version, about = "AI-powered travel planner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search flights and generate a full travel plan
    Plan(PlanArgs),
    /// List the airports offered by the planner
    Airports,
}

#[derive(clap::Args, Debug)]
struct PlanArgs {
    /// Departure airport (IATA code)
    #[arg(long)]
    from: String,

    /// Destination airport (IATA code)
    #[arg(long)]
    to: String,

    /// Departure date (YYYY-MM-DD)
    #[arg(long)]
    depart: NaiveDate,

    /// Return date (YYYY-MM-DD)
    #[arg(long = "return")]
    return_date: NaiveDate,

    /// Trip duration in days (1-14)
    #[arg(long, default_value_t = DEFAULT_TRIP_DAYS)]
    days: u8,

    #[arg(long, default_value_t = TravelTheme::default())]
    theme: TravelTheme,

    /// Activities you enjoy
    #[arg(long, default_value = DEFAULT_ACTIVITIES)]
    activities: String,

    #[arg(long, default_value_t = BudgetTier::default())]
    budget: BudgetTier,

    #[arg(long, default_value_t = FlightClass::default())]
    flight_class: FlightClass,

    #[arg(long, default_value_t = HotelRating::default())]
    hotel_rating: HotelRating,

    /// Print the plan as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl PlanArgs {
    fn to_request(&self) -> TripRequest {
        TripRequest {
            origin: self.from.trim().to_ascii_uppercase(),
            destination: self.to.trim().to_ascii_uppercase(),
            trip_days: self.days,
            theme: self.theme,
            activities: self.activities.clone(),
            budget: self.budget,
            flight_class: self.flight_class,
            hotel_rating: self.hotel_rating,
            departure_date: self.depart,
            return_date: self.return_date,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();
    logging::init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Airports => {
            for airport in AIRPORTS {
                println!("{}  {}", airport.code, airport.label());
            }
        }
        Command::Plan(args) => {
            let request = args.to_request();
            request.validate()?;

            let config = PlannerConfig::from_env()?;
            let planner = Planner::from_config(&config)?;
            let plan = planner.generate_plan(&request).await?;
            let view = PlanView::from(&plan);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", render::render_text(&view));
                println!("✅ Travel plan generated successfully!");
            }
        }
    }
    Ok(())
}
