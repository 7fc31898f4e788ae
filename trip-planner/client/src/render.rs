/// Presentation helpers
/// Flight cards and plan views handed to the CLI and HTTP front ends

use std::fmt;

use serde::Serialize;
use trip_core::FlightOffer;

use crate::orchestration::TravelPlan;

/// Display-ready flight offer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightCard {
    pub airline: String,
    pub logo_url: String,
    pub departure: String,
    pub arrival: String,
    pub price: String,
    pub stops: usize,
}

impl From<&FlightOffer> for FlightCard {
    fn from(offer: &FlightOffer) -> Self {
        Self {
            airline: offer.airline.clone(),
            logo_url: offer.logo_url.clone(),
            departure: offer.departure_display(),
            arrival: offer.arrival_display(),
            price: offer.price_display(),
            stops: offer.stops,
        }
    }
}

/// Plan as shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct PlanView {
    pub headline: String,
    pub flights: Vec<FlightCard>,
    pub research: String,
    pub lodging: String,
    pub itinerary: String,
}

impl From<&TravelPlan> for PlanView {
    fn from(plan: &TravelPlan) -> Self {
        Self {
            headline: plan.headline.clone(),
            flights: plan.flights.iter().map(FlightCard::from).collect(),
            research: plan.research.clone(),
            lodging: plan.lodging.clone(),
            itinerary: plan.itinerary.clone(),
        }
    }
}

fn stops_label(stops: usize) -> String {
    match stops {
        0 => "Nonstop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{} stops", n),
    }
}

impl fmt::Display for PlanView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🌟 {} 🌟\n", self.headline)?;
        writeln!(f, "✈️  Cheapest Flight Options")?;
        if self.flights.is_empty() {
            writeln!(f, "⚠️  No flights available.")?;
        }
        for (idx, card) in self.flights.iter().enumerate() {
            writeln!(f, "\n{}. {} ({})", idx + 1, card.airline, stops_label(card.stops))?;
            writeln!(f, "   Departure: {}", card.departure)?;
            writeln!(f, "   Arrival:   {}", card.arrival)?;
            writeln!(f, "   💰 {}", card.price)?;
        }

        writeln!(f, "\n🏨 Hotels & Restaurants\n")?;
        writeln!(f, "{}", self.lodging.trim())?;
        writeln!(f, "\n🗺️  Your Personalized Itinerary\n")?;
        writeln!(f, "{}", self.itinerary.trim())
    }
}

/// Plain-text rendering for terminals
pub fn render_text(view: &PlanView) -> String {
    view.to_string()
}
