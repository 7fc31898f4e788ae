/// Trip request model
/// The parameters collected from the user, passed by reference through one plan run.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::airports::{find_airport, is_valid_iata};

pub const DEFAULT_TRIP_DAYS: u8 = 5;
pub const TRIP_DAYS_RANGE: RangeInclusive<u8> = 1..=14;
pub const DEFAULT_ACTIVITIES: &str = "Relaxing on the beach, exploring historical sites";

/// Unrecognized value for one of the enumerated trip options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripRequestError {
    #[error("{field} must be a three-letter IATA code, got '{code}'")]
    InvalidAirportCode { field: &'static str, code: String },

    #[error("trip length must be between 1 and 14 days, got {0}")]
    TripLengthOutOfRange(u8),

    #[error("return date {return_date} is before departure date {departure_date}")]
    ReturnBeforeDeparture {
        departure_date: NaiveDate,
        return_date: NaiveDate,
    },
}

/// Declares a closed set of trip options that round-trip through their display label.
/// The first variant is the default. Aliases must be lowercase.
macro_rules! trip_option {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseOptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_lowercase();
                $(
                    if needle == $label.to_lowercase() $(|| needle == $alias)* {
                        return Ok($name::$variant);
                    }
                )+
                Err(ParseOptionError {
                    kind: $kind,
                    value: s.to_string(),
                    expected: Self::ALL
                        .iter()
                        .map(|option| option.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                })
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseOptionError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.as_str().to_string()
            }
        }
    };
}

trip_option! {
    TravelTheme, "travel theme" {
        CoupleGetaway => "Couple Getaway" | "couple",
        FamilyVacation => "Family Vacation" | "family",
        AdventureTrip => "Adventure Trip" | "adventure",
        SoloExploration => "Solo Exploration" | "solo",
    }
}

trip_option! {
    BudgetTier, "budget tier" {
        Economy => "Economy",
        Standard => "Standard",
        Luxury => "Luxury",
    }
}

trip_option! {
    FlightClass, "flight class" {
        Economy => "Economy",
        Business => "Business",
        First => "First Class" | "first",
    }
}

trip_option! {
    /// Minimum hotel star rating, or no filter
    HotelRating, "hotel rating" {
        Any => "Any",
        ThreeStar => "3⭐" | "3" | "3-star" | "3 star",
        FourStar => "4⭐" | "4" | "4-star" | "4 star",
        FiveStar => "5⭐" | "5" | "5-star" | "5 star",
    }
}

/// Everything needed to plan one trip.
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// IATA code of the departure airport
    pub origin: String,
    /// IATA code of the destination airport
    pub destination: String,
    #[serde(default = "default_trip_days")]
    pub trip_days: u8,
    #[serde(default)]
    pub theme: TravelTheme,
    #[serde(default = "default_activities")]
    pub activities: String,
    #[serde(default)]
    pub budget: BudgetTier,
    #[serde(default)]
    pub flight_class: FlightClass,
    #[serde(default)]
    pub hotel_rating: HotelRating,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
}

fn default_trip_days() -> u8 {
    DEFAULT_TRIP_DAYS
}

fn default_activities() -> String {
    DEFAULT_ACTIVITIES.to_string()
}

impl TripRequest {
    pub fn validate(&self) -> Result<(), TripRequestError> {
        for (field, code) in [("origin", &self.origin), ("destination", &self.destination)] {
            if !is_valid_iata(code) {
                return Err(TripRequestError::InvalidAirportCode {
                    field,
                    code: code.clone(),
                });
            }
        }

        if !TRIP_DAYS_RANGE.contains(&self.trip_days) {
            return Err(TripRequestError::TripLengthOutOfRange(self.trip_days));
        }

        if self.return_date < self.departure_date {
            return Err(TripRequestError::ReturnBeforeDeparture {
                departure_date: self.departure_date,
                return_date: self.return_date,
            });
        }

        Ok(())
    }

    /// Catalog label for the destination, falling back to the bare code
    pub fn destination_name(&self) -> String {
        find_airport(&self.destination)
            .map(|airport| airport.label())
            .unwrap_or_else(|| self.destination.clone())
    }

    pub fn headline(&self) -> String {
        format!("Your {} to {} is about to begin!", self.theme, self.destination)
    }
}
