use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    Economy,
    Business,
    First,
}

impl SeatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatType::Economy => "economy",
            SeatType::Business => "business",
            SeatType::First => "first",
        }
    }
}

impl fmt::Display for SeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeatType {
    type Err = String;

    /// Accepts "economy", "Business class", "FIRST" and similar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let normalized = normalized.trim_end_matches(" class").trim();
        match normalized {
            "economy" | "coach" => Ok(SeatType::Economy),
            "business" => Ok(SeatType::Business),
            "first" => Ok(SeatType::First),
            _ => Err(format!("unknown seat type '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatClass {
    pub available: u32,
    pub price_usd: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Flight {
    pub flight_number: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    #[serde(rename = "departure_time")]
    pub departure: NaiveDateTime,
    #[serde(rename = "arrival_time")]
    pub arrival: NaiveDateTime,
    pub seats: BTreeMap<SeatType, SeatClass>,
}

impl Flight {
    pub fn departs_on(&self, date: chrono::NaiveDate) -> bool {
        self.departure.date() == date
    }
}

type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    [(u32, u32); 3],
);

// flight, airline, from, to, departs, arrives, [(seats, price); economy/business/first]
const SEED: &[SeedRow] = &[
    ("AA100", "American Airlines", "LAX", "JFK", "2024-07-01 08:00", "2024-07-01 16:30", [(120, 329), (24, 1149), (8, 2490)]),
    ("DL405", "Delta Air Lines", "LAX", "JFK", "2024-07-01 13:15", "2024-07-01 21:40", [(98, 289), (20, 1089), (0, 2310)]),
    ("B6524", "JetBlue", "LAX", "JFK", "2024-07-01 22:05", "2024-07-02 06:25", [(140, 219), (16, 899), (0, 0)]),
    ("UA212", "United Airlines", "JFK", "LAX", "2024-07-02 07:30", "2024-07-02 10:55", [(110, 309), (22, 1199), (6, 2380)]),
    ("UA555", "United Airlines", "SFO", "BOS", "2024-07-01 09:45", "2024-07-01 18:20", [(130, 349), (28, 1249), (10, 2590)]),
    ("AS12", "Alaska Airlines", "SEA", "SFO", "2024-07-03 06:50", "2024-07-03 09:05", [(90, 129), (12, 399), (0, 0)]),
    ("WN1890", "Southwest Airlines", "LAX", "SFO", "2024-07-01 11:20", "2024-07-01 12:45", [(143, 89), (0, 0), (0, 0)]),
    ("DL88", "Delta Air Lines", "BOS", "ATL", "2024-07-04 15:00", "2024-07-04 17:55", [(120, 199), (18, 649), (4, 1290)]),
];

fn parse_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").ok()
}

/// A small fixed schedule of US domestic flights in early July 2024.
pub fn sample_inventory() -> Vec<Flight> {
    SEED.iter()
        .filter_map(|(number, airline, origin, destination, departs, arrives, classes)| {
            let seats = [SeatType::Economy, SeatType::Business, SeatType::First]
                .into_iter()
                .zip(classes.iter())
                .filter(|(_, (available, _))| *available > 0)
                .map(|(seat_type, (available, price_usd))| {
                    (
                        seat_type,
                        SeatClass {
                            available: *available,
                            price_usd: *price_usd,
                        },
                    )
                })
                .collect();

            Some(Flight {
                flight_number: number.to_string(),
                airline: airline.to_string(),
                origin: origin.to_string(),
                destination: destination.to_string(),
                departure: parse_time(departs)?,
                arrival: parse_time(arrives)?,
                seats,
            })
        })
        .collect()
}
