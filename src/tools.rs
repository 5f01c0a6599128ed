//! Function declarations the model is allowed to call.

use crate::api::{FunctionDeclaration, Tool};
use serde_json::json;

pub const SEARCH_FLIGHTS: &str = "search_flights";
pub const BOOK_FLIGHTS: &str = "book_flights";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightTool {
    SearchFlights,
    BookFlights,
}

impl FlightTool {
    pub const ALL: [FlightTool; 2] = [FlightTool::SearchFlights, FlightTool::BookFlights];

    pub fn name(&self) -> &'static str {
        match self {
            FlightTool::SearchFlights => SEARCH_FLIGHTS,
            FlightTool::BookFlights => BOOK_FLIGHTS,
        }
    }

    /// Exact match on the declared name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Reply shown to the user when the flight service returns nothing.
    pub fn failure_message(&self) -> &'static str {
        match self {
            FlightTool::SearchFlights => "Search Failed",
            FlightTool::BookFlights => "Booking failed",
        }
    }

    pub fn declaration(&self) -> FunctionDeclaration {
        match self {
            FlightTool::SearchFlights => FunctionDeclaration {
                name: SEARCH_FLIGHTS.to_string(),
                description:
                    "Tool for searching a flight with origin, destination, and departure date"
                        .to_string(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "origin": {
                            "type": "string",
                            "description": "The airport of departure for the flight given in airport code such as LAX, SFO, BOS, etc."
                        },
                        "destination": {
                            "type": "string",
                            "description": "The airport of destination for the flight given in airport code such as LAX, SFO, BOS, etc."
                        },
                        "departure_date": {
                            "type": "string",
                            "format": "date",
                            "description": "The date of departure for the flight in YYYY-MM-DD format"
                        }
                    },
                    "required": ["origin", "destination", "departure_date"]
                }),
            },
            FlightTool::BookFlights => FunctionDeclaration {
                name: BOOK_FLIGHTS.to_string(),
                description:
                    "Tool for booking a flight with flight_number, seat_type, and number_of_seats"
                        .to_string(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "flight_number": {
                            "type": "string",
                            "description": "The flight number of the flight that is booked."
                        },
                        "seat_type": {
                            "type": "string",
                            "description": "The type of seat that is booked: economy, business or first."
                        },
                        "num_seats": {
                            "type": "integer",
                            "description": "The number of seats that are booked."
                        }
                    },
                    "required": ["flight_number", "seat_type", "num_seats"]
                }),
            },
        }
    }
}

/// The single tool bundle sent with every request.
pub fn flight_tools() -> Tool {
    Tool {
        function_declarations: FlightTool::ALL.iter().map(|t| t.declaration()).collect(),
    }
}
