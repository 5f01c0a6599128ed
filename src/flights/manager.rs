use super::inventory::{sample_inventory, Flight, SeatType};
use super::{BookingRequest, FlightService, SearchRequest};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory flight schedule with seat availability.
pub struct FlightManager {
    flights: Mutex<Vec<Flight>>,
}

impl FlightManager {
    pub fn new(flights: Vec<Flight>) -> Self {
        Self {
            flights: Mutex::new(flights),
        }
    }

    pub fn with_sample_inventory() -> Self {
        Self::new(sample_inventory())
    }
}

impl Default for FlightManager {
    fn default() -> Self {
        Self::with_sample_inventory()
    }
}

impl FlightService for FlightManager {
    fn search_flights(&self, request: &SearchRequest) -> Option<Value> {
        let date = NaiveDate::parse_from_str(request.departure_date.trim(), "%Y-%m-%d").ok()?;
        let origin = request.origin.trim();
        let destination = request.destination.trim();

        let flights = self.flights.lock().ok()?;
        let matches: Vec<Value> = flights
            .iter()
            .filter(|f| {
                f.origin.eq_ignore_ascii_case(origin)
                    && f.destination.eq_ignore_ascii_case(destination)
                    && f.departs_on(date)
            })
            .filter_map(|f| serde_json::to_value(f).ok())
            .collect();

        if matches.is_empty() {
            None
        } else {
            Some(Value::Array(matches))
        }
    }

    fn book_flights(&self, request: &BookingRequest) -> Option<Value> {
        if request.num_seats == 0 {
            return None;
        }
        let seat_type: SeatType = request.seat_type.parse().ok()?;

        let mut flights = self.flights.lock().ok()?;
        let flight = flights
            .iter_mut()
            .find(|f| f.flight_number.eq_ignore_ascii_case(request.flight_number.trim()))?;
        let class = flight.seats.get_mut(&seat_type)?;
        if class.available < request.num_seats {
            return None;
        }
        class.available -= request.num_seats;

        Some(json!({
            "confirmation_id": Uuid::new_v4().to_string(),
            "flight_number": flight.flight_number,
            "airline": flight.airline,
            "origin": flight.origin,
            "destination": flight.destination,
            "departure_time": flight.departure,
            "seat_type": seat_type,
            "num_seats": request.num_seats,
            "total_price_usd": class.price_usd * request.num_seats,
            "seats_remaining": class.available,
        }))
    }
}
