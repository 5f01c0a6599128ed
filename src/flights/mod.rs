mod inventory;
mod manager;

pub use inventory::{sample_inventory, Flight, SeatClass, SeatType};
pub use manager::FlightManager;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Arguments of a `search_flights` call.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
}

/// Arguments of a `book_flights` call.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BookingRequest {
    pub flight_number: String,
    pub seat_type: String,
    #[serde(deserialize_with = "seat_count")]
    pub num_seats: u32,
}

/// Backing lookups for the two flight tools.
///
/// `None` means the operation failed or found nothing.
pub trait FlightService {
    fn search_flights(&self, request: &SearchRequest) -> Option<Value>;

    fn book_flights(&self, request: &BookingRequest) -> Option<Value>;
}

/// Whether a tool result should be reported as a failure.
pub fn is_empty_result(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        Value::Number(_) => false,
    }
}

// Models send counts as integers, floats ("2.0") or strings ("2").
#[derive(Deserialize)]
#[serde(untagged)]
enum SeatCount {
    Integer(u32),
    Float(f64),
    Text(String),
}

fn seat_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match SeatCount::deserialize(deserializer)? {
        SeatCount::Integer(n) => Ok(n),
        SeatCount::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => {
            Ok(f as u32)
        }
        SeatCount::Float(f) => Err(D::Error::custom(format!("invalid seat count {}", f))),
        SeatCount::Text(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| D::Error::custom(format!("invalid seat count '{}'", s))),
    }
}
