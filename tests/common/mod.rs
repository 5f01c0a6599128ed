#![allow(dead_code)]

use async_trait::async_trait;
use gemini_flights::api::{GenerateContentRequest, GenerateContentResponse, ModelBackend};
use gemini_flights::error::{FlightsError, Result};
use gemini_flights::flights::{BookingRequest, FlightService, SearchRequest};
use gemini_flights::tools::flight_tools;
use gemini_flights::ChatSession;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Model backend that replays canned responses and records every request.
/// Once the script runs out it answers with an absent response.
pub struct ScriptedModel {
    responses: Mutex<VecDeque<Option<GenerateContentResponse>>>,
    requests: Mutex<Vec<GenerateContentRequest>>,
}

impl ScriptedModel {
    pub fn new(responses: Vec<Option<GenerateContentResponse>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelBackend for ScriptedModel {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Option<GenerateContentResponse>> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.responses.lock().unwrap().pop_front().flatten())
    }
}

/// Backend whose every call fails like a rejected API request.
pub struct FailingModel;

#[async_trait]
impl ModelBackend for FailingModel {
    async fn generate_content(
        &self,
        _request: &GenerateContentRequest,
    ) -> Result<Option<GenerateContentResponse>> {
        Err(FlightsError::ApiError {
            status: 401,
            message: "Request had invalid authentication credentials.".to_string(),
        })
    }
}

/// Flight service with fixed answers that remembers what it was asked.
#[derive(Default)]
pub struct StubFlights {
    pub search_result: Option<Value>,
    pub booking_result: Option<Value>,
    pub searches: Mutex<Vec<SearchRequest>>,
    pub bookings: Mutex<Vec<BookingRequest>>,
}

impl FlightService for StubFlights {
    fn search_flights(&self, request: &SearchRequest) -> Option<Value> {
        self.searches.lock().unwrap().push(request.clone());
        self.search_result.clone()
    }

    fn book_flights(&self, request: &BookingRequest) -> Option<Value> {
        self.bookings.lock().unwrap().push(request.clone());
        self.booking_result.clone()
    }
}

pub fn response(value: Value) -> Option<GenerateContentResponse> {
    Some(serde_json::from_value(value).unwrap())
}

pub fn text_response(text: &str) -> Option<GenerateContentResponse> {
    response(json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    }))
}

pub fn function_call_response(name: &str, args: Value) -> Option<GenerateContentResponse> {
    response(json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "functionCall": { "name": name, "args": args } }]
            },
            "finishReason": "STOP"
        }]
    }))
}

pub fn session<B: ModelBackend>(backend: B) -> ChatSession<B> {
    ChatSession::new(backend, vec![flight_tools()], None)
}
