use crate::api::{
    extract_text, first_part, GenerateContentResponse, MalformedResponse, ModelBackend, Part,
};
use crate::chat::ChatSession;
use crate::error::Result;
use crate::flights::{is_empty_result, BookingRequest, FlightService, SearchRequest};
use crate::tools::FlightTool;
use crate::ui::{trace, warn};
use serde_json::{Map, Value};

/// What one model response resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Text for the user, either the model's own or a tool failure message.
    Reply(String),
    /// The model sent nothing back.
    Empty,
    Malformed(MalformedResponse),
}

impl DispatchOutcome {
    pub fn into_text(self) -> Option<String> {
        match self {
            DispatchOutcome::Reply(text) => Some(text),
            _ => None,
        }
    }
}

/// Turn one model response into at most one reply.
///
/// A function call is executed against `flights` and its result sent back
/// through `session`; the text of that follow-up is the reply. There is at
/// most one follow-up per call and nothing is retried.
pub async fn handle_response<B, F>(
    session: &mut ChatSession<B>,
    flights: &F,
    response: Option<GenerateContentResponse>,
) -> Result<DispatchOutcome>
where
    B: ModelBackend,
    F: FlightService + ?Sized,
{
    let Some(response) = response else {
        warn("Response is empty");
        return Ok(DispatchOutcome::Empty);
    };

    let part = match first_part(&response) {
        Ok(part) => part.clone(),
        Err(reason) => {
            warn(reason.to_string());
            return Ok(DispatchOutcome::Malformed(reason));
        }
    };

    if let Some(call) = part.function_call {
        let Some(tool) = FlightTool::from_name(&call.name) else {
            let reason = MalformedResponse::UnknownFunction(call.name);
            warn(reason.to_string());
            return Ok(DispatchOutcome::Malformed(reason));
        };

        let params = call.args;
        trace(
            session.verbose(),
            format!("Selected tool: '{}' with args: {}", tool.name(), Value::Object(params.clone())),
        );

        return call_tool(session, flights, tool, params).await;
    }

    match part.text {
        Some(text) if !text.trim().is_empty() => Ok(DispatchOutcome::Reply(text)),
        _ => {
            let reason = MalformedResponse::NoText;
            warn(reason.to_string());
            Ok(DispatchOutcome::Malformed(reason))
        }
    }
}

async fn call_tool<B, F>(
    session: &mut ChatSession<B>,
    flights: &F,
    tool: FlightTool,
    params: Map<String, Value>,
) -> Result<DispatchOutcome>
where
    B: ModelBackend,
    F: FlightService + ?Sized,
{
    let params = Value::Object(params);
    let result = match tool {
        FlightTool::SearchFlights => match serde_json::from_value::<SearchRequest>(params) {
            Ok(request) => flights.search_flights(&request),
            Err(e) => {
                trace(session.verbose(), format!("Bad search arguments: {}", e));
                None
            }
        },
        FlightTool::BookFlights => match serde_json::from_value::<BookingRequest>(params) {
            Ok(request) => flights.book_flights(&request),
            Err(e) => {
                trace(session.verbose(), format!("Bad booking arguments: {}", e));
                None
            }
        },
    };

    let Some(result) = result.filter(|value| !is_empty_result(value)) else {
        trace(session.verbose(), format!("Tool '{}' returned nothing", tool.name()));
        return Ok(DispatchOutcome::Reply(tool.failure_message().to_string()));
    };

    trace(
        session.verbose(),
        format!("Sending '{}' result back to the model", tool.name()),
    );
    let followup = session
        .send_message(vec![Part::function_response(tool.name(), result)])
        .await?;

    let Some(followup) = followup else {
        warn("Follow-up response is empty");
        return Ok(DispatchOutcome::Empty);
    };

    match extract_text(&followup) {
        Ok(text) => Ok(DispatchOutcome::Reply(text)),
        Err(reason) => {
            warn(reason.to_string());
            Ok(DispatchOutcome::Malformed(reason))
        }
    }
}
