//! JSON Schema documents for the itinerary wire contract.

use schemars::{schema::RootSchema, schema_for};
use serde_json::Value;

use crate::{
    error::Result,
    types::{ItineraryPlan, ItineraryRequest},
};

/// Schema of the response body expected from the itinerary service.
pub fn plan_schema() -> Result<Value> {
    to_value(schema_for!(ItineraryPlan))
}

/// Schema of the request body sent to the itinerary service.
pub fn request_schema() -> Result<Value> {
    to_value(schema_for!(ItineraryRequest))
}

fn to_value(root: RootSchema) -> Result<Value> {
    Ok(serde_json::to_value(root)?)
}
