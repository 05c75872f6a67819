use serde_json::Value;

use crate::{error::FetchError, types::ItineraryPlan};

/// Accept a remote body as an [`ItineraryPlan`].
///
/// The only shape requirement is a non-null `itinerary`; everything else is
/// taken as sent. A field of the wrong type is reported with its JSON path.
pub fn validate_response(payload: Value) -> Result<ItineraryPlan, FetchError> {
    match payload.get("itinerary") {
        Some(itinerary) if !itinerary.is_null() => {}
        _ => return Err(FetchError::invalid_format()),
    }

    serde_path_to_error::deserialize(payload).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        FetchError::Schema(format!(
            "{} at {}: {}",
            FetchError::INVALID_FORMAT,
            location,
            err.inner()
        ))
    })
}
