pub mod response_handler;
pub mod tour_plan_client;
pub mod transport;

pub use response_handler::validate_response;
pub use tour_plan_client::HttpPlanTransport;
pub use transport::PlanTransport;
