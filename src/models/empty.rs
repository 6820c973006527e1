use serde::Serialize;

/// View model for templates that take no data.
#[derive(Debug, Serialize)]
pub struct Empty {}
