// src/export/model.rs

use crate::models::TrajectoryRow;
use crate::models::trajectory::HEADERS;
use crate::utils::time::format_ts;

/// Header for XLSX (CSV/JSON take theirs from serde).
pub(crate) fn get_headers() -> Vec<&'static str> {
    HEADERS.to_vec()
}

/// Flatten a row to strings, in header order.
pub(crate) fn row_to_cells(r: &TrajectoryRow) -> Vec<String> {
    vec![
        r.visit_id.clone(),
        r.customer_no.clone(),
        r.weekday.to_string(),
        r.dayname.to_string(),
        format_ts(&r.timestamp),
        r.location.to_string(),
        r.location_next.to_string(),
    ]
}
