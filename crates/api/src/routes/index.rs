//! Root Route

use axum::response::Html;

/// List the available API routes
pub async fn index() -> Html<&'static str> {
    Html(
        "Available Routes:<br/>\
         /api/v1.0/precipitation<br/>\
         /api/v1.0/stations<br/>\
         /api/v1.0/tobs<br/>\
         /api/v1.0/&lt;start&gt;<br/>\
         /api/v1.0/&lt;start&gt;/&lt;end&gt;<br/>",
    )
}
