//! Landing page listing the available routes

use axum::response::Html;

/// Route overview served at `/`
pub async fn home() -> Html<&'static str> {
    Html(
        "<br/>\
         Welcome to the Hawaiian Weather Center!<br/><br/>\
         Available Routes:<br/>\
         /api/v1.0/precipitation<br/>\
         Returns precipitation data for the previous year<br/><br/>\
         /api/v1.0/stations<br/>\
         Returns a list of weather stations<br/><br/>\
         /api/v1.0/tobs<br/>\
         Returns observed temperatures from the previous year<br/><br/>\
         /api/v1.0/[start]/[end]<br/>\
         Returns the minimum, average, and maximum temperatures for a given date range<br/>\
         If no end date is provided, all dates from the start date through today are included<br/>",
    )
}
