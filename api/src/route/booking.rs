use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    register_booking, register_review, show_booking, show_booking_count, show_booking_list,
    show_client_booking_list, show_tour_guide_availability,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let bookings_routers = Router::new()
        .route("/", post(register_booking))
        .route("/", get(show_booking_list))
        .route("/count", get(show_booking_count))
        .route("/:booking_id", get(show_booking))
        .route("/:booking_id/reviews", post(register_review));

    let clients_routers =
        Router::new().route("/:client_id/bookings", get(show_client_booking_list));

    let tour_guides_routers = Router::new().route(
        "/:tour_guide_id/availability",
        get(show_tour_guide_availability),
    );

    Router::new()
        .nest("/bookings", bookings_routers)
        .nest("/clients", clients_routers)
        .nest("/tour-guides", tour_guides_routers)
}
