use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{list_purchased_courses, purchase_course};
use crate::state::AppState;

/// Purchase routes nested under `/user`; the caller layers the user role check.
pub fn init_purchases_router() -> Router<AppState> {
    Router::new()
        .route("/purchase", post(purchase_course))
        .route("/purchased-courses", get(list_purchased_courses))
}
