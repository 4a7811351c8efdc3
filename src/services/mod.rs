use actix_web::{get, HttpResponse, Responder};

pub mod db_models;
pub mod db_utils;
pub mod messages;
pub mod pg_handling;
pub mod repository;

#[get("/")]
pub async fn home_page() -> impl Responder {
    HttpResponse::Ok().body("Restaurant table booking service")
}

// sub-route "/restaurants"
pub mod restaurants_route {
    use actix_web::web::{Data, Path};
    use actix_web::{get, HttpResponse, Responder};

    use crate::services::db_utils::AppState;
    use crate::services::messages::{FetchRestaurantBranches, FetchRestaurants};

    #[get("/all")]
    pub async fn fetch_restaurants(state: Data<AppState>) -> impl Responder {
        match state.pg_db.send(FetchRestaurants).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => {
                tracing::error!("Failed to fetch restaurants: {err}");
                HttpResponse::InternalServerError().json("Unable to retrieve restaurants")
            }
            Err(err) => {
                tracing::error!("Database actor is unreachable: {err}");
                HttpResponse::InternalServerError().json("Unable to retrieve restaurants")
            }
        }
    }

    // An unknown restaurant id is not an error: the response is an empty list.
    #[get("/{restaurant_id}/branches")]
    pub async fn fetch_branches(state: Data<AppState>, path: Path<i32>) -> impl Responder {
        match state.pg_db.send(FetchRestaurantBranches(path.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => {
                tracing::error!("Failed to fetch branches: {err}");
                HttpResponse::InternalServerError().json("Unable to retrieve branches")
            }
            Err(err) => {
                tracing::error!("Database actor is unreachable: {err}");
                HttpResponse::InternalServerError().json("Unable to retrieve branches")
            }
        }
    }
}

// sub-route "/branches"
pub mod branches_route {
    use actix_web::web::{Data, Path, Query};
    use actix_web::{get, HttpResponse, Responder};
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::Deserialize;

    use crate::services::db_utils::AppState;
    use crate::services::messages::{FetchDiningTables, FetchDiningTablesOnDay};

    #[derive(Deserialize)]
    pub struct DiningTablesQuery {
        pub date: Option<String>,
    }

    /// Accepts a plain date or an ISO datetime; the time of day is discarded
    /// before the value reaches the query.
    pub fn parse_day(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
        match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
            Ok(val) => Ok(val.date()),
            Err(_) => NaiveDate::parse_from_str(raw, "%Y-%m-%d"),
        }
    }

    #[get("/{branch_id}/dining-tables")]
    pub async fn fetch_dining_tables(
        state: Data<AppState>,
        path: Path<i32>,
        query: Query<DiningTablesQuery>,
    ) -> impl Responder {
        let branch_id = path.into_inner();

        let day = match query.date.as_deref().map(parse_day).transpose() {
            Ok(val) => val,
            Err(_) => {
                return HttpResponse::BadRequest()
                    .json("Query parameter 'date' is not a valid date")
            }
        };

        let sent = match day {
            Some(day) => state.pg_db.send(FetchDiningTablesOnDay { branch_id, day }).await,
            None => state.pg_db.send(FetchDiningTables(branch_id)).await,
        };

        match sent {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => {
                tracing::error!("Failed to fetch dining tables: {err}");
                HttpResponse::InternalServerError().json("Unable to retrieve dining tables")
            }
            Err(err) => {
                tracing::error!("Database actor is unreachable: {err}");
                HttpResponse::InternalServerError().json("Unable to retrieve dining tables")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::branches_route::parse_day;

    #[test]
    fn date_filter_ignores_time_of_day() {
        let plain = parse_day("2024-05-01").unwrap();
        let start_of_day = parse_day("2024-05-01T00:00:00").unwrap();
        let end_of_day = parse_day("2024-05-01T23:59:59").unwrap();

        assert_eq!(plain, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(start_of_day, plain);
        assert_eq!(end_of_day, plain);
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert!(parse_day("yesterday").is_err());
        assert!(parse_day("2024-13-01").is_err());
        assert!(parse_day("01/05/2024").is_err());
    }
}
