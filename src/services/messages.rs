use actix::Message;
use chrono::NaiveDate;
use diesel::QueryResult;

use crate::services::db_models::{DiningTableWithTimeSlots, Restaurant, RestaurantBranch};

#[derive(Message)]
#[rtype(result = "QueryResult<Vec<Restaurant>>")]
pub struct FetchRestaurants;

#[derive(Message)]
#[rtype(result = "QueryResult<Vec<RestaurantBranch>>")]
pub struct FetchRestaurantBranches(pub i32);

#[derive(Message)]
#[rtype(result = "QueryResult<Vec<DiningTableWithTimeSlots>>")]
pub struct FetchDiningTables(pub i32);

#[derive(Message)]
#[rtype(result = "QueryResult<Vec<DiningTableWithTimeSlots>>")]
pub struct FetchDiningTablesOnDay {
    pub branch_id: i32,
    pub day: NaiveDate,
}
