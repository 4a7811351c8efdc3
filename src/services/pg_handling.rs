use actix::Handler;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error};
use diesel::{PgConnection, QueryResult};

use crate::services::db_models::{DiningTableWithTimeSlots, Restaurant, RestaurantBranch};
use crate::services::db_utils::PgActor;
use crate::services::messages::{
    FetchDiningTables, FetchDiningTablesOnDay, FetchRestaurantBranches, FetchRestaurants,
};
use crate::services::repository;

// The connection is scoped to a single handled message and goes back to the
// pool when it drops, on every exit path.
fn establish_connection(
    pool: &Pool<ConnectionManager<PgConnection>>,
) -> Result<PooledConnection<ConnectionManager<PgConnection>>, Error> {
    pool.get().map_err(|_| connection_err())
}

fn connection_err() -> Error {
    Error::DatabaseError(
        DatabaseErrorKind::ClosedConnection,
        Box::new("Failed to establish connection".to_owned()),
    )
}

impl Handler<FetchRestaurants> for PgActor {
    type Result = QueryResult<Vec<Restaurant>>;

    fn handle(&mut self, _msg: FetchRestaurants, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = establish_connection(&self.0)?;

        repository::fetch_restaurants(&mut conn)
    }
}

impl Handler<FetchRestaurantBranches> for PgActor {
    type Result = QueryResult<Vec<RestaurantBranch>>;

    fn handle(&mut self, msg: FetchRestaurantBranches, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = establish_connection(&self.0)?;

        repository::fetch_branches(&mut conn, msg.0)
    }
}

impl Handler<FetchDiningTables> for PgActor {
    type Result = QueryResult<Vec<DiningTableWithTimeSlots>>;

    fn handle(&mut self, msg: FetchDiningTables, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = establish_connection(&self.0)?;

        repository::fetch_dining_tables(&mut conn, msg.0)
    }
}

impl Handler<FetchDiningTablesOnDay> for PgActor {
    type Result = QueryResult<Vec<DiningTableWithTimeSlots>>;

    fn handle(&mut self, msg: FetchDiningTablesOnDay, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = establish_connection(&self.0)?;

        repository::fetch_dining_tables_on_day(&mut conn, msg.branch_id, msg.day)
    }
}
