use chrono::NaiveDate;
use diesel::dsl::date;
use diesel::{ExpressionMethods, PgConnection, QueryDsl, QueryResult, RunQueryDsl};

use crate::services::db_models::{
    DiningTable, DiningTableWithTimeSlots, Restaurant, RestaurantBranch, TimeSlot,
};

pub fn fetch_restaurants(conn: &mut PgConnection) -> QueryResult<Vec<Restaurant>> {
    use crate::schema::restaurants::{dsl::restaurants, name};

    restaurants.order(name.asc()).load::<Restaurant>(conn)
}

/// An unknown restaurant id simply yields an empty list.
pub fn fetch_branches(conn: &mut PgConnection, restaurant: i32) -> QueryResult<Vec<RestaurantBranch>> {
    use crate::schema::restaurant_branches::{dsl::restaurant_branches, restaurant_id};

    restaurant_branches
        .filter(restaurant_id.eq(restaurant))
        .load::<RestaurantBranch>(conn)
}

/// Flattens every dining table of the branch against its time slots: a table
/// with N slots contributes N rows. Row order is whatever the store returns.
pub fn fetch_dining_tables(
    conn: &mut PgConnection,
    branch: i32,
) -> QueryResult<Vec<DiningTableWithTimeSlots>> {
    use crate::schema::dining_tables::{dsl::dining_tables, restaurant_branch_id};
    use crate::schema::time_slots::dsl::time_slots;

    let pairs = dining_tables
        .inner_join(time_slots)
        .filter(restaurant_branch_id.eq(branch))
        .load::<(DiningTable, TimeSlot)>(conn)?;

    Ok(pairs
        .into_iter()
        .map(|(table, slot)| DiningTableWithTimeSlots::from_pair(table, slot))
        .collect())
}

/// Same flatten as [`fetch_dining_tables`], restricted to slots whose
/// reservation day (date part only) equals `day`, then ordered by slot id
/// with meal type as the tie-breaker.
pub fn fetch_dining_tables_on_day(
    conn: &mut PgConnection,
    branch: i32,
    day: NaiveDate,
) -> QueryResult<Vec<DiningTableWithTimeSlots>> {
    use crate::schema::dining_tables::{dsl::dining_tables, restaurant_branch_id};
    use crate::schema::time_slots::{dsl::time_slots, reservation_day};

    let pairs = dining_tables
        .inner_join(time_slots)
        .filter(restaurant_branch_id.eq(branch))
        .filter(date(reservation_day).eq(day))
        .load::<(DiningTable, TimeSlot)>(conn)?;

    let mut rows: Vec<_> = pairs
        .into_iter()
        .map(|(table, slot)| DiningTableWithTimeSlots::from_pair(table, slot))
        .collect();
    order_by_slot_then_meal(&mut rows);

    Ok(rows)
}

pub fn order_by_slot_then_meal(rows: &mut [DiningTableWithTimeSlots]) {
    rows.sort_by(|a, b| {
        a.time_slot_id
            .cmp(&b.time_slot_id)
            .then_with(|| a.meal_type.cmp(&b.meal_type))
    });
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::order_by_slot_then_meal;
    use crate::services::db_models::DiningTableWithTimeSlots;

    fn row(slot_id: i32, meal: &str) -> DiningTableWithTimeSlots {
        DiningTableWithTimeSlots {
            branch_id: 1,
            reservation_day: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            table_name: Some("T1".to_owned()),
            capacity: 4,
            meal_type: meal.to_owned(),
            table_status: "Available".to_owned(),
            time_slot_id: slot_id,
        }
    }

    #[test]
    fn day_rows_are_ordered_by_slot_id() {
        let mut rows = vec![row(11, "Dinner"), row(10, "Lunch")];

        order_by_slot_then_meal(&mut rows);

        let slots: Vec<_> = rows.iter().map(|r| r.time_slot_id).collect();
        assert_eq!(slots, vec![10, 11]);
        assert_eq!(rows[0].meal_type, "Lunch");
        assert_eq!(rows[1].meal_type, "Dinner");
    }

    #[test]
    fn duplicate_slot_ids_fall_back_to_meal_type() {
        // Slot ids are unique in the store; duplicates here only exercise
        // the tie-breaker.
        let mut rows = vec![row(7, "Lunch"), row(7, "Breakfast"), row(7, "Dinner")];

        order_by_slot_then_meal(&mut rows);

        let meals: Vec<_> = rows.iter().map(|r| r.meal_type.as_str()).collect();
        assert_eq!(meals, vec!["Breakfast", "Dinner", "Lunch"]);
    }
}
