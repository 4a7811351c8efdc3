use chrono::{NaiveDate, NaiveDateTime};
use diesel::Queryable;
use serde::Serialize;

#[derive(Queryable, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Queryable, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantBranch {
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Queryable, Debug)]
pub struct DiningTable {
    pub id: i32,
    pub restaurant_branch_id: i32,
    pub table_name: Option<String>,
    pub capacity: i32,
}

#[derive(Queryable, Debug)]
pub struct TimeSlot {
    pub id: i32,
    pub dining_table_id: i32,
    pub reservation_day: NaiveDateTime,
    pub meal_type: String,
    pub table_status: String,
}

/// One dining table joined to one of its time slots. Built per query result
/// row and never persisted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableWithTimeSlots {
    pub branch_id: i32,
    pub reservation_day: NaiveDate,
    pub table_name: Option<String>,
    pub capacity: i32,
    pub meal_type: String,
    pub table_status: String,
    pub time_slot_id: i32,
}

impl DiningTableWithTimeSlots {
    /// The stored reservation day keeps a time component; the projection
    /// always discards it.
    pub fn from_pair(table: DiningTable, slot: TimeSlot) -> Self {
        Self {
            branch_id: table.restaurant_branch_id,
            reservation_day: slot.reservation_day.date(),
            table_name: table.table_name,
            capacity: table.capacity,
            meal_type: slot.meal_type,
            table_status: slot.table_status,
            time_slot_id: slot.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::{DiningTable, DiningTableWithTimeSlots, Restaurant, TimeSlot};

    fn table() -> DiningTable {
        DiningTable {
            id: 3,
            restaurant_branch_id: 1,
            table_name: Some("T1".to_owned()),
            capacity: 4,
        }
    }

    fn slot(id: i32, at: &str, meal: &str) -> TimeSlot {
        TimeSlot {
            id,
            dining_table_id: 3,
            reservation_day: NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M:%S").unwrap(),
            meal_type: meal.to_owned(),
            table_status: "Available".to_owned(),
        }
    }

    #[test]
    fn projection_truncates_reservation_day() {
        let start_of_day =
            DiningTableWithTimeSlots::from_pair(table(), slot(10, "2024-05-01T00:00:00", "Lunch"));
        let end_of_day =
            DiningTableWithTimeSlots::from_pair(table(), slot(10, "2024-05-01T23:59:59", "Lunch"));

        assert_eq!(
            start_of_day.reservation_day,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(start_of_day.reservation_day, end_of_day.reservation_day);
    }

    #[test]
    fn projection_yields_one_row_per_slot() {
        let slots = vec![
            slot(10, "2024-05-01T12:00:00", "Lunch"),
            slot(11, "2024-05-01T19:00:00", "Dinner"),
        ];

        let rows: Vec<_> = slots
            .into_iter()
            .map(|s| DiningTableWithTimeSlots::from_pair(table(), s))
            .collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].time_slot_id, 10);
        assert_eq!(rows[1].time_slot_id, 11);
        assert!(rows.iter().all(|r| r.branch_id == 1 && r.capacity == 4));
    }

    #[test]
    fn dto_serializes_with_camel_case_keys_and_nulls() {
        let value = serde_json::to_value(Restaurant {
            id: 1,
            name: "Nonna".to_owned(),
            address: "12 Via Roma".to_owned(),
            phone: None,
            email: Some("book@nonna.example".to_owned()),
            image_url: None,
        })
        .unwrap();

        assert_eq!(value["name"], "Nonna");
        assert_eq!(value["email"], "book@nonna.example");
        assert_eq!(value["imageUrl"], serde_json::Value::Null);
        assert!(value.get("image_url").is_none());
    }
}
