//! Diesel row types for the `producers` table.
//!
//! Internal to the persistence adapter; the domain only sees
//! [`ProducerRecord`].

use diesel::prelude::*;

use crate::domain::{ProducerDetails, ProducerId, ProducerRecord};

use super::schema::producers;

/// Row read from `producers`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = producers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProducerRow {
    pub id: i64,
    pub document_number: String,
    pub producer_name: String,
    pub farm_name: String,
    pub city: String,
    pub state: String,
    pub total_area: f64,
    pub farmable_area: f64,
    pub vegetation_area: f64,
    pub crops: Vec<String>,
}

impl From<ProducerRow> for ProducerRecord {
    fn from(row: ProducerRow) -> Self {
        let details = ProducerDetails {
            document_number: row.document_number,
            producer_name: row.producer_name,
            farm_name: row.farm_name,
            city: row.city,
            state: row.state,
            total_area: row.total_area,
            farmable_area: row.farmable_area,
            vegetation_area: row.vegetation_area,
            crops: row.crops,
        };
        ProducerRecord::new(ProducerId::new(row.id), details)
    }
}

/// Every writable column; used both to insert and to replace a producer.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = producers)]
pub(crate) struct ProducerWriteRow<'a> {
    pub document_number: &'a str,
    pub producer_name: &'a str,
    pub farm_name: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub total_area: f64,
    pub farmable_area: f64,
    pub vegetation_area: f64,
    pub crops: &'a [String],
}

impl<'a> From<&'a ProducerDetails> for ProducerWriteRow<'a> {
    fn from(details: &'a ProducerDetails) -> Self {
        Self {
            document_number: &details.document_number,
            producer_name: &details.producer_name,
            farm_name: &details.farm_name,
            city: &details.city,
            state: &details.state,
            total_area: details.total_area,
            farmable_area: details.farmable_area,
            vegetation_area: details.vegetation_area,
            crops: &details.crops,
        }
    }
}
