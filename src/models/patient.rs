use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::patient::{NewPatient as DomainNewPatient, Patient as DomainPatient};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::patients)]
/// Diesel model for [`crate::domain::patient::Patient`].
pub struct Patient {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub genre: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::patients)]
/// Insertable form of [`Patient`].
pub struct NewPatient<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub birth_date: NaiveDate,
    pub genre: &'a str,
    pub address: Option<&'a str>,
    pub phone_number: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::patients)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Patient`] record. An update replaces the
/// whole row, so a `None` clears the stored value.
pub struct UpdatePatient<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub birth_date: NaiveDate,
    pub genre: &'a str,
    pub address: Option<&'a str>,
    pub phone_number: Option<&'a str>,
}

impl From<Patient> for DomainPatient {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            first_name: patient.first_name,
            last_name: patient.last_name,
            birth_date: patient.birth_date,
            genre: patient.genre,
            address: patient.address,
            phone_number: patient.phone_number,
        }
    }
}

impl<'a> From<&'a DomainNewPatient> for NewPatient<'a> {
    fn from(patient: &'a DomainNewPatient) -> Self {
        Self {
            first_name: patient.first_name.as_str(),
            last_name: patient.last_name.as_str(),
            birth_date: patient.birth_date,
            genre: patient.genre.as_str(),
            address: patient.address.as_deref(),
            phone_number: patient.phone_number.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainPatient> for UpdatePatient<'a> {
    fn from(patient: &'a DomainPatient) -> Self {
        Self {
            first_name: patient.first_name.as_str(),
            last_name: patient.last_name.as_str(),
            birth_date: patient.birth_date,
            genre: patient.genre.as_str(),
            address: patient.address.as_deref(),
            phone_number: patient.phone_number.as_deref(),
        }
    }
}
