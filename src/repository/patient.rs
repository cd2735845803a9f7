use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::patient::{NewPatient, Patient};
use crate::repository::errors::RepositoryResult;
use crate::repository::{PatientListQuery, PatientReader, PatientWriter};

/// Diesel implementation of the patient store.
pub struct DieselPatientRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselPatientRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl PatientReader for DieselPatientRepository<'_> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Patient>> {
        use crate::models::patient::Patient as DbPatient;
        use crate::schema::patients;

        let mut conn = self.pool.get()?;
        let patient = patients::table
            .find(id)
            .first::<DbPatient>(&mut conn)
            .optional()?;

        Ok(patient.map(Into::into))
    }

    fn list(&self, query: PatientListQuery) -> RepositoryResult<(usize, Vec<Patient>)> {
        use crate::models::patient::Patient as DbPatient;
        use crate::schema::patients;

        let mut conn = self.pool.get()?;

        let total: i64 = patients::table.count().get_result(&mut conn)?;

        let mut statement = patients::table.order(patients::id.asc()).into_boxed();

        if let Some(pagination) = &query.pagination {
            statement = statement
                .limit(pagination.per_page as i64)
                .offset((pagination.page * pagination.per_page) as i64);
        }

        let items = statement
            .load::<DbPatient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, items))
    }
}

impl PatientWriter for DieselPatientRepository<'_> {
    fn create(&self, new_patient: &NewPatient) -> RepositoryResult<Patient> {
        use crate::models::patient::{NewPatient as DbNewPatient, Patient as DbPatient};
        use crate::schema::patients;

        let mut conn = self.pool.get()?;
        let insertable: DbNewPatient = new_patient.into();
        let created = diesel::insert_into(patients::table)
            .values(&insertable)
            .get_result::<DbPatient>(&mut conn)?;

        Ok(created.into())
    }

    fn update(&self, patient: &Patient) -> RepositoryResult<Patient> {
        use crate::models::patient::{Patient as DbPatient, UpdatePatient as DbUpdatePatient};
        use crate::schema::patients;

        let mut conn = self.pool.get()?;
        let changes: DbUpdatePatient = patient.into();
        let updated = diesel::update(patients::table.find(patient.id))
            .set(&changes)
            .get_result::<DbPatient>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete(&self, patient_id: i32) -> RepositoryResult<()> {
        use crate::schema::patients;

        let mut conn = self.pool.get()?;
        diesel::delete(patients::table.find(patient_id)).execute(&mut conn)?;
        Ok(())
    }
}
