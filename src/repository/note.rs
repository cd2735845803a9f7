use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::note::{NewNote, Note};
use crate::repository::errors::RepositoryResult;
use crate::repository::{NoteReader, NoteWriter};

/// Diesel implementation of the note store. Identifiers are random UUIDs
/// assigned at insertion time.
pub struct DieselNoteRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselNoteRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl NoteReader for DieselNoteRepository<'_> {
    fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Note>> {
        use crate::models::note::Note as DbNote;
        use crate::schema::notes;

        let mut conn = self.pool.get()?;
        let note = notes::table.find(id).first::<DbNote>(&mut conn).optional()?;

        Ok(note.map(Into::into))
    }

    fn list_by_patient(&self, patient_id: i32) -> RepositoryResult<Vec<Note>> {
        use crate::models::note::Note as DbNote;
        use crate::schema::notes;

        let mut conn = self.pool.get()?;
        let items = notes::table
            .filter(notes::patient_id.eq(patient_id))
            .order(notes::date_time.desc())
            .load::<DbNote>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl NoteWriter for DieselNoteRepository<'_> {
    fn create(&self, new_note: &NewNote) -> RepositoryResult<Note> {
        use crate::models::note::{NewNote as DbNewNote, Note as DbNote};
        use crate::schema::notes;

        let mut conn = self.pool.get()?;
        let id = Uuid::new_v4().to_string();
        let insertable = DbNewNote::from_domain(&id, new_note);
        let created = diesel::insert_into(notes::table)
            .values(&insertable)
            .get_result::<DbNote>(&mut conn)?;

        Ok(created.into())
    }

    fn update(&self, note: &Note) -> RepositoryResult<Note> {
        use crate::models::note::{Note as DbNote, UpdateNote as DbUpdateNote};
        use crate::schema::notes;

        let mut conn = self.pool.get()?;
        let changes: DbUpdateNote = note.into();
        let updated = diesel::update(notes::table.find(&note.id))
            .set(&changes)
            .get_result::<DbNote>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete(&self, note_id: &str) -> RepositoryResult<()> {
        use crate::schema::notes;

        let mut conn = self.pool.get()?;
        diesel::delete(notes::table.find(note_id)).execute(&mut conn)?;
        Ok(())
    }
}
