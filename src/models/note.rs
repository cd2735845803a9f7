use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::note::{NewNote as DomainNewNote, Note as DomainNote};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::notes)]
/// Diesel model for [`crate::domain::note::Note`].
pub struct Note {
    pub id: String,
    pub patient_id: i32,
    pub date_time: NaiveDateTime,
    pub content: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::notes)]
/// Insertable form of [`Note`]. The identifier is assigned by the
/// repository before insertion.
pub struct NewNote<'a> {
    pub id: &'a str,
    pub patient_id: i32,
    pub date_time: NaiveDateTime,
    pub content: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::notes)]
/// Data used when updating a [`Note`] record.
pub struct UpdateNote<'a> {
    pub patient_id: i32,
    pub date_time: NaiveDateTime,
    pub content: &'a str,
}

impl<'a> NewNote<'a> {
    #[must_use]
    pub fn from_domain(id: &'a str, note: &'a DomainNewNote) -> Self {
        Self {
            id,
            patient_id: note.patient_id,
            date_time: note.date_time,
            content: note.content.as_str(),
        }
    }
}

impl From<Note> for DomainNote {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            patient_id: note.patient_id,
            date_time: note.date_time,
            content: note.content,
        }
    }
}

impl<'a> From<&'a DomainNote> for UpdateNote<'a> {
    fn from(note: &'a DomainNote) -> Self {
        Self {
            patient_id: note.patient_id,
            date_time: note.date_time,
            content: note.content.as_str(),
        }
    }
}
