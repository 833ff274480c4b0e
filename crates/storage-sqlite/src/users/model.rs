//! Database models for user profiles.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use savemission_core::users::{NewUserProfile, UserProfile};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserProfileDB {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserProfileDB {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<UserProfileDB> for UserProfile {
    fn from(db: UserProfileDB) -> Self {
        Self {
            id: db.id,
            email: db.email,
            display_name: db.display_name,
            created_at: db.created_at.and_utc(),
            updated_at: db.updated_at.and_utc(),
        }
    }
}

impl From<NewUserProfile> for NewUserProfileDB {
    fn from(domain: NewUserProfile) -> Self {
        let created_at = domain.created_at.naive_utc();
        Self {
            id: domain.id,
            email: domain.email,
            display_name: domain.display_name,
            created_at,
            updated_at: created_at,
        }
    }
}
