//! User entity - document stored in the `users` collection

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    // assigned by the store on insert
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime,
    pub last_activity: DateTime,
    pub is_online: bool,
}
