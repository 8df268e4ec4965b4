//! Response envelopes shared by the entity handlers

use serde::Serialize;

/// `{"data": ...}` wrapper used by the menu, role and menu-role
/// endpoints. Listing endpoints serialize an empty vec as `[]`,
/// never null.
#[derive(Debug, Serialize)]
pub struct Data<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// `{"message": ...}` body for successful mutations that return no
/// entity.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
