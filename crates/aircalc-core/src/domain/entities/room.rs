use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::Insolation};

/// Raw room parameters as entered by the user.
///
/// The numeric fields stay text: the form only insists they are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomForm {
    pub room_area: String,
    pub ceiling_height: String,
    pub insolation: Insolation,
    pub has_mansard: bool,
}

impl RoomForm {
    pub fn new(room_area: impl Into<String>, ceiling_height: impl Into<String>) -> Self {
        Self {
            room_area: room_area.into(),
            ceiling_height: ceiling_height.into(),
            ..Self::default()
        }
    }

    pub fn insolation(mut self, insolation: Insolation) -> Self {
        self.insolation = insolation;
        self
    }

    pub fn mansard(mut self, has_mansard: bool) -> Self {
        self.has_mansard = has_mansard;
        self
    }

    /// Check the required fields and produce the request sent to the host.
    pub fn validate(&self) -> Result<RoomRequest, DomainError> {
        let room_area = self.room_area.trim();
        let ceiling_height = self.ceiling_height.trim();

        let mut missing = Vec::new();
        if room_area.is_empty() {
            missing.push("room area");
        }
        if ceiling_height.is_empty() {
            missing.push("ceiling height");
        }
        if !missing.is_empty() {
            return Err(DomainError::MissingRoomParameters { missing });
        }

        Ok(RoomRequest {
            room_area: room_area.to_string(),
            ceiling_height: ceiling_height.to_string(),
            insolation: self.insolation,
            has_mansard: self.has_mansard,
        })
    }
}

/// Validated room parameters, in the host's camelCase shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRequest {
    pub room_area: String,
    pub ceiling_height: String,
    pub insolation: Insolation,
    pub has_mansard: bool,
}
