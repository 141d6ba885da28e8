//! Draft reminder held by the save screen

use super::{MapSelection, PointOfInterest, Reminder};

/// Unsaved form state for a reminder being created
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftReminder {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub selected_poi: Option<PointOfInterest>,
}

impl DraftReminder {
    /// Copy the picked place into the draft
    pub fn apply_selection(&mut self, selection: &MapSelection) {
        let lat_lng = selection.lat_lng();
        self.location = Some(selection.label());
        self.latitude = Some(lat_lng.latitude);
        self.longitude = Some(lat_lng.longitude);
        self.selected_poi = selection.poi().cloned();
    }

    /// Build a reminder from the draft with a freshly generated id
    #[must_use]
    pub fn to_reminder(&self) -> Reminder {
        Reminder::new(
            self.title.clone(),
            self.description.clone(),
            self.location.clone(),
            self.latitude,
            self.longitude,
        )
    }

    /// Whether every field is unset
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
