use showcase_core::{PhaseSchedule, Stepping};

/// Runtime viewer settings, read from the model container's data attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub model_url: String,
    pub schedule: PhaseSchedule,
    pub stepping: Stepping,
}

impl ViewerConfig {
    pub fn from_attributes(model_url: Option<String>, schedule: Option<String>) -> Self {
        let model_url = model_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| crate::constants::DEFAULT_MODEL_URL.to_string());
        Self {
            model_url,
            schedule: parse_schedule(schedule.as_deref()),
            stepping: Stepping::default(),
        }
    }
}

/// `complete` runs every motion to its end; anything else keeps the timed tour.
pub fn parse_schedule(value: Option<&str>) -> PhaseSchedule {
    match value.map(str::trim) {
        Some("complete") => PhaseSchedule::until_complete(),
        Some("timed") | None => PhaseSchedule::default(),
        Some(other) => {
            log::warn!("[viewer] unknown demo schedule {:?}; using timed", other);
            PhaseSchedule::default()
        }
    }
}
