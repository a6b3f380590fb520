use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use alignment::config::ConfigStore;
use alignment::hour_angle::AlignmentState;
use alignment::observer::ObserverLocation;
use alignment::reticle::ReticleOrientation;

use crate::model::{CoordinateField, RedrawTicker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    Latitude,
    Longitude,
}

impl Coordinate {
    pub fn label(self) -> &'static str {
        match self {
            Coordinate::Latitude => "Latitude",
            Coordinate::Longitude => "Longitude",
        }
    }
}

#[derive(Debug)]
pub struct AppData {
    pub config_store: ConfigStore,
    pub location: ObserverLocation,
    pub orientation: ReticleOrientation,
    pub latitude_field: CoordinateField,
    pub longitude_field: CoordinateField,
    pub alignment: AlignmentState,
    pub status: String,

    ticker: RedrawTicker,
}

impl AppData {
    pub fn new(config_store: ConfigStore) -> Self {
        let config = config_store.load_config();
        tracing::info!("Loaded observer {}", config.observer);

        Self {
            latitude_field: CoordinateField::new(config.observer.latitude),
            longitude_field: CoordinateField::new(config.observer.longitude),
            alignment: AlignmentState::compute(&config.observer, Utc::now()),
            location: config.observer,
            orientation: config.orientation,
            status: String::new(),
            config_store,
            ticker: RedrawTicker::default(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    pub fn refresh(&mut self, now: DateTime<Utc>) {
        self.alignment = AlignmentState::compute(&self.location, now);
    }

    /// Recomputes when the redraw interval has elapsed and returns how long
    /// to wait before the next repaint.
    pub fn tick(&mut self, now: Instant) -> Duration {
        if self.ticker.poll(now) {
            self.refresh(Utc::now());
        }

        self.ticker.until_next(now)
    }

    pub fn field_mut(&mut self, coordinate: Coordinate) -> &mut CoordinateField {
        match coordinate {
            Coordinate::Latitude => &mut self.latitude_field,
            Coordinate::Longitude => &mut self.longitude_field,
        }
    }

    /// Applies the field text after an edit. Invalid text leaves the last
    /// valid location in effect and is not persisted.
    pub fn coordinate_edited(&mut self, coordinate: Coordinate) {
        let value = match self.field_mut(coordinate).parse() {
            Ok(value) => value,
            Err(err) => {
                self.set_status(format!("{}: {err}", coordinate.label()));
                return;
            }
        };

        match coordinate {
            Coordinate::Latitude => self.location.latitude = value,
            Coordinate::Longitude => self.location.longitude = value,
        }

        self.refresh(Utc::now());
        self.persist_location();
    }

    pub fn set_orientation(&mut self, orientation: ReticleOrientation) {
        if self.orientation == orientation {
            return;
        }

        self.orientation = orientation;
        if let Err(err) = self.config_store.save_orientation(orientation) {
            tracing::error!("Failed to save reticle orientation: {err:#}");
            self.set_status(format!("Save failed: {err}"));
        }
    }

    fn persist_location(&mut self) {
        match self.config_store.save(&self.location) {
            Ok(()) => self.set_status(format!(
                "Saved to {}",
                self.config_store.path().display()
            )),
            Err(err) => {
                tracing::error!("Failed to save observer location: {err:#}");
                self.set_status(format!("Save failed: {err}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_in(dir: &tempfile::TempDir) -> AppData {
        AppData::new(ConfigStore::new(dir.path().join("polarfinder.ini")))
    }

    #[test]
    fn starts_from_saved_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("polarfinder.ini"));
        store.save(&ObserverLocation::new(47.37, 8.54)).unwrap();

        let app = AppData::new(store);

        assert_eq!(app.location, ObserverLocation::new(47.37, 8.54));
        assert_eq!(app.latitude_field.text, "47.37");
        assert_eq!(app.longitude_field.text, "8.54");
    }

    #[test]
    fn valid_edit_is_persisted_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        app.longitude_field.text = "-122.42".to_string();
        app.coordinate_edited(Coordinate::Longitude);

        assert_eq!(app.location.longitude, -122.42);
        assert_eq!(
            app.config_store.load(),
            ObserverLocation::new(0.0, -122.42)
        );
        assert!(app.status.starts_with("Saved to"));
    }

    #[test]
    fn invalid_edit_keeps_last_valid_location() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        app.latitude_field.text = "51.5".to_string();
        app.coordinate_edited(Coordinate::Latitude);

        app.latitude_field.text = "51.5N".to_string();
        app.coordinate_edited(Coordinate::Latitude);

        assert_eq!(app.location.latitude, 51.5);
        assert!(!app.latitude_field.is_valid());
        assert_eq!(app.config_store.load().latitude, 51.5);
        assert!(app.status.starts_with("Latitude:"));
    }

    #[test]
    fn edit_recomputes_alignment() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        let before = app.alignment.local_sidereal_time;

        app.longitude_field.text = "90".to_string();
        app.coordinate_edited(Coordinate::Longitude);

        let shift = (app.alignment.local_sidereal_time - before).value();
        assert!((shift - 6.0).abs() < 0.01);
    }

    #[test]
    fn unreadable_config_is_reported_and_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("polarfinder.ini");
        let original = "[display]\ninverted = false\n[observer\n";
        std::fs::write(&path, original).unwrap();
        let mut app = AppData::new(ConfigStore::new(&path));

        app.latitude_field.text = "12.5".to_string();
        app.coordinate_edited(Coordinate::Latitude);

        assert_eq!(app.location.latitude, 12.5);
        assert!(app.status.starts_with("Save failed"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn orientation_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        app.set_orientation(ReticleOrientation::Direct);

        assert_eq!(
            app.config_store.load_config().orientation,
            ReticleOrientation::Direct
        );
    }

    #[test]
    fn tick_recomputes_once_per_interval() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        let start = Instant::now();

        assert_eq!(app.tick(start), crate::model::REDRAW_INTERVAL);
        assert_eq!(
            app.tick(start + Duration::from_millis(400)),
            Duration::from_millis(600)
        );
    }
}
