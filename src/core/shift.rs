//! Per-device shift tracker: Idle → Active → Idle, persisted in the
//! key-value store so an active shift survives a restart.

use crate::capture::ImageCapture;
use crate::errors::{AppError, AppResult};
use crate::models::shift::{ActiveShift, ShiftLabel, ShiftState, ShiftSummary};
use crate::storage::{KEY_EMPLOYEE, KEY_SHIFT_IMAGE, KEY_START_TIME, KeyValueStore};
use crate::utils::time::hhmm;
use chrono::{NaiveDateTime, Timelike};

pub struct ShiftTracker<'a, S: KeyValueStore> {
    store: &'a mut S,
    label: ShiftLabel,
    state: ShiftState,
}

impl<'a, S: KeyValueStore> ShiftTracker<'a, S> {
    /// Restore the persisted state. The label is fixed here from `now` and
    /// not re-evaluated afterwards.
    pub fn load(store: &'a mut S, now: NaiveDateTime) -> AppResult<Self> {
        let state = match store.get(KEY_START_TIME)? {
            Some(start_time) if !start_time.is_empty() => ShiftState::Active(ActiveShift {
                employee_name: store.get(KEY_EMPLOYEE)?.unwrap_or_default(),
                image_ref: store.get(KEY_SHIFT_IMAGE)?.unwrap_or_default(),
                start_time,
            }),
            _ => ShiftState::Idle,
        };

        Ok(Self {
            store,
            label: ShiftLabel::from_hour(now.hour()),
            state,
        })
    }

    pub fn label(&self) -> ShiftLabel {
        self.label
    }

    pub fn state(&self) -> &ShiftState {
        &self.state
    }

    /// Start a shift: name first, then the photo, then persist.
    ///
    /// A blank name is rejected, but the name is stored as typed. The three
    /// shift keys are written together or not at all. Starting while already
    /// active replaces the persisted shift, as a new capture would.
    pub fn start<C: ImageCapture>(
        &mut self,
        employee_name: &str,
        capture: &mut C,
        now: NaiveDateTime,
    ) -> AppResult<ActiveShift> {
        if employee_name.trim().is_empty() {
            return Err(AppError::Validation(
                "Please enter your name before taking a picture.".to_string(),
            ));
        }

        let image_ref = capture.capture().into_result()?;
        let start_time = hhmm(&now);

        self.store.set_all(&[
            (KEY_EMPLOYEE, employee_name),
            (KEY_SHIFT_IMAGE, &image_ref),
            (KEY_START_TIME, &start_time),
        ])?;

        let active = ActiveShift {
            employee_name: employee_name.to_string(),
            image_ref,
            start_time,
        };
        self.state = ShiftState::Active(active.clone());
        Ok(active)
    }

    /// End the active shift and clear the persisted keys.
    pub fn end(&mut self, now: NaiveDateTime) -> AppResult<ShiftSummary> {
        let ShiftState::Active(active) = &self.state else {
            return Err(AppError::ShiftNotStarted);
        };

        let summary = ShiftSummary {
            employee_name: active.employee_name.clone(),
            label: self.label,
            start_time: active.start_time.clone(),
            end_time: hhmm(&now),
        };

        self.store
            .remove_all(&[KEY_EMPLOYEE, KEY_SHIFT_IMAGE, KEY_START_TIME])?;

        self.state = ShiftState::Idle;
        Ok(summary)
    }
}
