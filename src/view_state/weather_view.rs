//! Weather and pump control screen state

use crate::models::weather::{normalize_time, IrrigationSchedule};
use crate::widgets::{InputBox, InputKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleFocus {
    #[default]
    Enabled,
    Time,
    Duration,
}

impl ScheduleFocus {
    pub fn next(self) -> Self {
        match self {
            ScheduleFocus::Enabled => ScheduleFocus::Time,
            ScheduleFocus::Time => ScheduleFocus::Duration,
            ScheduleFocus::Duration => ScheduleFocus::Enabled,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ScheduleFocus::Enabled => ScheduleFocus::Duration,
            ScheduleFocus::Time => ScheduleFocus::Enabled,
            ScheduleFocus::Duration => ScheduleFocus::Time,
        }
    }
}

/// Modal editor for the daily irrigation schedule.
#[derive(Debug, Clone)]
pub struct ScheduleEditor {
    pub enabled: bool,
    pub time: InputBox,
    pub duration: InputBox,
    pub focus: ScheduleFocus,
}

impl ScheduleEditor {
    pub fn from_schedule(schedule: &IrrigationSchedule) -> Self {
        Self {
            enabled: schedule.enabled,
            time: InputBox::new()
                .with_kind(InputKind::Time)
                .with_max_chars(5)
                .with_content(&schedule.time),
            duration: InputBox::new()
                .with_kind(InputKind::Digits)
                .with_max_chars(3)
                .with_content(&schedule.duration.to_string()),
            focus: ScheduleFocus::default(),
        }
    }

    /// The edited schedule, or `None` while the time or duration is invalid.
    pub fn to_schedule(&self) -> Option<IrrigationSchedule> {
        let time = normalize_time(self.time.content())?;
        let duration: u32 = self.duration.content().parse().ok()?;
        if duration == 0 {
            return None;
        }
        Some(IrrigationSchedule {
            enabled: self.enabled,
            time,
            duration,
        })
    }

    pub fn focused_input(&mut self) -> Option<&mut InputBox> {
        match self.focus {
            ScheduleFocus::Enabled => None,
            ScheduleFocus::Time => Some(&mut self.time),
            ScheduleFocus::Duration => Some(&mut self.duration),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WeatherView {
    pub pump_on: bool,
    pub schedule: IrrigationSchedule,
    pub editor: Option<ScheduleEditor>,
}

impl WeatherView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_editor(&mut self) {
        self.editor = Some(ScheduleEditor::from_schedule(&self.schedule));
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }
}
