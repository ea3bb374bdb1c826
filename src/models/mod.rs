pub mod alerts;
pub mod crop;
pub mod dashboard;
pub mod health;
pub mod help;
pub mod profile;
pub mod queue;
pub mod soil;
mod walk;
pub mod voice;
pub mod weather;

pub use alerts::{Alert, AlertFilter, AlertKind, AlertSummary, Severity};
pub use crop::{LeafRecord, ScanResult};
pub use dashboard::{Card, CardKind, CardValue, DashboardReadings, IrrigationAction};
pub use health::{Badge, Health};
pub use help::HelpTopic;
pub use profile::{Device, DeviceKind, FarmerProfile, Field, WaterSource};
pub use queue::{NewQueueItem, QueueCounts, QueueItem, SyncStatus};
pub use soil::{SoilReadings, SoilSimulation, SoilStatus, ThresholdField, Thresholds};
pub use voice::{VoiceAction, VoiceCommand};
pub use walk::BoundedWalk;
pub use weather::{ForecastDay, IrrigationSchedule, Sky};
