mod decision;
mod route;
mod schedule;
mod snapshot;
mod station;
mod train;

pub use decision::{Decision, DecisionOutcome};
pub use route::Route;
pub use schedule::ScheduleEntry;
pub use snapshot::SimulationSnapshot;
pub use station::Station;
pub use train::{PlanAction, ProposedPlan, Train, TrainStatus, TrainType, UpcomingStation};
