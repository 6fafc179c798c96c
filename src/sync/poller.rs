use leptos::{
    create_rw_signal, spawn_local, Callable, Callback, RwSignal, SignalUpdate,
    SignalUpdateUntracked,
};
use leptos_use::utils::Pausable;
use leptos_use::{use_interval_fn_with_options, UseIntervalFnOptions};
use std::rc::Rc;
use super::cell::{ApplyOutcome, Ticket, VersionedCell};
use crate::api::SimulationApi;
use crate::log;
use crate::models::{ScheduleEntry, SimulationSnapshot};

/// Two independent recurring pulls (snapshot and schedule table) bound to
/// the operator session.
///
/// Nothing is pulled until [`Synchronizer::start`]. Both timers stop on
/// [`Synchronizer::stop`] or when the owning view is disposed, and any
/// response still in flight at that point is discarded.
#[derive(Clone, Copy)]
pub struct Synchronizer {
    pub snapshot: RwSignal<VersionedCell<SimulationSnapshot>>,
    pub schedules: RwSignal<VersionedCell<Vec<ScheduleEntry>>>,
    start: Callback<()>,
    stop: Callback<()>,
}

impl Synchronizer {
    /// Begin polling, with an immediate first pull of each resource
    pub fn start(&self) {
        self.start.call(());
    }

    /// Stop polling and forget everything pulled so far
    pub fn stop(&self) {
        self.stop.call(());
    }
}

/// Create the synchronizer for the current reactive owner
pub fn use_synchronizer<A>(api: Rc<A>, snapshot_interval_ms: u64, schedule_interval_ms: u64) -> Synchronizer
where
    A: SimulationApi + 'static,
{
    let snapshot = create_rw_signal(VersionedCell::<SimulationSnapshot>::new());
    let schedules = create_rw_signal(VersionedCell::<Vec<ScheduleEntry>>::new());

    let options = || {
        UseIntervalFnOptions::default()
            .immediate(false)
            .immediate_callback(true)
    };

    let snapshot_api = Rc::clone(&api);
    let Pausable {
        pause: pause_snapshot,
        resume: resume_snapshot,
        ..
    } = use_interval_fn_with_options(
        move || pull_snapshot(Rc::clone(&snapshot_api), snapshot),
        snapshot_interval_ms,
        options(),
    );

    let Pausable {
        pause: pause_schedules,
        resume: resume_schedules,
        ..
    } = use_interval_fn_with_options(
        move || pull_schedules(Rc::clone(&api), schedules),
        schedule_interval_ms,
        options(),
    );

    let start = Callback::new(move |()| {
        begin(snapshot, &resume_snapshot);
        begin(schedules, &resume_schedules);
        log!("Polling started");
    });

    let stop = Callback::new(move |()| {
        end(snapshot, &pause_snapshot);
        end(schedules, &pause_schedules);
        log!("Polling stopped");
    });

    Synchronizer {
        snapshot,
        schedules,
        start,
        stop,
    }
}

// The cell must accept tickets before `resume` fires the immediate tick
fn begin<T: 'static>(cell: RwSignal<VersionedCell<T>>, resume: &dyn Fn()) {
    cell.update(VersionedCell::activate);
    resume();
}

// No tick may issue a ticket between cancelling and pausing
fn end<T: 'static>(cell: RwSignal<VersionedCell<T>>, pause: &dyn Fn()) {
    pause();
    cell.update(VersionedCell::cancel);
}

fn pull_snapshot<A>(api: Rc<A>, cell: RwSignal<VersionedCell<SimulationSnapshot>>)
where
    A: SimulationApi + 'static,
{
    let Some(ticket) = issue(cell) else { return };
    spawn_local(async move {
        let result = api.fetch_simulation_state().await;
        settle(cell, ticket, result, "snapshot");
    });
}

fn pull_schedules<A>(api: Rc<A>, cell: RwSignal<VersionedCell<Vec<ScheduleEntry>>>)
where
    A: SimulationApi + 'static,
{
    let Some(ticket) = issue(cell) else { return };
    spawn_local(async move {
        let result = api.fetch_schedules().await;
        settle(cell, ticket, result, "schedules");
    });
}

// Issuing a ticket changes nothing a view renders
fn issue<T: 'static>(cell: RwSignal<VersionedCell<T>>) -> Option<Ticket> {
    cell.try_update_untracked(VersionedCell::issue).flatten()
}

fn settle<T: 'static>(
    cell: RwSignal<VersionedCell<T>>,
    ticket: Ticket,
    result: Result<T, String>,
    resource: &str,
) {
    // `None` means the view owning the cell is gone
    match cell.try_update(|c| c.apply(ticket, result)) {
        Some(ApplyOutcome::Applied { .. }) => {}
        Some(ApplyOutcome::Stale { seq, latest }) => {
            log!("Dropped {} pull #{}, #{} already applied", resource, seq, latest);
        }
        Some(ApplyOutcome::Failed { error }) => {
            leptos::logging::warn!("Failed to pull {resource}: {error}");
        }
        Some(ApplyOutcome::Cancelled) | None => {
            log!("Discarded {} pull #{} after polling stopped", resource, ticket.seq());
        }
    }
}
