use leptos::{
    component, create_signal, event_target_value, view, Callable, Callback, IntoView, RwSignal,
    SignalGet, SignalGetUntracked, SignalSet, SignalWith,
};
use crate::components::toast::Notifier;
use crate::models::SimulationSnapshot;
use crate::session::Session;
use crate::sync::{Synchronizer, VersionedCell};

/// One-line health of a polled resource
fn sync_label<T>(cell: &VersionedCell<T>) -> String {
    if !cell.is_active() {
        return "Offline".to_string();
    }
    match (cell.last_error(), cell.value()) {
        (Some(error), _) => format!("Sync error: {error}"),
        (None, None) => "Connecting...".to_string(),
        (None, Some(_)) => format!("Live (update #{})", cell.applied_seq()),
    }
}

/// Simulation clock for the header. Text the service sends in another
/// format is shown as-is.
fn clock_label(snapshot: Option<&SimulationSnapshot>) -> String {
    match snapshot {
        None => "--:--:--".to_string(),
        Some(snapshot) => snapshot.clock().map_or_else(
            || snapshot.simulation_time.clone(),
            |clock| clock.format("%H:%M:%S").to_string(),
        ),
    }
}

fn sync_class<T>(cell: &VersionedCell<T>) -> &'static str {
    match (cell.is_active(), cell.last_error()) {
        (false, _) => "sync-status offline",
        (true, Some(_)) => "sync-status error",
        (true, None) => "sync-status live",
    }
}

#[component]
#[must_use]
pub fn Header(
    session: RwSignal<Option<Session>>,
    sync: Synchronizer,
    on_start: Callback<Session>,
    on_end: Callback<()>,
    notifier: Notifier,
) -> impl IntoView {
    let (operator, set_operator) = create_signal(String::new());

    let start_session = move || match Session::start(&operator.get_untracked()) {
        Ok(new_session) => {
            set_operator.set(String::new());
            on_start.call(new_session);
        }
        Err(e) => notifier.error(e),
    };

    let simulation_time = move || sync.snapshot.with(|cell| clock_label(cell.value()));

    view! {
        <header class="console-header">
            <h1>"Rail Operations Console"</h1>
            <div class="sim-clock" title="Simulation time">{simulation_time}</div>
            <div class=move || sync.snapshot.with(sync_class)>
                {move || sync.snapshot.with(sync_label)}
            </div>
            <div class="session-controls">
                {move || match session.get() {
                    Some(active) => view! {
                        <span class="operator">
                            {format!("Operator: {} (since {})", active.operator, active.started_at.format("%H:%M"))}
                        </span>
                        <button class="secondary" on:click=move |_| on_end.call(())>
                            "End Session"
                        </button>
                    }.into_view(),
                    None => view! {
                        <input
                            type="text"
                            placeholder="Operator name"
                            prop:value=operator
                            on:input=move |ev| set_operator.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    start_session();
                                }
                            }
                        />
                        <button class="primary" on:click=move |_| start_session()>
                            "Start Session"
                        </button>
                    }.into_view(),
                }}
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_label_follows_cell_state() {
        let mut cell: VersionedCell<u32> = VersionedCell::new();
        assert_eq!(sync_label(&cell), "Offline");

        cell.activate();
        assert_eq!(sync_label(&cell), "Connecting...");

        let ticket = cell.issue().expect("active cell should issue");
        cell.apply(ticket, Ok(7));
        assert_eq!(sync_label(&cell), "Live (update #1)");
        assert_eq!(sync_class(&cell), "sync-status live");

        let ticket = cell.issue().expect("active cell should issue");
        cell.apply(ticket, Err("Request failed: timeout".to_string()));
        assert_eq!(sync_label(&cell), "Sync error: Request failed: timeout");
        assert_eq!(sync_class(&cell), "sync-status error");
    }

    #[test]
    fn test_clock_label() {
        assert_eq!(clock_label(None), "--:--:--");

        let snapshot = SimulationSnapshot::new("07:05:09", Vec::new());
        assert_eq!(clock_label(Some(&snapshot)), "07:05:09");

        let garbled = SimulationSnapshot::new("day 2", Vec::new());
        assert_eq!(clock_label(Some(&garbled)), "day 2");
    }

    #[test]
    fn test_restarted_session_waits_for_fresh_data() {
        let mut cell: VersionedCell<u32> = VersionedCell::new();
        cell.activate();
        let ticket = cell.issue().expect("active cell should issue");
        cell.apply(ticket, Ok(1));

        cell.cancel();
        cell.activate();
        assert_eq!(sync_label(&cell), "Connecting...");
    }
}
