use leptos::{
    component, create_rw_signal, spawn_local, view, CollectView, IntoView, RwSignal, Signal,
    SignalGet, SignalGetUntracked, SignalSet, SignalWith, StoredValue,
};
use crate::api::HttpSimulationClient;
use crate::components::toast::Notifier;
use crate::decision::{available_actions, describe_plan, submit_decision, TrainAction};
use crate::explain::request_explanation;
use crate::models::{SimulationSnapshot, Train};
use crate::time::{format_eta, whole_seconds};

/// Upcoming stations listed on a card
const UPCOMING_SHOWN: usize = 3;

/// Ids of the live trains, in snapshot order
#[must_use]
pub fn train_ids(snapshot: Option<&SimulationSnapshot>) -> Vec<String> {
    snapshot.map_or_else(Vec::new, |s| s.iter().map(|t| t.id.clone()).collect())
}

/// Latest state of one train; `None` once it has left the snapshot
#[must_use]
pub fn current_train(snapshot: Option<&SimulationSnapshot>, train_id: &str) -> Option<Train> {
    snapshot.and_then(|s| s.train(train_id)).cloned()
}

fn next_stop_label(train: &Train) -> String {
    if train.next_station.is_empty() {
        "-".to_string()
    } else {
        format!("{} in {}", train.next_station, format_eta(train.eta_seconds()))
    }
}

fn status_class(train: &Train) -> String {
    format!("status status-{}", train.status.label().to_lowercase().replace(' ', "-"))
}

/// Card for one live train. The card outlives individual snapshots, so an
/// action in flight keeps its buttons disabled across polls.
#[component]
#[must_use]
pub fn TrainCard(
    train_id: String,
    snapshot: Signal<Option<SimulationSnapshot>>,
    api: StoredValue<HttpSimulationClient>,
    notifier: Notifier,
) -> impl IntoView {
    let in_flight = create_rw_signal(false);

    let train = Signal::derive({
        let train_id = train_id.clone();
        move || snapshot.with(|current| current_train(current.as_ref(), &train_id))
    });

    let on_action = move |action: TrainAction| {
        if in_flight.get_untracked() {
            return;
        }
        // Act on the snapshot currently on screen
        let Some(current) = snapshot.get_untracked() else {
            return;
        };
        let Some(train) = current.train(&train_id).cloned() else {
            return;
        };
        let client = api.get_value();
        in_flight.set(true);

        if let Some(decision) = action.decision() {
            spawn_local(async move {
                match submit_decision(&client, &train.id, decision).await {
                    Ok(outcome) => notifier.info(format!(
                        "Decision '{}' sent for train {}",
                        outcome.decision, outcome.train_id
                    )),
                    Err(e) => notifier.error(format!("Failed to send decision: {e}")),
                }
                let _ = in_flight.try_set(false);
            });
            return;
        }

        spawn_local(async move {
            match request_explanation(&client, &current, &train).await {
                Ok(explanation) => notifier.info(explanation),
                Err(e) => notifier.error(e.to_string()),
            }
            let _ = in_flight.try_set(false);
        });
    };

    move || {
        train
            .get()
            .map(|train| card_body(&train, on_action.clone(), in_flight))
    }
}

fn card_body(
    train: &Train,
    on_action: impl Fn(TrainAction) + Clone + 'static,
    in_flight: RwSignal<bool>,
) -> impl IntoView {
    let buttons = available_actions(train)
        .into_iter()
        .map(|action| {
            let on_action = on_action.clone();
            let class = match action {
                TrainAction::Accept => "primary",
                TrainAction::Reject => "danger",
                TrainAction::Explain => "secondary",
            };
            view! {
                <button
                    class=class
                    disabled=move || in_flight.get()
                    on:click=move |_| on_action(action)
                >
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    let plan = train.pending_plan().map(|plan| {
        view! {
            <div class="proposed-plan">
                <span class="plan-label">"Proposed: "</span>
                {describe_plan(plan)}
                {plan.caused_by.clone().map(|cause| view! {
                    <span class="plan-cause">{format!(" for {cause}")}</span>
                })}
            </div>
        }
    });

    let halted_by = train.halted_by.clone().filter(|_| train.status.is_halted()).map(|cause| {
        view! { <div class="halted-by">{format!("Waiting for {cause}")}</div> }
    });

    let upcoming = train
        .upcoming_stations
        .iter()
        .take(UPCOMING_SHOWN)
        .map(|stop| {
            let eta = whole_seconds(stop.eta_seconds).map(|s| format_eta(Some(s)));
            view! {
                <li>
                    {format!("{} ({:.1} km)", stop.name, stop.distance_km)}
                    {eta.map(|eta| format!(" - {eta}"))}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class={format!("train-card {}", train.train_type.css_class())}>
            <div class="train-card-header">
                <span class="train-icon">{train.train_type.icon()}</span>
                <span class="train-name">{train.display_name()}</span>
                <span class={status_class(train)}>{train.status.label()}</span>
            </div>
            <dl class="train-details">
                <dt>"Position"</dt>
                <dd>{format!("{:.2} km", train.position_km)}</dd>
                <dt>"Speed"</dt>
                <dd>{format!("{:.0} km/h", train.speed_kmh)}</dd>
                <dt>"Next"</dt>
                <dd>{next_stop_label(train)}</dd>
                {train.priority.map(|priority| view! {
                    <dt>"Priority"</dt>
                    <dd>{priority}</dd>
                })}
            </dl>
            {halted_by}
            {plan}
            <ul class="upcoming-stations">{upcoming}</ul>
            <div class="train-actions">{buttons}</div>
        </div>
    }
}
