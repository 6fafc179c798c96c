use leptos::{
    component, create_resource, create_rw_signal, store_value, view, Callback, For, IntoView,
    Show, Signal, SignalGet, SignalSet, SignalWith, Suspense,
};
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use std::rc::Rc;
use crate::api::HttpSimulationClient;
use crate::components::delay_injector::DelayInjector;
use crate::components::header::Header;
use crate::components::route_map::RouteMap;
use crate::components::schedule_table::ScheduleTable;
use crate::components::toast::{Notifier, ToastNotification};
use crate::components::train_card::{train_ids, TrainCard};
use crate::config::ConsoleConfig;
use crate::decision::pending_decisions;
use crate::log;
use crate::session::Session;
use crate::sync::use_synchronizer;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = create_resource(|| (), |()| ConsoleConfig::load());

    view! {
        <Stylesheet id="leptos" href="/pkg/rail_console.css"/>
        <Title text="Rail Operations Console"/>

        <div class="app">
            <Suspense fallback=|| view! { <div class="loading">"Loading configuration..."</div> }>
                {move || config.get().map(|config| view! { <Console config=config /> })}
            </Suspense>
        </div>
    }
}

#[component]
fn Console(config: ConsoleConfig) -> impl IntoView {
    let client = HttpSimulationClient::new(&config.api_base_url);
    log!("Simulation service at {}", client.base_url());

    let sync = use_synchronizer(
        Rc::new(client.clone()),
        config.snapshot_interval_ms,
        config.schedule_interval_ms,
    );
    let api = store_value(client);
    let notifier = Notifier::new();
    let session = create_rw_signal(None::<Session>);

    let on_start = Callback::new(move |started: Session| {
        log!("Session started by {}", started.operator);
        session.set(Some(started));
        sync.start();
    });
    let on_end = Callback::new(move |()| {
        sync.stop();
        session.set(None);
    });

    let snapshot = Signal::derive(move || sync.snapshot.with(|cell| cell.value().cloned()));
    let schedules = Signal::derive(move || sync.schedules.with(|cell| cell.value().cloned()));

    let route = store_value(config.route);
    let map = config.map;

    view! {
        <Header session=session sync=sync on_start=on_start on_end=on_end notifier=notifier />
        <main class="console-body">
            <Show
                when=move || session.with(Option::is_some)
                fallback=|| view! {
                    <div class="console-idle">"Start a session to begin monitoring."</div>
                }
            >
                <RouteMap snapshot=snapshot route=route.get_value() map=map />
                <section class="train-list">
                    <h2>"Trains"</h2>
                    {move || {
                        let waiting = snapshot.with(|current| {
                            current.as_ref().map_or(0, |s| pending_decisions(s).len())
                        });
                        (waiting > 0).then(|| view! {
                            <div class="decisions-banner">
                                {format!("{waiting} train(s) awaiting a decision")}
                            </div>
                        })
                    }}
                    <For
                        each=move || snapshot.with(|current| train_ids(current.as_ref()))
                        key=|train_id| train_id.clone()
                        children=move |train_id: String| view! {
                            <TrainCard train_id=train_id snapshot=snapshot api=api notifier=notifier />
                        }
                    />
                </section>
                <div class="console-side">
                    <ScheduleTable schedules=schedules />
                    <DelayInjector api=api notifier=notifier />
                </div>
            </Show>
        </main>
        <ToastNotification toast=notifier.toast() />
    }
}
