use leptos::{
    component, create_rw_signal, event_target_value, spawn_local, view, IntoView, SignalGet,
    SignalGetUntracked, SignalSet, StoredValue,
};
use crate::api::{DelayRequest, HttpSimulationClient, SimulationApi};
use crate::components::toast::Notifier;

#[component]
#[must_use]
pub fn DelayInjector(api: StoredValue<HttpSimulationClient>, notifier: Notifier) -> impl IntoView {
    let train_id = create_rw_signal(String::new());
    let delay_seconds = create_rw_signal(String::from("60"));
    let sending = create_rw_signal(false);

    let submit = move |_| {
        let request = match DelayRequest::new(&train_id.get_untracked(), &delay_seconds.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                notifier.error(e);
                return;
            }
        };

        let client = api.get_value();
        sending.set(true);
        spawn_local(async move {
            match client.simulate_delay(&request).await {
                Ok(response) => notifier.info(response.into_message()),
                Err(e) => notifier.error(format!("Failed to inject delay: {e}")),
            }
            sending.set(false);
        });
    };

    view! {
        <section class="delay-injector">
            <h2>"Inject Delay"</h2>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Train ID"
                    prop:value=train_id
                    on:input=move |ev| train_id.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    min="1"
                    placeholder="Seconds"
                    prop:value=delay_seconds
                    on:input=move |ev| delay_seconds.set(event_target_value(&ev))
                />
                <button class="primary" disabled=move || sending.get() on:click=submit>
                    "Inject"
                </button>
            </div>
        </section>
    }
}
