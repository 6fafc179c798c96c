use leptos::{component, view, CollectView, IntoView, Signal, SignalWith};
use crate::models::ScheduleEntry;

#[component]
#[must_use]
pub fn ScheduleTable(schedules: Signal<Option<Vec<ScheduleEntry>>>) -> impl IntoView {
    let rows = move || {
        schedules.with(|entries| match entries.as_deref() {
            None => view! {
                <tr><td class="empty" colspan="6">"Loading schedules..."</td></tr>
            }.into_view(),
            Some([]) => view! {
                <tr><td class="empty" colspan="6">"No scheduled trains"</td></tr>
            }.into_view(),
            Some(entries) => entries
                .iter()
                .map(|entry| view! {
                    <tr class={entry.train_type.css_class()}>
                        <td>{entry.id.clone()}</td>
                        <td>{format!("{} {}", entry.train_type.icon(), entry.name)}</td>
                        <td>{entry.priority}</td>
                        <td>{format!("{:.0} km/h", entry.speed)}</td>
                        <td>{entry.departure_label()}</td>
                        <td>{entry.journey_label()}</td>
                    </tr>
                })
                .collect_view(),
        })
    };

    view! {
        <section class="schedule-table">
            <h2>"Schedule"</h2>
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Train"</th>
                        <th>"Priority"</th>
                        <th>"Speed"</th>
                        <th>"Departure"</th>
                        <th>"Journey"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
