use leptos::*;

use crate::state::DisplayState;

/// Consumption and wallbox limit rows
#[component]
pub fn ReadingsTable(display: ReadSignal<DisplayState>) -> impl IntoView {
    let home_power = move || display.with(|d| d.home_power.clone());
    let home_raw = move || display.with(|d| d.home_raw.clone());
    let wallbox_power = move || display.with(|d| d.wallbox_power.clone());
    let wallbox_current = move || display.with(|d| d.wallbox_current.clone());

    view! {
        <table>
            <tr>
                <td class="label"><span class="emoji">"🏠"</span>" Home Consumption:"</td>
                <td class="value"><span id="home-power">{home_power}</span>" kW"</td>
                <td class="extra">"(raw: "<span id="home-raw">{home_raw}</span>")"</td>
            </tr>
            <tr>
                <td class="label"><span class="emoji">"🚗"</span>" Wallbox Limit:"</td>
                <td class="value"><span id="wallbox-power">{wallbox_power}</span>" kW"</td>
                <td class="extra">"("<span id="wallbox-current">{wallbox_current}</span>" A)"</td>
            </tr>
        </table>
    }
}
