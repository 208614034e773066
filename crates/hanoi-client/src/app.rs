//! Main application component.

use hanoi_core::{DEFAULT_DISK_COUNT, MIN_DISK_COUNT};
use yew::prelude::*;

use crate::components::{Board, DiskCountSelect, MAX_DISK_CHOICE, VictoryModal};
use crate::hooks::use_querystring;

#[function_component(App)]
pub fn app() -> Html {
    let disk_count = use_querystring("disks", || DEFAULT_DISK_COUNT);
    let round = use_state(|| 0u32);
    let won = use_state(|| false);

    // The query string is user input
    let count = (*disk_count).clamp(MIN_DISK_COUNT, MAX_DISK_CHOICE);

    let on_victory = {
        let won = won.clone();
        Callback::from(move |()| won.set(true))
    };

    let on_play_again = {
        let won = won.clone();
        let round = round.clone();
        Callback::from(move |()| {
            won.set(false);
            round.set(*round + 1);
        })
    };

    let on_disk_count_change = {
        let won = won.clone();
        let disk_count = disk_count.clone();
        Callback::from(move |count: usize| {
            tracing::info!(count, "[app] disk count changed");
            won.set(false);
            disk_count.set(count);
        })
    };

    html! {
        <main>
            <div class="toolbar">
                <DiskCountSelect value={count} onchange={on_disk_count_change} />
            </div>
            <Board disk_count={count} round={*round} {on_victory} />
            if *won {
                <VictoryModal disk_count={count} {on_play_again} />
            }
        </main>
    }
}
