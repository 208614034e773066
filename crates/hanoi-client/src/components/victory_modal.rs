//! Overlay shown once the puzzle is solved.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VictoryModalProps {
    pub disk_count: usize,
    pub on_play_again: Callback<()>,
}

#[function_component(VictoryModal)]
pub fn victory_modal(props: &VictoryModalProps) -> Html {
    let on_play_again = {
        let on_play_again = props.on_play_again.clone();
        Callback::from(move |_: MouseEvent| on_play_again.emit(()))
    };

    let noun = if props.disk_count == 1 { "disk" } else { "disks" };

    html! {
        <div class="victory-modal-overlay">
            <div class="victory-modal">
                <div class="victory-modal-header">
                    { "Solved!" }
                </div>
                <p>{ format!("All {} {noun} moved to a new tower.", props.disk_count) }</p>
                <button onclick={on_play_again}>{ "Play again" }</button>
            </div>
        </div>
    }
}
