use hanoi_core::MIN_DISK_COUNT;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Largest disk count offered to the player.
pub const MAX_DISK_CHOICE: usize = 10;

#[derive(Properties, PartialEq)]
pub struct DiskCountSelectProps {
    pub value: usize,
    pub onchange: Callback<usize>,
}

#[function_component(DiskCountSelect)]
pub fn disk_count_select(props: &DiskCountSelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let count = e
                .target_dyn_into::<HtmlSelectElement>()
                .and_then(|select| select.value().parse::<usize>().ok());
            if let Some(count) = count {
                onchange.emit(count);
            }
        })
    };

    html! {
        <label>
            { "Disks " }
            <select {onchange}>
                { for (MIN_DISK_COUNT..=MAX_DISK_CHOICE).map(|count| html! {
                    <option value={count.to_string()} selected={count == props.value}>
                        { count }
                    </option>
                }) }
            </select>
        </label>
    }
}
