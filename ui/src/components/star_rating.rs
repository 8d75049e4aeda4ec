use payloads::requests::STARS_MAX;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Current rating, 0 when nothing is picked.
    pub value: u8,
    pub on_change: Callback<u8>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Five star buttons; clicking star `n` sets the rating to `n`.
#[function_component]
pub fn StarRating(props: &Props) -> Html {
    html! {
        <div class="flex gap-1" role="radiogroup" aria-label="Rating">
            {(1..=STARS_MAX).map(|star| {
                let onclick = props.on_change.reform(move |_: MouseEvent| star);
                let filled = star <= props.value;
                html! {
                    <button
                        type="button"
                        {onclick}
                        disabled={props.disabled}
                        role="radio"
                        aria-checked={(star == props.value).to_string()}
                        aria-label={format!("{star} star{}", if star == 1 { "" } else { "s" })}
                        class={classes!(
                            "text-3xl", "leading-none", "transition-colors",
                            if filled { "text-yellow-400" } else { "text-neutral-300" }
                        )}
                    >
                        {"★"}
                    </button>
                }
            }).collect::<Html>()}
        </div>
    }
}
