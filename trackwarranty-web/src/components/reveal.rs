/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

use web_sys::Element;
use yew::prelude::*;

use crate::observers::{observe_once, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// e.g. `story-card`, `testimonial-card`, `solution-card`.
    pub class: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Card that fades in the first time it scrolls into view, then stops
/// observing.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let observer = node.cast::<Element>().and_then(|el| {
                observe_once(&el, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), move || {
                    revealed.set(true)
                })
            });
            move || drop(observer)
        });
    }

    let class = classes!(props.class.to_string(), (*revealed).then_some("fade-in-up"));
    html! {
        <div ref={node} {class}>
            { props.children.clone() }
        </div>
    }
}
