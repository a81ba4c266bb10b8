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

//! Product walkthrough in the solution section. Advances every
//! [`ADVANCE_INTERVAL_MS`]; clicking a step jumps to it without touching the
//! timer.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use trackwarranty_types::carousel::ADVANCE_INTERVAL_MS;
use trackwarranty_types::DemoCarousel;
use yew::prelude::*;

#[derive(PartialEq)]
struct CarouselState(DemoCarousel);

enum CarouselAction {
    Tick,
    Select(u8),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut carousel = self.0;
        let changed = match action {
            CarouselAction::Tick => {
                carousel.tick();
                true
            }
            CarouselAction::Select(step) => carousel.select(step),
        };
        if changed {
            Rc::new(CarouselState(carousel))
        } else {
            self
        }
    }
}

const STEPS: [(&str, &str, &str); 4] = [
    (
        "📸",
        "Snap your receipt",
        "Take a photo of any bill or warranty card.",
    ),
    (
        "🤖",
        "AI extracts the details",
        "Product, purchase date and warranty period are read automatically.",
    ),
    (
        "🔔",
        "Get smart alerts",
        "Reminders before every warranty or service date runs out.",
    ),
    (
        "🛠️",
        "Claim in one tap",
        "Everything the service centre needs, ready to share.",
    ),
];

#[function_component(DemoCarouselView)]
pub fn demo_carousel() -> Html {
    let state = use_reducer(|| CarouselState(DemoCarousel::new()));

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let interval = Interval::new(ADVANCE_INTERVAL_MS, move || {
                dispatcher.dispatch(CarouselAction::Tick)
            });
            move || drop(interval)
        });
    }

    let carousel = state.0;
    html! {
        <div class="solution-demo">
            <div class="demo-steps">
                { for DemoCarousel::steps().zip(STEPS.iter()).map(|(step, (icon, title, _))| {
                    let onclick = {
                        let dispatcher = state.dispatcher();
                        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Select(step)))
                    };
                    html! {
                        <div
                            class={classes!("demo-step", carousel.is_active(step).then_some("active"))}
                            data-step={step.to_string()}
                            {onclick}
                        >
                            <span class="demo-step-icon">{ *icon }</span>
                            <span class="demo-step-title">{ *title }</span>
                        </div>
                    }
                }) }
            </div>
            <div class="demo-screens">
                { for DemoCarousel::steps().zip(STEPS.iter()).map(|(step, (icon, title, body))| html! {
                    <div
                        class={classes!("demo-screen", (!carousel.is_active(step)).then_some("hidden"))}
                        data-screen={step.to_string()}
                    >
                        <div class="demo-screen-icon">{ *icon }</div>
                        <h4>{ *title }</h4>
                        <p>{ *body }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}
