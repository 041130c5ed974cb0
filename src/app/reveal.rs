use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::motion::{Latch, Reveal};

/// Becomes true the first time `target` intersects the viewport (shrunk by `margin`) and
/// stays true. The observer is disconnected after the first hit.
pub fn use_reveal(target: NodeRef<html::Div>, margin: &'static str) -> Signal<bool> {
    let latch = RwSignal::new(Latch::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let hit = entries.iter().any(|e| e.is_intersecting());
            latch.maybe_update(|l| {
                let before = l.fired();
                l.observe(hit) != before
            });
        },
        UseIntersectionObserverOptions::default().root_margin(margin),
    );

    Effect::new(move |_| {
        if latch.with(|l| l.fired()) {
            stop();
        }
    });

    Signal::derive(move || latch.with(|l| l.fired()))
}

/// Entrance wrapper: children fade and rise into place the first time they scroll into view.
#[component]
pub fn FadeIn(
    /// Seconds to wait after entering the viewport.
    #[prop(optional)]
    delay: f64,
    #[prop(optional, into)] class: String,
    /// Overrides for duration, offset and margin. `delay` always wins.
    #[prop(optional)]
    reveal: Option<Reveal>,
    children: Children,
) -> impl IntoView {
    let reveal = match reveal {
        Some(base) => Reveal { delay, ..base },
        None => Reveal::delayed(delay),
    };
    let target = NodeRef::<html::Div>::new();
    let visible = use_reveal(target, reveal.margin);

    view! {
        <div node_ref=target class=class style=move || reveal.style(visible.get())>
            {children()}
        </div>
    }
}
