use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;

use crate::{
    contact::{ContactError, ContactFlow, Field, Phase, SimulatedTransport, Transport},
    content::{ContactMethod, Icon, CONTACT_METHODS, OWNER},
    motion::stagger,
};

use super::{reveal::FadeIn, Ambience, Eyebrow};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-xl bg-zinc-50 dark:bg-zinc-900 border border-zinc-200 dark:border-zinc-800 text-zinc-900 dark:text-zinc-100 placeholder:text-zinc-400 focus:outline-none focus:ring-2 focus:ring-zinc-900/10 dark:focus:ring-zinc-100/10 focus:border-zinc-400 dark:focus:border-zinc-600 transition-all disabled:opacity-60";

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="relative min-h-screen pt-24 pb-24">
            <Ambience glows=[
                "top-0 left-1/4 bg-gradient-to-b from-zinc-100/50 to-transparent dark:from-zinc-900/30",
                "bottom-0 right-1/4 bg-gradient-to-t from-zinc-100/50 to-transparent dark:from-zinc-900/30",
            ] />
            <div class="container px-6 mx-auto relative z-10 max-w-6xl">
                <section class="mb-16 text-center md:text-left">
                    <FadeIn delay=0.1>
                        <Eyebrow label="Get in touch" pulse=["bg-emerald-400", "bg-emerald-500"] />
                    </FadeIn>
                    <FadeIn delay=0.2>
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight text-zinc-900 dark:text-zinc-100 mb-6">
                            "Let's work " <span class="text-zinc-500">"together"</span>
                        </h1>
                    </FadeIn>
                    <FadeIn delay=0.3>
                        <p class="text-xl text-zinc-600 dark:text-zinc-400 max-w-2xl leading-relaxed mx-auto md:mx-0">
                            "Have a project in mind or just want to say hello? I'd love to hear from you. Reach out through any of the channels below or send a message directly."
                        </p>
                    </FadeIn>
                </section>

                <div class="grid lg:grid-cols-[2fr_3fr] gap-12 items-start">
                    <div class="space-y-4">
                        {CONTACT_METHODS
                            .iter()
                            .enumerate()
                            .map(|(i, method)| {
                                view! { <ContactCard method=*method delay=stagger(0.2, 0.1, i) /> }
                            })
                            .collect_view()}
                        <FadeIn
                            delay=0.5
                            class="p-6 rounded-2xl bg-zinc-50 dark:bg-zinc-900/50 border border-zinc-200 dark:border-zinc-800"
                        >
                            <div class="text-sm font-semibold text-zinc-900 dark:text-zinc-100 mb-1">
                                "Based in " {OWNER.location}
                            </div>
                            <p class="text-sm text-zinc-500 dark:text-zinc-400">
                                "Working remotely with teams worldwide. I usually respond within 24 hours."
                            </p>
                        </FadeIn>
                    </div>
                    <FadeIn delay=0.3>
                        <MessagePanel controller=ContactController::new(SimulatedTransport) />
                    </FadeIn>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactCard(method: ContactMethod, delay: f64) -> impl IntoView {
    let (target, rel) = if method.is_external() {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };
    view! {
        <FadeIn delay>
            <a
                href=method.href
                target=target
                rel=rel
                class="group flex items-center gap-4 p-6 rounded-2xl bg-white dark:bg-zinc-900/40 border border-zinc-200 dark:border-zinc-800 hover:border-zinc-300 dark:hover:border-zinc-700 hover:shadow-lg transition-all duration-300"
            >
                <div class="w-12 h-12 rounded-xl bg-zinc-100 dark:bg-zinc-800 flex items-center justify-center text-zinc-900 dark:text-zinc-100 group-hover:scale-110 transition-transform duration-300">
                    <i class=format!("{} text-xl", method.icon.class()) />
                </div>
                <div class="flex-grow min-w-0">
                    <div class="text-sm font-medium text-zinc-500 dark:text-zinc-400">
                        {method.label}
                    </div>
                    <div class="font-semibold text-zinc-900 dark:text-zinc-100 truncate">
                        {method.value}
                    </div>
                </div>
                <i class=format!(
                    "{} text-zinc-400 opacity-0 group-hover:opacity-100 transition-opacity",
                    Icon::ArrowUpRight.class(),
                ) />
            </a>
        </FadeIn>
    }
}

/// Form signals plus the transport a submission is handed to.
#[derive(Clone, Copy)]
pub struct ContactController<T> {
    pub flow: RwSignal<ContactFlow>,
    /// Why the last attempt never left the form.
    pub notice: RwSignal<Option<ContactError>>,
    transport: T,
}

impl<T> ContactController<T>
where
    T: Transport + Copy + Send + Sync + 'static,
{
    pub fn new(transport: T) -> Self {
        Self {
            flow: RwSignal::new(ContactFlow::default()),
            notice: RwSignal::new(None),
            transport,
        }
    }

    /// Validates the form and schedules delivery after the transport's latency.
    pub fn send(&self) {
        let Self {
            flow,
            notice,
            transport,
        } = *self;
        match flow.try_update(|f| f.submit()) {
            Some(Ok(message)) => {
                notice.set(None);
                let deliver = move || {
                    let outcome = transport.deliver(&message);
                    flow.update(|f| f.finish(outcome));
                };
                let latency = transport.latency();
                if latency.is_zero() {
                    deliver();
                } else {
                    set_timeout(deliver, latency);
                }
            }
            Some(Err(e)) => {
                log::debug!("contact form rejected: {e}");
                notice.set(Some(e));
            }
            None => {}
        }
    }

    pub fn reset(&self) {
        self.flow.update(|f| f.reset());
        self.notice.set(None);
    }
}

/// The message form, or its confirmation once delivered.
#[component]
fn MessagePanel<T>(controller: ContactController<T>) -> impl IntoView
where
    T: Transport + Copy + Send + Sync + 'static,
{
    let ContactController { flow, notice, .. } = controller;

    let phase = Memo::new(move |_| flow.with(|f| f.phase.clone()));
    let submitting = Memo::new(move |_| phase.get() == Phase::Submitting);
    let done = Memo::new(move |_| phase.get() == Phase::Success);
    let failure = Memo::new(move |_| match phase.get() {
        Phase::Failed(e) => Some(e),
        _ => None,
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        controller.send();
    };

    view! {
        <div class="p-8 rounded-3xl bg-white dark:bg-zinc-900/40 border border-zinc-200 dark:border-zinc-800 shadow-sm">
            <Show
                when=move || done.get()
                fallback=move || {
                    view! {
                        <form on:submit=on_submit class="space-y-6">
                            <div class="grid sm:grid-cols-2 gap-6">
                                <TextField
                                    flow
                                    field=Field::Name
                                    label="Name"
                                    kind="text"
                                    placeholder="John Doe"
                                    disabled=submitting
                                />
                                <TextField
                                    flow
                                    field=Field::Email
                                    label="Email"
                                    kind="email"
                                    placeholder="john@example.com"
                                    disabled=submitting
                                />
                            </div>
                            <TextField
                                flow
                                field=Field::Subject
                                label="Subject"
                                kind="text"
                                placeholder="Project collaboration"
                                disabled=submitting
                            />
                            <TextArea
                                flow
                                field=Field::Message
                                label="Message"
                                placeholder="Tell me about your project..."
                                disabled=submitting
                            />
                            {move || {
                                notice
                                    .get()
                                    .map(|e| {
                                        view! {
                                            <p class="text-sm text-red-600 dark:text-red-400" role="alert">
                                                {capitalize(&e.to_string())}
                                            </p>
                                        }
                                    })
                            }}
                            {move || {
                                failure
                                    .get()
                                    .map(|e| {
                                        view! {
                                            <div
                                                class="flex items-center justify-between gap-4 p-4 rounded-xl bg-red-50 dark:bg-red-950/30 border border-red-200 dark:border-red-900/50 text-sm text-red-700 dark:text-red-400"
                                                role="alert"
                                            >
                                                <span>{capitalize(&e.to_string())}</span>
                                                <button
                                                    type="button"
                                                    class="font-semibold underline underline-offset-4"
                                                    on:click=move |_| controller.send()
                                                >
                                                    "Try again"
                                                </button>
                                            </div>
                                        }
                                    })
                            }}
                            <SubmitButton submitting />
                        </form>
                    }
                }
            >
                <Delivered on_reset=move || controller.reset() />
            </Show>
        </div>
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
fn TextField(
    flow: RwSignal<ContactFlow>,
    field: Field,
    label: &'static str,
    /// Input `type`.
    kind: &'static str,
    placeholder: &'static str,
    disabled: Memo<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label
                for=field.id()
                class="text-sm font-medium text-zinc-900 dark:text-zinc-100"
            >
                {label}
            </label>
            <input
                id=field.id()
                name=field.id()
                type=kind
                required=true
                placeholder=placeholder
                class=INPUT_CLASS
                disabled=move || disabled.get()
                prop:value=move || flow.with(|f| f.form.get(field).to_string())
                on:input=move |ev| flow.update(|f| f.form.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn TextArea(
    flow: RwSignal<ContactFlow>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    disabled: Memo<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label
                for=field.id()
                class="text-sm font-medium text-zinc-900 dark:text-zinc-100"
            >
                {label}
            </label>
            <textarea
                id=field.id()
                name=field.id()
                rows="6"
                required=true
                placeholder=placeholder
                class=format!("{INPUT_CLASS} resize-none")
                disabled=move || disabled.get()
                prop:value=move || flow.with(|f| f.form.get(field).to_string())
                on:input=move |ev| flow.update(|f| f.form.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn SubmitButton(submitting: Memo<bool>) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || submitting.get()
            class="group w-full inline-flex h-12 items-center justify-center gap-2 rounded-xl bg-zinc-900 dark:bg-zinc-100 px-8 text-sm font-semibold text-white dark:text-zinc-900 transition-all hover:bg-zinc-800 dark:hover:bg-zinc-200 disabled:opacity-70 disabled:cursor-not-allowed"
        >
            <Show
                when=move || submitting.get()
                fallback=|| {
                    view! {
                        <span>"Send Message"</span>
                        <i class=format!(
                            "{} transition-transform group-hover:translate-x-0.5",
                            Icon::Send.class(),
                        ) />
                    }
                }
            >
                <i class=format!("{} animate-spin", Icon::Spinner.class()) />
                <span>"Sending..."</span>
            </Show>
        </button>
    }
}

#[component]
fn Delivered<F>(on_reset: F) -> impl IntoView
where
    F: Fn() + Send + Sync + 'static,
{
    view! {
        <div class="flex flex-col items-center justify-center text-center py-12">
            <div class="w-16 h-16 rounded-full bg-emerald-100 dark:bg-emerald-900/30 flex items-center justify-center mb-6">
                <i class=format!(
                    "{} text-3xl text-emerald-600 dark:text-emerald-400",
                    Icon::Check.class(),
                ) />
            </div>
            <h3 class="text-2xl font-bold text-zinc-900 dark:text-zinc-100 mb-2">
                "Message sent!"
            </h3>
            <p class="text-zinc-600 dark:text-zinc-400 max-w-sm mb-8">
                "Thanks for reaching out. I'll get back to you as soon as possible."
            </p>
            <button
                type="button"
                class="inline-flex h-11 items-center justify-center rounded-xl border border-zinc-200 dark:border-zinc-800 px-6 text-sm font-semibold text-zinc-900 dark:text-zinc-100 transition-colors hover:bg-zinc-50 dark:hover:bg-zinc-900"
                on:click=move |_| on_reset()
            >
                "Send another message"
            </button>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::contact::{ContactMessage, SubmitError};
    use std::time::Duration;

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.set();
        f().to_html()
    }

    #[test]
    fn test_external_card_opens_new_context() {
        let html = render(|| view! { <ContactCard method=CONTACT_METHODS[1] delay=0.3 /> });
        assert!(html.contains(r#"href="https://github.com/engabdullah-2024""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn test_mailto_card_opens_in_place() {
        let html = render(|| view! { <ContactCard method=CONTACT_METHODS[0] delay=0.2 /> });
        assert!(html.contains(r#"href="mailto:enga95311@gmail.com""#));
        assert!(!html.contains("target="));
        assert!(!html.contains("rel="));
    }

    #[derive(Clone, Copy)]
    struct Instant;

    impl Transport for Instant {
        fn latency(&self) -> Duration {
            Duration::ZERO
        }

        fn deliver(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    struct Refusing;

    impl Transport for Refusing {
        fn latency(&self) -> Duration {
            Duration::ZERO
        }

        fn deliver(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
            Err(SubmitError::Rejected("mailbox full".to_string()))
        }
    }

    fn fill<T>(controller: &ContactController<T>) {
        controller.flow.update(|f| {
            f.form.set(Field::Name, "Ada".to_string());
            f.form.set(Field::Email, "ada@example.com".to_string());
            f.form.set(Field::Subject, "Hello".to_string());
            f.form.set(Field::Message, "Let's build something.".to_string());
        });
    }

    fn phase<T>(controller: &ContactController<T>) -> Phase {
        controller.flow.with_untracked(|f| f.phase.clone())
    }

    fn panel<T>(controller: ContactController<T>) -> String
    where
        T: Transport + Copy + Send + Sync + 'static,
    {
        view! { <MessagePanel controller /> }.to_html()
    }

    #[test]
    fn test_panel_starts_idle() {
        let html = render(|| {
            let controller = ContactController::new(SimulatedTransport);
            view! { <MessagePanel controller /> }
        });
        for field in Field::ALL {
            assert!(html.contains(&format!(r#"id="{}""#, field.id())), "{field}");
        }
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains("Send Message"));
        assert!(!html.contains("Sending..."));
        assert!(!html.contains("Message sent!"));
        assert!(!html.contains("Try again"));
    }

    #[test]
    fn test_send_delivers_then_resets() {
        let owner = Owner::new();
        owner.set();
        let controller = ContactController::new(Instant);
        fill(&controller);

        controller.send();
        assert_eq!(phase(&controller), Phase::Success);
        let html = panel(controller);
        assert!(html.contains("Message sent!"));
        assert!(html.contains(Icon::Check.class()));
        assert!(!html.contains("<form"));

        controller.reset();
        assert_eq!(phase(&controller), Phase::Idle);
        assert!(controller.flow.with_untracked(|f| f.form.is_empty()));
        let html = panel(controller);
        assert!(html.contains("Send Message"));
        assert!(!html.contains("Message sent!"));
    }

    #[test]
    fn test_spinner_while_in_flight() {
        let owner = Owner::new();
        owner.set();
        let controller = ContactController::new(Instant);
        fill(&controller);
        controller.flow.update(|f| {
            f.submit().expect("filled form is valid");
        });

        let html = panel(controller);
        assert!(html.contains("Sending..."));
        assert!(html.contains(Icon::Spinner.class()));
        assert!(!html.contains("Send Message"));

        // neither a second send nor a reset interrupts the flight
        controller.send();
        assert_eq!(controller.notice.get_untracked(), Some(ContactError::Busy));
        controller.reset();
        assert_eq!(phase(&controller), Phase::Submitting);

        controller.flow.update(|f| f.finish(Ok(())));
        assert!(panel(controller).contains("Message sent!"));
    }

    #[test]
    fn test_rejection_keeps_fields_for_retry() {
        let owner = Owner::new();
        owner.set();
        let controller = ContactController::new(Refusing);
        fill(&controller);

        controller.send();
        assert!(matches!(phase(&controller), Phase::Failed(_)));
        assert_eq!(
            controller.flow.with_untracked(|f| f.form.get(Field::Email).to_string()),
            "ada@example.com"
        );
        let html = panel(controller);
        assert!(html.contains("Message rejected: mailbox full"));
        assert!(html.contains("Try again"));
        assert!(html.contains("Send Message"));
    }

    #[test]
    fn test_invalid_form_shows_notice() {
        let owner = Owner::new();
        owner.set();
        let controller = ContactController::new(Instant);

        controller.send();
        assert_eq!(phase(&controller), Phase::Idle);
        let html = panel(controller);
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("Name is required"));
    }

    #[test]
    fn test_delivered_offers_reset() {
        let html = render(|| view! { <Delivered on_reset=|| {} /> });
        assert!(html.contains("Message sent!"));
        assert!(html.contains("Send another message"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("name is required"), "Name is required");
        assert_eq!(capitalize(""), "");
    }
}
