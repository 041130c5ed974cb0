use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use crate::{
    content::{Icon, Value, FOCUS_AREAS, OWNER, TECH_STACK, VALUES},
    motion::stagger,
};

use super::{reveal::FadeIn, Ambience, Eyebrow};

#[component]
fn ValueCard(value: Value, delay: f64) -> impl IntoView {
    view! {
        <FadeIn
            delay
            class="group p-6 rounded-2xl bg-zinc-50 dark:bg-zinc-900/50 border border-zinc-200 dark:border-zinc-800 hover:border-zinc-300 dark:hover:border-zinc-700 transition-colors"
        >
            <div class="w-10 h-10 rounded-lg bg-zinc-100 dark:bg-zinc-800 flex items-center justify-center mb-4 group-hover:scale-110 transition-transform duration-300">
                <i class=format!("{} text-zinc-700 dark:text-zinc-300", value.icon.class()) />
            </div>
            <h3 class="text-lg font-semibold text-zinc-900 dark:text-zinc-100 mb-2">
                {value.title}
            </h3>
            <p class="text-zinc-600 dark:text-zinc-400 leading-relaxed text-sm">
                {value.description}
            </p>
        </FadeIn>
    }
}

#[component]
fn SkillBadge(label: &'static str, delay: f64) -> impl IntoView {
    view! {
        <FadeIn
            delay
            class="px-3 py-1.5 rounded-md bg-zinc-100 dark:bg-zinc-800/80 text-zinc-600 dark:text-zinc-300 text-sm font-medium border border-zinc-200 dark:border-zinc-700/50"
        >
            {label}
        </FadeIn>
    }
}

#[component]
fn SectionHeading(icon: Icon, text: &'static str) -> impl IntoView {
    view! {
        <FadeIn delay=0.2>
            <h2 class="text-xl font-bold text-zinc-900 dark:text-zinc-100 flex items-center gap-2">
                <i class=format!("{} text-zinc-400", icon.class()) />
                {text}
            </h2>
        </FadeIn>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <div class="relative min-h-screen pt-24 pb-24">
            <Ambience glows=[
                "top-0 right-0 bg-gradient-to-b from-zinc-100/50 to-transparent dark:from-zinc-900/30",
                "bottom-0 left-0 bg-gradient-to-t from-zinc-100/50 to-transparent dark:from-zinc-900/30",
            ] />
            <div class="container px-6 mx-auto relative z-10 max-w-4xl">
                <section class="mb-24">
                    <FadeIn delay=0.1>
                        <Eyebrow label="About Me" pulse=["hidden", "bg-zinc-500"] />
                    </FadeIn>
                    <FadeIn delay=0.2>
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight text-zinc-900 dark:text-zinc-100 leading-tight mb-8">
                            {format!("I’m {}.", OWNER.name)}
                            <br />
                            <span class="text-zinc-500">
                                "A product engineer building with purpose."
                            </span>
                        </h1>
                    </FadeIn>
                    <FadeIn delay=0.3>
                        <p class="text-xl text-zinc-600 dark:text-zinc-400 leading-relaxed max-w-2xl">
                            "I’m a software engineer and full-stack developer dedicated to building clean, scalable, and human-centered digital products. I don't just write code; I build systems that solve real problems."
                        </p>
                    </FadeIn>
                </section>

                <section class="mb-24 grid md:grid-cols-[1fr_2fr] gap-12 items-start border-t border-zinc-200 dark:border-zinc-800 pt-16">
                    <SectionHeading icon=Icon::Sparkles text="The Journey" />
                    <div class="space-y-6">
                        <FadeIn delay=0.3>
                            <p class="text-zinc-600 dark:text-zinc-400 text-lg leading-relaxed">
                                "My path to engineering started with simple curiosity, wanting to understand how the digital world works. That curiosity quickly turned into a builder's mindset. Over the last 2 years, I've transitioned from learning the basics to architecting full-stack applications that serve real users."
                            </p>
                        </FadeIn>
                        <FadeIn delay=0.4>
                            <p class="text-zinc-600 dark:text-zinc-400 text-lg leading-relaxed">
                                "I believe that great software is born at the intersection of technical excellence and user empathy. Every line of code I write is aimed at making a complex system feel simple and reliable for the person on the other end."
                            </p>
                        </FadeIn>
                    </div>
                </section>

                <section class="mb-24">
                    <FadeIn delay=0.2 class="mb-12">
                        <h2 class="text-3xl font-bold text-zinc-900 dark:text-zinc-100 tracking-tight text-center md:text-left">
                            "Core Philosophy"
                        </h2>
                    </FadeIn>
                    <div class="grid md:grid-cols-2 gap-6">
                        {VALUES
                            .iter()
                            .enumerate()
                            .map(|(i, value)| {
                                view! { <ValueCard value=*value delay=stagger(0.1, 0.1, i) /> }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="mb-24 grid md:grid-cols-[1fr_2fr] gap-12 items-start border-t border-zinc-200 dark:border-zinc-800 pt-16">
                    <SectionHeading icon=Icon::Layers text="Capabilities" />
                    <div class="grid sm:grid-cols-2 gap-8">
                        <FadeIn delay=0.3>
                            <h3 class="font-semibold text-zinc-900 dark:text-zinc-100 mb-4">
                                "Focus Areas"
                            </h3>
                            <ul class="space-y-3 text-zinc-600 dark:text-zinc-400">
                                {FOCUS_AREAS
                                    .iter()
                                    .map(|area| {
                                        view! {
                                            <li class="flex items-center gap-2">
                                                <div class="w-1.5 h-1.5 rounded-full bg-zinc-400" />
                                                {*area}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </FadeIn>
                        <div>
                            <FadeIn delay=0.4>
                                <h3 class="font-semibold text-zinc-900 dark:text-zinc-100 mb-4">
                                    "Tech Stack"
                                </h3>
                            </FadeIn>
                            <div class="flex flex-wrap gap-2">
                                {TECH_STACK
                                    .iter()
                                    .enumerate()
                                    .map(|(i, label)| {
                                        view! {
                                            <SkillBadge label=*label delay=stagger(0.4, 0.05, i) />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </section>

                <section class="mb-24 py-12 px-8 bg-zinc-50 dark:bg-zinc-900 rounded-3xl border border-zinc-100 dark:border-zinc-800 relative overflow-hidden">
                    <div class="absolute top-0 right-0 p-12 opacity-5">
                        <i class=format!("{} text-[16rem]", Icon::Globe.class()) />
                    </div>
                    <div class="relative z-10 max-w-2xl">
                        <FadeIn delay=0.2>
                            <h2 class="text-2xl font-bold text-zinc-900 dark:text-zinc-100 mb-6">
                                "Always raising the bar"
                            </h2>
                        </FadeIn>
                        <FadeIn delay=0.3>
                            <p class="text-lg text-zinc-600 dark:text-zinc-400 leading-relaxed mb-8">
                                "I care deeply about growth: personal, technical, and professional. I continuously challenge myself to improve and raise the quality of everything I ship. When I'm not coding, I'm likely exploring new design patterns, reading about system architecture, or refining my workflow."
                            </p>
                        </FadeIn>
                        <FadeIn delay=0.4>
                            <div class="flex items-center gap-4">
                                <div class="h-16 w-16 rounded-full overflow-hidden border border-zinc-200 dark:border-zinc-700 relative">
                                    <img
                                        src=OWNER.image
                                        alt=OWNER.name
                                        class="absolute inset-0 h-full w-full object-cover"
                                    />
                                </div>
                                <div>
                                    <div class="font-semibold text-zinc-900 dark:text-zinc-100">
                                        {OWNER.name}
                                    </div>
                                    <div class="text-sm text-zinc-500">"Full-Stack Engineer"</div>
                                </div>
                            </div>
                        </FadeIn>
                    </div>
                </section>

                <section class="text-center pb-12">
                    <FadeIn delay=0.2>
                        <h2 class="text-3xl font-bold text-zinc-900 dark:text-zinc-100 mb-6">
                            "Ready to build something great?"
                        </h2>
                        <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                            <A
                                href="/projects"
                                attr:class="group inline-flex h-12 items-center justify-center gap-2 rounded-xl bg-zinc-900 dark:bg-zinc-100 px-8 text-sm font-semibold text-white dark:text-zinc-900 transition-all hover:bg-zinc-800 dark:hover:bg-zinc-200"
                            >
                                <span>"See what I build"</span>
                                <i class=format!(
                                    "{} transition-transform group-hover:translate-x-0.5",
                                    Icon::ArrowRight.class(),
                                ) />
                            </A>
                            <a
                                href=OWNER.mailto()
                                class="inline-flex h-12 items-center justify-center gap-2 rounded-xl border border-zinc-200 dark:border-zinc-800 bg-white dark:bg-black px-8 text-sm font-semibold text-zinc-900 dark:text-zinc-100 transition-colors hover:bg-zinc-50 dark:hover:bg-zinc-900"
                            >
                                <span>"Get in touch"</span>
                            </a>
                        </div>
                    </FadeIn>
                </section>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_value_card_renders_record() {
        let owner = Owner::new();
        owner.set();
        let html = view! { <ValueCard value=VALUES[2] delay=0.3 /> }.to_html();
        assert!(html.contains("Performance First"));
        assert!(html.contains(Icon::Zap.class()));
        // starts hidden until revealed in the browser
        assert!(html.contains("opacity: 0"));
    }

    #[test]
    fn test_skill_badge_reveals_itself() {
        let owner = Owner::new();
        owner.set();
        let html = view! { <SkillBadge label=TECH_STACK[0] delay=stagger(0.4, 0.05, 3) /> }
            .to_html();
        assert!(html.contains(TECH_STACK[0]));
        assert!(html.contains("opacity: 0"));
        assert!(html.contains("0.55s"));
    }
}
