use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use crate::{
    content::{self, Icon, HERO_STACK, OWNER},
    motion::{parallax, Reveal},
};

use super::{ambient::ScrollPosition, reveal::FadeIn, Eyebrow};

/// Hero copy settles from a shorter distance than the content pages.
const HERO_REVEAL: Reveal = Reveal {
    delay: 0.0,
    duration: 0.8,
    offset: 10.0,
    margin: "0px",
};

#[component]
fn TechBadge(badge: content::TechBadge) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 px-3 py-1.5 rounded-full bg-zinc-100 dark:bg-zinc-800/50 border border-zinc-200 dark:border-zinc-700/50 text-zinc-600 dark:text-zinc-400 text-xs font-medium transition-colors hover:bg-zinc-200 dark:hover:bg-zinc-800 hover:text-zinc-900 dark:hover:text-zinc-200 cursor-default">
            <i class=badge.icon.class() />
            <span>{badge.label}</span>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ScrollPosition(scroll_y) = expect_context::<ScrollPosition>();
    let drift = move || {
        let (y, opacity) = parallax(scroll_y.get());
        format!("transform: translateY({y}px); opacity: {opacity};")
    };

    view! {
        <Title text="Home" />
        <section class="relative min-h-screen flex flex-col justify-center overflow-hidden">
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute inset-0 bg-grid" />
                <div class="absolute -top-[20%] -right-[10%] w-[800px] h-[800px] rounded-full bg-gradient-to-br from-zinc-200/40 to-transparent dark:from-zinc-800/20 blur-[120px]" />
                <div class="absolute bottom-[0%] left-[0%] w-[600px] h-[600px] rounded-full bg-gradient-to-tr from-zinc-100/40 to-transparent dark:from-zinc-900/20 blur-[100px]" />
            </div>

            <div class="container px-6 mx-auto relative z-10 grid lg:grid-cols-2 gap-12 lg:gap-8 items-center">
                <div class="flex flex-col items-start max-w-2xl lg:pl-8 pt-20 lg:pt-0">
                    <FadeIn delay=0.1 reveal=HERO_REVEAL>
                        <Eyebrow
                            label="Available for new projects"
                            pulse=["bg-emerald-400", "bg-emerald-500"]
                        />
                    </FadeIn>

                    <FadeIn delay=0.2 reveal=HERO_REVEAL>
                        <h2 class="text-lg md:text-xl font-medium text-zinc-500 dark:text-zinc-400 mb-4 tracking-tight">
                            {OWNER.name} <span class="mx-2 opacity-50">"·"</span> {OWNER.role}
                        </h2>
                    </FadeIn>

                    <FadeIn delay=0.3 reveal=HERO_REVEAL>
                        <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold tracking-tight text-zinc-900 dark:text-zinc-100 mb-6 leading-[0.95] lg:leading-[1.1]">
                            "Building digital " <br class="hidden sm:block" />
                            <span class="text-zinc-500 relative inline-block">
                                "products"
                                <svg
                                    class="absolute w-[110%] -bottom-2 -left-[5%] text-zinc-300 dark:text-zinc-700 -z-10 underline-draw"
                                    viewBox="0 0 100 20"
                                    fill="none"
                                >
                                    <path
                                        d="M5 12C30 15 70 5 95 12"
                                        stroke="currentColor"
                                        stroke-width="4"
                                        stroke-linecap="round"
                                    />
                                </svg>
                            </span>
                            " that matter."
                        </h1>
                    </FadeIn>

                    <FadeIn delay=0.4 reveal=HERO_REVEAL>
                        <p class="text-xl text-zinc-600 dark:text-zinc-400 max-w-lg mb-10 leading-relaxed">
                            "With 2 years of experience, I focus on building scalable, human-centered applications with meticulous attention to detail and performance."
                        </p>
                    </FadeIn>

                    <FadeIn
                        delay=0.5
                        reveal=HERO_REVEAL
                        class="flex flex-col sm:flex-row gap-4 mb-14 w-full sm:w-auto"
                    >
                        <A
                            href="/skills"
                            attr:class="group relative inline-flex h-12 items-center justify-center gap-2 rounded-xl bg-zinc-900 dark:bg-zinc-100 px-8 text-sm font-semibold text-white dark:text-zinc-900 transition-all hover:bg-zinc-800 dark:hover:bg-zinc-200"
                        >
                            <span>"View Skills"</span>
                            <i class=format!(
                                "{} transition-transform group-hover:translate-x-0.5",
                                Icon::ArrowRight.class(),
                            ) />
                        </A>
                        <A
                            href="/contact"
                            attr:class="inline-flex h-12 items-center justify-center gap-2 rounded-xl border border-zinc-200 dark:border-zinc-800 bg-white dark:bg-black px-8 text-sm font-semibold text-zinc-900 dark:text-zinc-100 transition-colors hover:bg-zinc-50 dark:hover:bg-zinc-900"
                        >
                            <i class=format!("{} text-zinc-500", Icon::Mail.class()) />
                            <span>"Contact Me"</span>
                        </A>
                    </FadeIn>

                    <FadeIn delay=0.6 reveal=HERO_REVEAL>
                        <div class="flex flex-col gap-3">
                            <span class="text-xs font-semibold text-zinc-400 dark:text-zinc-600 uppercase tracking-widest">
                                "Trusted Stack"
                            </span>
                            <div class="flex flex-wrap gap-2">
                                {HERO_STACK
                                    .iter()
                                    .map(|badge| view! { <TechBadge badge=*badge /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </FadeIn>
                </div>

                <div class="relative hidden lg:block h-full min-h-[600px] w-full">
                    <div class="absolute inset-0 flex items-center justify-center" style=drift>
                        <HeroVisual />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Floating mock interface beside the hero copy.
#[component]
fn HeroVisual() -> impl IntoView {
    view! {
        <div class="relative w-[500px] h-[600px] [perspective:1000px]">
            <div class="hero-card absolute top-10 left-10 w-full h-full bg-white/50 dark:bg-zinc-900/50 backdrop-blur-xl rounded-3xl border border-white/20 dark:border-zinc-700/50 shadow-2xl p-6 overflow-hidden">
                <div class="flex items-center gap-4 mb-8">
                    <div class="w-3 h-3 rounded-full bg-red-400/80" />
                    <div class="w-3 h-3 rounded-full bg-amber-400/80" />
                    <div class="w-3 h-3 rounded-full bg-green-400/80" />
                </div>
                <div class="space-y-4">
                    <div class="h-4 w-3/4 bg-zinc-200 dark:bg-zinc-800 rounded animate-pulse" />
                    <div class="h-4 w-1/2 bg-zinc-200 dark:bg-zinc-800 rounded animate-pulse delay-75" />
                    <div class="space-y-2 mt-8">
                        <div class="h-32 w-full bg-zinc-100 dark:bg-zinc-800/50 rounded-xl border border-dashed border-zinc-200 dark:border-zinc-700" />
                        <div class="flex gap-4">
                            <div class="h-24 w-1/2 bg-zinc-100 dark:bg-zinc-800/50 rounded-xl" />
                            <div class="h-24 w-1/2 bg-zinc-100 dark:bg-zinc-800/50 rounded-xl" />
                        </div>
                    </div>
                </div>
                <StatusChip
                    icon=Icon::Globe
                    label="Status"
                    value="99.9% Uptime"
                    class="float-slow bottom-20 -right-10"
                    tint="bg-emerald-100 dark:bg-emerald-900/30 text-emerald-600 dark:text-emerald-400"
                />
                <StatusChip
                    icon=Icon::Cpu
                    label="Performance"
                    value="Optimized"
                    class="float-slower top-40 -left-12"
                    tint="bg-blue-100 dark:bg-blue-900/30 text-blue-600 dark:text-blue-400"
                />
            </div>
        </div>
    }
}

#[component]
fn StatusChip(
    icon: Icon,
    label: &'static str,
    value: &'static str,
    class: &'static str,
    tint: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "absolute p-4 bg-white/80 dark:bg-zinc-800/80 backdrop-blur-md rounded-2xl shadow-xl border border-white/20 dark:border-zinc-700/50 flex items-center gap-3 z-20 {class}",
        )>
            <div class=format!("w-10 h-10 rounded-full flex items-center justify-center {tint}")>
                <i class=icon.class() />
            </div>
            <div>
                <div class="text-xs font-semibold text-zinc-500 dark:text-zinc-400">{label}</div>
                <div class="text-sm font-bold text-zinc-900 dark:text-zinc-100">{value}</div>
            </div>
        </div>
    }
}
