use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_router::components::*;

use crate::{
    content::{Icon, Proficiency, Skill, SKILLS},
    motion::{grow_style, stagger},
};

use super::{
    reveal::{use_reveal, FadeIn},
    Ambience, Eyebrow,
};

#[component]
pub fn SkillsPage() -> impl IntoView {
    view! {
        <Title text="Skills" />
        <div class="relative min-h-screen pt-24 pb-24">
            <Ambience glows=[
                "top-0 right-0 bg-gradient-to-b from-zinc-100/50 to-transparent dark:from-zinc-900/30",
                "bottom-0 left-0 bg-gradient-to-t from-zinc-100/50 to-transparent dark:from-zinc-900/30",
            ] />
            <div class="container px-6 mx-auto relative z-10 max-w-6xl">
                <section class="mb-20 text-center md:text-left">
                    <FadeIn delay=0.1>
                        <Eyebrow label="Technical Arsenal" icon=Icon::Sparkles />
                    </FadeIn>
                    <FadeIn delay=0.2>
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight text-zinc-900 dark:text-zinc-100 mb-6">
                            "Skills & " <span class="text-zinc-500">"Technologies"</span>
                        </h1>
                    </FadeIn>
                    <FadeIn delay=0.3>
                        <p class="text-xl text-zinc-600 dark:text-zinc-400 max-w-2xl leading-relaxed mx-auto md:mx-0">
                            "A curated stack of modern tools and frameworks I use to build scalable, high-performance applications with exceptional user experiences."
                        </p>
                    </FadeIn>
                </section>

                <SkillGrid skills=SKILLS />

                <section class="mt-32 text-center">
                    <FadeIn delay=0.2>
                        <div class="inline-flex flex-col items-center p-8 rounded-3xl bg-zinc-50 dark:bg-zinc-900/50 border border-zinc-200 dark:border-zinc-800">
                            <h3 class="text-2xl font-bold text-zinc-900 dark:text-zinc-100 mb-4">
                                "Always Learning"
                            </h3>
                            <p class="text-zinc-600 dark:text-zinc-400 max-w-lg mb-6">
                                "Technology evolves fast. I'm constantly exploring new tools, patterns, and best practices to stay at the forefront of web development."
                            </p>
                            <A
                                href="/projects"
                                attr:class="group inline-flex h-11 items-center justify-center gap-2 rounded-xl bg-zinc-900 dark:bg-zinc-100 px-6 text-sm font-semibold text-white dark:text-zinc-900 transition-all hover:bg-zinc-800 dark:hover:bg-zinc-200"
                            >
                                <span>"See them in action"</span>
                                <i class=format!(
                                    "{} transition-transform group-hover:translate-x-0.5",
                                    Icon::ArrowRight.class(),
                                ) />
                            </A>
                        </div>
                    </FadeIn>
                </section>
            </div>
        </div>
    }
}

#[component]
fn SkillGrid(skills: &'static [Skill]) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {skills
                .iter()
                .enumerate()
                .map(|(index, skill)| view! { <SkillCard skill=*skill index /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn SkillCard(skill: Skill, index: usize) -> impl IntoView {
    view! {
        <FadeIn
            delay=stagger(0.0, 0.1, index)
            class="group relative p-6 rounded-2xl bg-white dark:bg-zinc-900/40 border border-zinc-200 dark:border-zinc-800 hover:border-zinc-300 dark:hover:border-zinc-700 hover:shadow-lg hover:-translate-y-1 transition-all duration-300"
        >
            <div class="flex items-start justify-between mb-6">
                <div class="flex items-center gap-4">
                    <div class="w-12 h-12 rounded-xl bg-zinc-100 dark:bg-zinc-800 flex items-center justify-center text-zinc-900 dark:text-zinc-100 group-hover:scale-110 transition-transform duration-300">
                        <i class=format!("{} text-2xl", skill.icon.class()) />
                    </div>
                    <div>
                        <h3 class="font-bold text-lg text-zinc-900 dark:text-zinc-100">
                            {skill.name}
                        </h3>
                        <span class="text-xs font-medium text-zinc-500 uppercase tracking-wider">
                            {skill.category.to_string()}
                        </span>
                    </div>
                </div>
                <span class="text-sm font-bold text-zinc-900 dark:text-zinc-100 tabular-nums">
                    {skill.proficiency.to_string()}
                </span>
            </div>
            <ProgressBar
                label=skill.name
                proficiency=skill.proficiency
                delay=stagger(0.2, 0.1, index)
            />
        </FadeIn>
    }
}

/// Fill grows from empty to the proficiency width once the track is on screen.
#[component]
fn ProgressBar(label: &'static str, proficiency: Proficiency, delay: f64) -> impl IntoView {
    let track = NodeRef::<html::Div>::new();
    let visible = use_reveal(track, "0px");
    let width = proficiency.width();

    view! {
        <div
            node_ref=track
            class="h-2 w-full bg-zinc-100 dark:bg-zinc-800 rounded-full overflow-hidden"
            role="progressbar"
            aria-label=format!("{label} proficiency")
            aria-valuemin="0"
            aria-valuemax=Proficiency::MAX.to_string()
            aria-valuenow=proficiency.percent().to_string()
        >
            <div
                class="h-full bg-zinc-900 dark:bg-zinc-100 rounded-full"
                style=move || grow_style(&width, visible.get(), delay)
            />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::SkillCategory;

    fn render_card(skill: Skill, index: usize) -> String {
        let owner = Owner::new();
        owner.set();
        view! { <SkillCard skill index /> }.to_html()
    }

    #[test]
    fn test_card_shows_name_category_and_level() {
        let html = render_card(SKILLS[0], 0);
        assert!(html.contains("Next.js"));
        assert!(html.contains("Frontend"));
        assert!(html.contains("95%"));
        assert!(html.contains(Icon::NextJs.class()));
    }

    #[test]
    fn test_bar_starts_empty_and_reports_value() {
        let skill = Skill {
            name: "Rust",
            proficiency: Proficiency::new(150),
            icon: Icon::Code,
            category: SkillCategory::Core,
        };
        let html = render_card(skill, 3);
        assert!(html.contains(r#"aria-valuenow="100""#));
        assert!(html.contains("width: 0%"));
        // delay 0.2 + 3 * 0.1
        assert!(html.contains("ease-out 0.50s"));
    }

    #[test]
    fn test_grid_keeps_table_order() {
        let owner = Owner::new();
        owner.set();
        let html = view! { <SkillGrid skills=SKILLS /> }.to_html();
        let positions = SKILLS
            .iter()
            .map(|s| {
                html.find(s.name)
                    .unwrap_or_else(|| panic!("{} missing", s.name))
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
