use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use crate::{
    content::{project_tiles, Icon, Project, ProjectAction, ProjectTile},
    motion::stagger,
};

use super::{reveal::FadeIn, Ambience, Eyebrow};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <div class="relative min-h-screen pt-24 pb-24">
            <Ambience glows=[
                "top-[-10%] right-[-5%] bg-gradient-to-b from-zinc-100/50 to-transparent dark:from-zinc-900/30",
                "bottom-[-10%] left-[-5%] bg-gradient-to-t from-zinc-100/50 to-transparent dark:from-zinc-900/30",
            ] />
            <div class="container px-6 mx-auto relative z-10 max-w-6xl">
                <section class="mb-20">
                    <FadeIn delay=0.1>
                        <Eyebrow label="Portfolio" icon=Icon::Layers />
                    </FadeIn>
                    <FadeIn delay=0.2>
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight text-zinc-900 dark:text-zinc-100 mb-6">
                            "Featured " <span class="text-zinc-500">"Projects"</span>
                        </h1>
                    </FadeIn>
                    <FadeIn delay=0.3>
                        <p class="text-xl text-zinc-600 dark:text-zinc-400 max-w-2xl leading-relaxed">
                            "A selection of products I've designed and built, from multi-tenant SaaS platforms to healthcare systems, each focused on solving real problems for real users."
                        </p>
                    </FadeIn>
                </section>

                <ProjectGrid />

                <section class="mt-32 text-center">
                    <FadeIn delay=0.2>
                        <h2 class="text-3xl font-bold text-zinc-900 dark:text-zinc-100 mb-4">
                            "Have a project in mind?"
                        </h2>
                        <p class="text-zinc-600 dark:text-zinc-400 max-w-lg mx-auto mb-8">
                            "I'm always open to discussing new ideas, collaborations, or opportunities to build something meaningful."
                        </p>
                        <A
                            href="/contact"
                            attr:class="group inline-flex h-12 items-center justify-center gap-2 rounded-xl bg-zinc-900 dark:bg-zinc-100 px-8 text-sm font-semibold text-white dark:text-zinc-900 transition-all hover:bg-zinc-800 dark:hover:bg-zinc-200"
                        >
                            <span>"Let's talk"</span>
                            <i class=format!(
                                "{} transition-transform group-hover:translate-x-0.5",
                                Icon::ArrowRight.class(),
                            ) />
                        </A>
                    </FadeIn>
                </section>
            </div>
        </div>
    }
}

/// Authored projects in table order, then the placeholder tile.
#[component]
fn ProjectGrid() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            {project_tiles()
                .into_iter()
                .map(|tile| match tile {
                    ProjectTile::Authored { index, project } => {
                        view! { <ProjectCard project index /> }.into_any()
                    }
                    ProjectTile::ComingSoon => view! { <ComingSoonCard /> }.into_any(),
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let actions = project.actions();

    view! {
        <FadeIn
            delay=stagger(0.0, 0.15, index)
            class="group relative flex flex-col h-full rounded-3xl bg-white dark:bg-zinc-900/40 border border-zinc-200 dark:border-zinc-800 hover:border-zinc-300 dark:hover:border-zinc-700 overflow-hidden transition-all duration-300 hover:shadow-xl hover:-translate-y-1"
        >
            <div class=format!(
                "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-100 transition-opacity duration-500 pointer-events-none",
                project.accent,
            ) />
            <div class="relative p-8 flex flex-col h-full">
                <div class="flex items-start justify-between mb-6">
                    <div class="w-14 h-14 rounded-2xl bg-zinc-100 dark:bg-zinc-800 flex items-center justify-center text-zinc-900 dark:text-zinc-100 group-hover:scale-110 transition-transform duration-300">
                        <i class=format!("{} text-2xl", project.icon.class()) />
                    </div>
                    <i class=format!(
                        "{} text-zinc-400 opacity-0 group-hover:opacity-100 transition-opacity",
                        Icon::ArrowUpRight.class(),
                    ) />
                </div>
                <h3 class="text-2xl font-bold text-zinc-900 dark:text-zinc-100 mb-3">
                    {project.title}
                </h3>
                <p class="text-zinc-600 dark:text-zinc-400 leading-relaxed mb-6 flex-grow">
                    {project.description}
                </p>
                <ul class="flex flex-wrap gap-2 mb-8">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <li class="project-tag px-3 py-1 rounded-full bg-zinc-100 dark:bg-zinc-800/80 text-zinc-600 dark:text-zinc-300 text-xs font-medium border border-zinc-200 dark:border-zinc-700/50">
                                    {*tag}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                {(!actions.is_empty())
                    .then(|| {
                        view! {
                            <div class="flex items-center gap-4 pt-6 border-t border-zinc-100 dark:border-zinc-800">
                                {actions
                                    .into_iter()
                                    .map(|action| view! { <ActionLink action /> })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
        </FadeIn>
    }
}

#[component]
fn ActionLink(action: ProjectAction) -> impl IntoView {
    view! {
        <a
            href=action.href
            target="_blank"
            rel="noopener noreferrer"
            class="inline-flex items-center gap-2 text-sm font-semibold text-zinc-900 dark:text-zinc-100 hover:text-zinc-600 dark:hover:text-zinc-400 transition-colors"
        >
            <i class=action.icon().class() />
            <span>{action.label()}</span>
        </a>
    }
}

#[component]
fn ComingSoonCard() -> impl IntoView {
    view! {
        <FadeIn
            delay=0.6
            class="relative flex flex-col items-center justify-center h-full min-h-[320px] rounded-3xl border-2 border-dashed border-zinc-200 dark:border-zinc-800 p-8 text-center"
        >
            <div class="w-14 h-14 rounded-2xl bg-zinc-50 dark:bg-zinc-900 flex items-center justify-center mb-4">
                <i class=format!("{} text-2xl text-zinc-400", Icon::Sparkles.class()) />
            </div>
            <h3 class="text-xl font-bold text-zinc-900 dark:text-zinc-100 mb-2">
                "More in the works"
            </h3>
            <p class="text-zinc-500 dark:text-zinc-400 max-w-xs">
                "New projects are always on the way. Check back soon or reach out to see what I'm building."
            </p>
        </FadeIn>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{ProjectLinks, PROJECTS};

    fn render_card(project: &'static Project, index: usize) -> String {
        let owner = Owner::new();
        owner.set();
        view! { <ProjectCard project index /> }.to_html()
    }

    #[test]
    fn test_live_demo_follows_links() {
        // nidaamiye has a demo, daryeel does not
        let with_demo = render_card(&PROJECTS[0], 0);
        assert!(with_demo.contains("Live Demo"));
        assert!(with_demo.contains("Source Code"));

        let without_demo = render_card(&PROJECTS[1], 1);
        assert!(!without_demo.contains("Live Demo"));
        assert!(without_demo.contains("Source Code"));
        assert_eq!(without_demo.matches("border-t").count(), 1);
    }

    #[test]
    fn test_bare_project_has_no_actions() {
        static BARE: Project = Project {
            id: "bare",
            title: "Bare",
            description: "No links at all.",
            tags: &["Rust"],
            links: ProjectLinks {
                demo: None,
                source: None,
            },
            icon: Icon::Code,
            accent: "from-zinc-500/20 to-zinc-600/5",
        };
        let html = render_card(&BARE, 0);
        assert!(html.contains("Bare"));
        assert!(!html.contains("Live Demo"));
        assert!(!html.contains("Source Code"));
        assert!(!html.contains("border-t"));
    }

    #[test]
    fn test_tags_in_order() {
        let project = &PROJECTS[0];
        let html = render_card(project, 0);
        assert_eq!(html.matches("project-tag").count(), project.tags.len());
        let positions = project
            .tags
            .iter()
            .map(|tag| html.find(tag).unwrap_or_else(|| panic!("{tag} missing")))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_grid_places_placeholder_last() {
        let owner = Owner::new();
        owner.set();
        let html = view! { <ProjectGrid /> }.to_html();
        let mut positions = PROJECTS
            .iter()
            .map(|p| html.find(p.title).unwrap_or_else(|| panic!("{} missing", p.title)))
            .collect::<Vec<_>>();
        positions.push(html.find("More in the works").expect("placeholder missing"));
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
