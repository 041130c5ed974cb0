use std::fmt;

/// Devicon font, loaded by the document shell for the `devicon-*` glyphs.
pub const DEVICON_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css";

/// Icon glyphs. Tech logos come from devicon, the rest from the `extra-*` rules in `input.css`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GraduationCap,
    HeartPulse,
    BookOpen,
    NextJs,
    TypeScript,
    React,
    Tailwind,
    JavaScript,
    Shadcn,
    Framer,
    Node,
    Mongo,
    Prisma,
    Code,
    Users,
    Zap,
    Heart,
    Mail,
    Github,
    Phone,
    Globe,
    Terminal,
    Layers,
    Cpu,
    Sparkles,
    ArrowRight,
    ArrowUpRight,
    Send,
    Spinner,
    Check,
    Menu,
    Close,
    Sun,
    Moon,
}

impl Icon {
    pub const ALL: [Icon; 34] = [
        Icon::GraduationCap,
        Icon::HeartPulse,
        Icon::BookOpen,
        Icon::NextJs,
        Icon::TypeScript,
        Icon::React,
        Icon::Tailwind,
        Icon::JavaScript,
        Icon::Shadcn,
        Icon::Framer,
        Icon::Node,
        Icon::Mongo,
        Icon::Prisma,
        Icon::Code,
        Icon::Users,
        Icon::Zap,
        Icon::Heart,
        Icon::Mail,
        Icon::Github,
        Icon::Phone,
        Icon::Globe,
        Icon::Terminal,
        Icon::Layers,
        Icon::Cpu,
        Icon::Sparkles,
        Icon::ArrowRight,
        Icon::ArrowUpRight,
        Icon::Send,
        Icon::Spinner,
        Icon::Check,
        Icon::Menu,
        Icon::Close,
        Icon::Sun,
        Icon::Moon,
    ];

    pub fn class(self) -> &'static str {
        match self {
            Icon::NextJs => "devicon-nextjs-plain",
            Icon::TypeScript => "devicon-typescript-plain",
            Icon::React => "devicon-react-original",
            Icon::Tailwind => "devicon-tailwindcss-plain",
            Icon::JavaScript => "devicon-javascript-plain",
            Icon::Framer => "devicon-framermotion-original",
            Icon::Node => "devicon-nodejs-plain",
            Icon::Mongo => "devicon-mongodb-plain",
            Icon::Prisma => "devicon-prisma-original",
            Icon::Github => "devicon-github-original",
            Icon::Shadcn => "extra-shadcn",
            Icon::GraduationCap => "extra-graduation-cap",
            Icon::HeartPulse => "extra-heart-pulse",
            Icon::BookOpen => "extra-book-open",
            Icon::Code => "extra-code",
            Icon::Users => "extra-users",
            Icon::Zap => "extra-zap",
            Icon::Heart => "extra-heart",
            Icon::Mail => "extra-email",
            Icon::Phone => "extra-phone",
            Icon::Globe => "extra-globe",
            Icon::Terminal => "extra-terminal",
            Icon::Layers => "extra-layers",
            Icon::Cpu => "extra-cpu",
            Icon::Sparkles => "extra-sparkles",
            Icon::ArrowRight => "extra-arrow-right",
            Icon::ArrowUpRight => "extra-arrow-up-right",
            Icon::Send => "extra-send",
            Icon::Spinner => "extra-loader",
            Icon::Check => "extra-check-circle",
            Icon::Menu => "extra-menu",
            Icon::Close => "extra-close",
            Icon::Sun => "extra-sun",
            Icon::Moon => "extra-moon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_display: &'static str,
    pub github: &'static str,
    pub location: &'static str,
    pub image: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }

    /// GitHub URL without the scheme, for display.
    pub fn github_display(&self) -> &'static str {
        self.github
            .strip_prefix("https://")
            .unwrap_or(self.github)
    }
}

pub const OWNER: Profile = Profile {
    name: "Eng Abdalla",
    initials: "EA",
    role: "Fullstack SW Engineer",
    tagline: "Senior Product Engineer & UI/UX Architect building scalable, human-centered applications with focus and precision.",
    email: "enga95311@gmail.com",
    phone: "+252613169435",
    phone_display: "+252 61 316 9435",
    github: "https://github.com/engabdullah-2024",
    location: "Somalia",
    image: "/images/profile.jpeg",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        name: "About",
        href: "/about",
    },
    NavLink {
        name: "Skills",
        href: "/skills",
    },
    NavLink {
        name: "Projects",
        href: "/projects",
    },
    NavLink {
        name: "Contact",
        href: "/contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectLinks {
    pub demo: Option<&'static str>,
    pub source: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub links: ProjectLinks,
    pub icon: Icon,
    /// Tailwind gradient stops shown behind the card on hover.
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Demo,
    Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectAction {
    pub kind: ActionKind,
    pub href: &'static str,
}

impl ProjectAction {
    pub fn label(&self) -> &'static str {
        match self.kind {
            ActionKind::Demo => "Live Demo",
            ActionKind::Source => "Source Code",
        }
    }

    pub fn icon(&self) -> Icon {
        match self.kind {
            ActionKind::Demo => Icon::Globe,
            ActionKind::Source => Icon::Github,
        }
    }
}

impl Project {
    /// Links for the card's action row: demo first, then source, each only when present.
    pub fn actions(&self) -> Vec<ProjectAction> {
        let demo = self.links.demo.map(|href| ProjectAction {
            kind: ActionKind::Demo,
            href,
        });
        let source = self.links.source.map(|href| ProjectAction {
            kind: ActionKind::Source,
            href,
        });
        demo.into_iter().chain(source).collect()
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "nidaamiye",
        title: "Nidaamiye",
        description: "A comprehensive multi-tenant school management SaaS designed for modern education institutions in Somalia. Streamlines administration, grading, and student tracking.",
        tags: &["Next.js", "TypeScript", "Prisma", "MongoDB", "Shadcn UI"],
        links: ProjectLinks {
            demo: Some("#"),
            source: Some("https://github.com/engabdullah-2024"),
        },
        icon: Icon::GraduationCap,
        accent: "from-blue-500/20 to-blue-600/5",
    },
    Project {
        id: "daryeel",
        title: "DaryeelCare",
        description: "Modern hospital management system and patient booking platform. Features real-time appointment scheduling, patient records, and doctor portals.",
        tags: &["Next.js", "Tailwind", "Framer Motion", "PostgreSQL"],
        links: ProjectLinks {
            demo: None,
            source: Some("https://github.com/engabdullah-2024"),
        },
        icon: Icon::HeartPulse,
        accent: "from-emerald-500/20 to-emerald-600/5",
    },
    Project {
        id: "hayaan",
        title: "Hayaan LMS",
        description: "An intuitive Learning Management System built for students and educators. Supports course delivery, quizzes, progress tracking, and interactive learning materials.",
        tags: &["Next.js", "TypeScript", "Tailwind", "Stripe"],
        links: ProjectLinks {
            demo: Some("#"),
            source: Some("https://github.com/engabdullah-2024"),
        },
        icon: Icon::BookOpen,
        accent: "from-amber-500/20 to-amber-600/5",
    },
];

/// One cell of the projects grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectTile {
    Authored { index: usize, project: &'static Project },
    ComingSoon,
}

pub fn project_tiles() -> Vec<ProjectTile> {
    PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| ProjectTile::Authored { index, project })
        .chain(std::iter::once(ProjectTile::ComingSoon))
        .collect()
}

/// Skill level as a percentage; construction clamps to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Proficiency(u8);

impl Proficiency {
    pub const MAX: u8 = 100;

    pub const fn new(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    pub const fn percent(self) -> u8 {
        self.0
    }

    /// CSS width for the progress bar fill.
    pub fn width(self) -> String {
        format!("{}%", self.0)
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Core,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Core => "Core",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub proficiency: Proficiency,
    pub icon: Icon,
    pub category: SkillCategory,
}

const fn skill(name: &'static str, level: u8, icon: Icon, category: SkillCategory) -> Skill {
    Skill {
        name,
        proficiency: Proficiency::new(level),
        icon,
        category,
    }
}

pub const SKILLS: &[Skill] = &[
    skill("Next.js", 95, Icon::NextJs, SkillCategory::Frontend),
    skill("TypeScript", 90, Icon::TypeScript, SkillCategory::Core),
    skill("React", 95, Icon::React, SkillCategory::Frontend),
    skill("Tailwind CSS", 90, Icon::Tailwind, SkillCategory::Frontend),
    skill("JavaScript", 95, Icon::JavaScript, SkillCategory::Core),
    skill("shadcn/ui", 85, Icon::Shadcn, SkillCategory::Frontend),
    skill("Framer Motion", 80, Icon::Framer, SkillCategory::Frontend),
    skill("Node.js", 85, Icon::Node, SkillCategory::Backend),
    skill("MongoDB", 85, Icon::Mongo, SkillCategory::Backend),
    skill("Prisma", 80, Icon::Prisma, SkillCategory::Backend),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: &[Value] = &[
    Value {
        icon: Icon::Code,
        title: "Clean & Maintainable",
        description: "I write code that is easy to read, test, and scale. Future me (and other developers) will be thankful for the clarity.",
    },
    Value {
        icon: Icon::Users,
        title: "User-Centric Design",
        description: "Features don't matter if they don't solve user problems. I obsess over the user journey and experience.",
    },
    Value {
        icon: Icon::Zap,
        title: "Performance First",
        description: "Speed is a feature. I optimize for fast load times, smooth interactions, and efficient resource usage.",
    },
    Value {
        icon: Icon::Heart,
        title: "Continuous Growth",
        description: "Technology moves fast. I stay ahead by constantly learning, experimenting, and refining my craft.",
    },
];

pub const FOCUS_AREAS: &[&str] = &[
    "Product Engineering",
    "Frontend Systems",
    "Backend Architecture",
    "Performance & UX",
];

pub const TECH_STACK: &[&str] = &[
    "Next.js",
    "TypeScript",
    "Tailwind CSS",
    "React",
    "Node.js",
    "PostgreSQL",
    "Framer Motion",
    "Shadcn/ui",
    "Git",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechBadge {
    pub icon: Icon,
    pub label: &'static str,
}

pub const HERO_STACK: &[TechBadge] = &[
    TechBadge {
        icon: Icon::Globe,
        label: "Next.js",
    },
    TechBadge {
        icon: Icon::Code,
        label: "TypeScript",
    },
    TechBadge {
        icon: Icon::Layers,
        label: "Tailwind",
    },
    TechBadge {
        icon: Icon::Cpu,
        label: "Framer Motion",
    },
    TechBadge {
        icon: Icon::Terminal,
        label: "Node.js",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

impl ContactMethod {
    /// Web targets open in a new browsing context; `mailto:`/`tel:` stay in place.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        icon: Icon::Mail,
        label: "Email Me",
        value: "enga95311@gmail.com",
        href: "mailto:enga95311@gmail.com",
    },
    ContactMethod {
        icon: Icon::Github,
        label: "GitHub",
        value: "github.com/engabdullah-2024",
        href: "https://github.com/engabdullah-2024",
    },
    ContactMethod {
        icon: Icon::Phone,
        label: "Call Me",
        value: "+252 61 316 9435",
        href: "tel:+252613169435",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_icon_has_a_glyph() {
        let css = include_str!("../input.css");
        let unique = Icon::ALL.iter().map(|i| i.class()).collect::<HashSet<_>>();
        assert_eq!(unique.len(), Icon::ALL.len());

        let missing = Icon::ALL
            .iter()
            .map(|i| i.class())
            .filter(|class| match class.strip_prefix("extra-") {
                Some(_) => !css.contains(&format!(".{class} {{\n    --icon: url(")),
                None => !class.starts_with("devicon-"),
            })
            .collect::<Vec<_>>();
        assert!(missing.is_empty(), "no glyph for {missing:?}");
    }

    #[test]
    fn test_demo_action_only_when_linked() {
        for project in PROJECTS {
            let actions = project.actions();
            let demo = actions.iter().find(|a| a.kind == ActionKind::Demo);
            match project.links.demo {
                Some(url) => {
                    let demo = demo.expect("demo link should produce an action");
                    assert_eq!(demo.href, url);
                    assert_eq!(demo.label(), "Live Demo");
                }
                None => assert!(demo.is_none(), "{} has no demo", project.id),
            }
        }
    }

    #[test]
    fn test_actions_order_and_absence() {
        let both = ProjectLinks {
            demo: Some("https://demo.example"),
            source: Some("https://src.example"),
        };
        let project = Project {
            links: both,
            ..PROJECTS[0]
        };
        let kinds = project
            .actions()
            .iter()
            .map(|a| a.kind)
            .collect::<Vec<_>>();
        assert_eq!(kinds, vec![ActionKind::Demo, ActionKind::Source]);

        let bare = Project {
            links: ProjectLinks::default(),
            ..PROJECTS[0]
        };
        assert!(bare.actions().is_empty());
    }

    #[test]
    fn test_proficiency_clamped() {
        assert_eq!(Proficiency::new(0).percent(), 0);
        assert_eq!(Proficiency::new(100).percent(), 100);
        assert_eq!(Proficiency::new(101).percent(), 100);
        assert_eq!(Proficiency::new(u8::MAX).width(), "100%");
        assert_eq!(Proficiency::new(42).to_string(), "42%");
        for s in SKILLS {
            assert!(s.proficiency.percent() <= Proficiency::MAX);
            assert_eq!(s.proficiency.width(), format!("{}%", s.proficiency.percent()));
        }
    }

    #[test]
    fn test_project_tiles() {
        let tiles = project_tiles();
        assert_eq!(tiles.len(), PROJECTS.len() + 1);
        let ids = tiles
            .iter()
            .filter_map(|t| match t {
                ProjectTile::Authored { project, .. } => Some(project.id),
                ProjectTile::ComingSoon => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["nidaamiye", "daryeel", "hayaan"]);
        assert_eq!(tiles.last(), Some(&ProjectTile::ComingSoon));
    }

    #[test]
    fn test_tags_unique() {
        for project in PROJECTS {
            let unique = project.tags.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), project.tags.len(), "{}", project.id);
        }
    }

    #[test]
    fn test_nav_links() {
        let hrefs = NAV_LINKS.iter().map(|l| l.href).collect::<Vec<_>>();
        assert_eq!(hrefs, vec!["/about", "/skills", "/projects", "/contact"]);
    }

    #[test]
    fn test_contact_targets() {
        assert_eq!(OWNER.mailto(), CONTACT_METHODS[0].href);
        assert_eq!(OWNER.tel(), CONTACT_METHODS[2].href);
        assert_eq!(OWNER.github_display(), CONTACT_METHODS[1].value);
        let external = CONTACT_METHODS
            .iter()
            .filter(|m| m.is_external())
            .map(|m| m.label)
            .collect::<Vec<_>>();
        assert_eq!(external, vec!["GitHub"]);
    }
}
