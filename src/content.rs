#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "skills", label: "Skills" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "experience", label: "Experience" },
    NavItem { id: "achievements", label: "Achievements" },
    NavItem { id: "contact", label: "Contact" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub percent: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub source_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub role: &'static str,
    pub place: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I build backend services and data tooling, mostly in Python, and enjoy taking a rough prototype all the way to something people rely on every day.",
    "Lately I spend my spare time on machine learning experiments and on contributing fixes to the open-source libraries I use at work.",
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        skills: &[
            Skill { name: "Python", percent: "90" },
            Skill { name: "JavaScript", percent: "80" },
            Skill { name: "SQL", percent: "75" },
            Skill { name: "Rust", percent: "55" },
        ],
    },
    SkillCategory {
        title: "Frameworks",
        skills: &[
            Skill { name: "Django", percent: "85" },
            Skill { name: "FastAPI", percent: "80" },
            Skill { name: "React", percent: "70" },
        ],
    },
    SkillCategory {
        title: "Tooling",
        skills: &[
            Skill { name: "Docker", percent: "80" },
            Skill { name: "PostgreSQL", percent: "75" },
            Skill { name: "PyTorch", percent: "60" },
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Ledger Sync",
        description: "Reconciles bank exports against an accounting database and flags mismatches before month-end close.",
        tags: &["Python", "PostgreSQL", "Celery"],
        source_url: "https://github.com/",
    },
    Project {
        title: "Paper Digest",
        description: "Summarizes new arXiv papers for a reading group and posts a weekly digest to chat.",
        tags: &["Python", "Transformers", "FastAPI"],
        source_url: "https://github.com/",
    },
    Project {
        title: "Trail Map",
        description: "Offline-first hiking map with elevation profiles built from public GPS traces.",
        tags: &["React", "Leaflet", "IndexedDB"],
        source_url: "https://github.com/",
    },
];

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2023 – now",
        role: "Backend Engineer",
        place: "Northwind Analytics",
        summary: "Owns the ingestion pipeline and the internal reporting API.",
    },
    TimelineEntry {
        period: "2021 – 2023",
        role: "Full-Stack Developer",
        place: "Brightside Studio",
        summary: "Shipped client dashboards end to end, from schema to UI.",
    },
    TimelineEntry {
        period: "2017 – 2021",
        role: "BSc Computer Science",
        place: "State University",
        summary: "Thesis on approximate nearest-neighbour search.",
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        icon: "🏆",
        title: "Hackathon winner",
        detail: "First place at a regional civic-tech hackathon.",
    },
    Achievement {
        icon: "📦",
        title: "Open-source maintainer",
        detail: "Co-maintains a small data validation library.",
    },
    Achievement {
        icon: "🎤",
        title: "Conference speaker",
        detail: "Talk on testing data pipelines at a local Python meetup.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::parse_percent;

    #[test]
    fn every_nav_item_has_a_unique_id() {
        let mut ids: Vec<&str> = NAV_ITEMS.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NAV_ITEMS.len());
    }

    #[test]
    fn skill_percentages_are_valid() {
        for category in SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(
                    parse_percent(skill.percent).is_some(),
                    "{} has bad percent {}",
                    skill.name,
                    skill.percent
                );
            }
        }
    }
}
