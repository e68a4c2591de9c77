//! Fixed page content: the section list and everything rendered verbatim.
//!
//! The five sections double as the whole navigation protocol: each
//! [`Section`] id is both the element id the visibility tracker observes
//! and the anchor the smooth-scroll navigator resolves. All data here is
//! immutable for the lifetime of the page.

/// One of the five page regions, in top-to-bottom page order.
///
/// The derived ordering is page order; the visibility tracker falls back
/// to it when two qualifying regions report the same top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// All sections, in page order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// The element id carried by the section's DOM node.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    /// The in-page anchor for href attributes (`#home`, `#about`, ...).
    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    /// Reverse lookup from an element id, for observer callbacks.
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// One entry in the fixed navigation bar.
#[derive(Debug, Clone, Copy)]
pub struct NavTarget {
    pub section: Section,
    pub label: &'static str,
}

/// The navigation list, in render order. Matches [`Section::ALL`].
pub const NAV_TARGETS: [NavTarget; 5] = [
    NavTarget { section: Section::Home, label: "Home" },
    NavTarget { section: Section::About, label: "About" },
    NavTarget { section: Section::Projects, label: "Projects" },
    NavTarget { section: Section::Experience, label: "Experience" },
    NavTarget { section: Section::Contact, label: "Contact" },
];

/// Fragments revealed by the typed tagline, joined by
/// [`crate::tagline::SEPARATOR`].
pub const TAGLINE_FRAGMENTS: [&str; 2] = ["Aspiring Software Engineer", "Front End Developer"];

/// A skill with a proficiency bar in the about section.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Bar width once revealed, in percent.
    pub level_pct: u8,
}

pub const SKILLS: [Skill; 8] = [
    Skill { name: "JavaScript", level_pct: 66 },
    Skill { name: "React", level_pct: 40 },
    Skill { name: "Node.js", level_pct: 30 },
    Skill { name: "Python", level_pct: 40 },
    Skill { name: "Java", level_pct: 40 },
    Skill { name: "SQL & NoSQL", level_pct: 65 },
    Skill { name: "Tailwind CSS", level_pct: 30 },
    Skill { name: "Git & GitHub", level_pct: 50 },
];

/// A project card.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image_url: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Drawing App",
        description: "A web app for drawing and visualizing complex datasets using D3.js and React, offering interactive charts and graphs.",
        tech: &["React", "Tailwind CSS"],
        image_url: "https://cdn.pixabay.com/photo/2023/12/07/11/11/girl-8435339_1280.png",
        link: "https://drawing-sandy.vercel.app/",
    },
    Project {
        title: "Quiz App",
        description: "A concept quiz app with a focus on UI/UX, built with React and Tailwind CSS.",
        tech: &["React", "Tailwind CSS"],
        image_url: "https://media.istockphoto.com/id/2172452640/vector/question-mark-seamless-repeating-tileable-background.webp?s=2048x2048&w=is&k=20&c=FxWCXZE2zc7JgzK4UYtKqW6eTocgihLcXOMXXr052KU=",
        link: "https://quiz-app-inky-psi.vercel.app/",
    },
    Project {
        title: "Progress Bar Project",
        description: "A project showcasing progress bars with various features, built with React and Tailwind CSS.",
        tech: &["React", "Tailwind CSS"],
        image_url: "https://media.istockphoto.com/id/504749876/vector/glowing-colorful-loaders-set.webp?s=2048x2048&w=is&k=20&c=ddo5HE2MaH0SbC0A4clGLnhX1SjyD0_o7O3W5TTRQCw=",
        link: "https://progress-bar-two-xi.vercel.app/",
    },
];

/// A timeline entry in the experience section.
#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCES: [Experience; 2] = [
    Experience {
        role: "Software Engineer Intern",
        company: "Ethiopian Federal Civil Service",
        duration: "2023",
        highlights: &[
            "Gained experience in a professional work environment.",
            "Worked with SQL and other technologies to manage and analyze data.",
            "Collaborated with teams to develop and maintain internal systems.",
        ],
    },
    Experience {
        role: "Web Developer",
        company: "Freelance",
        duration: "2023 - Present",
        highlights: &[
            "Collaborated with teams to work on an e-commerce website with delivery features.",
            "Developed and maintained user-friendly interfaces using React and Tailwind CSS.",
            "Worked closely with clients to understand requirements and deliver custom solutions.",
        ],
    },
];

/// Shown in the experience section when the timeline is empty.
pub const NO_EXPERIENCE_NOTE: &str =
    "Eager to gain professional experience and contribute to exciting projects!";

/// Substituted for the profile photo when it fails to load.
pub const AVATAR_FALLBACK_URL: &str =
    "https://placehold.co/320x320/1A202C/718096?text=Image+Error";

/// Substituted for a project thumbnail when it fails to load.
pub const THUMB_FALLBACK_URL: &str =
    "https://placehold.co/600x400/1A202C/718096?text=Image+Error";

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        assert_eq!(Section::from_id("blog"), None);
        assert_eq!(Section::from_id(""), None);
        assert_eq!(Section::from_id("Home"), None); // ids are lowercase
    }

    #[test]
    fn anchors_are_ids_with_hash_prefix() {
        assert_eq!(Section::Home.anchor(), "#home");
        assert_eq!(Section::Contact.anchor(), "#contact");
    }

    #[test]
    fn nav_targets_cover_all_sections_in_page_order() {
        let from_nav: Vec<Section> = NAV_TARGETS.iter().map(|t| t.section).collect();
        assert_eq!(from_nav, Section::ALL.to_vec());
    }

    #[test]
    fn sections_order_top_to_bottom() {
        // The tracker's tie-break leans on this ordering.
        assert!(Section::Home < Section::About);
        assert!(Section::Experience < Section::Contact);
    }

    #[test]
    fn skill_levels_are_percentages() {
        for skill in SKILLS {
            assert!(skill.level_pct <= 100, "{} exceeds 100%", skill.name);
        }
    }
}
