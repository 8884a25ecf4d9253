//! Static page content.
//!
//! Plain tables rendered by the section components. Nothing here changes
//! at runtime.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const OWNER_NAME: &str = "Juan Rayhan";
pub const SITE_DESCRIPTION: &str = "Showcase of my works";
pub const COPYRIGHT_YEAR: u16 = 2025;

pub const SPLASH_HEADING: &str = "Welcome to My Portfolio";

pub const HERO_HEADLINE: &str = "Welcome to My Creative World";
pub const HERO_TAGLINE: &str = "I'm a passionate developer crafting beautiful digital experiences";
pub const HERO_CTA: &str = "Explore My Work";

pub const ABOUT_TEXT: &str = "I'm a creative developer with a passion for building beautiful and functional websites. \
With expertise in modern web technologies, I bring ideas to life through code.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: u16,
}

/// Glyph shown next to a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Server,
    Cloud,
    Database,
    GitBranch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: SkillIcon,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Project 1",
        description: "A brief description of the project and its key features.",
        image: "/placeholder.svg?text=Project+1",
    },
    Project {
        title: "Project 2",
        description: "A brief description of the project and its key features.",
        image: "/placeholder.svg?text=Project+2",
    },
    Project {
        title: "Project 3",
        description: "A brief description of the project and its key features.",
        image: "/placeholder.svg?text=Project+3",
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification { name: "AWS Certified Solutions Architect", issuer: "Amazon Web Services", year: 2023 },
    Certification { name: "Google Professional Cloud Architect", issuer: "Google Cloud", year: 2022 },
    Certification {
        name: "Microsoft Certified: Azure Solutions Architect Expert",
        issuer: "Microsoft",
        year: 2021,
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", icon: SkillIcon::Code },
    Skill { name: "Node.js", icon: SkillIcon::Server },
    Skill { name: "Python", icon: SkillIcon::Code },
    Skill { name: "AWS", icon: SkillIcon::Cloud },
    Skill { name: "Docker", icon: SkillIcon::Database },
    Skill { name: "Git", icon: SkillIcon::GitBranch },
];

/// Footer line, e.g. `© 2025 Juan Rayhan. All rights reserved.`
#[must_use]
pub fn copyright_line() -> String {
    format!("\u{a9} {COPYRIGHT_YEAR} {OWNER_NAME}. All rights reserved.")
}
