//! Résumé content. Everything here is static; the page only filters and orders it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillLevel {
    High,
    Medium,
    Low,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::High => "level-high",
            Self::Medium => "level-medium",
            Self::Low => "level-low",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillCategory {
    Programming,
    Tools,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
    pub category: SkillCategory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub highlight: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Employer {
    pub company: &'static str,
    pub overall_period: &'static str,
    pub roles: &'static [Role],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub institution: &'static str,
    pub period: &'static str,
    pub title: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reference {
    pub name: &'static str,
    pub role: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub display: &'static str,
    pub external: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub display_name: &'static str,
    pub headline: &'static str,
    pub level: &'static str,
    pub level_title: &'static str,
    pub xp_percent: u8,
    pub career_bar_percent: u8,
    pub career_span: &'static str,
    pub location: &'static str,
    pub languages: &'static str,
    pub portrait: &'static str,
    pub summary: &'static str,
    pub objective: &'static str,
    pub focus_tags: &'static [&'static str],
    pub contacts: &'static [ContactLink],
}

pub const PROFILE: Profile = Profile {
    name: "WAN MUHAMMAD FAIZ BIN WAN ABD GHANI",
    display_name: "Wan Muhammad Faiz",
    headline: "Game Client Engineer · Software Engineer · Full-stack Developer",
    level: "05",
    level_title: "SOFTWARE ENGINEER",
    xp_percent: 92,
    career_bar_percent: 78,
    career_span: "5+ YEARS",
    location: "MY, JOHOR",
    languages: "EN / MY",
    portrait: "/profile-icon.png",
    summary: "Motivated software engineer with strong experience in cloud, backend and client engineering. Enjoys solving complex problems, improving product performance and working across the full stack from infrastructure to UX.",
    objective: "Seeking opportunities with forward-thinking teams where I can apply my engineering skills, keep learning and help deliver reliable, scalable products in a professional environment.",
    focus_tags: &[
        "Bachelor in Software Engineering (UMT)",
        "Cloud · Backend · Client Engineering",
    ],
    contacts: &[
        ContactLink {
            label: "PHONE",
            href: "tel:+60104164294",
            display: "+60 10-416 4294",
            external: false,
        },
        ContactLink {
            label: "EMAIL",
            href: "mailto:wan_faiz@yahoo.com",
            display: "wan_faiz@yahoo.com",
            external: false,
        },
        ContactLink {
            label: "LINKEDIN",
            href: "https://www.linkedin.com/in/wan-m-faiz",
            display: "/in/wan-m-faiz",
            external: true,
        },
        ContactLink {
            label: "GITHUB",
            href: "https://github.com/WMFaiz",
            display: "github.com/WMFaiz",
            external: true,
        },
    ],
};

use SkillCategory::{Programming, Tools};
use SkillLevel::{High, Low, Medium};

const fn skill(name: &'static str, level: SkillLevel, category: SkillCategory) -> Skill {
    Skill {
        name,
        level,
        category,
    }
}

pub const SKILLS: &[Skill] = &[
    skill("C#", High, Programming),
    skill("Python", High, Programming),
    skill("Java", High, Programming),
    skill("JavaScript", High, Programming),
    skill("jQuery", High, Programming),
    skill("Go", Medium, Programming),
    skill("React.js", Medium, Programming),
    skill("Vue.js", Medium, Programming),
    skill("PHP", Medium, Programming),
    skill("Rails", Low, Programming),
    skill("MySQL", High, Tools),
    skill("PostgreSQL", High, Tools),
    skill("SQL Server", High, Tools),
    skill("SQLite", High, Tools),
    skill("MongoDB", High, Tools),
    skill("GitHub", High, Tools),
    skill("Visual Studio", High, Tools),
    skill("Unity3D", High, Tools),
    skill("Jira", High, Tools),
    skill("Jenkins", High, Tools),
    skill("Eclipse", Medium, Tools),
    skill("Ubuntu", Medium, Tools),
    skill("Firebase", Medium, Tools),
    skill("Odoo (ERP)", Medium, Tools),
    skill("AWS", Medium, Tools),
    skill("Discourse", Medium, Tools),
    skill("Electron", Medium, Tools),
    skill("Azure", Medium, Tools),
];

/// Oldest first; [`career_timeline`] reverses it for display.
pub const EMPLOYERS: &[Employer] = &[
    Employer {
        company: "PfC Engineering",
        overall_period: "6 months",
        roles: &[Role {
            title: "Semi-skilled Technician",
            period: "6 months",
            summary: "Worked in a team-based environment and supported colleagues across tasks, demonstrating adaptability and collaboration.",
            highlight: false,
        }],
    },
    Employer {
        company: "Blue Vinegar",
        overall_period: "8 months",
        roles: &[Role {
            title: "Technical Analyst",
            period: "8 months",
            summary: "Created and enhanced ERP solutions on the Odoo platform with custom modules and workflows.",
            highlight: false,
        }],
    },
    Employer {
        company: "Shimmersensing",
        overall_period: "2 years 2 months",
        roles: &[Role {
            title: "Software Engineer",
            period: "2 years 2 months",
            summary: "Handled AWS accounts, cloud deployments, software development, troubleshooting and system improvements.",
            highlight: false,
        }],
    },
    Employer {
        company: "Verisense Health",
        overall_period: "1 year",
        roles: &[Role {
            title: "Software Engineer",
            period: "1 year",
            summary: "Maintained AWS infrastructure, Jenkins deployment pipelines and full-stack features for Verisense Cloud.",
            highlight: false,
        }],
    },
    Employer {
        company: "Ricrym",
        overall_period: "3 months",
        roles: &[Role {
            title: "FullStack Developer",
            period: "3 months",
            summary: "Improved system security and UX with SSO, remember-me, data encryption/decryption, frontend redesign, backend refactor, deployment and Discourse community setup.",
            highlight: false,
        }],
    },
    Employer {
        company: "Okaichi Sdn. Bhd",
        overall_period: "Apr 2025 – Present",
        roles: &[
            Role {
                title: "Lead Tools Engineer",
                period: "Oct 2025 – Present",
                summary: "Leading the client engineering team: owning technical direction, code quality, repo structure, build automation and performance across in-game and out-of-game flows.",
                highlight: true,
            },
            Role {
                title: "Tools Engineer",
                period: "Apr 2025 – Oct 2025",
                summary: "Joined as Client Engineer focusing on gameplay and client features, profiling and performance fixes, tools, automation and integrations, leading to promotion.",
                highlight: false,
            },
        ],
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        institution: "Universiti Malaysia Terengganu (UMT)",
        period: "2017 – 2020",
        title: "Bachelor in Software Engineering",
    },
    Education {
        institution: "Politeknik Sultan Mizan Zainal Abidin (PSMZA)",
        period: "2013 – 2015",
        title: "Diploma in Mechanical Engineering",
    },
    Education {
        institution: "Sekolah Menengah Kebangsaan Sura",
        period: "2006 – 2012",
        title: "Sijil Pelajaran Malaysia (SPM)",
    },
];

pub const REFERENCES: &[Reference] = &[
    Reference {
        name: "Muhammad Amir Qushairi Jais",
        role: "Lead Fullstack Developer",
        phone: "019-9111920",
        email: "muhd.amirqushairijais@gmail.com",
    },
    Reference {
        name: "Aqil Ashraaf",
        role: "Web Developer",
        phone: "010-5739057",
        email: "aqilashraaf.18@gmail.com",
    },
    Reference {
        name: "Muaaz Badrul Hisham",
        role: "Software Engineer",
        phone: "019-9652230",
        email: "muaazbadrul@gmail.com",
    },
    Reference {
        name: "Nisa Asila",
        role: "Software Engineer",
        phone: "013-3236905",
        email: "nisaasilamn@gmail.com",
    },
];

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |skill| skill.category == category)
}

/// Employers newest first.
pub fn career_timeline() -> impl ExactSizeIterator<Item = &'static Employer> {
    EMPLOYERS.iter().rev()
}

/// Every timeline entry but the last gets a connector line to the next one.
pub fn has_connector(index: usize, total: usize) -> bool {
    index + 1 < total
}
