//! Static site content.
//!
//! Records are defined at build time and rendered in the order they appear
//! here. The blog list is kept newest-first by hand; nothing sorts it.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use time::Date;
use time::macros::format_description;

/// Site owner details shown in the header, hero, and footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    /// Letter shown in the avatar.
    pub initial: &'static str,
    pub headline: &'static str,
    pub bio: &'static str,
    pub copyright_year: u16,
}

pub const PROFILE: Profile = Profile {
    name: "Xevrion",
    initial: "X",
    headline: "Hey, I'm Xevrion",
    bio: "Full Stack Developer & Creative Technologist. I build beautiful digital experiences and love exploring new technologies.",
    copyright_year: 2025,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with payment integration and inventory management.",
        link: "#",
    },
    Project {
        title: "AI Chat Application",
        description: "Real-time chat app powered by AI with smart responses and context awareness.",
        link: "#",
    },
    Project {
        title: "Portfolio CMS",
        description: "Content management system for creative professionals with drag-and-drop interface.",
        link: "#",
    },
    Project {
        title: "Task Management Tool",
        description: "Collaborative task manager with real-time updates and team features.",
        link: "#",
    },
];

pub const SKILLS: &[&str] = &[
    "React",
    "Next.js",
    "TypeScript",
    "Node.js",
    "Python",
    "PostgreSQL",
    "MongoDB",
    "Docker",
    "AWS",
    "Git",
    "Tailwind CSS",
    "GraphQL",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Twitter,
    Email,
}

impl SocialKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Email => "Email",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { kind: SocialKind::GitHub, href: "https://github.com/xevrion" },
    SocialLink { kind: SocialKind::LinkedIn, href: "https://linkedin.com" },
    SocialLink { kind: SocialKind::Twitter, href: "https://twitter.com" },
    SocialLink { kind: SocialKind::Email, href: "mailto:hello@xevrion.dev" },
];

/// Blog index entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Post {
    pub title: &'static str,
    pub excerpt: &'static str,
    /// `yyyy-mm-dd`.
    pub date: &'static str,
    pub read_time: &'static str,
    pub slug: &'static str,
}

impl Post {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    /// Date as shown in the list, e.g. `Jan 5, 2025`.
    #[must_use]
    pub fn display_date(&self) -> String {
        format_display_date(self.date)
    }
}

pub const POSTS: &[Post] = &[
    Post {
        title: "Building Modern Web Applications with Next.js 15",
        excerpt: "Exploring the latest features and best practices for building scalable web applications with the newest version of Next.js.",
        date: "2025-01-10",
        read_time: "5 min read",
        slug: "nextjs-15-guide",
    },
    Post {
        title: "The Future of TypeScript: What's Coming in 2025",
        excerpt: "A deep dive into the upcoming TypeScript features and how they'll change the way we write type-safe code.",
        date: "2025-01-05",
        read_time: "7 min read",
        slug: "typescript-2025",
    },
    Post {
        title: "Mastering Tailwind CSS: Advanced Techniques",
        excerpt: "Learn advanced Tailwind CSS patterns and techniques to create stunning, performant user interfaces.",
        date: "2024-12-28",
        read_time: "6 min read",
        slug: "tailwind-advanced",
    },
    Post {
        title: "React Server Components: A Complete Guide",
        excerpt: "Understanding React Server Components and how they revolutionize data fetching and rendering in modern React applications.",
        date: "2024-12-20",
        read_time: "10 min read",
        slug: "react-server-components",
    },
];

/// Format an ISO `yyyy-mm-dd` date as `Mon D, YYYY`. Unparseable input is
/// returned unchanged.
#[must_use]
pub fn format_display_date(iso: &str) -> String {
    let input = format_description!("[year]-[month]-[day]");
    let output = format_description!("[month repr:short] [day padding:none], [year]");
    Date::parse(iso, input)
        .ok()
        .and_then(|date| date.format(output).ok())
        .unwrap_or_else(|| iso.to_owned())
}
