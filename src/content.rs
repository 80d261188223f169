//! Static portfolio content: info panels, projects, resume entries and links.

use crate::graphics::Rgb;

/// Top-level pages of the portfolio
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Route {
    Home,
    About,
    Portfolio,
    Contact,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Portfolio, Route::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Portfolio => "Portfolio",
            Route::Contact => "Contact",
        }
    }

    /// Next page in tab order, wrapping back to Home
    pub fn next(self) -> Route {
        let index = Route::ALL.iter().position(|&r| r == self).unwrap_or(0);
        Route::ALL[(index + 1) % Route::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub route: Route,
}

/// Overlay shown on the home page for one stage
#[derive(Debug)]
pub struct InfoPanel {
    pub lines: &'static [&'static str],
    pub link: Option<Link>,
}

/// Indexed by stage number minus one
pub static INFO_PANELS: [InfoPanel; 4] = [
    InfoPanel {
        lines: &["Hello, I am Aleksandar", "A Web Developer from Canada"],
        link: None,
    },
    InfoPanel {
        lines: &["Worked with many clients and learned many skills along the way"],
        link: Some(Link {
            label: "Learn More",
            route: Route::About,
        }),
    },
    InfoPanel {
        lines: &["Developed multiple portfolio over the years"],
        link: Some(Link {
            label: "Check out my portfolio",
            route: Route::Portfolio,
        }),
    },
    InfoPanel {
        lines: &["Need a project done or looking for a developer? Feel free to contact me"],
        link: Some(Link {
            label: "Let's Connect",
            route: Route::Contact,
        }),
    },
];

pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub theme: Rgb,
}

pub static PROJECTS: &[Project] = &[
    Project {
        name: "Symposium",
        description: "Symposium is a video chat connection platform for people to discuss topics covered in the podcasts they love. Built with React, Node, Express, Socket.IO, and a PostgreSQL database. Testing: Cypress",
        link: "https://github.com/AleksandarDmitrovic/symposium",
        theme: [239, 68, 68],
    },
    Project {
        name: "TidyTask",
        description: "Tidy task is an auto categorizing to-do list organizational web application. Built with HTML, SASS, Node, Express and a PostgreSQL database.",
        link: "https://github.com/AleksandarDmitrovic/tidyTask",
        theme: [34, 197, 94],
    },
    Project {
        name: "Interview Scheduler",
        description: "Interview Scheduler is a single-page interview booking application where users can book, edit and delete interview appointments. My first React App. Built with React, HTML, CSS Node, Express, and a PostgreSQL database. Testing: Jest, Storybook, Cypress",
        link: "https://github.com/AleksandarDmitrovic/scheduler",
        theme: [59, 130, 246],
    },
    Project {
        name: "Jungle",
        description: "A mini e-commerce application that was built with Rails 4.2. Built with Ruby on Rails, Stripe and a PostgreSQL database. Testing: RSpec, Capybara",
        link: "https://github.com/AleksandarDmitrovic/jungle-rails",
        theme: [236, 72, 153],
    },
    Project {
        name: "Tweeter",
        description: "Tweeter is a simple, single-page Twitter clone. Built with HTML, CSS, JS, jQuery, AJAX, Node, and Express.",
        link: "https://github.com/AleksandarDmitrovic/tweeter",
        theme: [148, 163, 184],
    },
    Project {
        name: "TinyApp",
        description: "TinyApp is a full-stack web application that allows users to shorten long URLs (à la bit.ly). Built with HTML, CSS, EJS, Node, and Express.",
        link: "https://github.com/AleksandarDmitrovic/tinyapp",
        theme: [234, 179, 8],
    },
];

pub struct Skill {
    pub name: &'static str,
    pub kind: &'static str,
}

pub static SKILLS: &[Skill] = &[
    Skill { name: "CSS", kind: "Frontend" },
    Skill { name: "Express", kind: "Backend" },
    Skill { name: "Git", kind: "Version Control" },
    Skill { name: "GitHub", kind: "Version Control" },
    Skill { name: "HTML", kind: "Frontend" },
    Skill { name: "JavaScript", kind: "Frontend" },
    Skill { name: "TypeScript", kind: "Frontend" },
    Skill { name: "MongoDB", kind: "Database" },
    Skill { name: "Material-UI", kind: "Frontend" },
    Skill { name: "Next.js", kind: "Frontend" },
    Skill { name: "Node.js", kind: "Backend" },
    Skill { name: "React", kind: "Frontend" },
    Skill { name: "Sass", kind: "Frontend" },
    Skill { name: "Tailwind CSS", kind: "Frontend" },
];

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub client: &'static str,
    pub date: &'static str,
    pub team_size: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Full stack Developer",
        company: "Accolite Digital",
        client: "Nutrien",
        date: "February 2022 - April 2024",
        team_size: "30+",
        highlights: &[
            "Developed new features and maintained micro-frontend based web applications for Nutrien's customers, Account Managers, and Sales representatives.",
            "Worked with two custom storybook component libraries, CircleCI and React.js, to develop and maintain over 10 micro apps.",
            "Was one of two developers to own an inventory reporting app project that was slated for three months that we completed in one month.",
        ],
    },
    Experience {
        title: "Full Stack Developer",
        company: "Accolite Digital",
        client: "Trimac",
        date: "September 2021 - February 2022",
        team_size: "10+",
        highlights: &[
            "Developed features on a single-page application aimed at streamlining the operations of trucking dispatchers for Trimac using React.js and GraphQL.",
            "Created company-specific components in a custom storybook component library.",
        ],
    },
    Experience {
        title: "Full Stack Developer",
        company: "Accolite Digital",
        client: "LaPrairie Group",
        date: "April 2021 - September 2021",
        team_size: "10+",
        highlights: &[
            "Developed features on a web-based platform for field operations staff to perform job functions online and offline on personal devices.",
            "Utilized React.js for responsive UI development.",
        ],
    },
    Experience {
        title: "Full Stack Intern",
        company: "Xerris Inc. Aquired by Accolite Digital",
        client: "",
        date: "February 2021 - April 2021",
        team_size: "7",
        highlights: &[
            "Worked as a Front End developer on an Agile/SCRUM development team of 7, creating a mobile and web-based app for running planning poker sessions.",
        ],
    },
];

pub struct SocialLink {
    pub name: &'static str,
    pub link: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Contact",
        link: "/contact",
    },
    SocialLink {
        name: "GitHub",
        link: "https://github.com/YourGitHubUsername",
    },
    SocialLink {
        name: "LinkedIn",
        link: "https://www.linkedin.com/in/YourLinkedInUsername",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_wraps() {
        assert_eq!(Route::Home.next(), Route::About);
        assert_eq!(Route::Contact.next(), Route::Home);
    }

    #[test]
    fn only_the_greeting_has_no_link() {
        let linked = INFO_PANELS.iter().filter(|panel| panel.link.is_some()).count();
        assert_eq!(linked, 3);
        assert!(INFO_PANELS[0].link.is_none());
    }
}
