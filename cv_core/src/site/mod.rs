//! Site variants and the explicit route table the router is built from

pub mod templates;

pub use templates::{NavLink, PageContext};

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SUBMIT_PATH: &str = "/send-email";

/// Mount point of the static asset directory.
pub const STATIC_PATH: &str = "/static";

/// The two layouts of the terminal résumé.
///
/// `Shell` mimics a bare prompt (`whoami`, `ls`, `man`) and asks visitors only
/// for an email and a message. `Terminal` opens on a welcome screen and its
/// contact form also asks for a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteVariant {
    Shell,
    Terminal,
}

impl SiteVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteVariant::Shell => "shell",
            SiteVariant::Terminal => "terminal",
        }
    }
}

impl fmt::Display for SiteVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    ShellIndex,
    Whoami,
    Ls,
    Man,
    Welcome,
    TerminalHome,
    About,
    Projects,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRoute {
    pub path: &'static str,
    pub label: &'static str,
    pub page: Page,
}

impl PageRoute {
    const fn new(path: &'static str, label: &'static str, page: Page) -> Self {
        Self { path, label, page }
    }
}

const SHELL_PAGES: [PageRoute; 4] = [
    PageRoute::new("/", "~", Page::ShellIndex),
    PageRoute::new("/whoami", "whoami", Page::Whoami),
    PageRoute::new("/ls", "ls", Page::Ls),
    PageRoute::new("/man", "man", Page::Man),
];

const TERMINAL_PAGES: [PageRoute; 5] = [
    PageRoute::new("/", "welcome", Page::Welcome),
    PageRoute::new("/terminal", "terminal", Page::TerminalHome),
    PageRoute::new("/about", "about", Page::About),
    PageRoute::new("/projects", "projects", Page::Projects),
    PageRoute::new("/contact", "contact", Page::Contact),
];

/// Every GET page of a variant plus the path the contact form posts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    pub variant: SiteVariant,
    pub pages: Vec<PageRoute>,
    pub submit_path: &'static str,
}

impl RouteTable {
    pub fn for_variant(variant: SiteVariant) -> Self {
        let pages = match variant {
            SiteVariant::Shell => SHELL_PAGES.to_vec(),
            SiteVariant::Terminal => TERMINAL_PAGES.to_vec(),
        };

        Self {
            variant,
            pages,
            submit_path: SUBMIT_PATH,
        }
    }

    pub fn nav_for(&self, current: &str) -> Vec<NavLink> {
        self.pages
            .iter()
            .map(|route| NavLink {
                path: route.path,
                label: route.label,
                active: route.path == current,
            })
            .collect()
    }
}
